/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : BottleNeck (倒残差单元) 单元测试
 *
 * 参考常量均按各层闭式公式手工推算，算式见常量旁注释
 */

use crate::errors::LayerError;
use crate::nn::{BottleNeck, Dims, TraitForLayer};

// ==================== 参考常量 ====================

// input=(112,112,32), f=16, s=1, e=1 (MobileNetV2 的 BottleNeck_1)
const REF_EXPANSION_MACS: usize = 12_845_056; // 112*112*1*1*32*32
const REF_DEPTHWISE_MACS: usize = 3_612_672; // 112*112*3*3*32
const REF_PROJECTION_MACS: usize = 6_422_528; // 112*112*1*1*32*16
const REF_UNIT_MACS: usize = 22_880_256;
const REF_UNIT_PARAMS: usize = 1_824; // 1024 + 288 + 512

// ==================== 参考值对照测试 ====================

/// 测试三个子层的链接与MAC合计（参考值对照）
#[test]
fn test_bottleneck_sublayer_chain() -> Result<(), LayerError> {
    let unit = BottleNeck::new("BottleNeck_1", Dims::new(112, 112, 32), 16, 1, 1)?;

    // 扩张: 1x1, 滤波器数 = C_in * e
    assert_eq!(unit.expansion_conv().name(), "BottleNeck_1/Conv2D_1_1x1");
    assert_eq!(unit.expansion_conv().num_filters(), 32);
    assert_eq!(unit.expansion_conv().num_macs(), REF_EXPANSION_MACS);

    // 深度卷积: 3x3, stride作用于此, padding = same_padding(stride).0
    assert_eq!(unit.depthwise_conv().name(), "BottleNeck_1/DepthWiseConv2D");
    assert_eq!(unit.depthwise_conv().kernel_size(), 3);
    assert_eq!(unit.depthwise_conv().padding(), 1);
    assert_eq!(unit.depthwise_conv().num_macs(), REF_DEPTHWISE_MACS);

    // 投影: 1x1, 滤波器数 = num_filters
    assert_eq!(unit.projection_conv().name(), "BottleNeck_1/Conv2D_2_1x1");
    assert_eq!(unit.projection_conv().num_macs(), REF_PROJECTION_MACS);

    // 子层输入输出首尾相接
    assert_eq!(
        unit.depthwise_conv().input_dims(),
        unit.expansion_conv().output_dims()
    );
    assert_eq!(
        unit.projection_conv().input_dims(),
        unit.depthwise_conv().output_dims()
    );

    assert_eq!(unit.num_macs(), REF_UNIT_MACS);
    assert_eq!(unit.param_count(), REF_UNIT_PARAMS);
    assert_eq!(unit.output_dims(), Dims::new(112, 112, 16));

    println!("✅ BottleNeck 子层链接与MAC/参数合计与手算参考值一致");
    Ok(())
}

/// 测试输出通道数恒等于投影滤波器数（与输入通道/扩张因子无关）
#[test]
fn test_bottleneck_output_channels() -> Result<(), LayerError> {
    for &(channels, expansion_factor) in &[(16usize, 1usize), (24, 6), (96, 6), (320, 2)] {
        let unit = BottleNeck::new(
            "unit",
            Dims::new(28, 28, channels),
            64,
            1,
            expansion_factor,
        )?;
        assert_eq!(unit.output_dims().channels, 64);
    }

    println!("✅ BottleNeck 输出通道数恒等于投影滤波器数");
    Ok(())
}

/// 测试 stride=2 时深度卷积把空间尺寸减半
#[test]
fn test_bottleneck_strided() -> Result<(), LayerError> {
    let unit = BottleNeck::new("unit", Dims::new(112, 112, 16), 24, 2, 6)?;

    // same_padding(2) 的前侧值也是1
    assert_eq!(unit.depthwise_conv().padding(), 1);
    assert_eq!(unit.depthwise_conv().stride(), 2);
    assert_eq!(unit.output_dims(), Dims::new(56, 56, 24));
    assert_eq!(unit.num_macs(), 29_202_432);

    println!("✅ stride=2 的 BottleNeck 空间尺寸减半");
    Ok(())
}

/// 测试任一子层构建失败即中止整个单元
#[test]
fn test_bottleneck_invalid_params_rejected() {
    assert_eq!(
        BottleNeck::new("bad", Dims::new(28, 28, 16), 64, 0, 6).unwrap_err(),
        LayerError::InvalidHyperParam {
            layer_name: "bad".to_string(),
            param_name: "stride",
        }
    );
    assert!(BottleNeck::new("bad", Dims::new(28, 28, 16), 64, 1, 0).is_err());
    assert!(BottleNeck::new("bad", Dims::new(28, 28, 16), 0, 1, 6).is_err());

    println!("✅ BottleNeck 超参数非法时整体fail-fast");
}
