/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : DepthwiseConv2d 层代价模型单元测试
 */

use crate::errors::LayerError;
use crate::nn::{Conv2d, DepthwiseConv2d, Dims, TraitForLayer};

// ==================== 参考常量 ====================

// input=(112,112,32), f=32, k=3, s=1, p=1
const REF_DW_MACS: usize = 3_612_672; // 112*112*3*3*32
const REF_DW_PARAMS: usize = 288; // 3*3*1*32

// ==================== 公式对照测试 ====================

/// 测试 DepthwiseConv2d 输出尺寸与 Conv2d 同式、MAC去掉输入通道因子
#[test]
fn test_depthwise_output_and_macs() -> Result<(), LayerError> {
    let dw = DepthwiseConv2d::new("dw", Dims::new(112, 112, 32), 32, 3, 1, 1)?;

    assert_eq!(dw.output_dims(), Dims::new(112, 112, 32));
    assert_eq!(dw.num_macs(), REF_DW_MACS);
    assert_eq!(dw.param_count(), REF_DW_PARAMS);
    assert_eq!(dw.filter_dims(), (3, 3, 1, 32));

    println!("✅ DepthwiseConv2d 输出尺寸与MAC数与手算参考值一致");
    Ok(())
}

/// 测试同参数下 depthwise 的MAC数恰为稠密卷积的 1/C_in（可整除）
#[test]
fn test_depthwise_vs_standard_ratio() -> Result<(), LayerError> {
    let input = Dims::new(112, 112, 32);
    let standard = Conv2d::new("std", input, 32, 3, 1, 1)?;
    let depthwise = DepthwiseConv2d::new("dw", input, 32, 3, 1, 1)?;

    assert_eq!(standard.output_dims(), depthwise.output_dims());
    assert_eq!(standard.num_macs() % input.channels, 0);
    assert_eq!(depthwise.num_macs(), standard.num_macs() / input.channels);

    println!("✅ depthwise MAC数 = 稠密卷积 / 输入通道数");
    Ok(())
}

/// 测试带stride的depthwise（倒残差单元里的典型配置）
#[test]
fn test_depthwise_strided() -> Result<(), LayerError> {
    let dw = DepthwiseConv2d::new("dw_s2", Dims::new(112, 112, 96), 96, 3, 2, 1)?;
    assert_eq!(dw.output_dims(), Dims::new(56, 56, 96));
    assert_eq!(dw.num_macs(), 56 * 56 * 9 * 96);

    println!("✅ 带stride的depthwise输出与MAC数正确");
    Ok(())
}

/// 测试错误路径与 Conv2d 共享同一套校验
#[test]
fn test_depthwise_invalid_params_rejected() {
    assert!(DepthwiseConv2d::new("bad", Dims::new(8, 8, 3), 3, 3, 0, 1).is_err());
    assert!(DepthwiseConv2d::new("tiny", Dims::new(2, 2, 3), 3, 5, 1, 0).is_err());

    println!("✅ DepthwiseConv2d 校验与 Conv2d 一致");
}
