/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : MobileNetV2 拓扑装配
 *
 * 网络结构（输入 224x224x3）：
 * Conv2D_1 (32@3x3, s=2, p=1) → [112, 112, 32]
 *     ↓
 * BottleNeck_1 (f=16,  e=1, n=1, s=1) → [112, 112, 16]
 * BottleNeck_2 (f=24,  e=6, n=2, s=2) → [56, 56, 24]
 * BottleNeck_3 (f=32,  e=6, n=3, s=2) → [28, 28, 32]
 * BottleNeck_4 (f=64,  e=6, n=4, s=2) → [14, 14, 64]
 * BottleNeck_5 (f=96,  e=6, n=3, s=1) → [14, 14, 96]
 * BottleNeck_6 (f=160, e=6, n=3, s=2) → [7, 7, 160]
 * BottleNeck_7 (f=320, e=6, n=1, s=1) → [7, 7, 320]
 *     ↓
 * Conv2D_2 (1280@1x1) → [7, 7, 1280]
 * AvgPooling (7x7, s=1) → [1, 1, 1280]
 * Conv2D_3 (num_classes@1x1) → [1, 1, num_classes]
 */

use crate::errors::LayerError;
use crate::nn::{AvgPool2d, Conv2d, Dims, InvertedResidualBlock, Network, TraitForLayer};

/// 各倒残差块的超参数表：(滤波器数, 扩张因子, 重复次数, 首个stride)
const BOTTLENECK_TABLE: [(usize, usize, usize, usize); 7] = [
    (16, 1, 1, 1),
    (24, 6, 2, 2),
    (32, 6, 3, 2),
    (64, 6, 4, 2),
    (96, 6, 3, 1),
    (160, 6, 3, 2),
    (320, 6, 1, 1),
];

/// 装配 MobileNetV2 的代价模型
///
/// 逐层把上一层的输出尺寸接为下一层的输入尺寸；所有超参数为固定配置常量。
///
/// # 参数
/// - `num_classes`: 分类数（决定末端1x1卷积的滤波器个数，≥1）
///
/// # 示例
/// ```
/// use macnet::nn::models::mobilenet_v2;
///
/// let model = mobilenet_v2(1000)?;
/// assert_eq!(model.num_macs(), 313_619_328);
/// # Ok::<(), macnet::errors::LayerError>(())
/// ```
pub fn mobilenet_v2(num_classes: usize) -> Result<Network, LayerError> {
    let mut net = Network::new("MobileNetV2");
    let input = Dims::new(224, 224, 3);

    let conv1 = Conv2d::new("Conv2D_1", input, 32, 3, 2, 1)?;
    let mut prev = conv1.output_dims();
    net.push(conv1);

    for (i, &(num_filters, expansion_factor, n_repeat, stride)) in
        BOTTLENECK_TABLE.iter().enumerate()
    {
        let block = InvertedResidualBlock::new(
            &format!("BottleNeck_{}", i + 1),
            prev,
            num_filters,
            stride,
            expansion_factor,
            n_repeat,
        )?;
        prev = block.output_dims();
        net.push(block);
    }

    let conv2 = Conv2d::new("Conv2D_2", prev, 1280, 1, 1, 0)?;
    prev = conv2.output_dims();
    net.push(conv2);

    let avgpool = AvgPool2d::new("AvgPooling", prev, 7, 1)?;
    prev = avgpool.output_dims();
    net.push(avgpool);

    let conv3 = Conv2d::new("Conv2D_3", prev, num_classes, 1, 1, 0)?;
    net.push(conv3);

    Ok(net)
}
