/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : BottleNeck (倒残差单元) 复合层
 *
 * 结构（顺序链接，上一步输出即下一步输入）：
 * 1x1 扩张卷积 (C_in * expansion_factor 个滤波器)
 *   → 3x3 深度卷积 (stride 作用于此)
 *   → 1x1 投影卷积 (num_filters 个滤波器)
 */

use super::{Conv2d, DepthwiseConv2d, TraitForLayer, check_at_least_one};
use crate::errors::LayerError;
use crate::nn::{Dims, calculate_same_padding};
use serde::{Deserialize, Serialize};

/// BottleNeck（倒残差单元）：扩张 → 深度卷积 → 投影
///
/// 三个子层由本单元独占持有，输出尺寸取投影层输出，MAC/参数为三者之和。
///
/// 深度卷积的padding取 `calculate_same_padding(stride)` 的前侧值——
/// 由 **stride** 而非3x3卷积核导出（对stride=1/2结果均为1）；
/// 改用卷积核导出会改变整个模型的MAC统计口径。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottleNeck {
    name: String,
    input: Dims,
    output: Dims,
    /// 扩张因子：乘在输入通道数上得到中间表示的宽度
    expansion_factor: usize,
    conv1: Conv2d,
    depthwise: DepthwiseConv2d,
    conv2: Conv2d,
}

impl BottleNeck {
    /// 创建新的 BottleNeck 单元
    ///
    /// # 参数
    /// - `name`: 层名称（子层名在其下加 `/` 后缀）
    /// - `input`: 输入尺寸 [H, W, C]
    /// - `num_filters`: 投影层滤波器个数，即单元输出通道数（≥1）
    /// - `stride`: 深度卷积步长（≥1）
    /// - `expansion_factor`: 扩张因子（≥1）
    ///
    /// # 错误
    /// 任一子层构建失败即中止整个单元的构建，不产生半成品。
    pub fn new(
        name: &str,
        input: Dims,
        num_filters: usize,
        stride: usize,
        expansion_factor: usize,
    ) -> Result<Self, LayerError> {
        check_at_least_one(name, "stride", stride)?;
        check_at_least_one(name, "expansion_factor", expansion_factor)?;

        let (pad_before, _pad_after) = calculate_same_padding(stride);
        let expanded_channels = input.channels * expansion_factor;

        let conv1 = Conv2d::new(
            &format!("{name}/Conv2D_1_1x1"),
            input,
            expanded_channels,
            1,
            1,
            0,
        )?;
        let depthwise = DepthwiseConv2d::new(
            &format!("{name}/DepthWiseConv2D"),
            conv1.output_dims(),
            expanded_channels,
            3,
            stride,
            pad_before,
        )?;
        let conv2 = Conv2d::new(
            &format!("{name}/Conv2D_2_1x1"),
            depthwise.output_dims(),
            num_filters,
            1,
            1,
            0,
        )?;
        let output = conv2.output_dims();

        Ok(Self {
            name: name.to_string(),
            input,
            output,
            expansion_factor,
            conv1,
            depthwise,
            conv2,
        })
    }

    pub fn expansion_factor(&self) -> usize {
        self.expansion_factor
    }

    /// 1x1 扩张卷积子层
    pub fn expansion_conv(&self) -> &Conv2d {
        &self.conv1
    }

    /// 3x3 深度卷积子层
    pub fn depthwise_conv(&self) -> &DepthwiseConv2d {
        &self.depthwise
    }

    /// 1x1 投影卷积子层
    pub fn projection_conv(&self) -> &Conv2d {
        &self.conv2
    }
}

impl TraitForLayer for BottleNeck {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_dims(&self) -> Dims {
        self.input
    }

    fn output_dims(&self) -> Dims {
        self.output
    }

    /// 三个子层MAC之和
    fn num_macs(&self) -> usize {
        self.conv1.num_macs() + self.depthwise.num_macs() + self.conv2.num_macs()
    }

    /// 三个子层参数之和（子层由构建保证存在，无需判空）
    fn param_count(&self) -> usize {
        self.conv1.param_count() + self.depthwise.param_count() + self.conv2.param_count()
    }

    fn layer_type(&self) -> &'static str {
        "BottleNeck"
    }
}
