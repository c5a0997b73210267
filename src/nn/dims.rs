/*
 * Dims: 特征图尺寸三元组（高x宽x通道）与卷积尺寸算术
 *
 * 所有层的输出尺寸推导都经由本模块的两条算式：
 * - 带填充卷积：out = (in - kernel + 2*padding) / stride + 1（向下取整）
 * - 无填充池化：out = (in - kernel) / stride + 1
 *
 * # 示例
 * ```
 * use macnet::nn::{Dims, calculate_same_padding};
 *
 * let input = Dims::new(224, 224, 3);
 * assert_eq!(input.to_string(), "224x224x3");
 *
 * // same padding：前侧向上取整，后侧向下取整
 * assert_eq!(calculate_same_padding(3), (2, 1));
 * ```
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// 特征图尺寸：高、宽、通道数
///
/// 每层构建时冻结输入尺寸并推导输出尺寸；下一层以上一层的输出尺寸作为输入。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl Dims {
    /// 创建一个尺寸三元组
    pub const fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// 元素总数（高x宽x通道）
    pub const fn num_elems(&self) -> usize {
        self.height * self.width * self.channels
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}

/// 计算same padding的前/后两侧填充量
///
/// 返回 `(pad_before, pad_after)`，其中：
/// - `pad_before = ceil(kernel_size / 2)`
/// - `pad_after  = floor(kernel_size / 2)`
/// - 两者之和恒等于 `kernel_size`
///
/// 现有各调用方只取前侧值（对称填充进入输出尺寸算式），后侧值保留备用。
pub fn calculate_same_padding(kernel_size: usize) -> (usize, usize) {
    (kernel_size.div_ceil(2), kernel_size / 2)
}

/// 单边卷积输出尺寸：`(in - kernel + 2*padding) / stride + 1`（向下取整）
///
/// 当 `in + 2*padding < kernel` 时输出退化为非正值，返回 `None`，
/// 由调用方转成 [`crate::errors::LayerError::DegenerateOutputSize`]。
/// 池化取 `padding = 0` 即为无填充形式。
pub(in crate::nn) fn conv_output_side(
    input: usize,
    kernel_size: usize,
    stride: usize,
    padding: usize,
) -> Option<usize> {
    let padded = input + 2 * padding;
    if padded < kernel_size {
        return None;
    }
    Some((padded - kernel_size) / stride + 1)
}
