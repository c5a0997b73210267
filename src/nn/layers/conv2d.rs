/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : Conv2d (2D 稠密卷积) 层的代价模型
 *
 * 输出尺寸计算：
 * H' = (H - kernel + 2*padding) / stride + 1
 * W' = (W - kernel + 2*padding) / stride + 1
 * C' = num_filters
 *
 * 代价：
 * MACs   = H' * W' * kernel^2 * C_in * num_filters
 * Params = kernel^2 * C_in * num_filters
 */

use super::{TraitForLayer, check_at_least_one};
use crate::errors::LayerError;
use crate::nn::Dims;
use crate::nn::dims::conv_output_side;
use serde::{Deserialize, Serialize};

/// Conv2d (2D 稠密卷积) 层
///
/// 每个滤波器覆盖全部输入通道。正方形卷积核，单一标量padding对称作用于两侧。
///
/// # 输出尺寸计算
/// ```text
/// H' = (H - kernel + 2*padding) / stride + 1
/// W' = (W - kernel + 2*padding) / stride + 1
/// ```
///
/// # 使用示例
/// ```
/// use macnet::nn::{Conv2d, Dims, TraitForLayer};
///
/// let conv = Conv2d::new("Conv2D_1", Dims::new(224, 224, 3), 32, 3, 2, 1)?;
/// assert_eq!(conv.output_dims(), Dims::new(112, 112, 32));
/// assert_eq!(conv.num_macs(), 10_838_016);
/// # Ok::<(), macnet::errors::LayerError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conv2d {
    /// 层名称
    name: String,
    /// 输入尺寸 [H, W, C]
    input: Dims,
    /// 输出尺寸 [H', W', num_filters]（构建时推导并冻结）
    output: Dims,
    /// 滤波器个数（即输出通道数）
    num_filters: usize,
    /// 卷积核边长（正方形）
    kernel_size: usize,
    /// 步长
    stride: usize,
    /// 两侧对称填充量
    padding: usize,
}

impl Conv2d {
    /// 创建新的 Conv2d 层
    ///
    /// 两阶段构建：先收齐全部超参数与输入尺寸，再一次性推导输出尺寸并冻结。
    ///
    /// # 参数
    /// - `name`: 层名称
    /// - `input`: 输入尺寸 [H, W, C]
    /// - `num_filters`: 滤波器个数（≥1）
    /// - `kernel_size`: 卷积核边长（≥1）
    /// - `stride`: 步长（≥1）
    /// - `padding`: 两侧对称填充量（可为0）
    ///
    /// # 错误
    /// - [`LayerError::InvalidHyperParam`]: 某个必须≥1的超参数为0
    /// - [`LayerError::DegenerateOutputSize`]: 推导出的输出空间尺寸非正
    pub fn new(
        name: &str,
        input: Dims,
        num_filters: usize,
        kernel_size: usize,
        stride: usize,
        padding: usize,
    ) -> Result<Self, LayerError> {
        check_at_least_one(name, "num_filters", num_filters)?;
        check_at_least_one(name, "kernel_size", kernel_size)?;
        check_at_least_one(name, "stride", stride)?;

        let output = compute_conv_output(name, input, num_filters, kernel_size, stride, padding)?;

        Ok(Self {
            name: name.to_string(),
            input,
            output,
            num_filters,
            kernel_size,
            stride,
            padding,
        })
    }

    /// 滤波器张量的四元尺寸 (高, 宽, 通道, 个数)
    pub fn filter_dims(&self) -> (usize, usize, usize, usize) {
        (
            self.kernel_size,
            self.kernel_size,
            self.input.channels,
            self.num_filters,
        )
    }

    pub fn num_filters(&self) -> usize {
        self.num_filters
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn padding(&self) -> usize {
        self.padding
    }
}

impl TraitForLayer for Conv2d {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_dims(&self) -> Dims {
        self.input
    }

    fn output_dims(&self) -> Dims {
        self.output
    }

    /// MACs = H' * W' * kernel^2 * C_in * num_filters
    fn num_macs(&self) -> usize {
        let macs_per_filter = self.kernel_size * self.kernel_size * self.input.channels;
        self.output.height * self.output.width * macs_per_filter * self.num_filters
    }

    /// 权重张量元素总数，与输出空间尺寸无关
    fn param_count(&self) -> usize {
        let (h, w, c, n) = self.filter_dims();
        h * w * c * n
    }

    fn layer_type(&self) -> &'static str {
        "Conv2d"
    }
}

/// 稠密/深度卷积共用的输出尺寸推导
pub(super) fn compute_conv_output(
    name: &str,
    input: Dims,
    num_filters: usize,
    kernel_size: usize,
    stride: usize,
    padding: usize,
) -> Result<Dims, LayerError> {
    let degenerate = || LayerError::DegenerateOutputSize {
        layer_name: name.to_string(),
        input,
        kernel_size,
        stride,
        padding,
    };
    let height = conv_output_side(input.height, kernel_size, stride, padding).ok_or_else(degenerate)?;
    let width = conv_output_side(input.width, kernel_size, stride, padding).ok_or_else(degenerate)?;
    Ok(Dims::new(height, width, num_filters))
}
