/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : DepthwiseConv2d (深度可分离卷积的depthwise部分) 层的代价模型
 *
 * 输出尺寸与 Conv2d 同式；代价公式去掉输入通道因子：
 * MACs   = H' * W' * kernel^2 * num_filters
 * Params = kernel^2 * 1 * num_filters
 */

use super::conv2d::compute_conv_output;
use super::{TraitForLayer, check_at_least_one};
use crate::errors::LayerError;
use crate::nn::Dims;
use serde::{Deserialize, Serialize};

/// DepthwiseConv2d 层：每个输出通道只接触一个输入通道，不做通道混合
///
/// 与同参数的 [`super::Conv2d`] 相比，MAC数恰好少一个 `C_in` 因子
/// （滤波器深度为1）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthwiseConv2d {
    name: String,
    input: Dims,
    output: Dims,
    num_filters: usize,
    kernel_size: usize,
    stride: usize,
    padding: usize,
}

impl DepthwiseConv2d {
    /// 创建新的 DepthwiseConv2d 层
    ///
    /// 参数与校验同 [`super::Conv2d::new`]；输出尺寸算式也相同，
    /// 差异只在MAC与参数计数。
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

    /// 滤波器张量的四元尺寸 (高, 宽, 1, 个数)，深度恒为1
    pub fn filter_dims(&self) -> (usize, usize, usize, usize) {
        (self.kernel_size, self.kernel_size, 1, self.num_filters)
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

impl TraitForLayer for DepthwiseConv2d {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_dims(&self) -> Dims {
        self.input
    }

    fn output_dims(&self) -> Dims {
        self.output
    }

    /// MACs = H' * W' * kernel^2 * num_filters（无输入通道因子）
    fn num_macs(&self) -> usize {
        let macs_per_filter = self.kernel_size * self.kernel_size;
        self.output.height * self.output.width * macs_per_filter * self.num_filters
    }

    fn param_count(&self) -> usize {
        let (h, w, c, n) = self.filter_dims();
        h * w * c * n
    }

    fn layer_type(&self) -> &'static str {
        "DepthwiseConv2d"
    }
}
