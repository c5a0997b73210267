/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : AvgPool2d (2D 平均池化) 层的代价模型
 *
 * 本模型只支持无填充池化；池化代价视为可忽略，MAC计0。
 *
 * 输出尺寸计算：
 * H' = (H - kernel) / stride + 1
 * W' = (W - kernel) / stride + 1
 * C' = C（通道数不变）
 */

use super::{TraitForLayer, check_at_least_one};
use crate::errors::LayerError;
use crate::nn::Dims;
use crate::nn::dims::conv_output_side;
use serde::{Deserialize, Serialize};

/// AvgPool2d 层：只改变空间尺寸，保持通道数；0 MAC，0 参数
///
/// # 使用示例
/// ```
/// use macnet::nn::{AvgPool2d, Dims, TraitForLayer};
///
/// // 典型用法：全局平均池化
/// let gap = AvgPool2d::new("AvgPooling", Dims::new(7, 7, 1280), 7, 1)?;
/// assert_eq!(gap.output_dims(), Dims::new(1, 1, 1280));
/// assert_eq!(gap.num_macs(), 0);
/// # Ok::<(), macnet::errors::LayerError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvgPool2d {
    name: String,
    input: Dims,
    output: Dims,
    kernel_size: usize,
    stride: usize,
}

impl AvgPool2d {
    /// 创建新的 AvgPool2d 层
    ///
    /// # 参数
    /// - `name`: 层名称
    /// - `input`: 输入尺寸 [H, W, C]
    /// - `kernel_size`: 池化窗口边长（≥1）
    /// - `stride`: 步长（≥1）
    pub fn new(
        name: &str,
        input: Dims,
        kernel_size: usize,
        stride: usize,
    ) -> Result<Self, LayerError> {
        check_at_least_one(name, "kernel_size", kernel_size)?;
        check_at_least_one(name, "stride", stride)?;

        let degenerate = || LayerError::DegenerateOutputSize {
            layer_name: name.to_string(),
            input,
            kernel_size,
            stride,
            padding: 0,
        };
        let height = conv_output_side(input.height, kernel_size, stride, 0).ok_or_else(degenerate)?;
        let width = conv_output_side(input.width, kernel_size, stride, 0).ok_or_else(degenerate)?;
        let output = Dims::new(height, width, input.channels);

        Ok(Self {
            name: name.to_string(),
            input,
            output,
            kernel_size,
            stride,
        })
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl TraitForLayer for AvgPool2d {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_dims(&self) -> Dims {
        self.input
    }

    fn output_dims(&self) -> Dims {
        self.output
    }

    // num_macs / param_count 取接口默认值0：池化无权重，代价不计入

    fn layer_type(&self) -> &'static str {
        "AvgPool2d"
    }
}
