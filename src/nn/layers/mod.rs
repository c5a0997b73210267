/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : Layer 模块 - 封闭的层变体集合与统一的代价接口
 *
 * 层的多态通过 enum_dispatch 的封闭和类型实现：复合层按值持有子层，
 * 生命周期随复合层一起结束，不存在共享指针。
 */

mod avg_pool2d;
mod bottleneck;
mod conv2d;
mod depthwise_conv2d;
mod identity;
mod inverted_residual_block;

pub use avg_pool2d::AvgPool2d;
pub use bottleneck::BottleNeck;
pub use conv2d::Conv2d;
pub use depthwise_conv2d::DepthwiseConv2d;
pub use identity::Identity;
pub use inverted_residual_block::InvertedResidualBlock;

use crate::errors::LayerError;
use crate::nn::{Dims, format_layer_display};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

#[enum_dispatch]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerEnum {
    Identity,
    Conv2d,
    DepthwiseConv2d,
    AvgPool2d,
    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓复合层↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    BottleNeck,
    InvertedResidualBlock,
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑复合层↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
}

/// 所有层变体共享的代价接口
///
/// 构建后所有取值都是冻结值或纯重推导，重复查询结果恒定。
#[enum_dispatch(LayerEnum)]
pub trait TraitForLayer {
    /// 层名称（仅用于报表归属，唯一性不做强制）
    fn name(&self) -> &str;
    /// 输入尺寸（构建时冻结）
    fn input_dims(&self) -> Dims;
    /// 输出尺寸（默认恒等直通）
    fn output_dims(&self) -> Dims {
        self.input_dims()
    }
    /// 乘加次数（默认0）
    fn num_macs(&self) -> usize {
        0
    }
    /// 可学习参数个数（默认0）
    fn param_count(&self) -> usize {
        0
    }
    /// 层类型名（报表与描述符用）
    fn layer_type(&self) -> &'static str;
}

impl fmt::Display for LayerEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_layer_display(
                self.name(),
                self.input_dims(),
                self.output_dims(),
                self.num_macs()
            )
        )
    }
}

/// 校验必须≥1的超参数
pub(in crate::nn) fn check_at_least_one(
    layer_name: &str,
    param_name: &'static str,
    value: usize,
) -> Result<(), LayerError> {
    if value == 0 {
        return Err(LayerError::InvalidHyperParam {
            layer_name: layer_name.to_string(),
            param_name,
        });
    }
    Ok(())
}
