/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : 负责网络代价模型（layer/network）的构建与统计
 */

mod dims;
mod display;
pub mod layers;
pub mod models;
mod network;

pub use dims::{Dims, calculate_same_padding};
pub(in crate::nn) use display::format_layer_display;
pub use layers::{
    AvgPool2d, BottleNeck, Conv2d, DepthwiseConv2d, Identity, InvertedResidualBlock, LayerEnum,
    TraitForLayer,
};
pub use network::{LayerDescriptor, Network, NetworkDescriptor};

#[cfg(test)]
mod tests;
