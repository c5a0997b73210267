/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : InvertedResidualBlock (重复倒残差块) 复合层
 *
 * 按序链接 n_repeat 个 BottleNeck：首个单元用调用方的 stride，
 * 其余单元一律 stride=1；每个单元的输入即上一单元的输出。
 */

use super::{BottleNeck, TraitForLayer, check_at_least_one};
use crate::errors::LayerError;
use crate::nn::Dims;
use serde::{Deserialize, Serialize};

/// InvertedResidualBlock：N个BottleNeck的顺序组合
///
/// 所有单元共用同一组 `num_filters` / `expansion_factor`；
/// 块输出尺寸取最后一个单元的输出。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvertedResidualBlock {
    name: String,
    input: Dims,
    output: Dims,
    expansion_factor: usize,
    n_repeat: usize,
    bottlenecks: Vec<BottleNeck>,
}

impl InvertedResidualBlock {
    /// 创建新的 InvertedResidualBlock
    ///
    /// # 参数
    /// - `name`: 层名称（单元名为 `{name}/BottleNeck_{i}`）
    /// - `input`: 输入尺寸 [H, W, C]
    /// - `num_filters`: 每个单元的输出通道数（≥1）
    /// - `stride`: 首个单元的步长（≥1），后续单元恒为1
    /// - `expansion_factor`: 扩张因子（≥1）
    /// - `n_repeat`: 单元重复次数（≥1）
    pub fn new(
        name: &str,
        input: Dims,
        num_filters: usize,
        stride: usize,
        expansion_factor: usize,
        n_repeat: usize,
    ) -> Result<Self, LayerError> {
        check_at_least_one(name, "n_repeat", n_repeat)?;

        let mut bottlenecks = Vec::with_capacity(n_repeat);
        let mut next_input = input;
        for i in 0..n_repeat {
            let unit_stride = if i == 0 { stride } else { 1 };
            let unit = BottleNeck::new(
                &format!("{name}/BottleNeck_{i}"),
                next_input,
                num_filters,
                unit_stride,
                expansion_factor,
            )?;
            next_input = unit.output_dims();
            bottlenecks.push(unit);
        }
        let output = next_input;

        Ok(Self {
            name: name.to_string(),
            input,
            output,
            expansion_factor,
            n_repeat,
            bottlenecks,
        })
    }

    pub fn expansion_factor(&self) -> usize {
        self.expansion_factor
    }

    pub fn n_repeat(&self) -> usize {
        self.n_repeat
    }

    /// 按构建顺序排列的全部单元
    pub fn bottlenecks(&self) -> &[BottleNeck] {
        &self.bottlenecks
    }
}

impl TraitForLayer for InvertedResidualBlock {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_dims(&self) -> Dims {
        self.input
    }

    fn output_dims(&self) -> Dims {
        self.output
    }

    /// 每次查询都重新遍历单元序列求和，不做缓存
    fn num_macs(&self) -> usize {
        self.bottlenecks.iter().map(TraitForLayer::num_macs).sum()
    }

    fn param_count(&self) -> usize {
        self.bottlenecks
            .iter()
            .map(TraitForLayer::param_count)
            .sum()
    }

    fn layer_type(&self) -> &'static str {
        "InvertedResidualBlock"
    }
}
