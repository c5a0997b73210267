/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : Network - 顶层层序列的聚合统计与可序列化描述
 */

use crate::nn::{Dims, LayerEnum, TraitForLayer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 网络：有序的顶层层序列
///
/// 各层的输入尺寸由装配方（模型构建函数）按"上一层输出即下一层输入"接线；
/// 本结构只负责聚合统计与报表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    name: String,
    layers: Vec<LayerEnum>,
}

impl Network {
    /// 创建空网络
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            layers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 追加一个顶层层（任意层变体经 `Into<LayerEnum>` 收编）
    pub fn push(&mut self, layer: impl Into<LayerEnum>) {
        self.layers.push(layer.into());
    }

    /// 按装配顺序排列的全部顶层层
    pub fn layers(&self) -> &[LayerEnum] {
        &self.layers
    }

    /// 网络输出尺寸（最后一层的输出；空网络为 None）
    pub fn output_dims(&self) -> Option<Dims> {
        self.layers.last().map(TraitForLayer::output_dims)
    }

    /// 全网MAC总数（每次查询重新遍历求和）
    pub fn num_macs(&self) -> usize {
        self.layers.iter().map(TraitForLayer::num_macs).sum()
    }

    /// 全网可学习参数总数
    pub fn param_count(&self) -> usize {
        self.layers.iter().map(TraitForLayer::param_count).sum()
    }

    /// 各顶层层的MAC占比（百分数，按装配顺序）
    ///
    /// 总MAC为0时全部记0，不做除零。
    pub fn mac_percentages(&self) -> Vec<(String, f64)> {
        let total = self.num_macs();
        self.layers
            .iter()
            .map(|layer| {
                let share = if total == 0 {
                    0.0
                } else {
                    layer.num_macs() as f64 / total as f64 * 100.0
                };
                (layer.name().to_string(), share)
            })
            .collect()
    }

    /// 生成可序列化的网络描述（调试输出、持久化对账用）
    pub fn descriptor(&self) -> NetworkDescriptor {
        NetworkDescriptor {
            version: "1.0".to_string(),
            name: self.name.clone(),
            num_macs: self.num_macs(),
            param_count: self.param_count(),
            layers: self
                .layers
                .iter()
                .map(|layer| LayerDescriptor {
                    name: layer.name().to_string(),
                    layer_type: layer.layer_type().to_string(),
                    input_dims: layer.input_dims(),
                    output_dims: layer.output_dims(),
                    num_macs: layer.num_macs(),
                    param_count: layer.param_count(),
                })
                .collect(),
        }
    }

    /// 网络描述的JSON文本
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.descriptor())
    }
}

impl fmt::Display for Network {
    /// 逐层输出报表块（与各层 `Display` 相同的四行格式）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}

/// 网络的可序列化描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 网络名称
    pub name: String,
    /// MAC总数
    pub num_macs: usize,
    /// 参数总数
    pub param_count: usize,
    /// 各顶层层描述（按装配顺序）
    pub layers: Vec<LayerDescriptor>,
}

/// 单个顶层层的描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub name: String,
    pub layer_type: String,
    pub input_dims: Dims,
    pub output_dims: Dims,
    pub num_macs: usize,
    pub param_count: usize,
}
