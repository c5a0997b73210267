/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : Identity（恒等）层 - 尺寸直通，零代价
 */

use super::TraitForLayer;
use crate::nn::Dims;
use serde::{Deserialize, Serialize};

/// 恒等层：输出尺寸等于输入尺寸，0 MAC，0 参数
///
/// 作为层集合的基准变体存在，MAC与参数计数均取接口默认值。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    name: String,
    input: Dims,
}

impl Identity {
    /// 创建恒等层（构建必然成功，无超参数可校验）
    pub fn new(name: &str, input: Dims) -> Self {
        Self {
            name: name.to_string(),
            input,
        }
    }
}

impl TraitForLayer for Identity {
    fn name(&self) -> &str {
        &self.name
    }

    fn input_dims(&self) -> Dims {
        self.input
    }

    fn layer_type(&self) -> &'static str {
        "Identity"
    }
}
