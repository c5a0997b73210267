/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : 层构建错误类型
 */

use crate::nn::Dims;
use thiserror::Error;

/// 层构建错误
///
/// 所有层都在构建期一次性校验并冻结结果，失败即中止该实体的构建（fail-fast），
/// 不会产生半成品层。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayerError {
    // 必须≥1的超参数（kernel_size、stride、num_filters、expansion_factor、n_repeat）为0
    #[error("层`{layer_name}`：超参数`{param_name}`必须≥1")]
    InvalidHyperParam {
        layer_name: String,
        param_name: &'static str,
    },

    // 按给定超参数推导出的输出空间尺寸非正，代价模型失去意义
    #[error(
        "层`{layer_name}`：输出空间尺寸退化为非正值（输入{input}，kernel={kernel_size}，stride={stride}，padding={padding}）"
    )]
    DegenerateOutputSize {
        layer_name: String,
        input: Dims,
        kernel_size: usize,
        stride: usize,
        padding: usize,
    },
}
