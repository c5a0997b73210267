/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : 网络各层统计的显示格式化
 */

use super::Dims;

/// 格式化单层统计报表块
///
/// # Arguments
/// * `name` - 层名称
/// * `input` - 输入尺寸
/// * `output` - 输出尺寸
/// * `num_macs` - 乘加次数
///
/// # Returns
/// 四行文本：层名、输入尺寸、输出尺寸、以百万为单位的MAC数（保留两位小数）
pub(in crate::nn) fn format_layer_display(
    name: &str,
    input: Dims,
    output: Dims,
    num_macs: usize,
) -> String {
    format!(
        "Layer: {name}\nInput Size: {input}\nOutput Size: {output}\nNumber of MMACs: {:.2}M",
        num_macs as f64 / 1e6
    )
}
