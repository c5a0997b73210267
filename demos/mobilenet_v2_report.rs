//! # MobileNetV2 代价报表示例
//!
//! 装配 MobileNetV2 的代价模型并打印：
//! - 全网MAC总量（以百万为单位）
//! - 各顶层层的MAC占比
//! - 逐层统计报表块
//!
//! ## 运行
//! ```bash
//! cargo run --example mobilenet_v2_report
//! ```

use macnet::errors::LayerError;
use macnet::nn::models::mobilenet_v2;

fn main() -> Result<(), LayerError> {
    println!("=== MobileNetV2 MAC 统计报表 ===\n");

    // 1. 装配网络（1000类，ImageNet规格）
    let model = mobilenet_v2(1000)?;

    // 2. 总量
    println!("Number of MMACs: {:.2}M", model.num_macs() as f64 / 1e6);
    println!("Number of Params: {:.2}M\n", model.param_count() as f64 / 1e6);

    // 3. 各顶层层MAC占比
    for (name, share) in model.mac_percentages() {
        println!("{name}: {share:.2}%");
    }
    println!();

    // 4. 逐层报表
    println!("{model}");

    Ok(())
}
