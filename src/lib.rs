//! # MacNet
//!
//! `macnet`项目用闭式算式静态估算MobileNetV2风格卷积网络的乘加（MAC）运算量与参数量：
//! 仅凭各层声明的超参数（卷积核、步长、填充、通道数、滤波器数、重复次数）逐层推导
//! 输出尺寸并累加代价，不做任何张量计算与训练。
//!

pub mod errors;
pub mod nn;
