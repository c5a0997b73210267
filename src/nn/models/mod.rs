/*
 * @Author       : 老董
 * @Date         : 2026-08-30
 * @Description  : Models 模块 - 以显式构建函数表达的具名网络拓扑
 */

mod mobilenet_v2;

pub use mobilenet_v2::mobilenet_v2;
