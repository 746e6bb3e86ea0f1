// ==========================================
// 零售定价计算系统 - 配置层
// ==========================================
// 职责: 运行时配置，支持文件与环境变量覆写
// ==========================================

pub mod pricing_config;

// 重导出核心配置
pub use pricing_config::{config_keys, ConfigError, PricingConfig};
