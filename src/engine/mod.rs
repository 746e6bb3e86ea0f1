// ==========================================
// 零售定价计算系统 - 引擎层
// ==========================================
// 职责: 定价计算、舍入、批量处理
// 红线: 引擎无状态，不做文件 I/O，不缓存计算结果
// ==========================================

pub mod batch;
pub mod calculator;
pub mod rounding;

// 重导出核心引擎
pub use batch::{BatchProcessor, DEFAULT_PROFIT_PERCENT};
pub use calculator::PricingCalculator;
pub use rounding::{RoundingPolicy, PRECISION};
