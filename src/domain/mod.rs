// ==========================================
// 零售定价计算系统 - 领域模型层
// ==========================================
// 职责: 定义定价实体、表格实体与领域类型
// 红线: 不含计算逻辑，不含文件编解码
// ==========================================

pub mod pricing;
pub mod sheet;
pub mod types;

// 重导出核心类型
pub use pricing::{BatchResultRecord, PricingInput, PricingResult};
pub use sheet::{CellValue, RawSheet, TabularRecord, TabularSheet};
pub use types::{CanonicalField, DivergencePolicy, ProfitMode};
