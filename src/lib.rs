// ==========================================
// 零售定价计算系统 - 核心库
// ==========================================
// 职责: 由成本、损耗、固定费用与目标利润计算零售售价
// 形态: 单品手工计算 / 表格批量计算 / 结果导出
// 红线: 核心计算无状态、同步、无持久化
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 导入层 - 表格解析与字段映射
pub mod importer;

// 导出层 - 结果序列化与写出
pub mod exporter;

// 配置层 - 运行时配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BatchResultRecord, CanonicalField, CellValue, DivergencePolicy, PricingInput, PricingResult,
    ProfitMode, RawSheet, TabularRecord, TabularSheet,
};

// 引擎
pub use engine::{BatchProcessor, PricingCalculator, RoundingPolicy};

// 导入/导出
pub use exporter::{ExportError, ResultSerializer};
pub use importer::{ColumnAliasResolver, ImportError};

// API
pub use api::{ApiError, BatchResponse, CalcPriceRequest, PricingApi};

// 配置
pub use config::PricingConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "零售定价计算系统";
