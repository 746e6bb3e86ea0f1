// ==========================================
// 零售定价计算系统 - 导入层
// ==========================================
// 职责: 外部表格 → 标准字段记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{ColumnAliasResolver, FieldAliases, DEFAULT_ALIASES};
pub use file_parser::{CsvParser, ExcelParser, SheetParser, UniversalFileParser};
