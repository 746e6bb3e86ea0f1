// ==========================================
// 零售定价计算系统 - 导出层
// ==========================================
// 职责: 计算结果 → 表格 → 文件字节（单向）
// 支持: Excel, CSV
// ==========================================

pub mod error;
pub mod result_serializer;
pub mod sheet_writer;

// 重导出核心类型
pub use error::{ExportError, ExportResult};
pub use result_serializer::{ResultSerializer, DEFAULT_SHEET_NAME};
pub use sheet_writer::{
    writer_for_extension, writer_for_path, CsvSheetWriter, SheetWriter, XlsxSheetWriter,
};
