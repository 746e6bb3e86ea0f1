// ==========================================
// 零售定价计算系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将导入/导出错误转换为调用方可区分的错误
// 调用方可见的结构性拒绝只有 EmptySheet / EmptyExport / InvalidInput
// ==========================================

use crate::exporter::error::ExportError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("工作表为空")]
    EmptySheet,

    #[error("无可导出的记录")]
    EmptyExport,

    // ==========================================
    // 文件编解码错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("文件导出失败: {0}")]
    ExportError(String),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::EmptySheet => ApiError::EmptySheet,
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

// ==========================================
// 从 ExportError 转换
// ==========================================
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::EmptyExport => ApiError::EmptyExport,
            other => ApiError::ExportError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
