// ==========================================
// 零售定价计算系统 - API 层
// ==========================================
// 职责: 提供定价业务接口，供上层请求处理层（HTTP/命令行）调用
// ==========================================

pub mod error;
pub mod pricing_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use pricing_api::{
    export_file_name, BatchResponse, CalcPriceRequest, ExportArtifact, PricingApi,
};
