// ==========================================
// 零售定价计算系统 - 定价API
// ==========================================
// 职责: 封装三种调用形态
//   1. 单品计算: CalcPriceRequest → PricingResult（strict 口径）
//   2. 批量计算: RawSheet / 表格文件 → BatchResponse（clamped 口径）
//   3. 结果导出: 记录序列 → TabularSheet → 文件字节
// 说明: 无状态，多个请求可并发共享同一实例
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PricingConfig;
use crate::domain::pricing::{BatchResultRecord, PricingInput, PricingResult};
use crate::domain::sheet::{CellValue, RawSheet, TabularSheet};
use crate::domain::types::ProfitMode;
use crate::engine::{BatchProcessor, PricingCalculator};
use crate::exporter::error::ExportError;
use crate::exporter::{ResultSerializer, SheetWriter};
use crate::importer::{ColumnAliasResolver, DataCleaner, UniversalFileParser};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 单品计算请求
///
/// 数值字段接受 JSON 数字或数字字符串；字段缺失（或为 null）时取默认值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcPriceRequest {
    #[serde(default)]
    pub cost: Option<Value>,
    #[serde(default)]
    pub waste_percent: Option<Value>,
    #[serde(default)]
    pub fixed_expenses: Option<Value>,
    #[serde(default)]
    pub profit_percent: Option<Value>,
    /// "on_cost"（默认）或 "on_price"
    #[serde(default)]
    pub profit_mode: Option<String>,
}

/// 批量计算响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub rows: Vec<BatchResultRecord>,
}

/// 导出落盘结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    /// 实际落盘路径
    pub path: PathBuf,
    /// 建议下载名
    pub download_name: String,
    /// 导出行数（不含表头）
    pub row_count: usize,
}

/// 导出文件名: export_<unix 毫秒>.<扩展名>
pub fn export_file_name(now: DateTime<Utc>, extension: &str) -> String {
    format!("export_{}.{}", now.timestamp_millis(), extension)
}

/// 定价API
pub struct PricingApi {
    config: PricingConfig,
    calculator: PricingCalculator,
    batch: BatchProcessor,
    serializer: ResultSerializer,
    cleaner: DataCleaner,
}

impl Default for PricingApi {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingApi {
    /// 创建新的PricingApi实例
    pub fn new(config: PricingConfig) -> Self {
        let batch = BatchProcessor::new(ColumnAliasResolver::default(), config.default_profit_percent);
        let serializer = ResultSerializer::new(config.export_sheet_name.clone());

        Self {
            config,
            calculator: PricingCalculator::strict(),
            batch,
            serializer,
            cleaner: DataCleaner,
        }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    // ==========================================
    // 单品计算
    // ==========================================

    /// 单品手工计算
    ///
    /// # 返回
    /// - Ok(PricingResult): 计算结果（损耗率/利润率 >= 100% 时可能为非有限值）
    /// - Err(InvalidInput): 某个字段存在但无法转换为数值
    pub fn calc_price(&self, request: &CalcPriceRequest) -> ApiResult<PricingResult> {
        let input = PricingInput::new(
            self.manual_number("cost", request.cost.as_ref(), 0.0)?,
            self.manual_number("wastePercent", request.waste_percent.as_ref(), 0.0)?,
            self.manual_number("fixedExpenses", request.fixed_expenses.as_ref(), 0.0)?,
            self.manual_number(
                "profitPercent",
                request.profit_percent.as_ref(),
                self.config.default_profit_percent,
            )?,
            request
                .profit_mode
                .as_deref()
                .map(ProfitMode::from_code)
                .unwrap_or_default(),
        );

        let result = self.calculator.calculate(&input);

        // 手工口径不拦截发散结果，仅告警，由上层决定是否拒绝
        if !result.is_finite() {
            warn!(
                waste_percent = input.waste_percent,
                profit_percent = input.profit_percent,
                profit_mode = %input.profit_mode,
                "单品计算结果非有限值"
            );
        }

        Ok(result)
    }

    fn manual_number(&self, field: &str, value: Option<&Value>, default: f64) -> ApiResult<f64> {
        let parsed = match value {
            None | Some(Value::Null) => return Ok(default),
            Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
            Some(Value::String(s)) => self.cleaner.parse_number(&CellValue::Text(s.clone())),
            Some(_) => None,
        };

        parsed.ok_or_else(|| {
            ApiError::InvalidInput(format!(
                "字段 {} 无法转换为数值: {}",
                field,
                value.map(|v| v.to_string()).unwrap_or_default()
            ))
        })
    }

    // ==========================================
    // 批量计算
    // ==========================================

    /// 批量计算（表头 + 数据行）
    pub fn calc_batch(&self, sheet: &RawSheet) -> ApiResult<BatchResponse> {
        let rows = self.batch.process_sheet(sheet)?;
        Ok(BatchResponse { rows })
    }

    /// 解析上传文件并批量计算
    ///
    /// 文件的存储与清理由调用方负责
    pub fn upload_sheet<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<BatchResponse> {
        let path = file_path.as_ref();
        let sheet = UniversalFileParser.parse(path)?;
        let response = self.calc_batch(&sheet)?;

        info!(
            file = %path.display(),
            rows = response.rows.len(),
            "表格文件批量定价完成"
        );
        Ok(response)
    }

    // ==========================================
    // 结果导出
    // ==========================================

    /// 任意键值记录 → 表格
    pub fn export_rows(&self, rows: &[Map<String, Value>]) -> ApiResult<TabularSheet> {
        Ok(self.serializer.records_to_tabular(rows)?)
    }

    /// 批量结果 → 表格
    pub fn export_results(&self, records: &[BatchResultRecord]) -> ApiResult<TabularSheet> {
        Ok(self.serializer.to_tabular(records)?)
    }

    /// 导出为文件字节（供直接下载）
    pub fn export_to_bytes(
        &self,
        rows: &[Map<String, Value>],
        writer: &dyn SheetWriter,
    ) -> ApiResult<Vec<u8>> {
        let sheet = self.export_rows(rows)?;
        Ok(writer.write_to_bytes(&sheet)?)
    }

    /// 导出并落盘到配置的导出目录
    pub fn export_to_file(
        &self,
        rows: &[Map<String, Value>],
        writer: &dyn SheetWriter,
        now: DateTime<Utc>,
    ) -> ApiResult<ExportArtifact> {
        let sheet = self.export_rows(rows)?;

        let dir = &self.config.export_dir;
        std::fs::create_dir_all(dir).map_err(ExportError::from)?;
        let path = dir.join(export_file_name(now, writer.extension()));
        writer.write_to_path(&sheet, &path)?;

        info!(path = %path.display(), rows = sheet.row_count(), "导出文件已生成");

        Ok(ExportArtifact {
            path,
            download_name: self.config.export_download_name.clone(),
            row_count: sheet.row_count(),
        })
    }
}
