// ==========================================
// 零售定价计算系统 - 结果序列化器
// ==========================================
// 职责: 记录序列 → TabularSheet（表头 + 等长数据行）
// 规则:
//   - 批量结果: 列顺序固定为 BatchResultRecord::COLUMNS
//   - 任意键值记录: 列顺序为各键首次出现的顺序，缺失键留空
//   - 零条记录 → EmptyExport，不产出空表
// 说明: 单向导出，不提供反序列化
// ==========================================

use crate::domain::pricing::BatchResultRecord;
use crate::domain::sheet::{CellValue, TabularSheet};
use crate::exporter::error::{ExportError, ExportResult};
use serde_json::{Map, Value};

pub const DEFAULT_SHEET_NAME: &str = "Results";

pub struct ResultSerializer {
    sheet_name: String,
}

impl Default for ResultSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl ResultSerializer {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// 批量结果 → 表格
    pub fn to_tabular(&self, records: &[BatchResultRecord]) -> ExportResult<TabularSheet> {
        if records.is_empty() {
            return Err(ExportError::EmptyExport);
        }

        let rows = records
            .iter()
            .map(|record| {
                let mut row = Vec::with_capacity(BatchResultRecord::COLUMNS.len());
                row.push(CellValue::Text(record.item.clone()));
                row.extend(record.numeric_values().into_iter().map(CellValue::Number));
                row
            })
            .collect();

        Ok(TabularSheet {
            name: self.sheet_name.clone(),
            header: BatchResultRecord::COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    /// 任意键值记录 → 表格
    pub fn records_to_tabular(&self, records: &[Map<String, Value>]) -> ExportResult<TabularSheet> {
        if records.is_empty() {
            return Err(ExportError::EmptyExport);
        }

        let mut header: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !header.iter().any(|h| h == key) {
                    header.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|key| record.get(key).map(CellValue::from).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(TabularSheet {
            name: self.sheet_name.clone(),
            header,
            rows,
        })
    }
}
