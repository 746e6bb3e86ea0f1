// ==========================================
// 零售定价计算系统 - 表格领域模型
// ==========================================
// 职责: 单元格值 / 原始表格 / 标准字段记录 / 导出表格
// 说明: 与具体文件格式无关，编解码见 importer::file_parser 与 exporter::sheet_writer
// ==========================================

use crate::domain::types::CanonicalField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// 空值判定: Empty 或空字符串
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) if n.is_nan() => write!(f, "NaN"),
            CellValue::Number(n) if n.is_infinite() => {
                if n.is_sign_positive() {
                    write!(f, "Infinity")
                } else {
                    write!(f, "-Infinity")
                }
            }
            // 整数值不带小数点（50 而非 50.0）
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(n.to_string())),
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

// ==========================================
// RawSheet - 原始表格（表头 + 数据行）
// ==========================================
// 数据行保持原始顺序，空白行不在此处过滤
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    pub fn new(header: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { header, rows }
    }

    /// 以首行为表头拆分网格
    ///
    /// # 返回
    /// - None: 网格无任何行
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let header = rows
            .remove(0)
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        Some(Self { header, rows })
    }
}

// ==========================================
// TabularRecord - 标准字段记录
// ==========================================
// 字段缺失（表头无该列或单元格为空）时不出现在映射中，
// 由调用方区分“缺失”与“显式为 0”
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularRecord {
    fields: HashMap<CanonicalField, CellValue>,
}

impl TabularRecord {
    pub fn new(fields: HashMap<CanonicalField, CellValue>) -> Self {
        Self { fields }
    }

    /// 读取字段
    ///
    /// # 返回
    /// - Some(&CellValue): 已解析到的非空单元格
    /// - None: 缺失
    pub fn get(&self, field: CanonicalField) -> Option<&CellValue> {
        self.fields.get(&field)
    }

    pub fn is_missing(&self, field: CanonicalField) -> bool {
        !self.fields.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ==========================================
// TabularSheet - 导出表格
// ==========================================
// 交给表格编码器落盘；每行长度与表头一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularSheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TabularSheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::from("").is_empty());
        assert!(!CellValue::from(" ").is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
        assert!(!CellValue::Bool(false).is_empty());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Number(50.0).to_string(), "50");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(CellValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from("Flour").to_string(), "Flour");
    }

    #[test]
    fn test_cell_from_json() {
        assert_eq!(CellValue::from(&json!(null)), CellValue::Empty);
        assert_eq!(CellValue::from(&json!(3)), CellValue::Number(3.0));
        assert_eq!(CellValue::from(&json!("x")), CellValue::from("x"));
        assert_eq!(CellValue::from(&json!(true)), CellValue::Bool(true));
        assert_eq!(CellValue::from(&json!([1, 2])), CellValue::from("[1,2]"));
    }

    #[test]
    fn test_cell_untagged_deserialize() {
        let row: Vec<CellValue> = serde_json::from_str(r#"["Flour", 50, null, true]"#).unwrap();
        assert_eq!(
            row,
            vec![
                CellValue::from("Flour"),
                CellValue::Number(50.0),
                CellValue::Empty,
                CellValue::Bool(true),
            ]
        );
    }

    #[test]
    fn test_raw_sheet_from_rows() {
        let sheet = RawSheet::from_rows(vec![
            vec![CellValue::from(" Item "), CellValue::from("Cost")],
            vec![CellValue::from("Flour"), CellValue::Number(50.0)],
        ])
        .unwrap();

        assert_eq!(sheet.header, vec!["Item", "Cost"]);
        assert_eq!(sheet.rows.len(), 1);

        assert!(RawSheet::from_rows(Vec::new()).is_none());
    }
}
