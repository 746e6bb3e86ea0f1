// ==========================================
// 零售定价计算系统 - 数据清洗器实现
// ==========================================
// 职责: 宽松数值转换 / 文本转换 / 空白行判定
// 口径: 数值取字符串的最长前导十进制前缀（"20%" → 20，"12abc" → 12），
//       无法解析时回落为调用方给定的默认值，不报错
// ==========================================

use crate::domain::sheet::CellValue;

pub struct DataCleaner;

impl DataCleaner {
    /// 解析单元格为有限数值
    ///
    /// # 返回
    /// - Some(f64): 解析成功
    /// - None: 空值、无数字前缀或结果非有限
    pub fn parse_number(&self, cell: &CellValue) -> Option<f64> {
        match cell {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(*n).filter(|v| v.is_finite()),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => leading_decimal(s.trim()),
        }
    }

    /// 数值转换，缺失或无法解析时取默认值
    pub fn coerce_number(&self, cell: Option<&CellValue>, default: f64) -> f64 {
        cell.and_then(|c| self.parse_number(c)).unwrap_or(default)
    }

    /// 文本转换，缺失时为空字符串
    pub fn coerce_text(&self, cell: Option<&CellValue>) -> String {
        cell.map(|c| c.to_string()).unwrap_or_default()
    }

    /// 空白行判定: 每个单元格均为空值（零长度行同样视为空白）
    pub fn is_blank_row(&self, row: &[CellValue]) -> bool {
        row.iter().all(CellValue::is_empty)
    }
}

/// 取最长前导十进制前缀: [+-]digits[.digits][e[+-]digits]
fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if end < len && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut digits = 0;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < len && bytes[end] == b'.' {
        end += 1;
        while end < len && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // 指数部分必须带数字，否则忽略（"5e" → 5）
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
