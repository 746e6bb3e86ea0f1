// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的表格构造、临时文件生成等功能
// ==========================================

use retail_pricing::domain::{CellValue, RawSheet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 标准五列表头
pub const FULL_HEADER: [&str; 5] = ["Item", "Cost", "WastePercent", "FixedExpenses", "ProfitPercent"];

/// 固定样例文件（含空白行与异常单元格）
pub const SAMPLE_CSV: &str = "tests/fixtures/sample_prices.csv";

pub fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn text_row(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}

/// 以标准表头构造原始表格
pub fn full_sheet(rows: Vec<Vec<CellValue>>) -> RawSheet {
    RawSheet::new(header(&FULL_HEADER), rows)
}

/// 在目录下写出 CSV 文件
pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create csv");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write csv line");
    }
    path
}
