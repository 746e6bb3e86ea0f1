// ==========================================
// 零售定价计算系统 - 表格写出器实现
// ==========================================
// 职责: TabularSheet → 文件字节（Excel / CSV）
// 说明: 非有限数值以文本形式写出（xlsx 无法存储 NaN/∞）
// ==========================================

use crate::domain::sheet::{CellValue, TabularSheet};
use crate::exporter::error::{ExportError, ExportResult};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

// ==========================================
// SheetWriter Trait
// ==========================================
pub trait SheetWriter: Send + Sync {
    /// 文件扩展名（不含点）
    fn extension(&self) -> &'static str;

    /// 写出到内存
    fn write_to_bytes(&self, sheet: &TabularSheet) -> ExportResult<Vec<u8>>;

    /// 写出到文件
    fn write_to_path(&self, sheet: &TabularSheet, path: &Path) -> ExportResult<()> {
        let bytes = self.write_to_bytes(sheet)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// 按扩展名选择写出器
pub fn writer_for_extension(ext: &str) -> ExportResult<Box<dyn SheetWriter>> {
    match ext.to_lowercase().as_str() {
        "xlsx" => Ok(Box::new(XlsxSheetWriter)),
        "csv" => Ok(Box::new(CsvSheetWriter)),
        other => Err(ExportError::UnsupportedFormat(other.to_string())),
    }
}

/// 按文件路径扩展名选择写出器
pub fn writer_for_path(path: &Path) -> ExportResult<Box<dyn SheetWriter>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    writer_for_extension(ext)
}

// ==========================================
// Excel Writer 实现
// ==========================================
pub struct XlsxSheetWriter;

/// xlsx 单表列数上限
const XLSX_MAX_COLUMNS: usize = 16_384;

/// 列下标 → xlsx 列号，超出上限返回错误（不截断）
fn xlsx_column(col: usize) -> ExportResult<u16> {
    if col >= XLSX_MAX_COLUMNS {
        return Err(ExportError::XlsxWriteError(format!(
            "列数超出上限: 第 {} 列（最多 {} 列）",
            col + 1,
            XLSX_MAX_COLUMNS
        )));
    }
    u16::try_from(col).map_err(|e| ExportError::XlsxWriteError(e.to_string()))
}

/// 数据行下标 → xlsx 行号（首行为表头）
fn xlsx_row(row_idx: usize) -> ExportResult<u32> {
    u32::try_from(row_idx + 1).map_err(|e| ExportError::XlsxWriteError(e.to_string()))
}

impl XlsxSheetWriter {
    fn build_workbook(&self, sheet: &TabularSheet) -> ExportResult<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (col, name) in sheet.header.iter().enumerate() {
                worksheet.write_string_with_format(0, xlsx_column(col)?, name.as_str(), &header_format)?;
            }

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let excel_row = xlsx_row(row_idx)?;
                for (col, cell) in row.iter().enumerate() {
                    let col = xlsx_column(col)?;
                    match cell {
                        CellValue::Empty => {}
                        CellValue::Number(n) if n.is_finite() => {
                            worksheet.write_number(excel_row, col, *n)?;
                        }
                        CellValue::Bool(b) => {
                            worksheet.write_boolean(excel_row, col, *b)?;
                        }
                        other => {
                            worksheet.write_string(excel_row, col, other.to_string())?;
                        }
                    }
                }
            }
        }

        Ok(workbook)
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn write_to_bytes(&self, sheet: &TabularSheet) -> ExportResult<Vec<u8>> {
        let mut workbook = self.build_workbook(sheet)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn write_to_path(&self, sheet: &TabularSheet, path: &Path) -> ExportResult<()> {
        let mut workbook = self.build_workbook(sheet)?;
        workbook.save(path)?;
        Ok(())
    }
}

// ==========================================
// CSV Writer 实现
// ==========================================
pub struct CsvSheetWriter;

impl SheetWriter for CsvSheetWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_to_bytes(&self, sheet: &TabularSheet) -> ExportResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&sheet.header)?;
        for row in &sheet.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::CsvWriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_sheet() -> TabularSheet {
        TabularSheet {
            name: "Results".to_string(),
            header: vec!["item".to_string(), "sellingPrice".to_string()],
            rows: vec![
                vec![CellValue::from("Flour"), CellValue::Number(66.0)],
                vec![CellValue::from("Oil"), CellValue::Number(f64::INFINITY)],
            ],
        }
    }

    #[test]
    fn test_csv_writer_bytes() {
        let bytes = CsvSheetWriter.write_to_bytes(&sample_sheet()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["item,sellingPrice", "Flour,66", "Oil,Infinity"]);
    }

    #[test]
    fn test_xlsx_writer_bytes_is_zip() {
        let bytes = XlsxSheetWriter.write_to_bytes(&sample_sheet()).unwrap();
        // xlsx 为 zip 容器
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_xlsx_writer_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.xlsx");

        XlsxSheetWriter.write_to_path(&sample_sheet(), &path).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_xlsx_writer_invalid_sheet_name() {
        let mut sheet = sample_sheet();
        sheet.name = "bad/name".to_string();
        let result = XlsxSheetWriter.write_to_bytes(&sheet);
        assert!(matches!(result, Err(ExportError::XlsxWriteError(_))));
    }

    #[test]
    fn test_xlsx_column_limit() {
        assert_eq!(xlsx_column(0).unwrap(), 0);
        assert_eq!(xlsx_column(16_383).unwrap(), 16_383);
        assert!(matches!(xlsx_column(16_384), Err(ExportError::XlsxWriteError(_))));
        assert!(matches!(xlsx_column(70_000), Err(ExportError::XlsxWriteError(_))));
    }

    #[test]
    fn test_xlsx_writer_too_many_columns() {
        let sheet = TabularSheet {
            name: "Results".to_string(),
            header: (0..16_385).map(|i| format!("c{}", i)).collect(),
            rows: vec![vec![CellValue::Number(1.0)]],
        };
        let result = XlsxSheetWriter.write_to_bytes(&sheet);
        assert!(matches!(result, Err(ExportError::XlsxWriteError(msg)) if msg.contains("16384")));
    }

    #[test]
    fn test_writer_for_extension() {
        assert_eq!(writer_for_extension("XLSX").unwrap().extension(), "xlsx");
        assert_eq!(writer_for_path(Path::new("out.csv")).unwrap().extension(), "csv");
        assert!(matches!(
            writer_for_extension("pdf"),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }
}
