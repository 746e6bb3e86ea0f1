// ==========================================
// 结果导出集成测试
// ==========================================
// 覆盖: 空导出拒绝 / 落盘命名 / 内存字节 / 批量结果回导
// ==========================================

mod test_helpers;

use chrono::{TimeZone, Utc};
use retail_pricing::api::{ApiError, PricingApi};
use retail_pricing::config::PricingConfig;
use retail_pricing::exporter::{CsvSheetWriter, SheetWriter, XlsxSheetWriter};
use retail_pricing::logging;
use serde_json::{json, Map, Value};
use tempfile::tempdir;
use test_helpers::SAMPLE_CSV;

fn rows(values: Vec<Value>) -> Vec<Map<String, Value>> {
    values
        .into_iter()
        .filter_map(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}

fn api_in(dir: &std::path::Path) -> PricingApi {
    let config = PricingConfig {
        export_dir: dir.join("exports"),
        ..PricingConfig::default()
    };
    PricingApi::new(config)
}

#[test]
fn test_empty_export_is_rejected_without_file() {
    logging::init_test();

    let dir = tempdir().unwrap();
    let api = api_in(dir.path());
    let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

    let result = api.export_to_file(&[], &XlsxSheetWriter, now);
    assert!(matches!(result, Err(ApiError::EmptyExport)));
    assert!(!dir.path().join("exports").exists());

    assert!(matches!(api.export_results(&[]), Err(ApiError::EmptyExport)));
}

#[test]
fn test_export_to_file_names_by_timestamp() {
    let dir = tempdir().unwrap();
    let api = api_in(dir.path());
    let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

    let records = rows(vec![
        json!({ "item": "Flour", "sellingPrice": 66.0 }),
        json!({ "item": "Sugar", "note": "bulk" }),
    ]);
    let artifact = api.export_to_file(&records, &CsvSheetWriter, now).unwrap();

    assert_eq!(
        artifact.path,
        dir.path().join("exports").join("export_1700000000123.csv")
    );
    assert_eq!(artifact.download_name, "results.xlsx");
    assert_eq!(artifact.row_count, 2);

    let text = std::fs::read_to_string(&artifact.path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["item,sellingPrice,note", "Flour,66,", "Sugar,,bulk"]
    );
}

#[test]
fn test_export_to_bytes_xlsx() {
    let api = PricingApi::default();
    let records = rows(vec![json!({ "item": "Flour", "sellingPrice": 66.0 })]);

    let bytes = api.export_to_bytes(&records, &XlsxSheetWriter).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_batch_results_round_trip_to_sheet() {
    let api = PricingApi::default();
    let response = api.upload_sheet(SAMPLE_CSV).unwrap();

    let sheet = api.export_results(&response.rows).unwrap();
    assert_eq!(sheet.name, "Results");
    assert_eq!(sheet.header[0], "item");
    assert_eq!(sheet.header[7], "sellingPrice");
    assert_eq!(sheet.row_count(), response.rows.len());

    let bytes = CsvSheetWriter.write_to_bytes(&sheet).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("Flour,50,0,5,20,50,55,66"));
}
