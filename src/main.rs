// ==========================================
// 零售定价计算系统 - 命令行入口
// ==========================================
// 用法: retail-pricing <输入表格> [输出表格]
//   输入: .csv / .xlsx / .xlsm / .xlsb / .xls / .ods
//   输出: .xlsx / .csv（省略时仅打印 JSON 结果）
// 环境变量:
//   PRICING_CONFIG: JSON 配置文件路径（可选）
//   PRICING_*: 单项配置覆写
// ==========================================

use anyhow::Context;
use retail_pricing::api::PricingApi;
use retail_pricing::config::PricingConfig;
use retail_pricing::exporter::writer_for_path;
use retail_pricing::logging;
use std::path::{Path, PathBuf};

fn print_usage() {
    println!("==================================================");
    println!("{} v{}", retail_pricing::APP_NAME, retail_pricing::VERSION);
    println!("==================================================");
    println!();
    println!("用法: retail-pricing <输入表格> [输出表格]");
    println!("  输入: .csv / .xlsx / .xlsm / .xlsb / .xls / .ods");
    println!("  输出: .xlsx / .csv");
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os("PRICING_CONFIG").map(PathBuf::from);
    let config = PricingConfig::load(config_path.as_deref()).context("加载配置失败")?;

    // 初始化日志系统
    if config.json_logs() {
        logging::init_json(&config.log_level);
    } else {
        logging::init(&config.log_level);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = args.first() else {
        print_usage();
        return Ok(());
    };

    tracing::info!(version = retail_pricing::VERSION, input = %input, "开始批量定价");

    let api = PricingApi::new(config);
    let response = api
        .upload_sheet(input)
        .with_context(|| format!("批量定价失败: {}", input))?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(output) = args.get(1) {
        let output = Path::new(output);
        let writer = writer_for_path(output)?;
        let sheet = api.export_results(&response.rows)?;
        writer.write_to_path(&sheet, output)?;
        tracing::info!(output = %output.display(), rows = sheet.row_count(), "结果已导出");
    }

    Ok(())
}
