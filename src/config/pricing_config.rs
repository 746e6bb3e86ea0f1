// ==========================================
// 零售定价计算系统 - 定价配置
// ==========================================
// 职责: 配置加载（默认值 → JSON 文件 → 环境变量覆写）
// 红线: 配置只影响默认值与导出命名，不改变计算公式
// ==========================================

use crate::engine::batch::DEFAULT_PROFIT_PERCENT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置键
pub mod config_keys {
    pub const DEFAULT_PROFIT_PERCENT: &str = "default_profit_percent";
    pub const EXPORT_SHEET_NAME: &str = "export_sheet_name";
    pub const EXPORT_DOWNLOAD_NAME: &str = "export_download_name";
    pub const EXPORT_DIR: &str = "export_dir";
    pub const LOG_LEVEL: &str = "log_level";
    pub const LOG_FORMAT: &str = "log_format";

    /// 环境变量前缀（PRICING_DEFAULT_PROFIT_PERCENT 等）
    pub const ENV_PREFIX: &str = "PRICING_";
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },
}

// ==========================================
// PricingConfig - 定价配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// 利润率缺失时的默认值（%）
    pub default_profit_percent: f64,
    /// 导出工作表名
    pub export_sheet_name: String,
    /// 导出文件建议下载名
    pub export_download_name: String,
    /// 导出文件落盘目录
    pub export_dir: PathBuf,
    /// 日志级别（RUST_LOG 未设置时生效）
    pub log_level: String,
    /// 日志格式: "text" 或 "json"
    pub log_format: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_profit_percent: DEFAULT_PROFIT_PERCENT,
            export_sheet_name: "Results".to_string(),
            export_download_name: "results.xlsx".to_string(),
            export_dir: PathBuf::from("exports"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl PricingConfig {
    /// 从 JSON 文件加载（未出现的键取默认值）
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// 加载完整配置: 默认值 → 文件（可选）→ 环境变量
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// 应用 PRICING_* 环境变量覆写
    pub fn apply_env_overrides(&mut self) {
        let overrides = std::env::vars().filter_map(|(name, value)| {
            name.strip_prefix(config_keys::ENV_PREFIX)
                .map(|key| (key.to_lowercase(), value))
        });
        self.apply_overrides(overrides);
    }

    /// 应用键值覆写（键见 config_keys），格式错误的值忽略并告警
    pub fn apply_overrides<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in overrides {
            match key.as_str() {
                config_keys::DEFAULT_PROFIT_PERCENT => match value.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => self.default_profit_percent = v,
                    _ => {
                        tracing::warn!(
                            config_key = config_keys::DEFAULT_PROFIT_PERCENT,
                            raw_value = %value,
                            "默认利润率配置格式错误，保留原值"
                        );
                    }
                },
                config_keys::EXPORT_SHEET_NAME => self.export_sheet_name = value,
                config_keys::EXPORT_DOWNLOAD_NAME => self.export_download_name = value,
                config_keys::EXPORT_DIR => self.export_dir = PathBuf::from(value),
                config_keys::LOG_LEVEL => self.log_level = value,
                config_keys::LOG_FORMAT => self.log_format = value,
                _ => {}
            }
        }
    }
}
