// ==========================================
// 零售定价计算系统 - 领域类型定义
// ==========================================
// 职责: 利润模式 / 发散策略 / 标准字段枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 利润模式 (Profit Mode)
// ==========================================
// 序列化格式: snake_case (与请求载荷 "on_cost" / "on_price" 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitMode {
    #[default]
    OnCost,  // 成本加成: 利润为总成本的百分比
    OnPrice, // 目标毛利: 利润为售价的百分比
}

impl ProfitMode {
    /// 从请求代码解析利润模式
    ///
    /// 仅 "on_price" 识别为目标毛利，其余任何值（含未知值）均回落为成本加成
    pub fn from_code(code: &str) -> Self {
        match code {
            "on_price" => ProfitMode::OnPrice,
            _ => ProfitMode::OnCost,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            ProfitMode::OnCost => "on_cost",
            ProfitMode::OnPrice => "on_price",
        }
    }
}

impl fmt::Display for ProfitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ==========================================
// 发散策略 (Divergence Policy)
// ==========================================
// 损耗率 >= 100% 时的处理口径:
// - Strict: 单品手工计算，不做特判，非有限值原样返回
// - Clamped: 批量计算，损耗后成本强制为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DivergencePolicy {
    Strict,
    Clamped,
}

impl fmt::Display for DivergencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivergencePolicy::Strict => write!(f, "STRICT"),
            DivergencePolicy::Clamped => write!(f, "CLAMPED"),
        }
    }
}

// ==========================================
// 标准输入字段 (Canonical Field)
// ==========================================
// 表格导入时，表头经别名表解析后落到这五个字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    Item,
    Cost,
    WastePercent,
    FixedExpenses,
    ProfitPercent,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 5] = [
        CanonicalField::Item,
        CanonicalField::Cost,
        CanonicalField::WastePercent,
        CanonicalField::FixedExpenses,
        CanonicalField::ProfitPercent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Item => "Item",
            CanonicalField::Cost => "Cost",
            CanonicalField::WastePercent => "WastePercent",
            CanonicalField::FixedExpenses => "FixedExpenses",
            CanonicalField::ProfitPercent => "ProfitPercent",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_mode_from_code() {
        assert_eq!(ProfitMode::from_code("on_price"), ProfitMode::OnPrice);
        assert_eq!(ProfitMode::from_code("on_cost"), ProfitMode::OnCost);
        // 未知值回落为成本加成
        assert_eq!(ProfitMode::from_code("margin"), ProfitMode::OnCost);
        assert_eq!(ProfitMode::from_code(""), ProfitMode::OnCost);
    }

    #[test]
    fn test_profit_mode_serde() {
        let json = serde_json::to_string(&ProfitMode::OnPrice).unwrap();
        assert_eq!(json, "\"on_price\"");

        let mode: ProfitMode = serde_json::from_str("\"on_cost\"").unwrap();
        assert_eq!(mode, ProfitMode::OnCost);
        assert_eq!(ProfitMode::default(), ProfitMode::OnCost);
    }

    #[test]
    fn test_canonical_field_names() {
        let names: Vec<&str> = CanonicalField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec!["Item", "Cost", "WastePercent", "FixedExpenses", "ProfitPercent"]
        );
    }
}
