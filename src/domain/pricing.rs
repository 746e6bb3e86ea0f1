// ==========================================
// 零售定价计算系统 - 定价领域模型
// ==========================================
// 职责: 定价输入 / 定价结果 / 批量结果记录
// 生命周期: 按请求或按行构造，序列化后即丢弃
// ==========================================

use crate::domain::types::ProfitMode;
use serde::{Deserialize, Serialize};

// ==========================================
// PricingInput - 定价输入
// ==========================================
// 所有数值字段均已完成类型转换（见 importer::data_cleaner）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub cost: f64,           // 采购成本（损耗前）
    pub waste_percent: f64,  // 损耗率（%），正常取值 [0, 100)
    pub fixed_expenses: f64, // 单品固定费用
    pub profit_percent: f64, // 利润率（%）
    #[serde(default)]
    pub profit_mode: ProfitMode,
}

impl PricingInput {
    pub fn new(
        cost: f64,
        waste_percent: f64,
        fixed_expenses: f64,
        profit_percent: f64,
        profit_mode: ProfitMode,
    ) -> Self {
        Self {
            cost,
            waste_percent,
            fixed_expenses,
            profit_percent,
            profit_mode,
        }
    }
}

// ==========================================
// PricingResult - 定价结果
// ==========================================
// 三个字段均已按两位小数舍入；非有限值原样保留
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub cost_after_waste: f64,
    pub total_cost: f64,
    pub selling_price: f64,
}

impl PricingResult {
    /// 三个输出是否均为有限值
    pub fn is_finite(&self) -> bool {
        self.cost_after_waste.is_finite()
            && self.total_cost.is_finite()
            && self.selling_price.is_finite()
    }
}

// ==========================================
// BatchResultRecord - 批量结果记录
// ==========================================
// 输入回显字段与计算字段拍平为一条记录，字段顺序即导出列顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResultRecord {
    pub item: String,
    pub cost: f64,
    pub waste_percent: f64,
    pub fixed_expenses: f64,
    pub profit_percent: f64,
    pub cost_after_waste: f64,
    pub total_cost: f64,
    pub selling_price: f64,
}

impl BatchResultRecord {
    /// 导出列（固定顺序）
    pub const COLUMNS: [&'static str; 8] = [
        "item",
        "cost",
        "wastePercent",
        "fixedExpenses",
        "profitPercent",
        "costAfterWaste",
        "totalCost",
        "sellingPrice",
    ];

    /// 数值列，按 COLUMNS[1..] 的顺序
    pub fn numeric_values(&self) -> [f64; 7] {
        [
            self.cost,
            self.waste_percent,
            self.fixed_expenses,
            self.profit_percent,
            self.cost_after_waste,
            self.total_cost,
            self.selling_price,
        ]
    }
}
