// ==========================================
// 零售定价计算系统 - 字段映射器实现
// ==========================================
// 职责: 表头 + 数据行 → TabularRecord（标准字段映射）
// 规则:
//   - 按位置建立 表头[i] → 数据行[i]，表头重名时后者覆盖前者
//   - 每个标准字段按别名表顺序查找，取第一个在表头中存在且非空的别名
//   - 别名区分大小写，精确匹配，不做模糊匹配
//   - 找不到的字段标记为缺失（不补 0），由调用方决定默认值
// ==========================================

use crate::domain::sheet::{CellValue, TabularRecord};
use crate::domain::types::CanonicalField;
use std::collections::HashMap;

// ==========================================
// 标准字段别名表
// ==========================================
// 新增拼写只需在对应字段末尾追加
pub const DEFAULT_ALIASES: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Item,
        &["Item", "item", "ITEM", "item_name", "الصنف"],
    ),
    (
        CanonicalField::Cost,
        &["Cost", "cost", "COST", "unit_cost", "التكلفة"],
    ),
    (
        CanonicalField::WastePercent,
        &["WastePercent", "wastePercent", "WASTE_PERCENT", "waste_percent", "نسبة الهدر"],
    ),
    (
        CanonicalField::FixedExpenses,
        &["FixedExpenses", "fixedExpenses", "FIXED_EXPENSES", "fixed_expenses", "المصاريف الثابتة"],
    ),
    (
        CanonicalField::ProfitPercent,
        &["ProfitPercent", "profitPercent", "PROFIT_PERCENT", "profit_percent", "نسبة الربح"],
    ),
];

static EMPTY_CELL: CellValue = CellValue::Empty;

/// 单个标准字段的可接受拼写（有序）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    pub field: CanonicalField,
    pub spellings: Vec<String>,
}

// ==========================================
// ColumnAliasResolver - 列名别名解析器
// ==========================================
#[derive(Debug, Clone)]
pub struct ColumnAliasResolver {
    table: Vec<FieldAliases>,
}

impl Default for ColumnAliasResolver {
    fn default() -> Self {
        let table = DEFAULT_ALIASES
            .iter()
            .map(|(field, spellings)| FieldAliases {
                field: *field,
                spellings: spellings.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { table }
    }
}

impl ColumnAliasResolver {
    pub fn new(table: Vec<FieldAliases>) -> Self {
        Self { table }
    }

    /// 追加一个别名（优先级最低）
    pub fn with_alias(mut self, field: CanonicalField, spelling: impl Into<String>) -> Self {
        let spelling = spelling.into();
        match self.table.iter_mut().find(|a| a.field == field) {
            Some(aliases) => aliases.spellings.push(spelling),
            None => self.table.push(FieldAliases {
                field,
                spellings: vec![spelling],
            }),
        }
        self
    }

    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.table
            .iter()
            .find(|a| a.field == field)
            .map(|a| a.spellings.as_slice())
            .unwrap_or(&[])
    }

    /// 解析一行数据
    ///
    /// # 参数
    /// - header: 表头行
    /// - row: 数据行（可短于表头，缺失位置视为空值）
    pub fn resolve(&self, header: &[String], row: &[CellValue]) -> TabularRecord {
        let mut positional: HashMap<&str, &CellValue> = HashMap::with_capacity(header.len());
        for (idx, name) in header.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            positional.insert(name.as_str(), row.get(idx).unwrap_or(&EMPTY_CELL));
        }

        let mut fields = HashMap::new();
        for aliases in &self.table {
            let found = aliases
                .spellings
                .iter()
                .filter_map(|spelling| positional.get(spelling.as_str()))
                .find(|cell| !cell.is_empty());

            if let Some(cell) = found {
                fields.insert(aliases.field, CellValue::clone(cell));
            }
        }

        TabularRecord::new(fields)
    }
}
