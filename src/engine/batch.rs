// ==========================================
// 零售定价计算系统 - 批量定价处理器
// ==========================================
// 职责: 表头 + 数据行 → Vec<BatchResultRecord>
// 流程:
//   1. 结构校验（表头或数据行为空 → EmptySheet）
//   2. 过滤空白行（保持剩余行相对顺序）
//   3. 逐行别名解析 → 宽松数值转换 → clamped 计算 → 舍入
// 红线: 单元格异常只回落默认值，不中断整批
// ==========================================

use crate::domain::pricing::{BatchResultRecord, PricingInput};
use crate::domain::sheet::{CellValue, RawSheet, TabularRecord};
use crate::domain::types::{CanonicalField, ProfitMode};
use crate::engine::calculator::PricingCalculator;
use crate::engine::rounding::RoundingPolicy;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::ColumnAliasResolver;
use tracing::{debug, info, instrument};

/// 利润率缺失时的默认值（%）
pub const DEFAULT_PROFIT_PERCENT: f64 = 20.0;

// ==========================================
// BatchProcessor - 批量定价处理器
// ==========================================
pub struct BatchProcessor {
    resolver: ColumnAliasResolver,
    cleaner: DataCleaner,
    calculator: PricingCalculator,
    default_profit_percent: f64,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(ColumnAliasResolver::default(), DEFAULT_PROFIT_PERCENT)
    }
}

impl BatchProcessor {
    pub fn new(resolver: ColumnAliasResolver, default_profit_percent: f64) -> Self {
        Self {
            resolver,
            cleaner: DataCleaner,
            calculator: PricingCalculator::clamped(),
            default_profit_percent,
        }
    }

    pub fn process_sheet(&self, sheet: &RawSheet) -> ImportResult<Vec<BatchResultRecord>> {
        self.process(&sheet.header, &sheet.rows)
    }

    /// 批量计算
    ///
    /// # 返回
    /// - Ok(Vec): 每个非空白行一条结果，顺序与输入一致
    /// - Err(EmptySheet): 表头或数据行为空
    #[instrument(skip(self, header, data_rows), fields(rows = data_rows.len()))]
    pub fn process(
        &self,
        header: &[String],
        data_rows: &[Vec<CellValue>],
    ) -> ImportResult<Vec<BatchResultRecord>> {
        if header.iter().all(|h| h.is_empty()) || data_rows.is_empty() {
            return Err(ImportError::EmptySheet);
        }

        let results: Vec<BatchResultRecord> = data_rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !self.cleaner.is_blank_row(row))
            .map(|(idx, row)| self.process_row(header, row, idx + 1))
            .collect();

        info!(
            total_rows = data_rows.len(),
            priced_rows = results.len(),
            blank_rows = data_rows.len() - results.len(),
            "批量定价完成"
        );

        Ok(results)
    }

    fn process_row(&self, header: &[String], row: &[CellValue], row_number: usize) -> BatchResultRecord {
        let record = self.resolver.resolve(header, row);

        let cost = self.number_field(&record, CanonicalField::Cost, 0.0, row_number);
        let waste_percent = self.number_field(&record, CanonicalField::WastePercent, 0.0, row_number);
        let fixed_expenses = self.number_field(&record, CanonicalField::FixedExpenses, 0.0, row_number);
        let profit_percent = self.number_field(
            &record,
            CanonicalField::ProfitPercent,
            self.default_profit_percent,
            row_number,
        );
        let item = self.cleaner.coerce_text(record.get(CanonicalField::Item));

        let input = PricingInput::new(
            cost,
            waste_percent,
            fixed_expenses,
            profit_percent,
            ProfitMode::OnCost,
        );
        let priced = self.calculator.calculate(&input);

        BatchResultRecord {
            item,
            cost: RoundingPolicy::round(cost),
            waste_percent: RoundingPolicy::round(waste_percent),
            fixed_expenses: RoundingPolicy::round(fixed_expenses),
            profit_percent: RoundingPolicy::round(profit_percent),
            cost_after_waste: priced.cost_after_waste,
            total_cost: priced.total_cost,
            selling_price: priced.selling_price,
        }
    }

    fn number_field(
        &self,
        record: &TabularRecord,
        field: CanonicalField,
        default: f64,
        row_number: usize,
    ) -> f64 {
        let cell = record.get(field);
        if let Some(raw) = cell {
            if self.cleaner.parse_number(raw).is_none() {
                debug!(row = row_number, field = %field, raw = %raw, default, "数值无法解析，使用默认值");
            }
        }
        self.cleaner.coerce_number(cell, default)
    }
}
