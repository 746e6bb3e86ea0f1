// ==========================================
// 零售定价计算系统 - 定价计算器
// ==========================================
// 职责: 单条 PricingInput → PricingResult（纯函数，无副作用）
// 公式:
//   损耗后成本 = 成本 / (1 - 损耗率/100)
//   总成本     = 损耗后成本 + 固定费用
//   售价(OnCost)  = 总成本 * (1 + 利润率/100)
//   售价(OnPrice) = 总成本 / (1 - 利润率/100)
// 发散口径:
//   strict  - 损耗率/利润率 >= 100% 时产生的非有限值原样返回
//   clamped - 损耗率 >= 100% 时损耗后成本强制为 0
// ==========================================

use crate::domain::pricing::{PricingInput, PricingResult};
use crate::domain::types::{DivergencePolicy, ProfitMode};
use crate::engine::rounding::RoundingPolicy;

// ==========================================
// PricingCalculator - 定价计算器
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingCalculator {
    policy: DivergencePolicy,
}

impl PricingCalculator {
    /// 单品手工计算口径（不特判发散）
    pub fn strict() -> Self {
        Self {
            policy: DivergencePolicy::Strict,
        }
    }

    /// 批量计算口径（损耗率 >= 100% 归零）
    pub fn clamped() -> Self {
        Self {
            policy: DivergencePolicy::Clamped,
        }
    }

    pub fn policy(&self) -> DivergencePolicy {
        self.policy
    }

    /// 计算定价结果
    ///
    /// 不做领域合法性校验；非有限值是合法输出，由调用方决定是否拒绝
    pub fn calculate(&self, input: &PricingInput) -> PricingResult {
        let cost_after_waste = self.cost_after_waste(input.cost, input.waste_percent);
        let total_cost = cost_after_waste + input.fixed_expenses;
        let selling_price = selling_price(total_cost, input.profit_percent, input.profit_mode);

        PricingResult {
            cost_after_waste: RoundingPolicy::round(cost_after_waste),
            total_cost: RoundingPolicy::round(total_cost),
            selling_price: RoundingPolicy::round(selling_price),
        }
    }

    fn cost_after_waste(&self, cost: f64, waste_percent: f64) -> f64 {
        match self.policy {
            DivergencePolicy::Clamped if waste_percent >= 100.0 => 0.0,
            _ => cost / (1.0 - waste_percent / 100.0),
        }
    }
}

fn selling_price(total_cost: f64, profit_percent: f64, mode: ProfitMode) -> f64 {
    let ratio = profit_percent / 100.0;
    match mode {
        ProfitMode::OnCost => total_cost * (1.0 + ratio),
        ProfitMode::OnPrice => total_cost / (1.0 - ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(waste: f64, profit: f64, mode: ProfitMode) -> PricingInput {
        PricingInput::new(100.0, waste, 10.0, profit, mode)
    }

    #[test]
    fn test_on_cost_markup() {
        let result = PricingCalculator::strict().calculate(&input(20.0, 20.0, ProfitMode::OnCost));
        assert_eq!(result.cost_after_waste, 125.0);
        assert_eq!(result.total_cost, 135.0);
        assert_eq!(result.selling_price, 162.0);
    }

    #[test]
    fn test_on_price_margin() {
        let result =
            PricingCalculator::strict().calculate(&input(20.0, 20.0, ProfitMode::OnPrice));
        assert_eq!(result.total_cost, 135.0);
        assert_eq!(result.selling_price, 168.75);
    }

    #[test]
    fn test_strict_waste_100_diverges() {
        let result = PricingCalculator::strict().calculate(&input(100.0, 20.0, ProfitMode::OnCost));
        assert_eq!(result.cost_after_waste, f64::INFINITY);
        assert_eq!(result.selling_price, f64::INFINITY);
        assert!(!result.is_finite());
    }

    #[test]
    fn test_strict_zero_cost_waste_100_is_nan() {
        let zero = PricingInput::new(0.0, 100.0, 0.0, 20.0, ProfitMode::OnCost);
        let result = PricingCalculator::strict().calculate(&zero);
        assert!(result.cost_after_waste.is_nan());
    }

    #[test]
    fn test_clamped_waste_at_or_above_100() {
        let calc = PricingCalculator::clamped();

        let at = calc.calculate(&input(100.0, 20.0, ProfitMode::OnCost));
        assert_eq!(at.cost_after_waste, 0.0);
        assert_eq!(at.total_cost, 10.0);
        assert_eq!(at.selling_price, 12.0);

        let above = calc.calculate(&input(150.0, 20.0, ProfitMode::OnCost));
        assert_eq!(above.cost_after_waste, 0.0);
    }

    #[test]
    fn test_on_price_profit_100_diverges_in_both_variants() {
        for calc in [PricingCalculator::strict(), PricingCalculator::clamped()] {
            let result = calc.calculate(&input(0.0, 100.0, ProfitMode::OnPrice));
            assert_eq!(result.total_cost, 110.0);
            assert_eq!(result.selling_price, f64::INFINITY);
        }
    }

    #[test]
    fn test_policy_accessor() {
        assert_eq!(PricingCalculator::strict().policy(), DivergencePolicy::Strict);
        assert_eq!(PricingCalculator::clamped().policy(), DivergencePolicy::Clamped);
    }
}
