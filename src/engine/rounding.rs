// ==========================================
// 零售定价计算系统 - 舍入策略
// ==========================================
// 口径: round((x + ε) * 100) / 100，半值向上
// ε 取 f64::EPSILON，抵消十进制小数的二进制表示误差（1.005 → 1.01）
// 非有限值（NaN / ±∞）原样返回
// ==========================================

/// 固定精度: 两位小数
pub const PRECISION: i32 = 2;

pub struct RoundingPolicy;

impl RoundingPolicy {
    /// 按两位小数舍入
    pub fn round(value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }

        let scale = 10f64.powi(PRECISION);
        let scaled = (value + f64::EPSILON) * scale;
        let floor = scaled.floor();
        // 半值向 +∞ 方向进位（-12.5 → -12）
        let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
        rounded / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_precision_digits() {
        let scale = 10f64.powi(PRECISION);
        let rounded = RoundingPolicy::round(1.23456);
        assert_eq!(rounded, 1.23);
        assert_eq!((rounded * scale).round() / scale, rounded);
    }

    #[test]
    fn test_round_basic() {
        assert_eq!(RoundingPolicy::round(162.0), 162.0);
        assert_eq!(RoundingPolicy::round(168.75), 168.75);
        assert_eq!(RoundingPolicy::round(3.14159), 3.14);
        assert_eq!(RoundingPolicy::round(2.675001), 2.68);
    }

    #[test]
    fn test_round_half_up_with_epsilon() {
        // 1.005 的二进制表示略小于 1.005，ε 修正后应进位
        assert_eq!(RoundingPolicy::round(1.005), 1.01);
        assert_eq!(RoundingPolicy::round(0.125), 0.13);
    }

    #[test]
    fn test_round_negative_half_goes_up() {
        assert_eq!(RoundingPolicy::round(-0.125), -0.12);
        assert_eq!(RoundingPolicy::round(-3.14159), -3.14);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert!(RoundingPolicy::round(f64::NAN).is_nan());
        assert_eq!(RoundingPolicy::round(f64::INFINITY), f64::INFINITY);
        assert_eq!(RoundingPolicy::round(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round_idempotent() {
        for value in [0.0, 0.01, 1.23, 99.99, 168.75, 1234.56] {
            let once = RoundingPolicy::round(value);
            assert_eq!(RoundingPolicy::round(once), once);
        }
    }
}
