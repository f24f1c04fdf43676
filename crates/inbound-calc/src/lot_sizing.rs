//! MOQ / 包裝倍數取整

use inbound_core::PlannerConfig;
use rust_decimal::Decimal;

/// 批量取整計算器
pub struct LotSizingCalculator;

impl LotSizingCalculator {
    /// 將淨需求調整為建議補貨量
    pub fn apply(inbound_need_units: Decimal, config: &PlannerConfig) -> Decimal {
        config.round_constraints(inbound_need_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lot_for_lot() {
        let config = PlannerConfig::new();

        assert_eq!(LotSizingCalculator::apply(Decimal::from(144), &config), Decimal::from(144));
    }

    #[test]
    fn test_moq_then_pack() {
        let config = PlannerConfig::new().with_moq_units(50).with_pack_size(20);

        // 5 → MOQ 50 → 取整到 60
        assert_eq!(LotSizingCalculator::apply(Decimal::from(5), &config), Decimal::from(60));
    }

    #[test]
    fn test_zero_need_stays_zero() {
        let config = PlannerConfig::new().with_moq_units(500).with_pack_size(24);

        assert_eq!(LotSizingCalculator::apply(Decimal::ZERO, &config), Decimal::ZERO);
    }

    #[test]
    fn test_need_above_moq_only_packed() {
        let config = PlannerConfig::new().with_moq_units(50).with_pack_size(25);

        // 123 已高於 MOQ，僅取整到 125
        assert_eq!(LotSizingCalculator::apply(Decimal::from(123), &config), Decimal::from(125));
    }
}
