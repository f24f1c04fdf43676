//! 淨需求計算

use inbound_core::PlannerConfig;
use rust_decimal::Decimal;

use crate::aggregation::WarehouseTotals;

/// 淨需求計算結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetRequirement {
    /// 安全庫存量
    pub safety_units: Decimal,
    /// 提前期需求量
    pub leadtime_units: Decimal,
    /// 預測時界需求量
    pub forecast_h_units: Decimal,
    /// 可用量
    pub available_units: Decimal,
    /// 淨需求
    pub inbound_need_units: Decimal,
}

impl NetRequirement {
    /// 總需求（預測 + 安全 + 提前期）
    pub fn gross_requirement(&self) -> Decimal {
        self.forecast_h_units + self.safety_units + self.leadtime_units
    }
}

/// 淨需求計算器
pub struct NettingCalculator;

impl NettingCalculator {
    /// 計算淨需求
    ///
    /// 時界、提前期、安全庫存皆以「銷售天數」表示，乘上同一日均銷量換算為數量，
    /// 再扣除可用量（現有 + 在途）。結果不小於 0。
    pub fn calculate(
        totals: &WarehouseTotals,
        safety_stock_days: u32,
        config: &PlannerConfig,
    ) -> NetRequirement {
        let velocity = totals.avg_sales_30d;

        let safety_units = Decimal::from(safety_stock_days) * velocity;
        let leadtime_units = Decimal::from(config.leadtime_days) * velocity;
        let forecast_h_units = Decimal::from(config.horizon_days) * velocity;
        let available_units = totals.available_units();

        let raw_need = forecast_h_units + safety_units + leadtime_units - available_units;

        NetRequirement {
            safety_units,
            leadtime_units,
            forecast_h_units,
            available_units,
            inbound_need_units: raw_need.max(Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(stock: i64, inbound: i64, sales: Decimal) -> WarehouseTotals {
        WarehouseTotals {
            total_stock: Decimal::from(stock),
            total_inbound: Decimal::from(inbound),
            avg_sales_30d: sales,
        }
    }

    #[test]
    fn test_netting_calculation_simple() {
        let config = PlannerConfig::new();

        let result = NettingCalculator::calculate(&totals(100, 10, Decimal::from(2)), 30, &config);

        // 預測 90×2=180，安全 30×2=60，提前期 7×2=14，可用 110
        assert_eq!(result.forecast_h_units, Decimal::from(180));
        assert_eq!(result.safety_units, Decimal::from(60));
        assert_eq!(result.leadtime_units, Decimal::from(14));
        assert_eq!(result.available_units, Decimal::from(110));
        assert_eq!(result.gross_requirement(), Decimal::from(254));
        assert_eq!(result.inbound_need_units, Decimal::from(144));
    }

    #[test]
    fn test_netting_with_sufficient_inventory() {
        let config = PlannerConfig::new();

        let result = NettingCalculator::calculate(&totals(1000, 0, Decimal::from(2)), 14, &config);

        // 需求 222 < 可用 1000，淨需求為 0
        assert_eq!(result.inbound_need_units, Decimal::ZERO);
        assert_eq!(result.available_units, Decimal::from(1000));
    }

    #[test]
    fn test_netting_zero_velocity() {
        let config = PlannerConfig::new();

        let result = NettingCalculator::calculate(&totals(0, 0, Decimal::ZERO), 30, &config);

        assert_eq!(result.gross_requirement(), Decimal::ZERO);
        assert_eq!(result.inbound_need_units, Decimal::ZERO);
    }

    #[test]
    fn test_netting_fractional_velocity() {
        let config = PlannerConfig::new().with_horizon_days(30).with_leadtime_days(0);

        let result = NettingCalculator::calculate(&totals(3, 0, Decimal::new(5, 1)), 14, &config);

        // 30×0.5 + 14×0.5 - 3 = 19
        assert_eq!(result.inbound_need_units, Decimal::from(19));
    }
}
