//! 補貨後覆蓋天數

use rust_decimal::Decimal;

/// 計算補貨後可覆蓋天數
///
/// 日均銷量為 0 時返回 `None`（不適用），不做除法。
pub fn coverage_after_inbound(
    available_units: Decimal,
    suggested_units: Decimal,
    avg_sales_30d: Decimal,
) -> Option<Decimal> {
    if avg_sales_30d <= Decimal::ZERO {
        return None;
    }
    (available_units + suggested_units).checked_div(avg_sales_30d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage() {
        let days = coverage_after_inbound(Decimal::from(110), Decimal::from(144), Decimal::from(2));

        assert_eq!(days, Some(Decimal::from(127)));
    }

    #[test]
    fn test_coverage_fractional() {
        let days = coverage_after_inbound(Decimal::from(50), Decimal::from(25), Decimal::from(4));

        assert_eq!(days, Some(Decimal::new(1875, 2)));
    }

    #[test]
    fn test_zero_velocity_not_applicable() {
        assert_eq!(
            coverage_after_inbound(Decimal::from(100), Decimal::ZERO, Decimal::ZERO),
            None
        );
    }
}
