//! 四倉彙總

use inbound_core::SkuRecord;
use rust_decimal::Decimal;

/// 加總，缺值視為 0
pub fn sum_or_zero<'a, I>(values: I) -> Decimal
where
    I: IntoIterator<Item = &'a Option<Decimal>>,
{
    values.into_iter().flatten().copied().sum()
}

/// 單列的四倉彙總結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarehouseTotals {
    /// 現有庫存合計
    pub total_stock: Decimal,
    /// 在途合計
    pub total_inbound: Decimal,
    /// 日均銷量合計
    pub avg_sales_30d: Decimal,
}

impl WarehouseTotals {
    /// 彙總一列記錄
    pub fn from_record(record: &SkuRecord) -> Self {
        Self {
            total_stock: sum_or_zero(&record.stock),
            total_inbound: sum_or_zero(&record.inbound),
            avg_sales_30d: sum_or_zero(&record.daily_sales),
        }
    }

    /// 可用量（現有 + 在途）
    pub fn available_units(&self) -> Decimal {
        self.total_stock + self.total_inbound
    }
}
