//! 示範資料（未上傳檔案時使用）

use inbound_core::{SkuRecord, Warehouse};
use rust_decimal::Decimal;

/// 三筆示範記錄：ELHA / FMCG / Others 各一
pub fn sample_records() -> Vec<SkuRecord> {
    let rows = [
        ("A", "111_1", "SKU A", "ELHA", 100, 10, Decimal::from(2)),
        ("B", "222_2", "SKU B", "FMCG", 50, 0, Decimal::from(4)),
        ("C", "333_3", "SKU C", "Others", 0, 0, Decimal::new(5, 1)),
    ];

    rows.into_iter()
        .map(|(sku, mt_sku, item, category, stock, inbound, sales)| {
            let mut record = SkuRecord::new(sku.to_string(), mt_sku.to_string())
                .with_shop(1, "LG Official Store".to_string())
                .with_item_name(item.to_string())
                .with_category(category);

            for warehouse in Warehouse::ALL {
                record = record
                    .with_stock(warehouse, Decimal::ZERO)
                    .with_inbound(warehouse, Decimal::ZERO)
                    .with_daily_sales(warehouse, Decimal::ZERO);
            }

            record
                .with_stock(Warehouse::Vncb, Decimal::from(stock))
                .with_inbound(Warehouse::Vncb, Decimal::from(inbound))
                .with_daily_sales(Warehouse::Vncb, sales)
        })
        .collect()
}
