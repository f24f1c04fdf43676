//! 補貨建議 CSV 匯出

use std::io::Write;
use std::path::Path;

use inbound_core::{IbError, InboundSuggestion, Result};
use rust_decimal::Decimal;

/// 輸出欄位（順序固定）
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "sku_id",
    "mt_sku_id",
    "shop_name",
    "item_name",
    "category_cluster",
    "avg_sales_30d",
    "total_stock",
    "total_inbound",
    "safety_stock_days",
    "forecast_h_units",
    "available_units",
    "inbound_need_units",
    "IB_suggest_units",
    "coverage_after_IB_days",
];

/// 覆蓋天數輸出的小數位數
const COVERAGE_DP: u32 = 2;

/// 寫出 UTF-8 CSV（含表頭）
pub fn write_suggestions<W: Write>(writer: W, rows: &[InboundSuggestion]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(OUTPUT_COLUMNS).map_err(csv_error)?;
    for row in rows {
        wtr.write_record(to_fields(row)).map_err(csv_error)?;
    }

    wtr.flush().map_err(|e| IbError::Io(e.to_string()))?;
    Ok(())
}

/// 寫出到檔案
pub fn write_suggestions_file(path: impl AsRef<Path>, rows: &[InboundSuggestion]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .map_err(|e| IbError::Io(format!("無法建立 '{}': {}", path.display(), e)))?;
    write_suggestions(file, rows)?;

    tracing::info!("已匯出 {} 筆至 '{}'", rows.len(), path.display());
    Ok(())
}

fn to_fields(row: &InboundSuggestion) -> [String; 14] {
    [
        row.sku_id.clone(),
        row.mt_sku_id.clone(),
        row.shop_name.clone(),
        row.item_name.clone(),
        row.category_cluster.clone().unwrap_or_default(),
        fmt_decimal(row.avg_sales_30d),
        fmt_decimal(row.total_stock),
        fmt_decimal(row.total_inbound),
        row.safety_stock_days.to_string(),
        fmt_decimal(row.forecast_h_units),
        fmt_decimal(row.available_units),
        fmt_decimal(row.inbound_need_units),
        fmt_decimal(row.ib_suggest_units),
        row.coverage_after_ib_days
            .map(|d| fmt_decimal(d.round_dp(COVERAGE_DP)))
            .unwrap_or_default(),
    ]
}

fn fmt_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn csv_error(e: csv::Error) -> IbError {
    IbError::Csv(e.to_string())
}
