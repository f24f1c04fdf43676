//! CSV 輸入表讀取
//!
//! 欄位名稱須與資料來源完全一致（區分大小寫、不去除空白）。
//! 識別欄位與品類欄位為必要欄位；四倉數值欄位缺少時整欄視為空值。
//! 文字儲存格原樣保留，僅數值儲存格在解析前去除前後空白。

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use inbound_core::{IbError, Result, SkuRecord, Warehouse};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 必要欄位（缺少任一則整批中止）
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "sku_id",
    "mt_sku_id",
    "shop_id",
    "shop_name",
    "item_name",
    "category_cluster",
];

/// 視為空值的儲存格內容（比對時不分大小寫）
const NULL_MARKERS: [&str; 9] = [
    "na", "nan", "-nan", "null", "none", "n/a", "#n/a", "#n/a n/a", "<na>",
];

/// 數值儲存格的絕對值上限
///
/// 四倉加總後即使乘上 `u32::MAX` 天仍遠低於 `Decimal::MAX`，計算過程不會溢位。
pub const MAX_CELL_ABS: i64 = 1_000_000_000_000;

/// 欄位索引
struct ColumnIndex {
    required: [usize; 6],
    stock: [Option<usize>; 4],
    inbound: [Option<usize>; 4],
    daily_sales: [Option<usize>; 4],
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !positions.contains_key(*c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IbError::Schema { missing });
        }

        let mut required = [0; 6];
        for (slot, column) in required.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
            *slot = positions[column];
        }

        let lookup = |column: &str| {
            let idx = positions.get(column).copied();
            if idx.is_none() {
                tracing::warn!("缺少數值欄位 '{}'，整欄視為 0", column);
            }
            idx
        };

        let mut stock = [None; 4];
        let mut inbound = [None; 4];
        let mut daily_sales = [None; 4];
        for warehouse in Warehouse::ALL {
            let i = warehouse.index();
            stock[i] = lookup(warehouse.stock_column());
            inbound[i] = lookup(warehouse.inbound_column());
            daily_sales[i] = lookup(warehouse.daily_sales_column());
        }

        Ok(Self {
            required,
            stock,
            inbound,
            daily_sales,
        })
    }
}

/// 從 CSV reader 讀取所有記錄
///
/// 整份資料讀完才返回；任何錯誤都不產生部分結果。
pub fn load_records<R: Read>(reader: R) -> Result<Vec<SkuRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| IbError::Csv(format!("無法讀取表頭: {}", e)))?
        .clone();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let row = row_idx + 1;
        let raw = result.map_err(|e| IbError::Csv(format!("第 {} 列解析失敗: {}", row, e)))?;
        records.push(parse_record(&raw, &headers, &index, row)?);
    }

    tracing::info!("讀取 {} 筆記錄", records.len());
    Ok(records)
}

/// 從 CSV 檔案讀取所有記錄
pub fn load_records_file(path: impl AsRef<Path>) -> Result<Vec<SkuRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| IbError::Io(format!("無法開啟 '{}': {}", path.display(), e)))?;
    load_records(file)
}

fn parse_record(
    raw: &csv::StringRecord,
    headers: &csv::StringRecord,
    index: &ColumnIndex,
    row: usize,
) -> Result<SkuRecord> {
    let text = |i: usize| raw.get(index.required[i]).unwrap_or("").to_string();

    let category = text(5);
    let mut record = SkuRecord::new(text(0), text(1));
    record.shop_id = parse_shop_id(raw.get(index.required[2]).unwrap_or(""), row)?;
    record.shop_name = text(3);
    record.item_name = text(4);
    record.category_cluster = if is_null(&category) { None } else { Some(category) };

    let number = |idx: Option<usize>| -> Result<Option<Decimal>> {
        match idx {
            Some(i) => parse_decimal(raw.get(i).unwrap_or(""), headers.get(i).unwrap_or(""), row),
            None => Ok(None),
        }
    };

    for warehouse in Warehouse::ALL {
        let i = warehouse.index();
        record.stock[i] = number(index.stock[i])?;
        record.inbound[i] = number(index.inbound[i])?;
        record.daily_sales[i] = number(index.daily_sales[i])?;
    }

    Ok(record)
}

fn is_null(cell: &str) -> bool {
    cell.is_empty() || NULL_MARKERS.contains(&cell.to_ascii_lowercase().as_str())
}

/// 解析數值儲存格；超出 [`MAX_CELL_ABS`] 視為無效
fn parse_decimal(cell: &str, column: &str, row: usize) -> Result<Option<Decimal>> {
    let trimmed = cell.trim();
    if is_null(trimmed) {
        return Ok(None);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .filter(|value| value.abs() <= Decimal::from(MAX_CELL_ABS))
        .map(Some)
        .ok_or_else(|| IbError::InvalidValue {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
}

/// 店鋪ID允許 "1" 或 "1.0" 形式
fn parse_shop_id(cell: &str, row: usize) -> Result<Option<i64>> {
    let invalid = || IbError::InvalidValue {
        row,
        column: "shop_id".to_string(),
        value: cell.to_string(),
    };

    let trimmed = cell.trim();
    if is_null(trimmed) {
        return Ok(None);
    }
    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(Some(id));
    }

    let value = Decimal::from_str(trimmed).map_err(|_| invalid())?;
    if !value.fract().is_zero() {
        return Err(invalid());
    }
    value.to_i64().map(Some).ok_or_else(invalid)
}
