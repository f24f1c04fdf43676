//! 補貨建議模型（計算結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 補貨建議（每列輸入對應一筆）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundSuggestion {
    pub sku_id: String,
    pub mt_sku_id: String,
    pub shop_id: Option<i64>,
    pub shop_name: String,
    pub item_name: String,

    /// 原始品類標籤
    pub category_cluster: Option<String>,

    /// 四倉日均銷量合計
    pub avg_sales_30d: Decimal,

    /// 四倉現有庫存合計
    pub total_stock: Decimal,

    /// 四倉在途合計
    pub total_inbound: Decimal,

    /// 套用的安全庫存天數
    pub safety_stock_days: u32,

    /// 安全庫存量
    pub safety_units: Decimal,

    /// 提前期需求量
    pub leadtime_units: Decimal,

    /// 預測時界需求量
    pub forecast_h_units: Decimal,

    /// 可用量（現有 + 在途）
    pub available_units: Decimal,

    /// 淨需求（不小於 0）
    pub inbound_need_units: Decimal,

    /// 套用 MOQ/包裝倍數後的建議補貨量
    pub ib_suggest_units: Decimal,

    /// 補貨後可覆蓋天數；無銷量時為 None（不適用）
    pub coverage_after_ib_days: Option<Decimal>,
}

impl InboundSuggestion {
    /// 是否需要補貨
    pub fn needs_inbound(&self) -> bool {
        self.ib_suggest_units > Decimal::ZERO
    }

    /// 取整後超出淨需求的數量
    pub fn rounding_overhead(&self) -> Decimal {
        self.ib_suggest_units - self.inbound_need_units
    }
}
