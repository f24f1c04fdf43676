//! 單一 SKU × 店鋪的輸入記錄

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 倉庫
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warehouse {
    Vncb,
    Vnn,
    Vns,
    Vndb,
}

impl Warehouse {
    /// 所有倉庫（固定順序）
    pub const ALL: [Warehouse; 4] = [
        Warehouse::Vncb,
        Warehouse::Vnn,
        Warehouse::Vns,
        Warehouse::Vndb,
    ];

    /// 在數組中的位置
    pub fn index(&self) -> usize {
        match self {
            Warehouse::Vncb => 0,
            Warehouse::Vnn => 1,
            Warehouse::Vns => 2,
            Warehouse::Vndb => 3,
        }
    }

    /// 現有庫存欄位名稱
    pub fn stock_column(&self) -> &'static str {
        match self {
            Warehouse::Vncb => "total_stock_vncb",
            Warehouse::Vnn => "total_stock_vnn",
            Warehouse::Vns => "total_stock_vns",
            Warehouse::Vndb => "total_stock_vndb",
        }
    }

    /// 在途欄位名稱
    pub fn inbound_column(&self) -> &'static str {
        match self {
            Warehouse::Vncb => "vncb_inbounding",
            Warehouse::Vnn => "vnn_inbounding",
            Warehouse::Vns => "vns_inbounding",
            Warehouse::Vndb => "vndb_inbounding",
        }
    }

    /// 近 30 天日均銷量欄位名稱
    pub fn daily_sales_column(&self) -> &'static str {
        match self {
            Warehouse::Vncb => "l30_daily_itemsold_vncb",
            Warehouse::Vnn => "l30_daily_itemsold_vnn",
            Warehouse::Vns => "l30_daily_itemsold_vns",
            Warehouse::Vndb => "l30_daily_itemsold_vndb",
        }
    }
}

/// 各倉庫的數值，缺值為 `None`
pub type PerWarehouse = [Option<Decimal>; 4];

/// SKU 記錄（輸入表的一列）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    /// SKU ID
    pub sku_id: String,

    /// 平台 SKU ID
    pub mt_sku_id: String,

    /// 店鋪ID（空白儲存格為 None）
    pub shop_id: Option<i64>,

    /// 店鋪名稱
    pub shop_name: String,

    /// 商品名稱
    pub item_name: String,

    /// 原始品類標籤（保留原值，輸出時回顯）
    pub category_cluster: Option<String>,

    /// 現有庫存
    pub stock: PerWarehouse,

    /// 在途庫存
    pub inbound: PerWarehouse,

    /// 近 30 天日均銷量
    pub daily_sales: PerWarehouse,
}

impl SkuRecord {
    /// 創建新的記錄，所有數值為空
    pub fn new(sku_id: String, mt_sku_id: String) -> Self {
        Self {
            sku_id,
            mt_sku_id,
            shop_id: None,
            shop_name: String::new(),
            item_name: String::new(),
            category_cluster: None,
            stock: [None; 4],
            inbound: [None; 4],
            daily_sales: [None; 4],
        }
    }

    /// 建構器模式：設置店鋪
    pub fn with_shop(mut self, shop_id: i64, shop_name: String) -> Self {
        self.shop_id = Some(shop_id);
        self.shop_name = shop_name;
        self
    }

    /// 建構器模式：設置商品名稱
    pub fn with_item_name(mut self, item_name: String) -> Self {
        self.item_name = item_name;
        self
    }

    /// 建構器模式：設置品類
    pub fn with_category(mut self, category: &str) -> Self {
        self.category_cluster = Some(category.to_string());
        self
    }

    /// 建構器模式：設置某倉庫的現有庫存
    pub fn with_stock(mut self, warehouse: Warehouse, qty: Decimal) -> Self {
        self.stock[warehouse.index()] = Some(qty);
        self
    }

    /// 建構器模式：設置某倉庫的在途庫存
    pub fn with_inbound(mut self, warehouse: Warehouse, qty: Decimal) -> Self {
        self.inbound[warehouse.index()] = Some(qty);
        self
    }

    /// 建構器模式：設置某倉庫的日均銷量
    pub fn with_daily_sales(mut self, warehouse: Warehouse, rate: Decimal) -> Self {
        self.daily_sales[warehouse.index()] = Some(rate);
        self
    }

    pub fn stock_at(&self, warehouse: Warehouse) -> Option<Decimal> {
        self.stock[warehouse.index()]
    }

    pub fn inbound_at(&self, warehouse: Warehouse) -> Option<Decimal> {
        self.inbound[warehouse.index()]
    }

    pub fn daily_sales_at(&self, warehouse: Warehouse) -> Option<Decimal> {
        self.daily_sales[warehouse.index()]
    }
}
