//! 補貨計算參數配置

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::SafetyDaysPolicy;
use crate::{IbError, Result};

/// 預測時界範圍（天）
pub const HORIZON_DAYS_RANGE: (u32, u32) = (7, 180);
/// 提前期範圍（天）
pub const LEADTIME_DAYS_RANGE: (u32, u32) = (0, 60);
/// 安全庫存天數範圍
pub const SAFETY_DAYS_RANGE: (u32, u32) = (0, 90);
/// 包裝倍數範圍
pub const PACK_SIZE_RANGE: (u32, u32) = (0, 1000);
/// 最小訂購量範圍
pub const MOQ_UNITS_RANGE: (u32, u32) = (0, 100_000);

/// 單次計算的參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 預測時界（天）
    pub horizon_days: u32,

    /// 供應商提前期（天）
    pub leadtime_days: u32,

    /// 各品類安全庫存天數
    pub safety_days: SafetyDaysPolicy,

    /// 包裝倍數（0 = 不啟用）
    pub pack_size: u32,

    /// 最小訂購量（0 = 不啟用）
    pub moq_units: u32,
}

impl PlannerConfig {
    /// 創建預設配置（90 天時界、7 天提前期）
    pub fn new() -> Self {
        Self {
            horizon_days: 90,
            leadtime_days: 7,
            safety_days: SafetyDaysPolicy::default(),
            pack_size: 0,
            moq_units: 0,
        }
    }

    /// 建構器模式：設置預測時界
    pub fn with_horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// 建構器模式：設置提前期
    pub fn with_leadtime_days(mut self, days: u32) -> Self {
        self.leadtime_days = days;
        self
    }

    /// 建構器模式：設置安全庫存政策
    pub fn with_safety_days(mut self, policy: SafetyDaysPolicy) -> Self {
        self.safety_days = policy;
        self
    }

    /// 建構器模式：設置包裝倍數
    pub fn with_pack_size(mut self, pack_size: u32) -> Self {
        self.pack_size = pack_size;
        self
    }

    /// 建構器模式：設置最小訂購量
    pub fn with_moq_units(mut self, moq: u32) -> Self {
        self.moq_units = moq;
        self
    }

    /// 從 JSON 字串讀取配置，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| IbError::ConfigFile(e.to_string()))
    }

    /// 從 JSON 檔案讀取配置
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| IbError::Io(format!("無法讀取 '{}': {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// 檢查所有參數是否在允許範圍內
    ///
    /// 由呼叫端在計算前執行；計算引擎本身不做檢查。
    pub fn validate(&self) -> Result<()> {
        check_range("horizon_days", self.horizon_days, HORIZON_DAYS_RANGE)?;
        check_range("leadtime_days", self.leadtime_days, LEADTIME_DAYS_RANGE)?;
        check_range("safety_days.ELHA", self.safety_days.elha, SAFETY_DAYS_RANGE)?;
        check_range("safety_days.FMCG", self.safety_days.fmcg, SAFETY_DAYS_RANGE)?;
        check_range("safety_days.Others", self.safety_days.others, SAFETY_DAYS_RANGE)?;
        check_range("pack_size", self.pack_size, PACK_SIZE_RANGE)?;
        check_range("moq_units", self.moq_units, MOQ_UNITS_RANGE)?;
        Ok(())
    }

    /// 調整建議量以符合 MOQ 與包裝倍數
    ///
    /// 只處理正數需求：先套用 MOQ 下限，再向上取整到包裝倍數。
    /// 零或負數原樣返回，不會憑空產生訂單。
    pub fn round_constraints(&self, mut quantity: Decimal) -> Decimal {
        if quantity <= Decimal::ZERO {
            return quantity;
        }

        // 應用最小訂購量
        if self.moq_units > 0 {
            quantity = quantity.max(Decimal::from(self.moq_units));
        }

        // 應用包裝倍數
        if self.pack_size > 0 {
            let pack = Decimal::from(self.pack_size);
            quantity = (quantity / pack).ceil() * pack;
        }

        quantity
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn check_range(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    if value < min || value > max {
        return Err(IbError::ConfigOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
