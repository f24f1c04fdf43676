//! 品類分群與安全庫存天數政策

use serde::{Deserialize, Serialize};

/// 品類分群
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryCluster {
    /// 家電（ELHA）
    Elha,
    /// 快速消費品（FMCG）
    Fmcg,
    /// 其他
    Others,
}

impl CategoryCluster {
    /// 解析原始品類字串
    ///
    /// 僅 `"ELHA"` 與 `"FMCG"` 精確匹配（區分大小寫、不做正規化），
    /// 其餘任何值（含空值）一律視為 `Others`。
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("ELHA") => CategoryCluster::Elha,
            Some("FMCG") => CategoryCluster::Fmcg,
            _ => CategoryCluster::Others,
        }
    }

    /// 原始資料中的品類標籤
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryCluster::Elha => "ELHA",
            CategoryCluster::Fmcg => "FMCG",
            CategoryCluster::Others => "Others",
        }
    }
}

/// 各品類的安全庫存天數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyDaysPolicy {
    #[serde(rename = "ELHA")]
    pub elha: u32,

    #[serde(rename = "FMCG")]
    pub fmcg: u32,

    #[serde(rename = "Others")]
    pub others: u32,
}

impl SafetyDaysPolicy {
    pub fn new(elha: u32, fmcg: u32, others: u32) -> Self {
        Self { elha, fmcg, others }
    }

    /// 查詢品類對應的安全庫存天數
    pub fn days_for(&self, category: CategoryCluster) -> u32 {
        match category {
            CategoryCluster::Elha => self.elha,
            CategoryCluster::Fmcg => self.fmcg,
            CategoryCluster::Others => self.others,
        }
    }
}

impl Default for SafetyDaysPolicy {
    fn default() -> Self {
        Self {
            elha: 30,
            fmcg: 21,
            others: 14,
        }
    }
}
