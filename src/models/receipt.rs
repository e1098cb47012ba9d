use super::Amount;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use serde_json::{json, Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// 收据明细
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// 校验通过的收据 (只读)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Amount,
}

impl Receipt {
    /// 还原为提交时的 JSON 字段
    pub fn to_raw(&self) -> Value {
        json!({
            "retailer": self.retailer,
            "purchaseDate": self.purchase_date.format(DATE_FORMAT).to_string(),
            "purchaseTime": self.purchase_time.format(TIME_FORMAT).to_string(),
            "items": self.items,
            "total": self.total,
        })
    }
}
