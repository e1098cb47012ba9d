use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// "今天" 的参考时区
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateReference {
    /// 服务器本地日期
    #[default]
    Local,
    Utc,
}

/// 日期来源，用于校验购买日期不晚于今天
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    reference: DateReference,
}

impl SystemClock {
    pub fn new(reference: DateReference) -> Self {
        Self { reference }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.reference {
            DateReference::Local => Local::now().date_naive(),
            DateReference::Utc => Utc::now().date_naive(),
        }
    }
}

/// 固定日期 (测试用)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
