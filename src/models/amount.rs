use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 金额 (整数分，避免浮点误差)
///
/// 只接受 `^\d+\.\d{2}$` 形式的字符串：无符号、无千分位、无科学计数法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

/// 金额解析失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("must be in the format '0.00'")]
    Malformed,
    #[error("is too large")]
    Overflow,
}

impl Amount {
    pub const fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// 分部分是否为 "00"
    pub const fn is_whole(self) -> bool {
        self.0 % 100 == 0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').ok_or(AmountError::Malformed)?;

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed);
        }
        if frac.len() != 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed);
        }

        // 整数部分允许前导零，逐位累加防溢出
        let mut cents: u64 = 0;
        for b in whole.bytes().chain(frac.bytes()) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(u64::from(b - b'0')))
                .ok_or(AmountError::Overflow)?;
        }

        Ok(Amount(cents))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
