use crate::models::{Amount, Item, Receipt};
use chrono::{Datelike, Timelike};

/// 单条规则的得分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: u64,
}

/// 计算收据积分 (七条规则之和)
///
/// 调用方须保证 `receipt` 已通过 [`Validator`](super::Validator) 校验。
pub fn score(receipt: &Receipt) -> u64 {
    total(&breakdown(receipt))
}

/// 明细求和 (饱和加法)
pub fn total(parts: &[RuleContribution]) -> u64 {
    parts.iter().fold(0u64, |acc, c| acc.saturating_add(c.points))
}

/// 各规则得分明细，顺序固定
pub fn breakdown(receipt: &Receipt) -> Vec<RuleContribution> {
    vec![
        RuleContribution {
            rule: "retailer_alphanumeric",
            points: retailer_points(&receipt.retailer),
        },
        RuleContribution {
            rule: "round_dollar_total",
            points: round_dollar_points(receipt.total),
        },
        RuleContribution {
            rule: "quarter_multiple_total",
            points: quarter_multiple_points(receipt.total),
        },
        RuleContribution {
            rule: "item_pairs",
            points: item_pair_points(&receipt.items),
        },
        RuleContribution {
            rule: "description_length",
            points: description_points(&receipt.items),
        },
        RuleContribution {
            rule: "odd_purchase_day",
            points: odd_day_points(receipt.purchase_date.day()),
        },
        RuleContribution {
            rule: "afternoon_purchase",
            points: afternoon_points(receipt.purchase_time.hour()),
        },
    ]
}

// 1. 商户名中每个字母或数字 +1
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

// 2. 整元金额 +50
pub fn round_dollar_points(total: Amount) -> u64 {
    if total.is_whole() {
        50
    } else {
        0
    }
}

// 3. 0.25 的整数倍 +25
pub fn quarter_multiple_points(total: Amount) -> u64 {
    if total.cents() % 25 == 0 {
        25
    } else {
        0
    }
}

// 4. 每两件商品 +5
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * 5
}

// 5. 描述去空白后长度为 3 的正整数倍：round(price * 0.2)
pub fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(item_description_points)
        .fold(0u64, u64::saturating_add)
}

pub fn item_description_points(item: &Item) -> u64 {
    let len = item.short_description.trim().chars().count();
    if len > 0 && len % 3 == 0 {
        fifth_rounded(item.price)
    } else {
        0
    }
}

/// price * 0.2 四舍五入 (0.5 远离零)，按分精确计算：cents / 500
pub fn fifth_rounded(price: Amount) -> u64 {
    let cents = price.cents();
    cents / 500 + u64::from(cents % 500 >= 250)
}

// 6. 购买日为奇数 +6
pub fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 {
        6
    } else {
        0
    }
}

// 7. 购买时间小时为 14 或 15 +10 (16:00 不算)
pub fn afternoon_points(hour: u32) -> u64 {
    if hour == 14 || hour == 15 {
        10
    } else {
        0
    }
}
