use crate::error::FieldError;
use crate::models::{Amount, AmountError, Item, Receipt, DATE_FORMAT};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde_json::{Map, Value};

const DATE_REASON: &str = "purchase date must be a valid date in the format 'YYYY-MM-DD'";
const TIME_REASON: &str = "purchase time must be a valid 24h time in the format 'HH:MM'";

/// 收据校验器：把原始 JSON 字段解析为 [`Receipt`]
///
/// 顶层字段逐个检查，错误全部收集后一起返回；明细按下标报告 (`items[1].price`)。
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    today: NaiveDate,
}

impl Validator {
    /// `today` 为购买日期上限 (含当天)
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn parse(&self, raw: &Value) -> Result<Receipt, Vec<FieldError>> {
        let Some(obj) = raw.as_object() else {
            return Err(vec![FieldError::format("body", "receipt must be a JSON object")]);
        };

        let mut errors = Vec::new();

        let retailer = keep(
            &mut errors,
            str_field(obj, "retailer").and_then(|(v, f)| validate_retailer(v, f)),
        );
        let purchase_date = keep(
            &mut errors,
            str_field(obj, "purchaseDate")
                .and_then(|(v, f)| validate_purchase_date(v, f, self.today)),
        );
        let purchase_time = keep(
            &mut errors,
            str_field(obj, "purchaseTime").and_then(|(v, f)| validate_purchase_time(v, f)),
        );
        let items = match validate_items(obj.get("items")) {
            Ok(items) => Some(items),
            Err(item_errors) => {
                errors.extend(item_errors);
                None
            }
        };
        let total = keep(
            &mut errors,
            str_field(obj, "total").and_then(|(v, f)| validate_amount("total", v, f)),
        );

        match (retailer, purchase_date, purchase_time, items, total) {
            (Some(retailer), Some(purchase_date), Some(purchase_time), Some(items), Some(total))
                if errors.is_empty() =>
            {
                Ok(Receipt {
                    retailer,
                    purchase_date,
                    purchase_time,
                    items,
                    total,
                })
            }
            _ => Err(errors),
        }
    }
}

fn keep<T>(errors: &mut Vec<FieldError>, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

/// 取字符串字段；缺失或类型不符均为格式错误
fn str_field<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<(&'a str, String), FieldError> {
    field_at(obj, field, field.to_string())
}

fn field_at<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    path: String,
) -> Result<(&'a str, String), FieldError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(FieldError::format(path, "field is required")),
        Some(Value::String(s)) => Ok((s.as_str(), path)),
        Some(_) => Err(FieldError::format(path, "must be a string")),
    }
}

/// 商户名：`^[\w\s\-&]+$` 全匹配
pub fn validate_retailer(value: &str, field: String) -> Result<String, FieldError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-' | '&'));

    if valid {
        Ok(value.to_string())
    } else {
        Err(FieldError::format(
            field,
            "retailer must be non-empty and contain only letters, digits, spaces, '-', '_' or '&'",
        ))
    }
}

/// 购买日期：格式 + 真实日历日期 + 不晚于今天
pub fn validate_purchase_date(
    value: &str,
    field: String,
    today: NaiveDate,
) -> Result<NaiveDate, FieldError> {
    if !matches_digit_pattern(value, "dddd-dd-dd") {
        return Err(FieldError::format(field, DATE_REASON));
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FieldError::format(field.clone(), DATE_REASON))?;
    // 公元 1 年之前不是有效日期
    if date.year() < 1 {
        return Err(FieldError::format(field, DATE_REASON));
    }

    if date > today {
        return Err(FieldError::semantic(
            field,
            format!("purchase date cannot be after {}", today.format(DATE_FORMAT)),
        ));
    }
    Ok(date)
}

/// 购买时间：`HH:MM`，小时 0-23，分钟 0-59
pub fn validate_purchase_time(value: &str, field: String) -> Result<NaiveTime, FieldError> {
    if !matches_digit_pattern(value, "dd:dd") {
        return Err(FieldError::format(field, TIME_REASON));
    }
    let hour: u32 = value[..2].parse().map_err(|_| FieldError::format(field.clone(), TIME_REASON))?;
    let minute: u32 = value[3..].parse().map_err(|_| FieldError::format(field.clone(), TIME_REASON))?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| FieldError::format(field, TIME_REASON))
}

fn validate_amount(label: &str, value: &str, field: String) -> Result<Amount, FieldError> {
    value
        .parse::<Amount>()
        .map_err(|e: AmountError| FieldError::format(field, format!("{label} {e}")))
}

fn validate_items(raw: Option<&Value>) -> Result<Vec<Item>, Vec<FieldError>> {
    let entries = match raw {
        None | Some(Value::Null) => return Err(vec![FieldError::format("items", "field is required")]),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(vec![FieldError::format("items", "must be a list of items")]),
    };

    let mut items = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            errors.push(FieldError::format(format!("items[{idx}]"), "item must be a JSON object"));
            continue;
        };

        let description = keep(
            &mut errors,
            field_at(obj, "shortDescription", format!("items[{idx}].shortDescription")).and_then(
                |(value, field)| {
                    if value.is_empty() {
                        Err(FieldError::format(field, "short description must not be empty"))
                    } else {
                        Ok(value.to_string())
                    }
                },
            ),
        );
        let price = keep(
            &mut errors,
            field_at(obj, "price", format!("items[{idx}].price"))
                .and_then(|(v, f)| validate_amount("item price", v, f)),
        );

        if let (Some(short_description), Some(price)) = (description, price) {
            items.push(Item {
                short_description,
                price,
            });
        }
    }

    if errors.is_empty() {
        Ok(items)
    } else {
        Err(errors)
    }
}

/// 按模板逐字符匹配：`d` 为 ASCII 数字，其余字符须相同
fn matches_digit_pattern(value: &str, pattern: &str) -> bool {
    value.len() == pattern.len()
        && value.bytes().zip(pattern.bytes()).all(|(v, p)| match p {
            b'd' => v.is_ascii_digit(),
            _ => v == p,
        })
}
