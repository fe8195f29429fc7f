//! 日期工具模块
//!
//! 线路格式固定为 ISO 8601 日历日期 `YYYY-MM-DD`，
//! 与浏览器 `<input type="date">` 的取值格式一致。

use chrono::NaiveDate;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析 `YYYY-MM-DD` 字符串
///
/// 空白字符串或非法日期返回 None
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).ok()
}

/// 格式化为 `YYYY-MM-DD`
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
