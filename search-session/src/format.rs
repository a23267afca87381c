//! Display formatting for amounts and acceptance windows.
//!
//! Dates are shown in Japan Standard Time in the `ja-JP` short style
//! (`2024/4/1`, `2024/4/1 9:00:00`).

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use subsidy_client::UNDEFINED_LABEL;

const JST_OFFSET_HOURS: i64 = 9;

fn to_jst(dt: &DateTime<Utc>) -> NaiveDateTime {
    dt.naive_utc() + Duration::hours(JST_OFFSET_HOURS)
}

/// `12500000` → `12,500,000円`; missing → `未定義円`.
pub fn format_yen(amount: Option<u64>) -> String {
    match amount {
        Some(n) => format!("{}円", group_thousands(n)),
        None => format!("{UNDEFINED_LABEL}円"),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_date(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| to_jst(d).format("%Y/%-m/%-d").to_string())
        .unwrap_or_else(|| UNDEFINED_LABEL.to_string())
}

pub fn format_datetime(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|d| to_jst(d).format("%Y/%-m/%-d %-H:%M:%S").to_string())
        .unwrap_or_else(|| UNDEFINED_LABEL.to_string())
}

/// `start ～ end` with each side formatted by [`format_date`].
pub fn format_window(start: Option<&DateTime<Utc>>, end: Option<&DateTime<Utc>>) -> String {
    format!("{} ～ {}", format_date(start), format_date(end))
}
