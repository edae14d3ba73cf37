//! Notice folder name parsing for the `YYYYMMDD-Title_Words` convention.
//!
//! A notice folder name carries its publication date and title:
//!
//! - `20240115-New_Policy` → date "2024-01-15", title "New Policy", id "New-Policy"
//! - `20231201-holiday_closure_notice` → display name "Holiday Closure Notice"
//!
//! The name is split on the **first** hyphen only, so titles may contain
//! hyphens themselves (`20240301-Covid-19_update` → title "Covid-19 update").
//! Underscores become spaces in the title; the id turns those spaces into
//! hyphens again.
//!
//! ## Date Validation
//!
//! The date part must be exactly eight ASCII digits with a month of `01-12`
//! and a day of `01-31`. Anything else is rejected with [`NameError`] rather
//! than sliced into a garbage date.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("date part {0:?} is not eight digits (expected YYYYMMDD)")]
    DateFormat(String),
    #[error("date part {0:?} has month or day out of range")]
    DateRange(String),
}

/// Result of parsing a notice folder name like `20240115-New_Policy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeName {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Title part with underscores as spaces, trimmed.
    pub title: String,
    /// Title with spaces replaced by hyphens.
    pub id: String,
    /// Title-cased title, used as the display name of every attached file.
    pub display_name: String,
}

/// Parse a notice folder name.
///
/// Returns `Ok(None)` when the name has no hyphen at all (not a notice
/// folder), and an error when the date part is malformed.
pub fn parse_notice_name(name: &str) -> Result<Option<NoticeName>, NameError> {
    let Some((date_part, title_part)) = name.split_once('-') else {
        return Ok(None);
    };
    let date = format_date(date_part)?;
    let title = title_part.replace('_', " ").trim().to_string();
    Ok(Some(NoticeName {
        date,
        id: title.replace(' ', "-"),
        display_name: title_case(&title),
        title,
    }))
}

/// Turn `YYYYMMDD` into `YYYY-MM-DD`.
fn format_date(raw: &str) -> Result<String, NameError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NameError::DateFormat(raw.to_string()));
    }
    let (year, rest) = raw.split_at(4);
    let (month, day) = rest.split_at(2);
    let in_range = |s: &str, max: u32| s.parse::<u32>().is_ok_and(|n| (1..=max).contains(&n));
    if !in_range(month, 12) || !in_range(day, 31) {
        return Err(NameError::DateRange(raw.to_string()));
    }
    Ok(format!("{year}-{month}-{day}"))
}

/// Title-case a string: the first letter of every run of letters is
/// uppercased and the rest of the run lowercased.
///
/// Any non-letter ends a run, so `"it's 2nd"` becomes `"It'S 2Nd"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
