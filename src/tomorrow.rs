//! Tomorrow's date printer.
//!
//! Independent of the FizzBuzz code. Prints a heading followed by tomorrow's
//! local date in ISO form (`2024-01-05`) and in Japanese form (`2024年1月5日`).

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, warn};

use crate::error::{FizzBuzzError, Result};

const HEADING: &str = "明日の日付は:";
const FAILURE: &str = "明日の日付を取得できませんでした。";

/// The day after `today`, or `None` past the end of the representable range.
pub fn tomorrow_of(today: NaiveDate) -> Option<NaiveDate> {
    today.succ_opt()
}

/// `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY年M月D日`, month and day without zero padding.
pub fn format_jp(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Output lines for the day after `today`.
pub fn render(today: NaiveDate) -> Result<Vec<String>> {
    let tomorrow = tomorrow_of(today).ok_or(FizzBuzzError::DateOutOfRange)?;
    debug!(%today, %tomorrow, "computed tomorrow");
    Ok(vec![
        HEADING.to_string(),
        format_iso(tomorrow),
        format_jp(tomorrow),
    ])
}

/// Lines for stdout and the exit code. A date that cannot be computed
/// yields the single failure line and status 1.
pub fn output(today: NaiveDate) -> (Vec<String>, i32) {
    match render(today) {
        Ok(lines) => (lines, 0),
        Err(e) => {
            warn!(error = %e, "could not compute tomorrow");
            (vec![FAILURE.to_string()], 1)
        }
    }
}

/// Entrypoint for the `tomorrow` binary.
pub fn run() {
    crate::logger::init_cli_logger(false);

    let (lines, code) = output(Local::now().date_naive());
    for line in &lines {
        println!("{}", line);
    }
    if code != 0 {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(tomorrow_of(date(2024, 2, 28)), Some(date(2024, 2, 29)));
        assert_eq!(tomorrow_of(date(2023, 2, 28)), Some(date(2023, 3, 1)));
    }

    #[test]
    fn test_year_rollover() {
        assert_eq!(tomorrow_of(date(2023, 12, 31)), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_formats() {
        let d = date(2024, 1, 5);
        assert_eq!(format_iso(d), "2024-01-05");
        assert_eq!(format_jp(d), "2024年1月5日");
    }

    #[test]
    fn test_render() {
        let lines = render(date(2024, 3, 9)).unwrap();
        assert_eq!(lines, ["明日の日付は:", "2024-03-10", "2024年3月10日"]);
    }

    #[test]
    fn test_render_out_of_range() {
        let res = render(NaiveDate::MAX);
        assert!(matches!(res, Err(FizzBuzzError::DateOutOfRange)));
    }

    #[test]
    fn test_output_failure_line() {
        let (lines, code) = output(NaiveDate::MAX);
        assert_eq!(code, 1);
        assert_eq!(lines, ["明日の日付を取得できませんでした。"]);

        let (lines, code) = output(date(2024, 1, 4));
        assert_eq!(code, 0);
        assert_eq!(lines.len(), 3);
    }
}
