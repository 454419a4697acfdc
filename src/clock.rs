use std::sync::OnceLock;

use time::OffsetDateTime;
use time::format_description::FormatItem;

fn time_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[hour repr:12 padding:zero]:[minute padding:zero]:[second padding:zero] [period]",
        )
        .expect("valid time format")
    })
}

fn date_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[weekday repr:short], [month repr:short] [day padding:none]")
            .expect("valid date format")
    })
}

/// Local wall-clock time, or UTC when the local offset can't be determined.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn fmt_time(dt: OffsetDateTime) -> String {
    dt.format(time_format())
        .unwrap_or_else(|_| "--:--:--".to_string())
}

pub fn fmt_date(dt: OffsetDateTime) -> String {
    dt.format(date_format()).unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/clock_tests.rs"]
mod tests;
