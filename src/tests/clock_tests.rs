use time::macros::datetime;

use super::*;

#[test]
fn time_is_twelve_hour_zero_padded() {
    let dt = datetime!(2026-10-19 09:05:03 UTC);
    assert_eq!(fmt_time(dt), "09:05:03 AM");
    let dt = datetime!(2026-10-19 21:40:59 UTC);
    assert_eq!(fmt_time(dt), "09:40:59 PM");
}

#[test]
fn date_is_short_weekday_month_day() {
    let dt = datetime!(2026-10-19 12:00 UTC);
    assert_eq!(fmt_date(dt), "Mon, Oct 19");
    let dt = datetime!(2026-03-01 12:00 UTC);
    assert_eq!(fmt_date(dt), "Sun, Mar 1");
}
