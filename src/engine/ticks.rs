use chrono::{Datelike, Duration, NaiveDate};

use crate::model::{Granularity, Tick};

/// Produce the ordered axis boundaries for a date span at one granularity.
///
/// Daily and Monthly return no explicit boundaries: the renderer's native
/// per-day / per-month axis is used, labelled via `Granularity::tick_format`.
/// For the other granularities the first boundary is snapped on or before
/// `min_start` and boundaries step one bucket at a time until they pass
/// `max_finish`, so the span is always fully covered.
pub fn tick_marks(min_start: NaiveDate, max_finish: NaiveDate, g: Granularity) -> Vec<Tick> {
    match g {
        Granularity::Daily | Granularity::Monthly => Vec::new(),
        Granularity::Weekly => weekly(min_start, max_finish),
        Granularity::Quarterly => quarterly(min_start, max_finish),
        Granularity::Semiannual => semiannual(min_start, max_finish),
        Granularity::Yearly => yearly(min_start, max_finish),
    }
}

/// Monday boundaries. The first is the Monday on or before the span start.
fn weekly(min_start: NaiveDate, max_finish: NaiveDate) -> Vec<Tick> {
    let offset = min_start.weekday().num_days_from_monday() as i64;
    let mut date = min_start - Duration::days(offset);

    let mut ticks = Vec::new();
    while date <= max_finish {
        ticks.push(Tick {
            at: date,
            label: date.format("%Y-%m-%d").to_string(),
        });
        date += Duration::days(7);
    }
    ticks
}

/// Quarter starts (Jan/Apr/Jul/Oct 1), from the quarter containing the span
/// start. Labelled `YYYY-Qn`.
fn quarterly(min_start: NaiveDate, max_finish: NaiveDate) -> Vec<Tick> {
    let quarter_month = (min_start.month0() / 3) * 3 + 1;
    let mut date = first_of(min_start.year(), quarter_month);

    let mut ticks = Vec::new();
    while date <= max_finish {
        ticks.push(Tick {
            at: date,
            label: format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
        });
        date = months_later(date, 3);
    }
    ticks
}

/// Six-month steps from the first of the span start's month. Labels report
/// the calendar half of the boundary month: H1 = Jan–Jun, H2 = Jul–Dec.
fn semiannual(min_start: NaiveDate, max_finish: NaiveDate) -> Vec<Tick> {
    let mut date = first_of(min_start.year(), min_start.month());

    let mut ticks = Vec::new();
    while date <= max_finish {
        let half = if date.month() <= 6 { 1 } else { 2 };
        ticks.push(Tick {
            at: date,
            label: format!("{}-H{}", date.year(), half),
        });
        date = months_later(date, 6);
    }
    ticks
}

/// Jan 1 of each year the span touches.
fn yearly(min_start: NaiveDate, max_finish: NaiveDate) -> Vec<Tick> {
    (min_start.year()..=max_finish.year())
        .map(|year| Tick {
            at: first_of(year, 1),
            label: year.to_string(),
        })
        .collect()
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    // Day 1 of a valid month always exists; MAX terminates the walk if the
    // year ever overflows chrono's range.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// Advance a first-of-month date by `months`.
fn months_later(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.month0() + months;
    first_of(date.year() + (total / 12) as i32, total % 12 + 1)
}
