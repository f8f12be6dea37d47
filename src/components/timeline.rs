//! Shared timeline layout for the work-history and education sections,
//! plus the calendar-month arithmetic their period labels need.

use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

/// Calendar month, the resolution resume entries are kept at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// "Nov 2021"-style label.
    pub fn label(self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|date| date.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }

    /// The month we are in right now.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

/// Whole months between two year-months, counting both endpoints the way
/// resume durations do: Sep 2019 through Dec 2021 is 28 months.
pub fn months_between(start: YearMonth, end: YearMonth) -> i32 {
    (end.year - start.year) * 12 + end.month as i32 - start.month as i32 + 1
}

/// "3 yrs 4 mos"-style duration label.
pub fn format_duration(months: i32) -> String {
    let months = months.max(1);
    let years = months / 12;
    let rest = months % 12;

    let mut parts = Vec::new();
    match years {
        0 => {}
        1 => parts.push("1 yr".to_string()),
        _ => parts.push(format!("{years} yrs")),
    }
    match rest {
        0 => {}
        1 => parts.push("1 mo".to_string()),
        _ => parts.push(format!("{rest} mos")),
    }
    parts.join(" ")
}

/// One rendered row on a timeline.
#[derive(Clone, PartialEq)]
pub struct TimelineEntry {
    /// Date-range line, e.g. "Nov 2021 - Present (3 yrs 4 mos)".
    pub period: String,
    /// Role or course name.
    pub heading: String,
    /// Organization, rendered in the accent color.
    pub organization: String,
    /// Detail bullets.
    pub details: Vec<String>,
}

/// Vertical timeline: a bordered list with a dot per entry.
#[component]
pub fn Timeline(entries: Vec<TimelineEntry>) -> Element {
    rsx! {
        ol { class: "timeline",
            for entry in entries.iter() {
                li { class: "timeline-item",
                    div { class: "timeline-dot" }
                    time { class: "timeline-period", "{entry.period}" }
                    h3 { class: "timeline-heading",
                        "{entry.heading} at "
                        span { class: "timeline-org", "{entry.organization}" }
                    }
                    ul { class: "timeline-details",
                        for detail in entry.details.iter() {
                            li { "{detail}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_use_short_names() {
        assert_eq!(YearMonth::new(2021, 11).label(), "Nov 2021");
        assert_eq!(YearMonth::new(2018, 1).label(), "Jan 2018");
    }

    #[test]
    fn months_count_both_endpoints() {
        // Sep 2019 through Dec 2021: 2 yrs 4 mos on the resume.
        assert_eq!(
            months_between(YearMonth::new(2019, 9), YearMonth::new(2021, 12)),
            28
        );
        // Jan 2018 through Dec 2020: exactly 3 yrs.
        assert_eq!(
            months_between(YearMonth::new(2018, 1), YearMonth::new(2020, 12)),
            36
        );
        assert_eq!(
            months_between(YearMonth::new(2024, 3), YearMonth::new(2024, 3)),
            1
        );
    }

    #[test]
    fn durations_format_like_a_resume() {
        assert_eq!(format_duration(28), "2 yrs 4 mos");
        assert_eq!(format_duration(36), "3 yrs");
        assert_eq!(format_duration(13), "1 yr 1 mo");
        assert_eq!(format_duration(12), "1 yr");
        assert_eq!(format_duration(1), "1 mo");
        assert_eq!(format_duration(11), "11 mos");
    }

    #[test]
    fn zero_and_negative_durations_clamp() {
        assert_eq!(format_duration(0), "1 mo");
        assert_eq!(format_duration(-5), "1 mo");
    }
}
