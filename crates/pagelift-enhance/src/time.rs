//! Timestamp formatting
//!
//! Rewrites marked elements' text from their `data-time` attribute, and
//! exposes the pure duration/elapsed-hours helpers. chrono plays the role
//! of the host date parser; rendering happens in a fixed display offset so
//! results are stable regardless of where the scan runs.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};
use pagelift_dom::Document;

use crate::Enhancer;

/// Class marking an element for time formatting
pub const FORMAT_TIME_CLASS: &str = "format-time";

/// Attribute carrying the raw timestamp
pub const TIME_ATTR: &str = "data-time";

/// Attribute selecting the output style
pub const FORMAT_ATTR: &str = "data-format";

/// Output style for a formatted instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// `D Mon YYYY`, e.g. `15 Mar 2025`
    Date,
    /// `D Mon`, e.g. `15 Mar`
    DateShort,
    /// `HH:MM` 24-hour, e.g. `14:30`
    Time,
    /// `D Mon, HH:MM`, e.g. `15 Mar, 14:30`
    #[default]
    DateTime,
    /// `D Mon YYYY, HH:MM`, e.g. `15 Mar 2025, 14:30`
    Full,
}

impl TimeStyle {
    /// Parse a `data-format` value. Absent and unrecognized values both
    /// fall back to `DateTime`; a typo'd attribute still renders something.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("date") => Self::Date,
            Some("date-short") => Self::DateShort,
            Some("time") => Self::Time,
            Some("full") => Self::Full,
            Some("datetime") | None => Self::DateTime,
            Some(other) => {
                tracing::debug!(format = other, "unrecognized format kind, using datetime");
                Self::DateTime
            }
        }
    }
}

/// Formats time-marked elements and computes durations
#[derive(Debug, Clone, Copy)]
pub struct TimeFormatter {
    /// Display offset applied to every parsed instant
    offset: FixedOffset,
}

impl TimeFormatter {
    /// Formatter rendering in the given offset
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Formatter rendering in the host's current local offset
    pub fn local() -> Self {
        Self::new(*Local::now().offset())
    }

    /// Formatter rendering in UTC
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// The display offset
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Parse a raw timestamp into an instant in the display offset.
    ///
    /// Accepts RFC 3339 (offset-carrying) strings, naive ISO date-times
    /// with `T` or space separators, and bare dates (taken as midnight).
    /// Naive values are interpreted in the display offset.
    pub fn parse_timestamp(&self, raw: &str) -> Option<DateTime<FixedOffset>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&self.offset));
        }

        const NAIVE_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return naive.and_local_timezone(self.offset).single();
            }
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        date.and_hms_opt(0, 0, 0)?
            .and_local_timezone(self.offset)
            .single()
    }

    /// Render an instant in one of the five styles
    pub fn render(&self, instant: &DateTime<FixedOffset>, style: TimeStyle) -> String {
        match style {
            TimeStyle::Date => format!(
                "{} {} {}",
                instant.day(),
                instant.format("%b"),
                instant.year()
            ),
            TimeStyle::DateShort => format!("{} {}", instant.day(), instant.format("%b")),
            TimeStyle::Time => format!("{:02}:{:02}", instant.hour(), instant.minute()),
            TimeStyle::DateTime => format!(
                "{}, {}",
                self.render(instant, TimeStyle::DateShort),
                self.render(instant, TimeStyle::Time)
            ),
            TimeStyle::Full => format!(
                "{}, {}",
                self.render(instant, TimeStyle::Date),
                self.render(instant, TimeStyle::Time)
            ),
        }
    }

    /// Rewrite the text of every `.format-time` element in the document.
    ///
    /// Elements without a `data-time` attribute are left untouched; an
    /// unparseable timestamp ends up displayed verbatim. Nothing here ever
    /// escalates a failure past the element it belongs to.
    pub fn format_time_elements(&self, document: &mut Document) {
        let targets = document.elements_with_class(FORMAT_TIME_CLASS);
        let mut formatted = 0;
        for element in targets {
            let Some(raw) = document.tree().get_attr(element, TIME_ATTR).map(str::to_owned)
            else {
                continue;
            };
            let style = TimeStyle::parse(document.tree().get_attr(element, FORMAT_ATTR));

            let text = match self.parse_timestamp(&raw) {
                Some(instant) => {
                    formatted += 1;
                    self.render(&instant, style)
                }
                None => {
                    tracing::debug!(timestamp = %raw, "unparseable timestamp, displaying raw value");
                    raw
                }
            };
            if let Err(err) = document.tree_mut().set_text_content(element, &text) {
                tracing::error!(%err, "failed to write formatted time");
            }
        }
        tracing::debug!(formatted, "time element scan finished");
    }

    /// Elapsed fractional hours between two raw timestamps.
    ///
    /// The end defaults to now when absent; an absent or unparseable start
    /// yields `0.0`.
    pub fn elapsed_hours(&self, start: Option<&str>, end: Option<&str>) -> f64 {
        let Some(start) = start.and_then(|raw| self.parse_timestamp(raw)) else {
            return 0.0;
        };
        let end = end
            .and_then(|raw| self.parse_timestamp(raw))
            .unwrap_or_else(|| Utc::now().with_timezone(&self.offset));

        let diff_ms = end.signed_duration_since(start).num_milliseconds() as f64;
        diff_ms / 3_600_000.0
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::local()
    }
}

impl Enhancer for TimeFormatter {
    fn name(&self) -> &'static str {
        "time-formatter"
    }

    fn enhance(&self, document: &mut Document) {
        self.format_time_elements(document);
    }
}

/// Convert fractional hours to `HH:MM`, rounding the minutes component to
/// the nearest whole minute and carrying a rounded `60` into the hour.
/// `None` yields `"00:00"`.
pub fn format_duration(hours: Option<f64>) -> String {
    let Some(hours) = hours else {
        return "00:00".to_string();
    };
    let mut whole_hours = hours.floor() as i64;
    let mut minutes = ((hours - hours.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        whole_hours += 1;
        minutes = 0;
    }
    format!("{whole_hours:02}:{minutes:02}")
}

/// Elapsed fractional hours between two raw timestamps, in the host's
/// local offset. See [`TimeFormatter::elapsed_hours`].
pub fn calculate_hours(start: Option<&str>, end: Option<&str>) -> f64 {
    TimeFormatter::local().elapsed_hours(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> TimeFormatter {
        TimeFormatter::utc()
    }

    #[test]
    fn test_style_parse_is_lenient() {
        assert_eq!(TimeStyle::parse(Some("date")), TimeStyle::Date);
        assert_eq!(TimeStyle::parse(Some("date-short")), TimeStyle::DateShort);
        assert_eq!(TimeStyle::parse(Some("time")), TimeStyle::Time);
        assert_eq!(TimeStyle::parse(Some("full")), TimeStyle::Full);
        assert_eq!(TimeStyle::parse(Some("datetime")), TimeStyle::DateTime);
        assert_eq!(TimeStyle::parse(None), TimeStyle::DateTime);
        assert_eq!(TimeStyle::parse(Some("dattime")), TimeStyle::DateTime);
    }

    #[test]
    fn test_render_styles() {
        let formatter = utc();
        let instant = formatter.parse_timestamp("2025-03-15T14:30:00Z").unwrap();

        assert_eq!(formatter.render(&instant, TimeStyle::Date), "15 Mar 2025");
        assert_eq!(formatter.render(&instant, TimeStyle::DateShort), "15 Mar");
        assert_eq!(formatter.render(&instant, TimeStyle::Time), "14:30");
        assert_eq!(formatter.render(&instant, TimeStyle::DateTime), "15 Mar, 14:30");
        assert_eq!(formatter.render(&instant, TimeStyle::Full), "15 Mar 2025, 14:30");
    }

    #[test]
    fn test_render_pads_clock_not_day() {
        let formatter = utc();
        let instant = formatter.parse_timestamp("2025-01-05T08:05:00Z").unwrap();

        assert_eq!(formatter.render(&instant, TimeStyle::Full), "5 Jan 2025, 08:05");
    }

    #[test]
    fn test_parse_naive_and_date_only() {
        let formatter = utc();

        let naive = formatter.parse_timestamp("2025-03-15T14:30:00").unwrap();
        assert_eq!(formatter.render(&naive, TimeStyle::Time), "14:30");

        let spaced = formatter.parse_timestamp("2025-03-15 14:30:00").unwrap();
        assert_eq!(formatter.render(&spaced, TimeStyle::Time), "14:30");

        let date_only = formatter.parse_timestamp("2025-03-15").unwrap();
        assert_eq!(formatter.render(&date_only, TimeStyle::Full), "15 Mar 2025, 00:00");
    }

    #[test]
    fn test_parse_offset_conversion() {
        let formatter = utc();
        let instant = formatter.parse_timestamp("2025-03-15T14:30:00+02:00").unwrap();
        assert_eq!(formatter.render(&instant, TimeStyle::Time), "12:30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let formatter = utc();
        assert!(formatter.parse_timestamp("yesterday-ish").is_none());
        assert!(formatter.parse_timestamp("").is_none());
        assert!(formatter.parse_timestamp("2025-13-40").is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "00:00");
        assert_eq!(format_duration(Some(1.5)), "01:30");
        assert_eq!(format_duration(Some(0.0)), "00:00");
        assert_eq!(format_duration(Some(0.999)), "01:00");
        assert_eq!(format_duration(Some(10.25)), "10:15");
    }

    #[test]
    fn test_elapsed_hours() {
        let formatter = utc();

        assert_eq!(formatter.elapsed_hours(None, Some("2025-03-15T14:30:00Z")), 0.0);
        assert_eq!(formatter.elapsed_hours(Some("not a time"), None), 0.0);
        assert_eq!(
            formatter.elapsed_hours(Some("2025-03-15T14:30:00Z"), Some("2025-03-15T14:30:00Z")),
            0.0
        );
        assert_eq!(
            formatter.elapsed_hours(Some("2025-03-15T12:00:00Z"), Some("2025-03-15T13:30:00Z")),
            1.5
        );
    }

    #[test]
    fn test_elapsed_hours_defaults_to_now() {
        let formatter = utc();
        let hours = formatter.elapsed_hours(Some("2000-01-01T00:00:00Z"), None);
        assert!(hours > 0.0);
    }

    #[test]
    fn test_calculate_hours_free_function() {
        assert_eq!(calculate_hours(None, None), 0.0);
        assert_eq!(
            calculate_hours(Some("2025-03-15T14:30:00"), Some("2025-03-15T14:30:00")),
            0.0
        );
    }
}
