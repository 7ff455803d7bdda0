use chrono::{NaiveTime, Timelike};
use crate::constants::TIME_NUDGE_MINUTES;

/// Parse a time string in HH:MM:SS format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM:SS format.
pub fn parse_time_hms(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
}

/// Parse a time string in HH:MM format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM format.
pub fn parse_time_hm(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}

/// Convert a scheduled time to whole minutes since local midnight
///
/// An absent or blank time is minute 0. That is an explicit default, not a
/// parse failure. Only the leading `H:MM` fields are read, so seconds and any
/// truncated fraction after them (`8:04:59.`) are dropped. A string without a
/// valid hour and minute also maps to minute 0.
#[must_use]
pub fn time_to_minutes(time: Option<&str>) -> f64 {
    let Some(raw) = time.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0.0;
    };

    let hour_minute = raw.match_indices(':').nth(1).map_or(raw, |(i, _)| &raw[..i]);
    parse_time_hm(hour_minute).map_or(0.0, |t| f64::from(t.hour() * 60 + t.minute()))
}

/// Keep a per-train time cursor from moving backwards
///
/// Returns `next` when it does not precede `prev`, otherwise `prev` nudged
/// forward by [`TIME_NUDGE_MINUTES`]. Out-of-order or day-wrapped schedules
/// collapse onto a near-duplicate instant instead of wrapping.
#[must_use]
pub fn fix_time(prev: f64, next: f64) -> f64 {
    if next >= prev {
        next
    } else {
        prev + TIME_NUDGE_MINUTES
    }
}

/// Format an axis value in minutes as a zero-padded `HH:00` hour label
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_hour_label(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor() as i64;
    format!("{hours:02}:00")
}

/// Monotonic time cursor for one train's run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeCursor {
    last: f64,
}

impl TimeCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.last
    }

    /// Correct a leg's departure and arrival against the cursor and move the
    /// cursor to the corrected arrival
    pub fn advance(&mut self, departure: f64, arrival: f64) -> (f64, f64) {
        let dep = fix_time(self.last, departure);
        let arr = fix_time(dep, arrival);
        self.last = arr;
        (dep, arr)
    }

    /// Hold the train at its current position for `seconds`
    ///
    /// Returns the instant the dwell ends, or `None` when there is nothing to
    /// hold (absent, zero or negative dwell).
    pub fn dwell(&mut self, seconds: Option<f64>) -> Option<f64> {
        let seconds = seconds.filter(|s| *s > 0.0)?;
        self.last += seconds / 60.0;
        Some(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_minutes_hh_mm() {
        assert_eq!(time_to_minutes(Some("08:05")), 485.0);
    }

    #[test]
    fn test_time_to_minutes_with_seconds() {
        assert_eq!(time_to_minutes(Some("08:05:59")), 485.0);
    }

    #[test]
    fn test_time_to_minutes_single_digit_hour() {
        assert_eq!(time_to_minutes(Some("8:05:00")), 485.0);
    }

    #[test]
    fn test_time_to_minutes_truncated_fraction() {
        assert_eq!(time_to_minutes(Some("8:04:59.")), 484.0);
        assert_eq!(time_to_minutes(Some("10:04:59.9")), 604.0);
    }

    #[test]
    fn test_time_to_minutes_empty_string() {
        assert_eq!(time_to_minutes(Some("")), 0.0);
        assert_eq!(time_to_minutes(Some("   ")), 0.0);
    }

    #[test]
    fn test_time_to_minutes_missing() {
        assert_eq!(time_to_minutes(None), 0.0);
    }

    #[test]
    fn test_time_to_minutes_malformed() {
        assert_eq!(time_to_minutes(Some("soon")), 0.0);
        assert_eq!(time_to_minutes(Some("25:00")), 0.0);
    }

    #[test]
    fn test_parse_time_hms_invalid_format() {
        assert!(parse_time_hms("08:30").is_err());
        assert!(parse_time_hm("08:30").is_ok());
    }

    #[test]
    fn test_fix_time_moves_backwards_time_forward() {
        assert_eq!(fix_time(100.0, 90.0), 100.01);
    }

    #[test]
    fn test_fix_time_accepts_forward_time() {
        assert_eq!(fix_time(100.0, 150.0), 150.0);
        assert_eq!(fix_time(100.0, 100.0), 100.0);
    }

    #[test]
    fn test_format_hour_label() {
        assert_eq!(format_hour_label(0.0), "00:00");
        assert_eq!(format_hour_label(540.0), "09:00");
        assert_eq!(format_hour_label(1440.0), "24:00");
    }

    #[test]
    fn test_cursor_advance_and_dwell() {
        let mut cursor = TimeCursor::new();
        assert_eq!(cursor.advance(480.0, 490.0), (480.0, 490.0));
        assert_eq!(cursor.dwell(Some(180.0)), Some(493.0));
        assert_eq!(cursor.position(), 493.0);

        // Departure before the dwell ended gets pushed past the cursor
        let (dep, arr) = cursor.advance(491.0, 500.0);
        assert_eq!(dep, 493.01);
        assert_eq!(arr, 500.0);
    }

    #[test]
    fn test_cursor_ignores_empty_dwell() {
        let mut cursor = TimeCursor::new();
        cursor.advance(10.0, 20.0);
        assert_eq!(cursor.dwell(None), None);
        assert_eq!(cursor.dwell(Some(0.0)), None);
        assert_eq!(cursor.position(), 20.0);
    }
}
