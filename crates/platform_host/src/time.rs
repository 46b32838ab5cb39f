//! Wall-clock helpers for the taskbar clock.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading.
pub struct LocalTime {
    /// Hour of day, `0..24`.
    pub hour: u32,
    /// Minute of hour, `0..60`.
    pub minute: u32,
    /// Second of minute, `0..60`.
    pub second: u32,
}

impl LocalTime {
    /// Builds a reading from raw components, wrapping out-of-range values.
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Formats as `h:mm AM` (12-hour clock, 2-digit minutes).
    pub fn format_12h(self) -> String {
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        format!("{hour}:{:02} {suffix}", self.minute)
    }
}

/// Reads the local time. Non-wasm targets report UTC.
pub fn local_time_now() -> LocalTime {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        LocalTime::new(date.get_hours(), date.get_minutes(), date.get_seconds())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let secs = unix_time_ms_now() / 1000;
        let day_secs = (secs % 86_400) as u32;
        LocalTime::new(day_secs / 3600, (day_secs / 60) % 60, day_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_format_handles_midnight_and_noon() {
        assert_eq!(LocalTime::new(0, 5, 0).format_12h(), "12:05 AM");
        assert_eq!(LocalTime::new(12, 0, 59).format_12h(), "12:00 PM");
        assert_eq!(LocalTime::new(23, 59, 0).format_12h(), "11:59 PM");
        assert_eq!(LocalTime::new(9, 7, 30).format_12h(), "9:07 AM");
    }

    #[test]
    fn new_wraps_out_of_range_components() {
        assert_eq!(LocalTime::new(25, 61, 60), LocalTime::new(1, 1, 0));
    }

    #[test]
    fn local_time_is_in_range() {
        let now = local_time_now();
        assert!(now.hour < 24 && now.minute < 60 && now.second < 60);
    }
}
