/// Format a playback position as `M:SS`.
///
/// Minutes are not padded and keep growing past an hour. Unknown values
/// (NaN, infinite, negative) render as the `0:00` placeholder instead of
/// garbage, since the media element reports NaN until metadata loads.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(125.7), "2:05");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn unknown_values_render_placeholder() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
