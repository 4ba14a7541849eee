use std::time::Duration;

/// Parse an `M:SS` length. Minutes may have any number of digits.
pub fn parse_mmss(text: &str) -> Option<Duration> {
    let (m, s) = text.trim().split_once(':')?;
    let minutes: u64 = m.parse().ok()?;
    let seconds: u64 = s.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(Duration::from_secs(minutes * 60 + seconds))
}

/// Format whole seconds as `M:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Time elapsed at `progress` percent of a track `duration` long, floored to
/// whole seconds. An unparsable duration reads as `0:00`.
pub fn elapsed_text(duration: &str, progress: f64) -> String {
    let Some(total) = parse_mmss(duration) else {
        return format_mmss(Duration::ZERO);
    };
    let fraction = progress.clamp(0.0, 100.0) / 100.0;
    let current = (total.as_secs() as f64 * fraction).floor() as u64;
    format_mmss(Duration::from_secs(current))
}
