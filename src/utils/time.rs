use chrono::{DateTime, Utc};

/// Format a stored timestamp as a human-friendly label relative to `now`.
///
/// Buckets, by whole days elapsed:
/// * under a minute: "just now"
/// * same day: minutes or hours ago
/// * one day: "Yesterday at HH:MM"
/// * two to six days: weekday name plus time
/// * anything else (including future timestamps): absolute date and time
pub fn format_relative_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(timestamp);

    if delta.num_seconds() < 0 {
        return absolute(timestamp);
    }

    match delta.num_days() {
        0 => {
            let hours = delta.num_hours();
            if hours == 0 {
                let minutes = delta.num_minutes();
                match minutes {
                    0 => "just now".to_string(),
                    1 => "1 minute ago".to_string(),
                    _ => format!("{} minutes ago", minutes),
                }
            } else if hours == 1 {
                "1 hour ago".to_string()
            } else {
                format!("{} hours ago", hours)
            }
        }
        1 => format!("Yesterday at {}", timestamp.format("%H:%M")),
        2..=6 => timestamp.format("%A at %H:%M").to_string(),
        _ => absolute(timestamp),
    }
}

fn absolute(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}
