// Text formatters
//
// Shared formatting utilities for displaying feed data in the TUI.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Seconds per unit step: minute, hour, day, week, month, year
const UNIT_STEPS: [f64; 6] = [60.0, 60.0, 24.0, 7.0, 365.0 / 7.0 / 12.0, 12.0];

const UNIT_NAMES: [&str; 7] = ["second", "minute", "hour", "day", "week", "month", "year"];

/// Render a timestamp relative to `now`, timeago style
///
/// Under ten seconds reads as "just now"; a single unit reads as
/// "1 minute ago" rather than "1 minutes ago". Timestamps in the future
/// read as "in 3 minutes".
///
/// # Examples
/// ```ignore
/// assert_eq!(format_relative(now - Duration::seconds(3), now), "just now");
/// assert_eq!(format_relative(now - Duration::minutes(5), now), "5 minutes ago");
/// ```
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = (now - then).num_milliseconds() as f64 / 1000.0;
    let future = delta < 0.0;
    let mut diff = delta.abs();

    let mut unit = 0;
    while unit < UNIT_STEPS.len() && diff >= UNIT_STEPS[unit] {
        diff /= UNIT_STEPS[unit];
        unit += 1;
    }
    let value = diff.floor() as u64;

    if unit == 0 && value <= 9 {
        return if future { "right now" } else { "just now" }.to_string();
    }

    let name = UNIT_NAMES[unit];
    let amount = if value == 1 && unit > 0 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", value, name)
    };

    if future {
        format!("in {}", amount)
    } else {
        format!("{} ago", amount)
    }
}

/// Format a number with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Pluralize a count: "1 comment", "3 comments"
pub fn pluralize(n: usize, singular: &str) -> String {
    if n == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}s", format_number(n as u64), singular)
    }
}

/// Wrap text to fit within width, breaking at word boundaries
///
/// Hard newlines are kept (blank lines included). Words wider than the
/// line are split at the column limit. Uses unicode display width so emoji
/// and CJK take their real number of columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut result = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in raw_line.split_whitespace() {
            let word_width = word.width();

            if !current.is_empty() && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for c in word.chars() {
                let w = UnicodeWidthChar::width(c).unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        result.push(current);
    }

    result
}
