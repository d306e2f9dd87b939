use std::borrow::Cow;

/// Thousands-separated rendering of a count.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Cap `text` at `max_chars` characters, marking the cut with an ellipsis.
/// Text that already fits is returned untouched.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => Cow::Owned(format!("{}...", &text[..idx])),
        None => Cow::Borrowed(text),
    }
}

/// Seconds to a `XmYs` display string, truncating fractional seconds.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let minutes = total / 60;
    let secs = total % 60;

    format!("{minutes}m {secs}s")
}

/// `YT_SEARCH` style API labels to `Yt Search` for display.
pub fn humanize_label(label: &str) -> String {
    label
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Hello", 50), "Hello");
        assert_eq!(truncate("exactly", 7), "exactly");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Hello world", 5), "Hello...");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo wörld", 4), "héll...");
    }

    #[test]
    fn duration_display() {
        assert_eq!(format_duration(0.0), "0m 0s");
        assert_eq!(format_duration(95.7), "1m 35s");
        assert_eq!(format_duration(600.0), "10m 0s");
    }

    #[test]
    fn humanize_api_labels() {
        assert_eq!(humanize_label("YT_SEARCH"), "Yt Search");
        assert_eq!(humanize_label("EXT_URL"), "Ext Url");
        assert_eq!(humanize_label("ADVERTISING"), "Advertising");
    }
}
