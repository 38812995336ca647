pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// First character of every name part: "Jordan Banks" -> "JB"
pub fn format_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Title-case an uppercase status: "HIGHLY RECOMMENDED" -> "Highly Recommended"
pub fn recommendation_label(status: &str) -> String {
    status
        .split(' ')
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
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_initials_joins_first_chars() {
        assert_eq!(format_initials("Jordan Banks"), "JB");
        assert_eq!(format_initials("Priya"), "P");
    }

    #[test]
    fn test_recommendation_label_title_cases() {
        assert_eq!(
            recommendation_label("HIGHLY RECOMMENDED"),
            "Highly Recommended"
        );
        assert_eq!(
            recommendation_label("NOT RECOMMENDED"),
            "Not Recommended"
        );
    }
}
