//! Telegram `MarkdownV2` text helpers.

/// Characters that must be escaped outside code spans in `MarkdownV2`.
const SPECIAL_CHARS: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Wrap text in an inline code span.
///
/// Inside code spans only `` ` `` and `\` need escaping.
pub fn code(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('`');
    for c in text.chars() {
        if c == '`' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('`');
    result
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
