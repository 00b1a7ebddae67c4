//! Message shaping for Telegram delivery.

use crate::application::report::markdown::escape_markdown;

/// Telegram rejects messages longer than 4096 characters; leave headroom.
pub const MESSAGE_CHAR_LIMIT: usize = 4000;

/// Split a report into messages no longer than `limit` characters.
///
/// Splits on blank lines so report blocks stay intact. A single block longer
/// than `limit` is cut on line boundaries, and a single line longer than
/// `limit` is cut on character boundaries.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for block in text.split("\n\n") {
        push_piece(&mut chunks, &mut current, block, "\n\n", limit);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn push_piece(
    chunks: &mut Vec<String>,
    current: &mut String,
    piece: &str,
    separator: &str,
    limit: usize,
) {
    let piece_len = piece.chars().count();
    let current_len = current.chars().count();
    let separator_len = if current.is_empty() {
        0
    } else {
        separator.chars().count()
    };

    if current_len + separator_len + piece_len <= limit {
        if !current.is_empty() {
            current.push_str(separator);
        }
        current.push_str(piece);
        return;
    }

    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }

    if piece_len <= limit {
        current.push_str(piece);
    } else if separator != "\n" && piece.contains('\n') {
        for line in piece.split('\n') {
            push_piece(chunks, current, line, "\n", limit);
        }
    } else {
        let chars: Vec<char> = piece.chars().collect();
        for slice in chars.chunks(limit) {
            if !current.is_empty() {
                chunks.push(std::mem::take(current));
            }
            current.extend(slice.iter());
        }
    }
}

/// Message sent by `check telegram` to confirm delivery works.
pub fn format_test_message(timestamp: &str) -> String {
    format!(
        "✅ *yieldwatch test message*\n\
        \n\
        🕒 {}\n\
        The bot is working\\. No securities are required to be at target for this check\\.",
        escape_markdown(timestamp)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_single_chunk() {
        let chunks = split_message("hello\n\nworld", 100);
        assert_eq!(chunks, vec!["hello\n\nworld".to_string()]);
    }

    #[test]
    fn test_splits_on_block_boundaries() {
        let text = "aaaa\n\nbbbb\n\ncccc";
        let chunks = split_message(text, 10);
        assert_eq!(chunks, vec!["aaaa\n\nbbbb", "cccc"]);
    }

    #[test]
    fn test_oversized_block_splits_on_lines() {
        let text = "line-one\nline-two\nline-three";
        let chunks = split_message(text, 18);
        assert_eq!(chunks, vec!["line-one\nline-two", "line-three"]);
    }

    #[test]
    fn test_oversized_line_splits_on_chars() {
        let chunks = split_message("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_chunks_respect_limit_with_multibyte_text() {
        let text = "國泰永續高股息\n\n群益台灣精選高息\n\n元大高股息";
        for chunk in split_message(text, 9) {
            assert!(chunk.chars().count() <= 9, "chunk too long: {chunk}");
        }
    }

    #[test]
    fn test_test_message_escapes_timestamp() {
        let message = format_test_message("2026-10-19 14:30");
        assert!(message.contains("2026\\-10\\-19 14:30"));
        assert!(message.contains("working\\."));
    }
}
