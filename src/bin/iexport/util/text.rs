/// Word-wraps `text` to `width` columns. Words longer than a line (long
/// identifier lists, paths) are split at the column limit.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        for piece in split_chars(word, width) {
            let piece_len = piece.chars().count();
            if current_len == 0 {
                current.push_str(&piece);
                current_len = piece_len;
            } else if current_len + 1 + piece_len <= width {
                current.push(' ');
                current.push_str(&piece);
                current_len += 1 + piece_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(&piece);
                current_len = piece_len;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

fn split_chars(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}
