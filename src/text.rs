/// Split text into chunks that each fit within `max_size` characters,
/// breaking only at line boundaries.
///
/// Lines are accumulated greedily: a chunk is closed as soon as the next
/// line would push it past `max_size`. A single line longer than
/// `max_size` still becomes its own chunk; the bound is best-effort,
/// never a reason to split mid-line. Joining the returned chunks with
/// `'\n'` reproduces the input exactly.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_size = 0usize;

    for line in text.split('\n') {
        let line_size = line.len() + 1; // +1 for the newline

        if current_size + line_size > max_size && !current.is_empty() {
            chunks.push(current.join("\n"));
            current = vec![line];
            current_size = line_size;
        } else {
            current.push(line);
            current_size += line_size;
        }
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks
}

/// First line of a multi-line text, used as the commit subject.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}

/// Truncate long strings for debug logging.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...\n[truncated {} chars]", &s[..end], s.len() - end)
    }
}
