//! Shared helpers for splitting assignments and reading integer lists.

/// Split a record body on commas that are not nested inside `[...]`.
///
/// Chunks are trimmed; empty chunks are dropped.
pub(crate) fn split_top_level(body: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (idx, ch) in body.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            ',' if depth == 0 => {
                push_chunk(&mut chunks, &body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    push_chunk(&mut chunks, &body[start..]);

    chunks
}

fn push_chunk<'a>(chunks: &mut Vec<&'a str>, chunk: &'a str) {
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
}

/// Parse the interior of a bracketed list into integers.
///
/// Tokens are separated by commas, semicolons or whitespace. Every token must
/// be a complete integer; otherwise `None` is returned. A blank interior
/// yields an empty list.
pub fn parse_int_list(inside: &str) -> Option<Vec<i64>> {
    inside
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<i64>().ok())
        .collect()
}

/// Strip one pair of surrounding square brackets.
pub(crate) fn bracket_interior(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    value.strip_prefix('[')?.strip_suffix(']')
}
