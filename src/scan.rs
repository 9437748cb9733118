//! Delimiter scanning over raw bytes.

/// Offset of the next `\n` at or after `from`, or `data.len()` when the rest
/// of the buffer holds none.
pub(crate) fn next_delimiter(data: &[u8], from: usize) -> usize {
    match memchr::memchr(b'\n', &data[from..]) {
        Some(idx) => from + idx,
        None => data.len(),
    }
}

/// Start offset of the line terminated by the boundary at `delim`: one past
/// the previous `\n`, or 0 when there is none.
pub(crate) fn prev_line_start(data: &[u8], delim: usize) -> usize {
    match memchr::memrchr(b'\n', &data[..delim]) {
        Some(idx) => idx + 1,
        None => 0,
    }
}

/// Excludes a `\r` that is the last byte before the boundary at `end`.
pub(crate) fn trim_carriage_return(data: &[u8], end: usize) -> usize {
    if end != 0 && data[end - 1] == b'\r' {
        end - 1
    } else {
        end
    }
}

/// Total number of lines in `data`, one more than the number of delimiters.
pub(crate) fn count_lines(data: &[u8]) -> usize {
    memchr::memchr_iter(b'\n', data).count() + 1
}
