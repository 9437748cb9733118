#[cfg(feature = "alloc")]
use alloc::{borrow::Cow, string::String};

use crate::scan;

/// Where the cursor sits relative to the lines of the buffer.
///
/// `delim` is the offset of the delimiter terminating the current line (or
/// the buffer length for the final, delimiter-less line) and is where the
/// next forward or backward scan resumes. `end` already excludes a trimmed
/// trailing `\r`, so `start <= end <= delim` holds on every real line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Position {
    BeforeStart,
    OnLine { start: usize, end: usize, delim: usize },
    PastEnd,
}

/// Bidirectional cursor over the lines of a borrowed byte buffer.
///
/// Copying a `LineCursor` produces an independent cursor with the same state
/// over the same buffer.
#[derive(Copy, Clone, Debug)]
pub struct LineCursor<'a> {
    data: &'a [u8],
    pos: Position,
    rel: isize,
    cached_count: Option<usize>,
}

impl<'a> LineCursor<'a> {
    /// Builds a cursor in the before-the-beginning state.
    pub fn from_start<T: AsRef<[u8]> + ?Sized>(data: &'a T) -> Self {
        Self {
            data: data.as_ref(),
            pos: Position::BeforeStart,
            rel: 0,
            cached_count: None,
        }
    }

    /// Builds a cursor in the past-the-end state.
    pub fn from_end<T: AsRef<[u8]> + ?Sized>(data: &'a T) -> Self {
        Self {
            data: data.as_ref(),
            pos: Position::PastEnd,
            rel: 0,
            cached_count: None,
        }
    }

    /// Moves the cursor to the next line.
    ///
    /// Returns `false` once the cursor runs past the last line; the cursor
    /// then stays in the past-the-end state and further calls keep returning
    /// `false`. Exhausting a traversal that started from the begin sentinel
    /// memoizes the total line count as a side effect.
    pub fn advance(&mut self) -> bool {
        let start = match self.pos {
            Position::BeforeStart => 0,
            Position::OnLine { delim, .. } => delim + 1,
            Position::PastEnd => return false,
        };
        if start > self.data.len() {
            if self.rel > 0 {
                self.cached_count = Some(self.rel as usize);
            }
            self.rel = 0;
            self.pos = Position::PastEnd;
            return false;
        }
        let delim = scan::next_delimiter(self.data, start);
        let end = scan::trim_carriage_return(self.data, delim);
        self.pos = Position::OnLine { start, end, delim };
        self.rel += 1;
        true
    }

    /// Moves the cursor to the previous line.
    ///
    /// Mirror image of [`advance`](Self::advance): returns `false` once the
    /// cursor runs past the first line, and exhausting a traversal that
    /// started from the end sentinel memoizes the total line count.
    pub fn retreat(&mut self) -> bool {
        let delim = match self.pos {
            Position::BeforeStart => return false,
            Position::OnLine { start, .. } => {
                if start == 0 {
                    if self.rel < 0 {
                        self.cached_count = Some(-self.rel as usize);
                    }
                    self.rel = 0;
                    self.pos = Position::BeforeStart;
                    return false;
                }
                start - 1
            }
            Position::PastEnd => self.data.len(),
        };
        let start = scan::prev_line_start(self.data, delim);
        let end = scan::trim_carriage_return(self.data, delim);
        self.pos = Position::OnLine { start, end, delim };
        self.rel -= 1;
        true
    }

    /// Resets the cursor to the before-the-beginning state. A cached line
    /// count survives the seek.
    pub fn seek_to_start(&mut self) {
        self.pos = Position::BeforeStart;
        self.rel = 0;
    }

    /// Resets the cursor to the past-the-end state.
    pub fn seek_to_end(&mut self) {
        self.pos = Position::PastEnd;
        self.rel = 0;
    }

    /// Start offset of the current line, or `None` in a sentinel state.
    pub fn offset(&self) -> Option<usize> {
        match self.pos {
            Position::OnLine { start, .. } => Some(start),
            _ => None,
        }
    }

    /// Current line as a byte slice, empty in a sentinel state.
    ///
    /// The slice borrows from the buffer, not the cursor, so it stays valid
    /// across further navigation.
    pub fn bytes(&self) -> &'a [u8] {
        match self.pos {
            Position::OnLine { start, end, .. } => &self.data[start..end],
            _ => &[],
        }
    }

    /// Current line as text, empty in a sentinel state. Allocates only when
    /// the line is not valid UTF-8.
    #[cfg(feature = "alloc")]
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes())
    }

    /// Length of the current line, 0 in a sentinel state.
    pub fn length(&self) -> usize {
        match self.pos {
            Position::OnLine { start, end, .. } => end - start,
            _ => 0,
        }
    }

    /// True when the cursor points at a real line rather than a sentinel.
    pub fn is_valid(&self) -> bool {
        matches!(self.pos, Position::OnLine { .. })
    }

    /// The entire underlying buffer.
    pub fn full_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// The entire underlying buffer as text.
    #[cfg(feature = "alloc")]
    pub fn full_text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.data)
    }

    /// Length of the underlying buffer.
    pub fn full_length(&self) -> usize {
        self.data.len()
    }

    /// Line number counted from the most recent sentinel the cursor departed
    /// from: 0 at either sentinel, positive when counting from the begin
    /// sentinel, negative when counting from the end sentinel (the line
    /// nearest the end is -1).
    pub fn relative_line_number(&self) -> isize {
        self.rel
    }

    /// Absolute 1-based line number, or 0 in the before-the-beginning state.
    ///
    /// When the cursor counted from the end sentinel this needs the total
    /// line count, so it may trigger the same full-buffer scan as
    /// [`line_count`](Self::line_count). In the past-the-end state it
    /// reports one past the last line.
    pub fn line_number(&mut self) -> usize {
        if self.rel > 0 {
            return self.rel as usize;
        }
        if self.pos == Position::BeforeStart {
            return 0;
        }
        (self.line_count() as isize + self.rel + 1) as usize
    }

    /// The cached total line count, or 0 when it has not been determined
    /// yet. Never scans the buffer.
    pub fn optional_line_count(&self) -> usize {
        self.cached_count.unwrap_or(0)
    }

    /// Total number of lines in the buffer, scanning it on first use and
    /// caching the result for the life of the cursor.
    pub fn line_count(&mut self) -> usize {
        match self.cached_count {
            Some(count) => count,
            None => {
                let count = scan::count_lines(self.data);
                log::trace!("counted {} lines in {} byte buffer", count, self.data.len());
                self.cached_count = Some(count);
                count
            }
        }
    }

    pub fn debug(&self) {
        log::info!(
            "cursor over {} bytes: {:?}, relative line {}, cached count {:?}",
            self.data.len(),
            self.pos,
            self.rel,
            self.cached_count
        );
    }
}
