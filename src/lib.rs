//! Allocation-free, zero-copy line cursor over a borrowed byte buffer.
//!
//! A [`LineCursor`] splits its buffer on `\n` bytes and walks the resulting
//! lines in either direction. Two sentinel states bracket the lines:
//! before-the-beginning and past-the-end. A cursor built with
//! [`LineCursor::from_start`] begins before the first line, and each call to
//! [`advance`](LineCursor::advance) moves it to the next one, returning
//! `false` once it runs past the last. This allows the usual iteration
//! pattern:
//!
//! ```
//! use line_cursor::LineCursor;
//!
//! let mut cursor = LineCursor::from_start("alpha\r\nbeta\n");
//! while cursor.advance() {
//!     println!("{}", cursor.text());
//! }
//! ```
//!
//! A carriage return directly before a line boundary is trimmed from the
//! reported content, so the loop above prints `alpha`, `beta`, and an empty
//! final line. In particular, the empty buffer contains one line and `"a\n"`
//! contains two (`"a"` and `""`). In the sentinel states the line accessors
//! return defaults as makes sense (empty slice, zero length).
//!
//! Traversal never allocates; only the lossy text accessors can, and only
//! when the bytes are not valid UTF-8.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod cursor;
mod scan;

pub use cursor::LineCursor;
