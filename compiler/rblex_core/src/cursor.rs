//! Byte cursor over the source text with a line counter.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, so lookahead never goes out of bounds; EOF is reported
//! only when the position has reached the source length.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against `source_len`.
//! A null at `pos < source_len` is ordinary input (an UNKNOWN token, or
//! string/comment content); a null at `pos >= source_len` is EOF.
//!
//! # Line Counting
//!
//! [`advance_char()`](Cursor::advance_char) never touches the line counter. The state
//! machine calls [`newline()`](Cursor::newline) exactly once for every `\n`
//! it consumes, whether while skipping whitespace or inside a string.

/// Byte cursor with one-byte lookahead and a 1-based line counter.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    src: &'src str,
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Length of the source in bytes.
    source_len: u32,
    /// Line of the byte at `pos`, 1-based.
    line: u32,
}

impl<'src> Cursor<'src> {
    /// Create a new cursor at position 0, line 1.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `source_len`; bytes
    /// beyond it are treated as end of input.
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
            line: 1,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.src.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Returns the character starting at the current position, or `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.src
            .get(self.pos as usize..self.source_len as usize)
            .and_then(|rest| rest.chars().next())
    }

    /// Returns `true` if the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(
            self.pos + n <= self.source_len,
            "advance_n({n}) runs past EOF"
        );
        self.pos += n;
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Record that a `\n` was just consumed.
    #[inline]
    pub fn newline(&mut self) {
        self.line += 1;
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on character boundaries.
    /// The scanner only ever advances by whole characters, so positions it
    /// hands back satisfy this.
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'src str {
        self.slice(start, self.pos)
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used by the comment state when no transition trace is recorded.
    /// The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.src.as_bytes()[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }
}
