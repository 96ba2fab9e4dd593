//! Byte cursor with restorable position and region bounding.

/// Snapshot of a cursor: position and region limit.
///
/// Restoring a mark rewinds both, so a rule that narrowed the region and
/// then failed still leaves the cursor exactly as it found it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    pos: usize,
    limit: usize,
}

/// Read cursor over a table's bytes.
///
/// `pos..limit` is the readable region. `limit` starts at the buffer end
/// and is tightened by [`Cursor::narrow`] while parsing a
/// PkgLength-delimited construct, so inner rules cannot read past the
/// region even on malformed input.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    limit: usize,
    high_water: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            limit: data.len(),
            high_water: 0,
        }
    }

    /// Bytes left in the current region.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.limit
    }

    /// Absolute offset from the start of the buffer.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Furthest offset any read has reached. Never rewound by
    /// [`Cursor::restore`]; this is where error reporting points after
    /// the backtracking has unwound.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        (self.pos < self.limit).then(|| self.data[self.pos])
    }

    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        let at = self.pos.checked_add(offset)?;
        (at < self.limit).then(|| self.data[at])
    }

    /// Consume one byte.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        self.high_water = self.high_water.max(self.pos);
        Some(byte)
    }

    /// Consume exactly `n` bytes, or nothing.
    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.remaining() < n {
            return None;
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        self.high_water = self.high_water.max(self.pos);
        Some(bytes)
    }

    /// Consume everything up to the region limit.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let bytes = &self.data[self.pos..self.limit];
        self.pos = self.limit;
        self.high_water = self.high_water.max(self.pos);
        bytes
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            limit: self.limit,
        }
    }

    #[inline]
    pub fn restore(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.limit = mark.limit;
    }

    /// Tighten the region to the next `len` bytes. Returns the previous
    /// limit for [`Cursor::widen`], or `None` when `len` overruns the
    /// current region.
    pub fn narrow(&mut self, len: usize) -> Option<usize> {
        if len > self.remaining() {
            return None;
        }
        let prev = self.limit;
        self.limit = self.pos + len;
        Some(prev)
    }

    /// Undo a [`Cursor::narrow`], re-exposing the enclosing region.
    pub fn widen(&mut self, prev_limit: usize) {
        debug_assert!(prev_limit >= self.limit);
        self.limit = prev_limit;
    }
}
