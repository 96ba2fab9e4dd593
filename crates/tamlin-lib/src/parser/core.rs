//! Parser state: cursor, node store, recursion accounting.

use crate::ast::Arena;

use super::cursor::Cursor;
use super::error::Fault;

/// Hard limits on a single parse.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum nesting of recursive grammar rules (method bodies,
    /// packages inside packages, ...). The combinators themselves are
    /// iterative; this bounds the grammar's own recursion.
    pub max_depth: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

impl Limits {
    pub fn with_max_depth(mut self, limit: u32) -> Self {
        self.max_depth = limit;
        self
    }
}

/// State threaded through every grammar rule.
///
/// Owns the arena for the duration of the parse; [`Parser::into_arena`]
/// hands the finished forest back to the caller.
pub struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) arena: Arena,
    depth: u32,
    limits: Limits,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, Limits::default(), Arena::new())
    }

    /// Parse with explicit limits and a caller-provided arena, so faults
    /// can be provoked through arena budgets.
    pub fn with_limits(data: &'a [u8], limits: Limits, arena: Arena) -> Self {
        Self {
            cursor: Cursor::new(data),
            arena,
            depth: 0,
            limits,
        }
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn into_arena(self) -> Arena {
        self.arena
    }

    /// Guard for recursive grammar cut points. Every `enter_recursion`
    /// is paired with an `exit_recursion` on all return paths.
    pub(super) fn enter_recursion(&mut self) -> Result<(), Fault> {
        if self.depth >= self.limits.max_depth {
            return Err(Fault::DepthLimit {
                limit: self.limits.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
