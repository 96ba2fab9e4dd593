//! Backtracking parser over a raw byte cursor.
//!
//! Grammar rules are plain functions composed from five primitives:
//! [`Parser::sequence`], [`Parser::series`], [`Parser::repetition`],
//! [`Parser::null_terminated`] and [`Parser::choice`]. Every rule obeys
//! one contract: on a match the cursor has advanced past exactly the
//! matched bytes and the returned forest owns every node built; on a
//! mismatch or a fault the cursor and the node store are byte-for-byte
//! as the rule found them. Mismatches are recoverable (alternation tries
//! the next branch); faults abort the whole parse and are never masked.

mod combinators;
mod core;
mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod core_tests;
#[cfg(test)]
mod cursor_tests;

pub use core::{Limits, Parser};
pub use cursor::{Cursor, Mark};
pub use error::Fault;

use crate::ast::NodeId;

/// Outcome of one parse attempt.
///
/// `Ok(Some(id))` — matched, forest rooted at `id`. `Ok(None)` — the
/// input does not fit this rule; nothing was consumed or kept.
/// `Err(fault)` — fatal, unwinds through every in-progress combinator.
pub type ParseResult = Result<Option<NodeId>, Fault>;

/// A grammar rule: any function from parser state to a parse outcome.
///
/// Rules are plain `fn` pointers, so grammar methods like
/// `Parser::name_string` can be passed to combinators directly.
pub type Rule<'a> = fn(&mut Parser<'a>) -> ParseResult;
