//! Opcode constants and the low-level matchers shared by every rule.
//!
//! Opcodes that leave a leaf node are spelled inline at their single
//! rule site, right next to the tag name; only bytes that are consumed
//! silently or used in more than one place get a named constant here.

use crate::ast::{NodeId, NodeKind};
use crate::parser::{Fault, Mark, ParseResult, Parser, Rule};

/// Escape byte in front of the second opcode page.
pub(super) const EXT_OP_PREFIX: u8 = 0x5B;

pub(super) const ALIAS_OP: u8 = 0x06;
pub(super) const NAME_OP: u8 = 0x08;
pub(super) const SCOPE_OP: u8 = 0x10;
pub(super) const BANK_FIELD_OP: u8 = 0x87;
pub(super) const CONTINUE_OP: u8 = 0x9F;
pub(super) const IF_OP: u8 = 0xA0;
pub(super) const ELSE_OP: u8 = 0xA1;
pub(super) const NOOP_OP: u8 = 0xA3;
pub(super) const BREAK_OP: u8 = 0xA5;
pub(super) const BREAKPOINT_OP: u8 = 0xCC;

pub(super) const DUAL_NAME_PREFIX: u8 = 0x2E;
pub(super) const MULTI_NAME_PREFIX: u8 = 0x2F;
pub(super) const NULL_NAME: u8 = 0x00;

pub(super) const ROOT_CHAR: u8 = b'\\';
pub(super) const PARENT_PREFIX_CHAR: u8 = b'^';

// FieldElement discriminators.
pub(super) const RESERVED_FIELD: u8 = 0x00;
pub(super) const ACCESS_FIELD: u8 = 0x01;
pub(super) const CONNECT_FIELD: u8 = 0x02;
pub(super) const EXTENDED_ACCESS_FIELD: u8 = 0x03;

pub(super) fn is_lead_name_char(c: u8) -> bool {
    c.is_ascii_uppercase() || c == b'_'
}

pub(super) fn is_name_char(c: u8) -> bool {
    is_lead_name_char(c) || c.is_ascii_digit()
}

impl<'a> Parser<'a> {
    /// Consume `op` without emitting a node.
    pub(super) fn eat_op(&mut self, op: u8) -> bool {
        if self.cursor.peek() == Some(op) {
            self.cursor.bump();
            true
        } else {
            false
        }
    }

    /// Consume `0x5B op` without emitting a node.
    pub(super) fn eat_ext_op(&mut self, op: u8) -> bool {
        if self.cursor.peek() == Some(EXT_OP_PREFIX) && self.cursor.peek_at(1) == Some(op) {
            self.cursor.bump();
            self.cursor.bump();
            true
        } else {
            false
        }
    }

    /// Allocate a leaf for bytes already consumed; rewinds to `mark` if
    /// the allocation faults.
    pub(super) fn leaf_at(
        &mut self,
        kind: NodeKind,
        bytes: &[u8],
        mark: Mark,
    ) -> Result<NodeId, Fault> {
        match self.arena.alloc(kind, bytes) {
            Ok(id) => Ok(id),
            Err(err) => {
                self.cursor.restore(mark);
                Err(err.into())
            }
        }
    }

    /// Leaf for a one-byte opcode; the payload is the byte itself.
    pub(super) fn op_leaf(&mut self, kind: NodeKind, op: u8) -> ParseResult {
        let mark = self.cursor.mark();
        if !self.eat_op(op) {
            return Ok(None);
        }
        Ok(Some(self.leaf_at(kind, &[op], mark)?))
    }

    /// Leaf for an exact two-byte opcode.
    pub(super) fn op2_leaf(&mut self, kind: NodeKind, first: u8, second: u8) -> ParseResult {
        let mark = self.cursor.mark();
        if self.cursor.peek() != Some(first) || self.cursor.peek_at(1) != Some(second) {
            return Ok(None);
        }
        self.cursor.bump();
        self.cursor.bump();
        Ok(Some(self.leaf_at(kind, &[first, second], mark)?))
    }

    /// Leaf for `0x5B op`.
    pub(super) fn ext_op_leaf(&mut self, kind: NodeKind, op: u8) -> ParseResult {
        self.op2_leaf(kind, EXT_OP_PREFIX, op)
    }

    /// Leaf of exactly `n` raw bytes.
    pub(super) fn bytes_leaf(&mut self, kind: NodeKind, n: usize) -> ParseResult {
        let mark = self.cursor.mark();
        let Some(bytes) = self.cursor.take(n) else {
            return Ok(None);
        };
        Ok(Some(self.leaf_at(kind, bytes, mark)?))
    }

    /// Construct headed by a silent opcode: consume `op`, then wrap
    /// `rules` in a `kind` node. The opcode byte leaves no leaf.
    pub(super) fn op_seq(&mut self, kind: NodeKind, op: u8, rules: &[Rule<'a>]) -> ParseResult {
        let mark = self.cursor.mark();
        if !self.eat_op(op) {
            return Ok(None);
        }
        match self.sequence(kind, rules) {
            Ok(Some(node)) => Ok(Some(node)),
            Ok(None) => {
                self.cursor.restore(mark);
                Ok(None)
            }
            Err(fault) => {
                self.cursor.restore(mark);
                Err(fault)
            }
        }
    }

    /// Wrap the first matching alternative in a `kind` node.
    pub(super) fn wrap_choice(&mut self, kind: NodeKind, rules: &[Rule<'a>]) -> ParseResult {
        let mark = self.cursor.mark();
        let Some(inner) = self.choice(rules)? else {
            return Ok(None);
        };
        match self.arena.alloc(kind, &[]) {
            Ok(node) => {
                self.arena.set_first_child(node, Some(inner));
                Ok(Some(node))
            }
            Err(err) => {
                self.arena.release_forest(Some(inner));
                self.cursor.restore(mark);
                Err(err.into())
            }
        }
    }
}
