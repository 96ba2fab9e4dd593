//! The five composition primitives every grammar rule is built from.
//!
//! All of them uphold the same contract as the rules they compose: on
//! failure the cursor is restored to the entry mark and every node
//! allocated along the way is released. Faults (allocation, depth) are
//! distinct from mismatches and unwind unconditionally.

use crate::ast::{NodeId, NodeKind};

use super::core::Parser;
use super::error::Fault;
use super::{ParseResult, Rule};

impl<'a> Parser<'a> {
    /// Match `rules` in order and wrap their results in a new `kind` node.
    ///
    /// Results chain as siblings in call order and become the grouping
    /// node's children. Any mismatch or fault unwinds the whole chain and
    /// rewinds the cursor; partial progress never escapes. An empty rule
    /// slice matches, consumes nothing, and yields a childless node.
    pub fn sequence(&mut self, kind: NodeKind, rules: &[Rule<'a>]) -> ParseResult {
        let mark = self.cursor.mark();
        let mut head = None;
        let mut tail = None;
        for rule in rules {
            match rule(self) {
                Ok(Some(node)) => self.push_chain(&mut head, &mut tail, node),
                Ok(None) => {
                    self.arena.release_forest(head);
                    self.cursor.restore(mark);
                    return Ok(None);
                }
                Err(fault) => {
                    self.arena.release_forest(head);
                    self.cursor.restore(mark);
                    return Err(fault);
                }
            }
        }
        let node = match self.arena.alloc(kind, &[]) {
            Ok(node) => node,
            Err(err) => {
                self.arena.release_forest(head);
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        self.arena.set_first_child(node, head);
        Ok(Some(node))
    }

    /// Match `rules` in order like [`Parser::sequence`], but return the
    /// sibling chain itself instead of wrapping it.
    ///
    /// Used where a construct's pieces belong directly to the enclosing
    /// node. Needs at least one rule; with none there would be nothing to
    /// return a match with.
    pub fn series(&mut self, rules: &[Rule<'a>]) -> ParseResult {
        debug_assert!(!rules.is_empty(), "series of zero rules");
        let mark = self.cursor.mark();
        let mut head = None;
        let mut tail = None;
        for rule in rules {
            match rule(self) {
                Ok(Some(node)) => self.push_chain(&mut head, &mut tail, node),
                Ok(None) => {
                    self.arena.release_forest(head);
                    self.cursor.restore(mark);
                    return Ok(None);
                }
                Err(fault) => {
                    self.arena.release_forest(head);
                    self.cursor.restore(mark);
                    return Err(fault);
                }
            }
        }
        Ok(head)
    }

    /// Match `rule` zero or more times. Repetition itself never
    /// mismatches; the first element mismatch is simply where it stops.
    ///
    /// The result is a right-leaning chain of `kind` nodes: each matched
    /// element sits next to a nested `kind` node holding the rest, and
    /// the chain terminates in an empty `kind` node. Zero matches yield
    /// just that empty node. Built iteratively, so element count does not
    /// grow the call stack. Faults release everything and propagate.
    pub fn repetition(&mut self, kind: NodeKind, rule: Rule<'a>) -> Result<NodeId, Fault> {
        let mark = self.cursor.mark();
        let root = self.arena.alloc(kind, &[])?;
        let mut cur = root;
        loop {
            match rule(self) {
                Ok(Some(elem)) => {
                    self.arena.attach_child(cur, elem);
                    match self.arena.alloc(kind, &[]) {
                        Ok(fresh) => {
                            self.arena.attach_child(cur, fresh);
                            cur = fresh;
                        }
                        Err(err) => {
                            self.arena.release_forest(Some(root));
                            self.cursor.restore(mark);
                            return Err(err.into());
                        }
                    }
                }
                Ok(None) => return Ok(root),
                Err(fault) => {
                    self.arena.release_forest(Some(root));
                    self.cursor.restore(mark);
                    return Err(fault);
                }
            }
        }
    }

    /// Match `rule` up to `max` times into a flat chain, stopping early
    /// when an element's payload starts with the 0x00 sentinel.
    ///
    /// The terminator element stays in the chain. Reaching `max` without
    /// a terminator is still a match; a rule mismatch before either bound
    /// unwinds the chain and mismatches. `max == 0` cannot match
    /// anything. An empty payload never passes the sentinel test.
    pub fn null_terminated(&mut self, max: usize, rule: Rule<'a>) -> ParseResult {
        if max == 0 {
            return Ok(None);
        }
        let mark = self.cursor.mark();
        let mut head = None;
        let mut tail = None;
        for _ in 0..max {
            match rule(self) {
                Ok(Some(elem)) => {
                    self.push_chain(&mut head, &mut tail, elem);
                    if self.arena.data(elem).first() == Some(&0) {
                        break;
                    }
                }
                Ok(None) => {
                    self.arena.release_forest(head);
                    self.cursor.restore(mark);
                    return Ok(None);
                }
                Err(fault) => {
                    self.arena.release_forest(head);
                    self.cursor.restore(mark);
                    return Err(fault);
                }
            }
        }
        Ok(head)
    }

    /// Try `rules` in order; the first match wins.
    ///
    /// Mismatched alternatives leave no trace. A fault aborts the whole
    /// alternation immediately; no later alternative may mask it.
    pub fn choice(&mut self, rules: &[Rule<'a>]) -> ParseResult {
        let mark = self.cursor.mark();
        for rule in rules {
            match rule(self) {
                Ok(Some(node)) => return Ok(Some(node)),
                Ok(None) => self.cursor.restore(mark),
                Err(fault) => {
                    self.cursor.restore(mark);
                    return Err(fault);
                }
            }
        }
        self.cursor.restore(mark);
        Ok(None)
    }

    /// Append `node` (and any siblings it brought) to the chain.
    fn push_chain(&mut self, head: &mut Option<NodeId>, tail: &mut Option<NodeId>, node: NodeId) {
        match *tail {
            None => *head = Some(node),
            Some(tail) => self.arena.set_next_sibling(tail, Some(node)),
        }
        let mut last = node;
        while let Some(next) = self.arena.next_sibling(last) {
            last = next;
        }
        *tail = Some(last);
    }
}
