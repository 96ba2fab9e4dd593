//! Name objects: segments, paths and the composite name rules.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

use super::opcodes::{
    DUAL_NAME_PREFIX, MULTI_NAME_PREFIX, NULL_NAME, PARENT_PREFIX_CHAR, ROOT_CHAR,
    is_lead_name_char, is_name_char,
};

impl<'a> Parser<'a> {
    /// `NameSeg := LeadNameChar NameChar NameChar NameChar`
    pub(super) fn name_seg(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        let Some(bytes) = self.cursor.take(4) else {
            return Ok(None);
        };
        if !is_lead_name_char(bytes[0]) || !bytes[1..].iter().copied().all(is_name_char) {
            self.cursor.restore(mark);
            return Ok(None);
        }
        Ok(Some(self.leaf_at(NodeKind::NameSeg, bytes, mark)?))
    }

    /// `NameString := (RootChar | PrefixPath) NamePath`
    ///
    /// An empty prefix leaves no node: most names are relative and a
    /// `PrefixPath` child on every one of them would be noise.
    pub(super) fn name_string(&mut self) -> ParseResult {
        let mark = self.cursor.mark();

        let prefix = if self.cursor.peek() == Some(ROOT_CHAR) {
            self.cursor.bump();
            Some(self.leaf_at(NodeKind::RootChar, &[ROOT_CHAR], mark)?)
        } else {
            let mut run = 0;
            while self.cursor.peek_at(run) == Some(PARENT_PREFIX_CHAR) {
                run += 1;
            }
            if run > 0 {
                let carets = self.cursor.take(run).expect("prefix run is in bounds");
                Some(self.leaf_at(NodeKind::PrefixPath, carets, mark)?)
            } else {
                None
            }
        };

        let path = match self.name_path() {
            Ok(Some(path)) => path,
            Ok(None) => {
                self.arena.release_forest(prefix);
                self.cursor.restore(mark);
                return Ok(None);
            }
            Err(fault) => {
                self.arena.release_forest(prefix);
                self.cursor.restore(mark);
                return Err(fault);
            }
        };

        let node = match self.arena.alloc(NodeKind::NameString, &[]) {
            Ok(node) => node,
            Err(err) => {
                self.arena.release_forest(prefix);
                self.arena.release_forest(Some(path));
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        match prefix {
            Some(prefix) => {
                self.arena.set_first_child(node, Some(prefix));
                self.arena.set_next_sibling(prefix, Some(path));
            }
            None => self.arena.set_first_child(node, Some(path)),
        }
        Ok(Some(node))
    }

    /// `NamePath := NameSeg | DualNamePath | MultiNamePath | NullName`
    pub(super) fn name_path(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::NamePath,
            &[
                Self::name_seg,
                Self::dual_name_path,
                Self::multi_name_path,
                Self::null_name,
            ],
        )
    }

    /// `DualNamePath := DualNamePrefix NameSeg NameSeg`
    fn dual_name_path(&mut self) -> ParseResult {
        self.op_seq(
            NodeKind::DualNamePath,
            DUAL_NAME_PREFIX,
            &[Self::name_seg, Self::name_seg],
        )
    }

    /// `MultiNamePath := MultiNamePrefix SegCount NameSeg(SegCount)`
    fn multi_name_path(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        if !self.eat_op(MULTI_NAME_PREFIX) {
            return Ok(None);
        }
        let Some(count) = self.cursor.bump() else {
            self.cursor.restore(mark);
            return Ok(None);
        };
        let seg_count = self.leaf_at(NodeKind::SegCount, &[count], mark)?;
        // A NameSeg never starts with a NUL byte, so the bounded-string
        // combinator parses exactly `count` segments or nothing.
        let segs = match self.null_terminated(count as usize, Self::name_seg) {
            Ok(Some(segs)) => segs,
            Ok(None) => {
                self.arena.release(seg_count);
                self.cursor.restore(mark);
                return Ok(None);
            }
            Err(fault) => {
                self.arena.release(seg_count);
                self.cursor.restore(mark);
                return Err(fault);
            }
        };
        let node = match self.arena.alloc(NodeKind::MultiNamePath, &[]) {
            Ok(node) => node,
            Err(err) => {
                self.arena.release(seg_count);
                self.arena.release_forest(Some(segs));
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        self.arena.set_first_child(node, Some(seg_count));
        self.arena.set_next_sibling(seg_count, Some(segs));
        Ok(Some(node))
    }

    /// `NullName := 0x00`
    pub(super) fn null_name(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::NullName, NULL_NAME)
    }

    /// `SimpleName := NameString | ArgObj | LocalObj`
    pub(super) fn simple_name(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::SimpleName,
            &[Self::name_string, Self::arg_obj, Self::local_obj],
        )
    }

    /// `SuperName := SimpleName | DebugObj | Type6Opcode`
    ///
    /// Recursion guard: SuperName reaches itself through Type6Opcode
    /// (`DerefOf(Index(...))` chains nest arbitrarily deep).
    pub(super) fn super_name(&mut self) -> ParseResult {
        self.enter_recursion()?;
        let result = self.wrap_choice(
            NodeKind::SuperName,
            &[Self::simple_name, Self::debug_obj, Self::type6_opcode],
        );
        self.exit_recursion();
        result
    }

    /// `Target := SuperName | NullName`
    pub(super) fn target(&mut self) -> ParseResult {
        self.wrap_choice(NodeKind::Target, &[Self::super_name, Self::null_name])
    }
}
