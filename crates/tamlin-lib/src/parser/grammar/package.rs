//! PkgLength decoding and the builder shared by every length-delimited
//! construct.

use crate::ast::{NodeId, NodeKind};
use crate::parser::{Fault, ParseResult, Parser, Rule};

/// Opcode head of a [`Parser::block`] construct.
pub(super) enum BlockOp {
    /// One-byte opcode, consumed without a leaf.
    Silent(u8),
    /// `0x5B op`, consumed without a leaf.
    SilentExt(u8),
    /// One-byte opcode kept as a leaf.
    Leaf(NodeKind, u8),
    /// `0x5B op` kept as a leaf.
    LeafExt(NodeKind, u8),
}

/// What fills the rest of the region once the head rules are done.
pub(super) enum BlockBody {
    TermList,
    FieldList,
    PackageElements,
    /// Remaining region bytes verbatim, as one `ByteList` leaf.
    RawBytes,
}

pub(super) struct PkgLen {
    pub(super) node: NodeId,
    /// Decoded total, counted from the first PkgLength byte.
    pub(super) value: usize,
    /// Width of the PkgLength field itself.
    pub(super) encoded: usize,
}

impl<'a> Parser<'a> {
    /// Decode a PkgLength field into its node and decoded value.
    ///
    /// Bits 7:6 of the lead byte give the count of follow bytes. With
    /// follow bytes present, bits 5:4 must be zero and only bits 3:0
    /// contribute; the follow bytes stack little-endian above them.
    pub(super) fn pkg_length_parts(&mut self) -> Result<Option<PkgLen>, Fault> {
        let mark = self.cursor.mark();
        let Some(lead) = self.cursor.bump() else {
            return Ok(None);
        };
        let follow = (lead >> 6) as usize;
        if follow > 0 && lead & 0x30 != 0 {
            self.cursor.restore(mark);
            return Ok(None);
        }
        let Some(rest) = self.cursor.take(follow) else {
            self.cursor.restore(mark);
            return Ok(None);
        };
        let mut value = if follow == 0 {
            (lead & 0x3F) as usize
        } else {
            (lead & 0x0F) as usize
        };
        for (i, &byte) in rest.iter().enumerate() {
            value |= (byte as usize) << (4 + 8 * i);
        }

        let node = match self.arena.alloc(NodeKind::PkgLength, &[]) {
            Ok(node) => node,
            Err(err) => {
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        let lead_leaf = match self.arena.alloc(NodeKind::PkgLeadByte, &[lead]) {
            Ok(leaf) => leaf,
            Err(err) => {
                self.arena.release(node);
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        self.arena.attach_child(node, lead_leaf);
        for &byte in rest {
            let data = match self.arena.alloc(NodeKind::ByteData, &[byte]) {
                Ok(leaf) => leaf,
                Err(err) => {
                    self.arena.release_forest(Some(node));
                    self.cursor.restore(mark);
                    return Err(err.into());
                }
            };
            self.arena.attach_child(node, data);
        }
        Ok(Some(PkgLen {
            node,
            value,
            encoded: 1 + follow,
        }))
    }

    /// `PkgLength` as a plain rule, for the places where the value does
    /// not bound a region (field widths).
    pub(super) fn pkg_length(&mut self) -> ParseResult {
        Ok(self.pkg_length_parts()?.map(|pkg| pkg.node))
    }

    /// PkgLength-delimited construct: opcode, PkgLength, fixed head
    /// rules, then a body that must fill the rest of the region
    /// exactly.
    ///
    /// Children come out as `[opcode leaf?, PkgLength, head..., body]`.
    pub(super) fn block(
        &mut self,
        kind: NodeKind,
        op: BlockOp,
        head: &[Rule<'a>],
        body: BlockBody,
    ) -> ParseResult {
        let mark = self.cursor.mark();
        let op_leaf = match op {
            BlockOp::Silent(byte) => {
                if !self.eat_op(byte) {
                    return Ok(None);
                }
                None
            }
            BlockOp::SilentExt(byte) => {
                if !self.eat_ext_op(byte) {
                    return Ok(None);
                }
                None
            }
            BlockOp::Leaf(op_kind, byte) => match self.op_leaf(op_kind, byte)? {
                Some(leaf) => Some(leaf),
                None => return Ok(None),
            },
            BlockOp::LeafExt(op_kind, byte) => match self.ext_op_leaf(op_kind, byte)? {
                Some(leaf) => Some(leaf),
                None => return Ok(None),
            },
        };

        match self.block_rest(kind, op_leaf, head, body) {
            Ok(Some(node)) => Ok(Some(node)),
            Ok(None) => {
                self.arena.release_forest(op_leaf);
                self.cursor.restore(mark);
                Ok(None)
            }
            Err(fault) => {
                self.arena.release_forest(op_leaf);
                self.cursor.restore(mark);
                Err(fault)
            }
        }
    }

    /// Body of [`Parser::block`] after the opcode. Releases everything
    /// it built on failure; the caller rewinds the cursor and owns the
    /// opcode leaf until success.
    fn block_rest(
        &mut self,
        kind: NodeKind,
        op_leaf: Option<NodeId>,
        head: &[Rule<'a>],
        body: BlockBody,
    ) -> ParseResult {
        let Some(pkg) = self.pkg_length_parts()? else {
            return Ok(None);
        };
        // The decoded value counts from the first PkgLength byte, so
        // the region left for head and body excludes the field itself.
        let Some(region) = pkg.value.checked_sub(pkg.encoded) else {
            self.arena.release_forest(Some(pkg.node));
            return Ok(None);
        };
        let Some(prev_limit) = self.cursor.narrow(region) else {
            self.arena.release_forest(Some(pkg.node));
            return Ok(None);
        };

        let head_chain = if head.is_empty() {
            None
        } else {
            match self.series(head) {
                Ok(Some(chain)) => Some(chain),
                Ok(None) => {
                    self.arena.release_forest(Some(pkg.node));
                    return Ok(None);
                }
                Err(fault) => {
                    self.arena.release_forest(Some(pkg.node));
                    return Err(fault);
                }
            }
        };

        let body_result = match body {
            BlockBody::TermList => self.term_list(),
            BlockBody::FieldList => self.field_list(),
            BlockBody::PackageElements => self.package_element_list(),
            BlockBody::RawBytes => self.byte_list_rest(),
        };
        let body_node = match body_result {
            Ok(Some(node)) => node,
            Ok(None) => {
                self.arena.release_forest(Some(pkg.node));
                self.arena.release_forest(head_chain);
                return Ok(None);
            }
            Err(fault) => {
                self.arena.release_forest(Some(pkg.node));
                self.arena.release_forest(head_chain);
                return Err(fault);
            }
        };

        // The construct owns its region completely; leftover bytes mean
        // the lengths do not line up and the whole construct mismatches.
        if !self.cursor.is_empty() {
            self.arena.release_forest(Some(pkg.node));
            self.arena.release_forest(head_chain);
            self.arena.release_forest(Some(body_node));
            return Ok(None);
        }
        self.cursor.widen(prev_limit);

        let node = match self.arena.alloc(kind, &[]) {
            Ok(node) => node,
            Err(err) => {
                self.arena.release_forest(Some(pkg.node));
                self.arena.release_forest(head_chain);
                self.arena.release_forest(Some(body_node));
                return Err(err.into());
            }
        };
        if let Some(leaf) = op_leaf {
            self.arena.attach_child(node, leaf);
        }
        self.arena.attach_child(node, pkg.node);
        if let Some(chain) = head_chain {
            self.arena.attach_child(node, chain);
        }
        self.arena.attach_child(node, body_node);
        Ok(Some(node))
    }

    fn byte_list_rest(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        let bytes = self.cursor.take_rest();
        Ok(Some(self.leaf_at(NodeKind::ByteList, bytes, mark)?))
    }
}
