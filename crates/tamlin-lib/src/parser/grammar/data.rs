//! Data objects: fixed-width integers, strings and the constant rules.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

impl<'a> Parser<'a> {
    pub(super) fn byte_data(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::ByteData, 1)
    }

    pub(super) fn word_data(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::WordData, 2)
    }

    pub(super) fn dword_data(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::DWordData, 4)
    }

    pub(super) fn qword_data(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::QWordData, 8)
    }

    /// `ByteConst := BytePrefix ByteData`
    fn byte_const(&mut self) -> ParseResult {
        self.sequence(NodeKind::ByteConst, &[Self::byte_prefix, Self::byte_data])
    }

    fn byte_prefix(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::BytePrefix, 0x0A)
    }

    /// `WordConst := WordPrefix WordData`
    fn word_const(&mut self) -> ParseResult {
        self.sequence(NodeKind::WordConst, &[Self::word_prefix, Self::word_data])
    }

    fn word_prefix(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::WordPrefix, 0x0B)
    }

    /// `DWordConst := DWordPrefix DWordData`
    fn dword_const(&mut self) -> ParseResult {
        self.sequence(NodeKind::DWordConst, &[Self::dword_prefix, Self::dword_data])
    }

    fn dword_prefix(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::DWordPrefix, 0x0C)
    }

    /// `QWordConst := QWordPrefix QWordData`
    fn qword_const(&mut self) -> ParseResult {
        self.sequence(NodeKind::QWordConst, &[Self::qword_prefix, Self::qword_data])
    }

    fn qword_prefix(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::QWordPrefix, 0x0E)
    }

    /// `String := StringPrefix AsciiCharList NullChar`
    ///
    /// The terminator stays in the char list, one `NullChar` leaf at
    /// the end.
    pub(super) fn string(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::String,
            &[Self::string_prefix, Self::ascii_char_list],
        )
    }

    fn string_prefix(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::StringPrefix, 0x0D)
    }

    fn ascii_char_list(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        let max = self.cursor.remaining();
        match self.null_terminated(max, Self::string_char)? {
            Some(chain) => {
                let node = match self.arena.alloc(NodeKind::AsciiCharList, &[]) {
                    Ok(node) => node,
                    Err(err) => {
                        self.arena.release_forest(Some(chain));
                        self.cursor.restore(mark);
                        return Err(err.into());
                    }
                };
                self.arena.set_first_child(node, Some(chain));
                Ok(Some(node))
            }
            None => Ok(None),
        }
    }

    fn string_char(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        match self.cursor.bump() {
            Some(0x00) => Ok(Some(self.leaf_at(NodeKind::NullChar, &[0x00], mark)?)),
            Some(c @ 0x01..=0x7F) => Ok(Some(self.leaf_at(NodeKind::AsciiChar, &[c], mark)?)),
            _ => {
                self.cursor.restore(mark);
                Ok(None)
            }
        }
    }

    /// `ConstObj := ZeroOp | OneOp | OnesOp`
    fn const_obj(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::ConstObj,
            &[Self::zero_op, Self::one_op, Self::ones_op],
        )
    }

    fn zero_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ZeroOp, 0x00)
    }

    fn one_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::OneOp, 0x01)
    }

    fn ones_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::OnesOp, 0xFF)
    }

    fn revision_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::RevisionOp, 0x30)
    }

    /// `ComputationalData := ByteConst | WordConst | DWordConst
    ///                     | QWordConst | String | ConstObj
    ///                     | RevisionOp | DefBuffer`
    fn computational_data(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::ComputationalData,
            &[
                Self::byte_const,
                Self::word_const,
                Self::dword_const,
                Self::qword_const,
                Self::string,
                Self::const_obj,
                Self::revision_op,
                Self::def_buffer,
            ],
        )
    }

    /// `DataObject := ComputationalData | DefPackage | DefVarPackage`
    pub(super) fn data_object(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::DataObject,
            &[
                Self::computational_data,
                Self::def_package,
                Self::def_var_package,
            ],
        )
    }

    /// `DataRefObject := DataObject`
    ///
    /// ObjectReference and DDBHandle are runtime values with no byte
    /// encoding of their own, so the data branch is all a decoder sees.
    pub(super) fn data_ref_object(&mut self) -> ParseResult {
        self.sequence(NodeKind::DataRefObject, &[Self::data_object])
    }
}
