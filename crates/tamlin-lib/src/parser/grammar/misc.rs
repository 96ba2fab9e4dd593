//! Arg, Local and Debug objects.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

impl Parser<'_> {
    /// `ArgObj := Arg0Op | ... | Arg6Op`
    pub(super) fn arg_obj(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::ArgObj,
            &[
                Self::arg0_op,
                Self::arg1_op,
                Self::arg2_op,
                Self::arg3_op,
                Self::arg4_op,
                Self::arg5_op,
                Self::arg6_op,
            ],
        )
    }

    fn arg0_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg0Op, 0x68)
    }

    fn arg1_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg1Op, 0x69)
    }

    fn arg2_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg2Op, 0x6A)
    }

    fn arg3_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg3Op, 0x6B)
    }

    fn arg4_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg4Op, 0x6C)
    }

    fn arg5_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg5Op, 0x6D)
    }

    fn arg6_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Arg6Op, 0x6E)
    }

    /// `LocalObj := Local0Op | ... | Local7Op`
    pub(super) fn local_obj(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::LocalObj,
            &[
                Self::local0_op,
                Self::local1_op,
                Self::local2_op,
                Self::local3_op,
                Self::local4_op,
                Self::local5_op,
                Self::local6_op,
                Self::local7_op,
            ],
        )
    }

    fn local0_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local0Op, 0x60)
    }

    fn local1_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local1Op, 0x61)
    }

    fn local2_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local2Op, 0x62)
    }

    fn local3_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local3Op, 0x63)
    }

    fn local4_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local4Op, 0x64)
    }

    fn local5_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local5Op, 0x65)
    }

    fn local6_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local6Op, 0x66)
    }

    fn local7_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::Local7Op, 0x67)
    }

    /// `DebugObj := DebugOp`
    pub(super) fn debug_obj(&mut self) -> ParseResult {
        self.sequence(NodeKind::DebugObj, &[Self::debug_op])
    }

    fn debug_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::DebugOp, 0x31)
    }
}
