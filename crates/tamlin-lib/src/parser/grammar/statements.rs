//! Type 1 opcodes: statements that do not yield a value.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

use super::opcodes::{BREAK_OP, BREAKPOINT_OP, CONTINUE_OP, ELSE_OP, IF_OP, NOOP_OP};
use super::package::{BlockBody, BlockOp};

impl Parser<'_> {
    /// `Type1Opcode := DefBreak | DefBreakPoint | ... | DefWhile`
    pub(super) fn type1_opcode(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::Type1Opcode,
            &[
                Self::def_break,
                Self::def_breakpoint,
                Self::def_continue,
                Self::def_fatal,
                Self::def_if_else,
                Self::def_load,
                Self::def_noop,
                Self::def_notify,
                Self::def_release,
                Self::def_reset,
                Self::def_return,
                Self::def_signal,
                Self::def_sleep,
                Self::def_stall,
                Self::def_while,
            ],
        )
    }

    /// `DefBreak := BreakOp`
    fn def_break(&mut self) -> ParseResult {
        self.op_seq(NodeKind::DefBreak, BREAK_OP, &[])
    }

    /// `DefBreakPoint := BreakPointOp`
    fn def_breakpoint(&mut self) -> ParseResult {
        self.op_seq(NodeKind::DefBreakPoint, BREAKPOINT_OP, &[])
    }

    /// `DefContinue := ContinueOp`
    fn def_continue(&mut self) -> ParseResult {
        self.op_seq(NodeKind::DefContinue, CONTINUE_OP, &[])
    }

    /// `DefFatal := FatalOp FatalType FatalCode FatalArg`
    fn def_fatal(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefFatal,
            &[
                Self::fatal_op,
                Self::fatal_type,
                Self::fatal_code,
                Self::fatal_arg,
            ],
        )
    }

    fn fatal_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::FatalOp, 0x32)
    }

    fn fatal_type(&mut self) -> ParseResult {
        self.sequence(NodeKind::FatalType, &[Self::byte_data])
    }

    fn fatal_code(&mut self) -> ParseResult {
        self.sequence(NodeKind::FatalCode, &[Self::dword_data])
    }

    fn fatal_arg(&mut self) -> ParseResult {
        self.sequence(NodeKind::FatalArg, &[Self::term_arg])
    }

    /// `DefIfElse := IfOp PkgLength Predicate TermList DefElse`
    ///
    /// The else branch sits outside the if's own region; when present
    /// it is appended as the construct's last child.
    fn def_if_else(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        let Some(node) = self.block(
            NodeKind::DefIfElse,
            BlockOp::Silent(IF_OP),
            &[Self::predicate],
            BlockBody::TermList,
        )?
        else {
            return Ok(None);
        };
        match self.def_else() {
            Ok(Some(els)) => {
                self.arena.attach_child(node, els);
                Ok(Some(node))
            }
            Ok(None) => Ok(Some(node)),
            Err(fault) => {
                self.arena.release_forest(Some(node));
                self.cursor.restore(mark);
                Err(fault)
            }
        }
    }

    fn predicate(&mut self) -> ParseResult {
        self.sequence(NodeKind::Predicate, &[Self::term_arg])
    }

    /// `DefElse := Nothing | ElseOp PkgLength TermList`
    fn def_else(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefElse,
            BlockOp::Silent(ELSE_OP),
            &[],
            BlockBody::TermList,
        )
    }

    /// `DefLoad := LoadOp NameString DdbHandleObject`
    fn def_load(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLoad,
            &[Self::load_op, Self::name_string, Self::ddb_handle_object],
        )
    }

    fn load_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::LoadOp, 0x20)
    }

    fn ddb_handle_object(&mut self) -> ParseResult {
        self.sequence(NodeKind::DdbHandleObject, &[Self::super_name])
    }

    /// `DefNoop := NoopOp`
    fn def_noop(&mut self) -> ParseResult {
        self.op_seq(NodeKind::DefNoop, NOOP_OP, &[])
    }

    /// `DefNotify := NotifyOp NotifyObject NotifyValue`
    fn def_notify(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefNotify,
            &[Self::notify_op, Self::notify_object, Self::notify_value],
        )
    }

    fn notify_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::NotifyOp, 0x86)
    }

    fn notify_object(&mut self) -> ParseResult {
        self.sequence(NodeKind::NotifyObject, &[Self::super_name])
    }

    fn notify_value(&mut self) -> ParseResult {
        self.sequence(NodeKind::NotifyValue, &[Self::term_arg])
    }

    /// `DefRelease := ReleaseOp MutexObject`
    fn def_release(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefRelease, &[Self::release_op, Self::mutex_object])
    }

    fn release_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::ReleaseOp, 0x27)
    }

    pub(super) fn mutex_object(&mut self) -> ParseResult {
        self.sequence(NodeKind::MutexObject, &[Self::super_name])
    }

    /// `DefReset := ResetOp EventObject`
    fn def_reset(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefReset, &[Self::reset_op, Self::event_object])
    }

    fn reset_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::ResetOp, 0x26)
    }

    pub(super) fn event_object(&mut self) -> ParseResult {
        self.sequence(NodeKind::EventObject, &[Self::super_name])
    }

    /// `DefReturn := ReturnOp ArgObject`
    fn def_return(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefReturn, &[Self::return_op, Self::arg_object])
    }

    fn return_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ReturnOp, 0xA4)
    }

    fn arg_object(&mut self) -> ParseResult {
        self.sequence(NodeKind::ArgObject, &[Self::term_arg])
    }

    /// `DefSignal := SignalOp EventObject`
    fn def_signal(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefSignal, &[Self::signal_op, Self::event_object])
    }

    fn signal_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::SignalOp, 0x24)
    }

    /// `DefSleep := SleepOp MsecTime`
    fn def_sleep(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefSleep, &[Self::sleep_op, Self::msec_time])
    }

    fn sleep_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::SleepOp, 0x22)
    }

    fn msec_time(&mut self) -> ParseResult {
        self.sequence(NodeKind::MsecTime, &[Self::term_arg])
    }

    /// `DefStall := StallOp UsecTime`
    fn def_stall(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefStall, &[Self::stall_op, Self::usec_time])
    }

    fn stall_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::StallOp, 0x21)
    }

    fn usec_time(&mut self) -> ParseResult {
        self.sequence(NodeKind::UsecTime, &[Self::term_arg])
    }

    /// `DefWhile := WhileOp PkgLength Predicate TermList`
    fn def_while(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefWhile,
            BlockOp::Leaf(NodeKind::WhileOp, 0xA2),
            &[Self::predicate],
            BlockBody::TermList,
        )
    }
}
