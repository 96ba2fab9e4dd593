//! Top-level term rules and the definition block entry point.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

impl Parser<'_> {
    /// `AMLCode := DefBlockHeader TermList`
    ///
    /// Entry point for a whole definition block, header included.
    pub(crate) fn aml_code(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::AmlCode,
            &[Self::def_block_header, Self::term_list],
        )
    }

    /// `DefBlockHeader := TableSignature TableLength SpecCompliance
    ///                    CheckSum OemId OemTableId OemRevision
    ///                    CreatorId CreatorRevision`
    pub(super) fn def_block_header(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefBlockHeader,
            &[
                Self::table_signature,
                Self::table_length,
                Self::spec_compliance,
                Self::check_sum,
                Self::oem_id,
                Self::oem_table_id,
                Self::oem_revision,
                Self::creator_id,
                Self::creator_revision,
            ],
        )
    }

    fn table_signature(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::TableSignature, 4)
    }

    fn table_length(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::TableLength, 4)
    }

    fn spec_compliance(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::SpecCompliance, 1)
    }

    fn check_sum(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::CheckSum, 1)
    }

    fn oem_id(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::OemId, 6)
    }

    fn oem_table_id(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::OemTableId, 8)
    }

    fn oem_revision(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::OemRevision, 4)
    }

    fn creator_id(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::CreatorId, 4)
    }

    fn creator_revision(&mut self) -> ParseResult {
        self.bytes_leaf(NodeKind::CreatorRevision, 4)
    }

    /// `TermList := TermObj*`
    pub(crate) fn term_list(&mut self) -> ParseResult {
        Ok(Some(self.repetition(NodeKind::TermList, Self::term_obj)?))
    }

    /// `TermObj := Object | Type1Opcode | Type2Opcode`
    ///
    /// Recursion guard: every nested scope passes through here.
    pub(super) fn term_obj(&mut self) -> ParseResult {
        self.enter_recursion()?;
        let result = self.wrap_choice(
            NodeKind::TermObj,
            &[Self::object, Self::type1_opcode, Self::type2_opcode],
        );
        self.exit_recursion();
        result
    }

    /// `Object := NameSpaceModifierObj | NamedObj`
    fn object(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::Object,
            &[Self::name_space_modifier_obj, Self::named_obj],
        )
    }

    /// `TermArg := Type2Opcode | DataObject | ArgObj | LocalObj`
    ///
    /// Recursion guard: operands nest through here.
    pub(super) fn term_arg(&mut self) -> ParseResult {
        self.enter_recursion()?;
        let result = self.wrap_choice(
            NodeKind::TermArg,
            &[
                Self::type2_opcode,
                Self::data_object,
                Self::arg_obj,
                Self::local_obj,
            ],
        );
        self.exit_recursion();
        result
    }

    /// `MethodInvocation := NameString TermArgList`
    ///
    /// A method's arity lives in the namespace, not in the bytecode, so
    /// the argument list node is left empty and the arguments parse as
    /// the terms that follow the call.
    pub(super) fn method_invocation(&mut self) -> ParseResult {
        let mark = self.cursor.mark();
        let Some(name) = self.name_string()? else {
            return Ok(None);
        };
        let args = match self.arena.alloc(NodeKind::TermArgList, &[]) {
            Ok(args) => args,
            Err(err) => {
                self.arena.release_forest(Some(name));
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        let node = match self.arena.alloc(NodeKind::MethodInvocation, &[]) {
            Ok(node) => node,
            Err(err) => {
                self.arena.release_forest(Some(name));
                self.arena.release(args);
                self.cursor.restore(mark);
                return Err(err.into());
            }
        };
        self.arena.set_first_child(node, Some(name));
        self.arena.set_next_sibling(name, Some(args));
        Ok(Some(node))
    }
}
