//! Namespace modifier objects: Alias, Name and Scope.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

use super::opcodes::{ALIAS_OP, NAME_OP, SCOPE_OP};
use super::package::{BlockBody, BlockOp};

impl Parser<'_> {
    /// `NameSpaceModifierObj := DefAlias | DefName | DefScope`
    pub(super) fn name_space_modifier_obj(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::NameSpaceModifierObj,
            &[Self::def_alias, Self::def_name, Self::def_scope],
        )
    }

    /// `DefAlias := AliasOp NameString NameString`
    fn def_alias(&mut self) -> ParseResult {
        self.op_seq(
            NodeKind::DefAlias,
            ALIAS_OP,
            &[Self::name_string, Self::name_string],
        )
    }

    /// `DefName := NameOp NameString DataRefObject`
    fn def_name(&mut self) -> ParseResult {
        self.op_seq(
            NodeKind::DefName,
            NAME_OP,
            &[Self::name_string, Self::data_ref_object],
        )
    }

    /// `DefScope := ScopeOp PkgLength NameString TermList`
    fn def_scope(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefScope,
            BlockOp::Silent(SCOPE_OP),
            &[Self::name_string],
            BlockBody::TermList,
        )
    }
}
