//! Type 2 opcodes: expressions that yield a value.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

use super::package::{BlockBody, BlockOp};

impl Parser<'_> {
    /// `Type2Opcode := DefAcquire | DefAdd | ... | MethodInvocation`
    ///
    /// The two-byte logical forms come before `DefLNot`, which would
    /// otherwise swallow their 0x92 prefix. `MethodInvocation` accepts
    /// any name and must stay last.
    pub(super) fn type2_opcode(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::Type2Opcode,
            &[
                Self::def_acquire,
                Self::def_add,
                Self::def_and,
                Self::def_buffer,
                Self::def_concat,
                Self::def_concat_res,
                Self::def_cond_ref_of,
                Self::def_copy_object,
                Self::def_decrement,
                Self::def_deref_of,
                Self::def_divide,
                Self::def_find_set_left_bit,
                Self::def_find_set_right_bit,
                Self::def_from_bcd,
                Self::def_increment,
                Self::def_index,
                Self::def_l_and,
                Self::def_l_equal,
                Self::def_l_greater,
                Self::def_l_greater_equal,
                Self::def_l_less,
                Self::def_l_less_equal,
                Self::def_l_not_equal,
                Self::def_l_not,
                Self::def_load_table,
                Self::def_l_or,
                Self::def_match,
                Self::def_mid,
                Self::def_mod,
                Self::def_multiply,
                Self::def_nand,
                Self::def_nor,
                Self::def_not,
                Self::def_object_type,
                Self::def_or,
                Self::def_package,
                Self::def_var_package,
                Self::def_ref_of,
                Self::def_shift_left,
                Self::def_shift_right,
                Self::def_size_of,
                Self::def_store,
                Self::def_subtract,
                Self::def_timer,
                Self::def_to_bcd,
                Self::def_to_buffer,
                Self::def_to_decimal_string,
                Self::def_to_hex_string,
                Self::def_to_integer,
                Self::def_to_string,
                Self::def_wait,
                Self::def_xor,
                Self::method_invocation,
            ],
        )
    }

    /// `Type6Opcode := DefRefOf | DefDerefOf | DefIndex | MethodInvocation`
    pub(super) fn type6_opcode(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::Type6Opcode,
            &[
                Self::def_ref_of,
                Self::def_deref_of,
                Self::def_index,
                Self::method_invocation,
            ],
        )
    }

    /// `DefAcquire := AcquireOp MutexObject Timeout`
    fn def_acquire(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefAcquire,
            &[Self::acquire_op, Self::mutex_object, Self::timeout],
        )
    }

    fn acquire_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::AcquireOp, 0x23)
    }

    fn timeout(&mut self) -> ParseResult {
        self.sequence(NodeKind::Timeout, &[Self::word_data])
    }

    /// `DefAdd := AddOp Operand Operand Target`
    fn def_add(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefAdd,
            &[Self::add_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn add_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::AddOp, 0x72)
    }

    pub(super) fn operand(&mut self) -> ParseResult {
        self.sequence(NodeKind::Operand, &[Self::term_arg])
    }

    /// `DefAnd := AndOp Operand Operand Target`
    fn def_and(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefAnd,
            &[Self::and_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn and_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::AndOp, 0x7B)
    }

    /// `DefBuffer := BufferOp PkgLength BufferSize ByteList`
    pub(super) fn def_buffer(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefBuffer,
            BlockOp::Leaf(NodeKind::BufferOp, 0x11),
            &[Self::buffer_size],
            BlockBody::RawBytes,
        )
    }

    fn buffer_size(&mut self) -> ParseResult {
        self.sequence(NodeKind::BufferSize, &[Self::term_arg])
    }

    /// `DefConcat := ConcatOp Data Data Target`
    fn def_concat(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefConcat,
            &[Self::concat_op, Self::data, Self::data, Self::target],
        )
    }

    fn concat_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ConcatOp, 0x73)
    }

    fn data(&mut self) -> ParseResult {
        self.sequence(NodeKind::Data, &[Self::term_arg])
    }

    /// `DefConcatRes := ConcatResOp BufData BufData Target`
    fn def_concat_res(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefConcatRes,
            &[
                Self::concat_res_op,
                Self::buf_data,
                Self::buf_data,
                Self::target,
            ],
        )
    }

    fn concat_res_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ConcatResOp, 0x84)
    }

    fn buf_data(&mut self) -> ParseResult {
        self.sequence(NodeKind::BufData, &[Self::term_arg])
    }

    /// `DefCondRefOf := CondRefOfOp SuperName Target`
    fn def_cond_ref_of(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCondRefOf,
            &[Self::cond_ref_of_op, Self::super_name, Self::target],
        )
    }

    fn cond_ref_of_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::CondRefOfOp, 0x12)
    }

    /// `DefCopyObject := CopyObjectOp TermArg SimpleName`
    fn def_copy_object(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCopyObject,
            &[Self::copy_object_op, Self::term_arg, Self::simple_name],
        )
    }

    fn copy_object_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::CopyObjectOp, 0x9D)
    }

    /// `DefDecrement := DecrementOp SuperName`
    fn def_decrement(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefDecrement,
            &[Self::decrement_op, Self::super_name],
        )
    }

    fn decrement_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::DecrementOp, 0x76)
    }

    /// `DefDerefOf := DerefOfOp ObjReference`
    fn def_deref_of(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefDerefOf,
            &[Self::deref_of_op, Self::obj_reference],
        )
    }

    fn deref_of_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::DerefOfOp, 0x83)
    }

    fn obj_reference(&mut self) -> ParseResult {
        self.sequence(NodeKind::ObjReference, &[Self::term_arg])
    }

    /// `DefDivide := DivideOp Dividend Divisor Remainder Quotient`
    fn def_divide(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefDivide,
            &[
                Self::divide_op,
                Self::dividend,
                Self::divisor,
                Self::remainder,
                Self::quotient,
            ],
        )
    }

    fn divide_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::DivideOp, 0x78)
    }

    fn dividend(&mut self) -> ParseResult {
        self.sequence(NodeKind::Dividend, &[Self::term_arg])
    }

    fn divisor(&mut self) -> ParseResult {
        self.sequence(NodeKind::Divisor, &[Self::term_arg])
    }

    fn remainder(&mut self) -> ParseResult {
        self.sequence(NodeKind::Remainder, &[Self::target])
    }

    fn quotient(&mut self) -> ParseResult {
        self.sequence(NodeKind::Quotient, &[Self::target])
    }

    /// `DefFindSetLeftBit := FindSetLeftBitOp Operand Target`
    fn def_find_set_left_bit(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefFindSetLeftBit,
            &[Self::find_set_left_bit_op, Self::operand, Self::target],
        )
    }

    fn find_set_left_bit_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::FindSetLeftBitOp, 0x81)
    }

    /// `DefFindSetRightBit := FindSetRightBitOp Operand Target`
    fn def_find_set_right_bit(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefFindSetRightBit,
            &[Self::find_set_right_bit_op, Self::operand, Self::target],
        )
    }

    fn find_set_right_bit_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::FindSetRightBitOp, 0x82)
    }

    /// `DefFromBcd := FromBcdOp BcdValue Target`
    fn def_from_bcd(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefFromBcd,
            &[Self::from_bcd_op, Self::bcd_value, Self::target],
        )
    }

    fn from_bcd_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::FromBcdOp, 0x28)
    }

    fn bcd_value(&mut self) -> ParseResult {
        self.sequence(NodeKind::BcdValue, &[Self::term_arg])
    }

    /// `DefIncrement := IncrementOp SuperName`
    fn def_increment(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefIncrement,
            &[Self::increment_op, Self::super_name],
        )
    }

    fn increment_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::IncrementOp, 0x75)
    }

    /// `DefIndex := IndexOp BuffPkgStrObj IndexValue Target`
    fn def_index(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefIndex,
            &[
                Self::index_op,
                Self::buff_pkg_str_obj,
                Self::index_value,
                Self::target,
            ],
        )
    }

    fn index_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::IndexOp, 0x88)
    }

    fn buff_pkg_str_obj(&mut self) -> ParseResult {
        self.sequence(NodeKind::BuffPkgStrObj, &[Self::term_arg])
    }

    fn index_value(&mut self) -> ParseResult {
        self.sequence(NodeKind::IndexValue, &[Self::term_arg])
    }

    /// `DefLAnd := LAndOp Operand Operand`
    fn def_l_and(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLAnd,
            &[Self::l_and_op, Self::operand, Self::operand],
        )
    }

    fn l_and_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::LAndOp, 0x90)
    }

    /// `DefLEqual := LEqualOp Operand Operand`
    fn def_l_equal(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLEqual,
            &[Self::l_equal_op, Self::operand, Self::operand],
        )
    }

    fn l_equal_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::LEqualOp, 0x93)
    }

    /// `DefLGreater := LGreaterOp Operand Operand`
    fn def_l_greater(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLGreater,
            &[Self::l_greater_op, Self::operand, Self::operand],
        )
    }

    fn l_greater_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::LGreaterOp, 0x94)
    }

    /// `DefLGreaterEqual := LNotOp LLessOp Operand Operand`
    fn def_l_greater_equal(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLGreaterEqual,
            &[Self::l_greater_equal_op, Self::operand, Self::operand],
        )
    }

    fn l_greater_equal_op(&mut self) -> ParseResult {
        self.op2_leaf(NodeKind::LGreaterEqualOp, 0x92, 0x95)
    }

    /// `DefLLess := LLessOp Operand Operand`
    fn def_l_less(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLLess,
            &[Self::l_less_op, Self::operand, Self::operand],
        )
    }

    fn l_less_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::LLessOp, 0x95)
    }

    /// `DefLLessEqual := LNotOp LGreaterOp Operand Operand`
    fn def_l_less_equal(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLLessEqual,
            &[Self::l_less_equal_op, Self::operand, Self::operand],
        )
    }

    fn l_less_equal_op(&mut self) -> ParseResult {
        self.op2_leaf(NodeKind::LLessEqualOp, 0x92, 0x94)
    }

    /// `DefLNot := LNotOp Operand`
    fn def_l_not(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefLNot, &[Self::l_not_op, Self::operand])
    }

    fn l_not_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::LNotOp, 0x92)
    }

    /// `DefLNotEqual := LNotOp LEqualOp Operand Operand`
    fn def_l_not_equal(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLNotEqual,
            &[Self::l_not_equal_op, Self::operand, Self::operand],
        )
    }

    fn l_not_equal_op(&mut self) -> ParseResult {
        self.op2_leaf(NodeKind::LNotEqualOp, 0x92, 0x93)
    }

    /// `DefLoadTable := LoadTableOp TermArg TermArg TermArg TermArg
    ///                  TermArg TermArg`
    fn def_load_table(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLoadTable,
            &[
                Self::load_table_op,
                Self::term_arg,
                Self::term_arg,
                Self::term_arg,
                Self::term_arg,
                Self::term_arg,
                Self::term_arg,
            ],
        )
    }

    fn load_table_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::LoadTableOp, 0x1F)
    }

    /// `DefLOr := LOrOp Operand Operand`
    fn def_l_or(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefLOr,
            &[Self::l_or_op, Self::operand, Self::operand],
        )
    }

    fn l_or_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::LOrOp, 0x91)
    }

    /// `DefMatch := MatchOp SearchPkg MatchOpcode Operand MatchOpcode
    ///              Operand StartIndex`
    fn def_match(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefMatch,
            &[
                Self::match_op,
                Self::search_pkg,
                Self::match_opcode,
                Self::operand,
                Self::match_opcode,
                Self::operand,
                Self::start_index,
            ],
        )
    }

    fn match_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::MatchOp, 0x89)
    }

    fn search_pkg(&mut self) -> ParseResult {
        self.sequence(NodeKind::SearchPkg, &[Self::term_arg])
    }

    fn match_opcode(&mut self) -> ParseResult {
        self.sequence(NodeKind::MatchOpcode, &[Self::byte_data])
    }

    fn start_index(&mut self) -> ParseResult {
        self.sequence(NodeKind::StartIndex, &[Self::term_arg])
    }

    /// `DefMid := MidOp MidObj TermArg TermArg Target`
    fn def_mid(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefMid,
            &[
                Self::mid_op,
                Self::mid_obj,
                Self::term_arg,
                Self::term_arg,
                Self::target,
            ],
        )
    }

    fn mid_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::MidOp, 0x9E)
    }

    fn mid_obj(&mut self) -> ParseResult {
        self.sequence(NodeKind::MidObj, &[Self::term_arg])
    }

    /// `DefMod := ModOp Dividend Divisor Target`
    fn def_mod(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefMod,
            &[Self::mod_op, Self::dividend, Self::divisor, Self::target],
        )
    }

    fn mod_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ModOp, 0x85)
    }

    /// `DefMultiply := MultiplyOp Operand Operand Target`
    fn def_multiply(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefMultiply,
            &[Self::multiply_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn multiply_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::MultiplyOp, 0x77)
    }

    /// `DefNAnd := NAndOp Operand Operand Target`
    fn def_nand(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefNAnd,
            &[Self::nand_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn nand_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::NAndOp, 0x7C)
    }

    /// `DefNOr := NOrOp Operand Operand Target`
    fn def_nor(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefNOr,
            &[Self::nor_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn nor_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::NOrOp, 0x7E)
    }

    /// `DefNot := NotOp Operand Target`
    fn def_not(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefNot,
            &[Self::not_op, Self::operand, Self::target],
        )
    }

    fn not_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::NotOp, 0x80)
    }

    /// `DefObjectType := ObjectTypeOp SuperName`
    fn def_object_type(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefObjectType,
            &[Self::object_type_op, Self::super_name],
        )
    }

    fn object_type_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ObjectTypeOp, 0x8E)
    }

    /// `DefOr := OrOp Operand Operand Target`
    fn def_or(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefOr,
            &[Self::or_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn or_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::OrOp, 0x7D)
    }

    /// `DefPackage := PackageOp PkgLength NumElements PackageElementList`
    pub(super) fn def_package(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefPackage,
            BlockOp::Leaf(NodeKind::PackageOp, 0x12),
            &[Self::num_elements],
            BlockBody::PackageElements,
        )
    }

    fn num_elements(&mut self) -> ParseResult {
        self.sequence(NodeKind::NumElements, &[Self::byte_data])
    }

    /// `DefVarPackage := VarPackageOp PkgLength VarNumElements
    ///                   PackageElementList`
    pub(super) fn def_var_package(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefVarPackage,
            BlockOp::Leaf(NodeKind::VarPackageOp, 0x13),
            &[Self::var_num_elements],
            BlockBody::PackageElements,
        )
    }

    fn var_num_elements(&mut self) -> ParseResult {
        self.sequence(NodeKind::VarNumElements, &[Self::term_arg])
    }

    /// `PackageElementList := PackageElement*`
    pub(super) fn package_element_list(&mut self) -> ParseResult {
        Ok(Some(self.repetition(
            NodeKind::PackageElementList,
            Self::package_element,
        )?))
    }

    /// `PackageElement := DataRefObject | NameString`
    ///
    /// Recursion guard: packages nest through DataRefObject.
    fn package_element(&mut self) -> ParseResult {
        self.enter_recursion()?;
        let result = self.wrap_choice(
            NodeKind::PackageElement,
            &[Self::data_ref_object, Self::name_string],
        );
        self.exit_recursion();
        result
    }

    /// `DefRefOf := RefOfOp SuperName`
    fn def_ref_of(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefRefOf, &[Self::ref_of_op, Self::super_name])
    }

    fn ref_of_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::RefOfOp, 0x71)
    }

    /// `DefShiftLeft := ShiftLeftOp Operand ShiftCount Target`
    fn def_shift_left(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefShiftLeft,
            &[
                Self::shift_left_op,
                Self::operand,
                Self::shift_count,
                Self::target,
            ],
        )
    }

    fn shift_left_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ShiftLeftOp, 0x79)
    }

    fn shift_count(&mut self) -> ParseResult {
        self.sequence(NodeKind::ShiftCount, &[Self::term_arg])
    }

    /// `DefShiftRight := ShiftRightOp Operand ShiftCount Target`
    fn def_shift_right(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefShiftRight,
            &[
                Self::shift_right_op,
                Self::operand,
                Self::shift_count,
                Self::target,
            ],
        )
    }

    fn shift_right_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ShiftRightOp, 0x7A)
    }

    /// `DefSizeOf := SizeOfOp SuperName`
    fn def_size_of(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefSizeOf, &[Self::size_of_op, Self::super_name])
    }

    fn size_of_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::SizeOfOp, 0x87)
    }

    /// `DefStore := StoreOp TermArg SuperName`
    fn def_store(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefStore,
            &[Self::store_op, Self::term_arg, Self::super_name],
        )
    }

    fn store_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::StoreOp, 0x70)
    }

    /// `DefSubtract := SubtractOp Operand Operand Target`
    fn def_subtract(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefSubtract,
            &[Self::subtract_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn subtract_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::SubtractOp, 0x74)
    }

    /// `DefTimer := TimerOp`
    fn def_timer(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefTimer, &[Self::timer_op])
    }

    fn timer_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::TimerOp, 0x33)
    }

    /// `DefToBcd := ToBcdOp Operand Target`
    fn def_to_bcd(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefToBcd,
            &[Self::to_bcd_op, Self::operand, Self::target],
        )
    }

    fn to_bcd_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::ToBcdOp, 0x29)
    }

    /// `DefToBuffer := ToBufferOp Operand Target`
    fn def_to_buffer(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefToBuffer,
            &[Self::to_buffer_op, Self::operand, Self::target],
        )
    }

    fn to_buffer_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ToBufferOp, 0x96)
    }

    /// `DefToDecimalString := ToDecimalStringOp Operand Target`
    fn def_to_decimal_string(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefToDecimalString,
            &[Self::to_decimal_string_op, Self::operand, Self::target],
        )
    }

    fn to_decimal_string_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ToDecimalStringOp, 0x97)
    }

    /// `DefToHexString := ToHexStringOp Operand Target`
    fn def_to_hex_string(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefToHexString,
            &[Self::to_hex_string_op, Self::operand, Self::target],
        )
    }

    fn to_hex_string_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ToHexStringOp, 0x98)
    }

    /// `DefToInteger := ToIntegerOp Operand Target`
    fn def_to_integer(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefToInteger,
            &[Self::to_integer_op, Self::operand, Self::target],
        )
    }

    fn to_integer_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ToIntegerOp, 0x99)
    }

    /// `DefToString := ToStringOp TermArg LengthArg Target`
    fn def_to_string(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefToString,
            &[
                Self::to_string_op,
                Self::term_arg,
                Self::length_arg,
                Self::target,
            ],
        )
    }

    fn to_string_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ToStringOp, 0x9C)
    }

    fn length_arg(&mut self) -> ParseResult {
        self.sequence(NodeKind::LengthArg, &[Self::term_arg])
    }

    /// `DefWait := WaitOp EventObject Operand`
    fn def_wait(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefWait,
            &[Self::wait_op, Self::event_object, Self::operand],
        )
    }

    fn wait_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::WaitOp, 0x25)
    }

    /// `DefXOr := XOrOp Operand Operand Target`
    fn def_xor(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefXOr,
            &[Self::xor_op, Self::operand, Self::operand, Self::target],
        )
    }

    fn xor_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::XOrOp, 0x7F)
    }
}
