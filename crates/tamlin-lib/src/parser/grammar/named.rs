//! Named objects: fields, methods, devices, regions and the rest of
//! the declaration opcodes.

use crate::ast::NodeKind;
use crate::parser::{ParseResult, Parser};

use super::opcodes::{
    ACCESS_FIELD, BANK_FIELD_OP, CONNECT_FIELD, EXTENDED_ACCESS_FIELD, RESERVED_FIELD,
};
use super::package::{BlockBody, BlockOp};

impl Parser<'_> {
    /// `NamedObj := DefBankField | DefCreateBitField | ... | DefThermalZone`
    pub(super) fn named_obj(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::NamedObj,
            &[
                Self::def_bank_field,
                Self::def_create_bit_field,
                Self::def_create_byte_field,
                Self::def_create_dword_field,
                Self::def_create_field,
                Self::def_create_qword_field,
                Self::def_create_word_field,
                Self::def_data_region,
                Self::def_device,
                Self::def_event,
                Self::def_external,
                Self::def_field,
                Self::def_index_field,
                Self::def_method,
                Self::def_mutex,
                Self::def_op_region,
                Self::def_power_res,
                Self::def_processor,
                Self::def_thermal_zone,
            ],
        )
    }

    /// `DefBankField := BankFieldOp PkgLength NameString NameString
    ///                  BankValue FieldFlags FieldList`
    fn def_bank_field(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefBankField,
            BlockOp::SilentExt(BANK_FIELD_OP),
            &[
                Self::name_string,
                Self::name_string,
                Self::bank_value,
                Self::field_flags,
            ],
            BlockBody::FieldList,
        )
    }

    fn bank_value(&mut self) -> ParseResult {
        self.sequence(NodeKind::BankValue, &[Self::term_arg])
    }

    /// `DefCreateBitField := CreateBitFieldOp SourceBuff BitIndex NameString`
    fn def_create_bit_field(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCreateBitField,
            &[
                Self::create_bit_field_op,
                Self::source_buff,
                Self::bit_index,
                Self::name_string,
            ],
        )
    }

    fn create_bit_field_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::CreateBitFieldOp, 0x8D)
    }

    fn source_buff(&mut self) -> ParseResult {
        self.sequence(NodeKind::SourceBuff, &[Self::term_arg])
    }

    fn bit_index(&mut self) -> ParseResult {
        self.sequence(NodeKind::BitIndex, &[Self::term_arg])
    }

    /// `DefCreateByteField := CreateByteFieldOp SourceBuff ByteIndex NameString`
    fn def_create_byte_field(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCreateByteField,
            &[
                Self::create_byte_field_op,
                Self::source_buff,
                Self::byte_index,
                Self::name_string,
            ],
        )
    }

    fn create_byte_field_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::CreateByteFieldOp, 0x8C)
    }

    fn byte_index(&mut self) -> ParseResult {
        self.sequence(NodeKind::ByteIndex, &[Self::term_arg])
    }

    /// `DefCreateDWordField := CreateDWordFieldOp SourceBuff ByteIndex NameString`
    fn def_create_dword_field(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCreateDWordField,
            &[
                Self::create_dword_field_op,
                Self::source_buff,
                Self::byte_index,
                Self::name_string,
            ],
        )
    }

    fn create_dword_field_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::CreateDWordFieldOp, 0x8A)
    }

    /// `DefCreateField := CreateFieldOp SourceBuff BitIndex NumBits NameString`
    fn def_create_field(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCreateField,
            &[
                Self::create_field_op,
                Self::source_buff,
                Self::bit_index,
                Self::num_bits,
                Self::name_string,
            ],
        )
    }

    fn create_field_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::CreateFieldOp, 0x13)
    }

    fn num_bits(&mut self) -> ParseResult {
        self.sequence(NodeKind::NumBits, &[Self::term_arg])
    }

    /// `DefCreateQWordField := CreateQWordFieldOp SourceBuff ByteIndex NameString`
    fn def_create_qword_field(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCreateQWordField,
            &[
                Self::create_qword_field_op,
                Self::source_buff,
                Self::byte_index,
                Self::name_string,
            ],
        )
    }

    fn create_qword_field_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::CreateQWordFieldOp, 0x8F)
    }

    /// `DefCreateWordField := CreateWordFieldOp SourceBuff ByteIndex NameString`
    fn def_create_word_field(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefCreateWordField,
            &[
                Self::create_word_field_op,
                Self::source_buff,
                Self::byte_index,
                Self::name_string,
            ],
        )
    }

    fn create_word_field_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::CreateWordFieldOp, 0x8B)
    }

    /// `DefDataRegion := DataRegionOp NameString TermArg TermArg TermArg`
    fn def_data_region(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefDataRegion,
            &[
                Self::data_region_op,
                Self::name_string,
                Self::term_arg,
                Self::term_arg,
                Self::term_arg,
            ],
        )
    }

    fn data_region_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::DataRegionOp, 0x88)
    }

    /// `DefDevice := DeviceOp PkgLength NameString TermList`
    fn def_device(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefDevice,
            BlockOp::LeafExt(NodeKind::DeviceOp, 0x82),
            &[Self::name_string],
            BlockBody::TermList,
        )
    }

    /// `DefEvent := EventOp NameString`
    fn def_event(&mut self) -> ParseResult {
        self.sequence(NodeKind::DefEvent, &[Self::event_op, Self::name_string])
    }

    fn event_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::EventOp, 0x02)
    }

    /// `DefExternal := ExternalOp NameString ObjectType ArgumentCount`
    fn def_external(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefExternal,
            &[
                Self::external_op,
                Self::name_string,
                Self::object_type,
                Self::argument_count,
            ],
        )
    }

    fn external_op(&mut self) -> ParseResult {
        self.op_leaf(NodeKind::ExternalOp, 0x15)
    }

    fn object_type(&mut self) -> ParseResult {
        self.sequence(NodeKind::ObjectType, &[Self::byte_data])
    }

    fn argument_count(&mut self) -> ParseResult {
        self.sequence(NodeKind::ArgumentCount, &[Self::byte_data])
    }

    /// `DefField := FieldOp PkgLength NameString FieldFlags FieldList`
    fn def_field(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefField,
            BlockOp::LeafExt(NodeKind::FieldOp, 0x81),
            &[Self::name_string, Self::field_flags],
            BlockBody::FieldList,
        )
    }

    /// `DefIndexField := IndexFieldOp PkgLength NameString NameString
    ///                   FieldFlags FieldList`
    fn def_index_field(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefIndexField,
            BlockOp::LeafExt(NodeKind::IndexFieldOp, 0x86),
            &[Self::name_string, Self::name_string, Self::field_flags],
            BlockBody::FieldList,
        )
    }

    /// `DefMethod := MethodOp PkgLength NameString MethodFlags TermList`
    fn def_method(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefMethod,
            BlockOp::Leaf(NodeKind::MethodOp, 0x14),
            &[Self::name_string, Self::method_flags],
            BlockBody::TermList,
        )
    }

    fn method_flags(&mut self) -> ParseResult {
        self.sequence(NodeKind::MethodFlags, &[Self::byte_data])
    }

    /// `DefMutex := MutexOp NameString SyncFlags`
    fn def_mutex(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefMutex,
            &[Self::mutex_op, Self::name_string, Self::sync_flags],
        )
    }

    fn mutex_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::MutexOp, 0x01)
    }

    fn sync_flags(&mut self) -> ParseResult {
        self.sequence(NodeKind::SyncFlags, &[Self::byte_data])
    }

    /// `DefOpRegion := OpRegionOp NameString RegionSpace RegionOffset RegionLen`
    fn def_op_region(&mut self) -> ParseResult {
        self.sequence(
            NodeKind::DefOpRegion,
            &[
                Self::op_region_op,
                Self::name_string,
                Self::region_space,
                Self::region_offset,
                Self::region_len,
            ],
        )
    }

    fn op_region_op(&mut self) -> ParseResult {
        self.ext_op_leaf(NodeKind::OpRegionOp, 0x80)
    }

    fn region_space(&mut self) -> ParseResult {
        self.sequence(NodeKind::RegionSpace, &[Self::byte_data])
    }

    fn region_offset(&mut self) -> ParseResult {
        self.sequence(NodeKind::RegionOffset, &[Self::term_arg])
    }

    fn region_len(&mut self) -> ParseResult {
        self.sequence(NodeKind::RegionLen, &[Self::term_arg])
    }

    /// `DefPowerRes := PowerResOp PkgLength NameString SystemLevel
    ///                 ResourceOrder TermList`
    fn def_power_res(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefPowerRes,
            BlockOp::LeafExt(NodeKind::PowerResOp, 0x84),
            &[Self::name_string, Self::system_level, Self::resource_order],
            BlockBody::TermList,
        )
    }

    fn system_level(&mut self) -> ParseResult {
        self.sequence(NodeKind::SystemLevel, &[Self::byte_data])
    }

    fn resource_order(&mut self) -> ParseResult {
        self.sequence(NodeKind::ResourceOrder, &[Self::word_data])
    }

    /// `DefProcessor := ProcessorOp PkgLength NameString ProcId
    ///                  PblkAddr PblkLen TermList`
    fn def_processor(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefProcessor,
            BlockOp::LeafExt(NodeKind::ProcessorOp, 0x83),
            &[
                Self::name_string,
                Self::proc_id,
                Self::pblk_addr,
                Self::pblk_len,
            ],
            BlockBody::TermList,
        )
    }

    fn proc_id(&mut self) -> ParseResult {
        self.sequence(NodeKind::ProcId, &[Self::byte_data])
    }

    fn pblk_addr(&mut self) -> ParseResult {
        self.sequence(NodeKind::PblkAddr, &[Self::dword_data])
    }

    fn pblk_len(&mut self) -> ParseResult {
        self.sequence(NodeKind::PblkLen, &[Self::byte_data])
    }

    /// `DefThermalZone := ThermalZoneOp PkgLength NameString TermList`
    fn def_thermal_zone(&mut self) -> ParseResult {
        self.block(
            NodeKind::DefThermalZone,
            BlockOp::LeafExt(NodeKind::ThermalZoneOp, 0x85),
            &[Self::name_string],
            BlockBody::TermList,
        )
    }

    pub(super) fn field_flags(&mut self) -> ParseResult {
        self.sequence(NodeKind::FieldFlags, &[Self::byte_data])
    }

    /// `FieldList := FieldElement*`
    pub(super) fn field_list(&mut self) -> ParseResult {
        Ok(Some(
            self.repetition(NodeKind::FieldList, Self::field_element)?,
        ))
    }

    /// `FieldElement := NamedField | ReservedField | AccessField
    ///                | ExtendedAccessField | ConnectField`
    fn field_element(&mut self) -> ParseResult {
        self.wrap_choice(
            NodeKind::FieldElement,
            &[
                Self::named_field,
                Self::reserved_field,
                Self::access_field,
                Self::extended_access_field,
                Self::connect_field,
            ],
        )
    }

    /// `NamedField := NameSeg PkgLength`
    fn named_field(&mut self) -> ParseResult {
        self.sequence(NodeKind::NamedField, &[Self::name_seg, Self::pkg_length])
    }

    /// `ReservedField := 0x00 PkgLength`
    fn reserved_field(&mut self) -> ParseResult {
        self.op_seq(NodeKind::ReservedField, RESERVED_FIELD, &[Self::pkg_length])
    }

    /// `AccessField := 0x01 AccessType AccessAttrib`
    fn access_field(&mut self) -> ParseResult {
        self.op_seq(
            NodeKind::AccessField,
            ACCESS_FIELD,
            &[Self::access_type, Self::access_attrib],
        )
    }

    fn access_type(&mut self) -> ParseResult {
        self.sequence(NodeKind::AccessType, &[Self::byte_data])
    }

    fn access_attrib(&mut self) -> ParseResult {
        self.sequence(NodeKind::AccessAttrib, &[Self::byte_data])
    }

    /// `ExtendedAccessField := 0x03 AccessType ExtendedAccessAttrib AccessLength`
    fn extended_access_field(&mut self) -> ParseResult {
        self.op_seq(
            NodeKind::ExtendedAccessField,
            EXTENDED_ACCESS_FIELD,
            &[
                Self::access_type,
                Self::extended_access_attrib,
                Self::byte_data,
            ],
        )
    }

    fn extended_access_attrib(&mut self) -> ParseResult {
        self.sequence(NodeKind::ExtendedAccessAttrib, &[Self::byte_data])
    }

    /// `ConnectField := 0x02 (NameString | DefBuffer)`
    fn connect_field(&mut self) -> ParseResult {
        self.op_seq(NodeKind::ConnectField, CONNECT_FIELD, &[Self::connection])
    }

    fn connection(&mut self) -> ParseResult {
        self.choice(&[Self::name_string, Self::def_buffer])
    }
}
