use crate::parser::Parser;
use crate::test_utils::{dump_rule, expect_mismatch};

#[test]
fn byte_const() {
    insta::assert_snapshot!(dump_rule(&[0x0A, 0xF5], Parser::data_object), @r#"
    DataObject
      ComputationalData
        ByteConst
          BytePrefix 0A
          ByteData F5
    "#);
}

#[test]
fn word_const_keeps_wire_order() {
    insta::assert_snapshot!(dump_rule(&[0x0B, 0x34, 0x12], Parser::data_object), @r#"
    DataObject
      ComputationalData
        WordConst
          WordPrefix 0B
          WordData 34 12
    "#);
}

#[test]
fn qword_const() {
    let input = [0x0E, 0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01];
    insta::assert_snapshot!(dump_rule(&input, Parser::data_object), @r#"
    DataObject
      ComputationalData
        QWordConst
          QWordPrefix 0E
          QWordData EF CD AB 89 67 45 23 01
    "#);
}

#[test]
fn truncated_prefixed_integers_mismatch() {
    expect_mismatch(&[0x0A], Parser::data_object);
    expect_mismatch(&[0x0B, 0x01], Parser::data_object);
    expect_mismatch(&[0x0E, 0x01, 0x02, 0x03], Parser::data_object);
}

#[test]
fn string_keeps_terminator_in_char_list() {
    insta::assert_snapshot!(dump_rule(&[0x0D, b'H', b'I', 0x00], Parser::string), @r#"
    String
      StringPrefix 0D
      AsciiCharList
        AsciiChar "H"
        AsciiChar "I"
        NullChar 00
    "#);
}

#[test]
fn empty_string() {
    insta::assert_snapshot!(dump_rule(&[0x0D, 0x00], Parser::string), @r#"
    String
      StringPrefix 0D
      AsciiCharList
        NullChar 00
    "#);
}

#[test]
fn string_with_non_ascii_byte_mismatches() {
    expect_mismatch(&[0x0D, 0x80, 0x00], Parser::string);
}

#[test]
fn string_with_nothing_after_prefix_mismatches() {
    expect_mismatch(&[0x0D], Parser::string);
}

#[test]
fn const_objects() {
    insta::assert_snapshot!(dump_rule(&[0x00], Parser::data_object), @r#"
    DataObject
      ComputationalData
        ConstObj
          ZeroOp 00
    "#);
    insta::assert_snapshot!(dump_rule(&[0xFF], Parser::data_object), @r#"
    DataObject
      ComputationalData
        ConstObj
          OnesOp FF
    "#);
}

#[test]
fn revision_op() {
    insta::assert_snapshot!(dump_rule(&[0x5B, 0x30], Parser::data_object), @r#"
    DataObject
      ComputationalData
        RevisionOp "[0"
    "#);
}

#[test]
fn data_ref_object_wraps_data() {
    insta::assert_snapshot!(dump_rule(&[0x01], Parser::data_ref_object), @r#"
    DataRefObject
      DataObject
        ComputationalData
          ConstObj
            OneOp 01
    "#);
}
