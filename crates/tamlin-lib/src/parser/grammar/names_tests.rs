use crate::parser::Parser;
use crate::test_utils::{dump_rule, expect_mismatch};

#[test]
fn name_seg_accepts_underscore_lead() {
    insta::assert_snapshot!(dump_rule(b"_SB0", Parser::name_seg), @r#"NameSeg "_SB0""#);
}

#[test]
fn name_seg_rejects_bad_leads_and_short_input() {
    expect_mismatch(b"aBCD", Parser::name_seg);
    expect_mismatch(b"0ABC", Parser::name_seg);
    expect_mismatch(b"AB", Parser::name_seg);
}

#[test]
fn name_string_relative() {
    insta::assert_snapshot!(dump_rule(b"FOO_", Parser::name_string), @r#"
    NameString
      NamePath
        NameSeg "FOO_"
    "#);
}

#[test]
fn name_string_rooted() {
    insta::assert_snapshot!(dump_rule(b"\\FOO_", Parser::name_string), @r#"
    NameString
      RootChar "\"
      NamePath
        NameSeg "FOO_"
    "#);
}

#[test]
fn name_string_with_parent_prefixes() {
    insta::assert_snapshot!(dump_rule(b"^^FOO_", Parser::name_string), @r#"
    NameString
      PrefixPath "^^"
      NamePath
        NameSeg "FOO_"
    "#);
}

#[test]
fn name_string_prefix_without_path_mismatches() {
    expect_mismatch(b"^^", Parser::name_string);
    expect_mismatch(b"\\", Parser::name_string);
}

#[test]
fn name_path_dual() {
    insta::assert_snapshot!(dump_rule(b"\x2eABCDEFGH", Parser::name_path), @r#"
    NamePath
      DualNamePath
        NameSeg "ABCD"
        NameSeg "EFGH"
    "#);
}

#[test]
fn name_path_multi() {
    insta::assert_snapshot!(dump_rule(b"\x2f\x03AAAABBBBCCCC", Parser::name_path), @r#"
    NamePath
      MultiNamePath
        SegCount 03
        NameSeg "AAAA"
        NameSeg "BBBB"
        NameSeg "CCCC"
    "#);
}

#[test]
fn name_path_multi_missing_segments_mismatches() {
    // SegCount says three but only two follow.
    expect_mismatch(b"\x2f\x03AAAABBBB", Parser::name_path);
}

#[test]
fn name_path_null() {
    insta::assert_snapshot!(dump_rule(&[0x00], Parser::name_path), @r#"
    NamePath
      NullName 00
    "#);
}

#[test]
fn simple_name_through_arg() {
    insta::assert_snapshot!(dump_rule(&[0x68], Parser::simple_name), @r#"
    SimpleName
      ArgObj
        Arg0Op "h"
    "#);
}

#[test]
fn super_name_through_debug() {
    insta::assert_snapshot!(dump_rule(&[0x5B, 0x31], Parser::super_name), @r#"
    SuperName
      DebugObj
        DebugOp "[1"
    "#);
}

#[test]
fn target_prefers_super_name_for_null() {
    // 0x00 is both a NullName and, through SimpleName, a null NameString.
    // The SuperName alternative comes first and wins.
    insta::assert_snapshot!(dump_rule(&[0x00], Parser::target), @r#"
    Target
      SuperName
        SimpleName
          NameString
            NamePath
              NullName 00
    "#);
}

#[test]
fn target_through_local() {
    insta::assert_snapshot!(dump_rule(&[0x60], Parser::target), @r#"
    Target
      SuperName
        SimpleName
          LocalObj
            Local0Op "`"
    "#);
}
