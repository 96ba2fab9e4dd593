use crate::parser::Parser;
use crate::test_utils::{dump_rule, expect_mismatch};

#[test]
fn alias_pairs_two_names() {
    let input = [0x06, b'A', b'L', b'S', b'0', b'T', b'G', b'T', b'_'];
    insta::assert_snapshot!(dump_rule(&input, Parser::name_space_modifier_obj), @r#"
    NameSpaceModifierObj
      DefAlias
        NameString
          NamePath
            NameSeg "ALS0"
        NameString
          NamePath
            NameSeg "TGT_"
    "#);
}

#[test]
fn alias_missing_the_second_name_mismatches() {
    expect_mismatch(&[0x06, b'A', b'L', b'S', b'0'], Parser::name_space_modifier_obj);
}
