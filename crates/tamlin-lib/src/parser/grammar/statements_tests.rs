use crate::ast::NodeKind;
use crate::parser::Parser;
use crate::test_utils::{dump_rule, expect_mismatch};

#[test]
fn bare_statements_are_childless() {
    let cases: [(&[u8], NodeKind); 4] = [
        (&[0xA5], NodeKind::DefBreak),
        (&[0xCC], NodeKind::DefBreakPoint),
        (&[0x9F], NodeKind::DefContinue),
        (&[0xA3], NodeKind::DefNoop),
    ];
    for (input, kind) in cases {
        let mut p = Parser::new(input);
        let node = p.type1_opcode().unwrap().unwrap();
        let inner = p.arena.first_child(node).unwrap();
        assert_eq!(p.arena.kind(inner), kind);
        assert_eq!(p.arena.first_child(inner), None);
        assert!(p.cursor.is_empty());
    }
}

#[test]
fn return_statement() {
    insta::assert_snapshot!(dump_rule(&[0xA4, 0x01], Parser::type1_opcode), @r#"
    Type1Opcode
      DefReturn
        ReturnOp A4
        ArgObject
          TermArg
            DataObject
              ComputationalData
                ConstObj
                  OneOp 01
    "#);
}

#[test]
fn if_with_else_appends_the_else_branch() {
    let input = [0xA0, 0x03, 0x01, 0xA3, 0xA1, 0x02, 0xA5];
    insta::assert_snapshot!(dump_rule(&input, Parser::type1_opcode), @r#"
    Type1Opcode
      DefIfElse
        PkgLength
          PkgLeadByte 03
        Predicate
          TermArg
            DataObject
              ComputationalData
                ConstObj
                  OneOp 01
        TermList
          TermObj
            Type1Opcode
              DefNoop
          TermList
        DefElse
          PkgLength
            PkgLeadByte 02
          TermList
            TermObj
              Type1Opcode
                DefBreak
            TermList
    "#);
}

#[test]
fn if_without_else_has_no_else_child() {
    let mut p = Parser::new(&[0xA0, 0x03, 0x01, 0xA3]);
    let node = p.type1_opcode().unwrap().unwrap();

    let def_if = p.arena.first_child(node).unwrap();
    assert_eq!(p.arena.kind(def_if), NodeKind::DefIfElse);
    let kinds: Vec<NodeKind> = p.arena.children(def_if).map(|c| p.arena.kind(c)).collect();
    assert_eq!(
        kinds,
        [NodeKind::PkgLength, NodeKind::Predicate, NodeKind::TermList]
    );
}

#[test]
fn while_loop() {
    let input = [0xA2, 0x03, 0xFF, 0xA3];
    insta::assert_snapshot!(dump_rule(&input, Parser::type1_opcode), @r#"
    Type1Opcode
      DefWhile
        WhileOp A2
        PkgLength
          PkgLeadByte 03
        Predicate
          TermArg
            DataObject
              ComputationalData
                ConstObj
                  OnesOp FF
        TermList
          TermObj
            Type1Opcode
              DefNoop
          TermList
    "#);
}

#[test]
fn while_with_truncated_body_mismatches() {
    expect_mismatch(&[0xA2, 0x03, 0xFF], Parser::type1_opcode);
}

#[test]
fn notify_statement() {
    let input = [0x86, b'_', b'S', b'B', b'_', 0x0A, 0x05];
    insta::assert_snapshot!(dump_rule(&input, Parser::type1_opcode), @r#"
    Type1Opcode
      DefNotify
        NotifyOp 86
        NotifyObject
          SuperName
            SimpleName
              NameString
                NamePath
                  NameSeg "_SB_"
        NotifyValue
          TermArg
            DataObject
              ComputationalData
                ByteConst
                  BytePrefix 0A
                  ByteData 05
    "#);
}

#[test]
fn stall_statement() {
    insta::assert_snapshot!(dump_rule(&[0x5B, 0x21, 0x0A, 0x96], Parser::type1_opcode), @r#"
    Type1Opcode
      DefStall
        StallOp "[!"
        UsecTime
          TermArg
            DataObject
              ComputationalData
                ByteConst
                  BytePrefix 0A
                  ByteData 96
    "#);
}

#[test]
fn release_statement() {
    insta::assert_snapshot!(dump_rule(&[0x5B, 0x27, 0x60], Parser::type1_opcode), @r#"
    Type1Opcode
      DefRelease
        ReleaseOp "['"
        MutexObject
          SuperName
            SimpleName
              LocalObj
                Local0Op "`"
    "#);
}

#[test]
fn fatal_statement() {
    let input = [0x5B, 0x32, 0x01, 0x78, 0x56, 0x34, 0x12, 0x01];
    insta::assert_snapshot!(dump_rule(&input, Parser::type1_opcode), @r#"
    Type1Opcode
      DefFatal
        FatalOp "[2"
        FatalType
          ByteData 01
        FatalCode
          DWordData 78 56 34 12
        FatalArg
          TermArg
            DataObject
              ComputationalData
                ConstObj
                  OneOp 01
    "#);
}
