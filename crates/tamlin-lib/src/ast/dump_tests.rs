use super::*;
use crate::Colors;

#[test]
fn leaf_with_printable_payload() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::NameSeg, b"_SB_").unwrap();

    insta::assert_snapshot!(dump(&arena, root), @r#"NameSeg "_SB_""#);
}

#[test]
fn non_printable_payload_renders_as_hex() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::DWordData, &[0xDE, 0xAD, 0x00, 0x01]).unwrap();

    insta::assert_snapshot!(dump(&arena, root), @"DWordData DE AD 00 01");
}

#[test]
fn one_unprintable_byte_forces_hex() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::ByteList, b"AB\x01").unwrap();

    insta::assert_snapshot!(dump(&arena, root), @"ByteList 41 42 01");
}

#[test]
fn children_indent_two_spaces() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::DefName, &[]).unwrap();
    let name = arena.alloc(NodeKind::NameSeg, b"FOO_").unwrap();
    let konst = arena.alloc(NodeKind::ByteConst, &[]).unwrap();
    let prefix = arena.alloc(NodeKind::BytePrefix, &[0x0A]).unwrap();
    let value = arena.alloc(NodeKind::ByteData, &[0xFF]).unwrap();
    arena.attach_child(root, name);
    arena.attach_child(root, konst);
    arena.attach_child(konst, prefix);
    arena.attach_child(konst, value);

    insta::assert_snapshot!(dump(&arena, root), @r#"
    DefName
      NameSeg "FOO_"
      ByteConst
        BytePrefix 0A
        ByteData FF
    "#);
}

#[test]
fn siblings_render_at_the_same_depth() {
    let mut arena = Arena::new();
    let head = arena.alloc(NodeKind::TermObj, &[]).unwrap();
    let tail = arena.alloc(NodeKind::TermObj, &[]).unwrap();
    let child = arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    arena.attach_child(head, child);
    arena.set_next_sibling(head, Some(tail));

    insta::assert_snapshot!(dump(&arena, head), @r"
    TermObj
      ByteData 01
    TermObj
    ");
}

#[test]
fn colors_wrap_tags_and_payloads() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::NameSeg, b"_SB_").unwrap();

    let out = dump_colored(&arena, root, Colors::ON);
    assert!(out.contains("\x1b[34mNameSeg\x1b[0m"));
    assert!(out.contains("\x1b[32m\"_SB_\"\x1b[0m"));

    // OFF matches the plain dump byte for byte.
    assert_eq!(dump_colored(&arena, root, Colors::OFF), dump(&arena, root));
}
