use super::*;

#[test]
fn leaf_serializes_kind_and_data() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::NameSeg, b"_SB_").unwrap();

    let json = serde_json::to_string(&JsonTree::new(&arena, root)).unwrap();
    assert_eq!(json, r#"{"kind":"NameSeg","data":"_SB_"}"#);
}

#[test]
fn empty_payload_omits_data() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::TermList, &[]).unwrap();

    let json = serde_json::to_string(&JsonTree::new(&arena, root)).unwrap();
    assert_eq!(json, r#"{"kind":"TermList"}"#);
}

#[test]
fn hex_payload_matches_dump_rendering() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::WordData, &[0x34, 0x12]).unwrap();

    let json = serde_json::to_string(&JsonTree::new(&arena, root)).unwrap();
    assert_eq!(json, r#"{"kind":"WordData","data":"34 12"}"#);
}

#[test]
fn children_nest_in_order() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::ConstObj, &[]).unwrap();
    let one = arena.alloc(NodeKind::OneOp, &[0x01]).unwrap();
    arena.attach_child(root, one);

    let value = serde_json::to_value(JsonTree::new(&arena, root)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "ConstObj",
            "children": [{ "kind": "OneOp", "data": "01" }],
        })
    );
}
