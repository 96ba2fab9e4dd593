use super::*;

#[test]
fn alloc_copies_payload() {
    let mut arena = Arena::new();
    let bytes = *b"_SB_";
    let id = arena.alloc(NodeKind::NameSeg, &bytes).unwrap();

    assert_eq!(arena.kind(id), NodeKind::NameSeg);
    assert_eq!(arena.data(id), b"_SB_");
    assert_eq!(arena.live_nodes(), 1);
    assert_eq!(arena.live_bytes(), 4);
}

#[test]
fn empty_payload_is_legal() {
    let mut arena = Arena::new();
    let id = arena.alloc(NodeKind::TermList, &[]).unwrap();

    assert!(arena.data(id).is_empty());
    assert_eq!(arena.live_bytes(), 0);
}

#[test]
fn attach_child_appends_in_order() {
    let mut arena = Arena::new();
    let parent = arena.alloc(NodeKind::TermList, &[]).unwrap();
    let a = arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    let b = arena.alloc(NodeKind::ByteData, &[2]).unwrap();
    let c = arena.alloc(NodeKind::ByteData, &[3]).unwrap();
    arena.attach_child(parent, a);
    arena.attach_child(parent, b);
    arena.attach_child(parent, c);

    let payloads: Vec<u8> = arena.children(parent).map(|id| arena.data(id)[0]).collect();
    assert_eq!(payloads, [1, 2, 3]);
}

#[test]
fn release_recycles_slots() {
    let mut arena = Arena::new();
    let a = arena.alloc(NodeKind::ByteData, &[0xAA]).unwrap();
    let _b = arena.alloc(NodeKind::ByteData, &[0xBB]).unwrap();
    arena.release(a);
    assert_eq!(arena.live_nodes(), 1);
    assert_eq!(arena.live_bytes(), 1);

    // The vacant slot is reused before the vector grows.
    let c = arena.alloc(NodeKind::ByteData, &[0xCC]).unwrap();
    assert_eq!(c, a);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.data(c), &[0xCC]);
}

#[test]
fn release_forest_frees_children_and_siblings() {
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::TermList, &[]).unwrap();
    let child = arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    let grandchild = arena.alloc(NodeKind::ByteData, &[2]).unwrap();
    let sibling = arena.alloc(NodeKind::ByteData, &[3]).unwrap();
    arena.attach_child(root, child);
    arena.attach_child(child, grandchild);
    arena.set_next_sibling(root, Some(sibling));

    arena.release_forest(Some(root));
    assert_eq!(arena.live_nodes(), 0);
    assert_eq!(arena.live_bytes(), 0);
}

#[test]
fn release_forest_none_is_noop() {
    let mut arena = Arena::new();
    arena.release_forest(None);
    assert_eq!(arena.live_nodes(), 0);
}

#[test]
fn release_forest_deep_chain() {
    // Deeper than any sane call stack; the walk must be iterative.
    let mut arena = Arena::new();
    let root = arena.alloc(NodeKind::TermList, &[]).unwrap();
    let mut cur = root;
    for _ in 0..100_000 {
        let next = arena.alloc(NodeKind::TermList, &[]).unwrap();
        arena.set_first_child(cur, Some(next));
        cur = next;
    }

    arena.release_forest(Some(root));
    assert_eq!(arena.live_nodes(), 0);
}

#[test]
fn node_budget_is_enforced() {
    let mut arena = Arena::new().with_max_nodes(2);
    arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    arena.alloc(NodeKind::ByteData, &[2]).unwrap();

    let err = arena.alloc(NodeKind::ByteData, &[3]).unwrap_err();
    assert_eq!(err, AllocError::Nodes { limit: 2 });
    assert_eq!(arena.live_nodes(), 2);
}

#[test]
fn data_budget_failure_returns_the_slot() {
    let mut arena = Arena::new().with_max_data_bytes(4);
    let id = arena.alloc(NodeKind::NameSeg, b"_SB_").unwrap();

    // Slot allocation succeeds, payload pushes past the budget; the
    // half-built node must not stay live.
    let err = arena.alloc(NodeKind::ByteData, &[0]).unwrap_err();
    assert_eq!(err, AllocError::Data { limit: 4 });
    assert_eq!(arena.live_nodes(), 1);
    assert_eq!(arena.live_bytes(), 4);

    // The returned slot is reusable once the budget allows.
    arena.release(id);
    let again = arena.alloc(NodeKind::ByteData, &[9]).unwrap();
    assert_eq!(arena.data(again), &[9]);
}

#[test]
fn budget_counts_live_not_total() {
    let mut arena = Arena::new().with_max_nodes(1);
    let a = arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    arena.release(a);
    // Released capacity is available again.
    arena.alloc(NodeKind::ByteData, &[2]).unwrap();
}

#[test]
#[should_panic(expected = "vacant slot")]
fn access_after_release_panics() {
    let mut arena = Arena::new();
    let id = arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    arena.release(id);
    let _ = arena.kind(id);
}

#[test]
#[should_panic(expected = "vacant slot")]
fn double_release_panics() {
    let mut arena = Arena::new();
    let id = arena.alloc(NodeKind::ByteData, &[1]).unwrap();
    arena.release(id);
    arena.release(id);
}
