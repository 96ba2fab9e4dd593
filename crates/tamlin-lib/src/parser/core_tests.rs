use crate::ast::{Arena, NodeKind};

use super::core::{Limits, Parser};
use super::error::Fault;

#[test]
fn depth_guard_faults_past_the_limit() {
    let limits = Limits::default().with_max_depth(2);
    let mut p = Parser::with_limits(b"", limits, Arena::new());

    assert!(p.enter_recursion().is_ok());
    assert!(p.enter_recursion().is_ok());
    assert_eq!(
        p.enter_recursion().unwrap_err(),
        Fault::DepthLimit { limit: 2 }
    );

    // Leaving a level frees the budget again.
    p.exit_recursion();
    assert!(p.enter_recursion().is_ok());
}

#[test]
fn default_depth_limit_is_generous() {
    assert_eq!(Limits::default().max_depth, 128);
}

#[test]
fn into_arena_keeps_the_forest() {
    let mut p = Parser::new(b"");
    let id = p.arena.alloc(NodeKind::TermList, &[]).unwrap();

    let arena = p.into_arena();
    assert_eq!(arena.kind(id), NodeKind::TermList);
    assert_eq!(arena.live_nodes(), 1);
}
