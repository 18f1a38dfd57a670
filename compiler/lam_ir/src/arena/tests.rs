use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_alloc_assigns_sequential_ids() {
    let mut arena = ExprArena::new();
    let x = Name::from_raw(1);
    let a = arena.var(x);
    let b = arena.lambda(x, a);
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_kind_returns_node() {
    let mut arena = ExprArena::new();
    let f = Name::from_raw(1);
    let x = Name::from_raw(2);
    let func = arena.var(f);
    let arg = arena.var(x);
    let app = arena.apply(func, arg);
    assert_eq!(arena.kind(app), ExprKind::Apply { func, arg });
    assert_eq!(arena.kind(func), ExprKind::Var(f));
}

#[test]
fn test_freeze_shares_storage() {
    let mut arena = ExprArena::new();
    arena.var(Name::EMPTY);
    let shared = arena.freeze();
    let clone = shared.clone();
    assert!(shared.ptr_eq(&clone));
    assert_eq!(clone.len(), 1);
}

#[test]
fn test_distinct_arenas_are_not_ptr_eq() {
    let a = ExprArena::new().freeze();
    let b = ExprArena::new().freeze();
    assert!(!a.ptr_eq(&b));
    assert!(a.is_empty());
}
