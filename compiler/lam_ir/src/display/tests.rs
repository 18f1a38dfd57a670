use pretty_assertions::assert_eq;

use crate::{ExprArena, Program, StringInterner};

#[test]
fn test_variable() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = arena.var(interner.intern("x"));
    assert_eq!(crate::ExprDisplay::new(&arena, &interner, x).to_string(), "x");
}

#[test]
fn test_lambda_uses_canonical_glyph() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let body = arena.var(x);
    let id = arena.lambda(x, body);
    assert_eq!(crate::ExprDisplay::new(&arena, &interner, id).to_string(), "λx.x");
}

#[test]
fn test_application_of_variable() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let f = arena.var(interner.intern("f"));
    let a = arena.var(interner.intern("a"));
    let b = arena.var(interner.intern("b"));
    let fa = arena.apply(f, a);
    let fab = arena.apply(fa, b);
    assert_eq!(
        crate::ExprDisplay::new(&arena, &interner, fab).to_string(),
        "((f a) b)"
    );
}

#[test]
fn test_application_of_lambda_is_parenthesized() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let body = arena.var(x);
    let id = arena.lambda(x, body);
    let y = arena.var(interner.intern("y"));
    let app = arena.apply(id, y);
    assert_eq!(
        crate::ExprDisplay::new(&arena, &interner, app).to_string(),
        "((λx.x) y)"
    );
}

#[test]
fn test_deeply_nested_application_prints() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let f = interner.intern("f");
    let mut expr = arena.var(interner.intern("x"));
    for _ in 0..20_000 {
        let func = arena.var(f);
        expr = arena.apply(func, expr);
    }
    let printed = crate::ExprDisplay::new(&arena, &interner, expr).to_string();
    assert!(printed.starts_with("(f (f "));
    assert_eq!(printed.matches('(').count(), 20_000);
}

fn id_program(interner: &StringInterner) -> Program {
    // id = λx.x
    //
    // (id id)
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let id = interner.intern("id");
    let x_ref = arena.var(x);
    let rhs = arena.lambda(x, x_ref);
    let id_a = arena.var(id);
    let id_b = arena.var(id);
    let body = arena.apply(id_a, id_b);
    let binder = arena.lambda(id, body);
    let root = arena.apply(binder, rhs);
    Program::new(arena.freeze(), root, 1)
}

#[test]
fn test_program_restores_assignments() {
    let interner = StringInterner::new();
    let program = id_program(&interner);
    assert_eq!(
        program.display(&interner).to_string(),
        "id = λx.x\n\n(id id)"
    );
}

#[test]
fn test_program_root_display_is_desugared() {
    let interner = StringInterner::new();
    let program = id_program(&interner);
    assert_eq!(
        program.root_display(&interner).to_string(),
        "((λid.(id id)) λx.x)"
    );
}

#[test]
fn test_program_without_assignments() {
    let interner = StringInterner::new();
    let program = Program {
        assignments: 0,
        ..id_program(&interner)
    };
    assert_eq!(
        program.display(&interner).to_string(),
        "((λid.(id id)) λx.x)"
    );
}

#[test]
fn test_split_returns_bindings_in_source_order() {
    let interner = StringInterner::new();
    let program = id_program(&interner);
    let (bindings, _body) = program.split();
    assert_eq!(bindings.len(), 1);
    assert_eq!(interner.lookup(bindings[0].0), "id");
}
