//! Church encodings of host data.
//!
//! Builtins hand data back to programs as closures. Each constructor builds
//! its own small arena, so encoded values never depend on the program's.

use lam_ir::{ExprArena, ExprId, Name, StringInterner};

use crate::{Closure, Environment, Value};

/// `λf.λx.(f (f … x))` with `n` applications of `f`.
pub fn church_numeral(interner: &StringInterner, n: u32) -> Value {
    let f = interner.intern("f");
    let x = interner.intern("x");

    let mut arena = ExprArena::new();
    let mut body = arena.var(x);
    for _ in 0..n {
        let func = arena.var(f);
        body = arena.apply(func, body);
    }
    let inner = arena.lambda(x, body);
    closed(Environment::empty(), f, inner, arena)
}

/// `λt.λf.t` for `true`, `λt.λf.f` for `false`.
pub fn church_bool(interner: &StringInterner, value: bool) -> Value {
    let t = interner.intern("t");
    let f = interner.intern("f");

    let mut arena = ExprArena::new();
    let chosen = arena.var(if value { t } else { f });
    let inner = arena.lambda(f, chosen);
    closed(Environment::empty(), t, inner, arena)
}

/// `λp.((p first) second)` closed over the two components.
pub fn church_pair(interner: &StringInterner, first: Value, second: Value) -> Value {
    let p = interner.intern("p");
    let first_name = interner.intern("first");
    let second_name = interner.intern("second");

    let mut arena = ExprArena::new();
    let select = arena.var(p);
    let first_var = arena.var(first_name);
    let second_var = arena.var(second_name);
    let partial = arena.apply(select, first_var);
    let body = arena.apply(partial, second_var);

    let env = Environment::empty()
        .extend(first_name, first)
        .extend(second_name, second);
    closed(env, p, body, arena)
}

fn closed(env: Environment, param: Name, body: ExprId, arena: ExprArena) -> Value {
    Value::Closure(Closure::new(env, param, body, arena.freeze()))
}
