//! Lam IR - expression model for the lambda interpreter.
//!
//! This crate contains the data the parser produces and the evaluator reads:
//! - `Name` handles for interned identifiers
//! - `ExprKind` nodes stored flat in an `ExprArena`, addressed by `ExprId`
//! - `Program`, the desugared root plus the assignment shape for printing
//! - Pretty-printing back to surface syntax
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Immutable After Parse**: arenas are frozen into a `SharedArena` and
//!   shared by every closure whose body lives in them

mod arena;
mod display;
mod expr;
mod interner;
mod name;
mod program;

pub use arena::{ExprArena, SharedArena};
pub use display::{ExprDisplay, ProgramDisplay};
pub use expr::{ExprId, ExprKind};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use program::Program;
