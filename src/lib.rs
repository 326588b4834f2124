//! First-order terms, substitutions and Robinson unification.

pub use crate::{
    error::{NamingViolation, ParseError},
    parser::parse_expression,
    substitution::{compose, substitute, Substitution},
    term::{occurs_in, Constant, Expression, Term, Variable},
    traits::{ClassifyTerm, DirectChildren, TermKind},
    unify::{mismatch, unify, unify_many},
};

mod error;
mod parser;
mod substitution;
mod term;
mod traits;
mod unify;
