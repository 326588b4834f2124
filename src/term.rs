use std::{fmt, iter, str::FromStr};

use crate::{
    error::{NamingViolation, ParseError},
    parser::parse_expression,
    traits::{ClassifyTerm, DirectChildren, TermKind},
};

/// A logic variable. The name always starts with a lower-case letter and is
/// the variable's whole identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Result<Self, NamingViolation> {
        let name = name.into();
        match name.chars().next() {
            None => Err(NamingViolation::Empty),
            Some(c) if c.is_lowercase() => Ok(Self(name)),
            Some(_) => Err(NamingViolation::Variable(name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// True iff `self` appears anywhere in `term`, including `term` itself.
    pub fn occurs_in(&self, term: &Term) -> bool {
        term.contains_var(self)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A constant symbol, named with an upper-case initial.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constant(String);

impl Constant {
    pub fn new(name: impl Into<String>) -> Result<Self, NamingViolation> {
        let name = name.into();
        match name.chars().next() {
            None => Err(NamingViolation::Empty),
            Some(c) if c.is_uppercase() => Ok(Self(name)),
            Some(_) => Err(NamingViolation::Constant(name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A compound term: an operator applied to an ordered, possibly empty,
/// argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Expression {
    operator: String,
    arguments: Vec<Term>,
}

impl Expression {
    pub fn new(operator: impl Into<String>, arguments: Vec<Term>) -> Self {
        Self {
            operator: operator.into(),
            arguments,
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn arguments(&self) -> &[Term] {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({arguments})", self.operator)
    }
}

/// A first-order term.
///
/// Equality is structural: leaves compare by name, expressions by operator and
/// then argument by argument. Terms are never mutated; substitution builds new
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Expression(Expression),
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Result<Self, NamingViolation> {
        Variable::new(name).map(Term::Variable)
    }

    pub fn constant(name: impl Into<String>) -> Result<Self, NamingViolation> {
        Constant::new(name).map(Term::Constant)
    }

    pub fn expression(operator: impl Into<String>, arguments: Vec<Term>) -> Self {
        Term::Expression(Expression::new(operator, arguments))
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Term::Expression(_))
    }

    /// A term is ground when no variable occurs in it.
    pub fn is_ground(&self) -> bool {
        self.variables().next().is_none()
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Variable(v)
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Term::Constant(c)
    }
}

impl From<Expression> for Term {
    fn from(e: Expression) -> Self {
        Term::Expression(e)
    }
}

impl FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{v}"),
            Term::Constant(c) => write!(f, "{c}"),
            Term::Expression(e) => write!(f, "{e}"),
        }
    }
}

impl ClassifyTerm<Variable> for Term {
    fn classify_term(&self) -> TermKind<&Variable> {
        match self {
            Term::Variable(v) => TermKind::Var(v),
            Term::Constant(_) | Term::Expression(_) => TermKind::NonVar,
        }
    }

    fn same_functor(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Expression(a), Term::Expression(b)) => {
                a.operator == b.operator && a.arity() == b.arity()
            }
            (Term::Expression(_), _) | (_, Term::Expression(_)) => false,
            (a, b) => a == b,
        }
    }
}

impl DirectChildren<Variable> for Term {
    fn direct_children<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self> + 'a> {
        match self {
            Term::Expression(e) => Box::new(e.arguments.iter()),
            Term::Variable(_) | Term::Constant(_) => Box::new(iter::empty()),
        }
    }

    fn map_direct_children(&self, f: impl FnMut(&Self) -> Self) -> Self {
        match self {
            Term::Expression(e) => Term::Expression(Expression {
                operator: e.operator.clone(),
                arguments: e.arguments.iter().map(f).collect(),
            }),
            Term::Variable(_) | Term::Constant(_) => self.clone(),
        }
    }
}

/// Free-function form of [`Variable::occurs_in`].
pub fn occurs_in(variable: &Variable, term: &Term) -> bool {
    variable.occurs_in(term)
}
