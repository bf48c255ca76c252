use super::*;

use std::fmt;

#[derive(Clone, PartialEq)]
pub enum Expr {
    /// AND a set of boolean expressions
    And(ExprAnd),

    /// A positional parameter supplied at evaluation time
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Searched CASE expression
    Case(ExprCase),

    /// Cast an expression to a different type
    Cast(ExprCast),

    /// References a column of the current row
    Column(ExprColumn),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is the `true` boolean expression
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    /// Returns `true` if the expression is the `false` boolean expression
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_case(&self) -> bool {
        matches!(self, Self::Case(..))
    }

    /// Returns `true` if the expression is a compile-time constant, i.e. it
    /// does not depend on anything supplied at evaluation time.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Value(_) => true,
            Self::Arg(_) | Self::Column(_) => false,
            Self::And(expr) => expr.operands.iter().all(Self::is_const),
            Self::Or(expr) => expr.operands.iter().all(Self::is_const),
            Self::BinaryOp(expr) => expr.lhs.is_const() && expr.rhs.is_const(),
            Self::Cast(expr) => expr.expr.is_const(),
            Self::IsNull(expr) => expr.expr.is_const(),
            Self::Not(expr) => expr.expr.is_const(),
            Self::Case(expr) => expr.iter().all(Self::is_const),
        }
    }

    #[track_caller]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            _ => panic!("expected `Value`, found {self:#?}"),
        }
    }

    #[track_caller]
    pub fn unwrap_case(self) -> ExprCase {
        match self {
            Self::Case(expr) => expr,
            _ => panic!("expected `Case`, found {self:#?}"),
        }
    }

    pub fn as_case(&self) -> Option<&ExprCase> {
        match self {
            Self::Case(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

impl Node for Expr {
    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_mut(self);
    }
}

// === Conversions ===

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&i64> for Expr {
    fn from(value: &i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<&String> for Expr {
    fn from(value: &String) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(e) => e.fmt(f),
            Self::Arg(e) => e.fmt(f),
            Self::BinaryOp(e) => e.fmt(f),
            Self::Case(e) => e.fmt(f),
            Self::Cast(e) => e.fmt(f),
            Self::Column(e) => e.fmt(f),
            Self::IsNull(e) => e.fmt(f),
            Self::Not(e) => e.fmt(f),
            Self::Or(e) => e.fmt(f),
            Self::Value(e) => e.fmt(f),
        }
    }
}
