use super::{Expr, Type};

/// Converts the result of an expression to another type.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// The expression to convert.
    pub expr: Box<Expr>,

    /// The target type.
    pub ty: Type,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        ExprCast {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        }
        .into()
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
