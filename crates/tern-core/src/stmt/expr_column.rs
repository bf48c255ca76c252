use super::{Expr, Type};

/// A reference to a column of the row being evaluated.
///
/// The column carries the type it was declared with so that expressions over
/// it can be typed without access to a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Column name, as bound in the evaluation input.
    pub name: String,

    /// Declared column type.
    pub ty: Type,
}

impl Expr {
    pub fn column(name: impl Into<String>, ty: Type) -> Self {
        ExprColumn {
            name: name.into(),
            ty,
        }
        .into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
