use crate::stmt::{Expr, ExprCase, Type, Value};

impl Expr {
    /// Infers the type the expression evaluates to, given the types of the
    /// positional arguments.
    pub fn infer_ty(&self, args: &[Type]) -> Type {
        match self {
            Expr::And(_) | Expr::Or(_) | Expr::Not(_) | Expr::IsNull(_) | Expr::BinaryOp(_) => {
                Type::Bool
            }
            Expr::Arg(expr_arg) => args
                .get(expr_arg.position)
                .copied()
                .unwrap_or(Type::Unknown),
            Expr::Case(expr_case) => expr_case.infer_ty(args),
            Expr::Cast(expr_cast) => expr_cast.ty,
            Expr::Column(expr_column) => expr_column.ty,
            Expr::Value(value) => value.infer_ty(),
        }
    }
}

impl ExprCase {
    /// Returns the resolved result type if the node has been simplified,
    /// otherwise unifies the branch result types.
    pub fn infer_ty(&self, args: &[Type]) -> Type {
        if let Some(ty) = self.ty {
            return ty;
        }

        let ty = self
            .whens
            .iter()
            .map(|when| &when.result)
            .chain(self.else_expr.as_deref())
            .fold(Type::Unknown, |acc, expr| acc.unify(expr.infer_ty(args)));

        if ty.is_indeterminate() {
            Type::String
        } else {
            ty
        }
    }
}

impl Value {
    pub fn infer_ty(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::F64(_) => Type::F64,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::Null => Type::Null,
            Value::String(_) => Type::String,
        }
    }
}
