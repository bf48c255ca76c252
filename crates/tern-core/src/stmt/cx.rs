use super::{Expr, ExprArg, Type};

/// Static typing context for an expression.
///
/// Holds the types of the positional arguments the expression will be
/// evaluated with. Column types travel with the columns themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExprContext<'a> {
    args: &'a [Type],
}

impl<'a> ExprContext<'a> {
    pub fn new(args: &'a [Type]) -> ExprContext<'a> {
        ExprContext { args }
    }

    /// A context for expressions that take no arguments.
    pub fn new_free() -> ExprContext<'static> {
        ExprContext { args: &[] }
    }

    pub fn args(&self) -> &'a [Type] {
        self.args
    }

    /// The declared type of an argument, `Unknown` if none was declared.
    pub fn arg_ty(&self, expr_arg: &ExprArg) -> Type {
        self.args
            .get(expr_arg.position)
            .copied()
            .unwrap_or(Type::Unknown)
    }

    pub fn infer_expr_ty(&self, expr: &Expr) -> Type {
        expr.infer_ty(self.args)
    }
}
