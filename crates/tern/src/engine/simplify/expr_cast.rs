use super::Simplify;
use tern_core::stmt::{self, Expr};

impl Simplify<'_> {
    pub(super) fn simplify_expr_cast(&mut self, expr: &mut stmt::ExprCast) -> Option<Expr> {
        // Casting to an indeterminate type, or to the type the operand
        // already has, is a no-op.
        if expr.ty.is_indeterminate() || self.cx.infer_expr_ty(&expr.expr) == expr.ty {
            return Some(expr.expr.take());
        }

        None
    }
}
