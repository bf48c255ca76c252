use super::Simplify;
use tern_core::stmt::{self, Expr};

impl Simplify<'_> {
    pub(super) fn simplify_expr_not(&mut self, expr: &mut stmt::ExprNot) -> Option<Expr> {
        match &mut *expr.expr {
            // `not(not(x)) → x`, which also holds for null
            Expr::Not(inner) => Some(inner.expr.take()),
            _ => None,
        }
    }
}
