use super::Simplify;
use tern_core::stmt::{self, Expr, Type};

impl Simplify<'_> {
    pub(super) fn simplify_expr_is_null(&mut self, expr: &mut stmt::ExprIsNull) -> Option<Expr> {
        match &mut *expr.expr {
            // A cast that cannot fail preserves nullness,
            // `is_null(cast(x)) → is_null(x)`. A failing cast must still
            // fail at evaluation time.
            Expr::Cast(expr_cast) if self.cast_is_infallible(expr_cast) => {
                *expr.expr = expr_cast.expr.take();
                None
            }
            // Null constant folding,
            //
            //  - `null is null` → `true`
            //  - `<non-null const> is null` → `false`
            Expr::Value(value) => Some((value.is_null() != expr.negate).into()),
            _ => None,
        }
    }

    fn cast_is_infallible(&self, expr_cast: &stmt::ExprCast) -> bool {
        if expr_cast.ty.is_indeterminate() {
            return true;
        }

        let ty = self.cx.infer_expr_ty(&expr_cast.expr);
        ty == expr_cast.ty || ty == Type::Null
    }
}
