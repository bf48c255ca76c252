mod expr_and;
mod expr_binary_op;
mod expr_case;
mod expr_cast;
mod expr_is_null;
mod expr_not;
mod expr_or;

use tern_core::stmt::{visit_mut, Expr, ExprContext, VisitMut};

/// Rewrites an expression tree in place: constant folding, dead CASE branch
/// elimination and CASE result type resolution.
///
/// Nodes are simplified bottom-up. CASE nodes drive their own traversal so
/// that branches after a provably-true condition are dropped without being
/// visited.
#[derive(Debug)]
pub struct Simplify<'a> {
    cx: ExprContext<'a>,
}

/// Simplifies `expr` once, in place.
pub fn simplify_expr(cx: ExprContext<'_>, expr: &mut Expr) {
    Simplify::new(cx).visit_expr_mut(expr);
}

impl<'a> Simplify<'a> {
    pub fn new(cx: ExprContext<'a>) -> Simplify<'a> {
        Simplify { cx }
    }

    /// Evaluates `expr` if it does not depend on anything supplied at
    /// evaluation time. Evaluation failures are left for run time.
    fn fold_const(&self, expr: &Expr) -> Option<Expr> {
        if expr.is_value() || !expr.is_const() {
            return None;
        }

        match expr.eval_const() {
            Ok(value) => Some(value.into()),
            Err(err) => {
                tracing::trace!(%err, "constant expression not folded");
                None
            }
        }
    }
}

impl VisitMut for Simplify<'_> {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        if i.is_case() {
            if let Expr::Case(expr_case) = i.take() {
                *i = self.simplify_expr_case(expr_case);
            }
            return;
        }

        // First, simplify the operands.
        visit_mut::visit_expr_mut(self, i);

        let maybe_expr = match i {
            Expr::And(expr_and) => self.simplify_expr_and(expr_and),
            Expr::BinaryOp(expr_binary_op) => self.simplify_expr_binary_op(expr_binary_op),
            Expr::Cast(expr_cast) => self.simplify_expr_cast(expr_cast),
            Expr::IsNull(expr_is_null) => self.simplify_expr_is_null(expr_is_null),
            Expr::Not(expr_not) => self.simplify_expr_not(expr_not),
            Expr::Or(expr_or) => self.simplify_expr_or(expr_or),
            _ => None,
        };

        if let Some(expr) = maybe_expr {
            *i = expr;
        }

        // Whatever is left with only constant operands is evaluated.
        if let Some(expr) = self.fold_const(i) {
            *i = expr;
        }
    }
}

#[cfg(test)]
fn simplified(expr: impl Into<Expr>) -> Expr {
    let mut expr = expr.into();
    simplify_expr(ExprContext::new_free(), &mut expr);
    expr
}
