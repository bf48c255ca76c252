use super::Simplify;
use tern_core::stmt::{self, CaseBuilder, CaseWhen, Expr, Type, VisitMut};

impl Simplify<'_> {
    /// Folds a CASE expression in a single forward pass.
    ///
    /// While every condition seen so far is constant, the first one that is
    /// true replaces the whole node with its result; branches after it,
    /// including `ELSE`, are dropped without being visited. If all
    /// conditions are constant and none is true, the node becomes its `ELSE`
    /// result, or `NULL`. Otherwise the branches are rebuilt into a new node
    /// carrying the unified result type.
    pub(super) fn simplify_expr_case(&mut self, expr: stmt::ExprCase) -> Expr {
        let (whens, else_expr) = expr.into_parts();

        let mut builder = CaseBuilder::new();
        let mut all_const = true;
        let mut ty = Type::Unknown;

        for (index, when) in whens.into_iter().enumerate() {
            let CaseWhen {
                mut condition,
                mut result,
            } = when;

            self.visit_expr_mut(&mut condition);
            self.visit_expr_mut(&mut result);

            if all_const {
                match self.const_condition(&condition) {
                    Some(true) => {
                        tracing::debug!(branch = index, "CASE folded to branch result");
                        return result;
                    }
                    Some(false) => {
                        tracing::trace!(branch = index, "CASE branch never matches");
                    }
                    None => all_const = false,
                }
            }

            ty = ty.unify(self.cx.infer_expr_ty(&result));
            builder.add_when(condition, result);
        }

        match else_expr {
            Some(mut else_expr) => {
                self.visit_expr_mut(&mut else_expr);

                if all_const {
                    tracing::debug!("CASE folded to ELSE result");
                    return else_expr;
                }

                ty = ty.unify(self.cx.infer_expr_ty(&else_expr));
                builder.add_else(else_expr);
            }
            None if all_const => {
                tracing::debug!("CASE folded to NULL");
                return Expr::null();
            }
            None => {}
        }

        // No branch yields a concrete type.
        if ty.is_indeterminate() {
            ty = Type::String;
        }

        tracing::trace!(?ty, branches = builder.len() / 2, "CASE result type resolved");
        builder.finalize_with_ty(ty).into()
    }

    /// The value of a condition that is known before evaluation time.
    ///
    /// `NULL` never selects a branch, so it counts as `false`. A constant
    /// condition that fails to evaluate is treated as non-constant, leaving
    /// the error to surface when the expression is evaluated.
    fn const_condition(&self, condition: &Expr) -> Option<bool> {
        if !condition.is_const() {
            return None;
        }

        match condition.eval_const().and_then(|value| value.to_option_bool()) {
            Ok(value) => Some(value.unwrap_or(false)),
            Err(err) => {
                tracing::trace!(%err, "constant CASE condition not folded");
                None
            }
        }
    }
}
