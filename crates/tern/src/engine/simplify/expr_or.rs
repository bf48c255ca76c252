use super::Simplify;
use tern_core::stmt::{self, Expr};

impl Simplify<'_> {
    pub(super) fn simplify_expr_or(&mut self, expr: &mut stmt::ExprOr) -> Option<Expr> {
        // Flatten any nested ors
        if expr.operands.iter().any(|e| matches!(e, Expr::Or(_))) {
            let operands = std::mem::take(&mut expr.operands);

            for operand in operands {
                match operand {
                    Expr::Or(nested) => expr.operands.extend(nested.operands),
                    operand => expr.operands.push(operand),
                }
            }
        }

        // `or(..., true, ...) → true`
        if expr.operands.iter().any(|e| e.is_true()) {
            return Some(true.into());
        }

        // `or(..., false, ...) → or(..., ...)`
        expr.operands.retain(|expr| !expr.is_false());

        match expr.operands.len() {
            0 => Some(false.into()),
            1 => expr.operands.pop(),
            _ => None,
        }
    }
}
