use super::Simplify;
use tern_core::stmt::{self, Expr};

impl Simplify<'_> {
    pub(super) fn simplify_expr_and(&mut self, expr: &mut stmt::ExprAnd) -> Option<Expr> {
        // Flatten any nested ands
        if expr.operands.iter().any(|e| matches!(e, Expr::And(_))) {
            let operands = std::mem::take(&mut expr.operands);

            for operand in operands {
                match operand {
                    Expr::And(nested) => expr.operands.extend(nested.operands),
                    operand => expr.operands.push(operand),
                }
            }
        }

        // `and(..., false, ...) → false`
        if expr.operands.iter().any(|e| e.is_false()) {
            return Some(false.into());
        }

        // `and(..., true, ...) → and(..., ...)`
        expr.operands.retain(|expr| !expr.is_true());

        match expr.operands.len() {
            0 => Some(true.into()),
            1 => expr.operands.pop(),
            _ => None,
        }
    }
}
