use super::Simplify;
use tern_core::stmt::{self, Expr};

use std::mem;

impl Simplify<'_> {
    pub(super) fn simplify_expr_binary_op(
        &mut self,
        expr: &mut stmt::ExprBinaryOp,
    ) -> Option<Expr> {
        // Comparing with null is never true, `x = null` → `null`
        if expr.lhs.is_value_null() || expr.rhs.is_value_null() {
            return Some(Expr::null());
        }

        // Canonicalize constants on the right-hand side, `5 < x` → `x > 5`
        if expr.lhs.is_value() && !expr.rhs.is_value() {
            mem::swap(&mut expr.lhs, &mut expr.rhs);
            expr.op = expr.op.commute();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::simplified;
    use tern_core::stmt::{BinaryOp, Expr, Type};

    fn x() -> Expr {
        Expr::column("x", Type::I64)
    }

    #[test]
    fn null_operand_is_null() {
        assert_eq!(simplified(Expr::eq(x(), Expr::null())), Expr::null());
        assert_eq!(simplified(Expr::lt(Expr::null(), x())), Expr::null());
    }

    #[test]
    fn constant_moves_to_the_right() {
        assert_eq!(simplified(Expr::lt(5i64, x())), Expr::gt(x(), 5i64));
        assert_eq!(simplified(Expr::ge(5i64, x())), Expr::le(x(), 5i64));
        assert_eq!(simplified(Expr::ne(5i64, x())), Expr::ne(x(), 5i64));
    }

    #[test]
    fn every_operator_commutes_back() {
        for op in [
            BinaryOp::Eq,
            BinaryOp::Ne,
            BinaryOp::Ge,
            BinaryOp::Gt,
            BinaryOp::Le,
            BinaryOp::Lt,
        ] {
            assert_eq!(op.commute().commute(), op);
        }
    }

    #[test]
    fn constant_comparison_folds() {
        assert_eq!(simplified(Expr::gt(2i64, 1i32)), Expr::from(true));
        assert_eq!(simplified(Expr::eq("a", "b")), Expr::from(false));
    }
}
