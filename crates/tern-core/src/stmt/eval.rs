use crate::{
    stmt::{BinaryOp, ConstInput, Expr, ExprCase, Input, Value},
    Result,
};
use std::cmp::Ordering;

impl Expr {
    pub fn eval(&self, mut input: impl Input) -> Result<Value> {
        self.eval_ref(&mut input)
    }

    /// Evaluates a predicate. `NULL` counts as `false`, as in a `WHERE`
    /// clause or a CASE condition.
    pub fn eval_bool(&self, mut input: impl Input) -> Result<bool> {
        Ok(self.eval_ref_bool(&mut input)?.unwrap_or(false))
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(ConstInput::new())
    }

    pub(crate) fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                debug_assert!(!expr_and.operands.is_empty());
                let mut saw_null = false;

                for operand in &expr_and.operands {
                    match operand.eval_ref_bool(input)? {
                        Some(false) => return Ok(false.into()),
                        Some(true) => {}
                        None => saw_null = true,
                    }
                }

                Ok(if saw_null { Value::Null } else { true.into() })
            }
            Expr::Arg(expr_arg) => input.resolve_arg(expr_arg).ok_or_else(|| {
                crate::Error::expression_evaluation_failed(format!(
                    "failed to resolve argument {}",
                    expr_arg.position
                ))
            }),
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval_ref(input)?;
                let rhs = expr_binary_op.rhs.eval_ref(input)?;

                if lhs.is_null() || rhs.is_null() {
                    return Ok(Value::Null);
                }

                let ordering = cmp_ordered(&lhs, &rhs)?;

                Ok(match expr_binary_op.op {
                    BinaryOp::Eq => ordering == Ordering::Equal,
                    BinaryOp::Ne => ordering != Ordering::Equal,
                    BinaryOp::Ge => ordering != Ordering::Less,
                    BinaryOp::Gt => ordering == Ordering::Greater,
                    BinaryOp::Le => ordering != Ordering::Greater,
                    BinaryOp::Lt => ordering == Ordering::Less,
                }
                .into())
            }
            Expr::Case(expr_case) => expr_case.eval_ref(input),
            Expr::Cast(expr_cast) => expr_cast.ty.cast(expr_cast.expr.eval_ref(input)?),
            Expr::Column(expr_column) => input.resolve_column(expr_column).ok_or_else(|| {
                crate::Error::expression_evaluation_failed(format!(
                    "failed to resolve column `{}`",
                    expr_column.name
                ))
            }),
            Expr::IsNull(expr_is_null) => {
                let value = expr_is_null.expr.eval_ref(input)?;
                Ok((value.is_null() != expr_is_null.negate).into())
            }
            Expr::Not(expr_not) => {
                let value = expr_not.expr.eval_ref_bool(input)?;
                Ok(value.map(|value| !value).into())
            }
            Expr::Or(expr_or) => {
                debug_assert!(!expr_or.operands.is_empty());
                let mut saw_null = false;

                for operand in &expr_or.operands {
                    match operand.eval_ref_bool(input)? {
                        Some(true) => return Ok(true.into()),
                        Some(false) => {}
                        None => saw_null = true,
                    }
                }

                Ok(if saw_null { Value::Null } else { false.into() })
            }
            Expr::Value(value) => Ok(value.clone()),
        }
    }

    /// Three-valued boolean evaluation: `None` is SQL's "unknown".
    fn eval_ref_bool(&self, input: &mut impl Input) -> Result<Option<bool>> {
        self.eval_ref(input)?.to_option_bool()
    }
}

impl ExprCase {
    pub fn eval(&self, mut input: impl Input) -> Result<Value> {
        self.eval_ref(&mut input)
    }

    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        for when in &self.whens {
            // Only a definite `true` selects the branch; unknown falls through.
            if when.condition.eval_ref_bool(input)? == Some(true) {
                let value = when.result.eval_ref(input)?;
                return self.convert(value);
            }
        }

        match &self.else_expr {
            Some(else_expr) => {
                let value = else_expr.eval_ref(input)?;
                self.convert(value)
            }
            None => Ok(Value::Null),
        }
    }

    fn convert(&self, value: Value) -> Result<Value> {
        match &self.ty {
            Some(ty) => ty.cast(value),
            None => Ok(value),
        }
    }
}

fn cmp_ordered(lhs: &Value, rhs: &Value) -> Result<Ordering> {
    lhs.partial_cmp(rhs).ok_or_else(|| {
        crate::Error::expression_evaluation_failed(format!(
            "cannot compare {:?} with {:?}",
            lhs.infer_ty(),
            rhs.infer_ty()
        ))
    })
}
