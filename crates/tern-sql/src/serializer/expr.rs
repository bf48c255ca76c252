use super::{Delimited, Formatter, Ident, Params, ToSql};

use tern_core::stmt;

/// An operand of a boolean connective or comparison. Compound operands are
/// wrapped in parentheses so the rendered text keeps the tree's grouping.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(expr.iter().map(Operand), " AND "));
            }
            Arg(expr) => {
                fmt!(f, expr);
            }
            BinaryOp(expr) => {
                fmt!(f, Operand(&expr.lhs) " " expr.op " " Operand(&expr.rhs));
            }
            Case(expr) => {
                fmt!(f, expr);
            }
            Cast(expr) if expr.ty.is_indeterminate() => {
                // Casting to an indeterminate type leaves the value alone
                let inner = &*expr.expr;
                fmt!(f, inner);
            }
            Cast(expr) => {
                let inner = &*expr.expr;
                fmt!(f, "CAST(" inner " AS " expr.ty ")");
            }
            Column(expr) => {
                fmt!(f, Ident(&expr.name));
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, Operand(&expr.expr) " IS NOT NULL");
                } else {
                    fmt!(f, Operand(&expr.expr) " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT " Operand(&expr.expr));
            }
            Or(expr) => {
                fmt!(f, Delimited(expr.iter().map(Operand), " OR "));
            }
            Value(expr) => {
                fmt!(f, expr);
            }
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Expr::*;

        match self.0 {
            And(_) | Or(_) | Not(_) | BinaryOp(_) | IsNull(_) => {
                fmt!(f, '(' self.0 ')');
            }
            expr => fmt!(f, expr),
        }
    }
}

impl ToSql for &stmt::ExprArg {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, super::Placeholder(self.position + 1));
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}
