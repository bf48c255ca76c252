use super::{Formatter, Params, ToSql};

use tern_core::stmt;

impl ToSql for &stmt::ExprCase {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "CASE");

        for when in self.whens() {
            let (condition, result) = (&when.condition, &when.result);
            fmt!(f, " WHEN " condition " THEN " result);
        }

        if let Some(else_expr) = self.else_expr() {
            fmt!(f, " ELSE " else_expr);
        }

        fmt!(f, " END");
    }
}
