use tern_core::stmt::{visit_mut, Expr, ExprColumn, Type, Value, VisitMut};

#[test]
fn for_each_visits_children_before_parents() {
    let mut expr = Expr::case(
        [(Expr::gt(Expr::column("x", Type::I64), 0i64), Expr::from("pos"))],
        Some(Expr::from("other")),
    );

    let mut seen = vec![];
    visit_mut::for_each_expr_mut(&mut expr, |expr| {
        seen.push(match expr {
            Expr::Case(_) => "case",
            Expr::BinaryOp(_) => "binary_op",
            Expr::Column(_) => "column",
            Expr::Value(_) => "value",
            _ => "other",
        });
    });

    assert_eq!(
        seen,
        ["column", "value", "binary_op", "value", "value", "case"]
    );
}

#[test]
fn rewrite_columns_inside_case() {
    struct Rename;

    impl VisitMut for Rename {
        fn visit_expr_column_mut(&mut self, i: &mut ExprColumn) {
            i.name = i.name.to_uppercase();
        }
    }

    let mut expr = Expr::case(
        [(Expr::is_null(Expr::column("a", Type::I64)), Expr::column("b", Type::I64))],
        Some(Expr::column("c", Type::I64)),
    );

    Rename.visit_expr_mut(&mut expr);

    let expr_case = expr.as_case().unwrap();
    let names: Vec<_> = expr_case
        .iter()
        .filter_map(|expr| match expr {
            Expr::Column(column) => Some(column.name.as_str()),
            Expr::IsNull(is_null) => match &*is_null.expr {
                Expr::Column(column) => Some(column.name.as_str()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn replace_values_in_place() {
    let mut expr = Expr::and(Expr::from(true), Expr::null());

    visit_mut::for_each_expr_mut(&mut expr, |expr| {
        if expr.is_value_null() {
            *expr = Value::Bool(false).into();
        }
    });

    assert_eq!(expr, Expr::and(true, false));
}
