use std::cell::Cell;

use tern_core::stmt::{
    CaseBuilder, ConstInput, Expr, ExprArg, ExprColumn, Input, Row, Type, Value,
};

fn x() -> Expr {
    Expr::column("x", Type::I64)
}

#[test]
fn first_true_branch_wins() {
    let expr = Expr::case([(false, 1i64), (true, 2i64), (true, 3i64)], None);
    assert_eq!(expr.eval_const().unwrap(), 2i64);
}

#[test]
fn no_match_without_else_is_null() {
    let expr = Expr::case([(false, 1i64), (false, 2i64)], None);
    assert_eq!(expr.eval_const().unwrap(), Value::Null);
}

#[test]
fn no_match_falls_through_to_else() {
    let expr = Expr::case([(false, 1i64)], Some(Expr::from(9i64)));
    assert_eq!(expr.eval_const().unwrap(), 9i64);
}

#[test]
fn unknown_condition_does_not_match() {
    let expr = Expr::case([(Expr::null(), Expr::from(1i64))], None);
    assert_eq!(expr.eval_const().unwrap(), Value::Null);
}

#[test]
fn unknown_condition_falls_through_to_next_branch() {
    // `x > 0` is unknown when x is null
    let expr = Expr::case(
        [
            (Expr::gt(x(), 0i64), Expr::from("pos")),
            (Expr::is_null(x()), Expr::from("none")),
        ],
        Some(Expr::from("other")),
    );

    let row: Row = [("x", Value::Null)].into_iter().collect();
    assert_eq!(expr.eval(&row).unwrap(), "none");
}

#[test]
fn empty_case_with_else_returns_else() {
    let mut builder = CaseBuilder::new();
    builder.add_else("fallback");
    let expr: Expr = builder.finalize().into();

    assert_eq!(expr.eval_const().unwrap(), "fallback");
}

#[test]
fn empty_case_without_else_is_null() {
    let expr: Expr = CaseBuilder::new().finalize().into();
    assert_eq!(expr.eval_const().unwrap(), Value::Null);
}

#[test]
fn condition_over_row_bindings() {
    let expr = Expr::case(
        [(Expr::gt(x(), 0i64), Expr::from("pos"))],
        Some(Expr::from("other")),
    );

    let mut row = Row::new();
    row.bind("x", 5i64);
    assert_eq!(expr.eval(&row).unwrap(), "pos");

    row.bind("x", -5i64);
    assert_eq!(expr.eval(&row).unwrap(), "other");
}

#[test]
fn condition_over_args() {
    let expr = Expr::case(
        [(Expr::eq(Expr::arg(0usize), 1i64), Expr::from("one"))],
        Some(Expr::from("many")),
    );

    assert_eq!(expr.eval(&vec![Value::from(1i64)]).unwrap(), "one");
    assert_eq!(expr.eval([Value::from(2i64)]).unwrap(), "many");
}

#[test]
fn non_boolean_condition_is_an_error() {
    let expr = Expr::case([(Expr::from(1i64), Expr::from(1i64))], None);

    let err = expr.eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert_eq!(
        err.to_string(),
        "expression evaluation failed: expected boolean value"
    );
}

#[test]
fn unresolved_column_is_an_error() {
    let expr = Expr::case([(Expr::gt(x(), 0i64), Expr::from(1i64))], None);

    let err = expr.eval(ConstInput::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expression evaluation failed: failed to resolve column `x`"
    );
}

/// Input that counts the columns it is asked for.
struct Tracking<'a> {
    row: &'a Row,
    resolved: &'a Cell<usize>,
}

impl Input for Tracking<'_> {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        let mut row = self.row;
        row.resolve_arg(expr_arg)
    }

    fn resolve_column(&mut self, expr_column: &ExprColumn) -> Option<Value> {
        self.resolved.set(self.resolved.get() + 1);
        let mut row = self.row;
        row.resolve_column(expr_column)
    }
}

#[test]
fn later_branches_are_not_evaluated() {
    // The second branch and the ELSE would each resolve a column if they
    // were evaluated.
    let expr = Expr::case(
        [
            (Expr::from(true), Expr::from("first")),
            (Expr::gt(x(), 0i64), Expr::cast(x(), Type::String)),
        ],
        Some(Expr::cast(x(), Type::String)),
    );

    let row: Row = [("x", 1i64)].into_iter().collect();
    let resolved = Cell::new(0);
    let input = Tracking {
        row: &row,
        resolved: &resolved,
    };

    assert_eq!(expr.eval(input).unwrap(), "first");
    assert_eq!(resolved.get(), 0);
}

#[test]
fn else_not_evaluated_when_branch_matches() {
    // Evaluating the ELSE would fail on the unresolved column.
    let expr = Expr::case(
        [(Expr::from(true), Expr::from(1i64))],
        Some(Expr::column("missing", Type::I64)),
    );

    assert_eq!(expr.eval_const().unwrap(), 1i64);
}

#[test]
fn unsimplified_case_returns_raw_branch_value() {
    let expr = Expr::case([(false, Expr::from(1i64))], Some(Expr::from("a")));
    assert_eq!(expr.eval_const().unwrap(), "a");
}

#[test]
fn resolved_type_converts_result() {
    let mut builder = CaseBuilder::new();
    builder.add_when(Expr::arg(0usize), 1i32).add_else(2i64);
    let expr = builder.finalize_with_ty(Type::I64);

    assert_eq!(expr.eval([Value::from(true)]).unwrap(), Value::I64(1));
    assert_eq!(expr.eval([Value::from(false)]).unwrap(), Value::I64(2));
}

#[test]
fn conversion_failure_propagates() {
    let mut builder = CaseBuilder::new();
    builder.add_when(Expr::arg(0usize), "abc").add_else(2i64);
    let expr = builder.finalize_with_ty(Type::I64);

    let err = expr.eval([Value::from(true)]).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "cannot convert String to I64: invalid digit found in string"
    );
}

#[test]
fn null_result_is_not_converted() {
    let mut builder = CaseBuilder::new();
    builder.add_when(true, Expr::null()).add_else(2i64);
    let expr = builder.finalize_with_ty(Type::I64);

    assert_eq!(expr.eval(ConstInput::new()).unwrap(), Value::Null);
}

#[test]
fn nested_case_in_condition() {
    let inner = Expr::case([(Expr::gt(x(), 10i64), true)], Some(Expr::from(false)));
    let expr = Expr::case([(inner, "big")], Some(Expr::from("small")));

    let row: Row = [("x", 11i64)].into_iter().collect();
    assert_eq!(expr.eval(&row).unwrap(), "big");

    let row: Row = [("x", 1i64)].into_iter().collect();
    assert_eq!(expr.eval(&row).unwrap(), "small");
}

#[test]
fn evaluation_does_not_mutate_node() {
    let expr = Expr::case([(Expr::gt(x(), 0i64), Expr::from(1i64))], None);
    let before = expr.clone();

    let row: Row = [("x", 3i64)].into_iter().collect();
    for _ in 0..3 {
        assert_eq!(expr.eval(&row).unwrap(), 1i64);
    }

    assert_eq!(expr, before);
}

#[test]
fn concurrent_evaluation_with_separate_inputs() {
    let expr = Expr::case(
        [(Expr::gt(x(), 0i64), Expr::from("pos"))],
        Some(Expr::from("other")),
    );

    std::thread::scope(|s| {
        let handles: Vec<_> = (-2i64..=2)
            .map(|n| {
                let expr = &expr;
                s.spawn(move || {
                    let row: Row = [("x", n)].into_iter().collect();
                    (n, expr.eval(&row).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (n, value) = handle.join().unwrap();
            let expected = if n > 0 { "pos" } else { "other" };
            assert_eq!(value, expected);
        }
    });
}
