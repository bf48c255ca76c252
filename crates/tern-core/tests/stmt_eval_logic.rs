use tern_core::stmt::{Expr, Row, Type, Value};

fn flag(name: &str) -> Expr {
    Expr::column(name, Type::Bool)
}

fn row(a: impl Into<Value>, b: impl Into<Value>) -> Row {
    let mut row = Row::new();
    row.bind("a", a).bind("b", b);
    row
}

#[test]
fn and_three_valued_truth_table() {
    let expr = Expr::and(flag("a"), flag("b"));

    let cases = [
        (Value::from(true), Value::from(true), Value::from(true)),
        (Value::from(true), Value::from(false), Value::from(false)),
        (Value::from(true), Value::Null, Value::Null),
        (Value::from(false), Value::Null, Value::from(false)),
        (Value::Null, Value::from(false), Value::from(false)),
        (Value::Null, Value::Null, Value::Null),
    ];

    for (a, b, expected) in cases {
        let actual = expr.eval(&row(a.clone(), b.clone())).unwrap();
        assert_eq!(actual, expected, "{a:?} AND {b:?}");
    }
}

#[test]
fn or_three_valued_truth_table() {
    let expr = Expr::or(flag("a"), flag("b"));

    let cases = [
        (Value::from(false), Value::from(false), Value::from(false)),
        (Value::from(true), Value::from(false), Value::from(true)),
        (Value::from(false), Value::Null, Value::Null),
        (Value::from(true), Value::Null, Value::from(true)),
        (Value::Null, Value::from(true), Value::from(true)),
        (Value::Null, Value::Null, Value::Null),
    ];

    for (a, b, expected) in cases {
        let actual = expr.eval(&row(a.clone(), b.clone())).unwrap();
        assert_eq!(actual, expected, "{a:?} OR {b:?}");
    }
}

#[test]
fn not_of_null_is_null() {
    let expr = Expr::not(flag("a"));

    assert_eq!(expr.eval(&row(true, Value::Null)).unwrap(), false);
    assert_eq!(expr.eval(&row(Value::Null, Value::Null)).unwrap(), Value::Null);
}

#[test]
fn and_short_circuits_on_false() {
    // The second operand is never resolved.
    let expr = Expr::and(false, Expr::column("missing", Type::Bool));
    assert_eq!(expr.eval_const().unwrap(), false);
}

#[test]
fn and_flattens_nested_operands() {
    let expr = Expr::and(Expr::and(flag("a"), flag("b")), flag("c"));

    match &expr {
        Expr::And(expr_and) => assert_eq!(expr_and.len(), 3),
        _ => panic!("expected AND, got {expr:?}"),
    }
}

#[test]
fn comparisons_with_null_are_null() {
    let x = Expr::column("x", Type::I64);
    let row: Row = [("x", Value::Null)].into_iter().collect();

    for expr in [
        Expr::eq(x.clone(), 1i64),
        Expr::ne(x.clone(), 1i64),
        Expr::gt(x.clone(), 1i64),
        Expr::le(x.clone(), 1i64),
    ] {
        assert_eq!(expr.eval(&row).unwrap(), Value::Null, "{expr:?}");
    }
}

#[test]
fn comparisons_across_numeric_types() {
    assert_eq!(Expr::eq(1i32, 1i64).eval_const().unwrap(), true);
    assert_eq!(Expr::lt(1i64, 1.5f64).eval_const().unwrap(), true);
    assert_eq!(Expr::ge(2i32, 2.0f64).eval_const().unwrap(), true);
    assert_eq!(Expr::ne("a", "b").eval_const().unwrap(), true);
}

#[test]
fn comparing_mismatched_kinds_is_an_error() {
    let err = Expr::eq("1", 1i64).eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert_eq!(
        err.to_string(),
        "expression evaluation failed: cannot compare String with I64"
    );
}

#[test]
fn is_null_and_is_not_null() {
    let x = Expr::column("x", Type::I64);
    let null_row: Row = [("x", Value::Null)].into_iter().collect();
    let some_row: Row = [("x", 3i64)].into_iter().collect();

    assert_eq!(Expr::is_null(x.clone()).eval(&null_row).unwrap(), true);
    assert_eq!(Expr::is_null(x.clone()).eval(&some_row).unwrap(), false);
    assert_eq!(Expr::is_not_null(x.clone()).eval(&null_row).unwrap(), false);
    assert_eq!(Expr::is_not_null(x).eval(&some_row).unwrap(), true);
}

#[test]
fn eval_bool_treats_null_as_false() {
    assert!(!Expr::null().eval_bool(Row::new()).unwrap());
    assert!(Expr::from(true).eval_bool(Row::new()).unwrap());
}

#[test]
fn cast_expression_converts_value() {
    let expr = Expr::cast(Expr::arg(0usize), Type::I64);

    assert_eq!(expr.eval([Value::from("42")]).unwrap(), Value::I64(42));
    assert!(expr.eval([Value::from("nope")]).unwrap_err().is_type_conversion());
}

#[test]
fn missing_argument_is_an_error() {
    let err = Expr::arg(1usize).eval(&Row::from_args(vec![Value::from(1i64)])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expression evaluation failed: failed to resolve argument 1"
    );
}
