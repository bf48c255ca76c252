use pretty_assertions::assert_eq;
use tern_core::stmt::{CaseBuilder, Expr, Type, Value};
use tern_sql::Serializer;

fn x() -> Expr {
    Expr::column("x", Type::I64)
}

fn sign() -> Expr {
    Expr::case(
        [(Expr::gt(x(), 0i64), Expr::from("pos"))],
        Some(Expr::from("other")),
    )
}

fn canonical(expr: &Expr) -> String {
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::canonical().serialize_expr(expr, &mut params);
    assert!(params.is_empty(), "canonical form bound {params:?}");
    sql
}

#[test]
fn canonical_with_else() {
    assert_eq!(
        canonical(&sign()),
        "CASE WHEN x > 0 THEN 'pos' ELSE 'other' END"
    );
}

#[test]
fn canonical_without_else() {
    let expr = Expr::case([(Expr::is_null(x()), Expr::from(0i64))], None);
    assert_eq!(canonical(&expr), "CASE WHEN x IS NULL THEN 0 END");
}

#[test]
fn branches_render_in_stored_order() {
    let mut builder = CaseBuilder::new();
    builder
        .add_when(Expr::lt(x(), 0i64), "neg")
        .add_when(Expr::eq(x(), 0i64), "zero")
        .add_when(Expr::gt(x(), 0i64), "pos");
    let expr: Expr = builder.finalize().into();

    assert_eq!(
        canonical(&expr),
        "CASE WHEN x < 0 THEN 'neg' WHEN x = 0 THEN 'zero' WHEN x > 0 THEN 'pos' END"
    );
}

#[test]
fn empty_case() {
    let mut builder = CaseBuilder::new();
    builder.add_else("only");
    let expr: Expr = builder.finalize().into();
    assert_eq!(canonical(&expr), "CASE ELSE 'only' END");

    let expr: Expr = CaseBuilder::new().finalize().into();
    assert_eq!(canonical(&expr), "CASE END");
}

#[test]
fn nested_case_renders_in_place() {
    let expr = Expr::case(
        [(Expr::is_null(x()), Expr::from("none"))],
        Some(sign()),
    );

    assert_eq!(
        canonical(&expr),
        "CASE WHEN x IS NULL THEN 'none' ELSE CASE WHEN x > 0 THEN 'pos' ELSE 'other' END END"
    );
}

#[test]
fn rendering_is_deterministic() {
    let expr = sign();
    assert_eq!(canonical(&expr), canonical(&expr));
    assert_eq!(canonical(&expr), canonical(&expr.clone()));
}

#[test]
fn postgresql_binds_literals() {
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::postgresql().serialize_expr(&sign(), &mut params);

    assert_eq!(sql, r#"CASE WHEN "x" > $1 THEN $2 ELSE $3 END"#);
    assert_eq!(
        params,
        vec![Value::from(0i64), Value::from("pos"), Value::from("other")]
    );
}

#[test]
fn sqlite_binds_literals() {
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::sqlite().serialize_expr(&sign(), &mut params);

    assert_eq!(sql, r#"CASE WHEN "x" > ?1 THEN ?2 ELSE ?3 END"#);
    assert_eq!(params.len(), 3);
}

#[test]
fn mysql_binds_literals() {
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::mysql().serialize_expr(&sign(), &mut params);

    assert_eq!(sql, "CASE WHEN `x` > ? THEN ? ELSE ? END");
    assert_eq!(params.len(), 3);
}

#[test]
fn literals_are_numbered_after_arguments() {
    let expr = Expr::case(
        [(Expr::eq(Expr::arg(0usize), "a"), Expr::arg(1usize))],
        None,
    );

    let mut params: Vec<Value> = vec![];
    let sql = Serializer::postgresql().serialize_expr(&expr, &mut params);

    assert_eq!(sql, "CASE WHEN $1 = $3 THEN $2 END");
    assert_eq!(params, vec![Value::from("a")]);

    assert_eq!(canonical(&expr), "CASE WHEN ?1 = 'a' THEN ?2 END");
}

#[test]
fn null_is_never_bound() {
    let expr = Expr::case([(Expr::is_null(x()), Expr::null())], None);

    let mut params: Vec<Value> = vec![];
    let sql = Serializer::postgresql().serialize_expr(&expr, &mut params);

    assert_eq!(sql, r#"CASE WHEN "x" IS NULL THEN NULL END"#);
    assert!(params.is_empty());
}
