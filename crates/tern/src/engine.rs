mod builder;
pub use builder::Builder;

mod simplify;
pub use simplify::{simplify_expr, Simplify};

use crate::Result;
use tern_core::stmt::{visit_mut, CaseBuilder, CaseWhen, Expr, ExprContext, Input, Type, Value};
use tern_sql::Serializer;

/// Prepares expressions for repeated evaluation: simplifies them once,
/// resolves their result type and renders them to SQL.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Renders the SQL handed back with each prepared expression
    serializer: Serializer,

    /// When false, expressions are kept exactly as built
    simplify: bool,
}

/// An expression ready to be evaluated any number of times.
///
/// Immutable once prepared, so it can be shared across threads and evaluated
/// concurrently, each caller supplying its own input.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    expr: Expr,
    ty: Type,
    key: String,
    sql: String,
    params: Vec<Value>,
}

impl Engine {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new() -> Engine {
        Builder::default().build()
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// Prepares `expr`, which will be evaluated with arguments of the given
    /// types.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn prepare(&self, mut expr: Expr, arg_tys: &[Type]) -> Prepared {
        let cx = ExprContext::new(arg_tys);

        if self.simplify {
            simplify_expr(cx, &mut expr);
        } else {
            resolve_case_tys(cx, &mut expr);
        }

        let ty = cx.infer_expr_ty(&expr);
        let key = Serializer::canonical().serialize_expr(&expr, &mut Vec::<Value>::new());

        let mut params: Vec<Value> = vec![];
        let sql = self.serializer.serialize_expr(&expr, &mut params);

        tracing::debug!(%key, ?ty, "prepared expression");

        Prepared {
            expr,
            ty,
            key,
            sql,
            params,
        }
    }
}

/// Stores the result type on every CASE node that has none, leaving the
/// branches as built. Without it an unsimplified CASE returns its branch
/// values unconverted, disagreeing with the type reported by
/// [`Prepared::ty`].
fn resolve_case_tys(cx: ExprContext<'_>, expr: &mut Expr) {
    visit_mut::for_each_expr_mut(expr, |expr| {
        if !matches!(expr, Expr::Case(expr_case) if expr_case.result_ty().is_none()) {
            return;
        }

        // Nested CASE nodes are already resolved.
        let ty = cx.infer_expr_ty(expr);

        if let Expr::Case(expr_case) = expr.take() {
            let (whens, else_expr) = expr_case.into_parts();

            let mut builder = CaseBuilder::new();
            for CaseWhen { condition, result } in whens {
                builder.add_when(condition, result);
            }
            if let Some(else_expr) = else_expr {
                builder.add_else(else_expr);
            }

            tracing::trace!(?ty, "CASE result type resolved without simplifying");
            *expr = builder.finalize_with_ty(ty).into();
        }
    });
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Prepared {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The type evaluation results have.
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// Canonical SQL text.
    ///
    /// Literals render without their width and columns without their
    /// declared type, so `1i32` and `1i64` share a key. Cache on
    /// [`Prepared::cache_key`] instead.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key for caching prepared expressions: the canonical text paired with
    /// the result type. Equal cache keys render the same SQL and evaluate to
    /// values of the same type.
    pub fn cache_key(&self) -> (&str, Type) {
        (&self.key, self.ty)
    }

    /// SQL in the engine's flavor.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Literal values bound by [`Prepared::sql`], after the evaluation
    /// arguments.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn eval(&self, input: impl Input) -> Result<Value> {
        self.expr.eval(input)
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }
}
