#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Delimited;

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod expr_case;
mod ty;
mod value;

use tern_core::stmt::Expr;

/// Serialize an expression to a SQL string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects:
    /// identifier quoting, placeholders and whether literals are inlined.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Number of positional arguments referenced by the expression. Pushed
    /// parameters are numbered after them.
    num_args: usize,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Serializes `expr`, pushing any literal that is not inlined into
    /// `params`.
    ///
    /// Positional arguments keep their own placeholders (`?1`, `$1`, ...),
    /// and pushed literals are numbered after the highest argument. The
    /// statement is therefore bound with the evaluation arguments first,
    /// followed by `params`. MySQL placeholders are unnumbered, so there an
    /// expression mixing arguments and bound literals binds in textual order.
    pub fn serialize_expr(&self, expr: &Expr, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            num_args: num_args(expr),
        };

        expr.to_sql(&mut fmt);
        ret
    }

    fn is_canonical(&self) -> bool {
        matches!(self.flavor, Flavor::Canonical)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::canonical()
    }
}

/// One past the highest argument position referenced by `expr`.
fn num_args(expr: &Expr) -> usize {
    match expr {
        Expr::Arg(expr_arg) => expr_arg.position + 1,
        Expr::And(expr_and) => expr_and.iter().map(num_args).max().unwrap_or(0),
        Expr::Or(expr_or) => expr_or.iter().map(num_args).max().unwrap_or(0),
        Expr::BinaryOp(expr) => num_args(&expr.lhs).max(num_args(&expr.rhs)),
        Expr::Case(expr_case) => expr_case.iter().map(num_args).max().unwrap_or(0),
        Expr::Cast(expr_cast) => num_args(&expr_cast.expr),
        Expr::IsNull(expr_is_null) => num_args(&expr_is_null.expr),
        Expr::Not(expr_not) => num_args(&expr_not.expr),
        Expr::Column(_) | Expr::Value(_) => 0,
    }
}
