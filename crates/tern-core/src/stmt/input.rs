use crate::stmt::{ExprArg, ExprColumn, Value};

use indexmap::IndexMap;

/// Supplies the values an expression depends on at evaluation time.
///
/// Both methods default to "unresolvable", which is what constant
/// evaluation uses.
pub trait Input {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        let _ = expr_arg;
        None
    }

    fn resolve_column(&mut self, expr_column: &ExprColumn) -> Option<Value> {
        let _ = expr_column;
        None
    }
}

#[derive(Debug, Default)]
pub struct ConstInput {}

impl ConstInput {
    pub fn new() -> ConstInput {
        ConstInput {}
    }
}

impl Input for ConstInput {}

/// Column bindings of the row being evaluated, plus positional arguments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
    args: Vec<Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Creates a row with no columns that only supplies positional arguments.
    pub fn from_args(args: impl Into<Vec<Value>>) -> Row {
        Row {
            columns: IndexMap::new(),
            args: args.into(),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    pub fn push_arg(&mut self, value: impl Into<Value>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }

    /// Column names in binding order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.bind(name, value);
        }
        row
    }
}

impl Input for &Row {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.args.get(expr_arg.position).cloned()
    }

    fn resolve_column(&mut self, expr_column: &ExprColumn) -> Option<Value> {
        self.columns.get(&expr_column.name).cloned()
    }
}

impl Input for Row {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        (&*self).resolve_arg(expr_arg)
    }

    fn resolve_column(&mut self, expr_column: &ExprColumn) -> Option<Value> {
        (&*self).resolve_column(expr_column)
    }
}

impl Input for &Vec<Value> {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.get(expr_arg.position).cloned()
    }
}

impl Input for &[Value] {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.get(expr_arg.position).cloned()
    }
}

impl<const N: usize> Input for [Value; N] {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.get(expr_arg.position).cloned()
    }
}

impl<const N: usize> Input for &[Value; N] {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        self.get(expr_arg.position).cloned()
    }
}

impl<I: Input + ?Sized> Input for &mut I {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Value> {
        (**self).resolve_arg(expr_arg)
    }

    fn resolve_column(&mut self, expr_column: &ExprColumn) -> Option<Value> {
        (**self).resolve_column(expr_column)
    }
}
