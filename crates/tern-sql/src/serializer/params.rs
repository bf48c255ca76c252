use super::{Flavor, Formatter, ToSql};

use tern_core::stmt;

/// Collects the literal values a serialized expression binds.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// One-based position of a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => fmt!(f, '?'),
            Flavor::Postgresql => fmt!(f, '$' self.0),
            Flavor::Canonical | Flavor::Sqlite => fmt!(f, '?' self.0),
        }
    }
}
