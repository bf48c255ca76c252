use super::{Flavor, Formatter, Params, ToSql};

use tern_core::stmt;

impl ToSql for stmt::Type {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let flavor = f.serializer.flavor;

        fmt!(
            f,
            match self {
                // MySQL only casts to a handful of target types
                stmt::Type::Bool | stmt::Type::I32 | stmt::Type::I64
                    if flavor == Flavor::Mysql =>
                {
                    "SIGNED"
                }
                stmt::Type::Bool => "BOOLEAN",
                stmt::Type::I32 => "INTEGER",
                stmt::Type::I64 => "BIGINT",
                stmt::Type::F64 if flavor == Flavor::Mysql => "DOUBLE",
                stmt::Type::F64 => "DOUBLE PRECISION",
                stmt::Type::String if flavor == Flavor::Mysql => "CHAR",
                stmt::Type::String if flavor == Flavor::Canonical => "VARCHAR",
                stmt::Type::String => "TEXT",
                // Not reachable through `CAST`, which skips indeterminate types
                stmt::Type::Null | stmt::Type::Unknown => "NULL",
            }
        );
    }
}
