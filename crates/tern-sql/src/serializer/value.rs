use super::{Formatter, Params, Placeholder, ToSql};

use tern_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Value::*;

        match self {
            // NULL is never bound
            Null => fmt!(f, "NULL"),
            value if f.serializer.is_canonical() => fmt!(f, Literal(value)),
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, Placeholder(f.num_args + placeholder.0))
            }
        }
    }
}

/// A value written inline as a SQL literal.
struct Literal<'a>(&'a stmt::Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Value::*;

        match self.0 {
            Bool(true) => fmt!(f, "TRUE"),
            Bool(false) => fmt!(f, "FALSE"),
            I32(v) => f.dst.push_str(&v.to_string()),
            I64(v) => f.dst.push_str(&v.to_string()),
            // SQL has no literal for these, spell them as a cast from text
            F64(v) if !v.is_finite() => {
                let text = if v.is_nan() {
                    "'NaN'"
                } else if v.is_sign_positive() {
                    "'Infinity'"
                } else {
                    "'-Infinity'"
                };
                let ty = stmt::Type::F64;
                fmt!(f, "CAST(" text " AS " ty ")");
            }
            // Debug formatting keeps the fractional part, so `2.0` does not
            // read back as an integer
            F64(v) => f.dst.push_str(&format!("{v:?}")),
            Null => fmt!(f, "NULL"),
            String(v) => {
                f.dst.push('\'');
                for c in v.chars() {
                    if c == '\'' {
                        f.dst.push('\'');
                    }
                    f.dst.push(c);
                }
                f.dst.push('\'');
            }
        }
    }
}
