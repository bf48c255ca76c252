use super::Value;
use crate::{Error, Result};

/// An expression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Boolean value
    Bool,

    /// 64-bit floating point number
    F64,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type. Also the type a CASE falls back to when none of its
    /// branches has a concrete type.
    String,

    /// The type of the null literal. It can be cast to any type.
    Null,

    /// A type that has not been inferred yet. This is the identity of
    /// [`Type::unify`].
    Unknown,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::I32 | Self::I64 | Self::F64)
    }

    /// Returns `true` if the type carries no concrete type information.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Null | Self::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::F64 => "F64",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::String => "String",
            Self::Null => "Null",
            Self::Unknown => "Unknown",
        }
    }

    /// Merges two types into the least type both can be converted to.
    ///
    /// `Unknown` is the identity on either side, so a sequence of types can
    /// be folded starting from `Type::Unknown`. Otherwise the type with the
    /// higher precedence wins: `Null < String < Bool < I32 < I64 < F64`.
    pub fn unify(self, other: Type) -> Type {
        match (self, other) {
            (Self::Unknown, ty) | (ty, Self::Unknown) => ty,
            (lhs, rhs) if rhs.precedence() > lhs.precedence() => rhs,
            (lhs, _) => lhs,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Null => 1,
            Self::String => 2,
            Self::Bool => 3,
            Self::I32 => 4,
            Self::I64 => 5,
            Self::F64 => 6,
        }
    }

    /// Converts `value` to this type.
    pub fn cast(&self, value: Value) -> Result<Value> {
        // Null values are passed through
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (self, value) {
            (Self::Null | Self::Unknown, value) => value,

            // Bool
            (Self::Bool, value @ Value::Bool(_)) => value,
            (Self::Bool, Value::I32(v)) => Value::Bool(v != 0),
            (Self::Bool, Value::I64(v)) => Value::Bool(v != 0),
            (Self::Bool, Value::String(v)) => match v.trim() {
                s if s.eq_ignore_ascii_case("true") || s == "1" => Value::Bool(true),
                s if s.eq_ignore_ascii_case("false") || s == "0" => Value::Bool(false),
                _ => {
                    let cause = crate::err!("expected TRUE, FALSE, 1 or 0");
                    return Err(self.parse_failed(v, cause));
                }
            },

            // I32
            (Self::I32, value @ Value::I32(_)) => value,
            (Self::I32, Value::Bool(v)) => Value::I32(v.into()),
            (Self::I32, Value::I64(v)) => match i32::try_from(v) {
                Ok(v) => Value::I32(v),
                Err(_) => return Err(Error::type_conversion(Value::I64(v), self.name())),
            },
            (Self::I32, Value::F64(v)) => {
                let rounded = v.round();
                if !rounded.is_finite() || rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
                    return Err(Error::type_conversion(Value::F64(v), self.name()));
                }
                Value::I32(rounded as i32)
            }
            (Self::I32, Value::String(v)) => match v.trim().parse() {
                Ok(parsed) => Value::I32(parsed),
                Err(err) => return Err(self.parse_failed(v, err)),
            },

            // I64
            (Self::I64, value @ Value::I64(_)) => value,
            (Self::I64, Value::Bool(v)) => Value::I64(v.into()),
            (Self::I64, Value::I32(v)) => Value::I64(v.into()),
            (Self::I64, Value::F64(v)) => {
                let rounded = v.round();
                if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
                    return Err(Error::type_conversion(Value::F64(v), self.name()));
                }
                Value::I64(rounded as i64)
            }
            (Self::I64, Value::String(v)) => match v.trim().parse() {
                Ok(parsed) => Value::I64(parsed),
                Err(err) => return Err(self.parse_failed(v, err)),
            },

            // F64
            (Self::F64, value @ Value::F64(_)) => value,
            (Self::F64, Value::Bool(v)) => Value::F64(if v { 1.0 } else { 0.0 }),
            (Self::F64, Value::I32(v)) => Value::F64(v.into()),
            (Self::F64, Value::I64(v)) => Value::F64(v as f64),
            (Self::F64, Value::String(v)) => match v.trim().parse() {
                Ok(parsed) => Value::F64(parsed),
                Err(err) => return Err(self.parse_failed(v, err)),
            },

            // String
            (Self::String, value @ Value::String(_)) => value,
            (Self::String, Value::Bool(v)) => Value::String(if v { "TRUE" } else { "FALSE" }.into()),
            (Self::String, Value::I32(v)) => Value::String(v.to_string()),
            (Self::String, Value::I64(v)) => Value::String(v.to_string()),
            (Self::String, Value::F64(v)) => Value::String(v.to_string()),

            (_, value) => return Err(Error::type_conversion(value, self.name())),
        })
    }

    /// A string that does not parse as this type. The parser's error is kept
    /// as the cause.
    fn parse_failed(&self, value: String, cause: impl Into<Error>) -> Error {
        cause
            .into()
            .context(Error::type_conversion(Value::String(value), self.name()))
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        *value
    }
}
