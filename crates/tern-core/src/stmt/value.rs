use crate::Result;

use std::cmp::Ordering;

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value. Also the "unknown" of three-valued boolean logic.
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn from_bool(src: bool) -> Self {
        Self::Bool(src)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            value => Err(crate::Error::type_conversion(value, "Bool")),
        }
    }

    /// Returns the boolean carried by the value, `None` for null.
    ///
    /// Any other value is an evaluation error: only booleans and null are
    /// valid predicate results.
    pub fn to_option_bool(self) -> Result<Option<bool>> {
        match self {
            Self::Null => Ok(None),
            Self::Bool(v) => Ok(Some(v)),
            _ => Err(crate::Error::expression_evaluation_failed(
                "expected boolean value",
            )),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_string(&self) -> &str {
        match self {
            Self::String(v) => v,
            _ => panic!("expected `String`, found {self:#?}"),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::I32(_) | Self::I64(_) | Self::F64(_))
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl PartialOrd for Value {
    /// Orders values of the same kind. Numeric values are compared across
    /// widths; null and mismatched kinds are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Bool(lhs), Bool(rhs)) => lhs.partial_cmp(rhs),
            (String(lhs), String(rhs)) => lhs.partial_cmp(rhs),
            (I32(lhs), I32(rhs)) => lhs.partial_cmp(rhs),
            (I64(lhs), I64(rhs)) => lhs.partial_cmp(rhs),
            (I32(lhs), I64(rhs)) => i64::from(*lhs).partial_cmp(rhs),
            (I64(lhs), I32(rhs)) => lhs.partial_cmp(&i64::from(*rhs)),
            (F64(lhs), F64(rhs)) => lhs.partial_cmp(rhs),
            (F64(lhs), I32(rhs)) => lhs.partial_cmp(&f64::from(*rhs)),
            (I32(lhs), F64(rhs)) => f64::from(*lhs).partial_cmp(rhs),
            (F64(lhs), I64(rhs)) => lhs.partial_cmp(&(*rhs as f64)),
            (I64(lhs), F64(rhs)) => (*lhs as f64).partial_cmp(rhs),
            _ => None,
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<&i64> for Value {
    fn from(src: &i64) -> Self {
        Self::I64(*src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
