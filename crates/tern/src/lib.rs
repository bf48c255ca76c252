pub mod engine;
pub use engine::{Engine, Prepared};

pub use tern_core::{stmt, Error, Result};
pub use tern_sql::{Flavor, Serializer};
