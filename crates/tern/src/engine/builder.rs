use super::Engine;
use tern_sql::{Flavor, Serializer};

#[derive(Debug)]
pub struct Builder {
    /// SQL dialect prepared expressions are rendered in
    flavor: Flavor,

    /// Run the simplifier when preparing
    simplify: bool,
}

impl Builder {
    /// Sets the SQL dialect used for [`Prepared::sql`].
    ///
    /// [`Prepared::sql`]: super::Prepared::sql
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Enables or disables simplification. Disabled, expressions keep every
    /// branch as built, which is useful to compare against the folded form.
    /// CASE result types are resolved either way.
    pub fn simplify(&mut self, simplify: bool) -> &mut Self {
        self.simplify = simplify;
        self
    }

    pub fn build(&self) -> Engine {
        Engine {
            serializer: Serializer::new(self.flavor),
            simplify: self.simplify,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            flavor: Flavor::Canonical,
            simplify: true,
        }
    }
}
