use super::Serializer;

/// SQL dialect targeted by a [`Serializer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Engine-neutral text: unquoted identifiers and inline literals. Used
    /// for display and as the plan-cache key.
    #[default]
    Canonical,
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    pub fn canonical() -> Serializer {
        Serializer {
            flavor: Flavor::Canonical,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }
}
