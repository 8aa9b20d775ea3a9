//! Field classification — which record keys coerce to which type.
//!
//! These are plain string constants with no runtime inference. The same
//! tables drive coercion for every entity kind, so a key like `height`
//! is a float whether it belongs to a person, a droid or a starship.

/// String values treated as "no data". Matching is case-sensitive.
pub const EMPTY_SENTINELS: &[&str] = &["n/a", "none", "unknown", ""];

/// Delimiter used by list-valued fields.
pub const LIST_DELIMITER: &str = ", ";

pub const FLOAT_FIELDS: &[&str] = &[
    "height",
    "hyperdrive_rating",
    "length",
    "mass",
    "orbital_period_days",
];

pub const INT_FIELDS: &[&str] = &[
    "cargo_capacity",
    "crew",
    "diameter_km",
    "max_atmosphering_speed",
    "moons",
    "MGLT",
    "passengers",
    "population",
    "suns",
];

pub const LIST_FIELDS: &[&str] = &["armament", "climate", "equipment", "terrain"];

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Int,
    List,
    /// Anything not listed above; strings pass through as text.
    Text,
}

impl FieldKind {
    /// Classify a field by name.
    pub fn of(field: &str) -> Self {
        if FLOAT_FIELDS.contains(&field) {
            Self::Float
        } else if INT_FIELDS.contains(&field) {
            Self::Int
        } else if LIST_FIELDS.contains(&field) {
            Self::List
        } else {
            Self::Text
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "integer",
            Self::List => "list",
            Self::Text => "string",
        }
    }
}

/// Whether a raw string is one of the empty sentinels.
pub fn is_empty_sentinel(raw: &str) -> bool {
    EMPTY_SENTINELS.contains(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_sets_are_disjoint() {
        for f in FLOAT_FIELDS {
            assert!(!INT_FIELDS.contains(f), "{f} in float and int");
            assert!(!LIST_FIELDS.contains(f), "{f} in float and list");
        }
        for f in INT_FIELDS {
            assert!(!LIST_FIELDS.contains(f), "{f} in int and list");
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(FieldKind::of("mass"), FieldKind::Float);
        assert_eq!(FieldKind::of("MGLT"), FieldKind::Int);
        assert_eq!(FieldKind::of("mglt"), FieldKind::Text);
        assert_eq!(FieldKind::of("terrain"), FieldKind::List);
        assert_eq!(FieldKind::of("birth_year"), FieldKind::Text);
    }

    #[test]
    fn test_sentinels_are_case_sensitive() {
        assert!(is_empty_sentinel("unknown"));
        assert!(is_empty_sentinel(""));
        assert!(!is_empty_sentinel("Unknown"));
        assert!(!is_empty_sentinel("N/A"));
    }
}
