use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

// ─── Slug IDs ──────────────────────────────────────────────────────────────────

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses and validates a kebab-case slug.
            ///
            /// # Errors
            ///
            /// Returns `ParseIdError` if the value is empty or not kebab-case.
            pub fn new(value: impl Into<String>) -> Result<Self, ParseIdError> {
                let value = value.into();
                if is_slug(&value) {
                    Ok(Self(value))
                } else {
                    Err(ParseIdError { kind: stringify!($name) })
                }
            }

            /// Builds an id from a compile-time slug.
            #[must_use]
            pub(crate) fn from_static(value: &'static str) -> Self {
                debug_assert!(is_slug(value), "invalid static slug: {value}");
                Self(value.to_string())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

slug_id!(
    /// Catalogue identifier of a workout, e.g. `full-body-beginner`
    WorkoutId
);
slug_id!(
    /// Catalogue identifier of an exercise, e.g. `push-ups`
    ExerciseId
);
slug_id!(
    /// Identifier of a colour theme, e.g. `electric-blue`
    ThemeId
);

// ─── Numeric IDs ───────────────────────────────────────────────────────────────

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>()
                    .map($name::new)
                    .map_err(|_| ParseIdError { kind: stringify!($name) })
            }
        }
    };
}

numeric_id!(
    /// Identifier of a performed set inside a set tracker
    SetId
);
numeric_id!(
    /// Identifier of a food in the food database
    FoodId
);
numeric_id!(
    /// Identifier of a logged meal entry
    MealEntryId
);
numeric_id!(
    /// Identifier of a recorded session summary
    SummaryId
);
numeric_id!(
    /// Identifier of an exercise row in the workout builder
    BuilderEntryId
);
numeric_id!(
    /// Identifier of a logged body measurement
    MeasurementId
);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_id_accepts_kebab_slug() {
        let id: WorkoutId = "full-body-beginner".parse().unwrap();
        assert_eq!(id.as_str(), "full-body-beginner");
        assert_eq!(id.to_string(), "full-body-beginner");
    }

    #[test]
    fn slug_rejects_empty_and_uppercase() {
        assert!("".parse::<WorkoutId>().is_err());
        assert!("Push-Ups".parse::<ExerciseId>().is_err());
        assert!("push ups".parse::<ExerciseId>().is_err());
        assert!("-leading".parse::<ThemeId>().is_err());
    }

    #[test]
    fn slug_debug_names_kind() {
        let id = ExerciseId::new("plank").unwrap();
        assert_eq!(format!("{id:?}"), "ExerciseId(plank)");
    }

    #[test]
    fn numeric_id_from_str() {
        let id: SetId = "12".parse().unwrap();
        assert_eq!(id, SetId::new(12));
        assert!("twelve".parse::<FoodId>().is_err());
    }

    #[test]
    fn parse_error_names_kind() {
        let err = "x".parse::<SummaryId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse SummaryId from string");
    }
}
