//! Input schema for the bank marketing classifier
//!
//! Declares the categorical enumerations, numeric bounds, and column names
//! the model was trained on. Column names are the verbatim dataset headers,
//! dot-separated where the original data uses dots (`emp.var.rate` etc.),
//! and must not be renamed.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Training-schema column names, in the order the model expects.
pub const COLUMNS: [&str; 20] = [
    "age",
    "job",
    "marital",
    "education",
    "default",
    "housing",
    "loan",
    "contact",
    "month",
    "day_of_week",
    "duration",
    "campaign",
    "pdays",
    "previous",
    "poutcome",
    "emp.var.rate",
    "cons.price.idx",
    "cons.conf.idx",
    "euribor3m",
    "nr.employed",
];

/// Error returned when a string is not in a field's enumeration.
#[derive(Debug, Clone, Error)]
#[error("invalid value {value:?} for field {field}, expected one of: {expected}")]
pub struct InvalidField {
    field: &'static str,
    value: String,
    expected: String,
}

impl InvalidField {
    fn new(field: &'static str, value: &str, expected: String) -> Self {
        Self {
            field,
            value: value.to_string(),
            expected,
        }
    }

    /// Name of the field the value was rejected for.
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Declares a categorical field enumeration with its wire strings.
///
/// The first variant is the field's default, matching the first choice
/// offered by the input form.
macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident, $field:literal,
     { $first:ident => $first_text:literal $(, $variant:ident => $text:literal)* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $first,
            $($variant,)*
        }

        impl $name {
            /// All variants in enumeration (and one-hot) order.
            pub const ALL: &'static [$name] = &[$name::$first, $($name::$variant,)*];

            /// The column this enumeration belongs to.
            pub const FIELD: &'static str = $field;

            /// The verbatim dataset string for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$first => $first_text,
                    $($name::$variant => $text,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidField;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $first_text => Ok($name::$first),
                    $($text => Ok($name::$variant),)*
                    other => Err(InvalidField::new(
                        $field,
                        other,
                        Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    )),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }
    };
}

categorical!(
    /// Client profession.
    Job, "job", {
        Admin => "admin.",
        BlueCollar => "blue-collar",
        Entrepreneur => "entrepreneur",
        Housemaid => "housemaid",
        Management => "management",
        Retired => "retired",
        SelfEmployed => "self-employed",
        Services => "services",
        Student => "student",
        Technician => "technician",
        Unemployed => "unemployed",
        Unknown => "unknown",
    }
);

categorical!(
    /// Marital status.
    Marital, "marital", {
        Married => "married",
        Single => "single",
        Divorced => "divorced",
        Unknown => "unknown",
    }
);

categorical!(
    /// Highest education level.
    Education, "education", {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Unknown => "unknown",
    }
);

categorical!(
    /// Yes/no indicator with an unknown state, shared by the credit
    /// default, housing loan, and personal loan fields.
    YesNoUnknown, "indicator", {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
);

categorical!(
    /// Contact communication type.
    Contact, "contact", {
        Cellular => "cellular",
        Telephone => "telephone",
        Unknown => "unknown",
    }
);

categorical!(
    /// Month of last contact.
    Month, "month", {
        Jan => "jan",
        Feb => "feb",
        Mar => "mar",
        Apr => "apr",
        May => "may",
        Jun => "jun",
        Jul => "jul",
        Aug => "aug",
        Sep => "sep",
        Oct => "oct",
        Nov => "nov",
        Dec => "dec",
    }
);

categorical!(
    /// Weekday of last contact.
    Weekday, "day_of_week", {
        Mon => "mon",
        Tue => "tue",
        Wed => "wed",
        Thu => "thu",
        Fri => "fri",
    }
);

categorical!(
    /// Outcome of the previous marketing campaign.
    CampaignOutcome, "poutcome", {
        Failure => "failure",
        Nonexistent => "nonexistent",
        Success => "success",
    }
);

/// Declared domain of a numeric input field.
#[derive(Debug, Clone, Copy)]
pub struct FieldBounds<T> {
    pub min: T,
    pub max: T,
    pub default: T,
    pub step: T,
}

impl<T: PartialOrd + Copy> FieldBounds<T> {
    /// Whether a value falls within the declared domain.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Numeric field domains, matching the input form's min/max/default/step.
pub mod bounds {
    use super::FieldBounds;

    pub const AGE: FieldBounds<u32> = FieldBounds { min: 18, max: 100, default: 30, step: 1 };
    pub const DURATION: FieldBounds<u32> = FieldBounds { min: 0, max: 5000, default: 200, step: 1 };
    pub const CAMPAIGN: FieldBounds<u32> = FieldBounds { min: 1, max: 50, default: 1, step: 1 };
    pub const PDAYS: FieldBounds<u32> = FieldBounds { min: 0, max: 999, default: 999, step: 1 };
    pub const PREVIOUS: FieldBounds<u32> = FieldBounds { min: 0, max: 50, default: 0, step: 1 };

    pub const EMP_VAR_RATE: FieldBounds<f64> =
        FieldBounds { min: -10.0, max: 10.0, default: 1.1, step: 0.1 };
    pub const CONS_PRICE_IDX: FieldBounds<f64> =
        FieldBounds { min: 90.0, max: 100.0, default: 93.994, step: 0.001 };
    pub const CONS_CONF_IDX: FieldBounds<f64> =
        FieldBounds { min: -50.0, max: 0.0, default: -36.4, step: 0.1 };
    pub const EURIBOR3M: FieldBounds<f64> =
        FieldBounds { min: 0.0, max: 10.0, default: 4.857, step: 0.001 };
    pub const NR_EMPLOYED: FieldBounds<f64> =
        FieldBounds { min: 0.0, max: 10000.0, default: 5191.0, step: 0.1 };
}
