// dpack-core/src/domain/pack/classification.rs
//
// Closed vocabularies used by datasets and policies.
// Unknown values are kept verbatim (`Unrecognized`) so that validation,
// not parsing, is the place where a bad pack gets reported.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! classification {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            /// Canonical spellings, in declaration order.
            pub const ALLOWED: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }

            /// Case-insensitive; never fails.
            pub fn parse_lenient(raw: &str) -> Self {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return Self::$variant;
                    }
                )+
                Self::Unrecognized(raw.to_string())
            }
        }

        // A missing value is as invalid as a misspelled one.
        impl Default for $name {
            fn default() -> Self {
                Self::Unrecognized(String::new())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse_lenient(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                // `~` reads like an absent key.
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.map_or_else(Self::default, |raw| Self::parse_lenient(&raw)))
            }
        }
    };
}

classification! {
    /// Sensitivity of the personal data a dataset carries.
    PiiLevel {
        None => "NONE",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

classification! {
    /// Regulatory territory a dataset falls under.
    Jurisdiction {
        Us => "US",
        Eu => "EU",
        Apac => "APAC",
        Global => "GLOBAL",
    }
}

classification! {
    /// Guaranteed refresh cadence.
    FreshnessSla {
        Realtime => "REALTIME",
        Hourly => "HOURLY",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
    }
}

classification! {
    PolicyScope {
        Dataset => "dataset",
        Domain => "domain",
        Global => "global",
    }
}
