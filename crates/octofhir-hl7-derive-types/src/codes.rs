//! Closed code enumerations produced by the categorical resolvers
//!
//! Each enum carries its FHIR R4 code. Parsing is case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a code string does not belong to the enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {system} code: {code}")]
pub struct UnknownCode {
    pub system: &'static str,
    pub code: String,
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $system:literal {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// All codes, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The FHIR code
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.code().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownCode {
                        system: $system,
                        code: trimmed.to_string(),
                    })
            }
        }
    };
}

code_enum! {
    /// FHIR R4 `encounter-status`
    #[derive(Default)]
    EncounterStatus, "encounter-status" {
        Planned => "planned",
        Arrived => "arrived",
        Triaged => "triaged",
        InProgress => "in-progress",
        OnLeave => "onleave",
        Finished => "finished",
        Cancelled => "cancelled",
        EnteredInError => "entered-in-error",
        /// Default when no signal is present
        #[default]
        Unknown => "unknown",
    }
}

code_enum! {
    /// FHIR R4 `address-use`
    AddressUse, "address-use" {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Billing => "billing",
    }
}

code_enum! {
    /// FHIR R4 `address-type`
    AddressType, "address-type" {
        Postal => "postal",
        Physical => "physical",
        Both => "both",
    }
}
