//! Defines the fiat currencies the converter offers.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

/// A currency the conversion backend accepts as input.
///
/// Declaration order is the order shown in the currency picker.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    #[default]
    EUR, // Euro
    USD, // United States Dollar
}

impl FiatCurrency {
    /// Number of fraction digits shown for converted amounts.
    pub fn decimals(&self) -> u8 {
        2
    }

    /// Returns the graphical symbol for the currency (e.g., '€').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EUR => "Euro",
            Self::USD => "United States Dollar",
        }
    }

    /// All currency codes, in picker order.
    pub fn codes() -> Vec<String> {
        Self::iter().map(|c| c.code().to_string()).collect()
    }
}
