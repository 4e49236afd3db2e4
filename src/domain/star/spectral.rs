//! Morgan-Keenan spectral and luminosity classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary spectral class, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SpectralClass {
    /// Parses the first letter of a full spectral type ("M3.5V" is M).
    pub fn from_spectral_type(spectral_type: Option<&str>) -> Self {
        let first = spectral_type
            .and_then(|s| s.chars().next())
            .map(|c| c.to_ascii_uppercase());
        match first {
            Some('O') => SpectralClass::O,
            Some('B') => SpectralClass::B,
            Some('A') => SpectralClass::A,
            Some('F') => SpectralClass::F,
            Some('G') => SpectralClass::G,
            Some('K') => SpectralClass::K,
            Some('M') => SpectralClass::M,
            Some('L') => SpectralClass::L,
            Some('T') => SpectralClass::T,
            Some('Y') => SpectralClass::Y,
            _ => SpectralClass::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
            SpectralClass::L => "L",
            SpectralClass::T => "T",
            SpectralClass::Y => "Y",
            SpectralClass::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Luminosity class, from supergiants (Ia) to white dwarfs (VII).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LuminosityClass {
    Ia,
    Ib,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    #[default]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl LuminosityClass {
    /// Substring match on the upper-cased type, checked in the order
    /// VII, VI, IV, III, II, IB, IA, V. The first hit wins.
    pub fn from_spectral_type(spectral_type: Option<&str>) -> Self {
        let spec = match spectral_type {
            Some(s) if !s.is_empty() => s.to_ascii_uppercase(),
            _ => return LuminosityClass::Unknown,
        };
        const ORDER: [(&str, LuminosityClass); 8] = [
            ("VII", LuminosityClass::VII),
            ("VI", LuminosityClass::VI),
            ("IV", LuminosityClass::IV),
            ("III", LuminosityClass::III),
            ("II", LuminosityClass::II),
            ("IB", LuminosityClass::Ib),
            ("IA", LuminosityClass::Ia),
            ("V", LuminosityClass::V),
        ];
        ORDER
            .iter()
            .find(|(numeral, _)| spec.contains(numeral))
            .map(|(_, class)| *class)
            .unwrap_or(LuminosityClass::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LuminosityClass::Ia => "Ia",
            LuminosityClass::Ib => "Ib",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::VII => "VII",
            LuminosityClass::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
