//! Element - the closed set of alloying elements accepted by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of elements in a composition vector.
pub const ELEMENT_COUNT: usize = 20;

/// An alloying element, in the order the composition form lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Al,
    C,
    Co,
    Cr,
    Cu,
    Fe,
    Hf,
    Mg,
    Mn,
    Mo,
    Nb,
    Ni,
    Re,
    Ru,
    Si,
    Ta,
    Ti,
    V,
    W,
    Zr,
}

impl Element {
    /// All elements in form order.
    pub const ALL: [Element; ELEMENT_COUNT] = [
        Element::Al,
        Element::C,
        Element::Co,
        Element::Cr,
        Element::Cu,
        Element::Fe,
        Element::Hf,
        Element::Mg,
        Element::Mn,
        Element::Mo,
        Element::Nb,
        Element::Ni,
        Element::Re,
        Element::Ru,
        Element::Si,
        Element::Ta,
        Element::Ti,
        Element::V,
        Element::W,
        Element::Zr,
    ];

    /// Returns the chemical symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Al => "Al",
            Element::C => "C",
            Element::Co => "Co",
            Element::Cr => "Cr",
            Element::Cu => "Cu",
            Element::Fe => "Fe",
            Element::Hf => "Hf",
            Element::Mg => "Mg",
            Element::Mn => "Mn",
            Element::Mo => "Mo",
            Element::Nb => "Nb",
            Element::Ni => "Ni",
            Element::Re => "Re",
            Element::Ru => "Ru",
            Element::Si => "Si",
            Element::Ta => "Ta",
            Element::Ti => "Ti",
            Element::V => "V",
            Element::W => "W",
            Element::Zr => "Zr",
        }
    }

    /// Position of this element in composition vectors.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returned when a symbol is not part of the supported element set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element symbol: {0}")]
pub struct UnknownElement(pub String);

impl FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Element::ALL
            .iter()
            .copied()
            .find(|e| e.symbol() == symbol)
            .ok_or_else(|| UnknownElement(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_element_once_in_index_order() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn parses_symbols() {
        assert_eq!("Fe".parse::<Element>().unwrap(), Element::Fe);
        assert_eq!(" Zr ".parse::<Element>().unwrap(), Element::Zr);
        assert_eq!("V".parse::<Element>().unwrap(), Element::V);
    }

    #[test]
    fn rejects_unknown_and_wrong_case_symbols() {
        assert_eq!(
            "Xx".parse::<Element>(),
            Err(UnknownElement("Xx".to_string()))
        );
        assert!("fe".parse::<Element>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for element in Element::ALL {
            assert_eq!(element.to_string().parse::<Element>().unwrap(), element);
        }
    }
}
