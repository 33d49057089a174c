//! Chemical elements covered by the SMILES subset parser.

use serde::{Deserialize, Serialize};

/// Elements the parser accepts: the SMILES organic subset plus the bracket
/// elements that show up in drug-like molecules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    H,
    B,
    C,
    N,
    O,
    F,
    Na,
    Mg,
    Si,
    P,
    S,
    Cl,
    K,
    Ca,
    Se,
    Br,
    I,
}

impl Element {
    /// Look up an element by its (case-sensitive) symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "H" => Some(Element::H),
            "B" => Some(Element::B),
            "C" => Some(Element::C),
            "N" => Some(Element::N),
            "O" => Some(Element::O),
            "F" => Some(Element::F),
            "Na" => Some(Element::Na),
            "Mg" => Some(Element::Mg),
            "Si" => Some(Element::Si),
            "P" => Some(Element::P),
            "S" => Some(Element::S),
            "Cl" => Some(Element::Cl),
            "K" => Some(Element::K),
            "Ca" => Some(Element::Ca),
            "Se" => Some(Element::Se),
            "Br" => Some(Element::Br),
            "I" => Some(Element::I),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::I => "I",
        }
    }

    /// Standard average atomic weight (g/mol).
    pub fn atomic_weight(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::B => 10.811,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::Na => 22.990,
            Element::Mg => 24.305,
            Element::Si => 28.086,
            Element::P => 30.974,
            Element::S => 32.06,
            Element::Cl => 35.453,
            Element::K => 39.098,
            Element::Ca => 40.078,
            Element::Se => 78.971,
            Element::Br => 79.904,
            Element::I => 126.904,
        }
    }

    /// Default valences used to fill implicit hydrogens on organic-subset
    /// atoms, lowest first. Atoms outside the organic subset must appear in
    /// brackets and never get implicit hydrogens.
    pub fn default_valences(&self) -> &'static [u32] {
        match self {
            Element::B => &[3],
            Element::C => &[4],
            Element::N => &[3, 5],
            Element::O => &[2],
            Element::P => &[3, 5],
            Element::S => &[2, 4, 6],
            Element::F | Element::Cl | Element::Br | Element::I => &[1],
            _ => &[],
        }
    }

    /// Whether a bare (non-bracket) symbol is allowed for this element.
    pub fn in_organic_subset(&self) -> bool {
        matches!(
            self,
            Element::B
                | Element::C
                | Element::N
                | Element::O
                | Element::P
                | Element::S
                | Element::F
                | Element::Cl
                | Element::Br
                | Element::I
        )
    }
}
