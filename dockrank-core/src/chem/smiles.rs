//! SMILES subset parser.
//!
//! Covers the slice of SMILES that docking inputs actually use: the organic
//! subset (`B C N O P S F Cl Br I`), aromatic lowercase forms, bracket atoms
//! with isotope/chirality tokens (accepted and ignored), explicit hydrogen
//! counts, formal charges, branches, ring-bond closures (including `%nn`)
//! and dot-separated fragments. Stereo bond symbols `/` and `\` are read as
//! single bonds.
//!
//! Implicit hydrogens on organic-subset atoms are filled from the element's
//! default valence minus the bond-order sum; an aromatic atom counts one
//! extra shared ring bond. Bracket atoms carry exactly the hydrogens they
//! declare.

use crate::chem::element::Element;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SmilesError {
    #[error("empty SMILES string")]
    Empty,
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),
    #[error("malformed bracket atom '[{0}]'")]
    MalformedBracket(String),
    #[error("unclosed bracket atom")]
    UnclosedBracket,
    #[error("unbalanced branch parentheses")]
    UnbalancedBranch,
    #[error("unmatched ring-bond index {0}")]
    UnmatchedRingBond(u32),
    #[error("bond or ring closure with no preceding atom")]
    DanglingBond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribution to an atom's valence sum. Aromatic bonds count one; the
    /// shared delocalized bond is added per aromatic atom instead.
    fn order_value(&self) -> u32 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    pub charge: i32,
    /// Hydrogen count declared by a bracket atom; None means "fill from
    /// default valence"
    pub explicit_h: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

/// A parsed molecular graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    /// Bond-order sum at an atom, with the aromatic ring-bond adjustment.
    fn valence_sum(&self, idx: usize) -> u32 {
        let mut sum: u32 = self
            .bonds
            .iter()
            .filter(|b| b.a == idx || b.b == idx)
            .map(|b| b.order.order_value())
            .sum();
        if self.atoms[idx].aromatic {
            sum += 1;
        }
        sum
    }

    /// Total hydrogens on an atom: the declared count for bracket atoms,
    /// otherwise default valence minus the bond-order sum (never negative).
    pub fn hydrogen_count(&self, idx: usize) -> u32 {
        let atom = &self.atoms[idx];
        if let Some(h) = atom.explicit_h {
            return h;
        }
        let sum = self.valence_sum(idx);
        atom.element
            .default_valences()
            .iter()
            .copied()
            .find(|&v| v >= sum)
            .map(|v| v - sum)
            .unwrap_or(0)
    }

    /// Total hydrogen count over the whole molecule.
    pub fn total_hydrogens(&self) -> u32 {
        (0..self.atoms.len()).map(|i| self.hydrogen_count(i)).sum()
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    prev: Option<usize>,
    branch_stack: Vec<usize>,
    pending_bond: Option<BondOrder>,
    ring_bonds: HashMap<u32, (usize, Option<BondOrder>)>,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            prev: None,
            branch_stack: Vec::new(),
            pending_bond: None,
            ring_bonds: HashMap::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn add_atom(&mut self, atom: Atom) {
        let idx = self.atoms.len();
        let aromatic_pair = atom.aromatic;
        self.atoms.push(atom);
        if let Some(prev) = self.prev {
            let order = self.pending_bond.take().unwrap_or({
                if aromatic_pair && self.atoms[prev].aromatic {
                    BondOrder::Aromatic
                } else {
                    BondOrder::Single
                }
            });
            self.bonds.push(Bond {
                a: prev,
                b: idx,
                order,
            });
        }
        self.prev = Some(idx);
    }

    fn close_ring(&mut self, index: u32) -> Result<(), SmilesError> {
        let current = self.prev.ok_or(SmilesError::DanglingBond)?;
        let pending = self.pending_bond.take();
        match self.ring_bonds.remove(&index) {
            Some((partner, opening_bond)) => {
                let order = pending.or(opening_bond).unwrap_or({
                    if self.atoms[partner].aromatic && self.atoms[current].aromatic {
                        BondOrder::Aromatic
                    } else {
                        BondOrder::Single
                    }
                });
                self.bonds.push(Bond {
                    a: partner,
                    b: current,
                    order,
                });
            }
            None => {
                self.ring_bonds.insert(index, (current, pending));
            }
        }
        Ok(())
    }

    /// Parse the content between `[` and `]`:
    /// `[isotope] symbol [chirality] [Hcount] [charge] [:map]`
    fn parse_bracket_atom(&mut self) -> Result<Atom, SmilesError> {
        let close = self.chars[self.pos..]
            .iter()
            .position(|&c| c == ']')
            .ok_or(SmilesError::UnclosedBracket)?;
        let body: String = self.chars[self.pos..self.pos + close].iter().collect();
        self.pos += close + 1;

        let b: Vec<char> = body.chars().collect();
        let mut i = 0;

        // isotope (ignored)
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }

        // element symbol, aromatic if lowercase
        let (element, aromatic) = if i < b.len() && b[i].is_ascii_uppercase() {
            let mut symbol = b[i].to_string();
            // two-letter symbols like Cl, Br, Na; only extend when the pair
            // is a real symbol so "[CH4]" keeps its H token
            if i + 1 < b.len() && b[i + 1].is_ascii_lowercase() {
                let two: String = format!("{}{}", b[i], b[i + 1]);
                if Element::from_symbol(&two).is_some() {
                    symbol = two;
                }
            }
            i += symbol.len();
            let element =
                Element::from_symbol(&symbol).ok_or(SmilesError::UnknownElement(symbol))?;
            (element, false)
        } else if i < b.len() && b[i].is_ascii_lowercase() {
            let (symbol, len) = if b[i] == 's' && i + 1 < b.len() && b[i + 1] == 'e' {
                ("Se", 2)
            } else {
                match b[i] {
                    'b' => ("B", 1),
                    'c' => ("C", 1),
                    'n' => ("N", 1),
                    'o' => ("O", 1),
                    'p' => ("P", 1),
                    's' => ("S", 1),
                    other => return Err(SmilesError::UnknownElement(other.to_string())),
                }
            };
            i += len;
            (Element::from_symbol(symbol).unwrap(), true)
        } else {
            return Err(SmilesError::MalformedBracket(body.clone()));
        };

        // chirality (ignored)
        while i < b.len() && b[i] == '@' {
            i += 1;
        }

        // explicit hydrogen count, default 0
        let mut h_count = 0u32;
        if i < b.len() && b[i] == 'H' {
            i += 1;
            let mut digits = String::new();
            while i < b.len() && b[i].is_ascii_digit() {
                digits.push(b[i]);
                i += 1;
            }
            h_count = if digits.is_empty() {
                1
            } else {
                digits.parse().unwrap_or(1)
            };
        }

        // formal charge: "+", "-", "++", "+2", ...
        let mut charge = 0i32;
        if i < b.len() && (b[i] == '+' || b[i] == '-') {
            let sign = if b[i] == '+' { 1 } else { -1 };
            let symbol = b[i];
            let mut magnitude = 0i32;
            while i < b.len() && b[i] == symbol {
                magnitude += 1;
                i += 1;
            }
            let mut digits = String::new();
            while i < b.len() && b[i].is_ascii_digit() {
                digits.push(b[i]);
                i += 1;
            }
            if !digits.is_empty() {
                magnitude = digits.parse().unwrap_or(magnitude);
            }
            charge = sign * magnitude;
        }

        // atom map (ignored)
        if i < b.len() && b[i] == ':' {
            i += 1;
            while i < b.len() && b[i].is_ascii_digit() {
                i += 1;
            }
        }

        if i != b.len() {
            return Err(SmilesError::MalformedBracket(body));
        }

        Ok(Atom {
            element,
            aromatic,
            charge,
            explicit_h: Some(h_count),
        })
    }

    /// Parse a bare organic-subset atom at the current position.
    fn parse_organic_atom(&mut self) -> Result<Atom, SmilesError> {
        let c = self.chars[self.pos];
        let (symbol, aromatic, len) = match c {
            'C' if self.peek_next() == Some('l') => ("Cl", false, 2),
            'B' if self.peek_next() == Some('r') => ("Br", false, 2),
            'B' => ("B", false, 1),
            'C' => ("C", false, 1),
            'N' => ("N", false, 1),
            'O' => ("O", false, 1),
            'P' => ("P", false, 1),
            'S' => ("S", false, 1),
            'F' => ("F", false, 1),
            'I' => ("I", false, 1),
            'b' => ("B", true, 1),
            'c' => ("C", true, 1),
            'n' => ("N", true, 1),
            'o' => ("O", true, 1),
            'p' => ("P", true, 1),
            's' => ("S", true, 1),
            other => return Err(SmilesError::UnexpectedChar(other, self.pos)),
        };
        self.pos += len;
        Ok(Atom {
            element: Element::from_symbol(symbol).unwrap(),
            aromatic,
            charge: 0,
            explicit_h: None,
        })
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn parse(mut self) -> Result<Molecule, SmilesError> {
        while let Some(c) = self.peek() {
            match c {
                '(' => {
                    let prev = self.prev.ok_or(SmilesError::UnbalancedBranch)?;
                    self.branch_stack.push(prev);
                    self.pos += 1;
                }
                ')' => {
                    let prev = self
                        .branch_stack
                        .pop()
                        .ok_or(SmilesError::UnbalancedBranch)?;
                    self.prev = Some(prev);
                    self.pos += 1;
                }
                '.' => {
                    if self.pending_bond.is_some() {
                        return Err(SmilesError::UnexpectedChar('.', self.pos));
                    }
                    self.prev = None;
                    self.pos += 1;
                }
                '-' => {
                    self.pending_bond = Some(BondOrder::Single);
                    self.pos += 1;
                }
                '=' => {
                    self.pending_bond = Some(BondOrder::Double);
                    self.pos += 1;
                }
                '#' => {
                    self.pending_bond = Some(BondOrder::Triple);
                    self.pos += 1;
                }
                ':' => {
                    self.pending_bond = Some(BondOrder::Aromatic);
                    self.pos += 1;
                }
                '/' | '\\' => {
                    // stereo bonds read as plain single bonds
                    self.pending_bond = Some(BondOrder::Single);
                    self.pos += 1;
                }
                '%' => {
                    let d1 = self.chars.get(self.pos + 1).copied();
                    let d2 = self.chars.get(self.pos + 2).copied();
                    match (d1, d2) {
                        (Some(a), Some(b)) if a.is_ascii_digit() && b.is_ascii_digit() => {
                            let index =
                                a.to_digit(10).unwrap() * 10 + b.to_digit(10).unwrap();
                            self.pos += 3;
                            self.close_ring(index)?;
                        }
                        _ => return Err(SmilesError::UnexpectedChar('%', self.pos)),
                    }
                }
                d if d.is_ascii_digit() => {
                    let index = d.to_digit(10).unwrap();
                    self.pos += 1;
                    self.close_ring(index)?;
                }
                '[' => {
                    self.pos += 1;
                    let atom = self.parse_bracket_atom()?;
                    self.add_atom(atom);
                }
                _ => {
                    let atom = self.parse_organic_atom()?;
                    self.add_atom(atom);
                }
            }
        }

        if !self.branch_stack.is_empty() {
            return Err(SmilesError::UnbalancedBranch);
        }
        if let Some((&index, _)) = self.ring_bonds.iter().next() {
            return Err(SmilesError::UnmatchedRingBond(index));
        }
        if self.pending_bond.is_some() {
            return Err(SmilesError::DanglingBond);
        }
        if self.atoms.is_empty() {
            return Err(SmilesError::Empty);
        }

        Ok(Molecule {
            atoms: self.atoms,
            bonds: self.bonds,
        })
    }
}

/// Parse a SMILES string into a molecular graph.
pub fn parse_smiles(input: &str) -> Result<Molecule, SmilesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SmilesError::Empty);
    }
    Parser::new(trimmed).parse()
}
