//! Molecular descriptors for rule-based filtering.
//!
//! Four descriptors back the Lipinski rules: average molecular weight,
//! hydrogen-bond donor and acceptor counts, and a Crippen-style additive
//! logP. The logP table is condensed to per-element aliphatic/aromatic
//! contributions plus hydrogen terms; it tracks the full Wildman-Crippen
//! parameterization closely enough for threshold filtering.

use crate::chem::element::Element;
use crate::chem::smiles::Molecule;

/// Average molecular weight in g/mol, implicit and explicit hydrogens
/// included.
pub fn molecular_weight(mol: &Molecule) -> f64 {
    let heavy: f64 = mol.atoms.iter().map(|a| a.element.atomic_weight()).sum();
    heavy + f64::from(mol.total_hydrogens()) * Element::H.atomic_weight()
}

/// Hydrogen-bond donors: N or O atoms carrying at least one hydrogen.
pub fn h_bond_donors(mol: &Molecule) -> u32 {
    mol.atoms
        .iter()
        .enumerate()
        .filter(|(i, a)| {
            matches!(a.element, Element::N | Element::O) && mol.hydrogen_count(*i) > 0
        })
        .count() as u32
}

/// Hydrogen-bond acceptors: all N and O atoms.
pub fn h_bond_acceptors(mol: &Molecule) -> u32 {
    mol.atoms
        .iter()
        .filter(|a| matches!(a.element, Element::N | Element::O))
        .count() as u32
}

// Condensed Crippen atomic contributions
fn atom_log_p(element: Element, aromatic: bool) -> f64 {
    match (element, aromatic) {
        (Element::C, false) => 0.1441,
        (Element::C, true) => 0.1581,
        (Element::N, false) => -1.0190,
        (Element::N, true) => -0.3239,
        (Element::O, false) => -0.2893,
        (Element::O, true) => 0.1552,
        (Element::P, _) => 0.8612,
        (Element::S, false) => 0.6482,
        (Element::S, true) => 0.6237,
        (Element::F, _) => 0.4202,
        (Element::Cl, _) => 0.6895,
        (Element::Br, _) => 0.8456,
        (Element::I, _) => 0.8857,
        (Element::H, _) => 0.1230,
        _ => 0.0,
    }
}

const LOGP_H_ON_CARBON: f64 = 0.1230;
const LOGP_H_ON_HETEROATOM: f64 = -0.2677;

/// Octanol-water partition coefficient, additive over atoms and their
/// hydrogens.
pub fn log_p(mol: &Molecule) -> f64 {
    let mut total = 0.0;
    for (i, atom) in mol.atoms.iter().enumerate() {
        total += atom_log_p(atom.element, atom.aromatic);
        let h_term = if atom.element == Element::C {
            LOGP_H_ON_CARBON
        } else {
            LOGP_H_ON_HETEROATOM
        };
        total += f64::from(mol.hydrogen_count(i)) * h_term;
    }
    total
}
