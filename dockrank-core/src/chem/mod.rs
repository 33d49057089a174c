//! Minimal cheminformatics layer: SMILES parsing, descriptors, and the
//! Lipinski rule set.

pub mod descriptors;
pub mod element;
pub mod lipinski;
pub mod smiles;

pub use descriptors::{h_bond_acceptors, h_bond_donors, log_p, molecular_weight};
pub use element::Element;
pub use lipinski::{evaluate_batch, lipinski_pass, lipinski_trial, LipinskiTrial};
pub use smiles::{parse_smiles, Molecule, SmilesError};
