// route-domain library entry point
pub mod chemical_equation;
pub mod error;
pub mod molecule;
pub mod policy;

pub use chemical_equation::{ChemicalEquation, ChemicalEquationConstructor, Role, RoleMap};
pub use error::DomainError;
pub use molecule::{Molecule, MoleculeConstructor};
pub use policy::{EquationIdentityPolicy, MoleculeIdentityPolicy};
