//! route-canon: canonicalización ligera de cadenas SMILES.
//!
//! Este crate es el "identity provider" del workspace: dado un SMILES
//! molecular o de reacción produce una forma canónica estable sobre la
//! que el resto del sistema calcula claves de identidad. Trabaja a nivel
//! de cadena (validación, orden de fragmentos, separación de roles); la
//! percepción química real queda fuera de alcance.
pub mod error;
pub mod smiles;

pub use error::CanonError;
pub use smiles::{canonical_smiles, ReactionParts};
