//! Políticas de identidad configurables.
//!
//! La política decide qué rasgos estructurales participan en la clave de
//! identidad de un nodo. Cambiar la política cambia qué estructuras
//! comparan iguales; es un eje de configuración deliberado, no un bug.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Política de identidad para moléculas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoleculeIdentityPolicy {
    /// El SMILES canónico es la clave de identidad.
    #[default]
    CanonicalSmiles,
}

impl MoleculeIdentityPolicy {
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        match name {
            "smiles" | "canonical_smiles" => Ok(Self::CanonicalSmiles),
            other => Err(DomainError::UnknownIdentityPolicy(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CanonicalSmiles => "canonical_smiles",
        }
    }
}

/// Política de identidad para ecuaciones químicas: decide si los agentes
/// (reagents) participan o no en la clave de identidad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationIdentityPolicy {
    /// Solo reactivos y productos.
    #[default]
    ReactantsProducts,
    /// Reactivos, agentes y productos.
    ReactantsReagentsProducts,
}

impl EquationIdentityPolicy {
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        match name {
            "r_p" => Ok(Self::ReactantsProducts),
            "r_r_p" => Ok(Self::ReactantsReagentsProducts),
            other => Err(DomainError::UnknownIdentityPolicy(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ReactantsProducts => "r_p",
            Self::ReactantsReagentsProducts => "r_r_p",
        }
    }
}
