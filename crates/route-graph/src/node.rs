//! Nodos de una ruta sintética.

use route_domain::{ChemicalEquation, Molecule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Un nodo del grafo: molécula, ecuación química o un marcador crudo
/// todavía sin construir (la cadena tal cual actúa como identidad).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynNode {
    Molecule(Molecule),
    ChemicalEquation(ChemicalEquation),
    Unmapped(String),
}

impl SynNode {
    /// Clave estable usada como llave del grafo.
    pub fn uid(&self) -> &str {
        match self {
            SynNode::Molecule(mol) => mol.uid(),
            SynNode::ChemicalEquation(ce) => ce.uid(),
            SynNode::Unmapped(raw) => raw.as_str(),
        }
    }

    /// Forma legible del nodo (SMILES o cadena cruda).
    pub fn display_string(&self) -> &str {
        match self {
            SynNode::Molecule(mol) => mol.smiles(),
            SynNode::ChemicalEquation(ce) => ce.smiles(),
            SynNode::Unmapped(raw) => raw.as_str(),
        }
    }

    pub fn as_molecule(&self) -> Option<&Molecule> {
        match self {
            SynNode::Molecule(mol) => Some(mol),
            _ => None,
        }
    }

    pub fn as_chemical_equation(&self) -> Option<&ChemicalEquation> {
        match self {
            SynNode::ChemicalEquation(ce) => Some(ce),
            _ => None,
        }
    }

    pub fn is_molecule(&self) -> bool {
        matches!(self, SynNode::Molecule(_))
    }

    pub fn is_chemical_equation(&self) -> bool {
        matches!(self, SynNode::ChemicalEquation(_))
    }
}

impl From<Molecule> for SynNode {
    fn from(mol: Molecule) -> Self {
        SynNode::Molecule(mol)
    }
}

impl From<ChemicalEquation> for SynNode {
    fn from(ce: ChemicalEquation) -> Self {
        SynNode::ChemicalEquation(ce)
    }
}

impl From<&str> for SynNode {
    fn from(raw: &str) -> Self {
        SynNode::Unmapped(raw.to_string())
    }
}

impl From<String> for SynNode {
    fn from(raw: String) -> Self {
        SynNode::Unmapped(raw)
    }
}

impl fmt::Display for SynNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynNode::Molecule(mol) => mol.fmt(f),
            SynNode::ChemicalEquation(ce) => ce.fmt(f),
            SynNode::Unmapped(raw) => write!(f, "<unmapped: {}>", raw),
        }
    }
}
