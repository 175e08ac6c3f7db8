//! Contratos de cara al traductor: nombres de modelo de datos y de
//! herramientas CASP reconocidos, y el despacho de ingestión directa.

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::records::ReactionRecord;
use crate::syngraph::{
    BipartiteSynGraph, MonopartiteMolSynGraph, MonopartiteReacSynGraph, SynGraph,
};

/// Modelos de datos de salida que un traductor puede pedir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataModel {
    Bipartite,
    MonopartiteReactions,
    MonopartiteMolecules,
}

impl DataModel {
    pub fn from_name(name: &str) -> Result<Self, GraphError> {
        match name {
            "bipartite" => Ok(Self::Bipartite),
            "monopartite_reactions" => Ok(Self::MonopartiteReactions),
            "monopartite_molecules" => Ok(Self::MonopartiteMolecules),
            other => Err(GraphError::UnknownDataModel(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bipartite => "bipartite",
            Self::MonopartiteReactions => "monopartite_reactions",
            Self::MonopartiteMolecules => "monopartite_molecules",
        }
    }

    pub fn uid_prefix(&self) -> &'static str {
        match self {
            Self::Bipartite => BipartiteSynGraph::UID_PREFIX,
            Self::MonopartiteReactions => MonopartiteReacSynGraph::UID_PREFIX,
            Self::MonopartiteMolecules => MonopartiteMolSynGraph::UID_PREFIX,
        }
    }
}

/// Herramientas CASP cuyo formato crudo reconocen los traductores
/// externos; el nombre se usa como etiqueta de procedencia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaspTool {
    AzRetro,
    IbmRetro,
    MitRetro,
    Askcos,
}

impl CaspTool {
    pub fn from_name(name: &str) -> Result<Self, GraphError> {
        match name {
            "az_retro" => Ok(Self::AzRetro),
            "ibm_retro" => Ok(Self::IbmRetro),
            "mit_retro" => Ok(Self::MitRetro),
            "askcos" => Ok(Self::Askcos),
            other => Err(GraphError::UnknownCaspTool(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AzRetro => "az_retro",
            Self::IbmRetro => "ibm_retro",
            Self::MitRetro => "mit_retro",
            Self::Askcos => "askcos",
        }
    }
}

/// Construye una ruta del modelo pedido a partir de registros de
/// reacción.
pub fn syngraph_from_records(
    records: &[ReactionRecord],
    model: DataModel,
) -> Result<SynGraph, GraphError> {
    let graph = match model {
        DataModel::Bipartite => BipartiteSynGraph::from_reaction_records(records)?.into(),
        DataModel::MonopartiteReactions => {
            MonopartiteReacSynGraph::from_reaction_records(records)?.into()
        }
        DataModel::MonopartiteMolecules => {
            MonopartiteMolSynGraph::from_reaction_records(records)?.into()
        }
    };
    Ok(graph)
}
