//! Aplanado de rutas a listas de reacciones.

use serde::{Deserialize, Serialize};

use crate::node::SynNode;
use crate::syngraph::SynGraph;

/// Reacción aplanada lista para consumidores externos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedReaction {
    pub id: String,
    pub input_string: String,
}

/// Extrae las ecuaciones químicas de cualquier variante de SynGraph como
/// registros ordenados por SMILES canónico con ids secuenciales.
///
/// La misma ruta subyacente produce exactamente la misma lista sin
/// importar en qué variante esté expresada: la bipartita y la
/// monopartita de reacciones leen sus nodos ecuación, la monopartita de
/// moléculas lee las ecuaciones que retuvo al construirse.
pub fn extract_reactions_from_syngraph(syngraph: &SynGraph) -> Vec<ExtractedReaction> {
    let mut smiles: Vec<&str> = match syngraph {
        SynGraph::Bipartite(g) => g
            .graph()
            .nodes()
            .filter_map(SynNode::as_chemical_equation)
            .map(|ce| ce.smiles())
            .collect(),
        SynGraph::MonopartiteReactions(g) => {
            g.equations().into_iter().map(|ce| ce.smiles()).collect()
        }
        SynGraph::MonopartiteMolecules(g) => {
            g.equations().into_iter().map(|ce| ce.smiles()).collect()
        }
    };
    smiles.sort_unstable();
    smiles.dedup();
    smiles
        .into_iter()
        .enumerate()
        .map(|(index, input_string)| ExtractedReaction {
            id: index.to_string(),
            input_string: input_string.to_string(),
        })
        .collect()
}
