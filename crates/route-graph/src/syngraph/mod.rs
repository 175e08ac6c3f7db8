//! Las tres variantes de SynGraph sobre el mismo núcleo compartido.

pub mod bipartite;
pub mod core;
pub mod mono_molecules;
pub mod mono_reactions;

pub use bipartite::BipartiteSynGraph;
pub use self::core::GraphCore;
pub use mono_molecules::MonopartiteMolSynGraph;
pub use mono_reactions::MonopartiteReacSynGraph;

use serde::{Deserialize, Serialize};

use crate::translate::DataModel;

/// Una ruta sintética en cualquiera de sus tres representaciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynGraph {
    Bipartite(BipartiteSynGraph),
    MonopartiteReactions(MonopartiteReacSynGraph),
    MonopartiteMolecules(MonopartiteMolSynGraph),
}

impl SynGraph {
    /// Instancia vacía del modelo de datos pedido.
    pub fn empty(model: DataModel) -> Self {
        match model {
            DataModel::Bipartite => SynGraph::Bipartite(BipartiteSynGraph::new()),
            DataModel::MonopartiteReactions => {
                SynGraph::MonopartiteReactions(MonopartiteReacSynGraph::new())
            }
            DataModel::MonopartiteMolecules => {
                SynGraph::MonopartiteMolecules(MonopartiteMolSynGraph::new())
            }
        }
    }

    pub fn data_model(&self) -> DataModel {
        match self {
            SynGraph::Bipartite(_) => DataModel::Bipartite,
            SynGraph::MonopartiteReactions(_) => DataModel::MonopartiteReactions,
            SynGraph::MonopartiteMolecules(_) => DataModel::MonopartiteMolecules,
        }
    }

    /// Uid de la ruta, con el prefijo de la variante (`BP`/`MPR`/`MPM`).
    pub fn uid(&self) -> String {
        match self {
            SynGraph::Bipartite(g) => g.uid(),
            SynGraph::MonopartiteReactions(g) => g.uid(),
            SynGraph::MonopartiteMolecules(g) => g.uid(),
        }
    }

    pub fn graph(&self) -> &GraphCore {
        match self {
            SynGraph::Bipartite(g) => g.graph(),
            SynGraph::MonopartiteReactions(g) => g.graph(),
            SynGraph::MonopartiteMolecules(g) => g.graph(),
        }
    }

    pub fn add_source(&mut self, source: impl Into<String>) {
        match self {
            SynGraph::Bipartite(g) => g.add_source(source),
            SynGraph::MonopartiteReactions(g) => g.add_source(source),
            SynGraph::MonopartiteMolecules(g) => g.add_source(source),
        }
    }

    pub fn sources(&self) -> Vec<&str> {
        match self {
            SynGraph::Bipartite(g) => g.sources(),
            SynGraph::MonopartiteReactions(g) => g.sources(),
            SynGraph::MonopartiteMolecules(g) => g.sources(),
        }
    }
}

impl From<BipartiteSynGraph> for SynGraph {
    fn from(g: BipartiteSynGraph) -> Self {
        SynGraph::Bipartite(g)
    }
}

impl From<MonopartiteReacSynGraph> for SynGraph {
    fn from(g: MonopartiteReacSynGraph) -> Self {
        SynGraph::MonopartiteReactions(g)
    }
}

impl From<MonopartiteMolSynGraph> for SynGraph {
    fn from(g: MonopartiteMolSynGraph) -> Self {
        SynGraph::MonopartiteMolecules(g)
    }
}
