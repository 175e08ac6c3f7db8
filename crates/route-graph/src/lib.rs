//! route-graph: rutas sintéticas como grafos dirigidos con identidad
//! canónica.
//!
//! Una ruta es un grafo dirigido de moléculas y ecuaciones químicas en
//! dirección de síntesis, normalizado a una de tres representaciones
//! intercambiables: bipartita, monopartita de reacciones y monopartita de
//! moléculas. Los nodos se deduplican por clave de identidad y cada ruta
//! expone un uid determinista con prefijo de variante (`BP`/`MPR`/`MPM`).
pub mod errors;
pub mod extract;
pub mod hashing;
pub mod merge;
pub mod node;
pub mod records;
pub mod syngraph;
pub mod translate;

pub use errors::GraphError;
pub use extract::{extract_reactions_from_syngraph, ExtractedReaction};
pub use merge::merge_syngraph;
pub use node::SynNode;
pub use records::ReactionRecord;
pub use syngraph::{
    BipartiteSynGraph, GraphCore, MonopartiteMolSynGraph, MonopartiteReacSynGraph, SynGraph,
};
pub use translate::{syngraph_from_records, CaspTool, DataModel};
