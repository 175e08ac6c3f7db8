//! synroutes: rutas sintéticas normalizadas con identidad canónica.
//!
//! Fachada del workspace: reexporta el modelo de nodos (`route-domain`),
//! las variantes de grafo con su fusión y extracción (`route-graph`) y la
//! canonicalización de cadenas (`route-canon`).
pub use route_canon as canon;
pub use route_domain as domain;
pub use route_graph as graph;

pub use route_domain::{
    ChemicalEquation, ChemicalEquationConstructor, DomainError, EquationIdentityPolicy, Molecule,
    MoleculeConstructor, MoleculeIdentityPolicy, Role,
};
pub use route_graph::{
    extract_reactions_from_syngraph, merge_syngraph, syngraph_from_records, BipartiteSynGraph,
    CaspTool, DataModel, ExtractedReaction, GraphError, MonopartiteMolSynGraph,
    MonopartiteReacSynGraph, ReactionRecord, SynGraph, SynNode,
};
