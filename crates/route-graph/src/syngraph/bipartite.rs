//! Variante bipartita: moléculas y ecuaciones químicas alternan a lo
//! largo de las aristas.

use route_domain::{ChemicalEquation, ChemicalEquationConstructor, Molecule};
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::node::SynNode;
use crate::records::ReactionRecord;
use crate::syngraph::core::GraphCore;

/// Ruta sintética con nodos de dos tipos: cada molécula consumida apunta
/// a la ecuación que la consume y cada ecuación apunta a sus productos.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BipartiteSynGraph {
    pub(crate) core: GraphCore,
}

impl BipartiteSynGraph {
    pub const UID_PREFIX: &'static str = "BP";

    pub fn new() -> Self {
        BipartiteSynGraph::default()
    }

    /// Construye la ruta a partir de registros `{id, reaction_string}`.
    /// El cableado es determinista para una misma entrada: las aristas
    /// se derivan de la identidad de las moléculas, no del orden de la
    /// lista.
    pub fn from_reaction_records(records: &[ReactionRecord]) -> Result<Self, GraphError> {
        let constructor = ChemicalEquationConstructor::default();
        let mut graph = BipartiteSynGraph::new();
        for record in records {
            let ce = constructor.build_from_reaction_string(&record.reaction_string, &record.inp_fmt)?;
            graph.add_equation(&ce);
        }
        Ok(graph)
    }

    /// Inserta una ecuación con todas sus moléculas y aristas.
    pub fn add_equation(&mut self, ce: &ChemicalEquation) {
        for mol in ce.consumed() {
            self.core.add_node(mol.clone().into(), [ce.clone().into()]);
        }
        self.core
            .add_node(ce.clone().into(), ce.products().iter().cloned().map(SynNode::from));
    }

    pub fn add_node(&mut self, parent: SynNode, children: impl IntoIterator<Item = SynNode>) {
        self.core.add_node(parent, children);
    }

    /// Moléculas objetivo de la ruta (sin ecuación que las consuma).
    pub fn get_roots(&self) -> Vec<&Molecule> {
        self.core.sinks().filter_map(SynNode::as_molecule).collect()
    }

    /// Materiales de partida (moléculas que ninguna ecuación produce).
    pub fn get_leaves(&self) -> Vec<&Molecule> {
        self.core.sources_of_graph().filter_map(SynNode::as_molecule).collect()
    }

    pub fn uid(&self) -> String {
        self.core.route_uid(Self::UID_PREFIX)
    }

    pub fn graph(&self) -> &GraphCore {
        &self.core
    }

    pub fn add_source(&mut self, source: impl Into<String>) {
        self.core.add_source_tag(source);
    }

    pub fn sources(&self) -> Vec<&str> {
        self.core.source_tags().collect()
    }
}

impl PartialEq for BipartiteSynGraph {
    fn eq(&self, other: &Self) -> bool {
        self.core.structure_eq(&other.core)
    }
}

impl Eq for BipartiteSynGraph {}
