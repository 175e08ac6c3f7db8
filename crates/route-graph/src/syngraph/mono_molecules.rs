//! Variante monopartita de moléculas: solo moléculas como nodos; cada
//! molécula consumida apunta a los productos de la ecuación que la
//! consume.

use indexmap::IndexMap;
use route_domain::{ChemicalEquation, ChemicalEquationConstructor, Molecule};
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::node::SynNode;
use crate::records::ReactionRecord;
use crate::syngraph::core::GraphCore;

/// Un grafo de solo moléculas no permite reconstruir las ecuaciones a
/// partir de las aristas, así que la variante conserva las ecuaciones con
/// las que se construyó para la extracción de reacciones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonopartiteMolSynGraph {
    pub(crate) core: GraphCore,
    pub(crate) equations: IndexMap<String, ChemicalEquation>,
}

impl MonopartiteMolSynGraph {
    pub const UID_PREFIX: &'static str = "MPM";

    pub fn new() -> Self {
        MonopartiteMolSynGraph::default()
    }

    pub fn from_reaction_records(records: &[ReactionRecord]) -> Result<Self, GraphError> {
        let constructor = ChemicalEquationConstructor::default();
        let mut graph = MonopartiteMolSynGraph::new();
        for record in records {
            let ce = constructor.build_from_reaction_string(&record.reaction_string, &record.inp_fmt)?;
            graph.add_equation(&ce);
        }
        Ok(graph)
    }

    /// Inserta las aristas molécula-a-molécula de una ecuación y la
    /// retiene para extracción.
    pub fn add_equation(&mut self, ce: &ChemicalEquation) {
        for mol in ce.consumed() {
            self.core.add_node(
                mol.clone().into(),
                ce.products().iter().cloned().map(SynNode::from),
            );
        }
        self.equations.entry(ce.uid().to_string()).or_insert_with(|| ce.clone());
    }

    pub fn add_node(&mut self, parent: SynNode, children: impl IntoIterator<Item = SynNode>) {
        self.core.add_node(parent, children);
    }

    /// Moléculas objetivo (sin sucesores).
    pub fn get_roots(&self) -> Vec<&Molecule> {
        self.core.sinks().filter_map(SynNode::as_molecule).collect()
    }

    /// Materiales de partida (sin aristas entrantes).
    pub fn get_leaves(&self) -> Vec<&Molecule> {
        self.core.sources_of_graph().filter_map(SynNode::as_molecule).collect()
    }

    /// Ecuaciones retenidas, en orden de inserción.
    pub fn equations(&self) -> Vec<&ChemicalEquation> {
        self.equations.values().collect()
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

impl PartialEq for MonopartiteMolSynGraph {
    fn eq(&self, other: &Self) -> bool {
        // La igualdad compara solo la estructura del grafo; las
        // ecuaciones retenidas la siguen.
        self.core.structure_eq(&other.core)
    }
}

impl Eq for MonopartiteMolSynGraph {}
