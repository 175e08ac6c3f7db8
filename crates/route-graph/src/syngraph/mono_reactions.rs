//! Variante monopartita de reacciones: solo ecuaciones químicas como
//! nodos; una ecuación apunta a otra cuando su producto es consumido por
//! la segunda.

use indexmap::IndexSet;
use route_domain::{ChemicalEquation, ChemicalEquationConstructor, Molecule};
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::node::SynNode;
use crate::records::ReactionRecord;
use crate::syngraph::core::GraphCore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonopartiteReacSynGraph {
    pub(crate) core: GraphCore,
}

impl MonopartiteReacSynGraph {
    pub const UID_PREFIX: &'static str = "MPR";

    pub fn new() -> Self {
        MonopartiteReacSynGraph::default()
    }

    pub fn from_reaction_records(records: &[ReactionRecord]) -> Result<Self, GraphError> {
        let constructor = ChemicalEquationConstructor::default();
        let mut equations = Vec::with_capacity(records.len());
        for record in records {
            let ce = constructor.build_from_reaction_string(&record.reaction_string, &record.inp_fmt)?;
            // Duplicados de entrada colapsan por identidad
            if !equations.contains(&ce) {
                equations.push(ce);
            }
        }
        let mut graph = MonopartiteReacSynGraph::new();
        for ce in &equations {
            graph.core.add_node(ce.clone().into(), std::iter::empty());
            for other in &equations {
                if ce != other && feeds(ce, other) {
                    graph.core.add_node(ce.clone().into(), [other.clone().into()]);
                }
            }
        }
        Ok(graph)
    }

    pub fn add_node(&mut self, parent: SynNode, children: impl IntoIterator<Item = SynNode>) {
        self.core.add_node(parent, children);
    }

    /// Ecuaciones finales de la ruta (ninguna otra consume su producto).
    pub fn get_roots(&self) -> Vec<&ChemicalEquation> {
        self.core.sinks().filter_map(SynNode::as_chemical_equation).collect()
    }

    /// Ecuaciones iniciales (sus reactivos no los produce nadie aquí).
    pub fn get_leaves(&self) -> Vec<&ChemicalEquation> {
        self.core
            .sources_of_graph()
            .filter_map(SynNode::as_chemical_equation)
            .collect()
    }

    /// Moléculas objetivo, derivadas de las ecuaciones raíz: productos
    /// que ninguna ecuación del grafo consume. Esta variante no guarda
    /// nodos molécula, así que se inspeccionan los mapas de roles.
    pub fn get_molecule_roots(&self) -> Vec<&Molecule> {
        let consumed: IndexSet<&str> = self
            .equations()
            .into_iter()
            .flat_map(|ce| ce.consumed().map(Molecule::uid))
            .collect();
        let mut seen = IndexSet::new();
        self.get_roots()
            .into_iter()
            .flat_map(|ce| ce.products())
            .filter(|mol| !consumed.contains(mol.uid()) && seen.insert(mol.uid()))
            .collect()
    }

    /// Materiales de partida: moléculas consumidas por alguna ecuación y
    /// producidas por ninguna.
    pub fn get_molecule_leaves(&self) -> Vec<&Molecule> {
        let produced: IndexSet<&str> = self
            .equations()
            .into_iter()
            .flat_map(|ce| ce.products().iter().map(Molecule::uid))
            .collect();
        let mut seen = IndexSet::new();
        self.equations()
            .into_iter()
            .flat_map(|ce| ce.consumed())
            .filter(|mol| !produced.contains(mol.uid()) && seen.insert(mol.uid()))
            .collect()
    }

    /// Todas las ecuaciones del grafo en orden de inserción.
    pub fn equations(&self) -> Vec<&ChemicalEquation> {
        self.core.nodes().filter_map(SynNode::as_chemical_equation).collect()
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

/// `upstream` alimenta a `downstream` si alguno de sus productos aparece
/// entre lo que `downstream` consume.
fn feeds(upstream: &ChemicalEquation, downstream: &ChemicalEquation) -> bool {
    upstream
        .products()
        .iter()
        .any(|product| downstream.consumed().any(|mol| mol == product))
}

impl PartialEq for MonopartiteReacSynGraph {
    fn eq(&self, other: &Self) -> bool {
        self.core.structure_eq(&other.core)
    }
}

impl Eq for MonopartiteReacSynGraph {}
