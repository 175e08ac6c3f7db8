//! Núcleo compartido por las tres variantes de SynGraph.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::hashing::hash_with_prefix;
use crate::node::SynNode;

/// Mapa ordenado nodo -> sucesores, con deduplicación por clave de
/// identidad. Las aristas van en dirección de síntesis (reactivo ->
/// ecuación -> producto), así que los sumideros son el lado del objetivo
/// y las fuentes el de los materiales de partida.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphCore {
    nodes: IndexMap<String, SynNode>,
    edges: IndexMap<String, IndexSet<String>>,
    sources: IndexSet<String>,
}

impl GraphCore {
    pub fn new() -> Self {
        GraphCore::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registra el nodo si es nuevo y devuelve su uid.
    fn intern(&mut self, node: SynNode) -> String {
        let uid = node.uid().to_string();
        self.nodes.entry(uid.clone()).or_insert(node);
        self.edges.entry(uid.clone()).or_default();
        uid
    }

    /// Inserta un nodo con sus hijos. Si el padre ya existe, los hijos
    /// nuevos se unen a su conjunto de sucesores sin duplicar; volver a
    /// añadir un nodo ya presente con hijos ya presentes no cambia nada.
    pub fn add_node(&mut self, parent: SynNode, children: impl IntoIterator<Item = SynNode>) {
        let parent_uid = self.intern(parent);
        for child in children {
            let child_uid = self.intern(child);
            if let Some(successors) = self.edges.get_mut(&parent_uid) {
                successors.insert(child_uid);
            }
        }
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.nodes.contains_key(uid)
    }

    pub fn node(&self, uid: &str) -> Option<&SynNode> {
        self.nodes.get(uid)
    }

    /// Nodos en orden de inserción.
    pub fn nodes(&self) -> impl Iterator<Item = &SynNode> {
        self.nodes.values()
    }

    /// Sucesores de un nodo, en orden de inserción.
    pub fn successors(&self, uid: &str) -> impl Iterator<Item = &SynNode> {
        self.edges
            .get(uid)
            .into_iter()
            .flat_map(|successors| successors.iter())
            .filter_map(|child| self.nodes.get(child))
    }

    pub fn successor_uids(&self, uid: &str) -> Option<&IndexSet<String>> {
        self.edges.get(uid)
    }

    /// Pares (nodo, hijos) en orden de inserción, para fusión y export.
    pub fn entries(&self) -> impl Iterator<Item = (&SynNode, Vec<&SynNode>)> {
        self.edges.iter().filter_map(|(uid, successors)| {
            let node = self.nodes.get(uid)?;
            let children = successors.iter().filter_map(|child| self.nodes.get(child)).collect();
            Some((node, children))
        })
    }

    /// Nodos sin sucesores (sumideros): el lado del objetivo de síntesis.
    pub fn sinks(&self) -> impl Iterator<Item = &SynNode> {
        self.edges
            .iter()
            .filter(|(_, successors)| successors.is_empty())
            .filter_map(|(uid, _)| self.nodes.get(uid))
    }

    /// Nodos sin aristas entrantes (fuentes): materiales de partida.
    pub fn sources_of_graph(&self) -> impl Iterator<Item = &SynNode> {
        let reached: HashSet<&String> = self.edges.values().flatten().collect();
        self.edges
            .keys()
            .filter(move |uid| !reached.contains(uid))
            .filter_map(|uid| self.nodes.get(uid))
    }

    /// Uid determinista de la ruta: hash de las líneas `nodo>sucesores`
    /// ordenadas, con el prefijo de variante. Se recalcula en cada
    /// llamada, nunca se cachea.
    pub fn route_uid(&self, prefix: &str) -> String {
        let mut lines: Vec<String> = self
            .edges
            .iter()
            .map(|(uid, successors)| {
                let mut sorted: Vec<&str> = successors.iter().map(String::as_str).collect();
                sorted.sort_unstable();
                format!("{}>{}", uid, sorted.join(","))
            })
            .collect();
        lines.sort_unstable();
        hash_with_prefix(prefix, &lines.join(";"))
    }

    /// Igualdad estructural: mismos pares (nodo, sucesores) sin importar
    /// el orden de inserción ni la procedencia.
    pub fn structure_eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }

    /// Etiqueta de procedencia (herramienta CASP que produjo la ruta).
    pub fn add_source_tag(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn source_tags(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }

    /// Une otro grafo dentro de este, nodo a nodo en orden de inserción.
    pub fn merge_from(&mut self, other: &Self) {
        for (node, children) in other.entries() {
            self.add_node(node.clone(), children.into_iter().cloned());
        }
        for source in other.source_tags() {
            self.sources.insert(source.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> SynNode {
        SynNode::from(s)
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = GraphCore::new();
        g.add_node(raw("a"), [raw("b"), raw("c")]);
        let uid_before = g.route_uid("BP");
        let len_before = g.len();

        g.add_node(raw("a"), [raw("b"), raw("c")]);
        assert_eq!(g.len(), len_before);
        assert_eq!(g.route_uid("BP"), uid_before);
    }

    #[test]
    fn new_edges_extend_existing_node() {
        let mut g = GraphCore::new();
        g.add_node(raw("a"), [raw("b")]);
        g.add_node(raw("a"), [raw("c")]);
        assert_eq!(g.successor_uids("a").map(|s| s.len()), Some(2));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn children_become_nodes_too() {
        let mut g = GraphCore::new();
        g.add_node(raw("a"), [raw("b")]);
        assert!(g.contains("b"));
        assert_eq!(g.successor_uids("b").map(|s| s.len()), Some(0));
    }

    #[test]
    fn sinks_and_sources() {
        let mut g = GraphCore::new();
        g.add_node(raw("a"), [raw("b")]);
        g.add_node(raw("b"), [raw("c")]);
        let sinks: Vec<&str> = g.sinks().map(SynNode::uid).collect();
        assert_eq!(sinks, vec!["c"]);
        let sources: Vec<&str> = g.sources_of_graph().map(SynNode::uid).collect();
        assert_eq!(sources, vec!["a"]);
    }

    #[test]
    fn structure_eq_ignores_insertion_order_and_sources() {
        let mut g1 = GraphCore::new();
        g1.add_node(raw("a"), [raw("b"), raw("c")]);
        g1.add_source_tag("az_retro");

        let mut g2 = GraphCore::new();
        g2.add_node(raw("a"), [raw("c")]);
        g2.add_node(raw("a"), [raw("b")]);
        assert!(g1.structure_eq(&g2));
        assert_eq!(g1.route_uid("BP"), g2.route_uid("BP"));
    }

    #[test]
    fn mutation_changes_route_uid() {
        let mut g = GraphCore::new();
        g.add_node(raw("a"), [raw("b")]);
        let before = g.route_uid("BP");
        g.add_node(raw("b"), [raw("c")]);
        assert_ne!(g.route_uid("BP"), before);
    }

    #[test]
    fn merge_from_unions_structure_and_sources() {
        let mut g1 = GraphCore::new();
        g1.add_node(raw("a"), [raw("b")]);
        g1.add_source_tag("az_retro");

        let mut g2 = GraphCore::new();
        g2.add_node(raw("a"), [raw("c")]);
        g2.add_source_tag("ibm_retro");

        g1.merge_from(&g2);
        assert_eq!(g1.successor_uids("a").map(|s| s.len()), Some(2));
        let tags: Vec<&str> = g1.source_tags().collect();
        assert_eq!(tags, vec!["az_retro", "ibm_retro"]);
    }
}
