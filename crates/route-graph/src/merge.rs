//! Motor de fusión: une varias rutas del mismo modelo de datos en un
//! único grafo, deduplicando nodos y aristas por identidad.

use crate::errors::GraphError;
use crate::syngraph::{
    BipartiteSynGraph, MonopartiteMolSynGraph, MonopartiteReacSynGraph, SynGraph,
};
use crate::translate::DataModel;

/// Fusiona una lista no vacía de rutas de la misma variante concreta.
///
/// Los nodos se deduplican por clave de identidad y los conjuntos de
/// sucesores se unen; el orden primero-visto se conserva a través de las
/// fusiones. La procedencia del resultado es la unión de las etiquetas
/// de origen de las entradas.
///
/// # Errores
/// `GraphError::EmptyRouteList` con la lista vacía y
/// `GraphError::MixedDataModels` si las variantes difieren.
pub fn merge_syngraph(routes: &[SynGraph]) -> Result<SynGraph, GraphError> {
    let first = routes.first().ok_or(GraphError::EmptyRouteList)?;
    match first.data_model() {
        DataModel::Bipartite => {
            let mut merged = BipartiteSynGraph::new();
            for route in routes {
                let SynGraph::Bipartite(graph) = route else {
                    return Err(mixed(DataModel::Bipartite, route));
                };
                merged.core.merge_from(&graph.core);
            }
            Ok(merged.into())
        }
        DataModel::MonopartiteReactions => {
            let mut merged = MonopartiteReacSynGraph::new();
            for route in routes {
                let SynGraph::MonopartiteReactions(graph) = route else {
                    return Err(mixed(DataModel::MonopartiteReactions, route));
                };
                merged.core.merge_from(&graph.core);
            }
            Ok(merged.into())
        }
        DataModel::MonopartiteMolecules => {
            let mut merged = MonopartiteMolSynGraph::new();
            for route in routes {
                let SynGraph::MonopartiteMolecules(graph) = route else {
                    return Err(mixed(DataModel::MonopartiteMolecules, route));
                };
                merged.core.merge_from(&graph.core);
                for (uid, ce) in &graph.equations {
                    merged.equations.entry(uid.clone()).or_insert_with(|| ce.clone());
                }
            }
            Ok(merged.into())
        }
    }
}

fn mixed(expected: DataModel, found: &SynGraph) -> GraphError {
    GraphError::MixedDataModels {
        expected: expected.name(),
        found: found.data_model().name(),
    }
}
