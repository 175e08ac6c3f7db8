//! Errores específicos del modelo de grafos.

use route_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot merge routes with mixed data models: expected {expected}, found {found}")]
    MixedDataModels { expected: &'static str, found: &'static str },
    #[error("cannot merge an empty list of routes")]
    EmptyRouteList,
    #[error("unknown output data model '{0}'")]
    UnknownDataModel(String),
    #[error("unknown CASP tool '{0}'")]
    UnknownCaspTool(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
