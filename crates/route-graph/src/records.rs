//! Registros de ingestión directa.

use serde::{Deserialize, Deserializer, Serialize};

fn default_fmt() -> String {
    "smiles".to_string()
}

/// Los esquemas de proveedor traen el identificador como número o como
/// texto; ambos se normalizan a texto.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Un registro `{id, reaction_string}` tal como lo entregan los
/// traductores de salidas CASP. Los alias cubren los nombres de campo de
/// los esquemas de proveedor (`query_id`, `output_string`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    #[serde(alias = "query_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "output_string")]
    pub reaction_string: String,
    #[serde(default = "default_fmt")]
    pub inp_fmt: String,
}

impl ReactionRecord {
    pub fn new(id: impl Into<String>, reaction_string: impl Into<String>) -> Self {
        ReactionRecord {
            id: id.into(),
            reaction_string: reaction_string.into(),
            inp_fmt: default_fmt(),
        }
    }
}
