//! Pokemon models.

use serde::Deserialize;

/// `GET /pokemon/{name}`, reduced to what `inspect` shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: StatName,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeName {
    pub name: String,
}
