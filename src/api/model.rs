//! The record shown to the user and the wire format it is decoded from.

use serde::{Deserialize, Serialize};

/// A fetched Pokémon.
///
/// Replaced wholesale by each successful fetch; never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    /// Sprite URL. Empty when the API has no default sprite.
    pub image_url: String,
    /// Type names in API order.
    pub types: Vec<String>,
    /// Base stats in API order.
    pub stats: Vec<Stat>,
}

/// One base stat entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub name: String,
    pub base_value: u32,
}

/// `GET /pokemon/{query}` response body. Only the fields we render.
#[derive(Debug, Deserialize)]
pub(crate) struct PokemonPayload {
    name: String,
    #[serde(default)]
    sprites: Sprites,
    types: Vec<TypeSlot>,
    stats: Vec<StatSlot>,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl From<PokemonPayload> for Record {
    fn from(payload: PokemonPayload) -> Self {
        Record {
            name: payload.name,
            image_url: payload.sprites.front_default.unwrap_or_default(),
            types: payload.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    base_value: slot.base_stat,
                })
                .collect(),
        }
    }
}
