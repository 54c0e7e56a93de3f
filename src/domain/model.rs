use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub base_stat: u32,
}

impl StatValue {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub official_artwork: Option<String>,
}

/// A catalog creature with the fields the arena cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Type names in slot order.
    pub types: Vec<String>,
    pub stats: Vec<StatValue>,
    pub abilities: Vec<String>,
    pub sprites: Sprites,
}

impl Creature {
    /// Base value of a named stat, or 0 when the creature doesn't list it.
    pub fn stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.base_stat)
            .unwrap_or(0)
    }

    /// Artwork first, then the plain front sprite.
    pub fn image(&self) -> Option<&str> {
        self.sprites
            .official_artwork
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub creatures: Vec<Creature>,
}

#[derive(Deserialize)]
struct NamedRef {
    name: String,
}

// 舊版前端直接送出 PokeAPI 的 types/stats 結構，兩種格式都要能讀
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeShape {
    Flat(String),
    Slot {
        #[serde(rename = "type")]
        kind: NamedRef,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatShape {
    Flat(StatValue),
    Wire { base_stat: u32, stat: NamedRef },
}

fn type_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<Vec<TypeShape>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|t| match t {
            TypeShape::Flat(name) => name,
            TypeShape::Slot { kind } => kind.name,
        })
        .collect())
}

fn stat_values<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<StatValue>, D::Error> {
    let raw = Option::<Vec<StatShape>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|s| match s {
            StatShape::Flat(stat) => stat,
            StatShape::Wire { base_stat, stat } => StatValue::new(stat.name, base_stat),
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRosterEntry {
    pub pokemon_id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "type_names")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "stat_values")]
    pub stats: Vec<StatValue>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl NewRosterEntry {
    pub fn from_creature(creature: &Creature, timestamp: DateTime<Utc>) -> Self {
        Self {
            pokemon_id: creature.id,
            name: creature.name.clone(),
            image: creature.image().map(str::to_string),
            types: creature.types.clone(),
            stats: creature.stats.clone(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: u64,
    pub pokemon_id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "type_names")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "stat_values")]
    pub stats: Vec<StatValue>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl RosterEntry {
    pub fn from_new(id: u64, entry: NewRosterEntry) -> Self {
        Self {
            id,
            pokemon_id: entry.pokemon_id,
            name: entry.name,
            image: entry.image,
            types: entry.types,
            stats: entry.stats,
            timestamp: entry.timestamp,
        }
    }
}

/// Name used in a round when both sides had the same value.
pub const TIE: &str = "tie";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub stat: String,
    pub pokemon1_value: u32,
    pub pokemon2_value: u32,
    /// Winner's name or [`TIE`].
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBattleRecord {
    pub pokemon1: String,
    pub pokemon2: String,
    pub winner: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battle_details: Option<Vec<Round>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub id: u64,
    pub pokemon1: String,
    pub pokemon2: String,
    pub winner: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battle_details: Option<Vec<Round>>,
}

impl BattleRecord {
    pub fn from_new(id: u64, record: NewBattleRecord) -> Self {
        Self {
            id,
            pokemon1: record.pokemon1,
            pokemon2: record.pokemon2,
            winner: record.winner,
            timestamp: record.timestamp,
            battle_details: record.battle_details,
        }
    }

    pub fn loser(&self) -> &str {
        if self.winner == self.pokemon1 {
            &self.pokemon2
        } else {
            &self.pokemon1
        }
    }
}

/// Outcome of scoring two creatures against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    pub winner: String,
    pub loser: String,
    pub rounds: Vec<Round>,
    pub wins1: usize,
    pub wins2: usize,
    pub total_stats1: u32,
    pub total_stats2: u32,
}

impl BattleReport {
    pub fn to_record(
        &self,
        pokemon1: &str,
        pokemon2: &str,
        timestamp: DateTime<Utc>,
    ) -> NewBattleRecord {
        NewBattleRecord {
            pokemon1: pokemon1.to_string(),
            pokemon2: pokemon2.to_string(),
            winner: self.winner.clone(),
            timestamp,
            battle_details: Some(self.rounds.clone()),
        }
    }
}
