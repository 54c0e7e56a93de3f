use crate::adapters::http::{build_client, check_status, join_url, read_json};
use crate::domain::model::{CatalogPage, Creature, Sprites, StatValue};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::domain::services::catalog::{clamp_page, offset, total_pages};
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use serde::Deserialize;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Deserialize)]
struct ListResponse {
    count: usize,
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct PokemonWire {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    stats: Vec<StatWire>,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    sprites: SpritesWire,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(default)]
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatWire {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct SpritesWire {
    front_default: Option<String>,
    back_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ArtworkWire>,
}

#[derive(Debug, Default, Deserialize)]
struct ArtworkWire {
    front_default: Option<String>,
}

impl From<PokemonWire> for Creature {
    fn from(wire: PokemonWire) -> Self {
        let mut types = wire.types;
        types.sort_by_key(|t| t.slot);

        Creature {
            id: wire.id,
            name: wire.name,
            height: wire.height,
            weight: wire.weight,
            types: types.into_iter().map(|t| t.kind.name).collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| StatValue::new(s.stat.name, s.base_stat))
                .collect(),
            abilities: wire.abilities.into_iter().map(|a| a.ability.name).collect(),
            sprites: Sprites {
                front_default: wire.sprites.front_default,
                back_default: wire.sprites.back_default,
                official_artwork: wire
                    .sprites
                    .other
                    .and_then(|o| o.official_artwork)
                    .and_then(|a| a.front_default),
            },
        }
    }
}

/// Client for the public creature REST API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    page_size: usize,
    max_pages: usize,
    concurrent_requests: usize,
}

impl PokeApiClient {
    pub fn new(
        base_url: impl Into<String>,
        page_size: usize,
        max_pages: usize,
        concurrent_requests: usize,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
            page_size,
            max_pages,
            concurrent_requests: concurrent_requests.max(1),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.catalog_url(),
            config.page_size(),
            config.max_pages(),
            config.concurrent_requests(),
        )
    }

    async fn list(&self, page: usize) -> Result<ListResponse> {
        let url = format!(
            "{}?limit={}&offset={}",
            join_url(&self.base_url, "pokemon"),
            self.page_size,
            offset(page, self.page_size)
        );
        tracing::debug!("Fetching catalog page {} from {}", page, url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, "Catalog page", &page.to_string()).await?;
        read_json(response).await
    }

    async fn fetch_url(&self, url: &str, id: &str) -> Result<Creature> {
        let response = self.client.get(url).send().await?;
        let response = check_status(response, "Creature", id).await?;
        let wire: PokemonWire = read_json(response).await?;
        Ok(wire.into())
    }

    /// Fetches every URL concurrently; order is kept and the first failure wins.
    async fn fetch_all(&self, targets: Vec<(String, String)>) -> Result<Vec<Creature>> {
        stream::iter(targets)
            .map(|(url, id)| async move { self.fetch_url(&url, &id).await })
            .buffered(self.concurrent_requests)
            .try_collect()
            .await
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_page(&self, page: usize) -> Result<CatalogPage> {
        let mut page = clamp_page(page, self.max_pages);
        let mut listing = self.list(page).await?;

        let total = total_pages(listing.count, self.page_size, self.max_pages);
        if total > 0 && page > total {
            page = total;
            listing = self.list(page).await?;
        }

        let targets = listing
            .results
            .into_iter()
            .map(|r| (r.url, r.name))
            .collect();
        let creatures = self.fetch_all(targets).await?;

        tracing::info!(
            "Loaded catalog page {}/{} ({} creatures)",
            page,
            total,
            creatures.len()
        );

        Ok(CatalogPage {
            page,
            total_pages: total,
            total_count: listing
                .count
                .min(self.max_pages.saturating_mul(self.page_size)),
            creatures,
        })
    }

    async fn fetch_creature(&self, id: u32) -> Result<Creature> {
        let url = join_url(&self.base_url, &format!("pokemon/{}", id));
        self.fetch_url(&url, &id.to_string()).await
    }

    async fn fetch_many(&self, ids: &[u32]) -> Result<Vec<Creature>> {
        let targets = ids
            .iter()
            .map(|id| {
                (
                    join_url(&self.base_url, &format!("pokemon/{}", id)),
                    id.to_string(),
                )
            })
            .collect();
        self.fetch_all(targets).await
    }
}
