use crate::utils::error::{ArenaError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("poke-arena/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turns a non-2xx response into an error, keeping 404 distinguishable.
pub async fn check_status(response: Response, entity: &str, id: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    tracing::debug!("{} responded with {}", url, status);

    match status {
        StatusCode::NOT_FOUND => Err(ArenaError::not_found(entity, id)),
        StatusCode::CONFLICT => {
            let message = error_message(response).await;
            Err(ArenaError::Conflict { message })
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            let message = error_message(response).await;
            Err(ArenaError::ValidationError { message })
        }
        _ => Err(ArenaError::UpstreamStatus {
            url,
            status: status.as_u16(),
        }),
    }
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

// 後端錯誤格式: {"error": "..."}
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
        Err(_) => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://pokeapi.co/api/v2/", "/pokemon/1"),
            "https://pokeapi.co/api/v2/pokemon/1"
        );
        assert_eq!(join_url("http://localhost:3000", "team"), "http://localhost:3000/team");
    }
}
