use chrono::Utc;
use httpmock::prelude::*;
use poke_arena::core::ArenaBackend;
use poke_arena::domain::model::{NewBattleRecord, NewRosterEntry};
use poke_arena::{ArenaError, HttpArenaBackend};
use serde_json::json;

fn new_entry(pokemon_id: u32, name: &str) -> NewRosterEntry {
    NewRosterEntry {
        pokemon_id,
        name: name.to_string(),
        image: None,
        types: vec!["electric".to_string()],
        stats: vec![],
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn test_list_roster() {
    let server = MockServer::start_async().await;
    let team_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/team");
            then.status(200).json_body(json!([
                {"id": 1, "pokemonId": 25, "name": "pikachu", "timestamp": "2024-05-01T10:00:00.000Z"},
                {"id": 2, "pokemonId": 1, "name": "bulbasaur", "timestamp": "2024-05-01T10:05:00.000Z"}
            ]));
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let roster = backend.list_roster().await.unwrap();

    team_mock.assert_async().await;
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].pokemon_id, 25);
    assert_eq!(roster[1].name, "bulbasaur");
}

#[tokio::test]
async fn test_add_roster_entry_posts_camel_case() {
    let server = MockServer::start_async().await;
    let post_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/team")
                .json_body_partial(r#"{"pokemonId": 25, "name": "pikachu"}"#);
            then.status(201).json_body(json!({
                "id": 7,
                "pokemonId": 25,
                "name": "pikachu",
                "types": ["electric"],
                "timestamp": "2024-05-01T10:00:00Z"
            }));
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let stored = backend
        .add_roster_entry(&new_entry(25, "pikachu"))
        .await
        .unwrap();

    post_mock.assert_async().await;
    assert_eq!(stored.id, 7);
    assert_eq!(stored.types, ["electric"]);
}

#[tokio::test]
async fn test_conflict_carries_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/team");
            then.status(409)
                .json_body(json!({"error": "Roster is full: at most 6 entries allowed"}));
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let err = backend
        .add_roster_entry(&new_entry(150, "mewtwo"))
        .await
        .unwrap_err();

    match err {
        ArenaError::Conflict { message } => assert!(message.contains("full")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_unknown_entry_is_not_found() {
    let server = MockServer::start_async().await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/team/42");
            then.status(404);
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let err = backend.remove_roster_entry(42).await.unwrap_err();

    delete_mock.assert_async().await;
    assert!(matches!(err, ArenaError::NotFound { .. }));
}

#[tokio::test]
async fn test_record_and_delete_battle() {
    let server = MockServer::start_async().await;
    let post_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/battles")
                .json_body_partial(r#"{"pokemon1": "bulbasaur", "winner": "charmander"}"#);
            then.status(201).json_body(json!({
                "id": 3,
                "pokemon1": "bulbasaur",
                "pokemon2": "charmander",
                "winner": "charmander",
                "timestamp": "2024-05-01T10:00:00Z",
                "battleDetails": []
            }));
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/battles/3");
            then.status(204);
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let record = NewBattleRecord {
        pokemon1: "bulbasaur".to_string(),
        pokemon2: "charmander".to_string(),
        winner: "charmander".to_string(),
        timestamp: Utc::now(),
        battle_details: Some(vec![]),
    };

    let stored = backend.record_battle(&record).await.unwrap();
    assert_eq!(stored.id, 3);
    backend.delete_battle(stored.id).await.unwrap();

    post_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_upstream_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/battles");
            then.status(503);
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let err = backend.list_battles().await.unwrap_err();
    assert!(matches!(err, ArenaError::UpstreamStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_list_roster_reads_entries_in_catalog_shape() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/team");
            then.status(200).json_body(json!([
                {
                    "id": 1,
                    "pokemonId": 25,
                    "name": "pikachu",
                    "image": "https://img/25.png",
                    "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
                    "stats": [
                        {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                        {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}}
                    ]
                },
                {"id": 2, "pokemonId": 4, "name": "charmander", "image": null}
            ]));
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let roster = backend.list_roster().await.unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].types, ["electric"]);
    assert_eq!(roster[0].stats[1].name, "attack");
    assert_eq!(roster[0].stats[1].base_stat, 55);
    assert!(roster[1].stats.is_empty());
}

#[tokio::test]
async fn test_unprocessable_is_validation_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/battles");
            then.status(422)
                .json_body(json!({"error": "winner 'mew' is neither 'a' nor 'b'"}));
        })
        .await;

    let backend = HttpArenaBackend::new(server.base_url()).unwrap();
    let record = NewBattleRecord {
        pokemon1: "a".to_string(),
        pokemon2: "b".to_string(),
        winner: "mew".to_string(),
        timestamp: Utc::now(),
        battle_details: None,
    };
    let err = backend.record_battle(&record).await.unwrap_err();

    match &err {
        ArenaError::ValidationError { message } => assert!(message.contains("neither")),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.severity(), poke_arena::utils::error::ErrorSeverity::High);
}
