//! Test utilities for Booking Directory
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Record factories and form builders

use chrono::NaiveDateTime;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::{Config, LogFormat},
    db::entities::{artist, show, venue},
    forms::{ArtistInput, VenueInput},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database. SQLite memory databases are
/// held on a single pooled connection, so a test must not query `db` while a
/// unit of work on it is still open.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
        log_format: LogFormat::Pretty,
        run_migrations: true,
    }
}

pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Insert a venue with placeholder contact details
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set("1015 Folsom Street".to_string()),
        phone: Set("123-123-1234".to_string()),
        genres: Set(r#"["Jazz"]"#.to_string()),
        image_link: Set(None),
        facebook_link: Set(None),
        website: Set(None),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set("326-123-5000".to_string()),
        genres: Set(r#"["Rock n Roll"]"#.to_string()),
        image_link: Set(None),
        facebook_link: Set(None),
        website: Set(None),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

pub async fn create_test_show(
    db: &DatabaseConnection,
    venue_id: i32,
    artist_id: i32,
    start_time: NaiveDateTime,
) -> show::Model {
    let show = show::ActiveModel {
        venue_id: Set(venue_id),
        artist_id: Set(artist_id),
        start_time: Set(start_time),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}

// ============================================================================
// Input Builders
// ============================================================================

pub fn venue_input(name: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        image_link: None,
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        website: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}

pub fn artist_input(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        image_link: None,
        facebook_link: None,
        website: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

/// A complete, valid venue form submission
pub fn venue_form(name: &str) -> Vec<(String, String)> {
    pairs(&[
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("image_link", ""),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("website", ""),
        ("seeking_talent", "True"),
        ("seeking_description", "We are on the lookout for a local artist"),
    ])
}

pub fn artist_form(name: &str) -> Vec<(String, String)> {
    pairs(&[
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("phone", "326-123-5000"),
        ("genres", "Rock n Roll"),
        ("image_link", ""),
        ("facebook_link", ""),
        ("website", ""),
        ("seeking_venue", "False"),
        ("seeking_description", ""),
    ])
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Urlencode pairs for a request body
pub fn encode_form(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", form_escape(k), form_escape(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn form_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}
