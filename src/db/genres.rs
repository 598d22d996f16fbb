//! Genre tags are stored as a JSON array in a text column so the schema is
//! identical on PostgreSQL and SQLite.

use crate::db::entities::{artist, venue};
use crate::error::Result;

pub fn encode(genres: &[String]) -> Result<String> {
    Ok(serde_json::to_string(genres)?)
}

pub fn decode(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

impl venue::Model {
    pub fn genre_list(&self) -> Result<Vec<String>> {
        decode(&self.genres)
    }
}

impl artist::Model {
    pub fn genre_list(&self) -> Result<Vec<String>> {
        decode(&self.genres)
    }
}
