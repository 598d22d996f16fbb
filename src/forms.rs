//! Form submissions for venues, artists and shows.
//!
//! Submissions arrive urlencoded as key/value pairs; `genres` may repeat.
//! Everything is checked here so the booking service only ever sees typed,
//! validated input.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Raw submitted pairs, in submission order.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Present, not blank and at most `max_len` characters. The value is
    /// kept as submitted.
    pub fn required(&self, name: &str, max_len: usize) -> Result<String> {
        match self.get(name) {
            Some(value) if !value.trim().is_empty() => {
                check_len(name, value, max_len)?;
                Ok(value.to_string())
            }
            Some(_) => Err(AppError::validation(format!("{} must not be empty", name))),
            None => Err(AppError::validation(format!("{} is required", name))),
        }
    }

    /// Present, possibly empty. Empty becomes `None`.
    pub fn optional(&self, name: &str, max_len: usize) -> Result<Option<String>> {
        match self.get(name) {
            Some(value) if value.trim().is_empty() => Ok(None),
            Some(value) => {
                check_len(name, value, max_len)?;
                Ok(Some(value.to_string()))
            }
            None => Err(AppError::validation(format!("{} is required", name))),
        }
    }

    pub fn link(&self, name: &str) -> Result<Option<String>> {
        let value = self.optional(name, LONG_TEXT_LEN)?;
        if let Some(url) = &value {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::validation(format!(
                    "{} must be an http(s) URL",
                    name
                )));
            }
        }
        Ok(value)
    }

    pub fn flag(&self, name: &str) -> Result<bool> {
        let raw = self
            .get(name)
            .ok_or_else(|| AppError::validation(format!("{} is required", name)))?;
        parse_flag(raw).ok_or_else(|| {
            AppError::validation(format!("{} must be a boolean, got {:?}", name, raw))
        })
    }

    pub fn id(&self, name: &str) -> Result<i32> {
        let raw = self.required(name, ID_LEN)?;
        raw.trim()
            .parse()
            .map_err(|_| AppError::validation(format!("{} must be a whole number, got {:?}", name, raw)))
    }

    pub fn genres(&self) -> Vec<String> {
        self.all("genres")
            .into_iter()
            .filter(|genre| !genre.trim().is_empty())
            .collect()
    }
}

// Column widths from the schema. Lengths count characters, as varchar(n)
// does on PostgreSQL.
pub const NAME_LEN: usize = 255;
pub const SHORT_TEXT_LEN: usize = 120;
pub const LONG_TEXT_LEN: usize = 500;
const ID_LEN: usize = 20;

fn check_len(name: &str, value: &str, max_len: usize) -> Result<()> {
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            name, max_len
        )));
    }
    Ok(())
}

/// Allow-list boolean parsing for select/checkbox values.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "True" | "true" | "TRUE" | "y" | "yes" | "on" | "1" => Some(true),
        "False" | "false" | "FALSE" | "n" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueInput {
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name", NAME_LEN)?,
            city: fields.required("city", SHORT_TEXT_LEN)?,
            state: fields.required("state", SHORT_TEXT_LEN)?,
            address: fields.required("address", SHORT_TEXT_LEN)?,
            phone: fields.required("phone", SHORT_TEXT_LEN)?,
            genres: fields.genres(),
            image_link: fields.link("image_link")?,
            facebook_link: fields.link("facebook_link")?,
            website: fields.link("website")?,
            seeking_talent: fields.flag("seeking_talent")?,
            seeking_description: fields.optional("seeking_description", LONG_TEXT_LEN)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistInput {
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        Ok(Self {
            name: fields.required("name", NAME_LEN)?,
            city: fields.required("city", SHORT_TEXT_LEN)?,
            state: fields.required("state", SHORT_TEXT_LEN)?,
            phone: fields.required("phone", SHORT_TEXT_LEN)?,
            genres: fields.genres(),
            image_link: fields.link("image_link")?,
            facebook_link: fields.link("facebook_link")?,
            website: fields.link("website")?,
            seeking_venue: fields.flag("seeking_venue")?,
            seeking_description: fields.optional("seeking_description", LONG_TEXT_LEN)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowInput {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
}

impl ShowInput {
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        let raw_start = fields.required("start_time", SHORT_TEXT_LEN)?;
        let start_time = parse_start_time(&raw_start).ok_or_else(|| {
            AppError::validation(format!(
                "start_time must look like YYYY-MM-DD HH:MM:SS, got {:?}",
                raw_start
            ))
        })?;

        Ok(Self {
            venue_id: fields.id("venue_id")?,
            artist_id: fields.id("artist_id")?,
            start_time,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
