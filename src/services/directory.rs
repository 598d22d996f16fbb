//! Read side of the directory: area listings, searches, per-record detail
//! with past/upcoming show partitions, and the flat show listing.
//!
//! Past/upcoming is never stored. Every function that needs it takes `now`
//! and classifies a show as upcoming iff `start_time > now`.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};
use serde::Serialize;

use crate::{
    db::entities::{artist, show, venue},
    error::{AppError, Result},
};

/// `MM/DD/YYYY, HH:MM:SS`, 24-hour clock.
pub const SHOW_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

pub fn format_show_time(start_time: &NaiveDateTime) -> String {
    start_time.format(SHOW_TIME_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A search result. Zero matches is an ordinary, empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<SearchHit>,
}

/// A venue's show, described by its artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// An artist's show, described by its venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One row of `/shows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show joined with the names and images of both sides.
#[derive(Debug, FromQueryResult)]
struct ShowRow {
    venue_id: i32,
    artist_id: i32,
    start_time: NaiveDateTime,
    venue_name: String,
    venue_image_link: Option<String>,
    artist_name: String,
    artist_image_link: Option<String>,
}

fn show_rows() -> Select<show::Entity> {
    show::Entity::find()
        .select_only()
        .column(show::Column::VenueId)
        .column(show::Column::ArtistId)
        .column(show::Column::StartTime)
        .column_as(venue::Column::Name, "venue_name")
        .column_as(venue::Column::ImageLink, "venue_image_link")
        .column_as(artist::Column::Name, "artist_name")
        .column_as(artist::Column::ImageLink, "artist_image_link")
        .join(JoinType::InnerJoin, show::Relation::Venue.def())
        .join(JoinType::InnerJoin, show::Relation::Artist.def())
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
}

/// Count of upcoming shows keyed by `owner` (venue_id or artist_id).
async fn upcoming_counts<C: ConnectionTrait>(
    conn: &C,
    owner: show::Column,
    now: NaiveDateTime,
) -> Result<HashMap<i32, i64>> {
    let counts: Vec<(i32, i64)> = show::Entity::find()
        .select_only()
        .column(owner)
        .column_as(show::Column::Id.count(), "upcoming")
        .filter(show::Column::StartTime.gt(now))
        .group_by(owner)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(counts.into_iter().collect())
}

/// Case-insensitive substring match. `%`, `_` and `\` in the term match
/// literally.
///
/// Both sides are folded by the store's `LOWER`, so they always agree. On
/// PostgreSQL that folds all of Unicode; SQLite's `LOWER` only folds ASCII,
/// so there "école" does not find "ÉCOLE" but "École" does.
fn name_contains(column: SimpleExpr, term: &str) -> SimpleExpr {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Expr::cust_with_exprs(
        "LOWER($1) LIKE LOWER($2) ESCAPE '\\'",
        [column, Expr::val(format!("%{}%", escaped)).into()],
    )
}

/// Splits `(start_time, item)` pairs into `(past, upcoming)`.
fn partition_by_time<T>(
    shows: impl IntoIterator<Item = (NaiveDateTime, T)>,
    now: NaiveDateTime,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (start_time, item) in shows {
        if start_time > now {
            upcoming.push(item);
        } else {
            past.push(item);
        }
    }
    (past, upcoming)
}

/// All venues grouped by exact `(city, state)`, sorted by area then id.
pub async fn list_venues_by_area<C: ConnectionTrait>(
    conn: &C,
    now: NaiveDateTime,
) -> Result<Vec<Area>> {
    let venues = venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(conn)
        .await?;
    let upcoming = upcoming_counts(conn, show::Column::VenueId, now).await?;

    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        let num_upcoming_shows = upcoming.get(&venue.id).copied().unwrap_or(0);
        areas
            .entry((venue.city, venue.state))
            .or_default()
            .push(VenueSummary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows,
            });
    }

    Ok(areas
        .into_iter()
        .map(|((city, state), venues)| Area {
            city,
            state,
            venues,
        })
        .collect())
}

/// Plain venue records, for pickers and edit forms.
pub async fn list_venues<C: ConnectionTrait>(conn: &C) -> Result<Vec<venue::Model>> {
    Ok(venue::Entity::find()
        .order_by_asc(venue::Column::Name)
        .all(conn)
        .await?)
}

pub async fn get_venue<C: ConnectionTrait>(conn: &C, id: i32) -> Result<venue::Model> {
    venue::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", id))
}

pub async fn get_artist<C: ConnectionTrait>(conn: &C, id: i32) -> Result<artist::Model> {
    artist::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))
}

pub async fn list_artists<C: ConnectionTrait>(conn: &C) -> Result<Vec<artist::Model>> {
    Ok(artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(conn)
        .await?)
}

pub async fn list_shows<C: ConnectionTrait>(conn: &C) -> Result<Vec<ShowListing>> {
    let rows = show_rows().into_model::<ShowRow>().all(conn).await?;

    Ok(rows
        .into_iter()
        .map(|row| ShowListing {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_show_time(&row.start_time),
        })
        .collect())
}

pub async fn search_venues<C: ConnectionTrait>(
    conn: &C,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let matches: Vec<(i32, String)> = venue::Entity::find()
        .select_only()
        .column(venue::Column::Id)
        .column(venue::Column::Name)
        .filter(name_contains(
            Expr::col((venue::Entity, venue::Column::Name)).into(),
            term,
        ))
        .order_by_asc(venue::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;
    let upcoming = upcoming_counts(conn, show::Column::VenueId, now).await?;

    Ok(search_results(term, matches, &upcoming))
}

pub async fn search_artists<C: ConnectionTrait>(
    conn: &C,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults> {
    let matches: Vec<(i32, String)> = artist::Entity::find()
        .select_only()
        .column(artist::Column::Id)
        .column(artist::Column::Name)
        .filter(name_contains(
            Expr::col((artist::Entity, artist::Column::Name)).into(),
            term,
        ))
        .order_by_asc(artist::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;
    let upcoming = upcoming_counts(conn, show::Column::ArtistId, now).await?;

    Ok(search_results(term, matches, &upcoming))
}

fn search_results(
    term: &str,
    matches: Vec<(i32, String)>,
    upcoming: &HashMap<i32, i64>,
) -> SearchResults {
    let data: Vec<SearchHit> = matches
        .into_iter()
        .map(|(id, name)| SearchHit {
            id,
            name,
            num_upcoming_shows: upcoming.get(&id).copied().unwrap_or(0),
        })
        .collect();

    SearchResults {
        search_term: term.to_string(),
        count: data.len(),
        data,
    }
}

pub async fn venue_detail<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    now: NaiveDateTime,
) -> Result<VenueDetail> {
    let venue = get_venue(conn, id).await?;

    let rows = show_rows()
        .filter(show::Column::VenueId.eq(id))
        .into_model::<ShowRow>()
        .all(conn)
        .await?;

    let (past_shows, upcoming_shows) = partition_by_time(
        rows.into_iter().map(|row| {
            (
                row.start_time,
                ArtistShow {
                    artist_id: row.artist_id,
                    artist_name: row.artist_name,
                    artist_image_link: row.artist_image_link,
                    start_time: format_show_time(&row.start_time),
                },
            )
        }),
        now,
    );

    Ok(VenueDetail {
        genres: venue.genre_list()?,
        id: venue.id,
        name: venue.name,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        image_link: venue.image_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

pub async fn artist_detail<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    now: NaiveDateTime,
) -> Result<ArtistDetail> {
    let artist = get_artist(conn, id).await?;

    let rows = show_rows()
        .filter(show::Column::ArtistId.eq(id))
        .into_model::<ShowRow>()
        .all(conn)
        .await?;

    let (past_shows, upcoming_shows) = partition_by_time(
        rows.into_iter().map(|row| {
            (
                row.start_time,
                VenueShow {
                    venue_id: row.venue_id,
                    venue_name: row.venue_name,
                    venue_image_link: row.venue_image_link,
                    start_time: format_show_time(&row.start_time),
                },
            )
        }),
        now,
    );

    Ok(ArtistDetail {
        genres: artist.genre_list()?,
        id: artist.id,
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        image_link: artist.image_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}
