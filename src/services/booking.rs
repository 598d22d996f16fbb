//! Write side of the directory. Every function runs inside the caller's
//! [`UnitOfWork`]; none of them commit.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    db::{
        entities::{artist, show, venue},
        genres, UnitOfWork,
    },
    error::{AppError, Result},
    forms::{ArtistInput, ShowInput, VenueInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedVenue {
    pub venue_id: i32,
    pub shows_removed: u64,
}

fn apply_venue(active: &mut venue::ActiveModel, input: VenueInput) -> Result<()> {
    active.name = Set(input.name);
    active.city = Set(input.city);
    active.state = Set(input.state);
    active.address = Set(input.address);
    active.phone = Set(input.phone);
    active.genres = Set(genres::encode(&input.genres)?);
    active.image_link = Set(input.image_link);
    active.facebook_link = Set(input.facebook_link);
    active.website = Set(input.website);
    active.seeking_talent = Set(input.seeking_talent);
    active.seeking_description = Set(input.seeking_description);
    Ok(())
}

fn apply_artist(active: &mut artist::ActiveModel, input: ArtistInput) -> Result<()> {
    active.name = Set(input.name);
    active.city = Set(input.city);
    active.state = Set(input.state);
    active.phone = Set(input.phone);
    active.genres = Set(genres::encode(&input.genres)?);
    active.image_link = Set(input.image_link);
    active.facebook_link = Set(input.facebook_link);
    active.website = Set(input.website);
    active.seeking_venue = Set(input.seeking_venue);
    active.seeking_description = Set(input.seeking_description);
    Ok(())
}

pub async fn create_venue(uow: &UnitOfWork, input: VenueInput) -> Result<venue::Model> {
    let mut active = venue::ActiveModel {
        ..Default::default()
    };
    apply_venue(&mut active, input)?;

    let venue = active.insert(uow.conn()).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
    Ok(venue)
}

/// Overwrites every editable field of an existing venue.
pub async fn update_venue(uow: &UnitOfWork, id: i32, input: VenueInput) -> Result<venue::Model> {
    let existing = venue::Entity::find_by_id(id)
        .one(uow.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Venue", id))?;

    let mut active: venue::ActiveModel = existing.into();
    apply_venue(&mut active, input)?;

    let venue = active.update(uow.conn()).await?;
    tracing::info!(venue_id = venue.id, "Venue updated");
    Ok(venue)
}

/// Removes the venue's shows, then the venue.
pub async fn delete_venue(uow: &UnitOfWork, id: i32) -> Result<DeletedVenue> {
    let venue = venue::Entity::find_by_id(id)
        .one(uow.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Venue", id))?;

    let shows = show::Entity::delete_many()
        .filter(show::Column::VenueId.eq(venue.id))
        .exec(uow.conn())
        .await?;

    venue::Entity::delete_by_id(venue.id)
        .exec(uow.conn())
        .await?;

    tracing::info!(
        venue_id = venue.id,
        shows_removed = shows.rows_affected,
        "Venue deleted"
    );

    Ok(DeletedVenue {
        venue_id: venue.id,
        shows_removed: shows.rows_affected,
    })
}

pub async fn create_artist(uow: &UnitOfWork, input: ArtistInput) -> Result<artist::Model> {
    let mut active = artist::ActiveModel {
        ..Default::default()
    };
    apply_artist(&mut active, input)?;

    let artist = active.insert(uow.conn()).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
    Ok(artist)
}

pub async fn update_artist(
    uow: &UnitOfWork,
    id: i32,
    input: ArtistInput,
) -> Result<artist::Model> {
    let existing = artist::Entity::find_by_id(id)
        .one(uow.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))?;

    let mut active: artist::ActiveModel = existing.into();
    apply_artist(&mut active, input)?;

    let artist = active.update(uow.conn()).await?;
    tracing::info!(artist_id = artist.id, "Artist updated");
    Ok(artist)
}

/// Both sides must already exist; a dangling reference is a validation
/// failure, not a store error.
pub async fn create_show(uow: &UnitOfWork, input: ShowInput) -> Result<show::Model> {
    if venue::Entity::find_by_id(input.venue_id)
        .one(uow.conn())
        .await?
        .is_none()
    {
        return Err(AppError::validation(format!(
            "Venue {} does not exist",
            input.venue_id
        )));
    }

    if artist::Entity::find_by_id(input.artist_id)
        .one(uow.conn())
        .await?
        .is_none()
    {
        return Err(AppError::validation(format!(
            "Artist {} does not exist",
            input.artist_id
        )));
    }

    let show = show::ActiveModel {
        venue_id: Set(input.venue_id),
        artist_id: Set(input.artist_id),
        start_time: Set(input.start_time),
        ..Default::default()
    }
    .insert(uow.conn())
    .await?;

    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show created"
    );
    Ok(show)
}
