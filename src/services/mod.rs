pub mod booking;
pub mod directory;

pub use booking::DeletedVenue;
pub use directory::{
    Area, ArtistDetail, ArtistShow, SearchHit, SearchResults, ShowListing, VenueDetail, VenueShow,
    VenueSummary,
};
