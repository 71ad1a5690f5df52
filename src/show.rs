//! Shows (one artist playing one venue at some instant)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::format_wire_datetime;

/// One row of the global shows listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShowEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// One show of a venue page (the artist that appears there)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtistAppearance {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// One show of an artist page (the venue they appear at).
///
/// The image link keeps its `artist_image_link` key on the wire even though it carries
/// the venue's image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueAppearance {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// A show to create, in the shape the show form posts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: String,
}

impl NewShow {
    /// Books `artist_id` at `venue_id` for a given instant
    pub fn starting_at(artist_id: i32, venue_id: i32, instant: &DateTime<Utc>) -> Self {
        Self {
            artist_id,
            venue_id,
            start_time: format_wire_datetime(instant),
        }
    }
}
