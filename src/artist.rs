//! Artists (the acts that play shows at venues)

use serde::{Deserialize, Serialize};

use crate::show::VenueAppearance;

/// One artist of the artists listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
}

/// One artist of search results
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u32,
}

/// The full record of an artist, with their shows split around the current instant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetails {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub facebook_link: String,
    pub image_link: String,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// An artist to create
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: String,
    pub facebook_link: String,
}

/// What the server echoes back after an artist was created
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtistConfirmation {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
}
