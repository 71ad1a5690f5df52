//! Venues (the places artists get booked at)

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::show::ArtistAppearance;

/// One venue of an area listing or of search results
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u32,
}

/// The full record of a venue, with its shows split around the current instant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueDetails {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: String,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A venue to create (or the new contents of a venue to edit).
///
/// This is the shape the venue form posts: `seeking_talent` crosses the wire as the
/// checkbox letter (`"y"`/`"n"`), not as a boolean.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    #[serde(serialize_with = "flag_as_letter", deserialize_with = "letter_as_flag")]
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// What the server echoes back after a venue was created
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VenueConfirmation {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
}

fn flag_as_letter<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(match flag {
        true => "y",
        false => "n",
    })
}

fn letter_as_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let letter = String::deserialize(deserializer)?;
    Ok(letter == "y")
}
