use std::error::Error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::artist::{Artist, ArtistConfirmation, ArtistDetails, ArtistSummary, NewArtist};
use crate::show::{NewShow, ShowEntry};
use crate::venue::{NewVenue, VenueConfirmation, VenueDetails, VenueSummary};

/// The response to a search request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

/// A source of booking data.
///
/// This is either an actual server (a [`Client`](crate::client::Client)) or a local
/// [`Directory`](crate::directory::Directory), so that apps and tests can swap one for
/// the other.
///
/// Every method takes `&self`: nothing sequences the callers, and several requests may
/// be in flight at the same time (e.g. a delete button clicked twice in a row).
#[async_trait]
pub trait BookingSource {
    /// Returns every area with its venues, both ordered by id
    async fn venues(&self) -> Result<Vec<Area>, Box<dyn Error>>;
    /// Returns the full record of one venue
    async fn venue(&self, id: i32) -> Result<VenueDetails, Box<dyn Error>>;
    /// Returns the venues whose name contains `term` (case-insensitive)
    async fn search_venues(&self, term: &str) -> Result<SearchResults<VenueSummary>, Box<dyn Error>>;
    /// Creates a venue (creating its area on the fly if needed)
    async fn create_venue(&self, venue: &NewVenue) -> Result<VenueConfirmation, Box<dyn Error>>;
    /// Replaces the contents of venue `id`
    async fn edit_venue(&self, id: i32, venue: &NewVenue) -> Result<(), Box<dyn Error>>;
    /// Deletes a venue.
    ///
    /// The id is the raw string the caller got hold of (e.g. from a page attribute).
    /// It is passed along verbatim, without validation or URL-encoding.
    async fn delete_venue(&self, id: &str) -> Result<(), Box<dyn Error>>;

    /// Returns every artist
    async fn artists(&self) -> Result<Vec<Artist>, Box<dyn Error>>;
    /// Returns the full record of one artist
    async fn artist(&self, id: i32) -> Result<ArtistDetails, Box<dyn Error>>;
    /// Returns the artists whose name contains `term` (case-insensitive)
    async fn search_artists(&self, term: &str) -> Result<SearchResults<ArtistSummary>, Box<dyn Error>>;
    /// Creates an artist (creating their area on the fly if needed)
    async fn create_artist(&self, artist: &NewArtist) -> Result<ArtistConfirmation, Box<dyn Error>>;

    /// Returns every show
    async fn shows(&self) -> Result<Vec<ShowEntry>, Box<dyn Error>>;
    /// Books a show. Both the artist and the venue must already exist
    async fn create_show(&self, show: &NewShow) -> Result<(), Box<dyn Error>>;
}
