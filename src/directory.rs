//! This module provides a local source of booking data
//!
//! A [`Directory`] behaves like a remote server (it implements
//! [`BookingSource`](crate::traits::BookingSource)) but keeps everything in memory,
//! optionally backed by a JSON file. Tests and offline apps can swap one in wherever a
//! [`Client`](crate::client::Client) would be used.

use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::area::Area;
use crate::artist::{Artist, ArtistConfirmation, ArtistDetails, ArtistSummary, NewArtist};
use crate::dates::{format_listing_datetime, format_wire_datetime, parse_wire_datetime};
use crate::show::{ArtistAppearance, NewShow, ShowEntry, VenueAppearance};
use crate::traits::{BookingSource, SearchResults};
use crate::venue::{NewVenue, VenueConfirmation, VenueDetails, VenueSummary};

#[cfg(feature = "local_directory_mocks_remote_api")]
use std::sync::Arc;
#[cfg(feature = "local_directory_mocks_remote_api")]
use crate::mock_behaviour::MockBehaviour;


/// One request a [`Directory`] served, the way a [`Client`](crate::client::Client)
/// would have put it on the wire
#[derive(Clone, Debug, PartialEq)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
}

/// A booking source that stores its data in memory, with an optional backing file
#[derive(Debug)]
pub struct Directory {
    backing_file: PathBuf,
    data: Mutex<DirectoryData>,
    received_requests: Mutex<Vec<ReceivedRequest>>,

    #[cfg(feature = "local_directory_mocks_remote_api")]
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct DirectoryData {
    areas: Vec<StoredArea>,
    venues: Vec<StoredVenue>,
    artists: Vec<StoredArtist>,
    shows: Vec<StoredShow>,
    next_area_id: i32,
    next_venue_id: i32,
    next_artist_id: i32,
    next_show_id: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct StoredArea {
    id: i32,
    city: String,
    state: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct StoredVenue {
    id: i32,
    area_id: i32,
    venue: NewVenue,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct StoredArtist {
    id: i32,
    area_id: i32,
    artist: NewArtist,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct StoredShow {
    id: i32,
    venue_id: i32,
    artist_id: i32,
    start_time: DateTime<Utc>,
}

impl Directory {
    /// Initialize an empty directory
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            data: Mutex::new(DirectoryData::default()),
            received_requests: Mutex::new(Vec::new()),
            #[cfg(feature = "local_directory_mocks_remote_api")]
            mock_behaviour: None,
        }
    }

    /// Initialize a directory from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self {
            backing_file: PathBuf::from(path),
            data: Mutex::new(data),
            received_requests: Mutex::new(Vec::new()),
            #[cfg(feature = "local_directory_mocks_remote_api")]
            mock_behaviour: None,
        })
    }

    /// Store the current Directory to its backing file
    pub fn save_to_file(&self) {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            },
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, &*self.data.lock().unwrap()) {
            log::warn!("Unable to serialize: {}", err);
            return;
        };
    }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub fn set_mock_behaviour(&mut self, behaviour: Option<Arc<Mutex<MockBehaviour>>>) {
        self.mock_behaviour = behaviour;
    }

    /// Add (or retrieve) an area, returning its id.
    ///
    /// Seeding helpers do not go through [`BookingSource`] and are not recorded as
    /// requests.
    pub fn add_area(&self, city: &str, state: &str) -> i32 {
        self.data.lock().unwrap().area_of(city, state)
    }

    /// Add a venue (creating its area on the fly if needed), returning its id
    pub fn add_venue(&self, venue: NewVenue) -> i32 {
        self.data.lock().unwrap().insert_venue(venue)
    }

    /// Add an artist (creating their area on the fly if needed), returning their id
    pub fn add_artist(&self, artist: NewArtist) -> i32 {
        self.data.lock().unwrap().insert_artist(artist)
    }

    /// Book a show. Both ids must already exist in this directory
    pub fn add_show(&self, venue_id: i32, artist_id: i32, start_time: DateTime<Utc>) -> Result<i32, Box<dyn Error>> {
        self.data.lock().unwrap().insert_show(venue_id, artist_id, start_time)
    }

    /// Every request this directory served, in order
    #[cfg(any(test, feature = "integration_tests"))]
    pub fn received_requests(&self) -> Vec<ReceivedRequest> {
        self.received_requests.lock().unwrap().clone()
    }

    /// Compares two Directories to check they have the same current content
    ///
    /// This is not a complete equality test: the served requests and the mock settings may differ
    #[cfg(any(test, feature = "integration_tests"))]
    pub fn has_same_observable_content_as(&self, other: &Self) -> bool {
        *self.data.lock().unwrap() == *other.data.lock().unwrap()
    }

    fn record(&self, method: &str, path: String) {
        log::debug!("Directory request: {} {}", method, path);
        self.received_requests.lock().unwrap().push(ReceivedRequest {
            method: method.to_string(),
            path,
        });
    }
}

impl DirectoryData {
    /// Find the area for this city/state pair, creating it on the fly if needed
    fn area_of(&mut self, city: &str, state: &str) -> i32 {
        if let Some(area) = self.areas.iter().find(|area| area.city == city && area.state == state) {
            return area.id;
        }
        self.next_area_id += 1;
        self.areas.push(StoredArea {
            id: self.next_area_id,
            city: city.to_string(),
            state: state.to_string(),
        });
        self.next_area_id
    }

    fn insert_venue(&mut self, venue: NewVenue) -> i32 {
        let area_id = self.area_of(&venue.city, &venue.state);
        self.next_venue_id += 1;
        self.venues.push(StoredVenue { id: self.next_venue_id, area_id, venue });
        self.next_venue_id
    }

    fn insert_artist(&mut self, artist: NewArtist) -> i32 {
        let area_id = self.area_of(&artist.city, &artist.state);
        self.next_artist_id += 1;
        self.artists.push(StoredArtist { id: self.next_artist_id, area_id, artist });
        self.next_artist_id
    }

    fn insert_show(&mut self, venue_id: i32, artist_id: i32, start_time: DateTime<Utc>) -> Result<i32, Box<dyn Error>> {
        if self.artists.iter().any(|artist| artist.id == artist_id) == false {
            return Err("Artist ID doesn't exist".into());
        }
        if self.venues.iter().any(|venue| venue.id == venue_id) == false {
            return Err("Venue ID doesn't exist".into());
        }
        self.next_show_id += 1;
        self.shows.push(StoredShow { id: self.next_show_id, venue_id, artist_id, start_time });
        Ok(self.next_show_id)
    }

    fn upcoming_shows_of_venue(&self, venue_id: i32, now: &DateTime<Utc>) -> u32 {
        self.shows.iter()
            .filter(|show| show.venue_id == venue_id && &show.start_time > now)
            .count() as u32
    }

    fn upcoming_shows_of_artist(&self, artist_id: i32, now: &DateTime<Utc>) -> u32 {
        self.shows.iter()
            .filter(|show| show.artist_id == artist_id && &show.start_time > now)
            .count() as u32
    }
}

#[async_trait]
impl BookingSource for Directory {
    async fn venues(&self) -> Result<Vec<Area>, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_venues())?;

        self.record("GET", "/venues".to_string());

        let data = self.data.lock().unwrap();
        let now = Utc::now();
        let mut areas = Vec::new();
        for area in &data.areas {
            let venues = data.venues.iter()
                .filter(|venue| venue.area_id == area.id)
                .map(|venue| VenueSummary {
                    id: venue.id,
                    name: venue.venue.name.clone(),
                    num_upcoming_shows: data.upcoming_shows_of_venue(venue.id, &now),
                })
                .collect();
            areas.push(Area {
                id: area.id,
                city: area.city.clone(),
                state: area.state.clone(),
                venues,
            });
        }
        Ok(areas)
    }

    async fn venue(&self, id: i32) -> Result<VenueDetails, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_venue())?;

        self.record("GET", format!("/venues/{}", id));

        let data = self.data.lock().unwrap();
        let stored = match data.venues.iter().find(|venue| venue.id == id) {
            None => return Err(format!("No venue {} in this directory", id).into()),
            Some(stored) => stored,
        };
        let area = match data.areas.iter().find(|area| area.id == stored.area_id) {
            None => return Err("should not happen, a venue always belongs to an area".into()),
            Some(area) => area,
        };

        let now = Utc::now();
        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();
        for show in data.shows.iter().filter(|show| show.venue_id == id) {
            let artist = match data.artists.iter().find(|artist| artist.id == show.artist_id) {
                None => continue,
                Some(artist) => artist,
            };
            let appearance = ArtistAppearance {
                artist_id: artist.id,
                artist_name: artist.artist.name.clone(),
                artist_image_link: artist.artist.image_link.clone(),
                start_time: format_wire_datetime(&show.start_time),
            };
            if show.start_time < now {
                past_shows.push(appearance);
            } else {
                upcoming_shows.push(appearance);
            }
        }

        Ok(VenueDetails {
            id: stored.id,
            name: stored.venue.name.clone(),
            genres: stored.venue.genres.clone(),
            address: stored.venue.address.clone(),
            city: area.city.clone(),
            state: area.state.clone(),
            phone: stored.venue.phone.clone(),
            website: stored.venue.website.clone(),
            facebook_link: stored.venue.facebook_link.clone(),
            seeking_talent: stored.venue.seeking_talent,
            seeking_description: stored.venue.seeking_description.clone(),
            image_link: stored.venue.image_link.clone(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    async fn search_venues(&self, term: &str) -> Result<SearchResults<VenueSummary>, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_search_venues())?;

        self.record("POST", "/venues/search".to_string());

        let lowered = term.to_lowercase();
        let data = self.data.lock().unwrap();
        let now = Utc::now();
        let hits: Vec<VenueSummary> = data.venues.iter()
            .filter(|venue| venue.venue.name.to_lowercase().contains(&lowered))
            .map(|venue| VenueSummary {
                id: venue.id,
                name: venue.venue.name.clone(),
                num_upcoming_shows: data.upcoming_shows_of_venue(venue.id, &now),
            })
            .collect();
        Ok(SearchResults { count: hits.len(), data: hits })
    }

    async fn create_venue(&self, venue: &NewVenue) -> Result<VenueConfirmation, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_create_venue())?;

        self.record("POST", "/venues/create".to_string());

        self.data.lock().unwrap().insert_venue(venue.clone());
        Ok(VenueConfirmation {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
        })
    }

    async fn edit_venue(&self, id: i32, venue: &NewVenue) -> Result<(), Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_edit_venue())?;

        self.record("POST", format!("/venues/{}/edit", id));

        let mut data = self.data.lock().unwrap();
        let position = match data.venues.iter().position(|stored| stored.id == id) {
            None => return Err(format!("No venue {} in this directory", id).into()),
            Some(position) => position,
        };
        let area_id = data.area_of(&venue.city, &venue.state);
        data.venues[position].area_id = area_id;
        data.venues[position].venue = venue.clone();
        Ok(())
    }

    async fn delete_venue(&self, id: &str) -> Result<(), Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_delete_venue())?;

        // The id is recorded exactly as it was received, readable or not
        self.record("DELETE", format!("/venues/{}", id));

        let numeric_id: i32 = match id.parse() {
            Err(_) => return Err(format!("No venue {} in this directory", id).into()),
            Ok(numeric_id) => numeric_id,
        };
        let mut data = self.data.lock().unwrap();
        let position = match data.venues.iter().position(|stored| stored.id == numeric_id) {
            None => return Err(format!("No venue {} in this directory", id).into()),
            Some(position) => position,
        };
        data.venues.remove(position);
        // A venue takes its shows down with it
        data.shows.retain(|show| show.venue_id != numeric_id);
        Ok(())
    }

    async fn artists(&self) -> Result<Vec<Artist>, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_artists())?;

        self.record("GET", "/artists".to_string());

        let data = self.data.lock().unwrap();
        Ok(data.artists.iter()
            .map(|stored| Artist {
                id: stored.id,
                name: stored.artist.name.clone(),
                phone: stored.artist.phone.clone(),
                genres: stored.artist.genres.clone(),
                image_link: stored.artist.image_link.clone(),
                facebook_link: stored.artist.facebook_link.clone(),
            })
            .collect())
    }

    async fn artist(&self, id: i32) -> Result<ArtistDetails, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_artist())?;

        self.record("GET", format!("/artists/{}", id));

        let data = self.data.lock().unwrap();
        let stored = match data.artists.iter().find(|artist| artist.id == id) {
            None => return Err(format!("No artist {} in this directory", id).into()),
            Some(stored) => stored,
        };
        let area = match data.areas.iter().find(|area| area.id == stored.area_id) {
            None => return Err("should not happen, an artist always belongs to an area".into()),
            Some(area) => area,
        };

        let now = Utc::now();
        let mut past_shows = Vec::new();
        let mut upcoming_shows = Vec::new();
        for show in data.shows.iter().filter(|show| show.artist_id == id) {
            let venue = match data.venues.iter().find(|venue| venue.id == show.venue_id) {
                None => continue,
                Some(venue) => venue,
            };
            let appearance = VenueAppearance {
                venue_id: venue.id,
                venue_name: venue.venue.name.clone(),
                artist_image_link: venue.venue.image_link.clone(),
                start_time: format_wire_datetime(&show.start_time),
            };
            if show.start_time < now {
                past_shows.push(appearance);
            } else {
                upcoming_shows.push(appearance);
            }
        }

        Ok(ArtistDetails {
            id: stored.id,
            name: stored.artist.name.clone(),
            genres: stored.artist.genres.clone(),
            city: area.city.clone(),
            state: area.state.clone(),
            phone: stored.artist.phone.clone(),
            facebook_link: stored.artist.facebook_link.clone(),
            image_link: stored.artist.image_link.clone(),
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    async fn search_artists(&self, term: &str) -> Result<SearchResults<ArtistSummary>, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_search_artists())?;

        self.record("POST", "/artists/search".to_string());

        let lowered = term.to_lowercase();
        let data = self.data.lock().unwrap();
        let now = Utc::now();
        let hits: Vec<ArtistSummary> = data.artists.iter()
            .filter(|artist| artist.artist.name.to_lowercase().contains(&lowered))
            .map(|artist| ArtistSummary {
                id: artist.id,
                name: artist.artist.name.clone(),
                num_upcoming_shows: data.upcoming_shows_of_artist(artist.id, &now),
            })
            .collect();
        Ok(SearchResults { count: hits.len(), data: hits })
    }

    async fn create_artist(&self, artist: &NewArtist) -> Result<ArtistConfirmation, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_create_artist())?;

        self.record("POST", "/artists/create".to_string());

        self.data.lock().unwrap().insert_artist(artist.clone());
        Ok(ArtistConfirmation {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
        })
    }

    async fn shows(&self) -> Result<Vec<ShowEntry>, Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_shows())?;

        self.record("GET", "/shows".to_string());

        let data = self.data.lock().unwrap();
        let mut entries = Vec::new();
        for show in &data.shows {
            let venue = match data.venues.iter().find(|venue| venue.id == show.venue_id) {
                None => continue,
                Some(venue) => venue,
            };
            let artist = match data.artists.iter().find(|artist| artist.id == show.artist_id) {
                None => continue,
                Some(artist) => artist,
            };
            entries.push(ShowEntry {
                venue_id: venue.id,
                venue_name: venue.venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.artist.name.clone(),
                artist_image_link: artist.artist.image_link.clone(),
                start_time: format_listing_datetime(&show.start_time),
            });
        }
        Ok(entries)
    }

    async fn create_show(&self, show: &NewShow) -> Result<(), Box<dyn Error>> {
        #[cfg(feature = "local_directory_mocks_remote_api")]
        self.mock_behaviour.as_ref().map_or(Ok(()), |b| b.lock().unwrap().can_create_show())?;

        self.record("POST", "/shows/create".to_string());

        let start_time = match parse_wire_datetime(&show.start_time) {
            None => return Err(format!("Unreadable start time {:?}", show.start_time).into()),
            Some(instant) => instant,
        };
        self.data.lock().unwrap().insert_show(show.venue_id, show.artist_id, start_time)?;
        Ok(())
    }
}
