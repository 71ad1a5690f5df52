//! This module provides ways to tweak a mocked booking source, so that it can return errors on some tests
#![cfg(feature = "local_directory_mocks_remote_api")]

use std::error::Error;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a function fails _n_ times after _m_ initial successes, set `(m, n)` for the suited parameter
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every action will be allowed
    pub is_suspended: bool,

    pub venues_behaviour: (u32, u32),
    pub venue_behaviour: (u32, u32),
    pub search_venues_behaviour: (u32, u32),
    pub create_venue_behaviour: (u32, u32),
    pub edit_venue_behaviour: (u32, u32),
    pub delete_venue_behaviour: (u32, u32),

    pub artists_behaviour: (u32, u32),
    pub artist_behaviour: (u32, u32),
    pub search_artists_behaviour: (u32, u32),
    pub create_artist_behaviour: (u32, u32),

    pub shows_behaviour: (u32, u32),
    pub create_show_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            venues_behaviour: (0, n_fails),
            venue_behaviour: (0, n_fails),
            search_venues_behaviour: (0, n_fails),
            create_venue_behaviour: (0, n_fails),
            edit_venue_behaviour: (0, n_fails),
            delete_venue_behaviour: (0, n_fails),
            artists_behaviour: (0, n_fails),
            artist_behaviour: (0, n_fails),
            search_artists_behaviour: (0, n_fails),
            create_artist_behaviour: (0, n_fails),
            shows_behaviour: (0, n_fails),
            create_show_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_venues(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.venues_behaviour, "venues")
    }
    pub fn can_venue(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.venue_behaviour, "venue")
    }
    pub fn can_search_venues(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.search_venues_behaviour, "search_venues")
    }
    pub fn can_create_venue(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_venue_behaviour, "create_venue")
    }
    pub fn can_edit_venue(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.edit_venue_behaviour, "edit_venue")
    }
    pub fn can_delete_venue(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.delete_venue_behaviour, "delete_venue")
    }
    pub fn can_artists(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.artists_behaviour, "artists")
    }
    pub fn can_artist(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.artist_behaviour, "artist")
    }
    pub fn can_search_artists(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.search_artists_behaviour, "search_artists")
    }
    pub fn can_create_artist(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_artist_behaviour, "create_artist")
    }
    pub fn can_shows(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.shows_behaviour, "shows")
    }
    pub fn can_create_show(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.create_show_behaviour, "create_show")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else {
        if remaining_failures > 0 {
            value.1 = value.1 - 1;
            log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
            Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
        } else {
            log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
            Ok(())
        }
    }
}
