//! This module provides a client to connect to a venue-booking server

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::area::Area;
use crate::artist::{Artist, ArtistConfirmation, ArtistDetails, ArtistSummary, NewArtist};
use crate::config;
use crate::show::{NewShow, ShowEntry};
use crate::traits::{BookingSource, SearchResults};
use crate::venue::{NewVenue, VenueConfirmation, VenueDetails, VenueSummary};


/// A booking source that fetches its data from a live server
pub struct Client {
    url: Url,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        Ok(Self { url })
    }

    /// The URL of the server this client was created for
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Build the absolute URL for a path. The path is appended as-is, nothing in it
    /// gets escaped
    fn resource_url(&self, path: &str) -> String {
        format!("{}{}", self.url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Box<dyn Error>> {
        let response = reqwest::Client::new()
            .get(self.resource_url(path))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, config::user_agent())
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        Ok(response.json().await?)
    }

    async fn post_form_for_json<T, F>(&self, path: &str, form: &F) -> Result<T, Box<dyn Error>>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let response = reqwest::Client::new()
            .post(self.resource_url(path))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, config::user_agent())
            .form(form)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BookingSource for Client {
    async fn venues(&self) -> Result<Vec<Area>, Box<dyn Error>> {
        self.get_json("/venues").await
    }

    async fn venue(&self, id: i32) -> Result<VenueDetails, Box<dyn Error>> {
        self.get_json(&format!("/venues/{}", id)).await
    }

    async fn search_venues(&self, term: &str) -> Result<SearchResults<VenueSummary>, Box<dyn Error>> {
        self.post_form_for_json("/venues/search", &[("search_term", term)]).await
    }

    async fn create_venue(&self, venue: &NewVenue) -> Result<VenueConfirmation, Box<dyn Error>> {
        let response = reqwest::Client::new()
            .post(self.resource_url("/venues/create"))
            .header(USER_AGENT, config::user_agent())
            .json(venue)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        Ok(response.json().await?)
    }

    async fn edit_venue(&self, id: i32, venue: &NewVenue) -> Result<(), Box<dyn Error>> {
        let response = reqwest::Client::new()
            .post(self.resource_url(&format!("/venues/{}/edit", id)))
            .header(USER_AGENT, config::user_agent())
            .json(venue)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        // The server replies with an empty body
        Ok(())
    }

    async fn delete_venue(&self, id: &str) -> Result<(), Box<dyn Error>> {
        // The id lands in the path verbatim; it came from the page, not from user input
        let del_response = reqwest::Client::new()
            .delete(self.resource_url(&format!("/venues/{}", id)))
            .header(USER_AGENT, config::user_agent())
            .send()
            .await?;

        if del_response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", del_response.status()).into());
        }

        Ok(())
    }

    async fn artists(&self) -> Result<Vec<Artist>, Box<dyn Error>> {
        self.get_json("/artists").await
    }

    async fn artist(&self, id: i32) -> Result<ArtistDetails, Box<dyn Error>> {
        self.get_json(&format!("/artists/{}", id)).await
    }

    async fn search_artists(&self, term: &str) -> Result<SearchResults<ArtistSummary>, Box<dyn Error>> {
        self.post_form_for_json("/artists/search", &[("search_term", term)]).await
    }

    async fn create_artist(&self, artist: &NewArtist) -> Result<ArtistConfirmation, Box<dyn Error>> {
        let response = reqwest::Client::new()
            .post(self.resource_url("/artists/create"))
            .header(USER_AGENT, config::user_agent())
            .json(artist)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        Ok(response.json().await?)
    }

    async fn shows(&self) -> Result<Vec<ShowEntry>, Box<dyn Error>> {
        self.get_json("/shows").await
    }

    async fn create_show(&self, show: &NewShow) -> Result<(), Box<dyn Error>> {
        let response = reqwest::Client::new()
            .post(self.resource_url("/shows/create"))
            .header(USER_AGENT, config::user_agent())
            .form(show)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }

        // The server replies with a rendered page, there is nothing to read in it
        Ok(())
    }
}
