//! This crate provides a way to interact with a venue-booking server.
//!
//! It provides an HTTP client in the [`client`] module, that can be used as a stand-alone module.
//!
//! Because tests (and offline apps) should not depend on an actual server, this crate also provides a local source of booking data in the [`directory`] module. \
//! Both implement the same [`BookingSource`](traits::BookingSource) trait, so one can be swapped for the other.
//!
//! The [`page`] module models the server-rendered pages such a server serves, and binds their delete button to a `BookingSource`.

pub mod traits;

pub mod area;
pub use area::Area;
pub mod venue;
pub mod artist;
pub mod show;

pub mod client;
pub use client::Client;
pub mod directory;
pub use directory::Directory;

pub mod page;
pub use page::{DeleteHandler, Page};

pub mod dates;
pub use dates::parse_iso_string;

pub mod config;
pub mod mock_behaviour;
pub mod utils;
