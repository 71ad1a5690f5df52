//! Multiple scenarios that are performed to test the delete button correctly works
//!
//! Every scenario runs against a [`Directory`] that mocks a remote server, seeded with
//! the same three venues (ids 1 to 3) and one artist.
#![cfg(feature = "integration_tests")]

use std::path::PathBuf;

use chrono::{Duration, Utc};

use playbill::artist::NewArtist;
use playbill::directory::Directory;
use playbill::mock_behaviour::MockBehaviour;
use playbill::venue::NewVenue;

/// How the button gets clicked during a scenario
pub enum ClickPlan {
    /// One click
    Single,
    /// Two clicks, one after the other
    Sequential,
    /// Two clicks in flight at the same time
    Simultaneous,
    /// Two clicks, the button retargeted to this venue id in between
    RetargetedBetween(&'static str),
}

pub struct DeleteScenario {
    /// The page the server rendered (or did not render) the delete button into
    pub page_html: String,
    pub clicks: ClickPlan,
    /// The failures the mocked server must inject
    pub mock_behaviour: MockBehaviour,
    /// Whether binding the handler must fail (in which case nothing else happens)
    pub expect_bind_failure: bool,
    /// How many clicks must come back as errors
    pub expected_errors: usize,
    /// The request paths the server must have seen, in order
    pub expected_request_paths: Vec<&'static str>,
    /// The venue names expected to survive, in listing order
    pub expected_remaining_venues: Vec<&'static str>,
}

/// One click on a valid button: one `DELETE /venues/2`, and venue 2 is gone
pub fn scenario_single_click() -> DeleteScenario {
    DeleteScenario {
        page_html: venue_page_html(2),
        clicks: ClickPlan::Single,
        mock_behaviour: MockBehaviour::new(),
        expect_bind_failure: false,
        expected_errors: 0,
        expected_request_paths: vec!["/venues/2"],
        expected_remaining_venues: vec!["The Musical Hop", "Park Square Live Music & Coffee"],
    }
}

/// Two clicks in rapid succession: two independent requests, no de-duplication.
/// The venue is gone after one of them, so the other errors out
pub fn scenario_rapid_double_click() -> DeleteScenario {
    DeleteScenario {
        page_html: venue_page_html(2),
        clicks: ClickPlan::Simultaneous,
        mock_behaviour: MockBehaviour::new(),
        expect_bind_failure: false,
        expected_errors: 1,
        expected_request_paths: vec!["/venues/2", "/venues/2"],
        expected_remaining_venues: vec!["The Musical Hop", "Park Square Live Music & Coffee"],
    }
}

/// The page retargets the button between two clicks: the second request must use the
/// new `data-id` value, since the id is read at click time
pub fn scenario_retargeted_button() -> DeleteScenario {
    DeleteScenario {
        page_html: venue_page_html(2),
        clicks: ClickPlan::RetargetedBetween("1"),
        mock_behaviour: MockBehaviour::new(),
        expect_bind_failure: false,
        expected_errors: 0,
        expected_request_paths: vec!["/venues/2", "/venues/1"],
        expected_remaining_venues: vec!["Park Square Live Music & Coffee"],
    }
}

/// The server fails the first delete: the click reports the error, the venue survives,
/// and a second click goes through
pub fn scenario_flaky_server() -> DeleteScenario {
    DeleteScenario {
        page_html: venue_page_html(2),
        clicks: ClickPlan::Sequential,
        mock_behaviour: MockBehaviour {
            delete_venue_behaviour: (0, 1),
            ..MockBehaviour::default()
        },
        expect_bind_failure: false,
        expected_errors: 1,
        // The mocked failure happens before the request reaches the directory
        expected_request_paths: vec!["/venues/2"],
        expected_remaining_venues: vec!["The Musical Hop", "Park Square Live Music & Coffee"],
    }
}

/// The page has no delete button: binding must fail, rather than silently no-op
pub fn scenario_missing_button() -> DeleteScenario {
    DeleteScenario {
        page_html: r#"<html><body><h1 id="title">Nothing to delete here</h1></body></html>"#.to_string(),
        clicks: ClickPlan::Single,
        mock_behaviour: MockBehaviour::new(),
        expect_bind_failure: true,
        expected_errors: 0,
        expected_request_paths: Vec::new(),
        expected_remaining_venues: Vec::new(),
    }
}

/// The directory every scenario starts from: two areas, three venues, one artist with
/// one past and one upcoming show at venue 1
pub fn populate_test_directory() -> Directory {
    let directory = Directory::new(&PathBuf::from("test_directory/delete_button.json"));

    let hop = directory.add_venue(NewVenue {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: vec!["Jazz".to_string(), "Reggae".to_string(), "Swing".to_string()],
        website: "https://www.themusicalhop.com".to_string(),
        image_link: "https://images.example.com/musical-hop.jpg".to_string(),
        facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
        seeking_talent: true,
        seeking_description: "We are on the lookout for a local artist to play every two weeks. Please call us.".to_string(),
    });
    directory.add_venue(NewVenue {
        name: "The Dueling Pianos Bar".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        address: "335 Delancey Street".to_string(),
        phone: "914-003-1132".to_string(),
        genres: vec!["Classical".to_string(), "R&B".to_string(), "Hip-Hop".to_string()],
        website: "https://www.theduelingpianos.com".to_string(),
        image_link: "https://images.example.com/dueling-pianos.jpg".to_string(),
        facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
        seeking_talent: false,
        seeking_description: String::new(),
    });
    directory.add_venue(NewVenue {
        name: "Park Square Live Music & Coffee".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "34 Whiskey Moore Ave".to_string(),
        phone: "415-000-1234".to_string(),
        genres: vec!["Rock n Roll".to_string(), "Jazz".to_string(), "Classical".to_string(), "Folk".to_string()],
        website: "https://www.parksquarelivemusicandcoffee.com".to_string(),
        image_link: "https://images.example.com/park-square.jpg".to_string(),
        facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
        seeking_talent: false,
        seeking_description: String::new(),
    });

    let artist = directory.add_artist(NewArtist {
        name: "Guns N Petals".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        image_link: "https://images.example.com/guns-n-petals.jpg".to_string(),
        facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
    });
    directory.add_show(hop, artist, Utc::now() - Duration::days(30)).unwrap();
    directory.add_show(hop, artist, Utc::now() + Duration::days(30)).unwrap();

    directory
}

/// The page a booking server renders for a venue, reduced to what the tests care about
pub fn venue_page_html(venue_id: i32) -> String {
    format!(r#"
        <html>
          <body>
            <h1 id="title">A venue page</h1>
            <button id="delete" data-id="{}">Delete this venue</button>
          </body>
        </html>
    "#, venue_id)
}
