///! Some utility functions

use std::io::{stdin, stdout, Read, Write};

use crate::area::Area;
use crate::dates::{format_datetime, DateFormat};
use crate::venue::VenueDetails;

/// A debug utility that pretty-prints the venue listing
pub fn print_venue_list(areas: &[Area]) {
    for area in areas {
        println!("AREA {}, {}", area.city, area.state);
        for venue in &area.venues {
            println!("    * {}\t{} upcoming show(s)\t#{}", venue.name, venue.num_upcoming_shows, venue.id);
        }
    }
}

/// A debug utility that pretty-prints a venue page
pub fn print_venue(venue: &VenueDetails) {
    println!("VENUE {} (#{})", venue.name, venue.id);
    println!("    {}, {}, {}", venue.address, venue.city, venue.state);
    if venue.seeking_talent {
        println!("    seeking talent: {}", venue.seeking_description);
    }
    for show in &venue.past_shows {
        println!("    - {}\tplayed on {}", show.artist_name, pretty_instant(&show.start_time));
    }
    for show in &venue.upcoming_shows {
        println!("    + {}\tplays on {}", show.artist_name, pretty_instant(&show.start_time));
    }
}

fn pretty_instant(start_time: &str) -> String {
    format_datetime(start_time, DateFormat::Medium)
        .unwrap_or_else(|| start_time.to_string())
}

/// Wait for the user to press enter
pub fn pause() {
    let mut stdout = stdout();
    stdout.write_all(b"Press Enter to continue...").unwrap();
    stdout.flush().unwrap();
    stdin().read_exact(&mut [0]).unwrap();
}
