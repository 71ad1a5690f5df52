//! Values and helpers shared by the examples of this crate.

use playbill::page::{Element, Page};

// TODO: change these values with yours
pub const URL: &str = "http://localhost:5000/";

pub const EXAMPLE_EXISTING_VENUE_ID: i32 = 2;


/// Builds a page like the one a booking server renders for a venue: a title, and a
/// delete button carrying the venue id in its `data-id` attribute
pub fn example_venue_page(venue_id: i32) -> Page {
    let mut page = Page::new();

    page.add_element(Element::new("title"));

    let mut button = Element::new("delete");
    button.set_data("id", venue_id);
    page.add_element(button);

    page
}
