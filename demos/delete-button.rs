//! This is an example of how playbill can be used.
//! This binary binds the delete button of a venue page and clicks it twice: once
//! fire-and-forget (the way the page's own script would), once awaited so the outcome
//! can be checked.

use std::sync::Arc;

use playbill::client::Client;
use playbill::page::{ClickEvent, DeleteHandler};
use playbill::utils::pause;

mod shared;
use shared::example_venue_page;
use shared::{EXAMPLE_EXISTING_VENUE_ID, URL};


#[tokio::main]
async fn main() {
    env_logger::init();

    println!("This example deletes a venue from a booking server, through the delete button of its page.");
    println!("Make sure you have edited the constants in the 'shared.rs' file to include correct values.");
    println!("You can also set the RUST_LOG environment variable to display more info about the requests.");
    println!("");
    println!("This will use the following settings:");
    println!("  * URL = {}", URL);
    println!("  * VENUE = #{}", EXAMPLE_EXISTING_VENUE_ID);
    pause();

    let page = example_venue_page(EXAMPLE_EXISTING_VENUE_ID);
    let client = Client::new(URL).unwrap();
    let handler = Arc::new(DeleteHandler::bind(&page, client).unwrap());

    // First click: spawn the future and drop the handle, nobody will ever know whether
    // the venue was actually deleted
    let fire_and_forget = Arc::clone(&handler);
    tokio::spawn(async move {
        let _ = fire_and_forget.click(ClickEvent::on("delete")).await;
    });

    // Second click: await the outcome. The venue is most likely gone by now, so expect
    // an error from the server
    match handler.click(ClickEvent::on("delete")).await {
        Ok(()) => println!("The second click deleted the venue."),
        Err(err) => println!("The second click failed: {}", err),
    }
}
