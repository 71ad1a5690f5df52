//! This is an example of how playbill can be used.
//! This binary simply lists every venue of the configured server.

use playbill::client::Client;
use playbill::traits::BookingSource;
use playbill::utils::print_venue_list;

mod shared;
use shared::URL;


#[tokio::main]
async fn main() {
    env_logger::init();

    println!("This example lists the venues of a booking server, grouped by area.");
    println!("Make sure you have edited the constants in the 'shared.rs' file to point at your server.");
    println!("");

    let client = Client::new(URL).unwrap();

    let areas = client.venues().await.unwrap();
    print_venue_list(&areas);
}
