use playbill::client::Client;
use playbill::config::DEV_SERVER_URL;
use playbill::traits::BookingSource;


#[tokio::main]
async fn main() {
    // This is just a function to silence "unused function" warning

    let client = Client::new(DEV_SERVER_URL).unwrap();
    let areas = client.venues().await.unwrap();
    let _ = areas.iter()
        .map(|area| println!("  {}, {}\t({} venues)", area.city, area.state, area.venues.len()))
        .collect::<()>();
    let _ = client.shows().await;
}
