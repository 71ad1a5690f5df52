//! Some tests of a booking client.
//! Most of them are not really integration tests, but just development tests that
//! should be cleaned up one day. They require a live server, hence the `#[ignore]`.

use playbill::client::Client;
use playbill::config::DEV_SERVER_URL;
use playbill::page::{ClickEvent, DeleteHandler, Element, Page};
use playbill::traits::BookingSource;
use playbill::utils::print_venue_list;

#[tokio::test]
#[ignore]
async fn test_client() {
    let _ = env_logger::builder().is_test(true).try_init();

    let client = Client::new(DEV_SERVER_URL).unwrap();
    let areas = client.venues().await.unwrap();

    println!("Venues:");
    print_venue_list(&areas);

    let _ = client.shows().await;
}

#[tokio::test]
#[ignore]
async fn search() {
    let _ = env_logger::builder().is_test(true).try_init();

    let client = Client::new(DEV_SERVER_URL).unwrap();
    let hits = client.search_venues("music").await.unwrap();

    println!("{} venue(s) match:", hits.count);
    for hit in &hits.data {
        println!("  {}\t#{}", hit.name, hit.id);
    }
}

#[tokio::test]
#[ignore]
async fn delete_a_venue_through_its_page() {
    let _ = env_logger::builder().is_test(true).try_init();

    let client = Client::new(DEV_SERVER_URL).unwrap();

    // The page a server would have rendered for venue 1
    let mut page = Page::new();
    let mut button = Element::new("delete");
    button.set_data("id", 1);
    page.add_element(button);

    let handler = DeleteHandler::bind(&page, client).unwrap();
    handler.click(ClickEvent::on("delete")).await.unwrap();
}
