//! Tests of the delete button of a venue page, against a local directory that mocks
//! the remote API. Every test checks both what the server received and what survived.

mod scenarii;

#[cfg(feature = "local_directory_mocks_remote_api")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "local_directory_mocks_remote_api")]
use playbill::page::{ClickEvent, DeleteHandler, Page};
#[cfg(feature = "local_directory_mocks_remote_api")]
use playbill::traits::BookingSource;


struct TestFlavour {
    #[cfg(feature = "local_directory_mocks_remote_api")]
    scenario: scenarii::DeleteScenario,
}

impl TestFlavour {
    #[cfg(not(feature = "local_directory_mocks_remote_api"))]
    pub fn single_click() -> Self { Self{} }
    #[cfg(not(feature = "local_directory_mocks_remote_api"))]
    pub fn rapid_double_click() -> Self { Self{} }
    #[cfg(not(feature = "local_directory_mocks_remote_api"))]
    pub fn retargeted_button() -> Self { Self{} }
    #[cfg(not(feature = "local_directory_mocks_remote_api"))]
    pub fn flaky_server() -> Self { Self{} }
    #[cfg(not(feature = "local_directory_mocks_remote_api"))]
    pub fn missing_button() -> Self { Self{} }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub fn single_click() -> Self {
        Self { scenario: scenarii::scenario_single_click() }
    }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub fn rapid_double_click() -> Self {
        Self { scenario: scenarii::scenario_rapid_double_click() }
    }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub fn retargeted_button() -> Self {
        Self { scenario: scenarii::scenario_retargeted_button() }
    }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub fn flaky_server() -> Self {
        Self { scenario: scenarii::scenario_flaky_server() }
    }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub fn missing_button() -> Self {
        Self { scenario: scenarii::scenario_missing_button() }
    }

    #[cfg(not(feature = "local_directory_mocks_remote_api"))]
    pub async fn run(&self) {
        println!("WARNING: This test required the \"integration_tests\" Cargo feature");
    }

    #[cfg(feature = "local_directory_mocks_remote_api")]
    pub async fn run(&self) {
        let scenario = &self.scenario;

        let mut directory = scenarii::populate_test_directory();
        directory.set_mock_behaviour(Some(Arc::new(Mutex::new(scenario.mock_behaviour.clone()))));

        let page = Page::from_html(&scenario.page_html);
        let handler = match DeleteHandler::bind(&page, directory) {
            Err(err) => {
                println!("Binding failed: {}", err);
                assert!(scenario.expect_bind_failure);
                return;
            },
            Ok(handler) => handler,
        };
        assert!(scenario.expect_bind_failure == false);

        let mut n_errors = 0;
        match scenario.clicks {
            scenarii::ClickPlan::Single => {
                n_errors += count_error(handler.click(ClickEvent::on("delete")).await);
            },
            scenarii::ClickPlan::Sequential => {
                n_errors += count_error(handler.click(ClickEvent::on("delete")).await);
                n_errors += count_error(handler.click(ClickEvent::on("delete")).await);
            },
            scenarii::ClickPlan::Simultaneous => {
                let (first, second) = tokio::join!(
                    handler.click(ClickEvent::on("delete")),
                    handler.click(ClickEvent::on("delete")),
                );
                n_errors += count_error(first);
                n_errors += count_error(second);
            },
            scenarii::ClickPlan::RetargetedBetween(new_target) => {
                n_errors += count_error(handler.click(ClickEvent::on("delete")).await);
                handler.button().lock().unwrap().set_data("id", new_target);
                n_errors += count_error(handler.click(ClickEvent::on("delete")).await);
            },
        }
        assert_eq!(n_errors, scenario.expected_errors);

        // What the mocked server received...
        let requests = handler.source().received_requests();
        assert!(requests.iter().all(|request| request.method == "DELETE"));
        let paths: Vec<&str> = requests.iter().map(|request| request.path.as_str()).collect();
        assert_eq!(paths, scenario.expected_request_paths);

        // ...and what it still serves afterwards
        let mut remaining = Vec::new();
        for area in handler.source().venues().await.unwrap() {
            for venue in area.venues {
                remaining.push(venue.name);
            }
        }
        assert_eq!(remaining, scenario.expected_remaining_venues);
    }
}

#[cfg(feature = "local_directory_mocks_remote_api")]
fn count_error(outcome: Result<(), Box<dyn std::error::Error>>) -> usize {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            println!("A click failed: {}", err);
            1
        },
    }
}


#[tokio::test]
async fn test_one_click_one_delete() {
    let _ = env_logger::builder().is_test(true).try_init();

    let flavour = TestFlavour::single_click();
    flavour.run().await;
}

#[tokio::test]
async fn test_rapid_clicks_are_not_deduplicated() {
    let _ = env_logger::builder().is_test(true).try_init();

    let flavour = TestFlavour::rapid_double_click();
    flavour.run().await;
}

#[tokio::test]
async fn test_the_id_is_read_at_click_time() {
    let _ = env_logger::builder().is_test(true).try_init();

    let flavour = TestFlavour::retargeted_button();
    flavour.run().await;
}

#[tokio::test]
async fn test_a_failed_delete_is_observable() {
    let _ = env_logger::builder().is_test(true).try_init();

    let flavour = TestFlavour::flaky_server();
    flavour.run().await;
}

#[tokio::test]
async fn test_binding_fails_without_a_button() {
    let _ = env_logger::builder().is_test(true).try_init();

    let flavour = TestFlavour::missing_button();
    flavour.run().await;
}
