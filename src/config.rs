//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The product part of the `User-Agent` header sent with every request (example of a User-Agent string: `Playbill/0.2.0`).
/// Feel free to override it when initing this library.
pub static PRODUCT_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Playbill".to_string())));

/// The `User-Agent` string requests will carry
pub fn user_agent() -> String {
    format!("{}/{}", PRODUCT_NAME.lock().unwrap(), env!("CARGO_PKG_VERSION"))
}

/// The server development tests run against
pub const DEV_SERVER_URL: &str = "http://localhost:5000/";
