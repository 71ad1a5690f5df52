//! This module models the server-rendered pages of a booking server
//!
//! A booking server renders venue pages with a delete button: an element with the
//! `delete` id, carrying the venue to delete in its `data-id` attribute. A
//! [`DeleteHandler`] binds such a button to a [`BookingSource`](crate::traits::BookingSource):
//! one click, one `DELETE /venues/<id>`.

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use scraper::{Html, Selector};

use crate::traits::BookingSource;

/// The id the delete button is looked up by
const DELETE_BUTTON_ID: &str = "delete";

/// One element of a server-rendered page: its id, and its custom-data attributes
/// (stored without their `data-` prefix)
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    id: String,
    dataset: HashMap<String, String>,
}

impl Element {
    pub fn new<S: ToString>(id: S) -> Self {
        Self {
            id: id.to_string(),
            dataset: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the element's `data-<name>` attribute, if it carries one
    pub fn data(&self, name: &str) -> Option<&str> {
        self.dataset.get(name).map(|value| value.as_str())
    }

    /// Sets (or replaces) the element's `data-<name>` attribute
    pub fn set_data<S: ToString, T: ToString>(&mut self, name: S, value: T) {
        self.dataset.insert(name.to_string(), value.to_string());
    }
}

/// The addressable (id-carrying) elements of one server-rendered page.
///
/// Elements are shared handles: whoever rendered the page can keep updating an element
/// after a handler was bound to it, and the handler will see the update.
pub struct Page {
    elements: HashMap<String, Arc<Mutex<Element>>>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Self { elements: HashMap::new() }
    }

    /// Parse a server-rendered HTML document, keeping every element that carries an id
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let selector = Selector::parse("[id]").expect("cannot build the [id] selector.");

        let mut page = Self::new();
        for node in document.select(&selector) {
            let id = match node.value().attr("id") {
                None => continue,
                Some(id) => id,
            };
            let mut element = Element::new(id);
            for (name, value) in node.value().attrs() {
                if let Some(data_name) = name.strip_prefix("data-") {
                    element.set_data(data_name, value);
                }
            }
            page.add_element(element);
        }
        page
    }

    /// Add an element, replacing any previous element with the same id
    pub fn add_element(&mut self, element: Element) -> Arc<Mutex<Element>> {
        let id = element.id().to_string();
        let handle = Arc::new(Mutex::new(element));
        self.elements.insert(id, Arc::clone(&handle));
        handle
    }

    /// Returns the element with this id
    pub fn element(&self, id: &str) -> Option<Arc<Mutex<Element>>> {
        self.elements.get(id).map(Arc::clone)
    }
}

/// What the page knows about one click
#[derive(Clone, Debug)]
pub struct ClickEvent {
    /// The id of the element that was clicked
    pub target: String,
    /// When the click happened
    pub instant: DateTime<Utc>,
}

impl ClickEvent {
    /// A click on the element with this id, happening now
    pub fn on<S: ToString>(target: S) -> Self {
        Self {
            target: target.to_string(),
            instant: Utc::now(),
        }
    }
}

/// The click-to-DELETE binding of a venue page.
///
/// Binding happens once, at page-setup time, and fails if the page has no delete
/// button: nothing is bound in that case, rather than a handler that would fail later.
pub struct DeleteHandler<S>
where
    S: BookingSource + Sync + Send,
{
    button: Arc<Mutex<Element>>,
    source: S,
}

impl<S> DeleteHandler<S>
where
    S: BookingSource + Sync + Send,
{
    /// Look up the delete button of `page` and bind `source` to it.
    ///
    /// `source` is usually a [`Client`](crate::client::Client), but a local
    /// [`Directory`](crate::directory::Directory) works the same.
    pub fn bind(page: &Page, source: S) -> Result<Self, Box<dyn Error>> {
        log::info!("Binding the delete button of a page");

        let lookup = page.element(DELETE_BUTTON_ID);
        log::debug!("Lookup of #{}: {:?}", DELETE_BUTTON_ID,
                    lookup.as_ref().map(|handle| handle.lock().unwrap().clone()));

        match lookup {
            None => Err(format!("This page has no #{} element", DELETE_BUTTON_ID).into()),
            Some(button) => Ok(Self { button, source }),
        }
    }

    /// Handle one click of the delete button.
    ///
    /// This reads the venue id from the button's `data-id` attribute as it is *now*
    /// (not as it was at bind time), then issues a single `DELETE /venues/<id>`
    /// through the bound source. Clicks are not de-duplicated: every click gets its
    /// own request, and several may be in flight at once.
    ///
    /// The returned future is the whole outcome of the click. Callers that want the
    /// fire-and-forget behaviour of a web page can spawn it and drop the handle.
    pub async fn click(&self, event: ClickEvent) -> Result<(), Box<dyn Error>> {
        log::debug!("Delete event: {:?}", event);

        let venue_id = match self.button.lock().unwrap().data("id") {
            None => return Err(format!("The #{} element has no data-id attribute", DELETE_BUTTON_ID).into()),
            Some(id) => id.to_string(),
        };

        self.source.delete_venue(&venue_id).await
    }

    /// Returns the button this handler is bound to
    pub fn button(&self) -> Arc<Mutex<Element>> {
        Arc::clone(&self.button)
    }

    /// Returns the booking source deletions go through
    pub fn source(&self) -> &S {
        &self.source
    }
}
