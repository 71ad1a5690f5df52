//! Geographic areas (the city/state groupings venues are listed by)

use serde::{Deserialize, Serialize};

use crate::venue::VenueSummary;

/// A city/state grouping of venues.
///
/// The venue listing of a booking server is served per area, areas and the venues
/// inside them both ordered by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: i32,
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}
