pub mod itinerary;
pub mod query;
pub mod record;

pub use itinerary::{Itinerary, RecommendationBundle, Suggestion};
pub use query::TripQuery;
pub use record::{DatasetRow, GeoPoint, Hotel, Place, Record, Restaurant};
