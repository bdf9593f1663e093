use serde::Serialize;

use super::Record;

/// A hotel or place suggested for a day, relative to that day's restaurant
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub record: Record,
    /// Great-circle distance to the restaurant in meters, when the entity is located
    pub distance_m: Option<f64>,
    /// Cosine similarity to the restaurant's profile; only set on shortlist entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// One day's recommendation package
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationBundle {
    /// 1-based day index
    pub day: u64,
    pub restaurant: Record,
    pub nearest_hotel: Option<Suggestion>,
    pub nearest_place: Option<Suggestion>,
    pub top_hotels: Vec<Suggestion>,
    pub top_places: Vec<Suggestion>,
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum Itinerary {
    /// One bundle per requested day
    Planned(Vec<RecommendationBundle>),
    /// No dataset row satisfied the query thresholds
    NoMatches,
}

impl Itinerary {
    pub fn is_no_matches(&self) -> bool {
        matches!(self, Itinerary::NoMatches)
    }

    /// Bundles of a planned itinerary; empty for `NoMatches`
    pub fn into_bundles(self) -> Vec<RecommendationBundle> {
        match self {
            Itinerary::Planned(bundles) => bundles,
            Itinerary::NoMatches => Vec::new(),
        }
    }
}
