use rand::Rng;

use crate::models::{Itinerary, Record, TripQuery};

use super::{
    budget,
    dataset::DatasetStore,
    filter::{filter_candidates, CandidateCriteria},
    itinerary::ItineraryAssembler,
};

/// Plans a trip from the dataset
///
/// Classifies the budget, keeps the rows meeting every threshold, and builds
/// one bundle per requested day from them. Nothing matching the thresholds is
/// reported as [`Itinerary::NoMatches`] rather than an error. All intermediate
/// state is local to the call; the store is only read.
pub fn recommend<R: Rng>(
    store: &DatasetStore,
    query: &TripQuery,
    assembler: &ItineraryAssembler,
    rng: &mut R,
) -> Itinerary {
    let criteria = CandidateCriteria {
        budget_tier: budget::classify(query.budget),
        min_hotel_score: query.hotel_rating,
        hotel_star_rating: query.hotel_star_rating,
        min_restaurant_rating: query.restaurant_rating,
    };

    let candidates: Vec<&Record> = filter_candidates(store.records(), &criteria);

    tracing::info!(
        budget_tier = criteria.budget_tier,
        candidates = candidates.len(),
        num_days = query.num_days,
        "Filtered candidates"
    );

    if candidates.is_empty() {
        tracing::info!("No candidates satisfy the query thresholds");
        return Itinerary::NoMatches;
    }

    Itinerary::Planned(assembler.build(&candidates, query.num_days, rng))
}
