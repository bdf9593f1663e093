use rand::Rng;

use crate::models::{RecommendationBundle, Record, Suggestion};

use super::ranking::{rank_by_distance, EntityKind, Ranked};
use super::similarity::{top_k, Profile};

/// Default number of hotels and places in each day's shortlists
pub const DEFAULT_SHORTLIST_SIZE: usize = 4;

/// Builds one recommendation bundle per requested day
#[derive(Debug, Clone, Copy)]
pub struct ItineraryAssembler {
    shortlist_size: usize,
}

impl Default for ItineraryAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_SHORTLIST_SIZE)
    }
}

impl ItineraryAssembler {
    pub fn new(shortlist_size: usize) -> Self {
        Self { shortlist_size }
    }

    /// Plans days `1..=num_days` from the filtered candidates
    ///
    /// Each day draws its restaurant uniformly from all candidates, so the same
    /// restaurant may come up on several days. Returns nothing when `num_days`
    /// is not positive or there are no candidates to draw from.
    pub fn build<R: Rng>(
        &self,
        candidates: &[&Record],
        num_days: i64,
        rng: &mut R,
    ) -> Vec<RecommendationBundle> {
        if candidates.is_empty() || num_days <= 0 {
            return Vec::new();
        }

        (1..=day_count(num_days))
            .map(|day| {
                let restaurant = candidates[rng.gen_range(0..candidates.len())];
                tracing::debug!(
                    day,
                    restaurant = restaurant.restaurant.name.as_deref().unwrap_or("<unnamed>"),
                    "Picked restaurant"
                );
                self.plan_day(day, restaurant, candidates)
            })
            .collect()
    }

    fn plan_day(&self, day: u64, restaurant: &Record, candidates: &[&Record]) -> RecommendationBundle {
        let reference_point = restaurant.restaurant.location;
        // Both shortlists are scored against the restaurant row's hotel profile
        let reference_profile = Profile::hotel(restaurant);

        let hotels = rank_by_distance(candidates, reference_point, EntityKind::Hotel);
        let places = rank_by_distance(candidates, reference_point, EntityKind::Place);

        RecommendationBundle {
            day,
            restaurant: restaurant.clone(),
            nearest_hotel: hotels.first().map(nearest),
            nearest_place: places.first().map(nearest),
            top_hotels: self.shortlist(&hotels, &reference_profile, EntityKind::Hotel),
            top_places: self.shortlist(&places, &reference_profile, EntityKind::Place),
        }
    }

    /// Re-ranks the distance-ranked entities by profile similarity
    fn shortlist(&self, ranked: &[Ranked<'_>], reference: &Profile, entity: EntityKind) -> Vec<Suggestion> {
        let profiles: Vec<Profile> = ranked
            .iter()
            .map(|candidate| Profile::of(entity, candidate.record))
            .collect();

        top_k(reference, &profiles, self.shortlist_size)
            .into_iter()
            .map(|entry| {
                let candidate = &ranked[entry.index];
                Suggestion {
                    record: candidate.record.clone(),
                    distance_m: candidate.distance_m,
                    similarity: Some(entry.similarity),
                }
            })
            .collect()
    }
}

/// Number of days to plan; non-positive requests plan none
fn day_count(num_days: i64) -> u64 {
    u64::try_from(num_days).unwrap_or(0)
}

fn nearest(candidate: &Ranked<'_>) -> Suggestion {
    Suggestion {
        record: candidate.record.clone(),
        distance_m: candidate.distance_m,
        similarity: None,
    }
}
