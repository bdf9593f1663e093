use crate::models::Record;

/// Thresholds a dataset row must satisfy to be a candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateCriteria {
    pub budget_tier: u8,
    pub min_hotel_score: f64,
    pub hotel_star_rating: u8,
    pub min_restaurant_rating: f64,
}

impl CandidateCriteria {
    /// Absent hotel values never satisfy a threshold
    pub fn matches(&self, record: &Record) -> bool {
        record.budget_tier == self.budget_tier
            && record
                .hotel
                .review_score
                .is_some_and(|score| score >= self.min_hotel_score)
            && record
                .hotel
                .star_rating
                .is_some_and(|stars| stars == f64::from(self.hotel_star_rating))
            && record.restaurant.rating >= self.min_restaurant_rating
    }
}

/// Selects the rows matching all criteria, in dataset order
///
/// Rows without a hotel or place name are kept here; the ranker drops them per
/// entity type.
pub fn filter_candidates<'a>(records: &'a [Record], criteria: &CandidateCriteria) -> Vec<&'a Record> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
