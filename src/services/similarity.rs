use crate::models::Record;

use super::ranking::EntityKind;

/// Fixed-order feature vector compared by cosine similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile(pub [f64; 3]);

impl Profile {
    /// (review score, star rating, budget tier). Missing scores count as zero.
    pub fn hotel(record: &Record) -> Self {
        Profile([
            record.hotel.review_score.unwrap_or(0.0),
            record.hotel.star_rating.unwrap_or(0.0),
            f64::from(record.budget_tier),
        ])
    }

    /// (place rating, restaurant rating, budget tier). Missing scores count as zero.
    pub fn place(record: &Record) -> Self {
        Profile([
            record.place.rating.unwrap_or(0.0),
            record.restaurant.rating,
            f64::from(record.budget_tier),
        ])
    }

    pub fn of(entity: EntityKind, record: &Record) -> Self {
        match entity {
            EntityKind::Hotel => Self::hotel(record),
            EntityKind::Place => Self::place(record),
        }
    }

    /// Cosine of the angle between the two vectors; 0 when either has zero norm
    pub fn cosine_similarity(&self, other: &Profile) -> f64 {
        let dot: f64 = self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum();
        let norm_a = self.0.iter().map(|x| x * x).sum::<f64>().sqrt();
        let norm_b = other.0.iter().map(|x| x * x).sum::<f64>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            dot / (norm_a * norm_b)
        }
    }
}

/// A position in the distance-ranked sequence and its similarity score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortlistEntry {
    pub index: usize,
    pub similarity: f64,
}

/// Picks the `k` profiles most similar to `reference`
///
/// `candidates` must be in distance-ranked order; the result indexes into that
/// order, most similar first, with ties kept in distance order.
pub fn top_k(reference: &Profile, candidates: &[Profile], k: usize) -> Vec<ShortlistEntry> {
    if candidates.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ShortlistEntry> = candidates
        .iter()
        .enumerate()
        .map(|(index, profile)| ShortlistEntry {
            index,
            similarity: reference.cosine_similarity(profile),
        })
        .collect();

    // Stable: equal scores keep their distance rank
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(k);
    scored
}
