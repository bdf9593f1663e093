use std::cmp::Ordering;

use crate::models::{GeoPoint, Record};

use super::geo;

/// Entity half of a dataset row that can be ranked against a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hotel,
    Place,
}

impl EntityKind {
    /// Whether the row carries this entity at all
    pub fn is_present(self, record: &Record) -> bool {
        match self {
            EntityKind::Hotel => record.hotel.is_present(),
            EntityKind::Place => record.place.is_present(),
        }
    }

    pub fn location(self, record: &Record) -> Option<GeoPoint> {
        match self {
            EntityKind::Hotel => record.hotel.location,
            EntityKind::Place => record.place.location,
        }
    }

    /// Orders two equidistant rows. Hotels prefer the higher review score, then
    /// more stars; places have no quality tie-break.
    fn tie_break(self, a: &Record, b: &Record) -> Ordering {
        match self {
            EntityKind::Hotel => descending(a.hotel.review_score, b.hotel.review_score)
                .then_with(|| descending(a.hotel.star_rating, b.hotel.star_rating)),
            EntityKind::Place => Ordering::Equal,
        }
    }
}

/// Higher values first, absent values last
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Smaller distances first, unlocated entities last
fn ascending_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A candidate row with the distance from its entity to the reference point
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub record: &'a Record,
    pub distance_m: Option<f64>,
}

/// Ranks the candidates carrying `entity` by distance to `reference`
///
/// Rows without the entity are dropped. Equal distances fall back to the
/// entity's tie-break and then to candidate order, so the output order is
/// fully determined by the input.
pub fn rank_by_distance<'a>(
    candidates: &[&'a Record],
    reference: GeoPoint,
    entity: EntityKind,
) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = candidates
        .iter()
        .filter(|record| entity.is_present(record))
        .map(|&record| Ranked {
            record,
            distance_m: entity
                .location(record)
                .map(|location| geo::distance_between(reference, location)),
        })
        .collect();

    // Stable sort keeps candidate order as the last tie-break
    ranked.sort_by(|a, b| {
        ascending_distance(a.distance_m, b.distance_m)
            .then_with(|| entity.tie_break(a.record, b.record))
    });

    ranked
}
