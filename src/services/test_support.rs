use std::collections::BTreeMap;

use crate::models::{GeoPoint, Hotel, Place, Record, Restaurant};

/// A row with restaurant, hotel and place all present around central Delhi
pub fn record(budget_tier: u8, restaurant_rating: f64, hotel_score: f64, stars: f64) -> Record {
    Record {
        restaurant: Restaurant {
            name: Some("Saravana Bhavan".to_string()),
            location: GeoPoint::new(28.6315, 77.2167),
            rating: restaurant_rating,
        },
        hotel: Hotel {
            name: Some("Hotel Palace Heights".to_string()),
            location: Some(GeoPoint::new(28.6330, 77.2190)),
            review_score: Some(hotel_score),
            star_rating: Some(stars),
        },
        place: Place {
            name: Some("Jantar Mantar".to_string()),
            location: Some(GeoPoint::new(28.6271, 77.2166)),
            rating: Some(4.3),
        },
        budget_tier,
        extra: BTreeMap::new(),
    }
}

/// A tier-2 row whose restaurant and hotel sit at the given point
pub fn hotel_at(latitude: f64, longitude: f64, hotel_score: f64, stars: f64) -> Record {
    let mut r = record(2, 4.5, hotel_score, stars);
    r.restaurant.location = GeoPoint::new(latitude, longitude);
    r.hotel.location = Some(GeoPoint::new(latitude, longitude));
    r.place.location = Some(GeoPoint::new(latitude + 0.005, longitude));
    r
}

/// A tier-2 row whose place sits at the given point
pub fn place_at(latitude: f64, longitude: f64, rating: f64) -> Record {
    let mut r = record(2, 4.5, 4.5, 3.0);
    r.place.location = Some(GeoPoint::new(latitude, longitude));
    r.place.rating = Some(rating);
    r
}
