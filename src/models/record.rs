use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Restaurant half of a dataset row. Always populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub name: Option<String>,
    pub location: GeoPoint,
    /// Rating on a 0-5 scale
    pub rating: f64,
}

/// Hotel columns of a dataset row. Hotel-less rows leave these empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
    pub review_score: Option<f64>,
    pub star_rating: Option<f64>,
}

impl Hotel {
    /// A row carries a hotel only when the hotel has a name
    pub fn is_present(&self) -> bool {
        self.name.is_some()
    }
}

/// Place (attraction) columns of a dataset row. Place-less rows leave these empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
    pub rating: Option<f64>,
}

impl Place {
    /// A row carries a place only when the place has a name
    pub fn is_present(&self) -> bool {
        self.name.is_some()
    }
}

/// One joined restaurant/hotel/place row of the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub restaurant: Restaurant,
    pub hotel: Hotel,
    pub place: Place,
    /// Budget tier (0-5) the row belongs to
    pub budget_tier: u8,
    /// Dataset columns not mapped above (cuisine, city, ...), keyed by header
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

// ============================================================================
// CSV Row Types
// ============================================================================

/// Raw row as it appears in the joined dataset CSV
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Name_Restaurant", default)]
    pub restaurant_name: Option<String>,
    #[serde(rename = "Latitude_x__Restaurant")]
    pub restaurant_latitude: f64,
    #[serde(rename = "Longitude_x__Restaurant")]
    pub restaurant_longitude: f64,
    #[serde(rename = "Ratings_out_of_5_Restaurant")]
    pub restaurant_rating: f64,

    #[serde(rename = "Hotel_name", default)]
    pub hotel_name: Option<String>,
    #[serde(rename = "Latitude_Hotel", default)]
    pub hotel_latitude: Option<f64>,
    #[serde(rename = "Longitude_Hotel", default)]
    pub hotel_longitude: Option<f64>,
    #[serde(rename = "mmt_review_score_Hotel", default)]
    pub hotel_review_score: Option<f64>,
    #[serde(rename = "hotel_star_rating_Hotel", default)]
    pub hotel_star_rating: Option<f64>,

    #[serde(rename = "Name_Place", default)]
    pub place_name: Option<String>,
    #[serde(rename = "Latitude_place_0_x", default)]
    pub place_latitude: Option<f64>,
    #[serde(rename = "Longitude_place_0_x", default)]
    pub place_longitude: Option<f64>,
    #[serde(rename = "Rating_Place", default)]
    pub place_rating: Option<f64>,

    pub budget_level: u8,
}

impl DatasetRow {
    /// Headers read into the typed fields; every other column lands in `Record::extra`
    pub const COLUMNS: [&'static str; 14] = [
        "Name_Restaurant",
        "Latitude_x__Restaurant",
        "Longitude_x__Restaurant",
        "Ratings_out_of_5_Restaurant",
        "Hotel_name",
        "Latitude_Hotel",
        "Longitude_Hotel",
        "mmt_review_score_Hotel",
        "hotel_star_rating_Hotel",
        "Name_Place",
        "Latitude_place_0_x",
        "Longitude_place_0_x",
        "Rating_Place",
        "budget_level",
    ];
}

fn point(latitude: Option<f64>, longitude: Option<f64>) -> Option<GeoPoint> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    }
}

impl From<DatasetRow> for Record {
    fn from(row: DatasetRow) -> Self {
        Record {
            restaurant: Restaurant {
                name: row.restaurant_name,
                location: GeoPoint::new(row.restaurant_latitude, row.restaurant_longitude),
                rating: row.restaurant_rating,
            },
            hotel: Hotel {
                name: row.hotel_name,
                location: point(row.hotel_latitude, row.hotel_longitude),
                review_score: row.hotel_review_score,
                star_rating: row.hotel_star_rating,
            },
            place: Place {
                name: row.place_name,
                location: point(row.place_latitude, row.place_longitude),
                rating: row.place_rating,
            },
            budget_tier: row.budget_level,
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> DatasetRow {
        DatasetRow {
            restaurant_name: Some("Karim's".to_string()),
            restaurant_latitude: 28.6507,
            restaurant_longitude: 77.2334,
            restaurant_rating: 4.2,
            hotel_name: Some("The Imperial".to_string()),
            hotel_latitude: Some(28.6255),
            hotel_longitude: Some(77.2183),
            hotel_review_score: Some(4.6),
            hotel_star_rating: Some(5.0),
            place_name: None,
            place_latitude: Some(28.6562),
            place_longitude: None,
            place_rating: None,
            budget_level: 3,
        }
    }

    #[test]
    fn test_row_to_record() {
        let record: Record = row().into();
        assert_eq!(record.restaurant.name.as_deref(), Some("Karim's"));
        assert_eq!(record.restaurant.location, GeoPoint::new(28.6507, 77.2334));
        assert_eq!(record.hotel.location, Some(GeoPoint::new(28.6255, 77.2183)));
        assert_eq!(record.budget_tier, 3);
        assert!(record.hotel.is_present());
    }

    #[test]
    fn test_half_coordinates_are_no_location() {
        let record: Record = row().into();
        assert_eq!(record.place.location, None);
        assert!(!record.place.is_present());
    }

    #[test]
    fn test_whitespace_name_is_present() {
        let mut raw = row();
        raw.hotel_name = Some("  ".to_string());
        let record: Record = raw.into();
        assert!(record.hotel.is_present());
        assert_eq!(record.hotel.name.as_deref(), Some("  "));
    }
}
