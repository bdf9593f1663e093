use serde::{Deserialize, Serialize};

/// A user's trip request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripQuery {
    /// Daily budget
    pub budget: f64,
    /// Minimum hotel review score
    pub hotel_rating: f64,
    /// Hotel star rating, matched exactly
    pub hotel_star_rating: u8,
    /// Minimum restaurant rating
    pub restaurant_rating: f64,
    /// Days to plan; zero or negative plans nothing
    pub num_days: i64,
}

impl TripQuery {
    /// Returns the name of the first numeric field that is NaN or infinite
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("budget", self.budget),
            ("hotel_rating", self.hotel_rating),
            ("restaurant_rating", self.restaurant_rating),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_deserialization() {
        let query: TripQuery = serde_json::from_str(
            r#"{"budget":1500,"hotel_rating":4,"hotel_star_rating":3,"restaurant_rating":4,"num_days":2}"#,
        )
        .unwrap();
        assert_eq!(query.budget, 1500.0);
        assert_eq!(query.hotel_star_rating, 3);
        assert_eq!(query.num_days, 2);
        assert_eq!(query.non_finite_field(), None);
    }

    #[test]
    fn test_non_finite_field() {
        let query = TripQuery {
            budget: 1500.0,
            hotel_rating: f64::NAN,
            hotel_star_rating: 3,
            restaurant_rating: f64::INFINITY,
            num_days: 1,
        };
        assert_eq!(query.non_finite_field(), Some("hotel_rating"));
    }
}
