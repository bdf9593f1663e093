use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    error::AppResult,
    models::{DatasetRow, GeoPoint, Record},
};

/// Read-only, deduplicated collection of joined restaurant/hotel/place rows
///
/// Cloning is cheap; all clones share the same rows.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Arc<[Record]>,
}

/// Row counts describing a loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub with_hotel: usize,
    pub with_place: usize,
    pub per_budget_tier: BTreeMap<u8, usize>,
}

/// Exact-equality key of a row; floats compare by bit pattern
#[derive(PartialEq, Eq, Hash)]
struct RowKey<'a> {
    names: [Option<&'a str>; 3],
    numbers: [Option<u64>; 10],
    budget_tier: u8,
    extra: &'a BTreeMap<String, String>,
}

impl<'a> RowKey<'a> {
    fn of(record: &'a Record) -> Self {
        let bits = |value: Option<f64>| value.map(f64::to_bits);
        let lat = |point: Option<GeoPoint>| bits(point.map(|p| p.latitude));
        let lon = |point: Option<GeoPoint>| bits(point.map(|p| p.longitude));

        Self {
            names: [
                record.restaurant.name.as_deref(),
                record.hotel.name.as_deref(),
                record.place.name.as_deref(),
            ],
            numbers: [
                Some(record.restaurant.location.latitude.to_bits()),
                Some(record.restaurant.location.longitude.to_bits()),
                Some(record.restaurant.rating.to_bits()),
                lat(record.hotel.location),
                lon(record.hotel.location),
                bits(record.hotel.review_score),
                bits(record.hotel.star_rating),
                lat(record.place.location),
                lon(record.place.location),
                bits(record.place.rating),
            ],
            budget_tier: record.budget_tier,
            extra: &record.extra,
        }
    }
}

impl DatasetStore {
    /// Builds a store, dropping exact duplicate rows (the first occurrence is kept)
    pub fn from_records(records: Vec<Record>) -> Self {
        let kept: Vec<bool> = {
            let mut seen = HashSet::with_capacity(records.len());
            records.iter().map(|r| seen.insert(RowKey::of(r))).collect()
        };

        let records: Vec<Record> = records
            .into_iter()
            .zip(kept)
            .filter_map(|(record, keep)| keep.then_some(record))
            .collect();

        Self {
            records: records.into(),
        }
    }

    /// Parses CSV rows with a header line from any reader
    ///
    /// Columns without a typed field are kept verbatim in [`Record::extra`], so
    /// two rows only collapse when every column matches.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let extra_columns: Vec<(usize, &str)> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !DatasetRow::COLUMNS.contains(name))
            .collect();

        let mut rows = Vec::new();
        for raw in csv_reader.records() {
            let raw = raw?;
            let mut record = Record::from(raw.deserialize::<DatasetRow>(Some(&headers))?);
            record.extra = extra_columns
                .iter()
                .filter_map(|&(i, name)| {
                    raw.get(i)
                        .map(|value| (name.to_string(), value.to_string()))
                })
                .collect();
            rows.push(record);
        }

        let rows_read = rows.len();
        let store = Self::from_records(rows);

        tracing::info!(
            rows_read,
            rows_kept = store.len(),
            duplicates = rows_read - store.len(),
            "Dataset parsed"
        );

        Ok(store)
    }

    /// Loads the dataset CSV from disk
    pub fn load_csv(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading dataset");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut per_budget_tier = BTreeMap::new();
        for record in self.records.iter() {
            *per_budget_tier.entry(record.budget_tier).or_insert(0) += 1;
        }

        DatasetSummary {
            records: self.len(),
            with_hotel: self.records.iter().filter(|r| r.hotel.is_present()).count(),
            with_place: self.records.iter().filter(|r| r.place.is_present()).count(),
            per_budget_tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::test_support::record;

    const CSV: &str = "\
Name_Restaurant,Latitude_x__Restaurant,Longitude_x__Restaurant,Ratings_out_of_5_Restaurant,Hotel_name,Latitude_Hotel,Longitude_Hotel,mmt_review_score_Hotel,hotel_star_rating_Hotel,Name_Place,Latitude_place_0_x,Longitude_place_0_x,Rating_Place,budget_level,City
Bukhara,28.5975,77.1736,4.6,ITC Maurya,28.5972,77.1738,4.7,5,Lodhi Garden,28.5931,77.2197,4.6,5,Delhi
Bukhara,28.5975,77.1736,4.6,ITC Maurya,28.5972,77.1738,4.7,5,Lodhi Garden,28.5931,77.2197,4.6,5,Delhi
Haldiram's,28.6562,77.2300,4.0,,,,,,Red Fort,28.6562,77.2410,4.5,1,Delhi
Indian Accent,28.5863,77.2295,4.8,The Lodhi,28.5864,77.2290,4.6,5,,,,,5,Delhi
";

    #[test]
    fn test_parse_and_deduplicate() {
        let store = DatasetStore::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);

        let records = store.records();
        assert_eq!(records[0].restaurant.name.as_deref(), Some("Bukhara"));
        assert_eq!(records[0].hotel.star_rating, Some(5.0));
        assert!(!records[1].hotel.is_present());
        assert_eq!(records[1].hotel.location, None);
        assert!(records[1].place.is_present());
        assert!(!records[2].place.is_present());
        assert_eq!(records[0].extra.get("City").map(String::as_str), Some("Delhi"));
        assert_eq!(records[0].extra.len(), 1);
    }

    #[test]
    fn test_rows_differing_only_in_unmapped_column_are_kept() {
        let csv = "\
Name_Restaurant,Latitude_x__Restaurant,Longitude_x__Restaurant,Ratings_out_of_5_Restaurant,budget_level,Cuisine
Karim's,28.6507,77.2334,4.2,2,Mughlai
Karim's,28.6507,77.2334,4.2,2,North Indian
Karim's,28.6507,77.2334,4.2,2,Mughlai
";
        let store = DatasetStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        let cuisines: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.extra["Cuisine"].as_str())
            .collect();
        assert_eq!(cuisines, vec!["Mughlai", "North Indian"]);
    }

    #[test]
    fn test_missing_required_column_fails() {
        let csv = "Name_Restaurant,Latitude_x__Restaurant\nBukhara,28.5975\n";
        let result = DatasetStore::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let result = DatasetStore::load_csv("/nonexistent/dataset.csv");
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let a = record(2, 4.5, 4.5, 3.0);
        let b = record(3, 4.0, 4.0, 4.0);
        let store = DatasetStore::from_records(vec![a.clone(), b.clone(), a.clone(), b.clone()]);
        assert_eq!(store.records(), &[a, b]);
    }

    #[test]
    fn test_rows_differing_in_one_field_are_kept() {
        let a = record(2, 4.5, 4.5, 3.0);
        let mut b = a.clone();
        b.place.rating = None;
        assert_eq!(DatasetStore::from_records(vec![a, b]).len(), 2);
    }

    #[test]
    fn test_summary() {
        let store = DatasetStore::from_reader(CSV.as_bytes()).unwrap();
        let summary = store.summary();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.with_hotel, 2);
        assert_eq!(summary.with_place, 2);
        assert_eq!(summary.per_budget_tier.get(&5), Some(&2));
        assert_eq!(summary.per_budget_tier.get(&1), Some(&1));
    }

    #[test]
    fn test_clones_share_rows() {
        let store = DatasetStore::from_records(vec![record(2, 4.5, 4.5, 3.0)]);
        let clone = store.clone();
        assert!(std::ptr::eq(store.records(), clone.records()));
    }
}
