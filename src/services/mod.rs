pub mod budget;
pub mod dataset;
pub mod filter;
pub mod geo;
pub mod itinerary;
pub mod ranking;
pub mod recommendations;
pub mod similarity;

#[cfg(test)]
pub(crate) mod test_support;

pub use dataset::{DatasetStore, DatasetSummary};
pub use itinerary::{ItineraryAssembler, DEFAULT_SHORTLIST_SIZE};
pub use recommendations::recommend;
