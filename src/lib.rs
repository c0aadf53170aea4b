pub mod error;
pub mod filter;
pub mod stats;
pub mod store;
pub mod model;
pub mod parser;
pub mod storage;
pub mod config;

pub mod library;
pub mod contacts;
pub mod notes;
pub mod bmi;
pub mod expenses;
pub mod game;
pub mod temperature;
pub mod text;

pub mod menu;

pub use error::{Error, Result};
pub use filter::Order;
pub use stats::Statistics;
pub use store::{Flagged, Record, RecordStore};
