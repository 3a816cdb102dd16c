pub mod disney;
pub mod error;
pub mod filter;
pub mod handler;
pub mod merge;
pub mod model;
pub mod park;
pub mod schedule;
pub mod source;
pub mod time;
pub mod wait_times;

pub use error::{ParkError, Result};
pub use park::ParkService;
