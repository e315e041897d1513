//! Query executor seam and its parameter type.

mod executor;
mod params;

pub use executor::{QueryExecutor, QueryResult};
pub use params::SqlParam;
