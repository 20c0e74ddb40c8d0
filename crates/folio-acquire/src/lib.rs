pub mod error;
pub mod fetch;
pub mod endpoints;
pub mod normalize;
pub mod dracor;
pub mod word_count;
pub mod folger;
pub mod output;
pub mod sources;

pub use error::AcquireError;
pub use endpoints::Endpoints;
pub use fetch::{Fetch, FetchResponse, HttpFetcher, StaticFetcher};
pub use sources::Sources;
pub use reqwest::StatusCode;
