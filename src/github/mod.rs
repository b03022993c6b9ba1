pub mod client;
pub mod error;
pub mod query;
pub mod stats;
pub mod types;

pub use client::{create_client, interpret_response, GraphqlClient, PageSource};
pub use error::FetchError;
pub use stats::fetch_stats;
pub use types::{QueryVariables, UserPage};
