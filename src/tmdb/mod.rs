pub mod client;
pub mod source;
pub mod types;

pub use client::TmdbClient;
pub use source::{MovieSource, TmdbError};
pub use types::{Movie, MovieListResponse, poster_url};
