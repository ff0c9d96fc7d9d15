// Adapters layer: concrete search backends.

pub mod fixture;
pub mod http;

pub use fixture::FixtureSearchBackend;
pub use http::HttpSearchBackend;
