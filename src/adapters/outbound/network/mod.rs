/// Network adapters for the rebuild service REST API
mod admin;
mod artifacts;
mod builds;
mod catalog;
mod http_client;

pub use http_client::{HttpConsoleClient, Query, REQUEST_ID_HEADER};
