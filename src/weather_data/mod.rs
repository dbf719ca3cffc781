pub mod error;
pub mod fetcher;
pub mod throttle;
pub mod transport;
