//! Client for the campus wayfinding API plus a concurrent resolver that
//! turns eatery map pins into walking distances.

mod client;
mod models;
mod resolver;

pub use client::*;
pub use models::*;
pub use resolver::*;
