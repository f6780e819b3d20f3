//! Application layer wiring DTOs and services for escount.

pub mod dtos;
pub mod services;

pub use dtos::CountRequestBody;
pub use services::{CountService, MatchAllQuery, Query, RawQuery, Transport};
