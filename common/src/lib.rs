//! Data model shared between the template backend and its API clients.

pub mod model;
pub mod requests;
pub mod responses;
