//! GraphQL API for collecting feedback on videos.
//!
//! `main` wires these modules together; they are exposed as a library so integration
//! tests can build the same schema and router against a test database.

pub mod api;
pub mod config;
pub mod graphql;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
