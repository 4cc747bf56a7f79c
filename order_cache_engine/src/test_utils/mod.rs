//! Fixtures shared by the unit tests here and the endpoint tests in the server crate.
pub mod fixtures;
