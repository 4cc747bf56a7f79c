//! Small helpers shared by the order cache crates.
mod helpers;
mod secret;

pub use helpers::env_or_default;
pub use secret::Secret;
