#![allow(dead_code)]
pub mod prepare_env;

#[path = "../../src/test_utils/fixtures.rs"]
pub mod fixtures;
