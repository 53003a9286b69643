#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::*;
pub use test_db::*;
