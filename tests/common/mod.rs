#![allow(dead_code)]

pub mod strategies;
pub mod test_app;

pub use strategies::*;
pub use test_app::*;
