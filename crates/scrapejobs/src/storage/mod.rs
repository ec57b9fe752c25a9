pub mod results;

pub use results::{ResultPaths, RESULT_EXTENSION};
