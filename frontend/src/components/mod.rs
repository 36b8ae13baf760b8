pub mod analyzer;
pub mod doctors;
pub mod footer;
pub mod handlers;
pub mod hero;
pub mod navbar;
pub mod results;
pub mod utils;
