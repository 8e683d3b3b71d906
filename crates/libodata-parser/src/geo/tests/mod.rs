mod geo_nesting_tests;
mod utils;
