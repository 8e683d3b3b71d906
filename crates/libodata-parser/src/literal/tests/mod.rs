mod duration_literal_tests;
mod enum_literal_tests;
mod guid_literal_tests;
mod keyword_literal_tests;
mod primitive_literal_tests;
mod temporal_literal_tests;
mod utils;
