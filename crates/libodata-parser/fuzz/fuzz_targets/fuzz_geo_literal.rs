#![no_main]

use libfuzzer_sys::fuzz_target;
use libodata_parser::geo::geo_literal;
use libodata_parser::geo::geography_collection;
use libodata_parser::geo::geometry_multi_polygon;
use libodata_parser::recognizer::Recognizer;

fuzz_target!(|data: &[u8]| {
    let recognizers: [Recognizer; 3] = [geo_literal, geography_collection, geometry_multi_polygon];
    for recognizer in recognizers {
        if let Some(token) = recognizer(data, 0) {
            assert!(token.next() <= data.len());
        }
    }
});
