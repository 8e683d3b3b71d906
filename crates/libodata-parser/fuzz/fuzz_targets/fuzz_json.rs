#![no_main]

use libfuzzer_sys::fuzz_target;
use libodata_parser::json::array_or_object;
use libodata_parser::parse_json_value;

fuzz_target!(|data: &[u8]| {
    let _ = parse_json_value(data);
    if let Some(token) = array_or_object(data, 0) {
        assert!(token.next() <= data.len());
    }
});
