#![no_main]

use libfuzzer_sys::fuzz_target;
use libodata_parser::literal::PRIMITIVE_LITERAL_ALTERNATIVES;
use libodata_parser::literal::primitive_literal;

fuzz_target!(|data: &[u8]| {
    for index in 0..=data.len() {
        if let Some(token) = primitive_literal(data, index) {
            assert_eq!(token.start(), index);
            assert!(token.next() <= data.len());
        }
    }
    for alternative in PRIMITIVE_LITERAL_ALTERNATIVES {
        let _ = (alternative.recognize)(data, 0);
    }
});
