mod json_primitive_tests;
