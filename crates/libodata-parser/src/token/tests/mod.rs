mod edm_type_tests;
