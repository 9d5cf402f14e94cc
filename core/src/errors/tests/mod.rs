mod domain_error_tests;
