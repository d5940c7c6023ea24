mod chrome_tests;
