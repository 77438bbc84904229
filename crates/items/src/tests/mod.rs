mod equipment_tests;
