mod error_aggregator_test;
