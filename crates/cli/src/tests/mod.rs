mod output_tests;
mod support;
