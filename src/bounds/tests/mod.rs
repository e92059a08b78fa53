mod crossing_tests;
mod projection_tests;
