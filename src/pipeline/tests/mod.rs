mod bands_tests;
mod hue_tests;
mod profile_tests;
mod select_tests;
mod stats_tests;
mod stretch_tests;
mod test_utils;
mod threshold_tests;
