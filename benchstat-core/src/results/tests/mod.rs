mod hex_tests;
mod render_tests;
