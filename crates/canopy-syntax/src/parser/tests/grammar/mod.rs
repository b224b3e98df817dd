mod patterns_tests;
mod trivia_tests;
