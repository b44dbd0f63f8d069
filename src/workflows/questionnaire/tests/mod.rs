mod common;
mod generation;
mod matching;
