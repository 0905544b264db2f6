mod lines;
mod tokenizer;

pub use lines::{Line, LineReader};
pub use tokenizer::tokenize;
