mod tokenizer;

pub use tokenizer::Tokenizer;
