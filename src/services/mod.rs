pub mod vocabulary;
pub mod word_source;
