//! Token layer: lexing fragments, safety validation, modifier extraction.

pub mod modifier;
pub mod safety;
pub mod tokenizer;
