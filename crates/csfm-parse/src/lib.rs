use csfm_tokenizer::TokenStore;

mod arena;
mod error;
mod grammar;
mod parser;
#[cfg(test)]
mod tests;
mod tree;

pub use arena::Key;
pub use error::Error;
pub use tree::{Children, Document, Node, NodeId, NodeKind, Preorder, Siblings, WalkEvent};

/// Tokenizes and parses `bytes` into a document.
pub fn parse(bytes: &[u8]) -> Result<Document, Error> {
    let tokens = csfm_tokenizer::tokenize(bytes)?;
    parse_tokens(&tokens)
}

/// Builds the document from an already materialized token store.
pub fn parse_tokens(tokens: &TokenStore) -> Result<Document, Error> {
    let mut parser = parser::Parser::new(tokens)?;
    grammar::document(&mut parser)?;
    Ok(parser.finish())
}
