/*!
# Language Module

This module provides lexical analysis of calculator input fragments.

*/

#[macro_use]
mod error;
mod lex;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::tokenize;

pub type Column = std::ops::Range<usize>;
