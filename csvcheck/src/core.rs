// src/core.rs
pub mod discovery;
pub mod parser;
pub mod validator;

#[cfg(test)]
pub mod test_utils;
