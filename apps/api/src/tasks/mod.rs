// Task list extraction from model responses.
// The parser never fails: every call yields a non-empty list.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod parser;
