// Condition knowledge base, detection and symptom lookup.
// Everything here is static data or pure functions over it.

pub mod catalog;
pub mod detector;
pub mod handlers;
pub mod symptoms;
