// Routine synthesis from detected conditions, and its flattening into tasks.

pub mod handlers;
pub mod personalized;
pub mod synthesizer;
