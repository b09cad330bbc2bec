// Prompt contracts for the vision model and post-processing of its
// narrative analysis. No model calls happen here.

pub mod enhance;
pub mod handlers;
pub mod prompts;
