//! Career analysis — typed model replies, prompt templates, the pluggable
//! analyst backend, and the full-analysis aggregation pipeline.

pub mod aggregator;
pub mod analyst;
pub mod handlers;
pub mod models;
pub mod prompts;
