pub mod pipeline;
pub mod reasons;
pub mod scoring;
pub mod taxonomy;
