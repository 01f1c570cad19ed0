pub mod response_selector;
pub mod scoring;
