pub mod applicant;
pub mod config;
pub mod report;
pub mod scoring;
