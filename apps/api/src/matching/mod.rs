//! Job matching: signal extraction from a job posting and a CV, and the fit
//! report built from their set differences.

pub mod fit_scoring;
pub mod handlers;
pub mod jd_parser;
