pub mod issues;
pub mod pull;
