pub mod config;
pub mod error;
pub mod filter;
pub mod github;
pub mod notify;
pub mod novelty;
pub mod output;
pub mod run;
pub mod storage;
