pub mod add;
pub mod clear;
pub mod common;
pub mod complete;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
