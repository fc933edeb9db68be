pub mod client;
pub mod rest;

pub use client::GithubApi;
pub use rest::GithubRestClient;
