pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::QvapayClient;
pub use config::HttpOptions;
pub use error::QvapayError;
pub use http::{reqwest::ReqwestHttpClient, ApiResponse, HttpClient};
