//! HTTP client module
//!
//! - **ReqwestHttpClient**: production client resolving paths against a base URL
//! - **MockHttpClient**: scripted responses for development and tests

pub mod mock_http;
pub mod reqwest_client;

pub use mock_http::MockHttpClient;
pub use reqwest_client::ReqwestHttpClient;
