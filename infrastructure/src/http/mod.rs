//! HTTP adapter for the backend REST API.

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;
