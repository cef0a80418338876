//! HTTP transport for the clipboard service

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
