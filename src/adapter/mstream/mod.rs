//! mStream Adapter
//!
//! mStreamサーバーのREST APIとの統合

pub mod client;
pub mod models;

pub use client::MstreamClient;
