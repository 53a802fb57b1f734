//! HTTP client for the Syncano REST API.
//!
//! This module provides the request plumbing and the response
//! classification layer shared by every remote operation.

mod client;
mod endpoints;
pub mod response;

pub(crate) use client::ApiClient;
