//! Assessment service client
//!
//! This module owns the boundary to the remote assessment endpoint:
//! - Wire request/response types for POST /api/assessment/message
//! - The `AssessmentBackend` trait the session engine calls
//! - The reqwest client with the network-failure fallback policy

mod client;
mod messages;

pub use client::{AssessmentBackend, AssessmentClient, FALLBACK_FEEDBACK};
pub use messages::{AssessmentReply, AssessmentRequest, AssessmentResponse, DEFAULT_FEEDBACK};
