//! # GridNode Test Suite
//!
//! Unified test crate exercising the node end to end over signed
//! envelopes: bootstrap, role/user/worker management, authorization
//! denials, and the sanitization boundary.
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # TestNode fixture and signed-request helpers
//! └── integration/      # End-to-end flows through NodeService::handle
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gn-tests
//! ```

#![allow(dead_code)]

pub mod harness;
pub mod integration;
