//! End-to-End Mapping Tests
//!
//! These tests run the ProSanté Connect mapper the way the identity server
//! does: parse the provider options once, then map userinfo payloads.

mod common;
mod configuration;
