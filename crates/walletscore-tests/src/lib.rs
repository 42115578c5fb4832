//! End-to-end and property test suite for Walletscore.
//!
//! Runs the full normalize → aggregate → score pipeline over realistic and
//! adversarial transaction logs and checks the output invariants.

pub mod helpers;
