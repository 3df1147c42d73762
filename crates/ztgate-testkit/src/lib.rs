//! # ztgate Testkit
//!
//! Testing utilities for the ztgate gateway.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a wired-up gateway over an in-memory wallet and an
//!   in-process ledger with the standard contracts installed
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up end-to-end scenarios:
//!
//! ```rust
//! use ztgate_testkit::TestFixture;
//!
//! # async fn example() {
//! let fixture = TestFixture::new();
//! fixture.enroll("alice").await;
//!
//! let result = fixture
//!     .gateway
//!     .create_task(Some("alice"), "t1", "a training task")
//!     .await;
//! assert!(result.is_ok());
//! # }
//! ```
//!
//! The installed contract handlers are deliberately small simulations of the
//! task/model/stats/endorse chaincode, just enough to exercise the gateway's
//! consensus semantics and error paths.

pub mod fixtures;
pub mod generators;

pub use fixtures::{
    endorse_contract, install_default_contracts, make_identity, model_contract, stats_contract,
    task_contract, TestFixture,
};
pub use generators::{identity, json_value, username};
