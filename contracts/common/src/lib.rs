//! Shared utilities and error types for the MedLedger contract suite.
//!
//! This crate provides:
//! - [`CommonError`] — standardised error codes for all contracts.
//! - [`pausable`] — emergency-stop guard for state-mutating entry points.
//! - [`sequence`] — monotonic id counters backed by instance storage.
//! - [`validation`] — input checks for on-chain text and content ids.
//!
//! Contract-specific errors can extend the range starting at code **100** and
//! above, ensuring no collisions with the common set.

#![no_std]
#![allow(clippy::arithmetic_side_effects)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use soroban_sdk::contracterror;

pub mod pausable;
pub mod sequence;
pub mod validation;

/// Standardised error codes shared by every MedLedger contract.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authentication & authorisation |
/// | 20 – 29 | Resource not found             |
/// | 30 – 39 | Validation / input             |
/// | 40 – 49 | Contract state                 |
/// | 100+    | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 10,
    NotFound = 20,
    InvalidInput = 30,
    Paused = 40,
}
