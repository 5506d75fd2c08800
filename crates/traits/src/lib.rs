//! Core traits for wordcrc.
//!
//! This crate describes the capability the CRC engine depends on: a
//! stateful accumulator that only accepts whole 32-bit words. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`WordAccumulator`] | reset / write-word / read capability of a CRC device |
//! | [`BusyError`] | A shared accumulator is held by another session |
//! | [`POLYNOMIAL`] | The one polynomial every accumulator implements |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod accumulator;
pub mod error;

pub use accumulator::{POLYNOMIAL, RESET_VALUE, WORD_BYTES, WordAccumulator};
pub use error::BusyError;
