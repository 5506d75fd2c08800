//! Word accumulators for wordcrc.
//!
//! This crate provides the devices the engine in `wordcrc` drives through
//! [`traits::WordAccumulator`], plus the reference shift register they are
//! all checked against.
//!
//! # Devices
//!
//! | Type | Backend name | Use |
//! |------|--------------|-----|
//! | [`SoftCrc`] | `soft/bitwise` | Simulated peripheral, bit-serial (test oracle) |
//! | [`TableCrc`] | `soft/table` | Simulated peripheral, 256-entry table |
//! | [`Stm32Crc`] | `stm32/mmio` | STM32 CRC unit via volatile MMIO |
//!
//! # Example
//!
//! ```
//! use device::{SoftCrc, reference::crc32_msb_bitwise};
//! use traits::WordAccumulator;
//!
//! let mut acc = SoftCrc::new();
//! acc.write(u32::from_be_bytes(*b"1234"));
//! assert_eq!(acc.read(), crc32_msb_bitwise(0xFFFF_FFFF, b"1234"));
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod reference;
mod soft;
pub mod stm32;
mod table;

pub use soft::SoftCrc;
pub use stm32::Stm32Crc;
pub use table::{TableCrc, generate_table, table_entry};
