//! Feed configuration (overrides).
//!
//! This module centralizes the one selection knob of the engine: how a byte
//! range is pushed into the accumulator.
//!
//! - `auto`: fold the unaligned head and tail, write the aligned middle as
//!   whole words
//! - `subword`: fold everything, three bytes at a time
//!
//! Both paths produce identical CRCs. `subword` is slower and exists to run
//! the corrector against real hardware on every byte.
//!
//! With the `std` feature, `WORDCRC_FEED_FORCE` is read once per process.

/// Forced feed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeedForce {
  /// Fold head and tail, write aligned words.
  #[default]
  Auto,
  /// Route every byte through the sub-word corrector.
  Subword,
}

impl FeedForce {
  /// Name accepted by `WORDCRC_FEED_FORCE`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Subword => "subword",
    }
  }
}

/// Effective feed configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FeedConfig {
  /// Feed path new sessions use unless told otherwise.
  pub force: FeedForce,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Option<FeedForce>,
}

/// Parse a `WORDCRC_FEED_FORCE` value. Unknown values are ignored.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_force(value: &str) -> Option<FeedForce> {
  let value = value.trim();
  if value.eq_ignore_ascii_case("auto") || value.eq_ignore_ascii_case("words") {
    return Some(FeedForce::Auto);
  }
  if value.eq_ignore_ascii_case("subword")
    || value.eq_ignore_ascii_case("bytes")
    || value.eq_ignore_ascii_case("corrector")
  {
    return Some(FeedForce::Subword);
  }
  None
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let force = std::env::var("WORDCRC_FEED_FORCE").ok().as_deref().and_then(parse_force);
  Overrides { force }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective feed configuration.
#[inline]
#[must_use]
pub fn get() -> FeedConfig {
  let ov = overrides();
  FeedConfig {
    force: ov.force.unwrap_or_default(),
  }
}
