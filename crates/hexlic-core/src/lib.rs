//! # hexlic-core — License Record Model
//!
//! Builds the nested license record (identification, add-on entitlements,
//! payload, envelope) and renders it into the compact canonical text that
//! lands in an `.hexlic` file.
//!
//! ## Key Design Principles
//!
//! 1. **Injected clock.** The builder never reads the system clock itself.
//!    Every timestamp comes from a [`TimeProvider`], so a [`FixedClock`]
//!    makes generation fully deterministic.
//!
//! 2. **Declared field order.** Entities derive `Serialize`; serde emits
//!    fields in declaration order, and `serde_json` is built with
//!    `preserve_order`, so the canonical form follows the schema order
//!    without any per-entity conversion code.
//!
//! 3. **Immutable defaults.** Identity fields, the entitlement catalog and
//!    the signature token are `const` data in [`defaults`] and [`catalog`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hexlic-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod builder;
pub mod canonical;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod model;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use builder::LicenseBuilder;
pub use canonical::{decode, decode_canonical, encode, to_canonical_form, CanonicalText};
pub use catalog::{EntitlementCatalog, ENTITLEMENT_CODES};
pub use defaults::{LicenseDefaults, DEFAULT_OUTPUT, LICENSE_DEFAULTS};
pub use error::{CanonicalizationError, ClockError, HexlicError};
pub use model::{AddonEntitlement, License, LicenseHeader, LicenseIdentification, LicensePayload};
pub use temporal::{FixedClock, SystemClock, TimeProvider};
