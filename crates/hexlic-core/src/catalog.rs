//! # Entitlement Catalog
//!
//! The fixed, ordered list of decompiler add-on codes attached to every
//! generated license. One code per processor architecture; the order here
//! is the order of `add_ons` in the output file.

/// Number of entries in [`ENTITLEMENT_CODES`].
pub const ENTITLEMENT_COUNT: usize = 11;

/// Decompiler add-on codes, in attachment order.
pub const ENTITLEMENT_CODES: [&str; ENTITLEMENT_COUNT] = [
    "HEXX86",
    "HEXX64",
    "HEXARM",
    "HEXARM64",
    "HEXMIPS",
    "HEXMIPS64",
    "HEXPPC",
    "HEXPPC64",
    "HEXRV64",
    "HEXARC",
    "HEXARC64",
];

/// Read-only view over an ordered list of entitlement codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementCatalog {
    codes: &'static [&'static str],
}

impl EntitlementCatalog {
    /// The built-in decompiler catalog.
    pub const fn builtin() -> Self {
        Self {
            codes: &ENTITLEMENT_CODES,
        }
    }

    /// Codes in attachment order.
    pub fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    /// Iterate `(index, code)` pairs in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static str)> {
        self.codes.iter().copied().enumerate()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for EntitlementCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
