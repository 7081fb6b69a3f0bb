//! # Built-in License Defaults
//!
//! Every generation run starts from [`LICENSE_DEFAULTS`]. Nothing here is
//! mutated at runtime and nothing is persisted between runs.

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "idapro.hexlic";

/// Opaque signature token carried verbatim in the envelope. Never computed
/// or verified.
pub const SIGNATURE: &str = concat!(
    "3238353E900849B6547801BBF8AF31E7822CB4B74A6F54DE03F5E9DFF96AC5DA",
    "981B50A62EAAF021F2052CC44498107B36C2D3B34C86B7B48084313189274A1D",
    "5D1F45C1F512820C508EA22ABA43EC584E6FEFF6BA9969DD428268F40859AFFE",
    "8A2E5BB66CA9C71E78FCAC14E3168D26D11952A71C0F330251D9D74FFC67BD24",
);

/// Identity and envelope constants used by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseDefaults {
    /// Envelope schema version.
    pub header_version: u32,
    pub id: &'static str,
    pub license_type: &'static str,
    pub product: &'static str,
    pub product_id: &'static str,
    pub edition_id: &'static str,
    pub seats: u32,
    /// Owner handle on the identification.
    pub owner: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    /// Add-on ids are this prefix followed by the zero-based catalog index.
    pub addon_id_prefix: &'static str,
    /// Validity window length passed to `TimeProvider::future_time`.
    pub validity_years: u32,
    pub signature: &'static str,
}

/// The defaults every run starts from.
pub const LICENSE_DEFAULTS: LicenseDefaults = LicenseDefaults {
    header_version: 1,
    id: "48-2437-ACBD-29",
    license_type: "named",
    product: "IDA",
    product_id: "IDAPRO",
    edition_id: "ida-pro",
    seats: 1,
    owner: "0x0060",
    name: "0x0060",
    email: "ren@0x0060.dev",
    addon_id_prefix: "48-1337-DEAD-",
    validity_years: 10,
    signature: SIGNATURE,
};

impl LicenseDefaults {
    /// Deterministic add-on id for catalog position `index`.
    pub fn addon_id(&self, index: usize) -> String {
        format!("{}{index}", self.addon_id_prefix)
    }
}

impl Default for LicenseDefaults {
    fn default() -> Self {
        LICENSE_DEFAULTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_256_hex_chars() {
        assert_eq!(SIGNATURE.len(), 256);
        assert!(SIGNATURE.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_addon_id() {
        assert_eq!(LICENSE_DEFAULTS.addon_id(0), "48-1337-DEAD-0");
        assert_eq!(LICENSE_DEFAULTS.addon_id(10), "48-1337-DEAD-10");
    }

    #[test]
    fn test_seats_at_least_one() {
        assert!(LICENSE_DEFAULTS.seats >= 1);
    }
}
