//! # License Builder
//!
//! Assembles a complete [`License`] from the built-in defaults, the
//! entitlement catalog and an injected [`TimeProvider`].
//!
//! The clock is read exactly twice per build: once for the start of the
//! validity window and once for its end. Both values are then copied into
//! every date field, so all dates within one license agree.

use std::num::NonZeroU32;

use crate::catalog::EntitlementCatalog;
use crate::defaults::{LicenseDefaults, LICENSE_DEFAULTS};
use crate::error::HexlicError;
use crate::model::{
    AddonEntitlement, License, LicenseHeader, LicenseIdentification, LicensePayload,
};
use crate::temporal::TimeProvider;

/// Builds a license against a borrowed time source.
pub struct LicenseBuilder<'a, C: TimeProvider + ?Sized> {
    clock: &'a C,
    defaults: LicenseDefaults,
    catalog: EntitlementCatalog,
}

impl<'a, C: TimeProvider + ?Sized> LicenseBuilder<'a, C> {
    /// Builder using [`LICENSE_DEFAULTS`] and the built-in catalog.
    pub fn new(clock: &'a C) -> Self {
        Self {
            clock,
            defaults: LICENSE_DEFAULTS,
            catalog: EntitlementCatalog::builtin(),
        }
    }

    /// Generate a fresh license.
    ///
    /// # Errors
    ///
    /// Returns [`HexlicError::Clock`] if the time source cannot produce the
    /// end of the validity window, or [`HexlicError::Invariant`] if the
    /// configured seat count is zero.
    pub fn build(&self) -> Result<License, HexlicError> {
        let d = &self.defaults;

        let start = self.clock.current_time();
        let end = self.clock.future_time(d.validity_years)?;
        tracing::debug!(start = %start, end = %end, "validity window");

        let seats = NonZeroU32::new(d.seats)
            .ok_or_else(|| HexlicError::Invariant("seat count must be at least 1".to_string()))?;

        let add_ons: Vec<AddonEntitlement> = self
            .catalog
            .iter()
            .map(|(i, code)| AddonEntitlement {
                id: d.addon_id(i),
                code: code.to_string(),
                owner: d.id.to_string(),
                start_date: start.clone(),
                end_date: end.clone(),
            })
            .collect();
        tracing::debug!(add_ons = add_ons.len(), "attached catalog entitlements");

        let identification = LicenseIdentification {
            id: d.id.to_string(),
            license_type: d.license_type.to_string(),
            product: d.product.to_string(),
            product_id: d.product_id.to_string(),
            edition_id: d.edition_id.to_string(),
            seats,
            start_date: start.clone(),
            end_date: end,
            issued_on: start,
            owner: d.owner.to_string(),
            add_ons,
            features: Vec::new(),
        };

        Ok(License {
            header: LicenseHeader::new(d.header_version),
            payload: LicensePayload {
                name: d.name.to_string(),
                email: d.email.to_string(),
                licenses: vec![identification],
            },
            signature: d.signature.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ENTITLEMENT_CODES;
    use crate::error::ClockError;
    use crate::temporal::FixedClock;

    /// Returns canned strings regardless of the requested year count.
    struct StaticClock {
        now: &'static str,
        future: &'static str,
    }

    impl TimeProvider for StaticClock {
        fn current_time(&self) -> String {
            self.now.to_string()
        }

        fn future_time(&self, _years: u32) -> Result<String, ClockError> {
            Ok(self.future.to_string())
        }
    }

    /// Records the year count it was asked for.
    struct RecordingClock(std::cell::Cell<Option<u32>>);

    impl TimeProvider for RecordingClock {
        fn current_time(&self) -> String {
            "2024-01-01 00:00:00".to_string()
        }

        fn future_time(&self, years: u32) -> Result<String, ClockError> {
            self.0.set(Some(years));
            Ok("later".to_string())
        }
    }

    fn static_clock() -> StaticClock {
        StaticClock {
            now: "2024-01-01 00:00:00",
            future: "2034-01-01 00:00:00",
        }
    }

    #[test]
    fn test_identification_dates() {
        let lic = LicenseBuilder::new(&static_clock()).build().unwrap();
        let ident = lic.identification().unwrap();
        assert_eq!(ident.start_date, "2024-01-01 00:00:00");
        assert_eq!(ident.issued_on, "2024-01-01 00:00:00");
        assert_eq!(ident.end_date, "2034-01-01 00:00:00");
    }

    #[test]
    fn test_addons_follow_catalog() {
        let lic = LicenseBuilder::new(&static_clock()).build().unwrap();
        let ident = lic.identification().unwrap();
        assert_eq!(ident.add_ons.len(), 11);

        let codes: Vec<&str> = ident.add_ons.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, ENTITLEMENT_CODES);

        for (i, addon) in ident.add_ons.iter().enumerate() {
            assert_eq!(addon.id, format!("48-1337-DEAD-{i}"));
            assert_eq!(addon.owner, ident.id);
            assert_eq!(addon.start_date, ident.start_date);
            assert_eq!(addon.end_date, ident.end_date);
        }
        assert_eq!(ident.add_ons[10].id, "48-1337-DEAD-10");
    }

    #[test]
    fn test_identity_defaults() {
        let lic = LicenseBuilder::new(&static_clock()).build().unwrap();
        let ident = lic.identification().unwrap();
        assert_eq!(ident.id, "48-2437-ACBD-29");
        assert_eq!(ident.license_type, "named");
        assert_eq!(ident.product, "IDA");
        assert_eq!(ident.product_id, "IDAPRO");
        assert_eq!(ident.edition_id, "ida-pro");
        assert_eq!(ident.seats.get(), 1);
        assert_eq!(ident.owner, "0x0060");
        assert!(ident.features.is_empty());

        assert_eq!(lic.header.version, 1);
        assert!(lic.header.extra.is_empty());
        assert_eq!(lic.payload.name, "0x0060");
        assert_eq!(lic.payload.email, "ren@0x0060.dev");
        assert_eq!(lic.payload.licenses.len(), 1);
        assert_eq!(lic.signature, crate::defaults::SIGNATURE);
    }

    #[test]
    fn test_requests_ten_year_window() {
        let clock = RecordingClock(std::cell::Cell::new(None));
        LicenseBuilder::new(&clock).build().unwrap();
        assert_eq!(clock.0.get(), Some(10));
    }

    #[test]
    fn test_built_license_validates() {
        let clock = FixedClock::parse("2024-07-04 09:15:00").unwrap();
        let lic = LicenseBuilder::new(&clock).build().unwrap();
        lic.validate().unwrap();
        assert_eq!(lic.identification().unwrap().end_date, "2034-07-02 09:15:00");
    }

    #[test]
    fn test_deterministic_with_fixed_clock() {
        let clock = FixedClock::parse("2024-01-01 00:00:00").unwrap();
        let a = LicenseBuilder::new(&clock).build().unwrap();
        let b = LicenseBuilder::new(&clock).build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clock_failure_aborts() {
        struct BrokenClock;
        impl TimeProvider for BrokenClock {
            fn current_time(&self) -> String {
                "2024-01-01 00:00:00".to_string()
            }
            fn future_time(&self, years: u32) -> Result<String, ClockError> {
                Err(ClockError::Overflow {
                    from: self.current_time(),
                    years,
                })
            }
        }
        let err = LicenseBuilder::new(&BrokenClock).build().unwrap_err();
        assert!(matches!(err, HexlicError::Clock(_)));
    }

    #[test]
    fn test_dyn_provider() {
        let clock: Box<dyn TimeProvider> = Box::new(static_clock());
        let lic = LicenseBuilder::new(clock.as_ref()).build().unwrap();
        assert_eq!(lic.identification().unwrap().end_date, "2034-01-01 00:00:00");
    }
}
