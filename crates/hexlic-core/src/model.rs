//! # License Data Model
//!
//! The nested record written to an `.hexlic` file:
//!
//! ```text
//! License
//! ├── header       { version, .. }
//! ├── payload      LicensePayload
//! │   └── licenses [LicenseIdentification]
//! │       └── add_ons [AddonEntitlement]
//! └── signature    opaque hex token
//! ```
//!
//! Field declaration order in each struct IS the on-disk key order. Do not
//! reorder fields without also changing the file format.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::EntitlementCatalog;
use crate::defaults::LICENSE_DEFAULTS;
use crate::error::HexlicError;

/// One attached add-on entitlement. Shares the parent identification's
/// owner and validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonEntitlement {
    pub id: String,
    pub code: String,
    /// Always the parent identification's `id`.
    pub owner: String,
    pub start_date: String,
    pub end_date: String,
}

/// The licensed product and seat record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseIdentification {
    pub id: String,
    pub license_type: String,
    pub product: String,
    pub product_id: String,
    pub edition_id: String,
    pub seats: NonZeroU32,
    pub start_date: String,
    pub end_date: String,
    pub issued_on: String,
    pub owner: String,
    /// Catalog order.
    pub add_ons: Vec<AddonEntitlement>,
    /// Opaque feature values, carried through untouched.
    pub features: Vec<Value>,
}

/// Licensee details plus the identifications issued to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePayload {
    pub name: String,
    pub email: String,
    pub licenses: Vec<LicenseIdentification>,
}

/// Envelope metadata. `version` is always present; any other keys found
/// when decoding are kept in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseHeader {
    pub version: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LicenseHeader {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            extra: Map::new(),
        }
    }
}

/// Top-level license envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub header: LicenseHeader,
    pub payload: LicensePayload,
    pub signature: String,
}

impl License {
    /// The single identification a generated license carries.
    pub fn identification(&self) -> Option<&LicenseIdentification> {
        self.payload.licenses.first()
    }

    /// Check the structural invariants of a generated license.
    ///
    /// - the payload holds exactly one identification;
    /// - `issued_on == start_date` on that identification;
    /// - `add_ons` holds exactly the catalog codes, in catalog order, with
    ///   ids `<prefix><index>`;
    /// - every add-on's `owner`, `start_date` and `end_date` mirror it.
    ///
    /// # Errors
    ///
    /// Returns [`HexlicError::Invariant`] naming the first violation found.
    pub fn validate(&self) -> Result<(), HexlicError> {
        let count = self.payload.licenses.len();
        let ident = match self.payload.licenses.as_slice() {
            [only] => only,
            _ => {
                return Err(HexlicError::Invariant(format!(
                    "expected exactly one identification, found {count}"
                )))
            }
        };

        if ident.issued_on != ident.start_date {
            return Err(HexlicError::Invariant(format!(
                "issued_on {:?} differs from start_date {:?}",
                ident.issued_on, ident.start_date
            )));
        }

        let catalog = EntitlementCatalog::builtin();
        if ident.add_ons.len() != catalog.len() {
            return Err(HexlicError::Invariant(format!(
                "expected {} add_ons, found {}",
                catalog.len(),
                ident.add_ons.len()
            )));
        }

        for ((i, code), addon) in catalog.iter().zip(&ident.add_ons) {
            if addon.code != code {
                return Err(HexlicError::Invariant(format!(
                    "add_ons[{i}] code is {:?}, expected {code:?}",
                    addon.code
                )));
            }
            let id = LICENSE_DEFAULTS.addon_id(i);
            if addon.id != id {
                return Err(HexlicError::Invariant(format!(
                    "add_ons[{i}] ({code}) id is {:?}, expected {id:?}",
                    addon.id
                )));
            }
        }

        for (i, addon) in ident.add_ons.iter().enumerate() {
            let mirrored = [
                ("owner", &addon.owner, &ident.id),
                ("start_date", &addon.start_date, &ident.start_date),
                ("end_date", &addon.end_date, &ident.end_date),
            ];
            for (field, got, want) in mirrored {
                if got != want {
                    return Err(HexlicError::Invariant(format!(
                        "add_ons[{i}] ({}) {field} is {got:?}, expected {want:?}",
                        addon.code
                    )));
                }
            }
        }

        Ok(())
    }
}
