// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Personal, visa and address details of a person.
///
/// This is the block copied from a candidate into a joining notice and
/// from an approved joining notice into the employee record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonalDetails {
    /// Full legal name.
    pub full_name: String,
    /// Name in katakana.
    pub name_kana: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub birth_date: Option<Date>,
    /// Residence status category.
    pub visa_type: Option<String>,
    pub visa_expiry: Option<Date>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub building_name: Option<String>,
}

impl PersonalDetails {
    /// Creates personal details with only a name set.
    #[must_use]
    pub fn named(full_name: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
            ..Self::default()
        }
    }
}

/// How to reach a candidate, and whom to call in an emergency.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// Physical measurements used for uniform and safety-gear sizing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhysicalDetails {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub shoe_size_cm: Option<f64>,
    pub blood_type: Option<String>,
    pub wears_glasses: Option<bool>,
}
