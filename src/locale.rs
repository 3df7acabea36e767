//! Display labels for shift types.
//!
//! Derived shift names embed the shift type label, so the label language is
//! part of the configuration rather than a presentation concern.

use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

/// Language used for derived labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Turkish.
    Tr,
}

impl Locale {
    /// Returns the label of a shift type in this locale.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_management::locale::Locale;
    /// use shift_management::models::ShiftType;
    ///
    /// assert_eq!(Locale::En.shift_type_label(ShiftType::Night), "Night Shift");
    /// assert_eq!(Locale::Tr.shift_type_label(ShiftType::Night), "Gece Vardiyası");
    /// ```
    pub fn shift_type_label(self, shift_type: ShiftType) -> &'static str {
        match (self, shift_type) {
            (Locale::En, ShiftType::Morning) => "Morning Shift",
            (Locale::En, ShiftType::Afternoon) => "Afternoon Shift",
            (Locale::En, ShiftType::Night) => "Night Shift",
            (Locale::En, ShiftType::Custom) => "Custom Shift",
            (Locale::Tr, ShiftType::Morning) => "Sabah Vardiyası",
            (Locale::Tr, ShiftType::Afternoon) => "Öğleden Sonra Vardiyası",
            (Locale::Tr, ShiftType::Night) => "Gece Vardiyası",
            (Locale::Tr, ShiftType::Custom) => "Özel Vardiya",
        }
    }
}
