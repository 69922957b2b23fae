//! Departure charges.

use serde::{Deserialize, Serialize};

/// Billing parameters for a stay.
///
/// A stay of up to `included_hours` costs `base_charge`. Every hour beyond
/// that adds `hourly_rate`. There is no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    /// Flat charge covering the included hours.
    pub base_charge: u64,
    /// Hours covered by the flat charge.
    pub included_hours: u64,
    /// Charge for each hour past the included ones.
    pub hourly_rate: u64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_charge: 10,
            included_hours: 2,
            hourly_rate: 10,
        }
    }
}

impl Tariff {
    /// Charge for a stay of `hours` declared hours.
    ///
    /// Zero and negative hours are billed as the flat charge.
    #[must_use]
    pub fn charge(&self, hours: i64) -> u64 {
        let extra = u64::try_from(hours)
            .unwrap_or(0)
            .saturating_sub(self.included_hours);
        self.base_charge
            .saturating_add(self.hourly_rate.saturating_mul(extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tariff_charges() {
        let tariff = Tariff::default();
        assert_eq!(tariff.charge(1), 10);
        assert_eq!(tariff.charge(2), 10);
        assert_eq!(tariff.charge(3), 20);
        assert_eq!(tariff.charge(5), 40);
    }

    #[test]
    fn test_zero_and_negative_hours_pay_base() {
        let tariff = Tariff::default();
        assert_eq!(tariff.charge(0), 10);
        assert_eq!(tariff.charge(-4), 10);
    }

    #[test]
    fn test_custom_tariff() {
        let tariff = Tariff {
            base_charge: 5,
            included_hours: 1,
            hourly_rate: 3,
        };
        assert_eq!(tariff.charge(1), 5);
        assert_eq!(tariff.charge(4), 14);
    }

    #[test]
    fn test_charge_saturates() {
        let tariff = Tariff::default();
        assert_eq!(tariff.charge(i64::MAX), u64::MAX);
    }
}
