//! Billing period toggle

use crate::catalog::{Plan, PLANS};

/// Billing cadence selected in the hero toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Annual,
    Monthly,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Annual, BillingPeriod::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            BillingPeriod::Annual => "Annual billing",
            BillingPeriod::Monthly => "Monthly billing",
        }
    }

    pub fn toggle_class(&self, selected: BillingPeriod) -> &'static str {
        if *self == selected {
            "px-4 py-1.5 rounded-full text-sm font-medium bg-gray-900 text-white"
        } else {
            "px-4 py-1.5 rounded-full text-sm font-medium text-gray-700"
        }
    }
}

/// Plans to show for a billing period.
///
/// Listed prices are already annual-billed monthly amounts and the monthly
/// view shows them unchanged.
pub fn display_plans(_period: BillingPeriod) -> &'static [Plan] {
    PLANS
}
