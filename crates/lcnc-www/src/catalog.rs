//! Static pricing catalog
//!
//! Plan tiers, add-ons and FAQ entries shown on the pricing page. The tables
//! are declared once and never change while the process runs; declaration
//! order is display order.

use std::collections::HashSet;
use std::fmt;

use crate::error::CatalogError;

/// A plan tier card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Unique within [`PLANS`], used as the render key
    pub name: &'static str,
    /// Monthly amount in whole dollars; `None` means custom pricing
    pub price: Option<u32>,
    pub price_note: &'static str,
    pub editors: &'static str,
    pub viewers: &'static str,
    pub records: &'static str,
    pub storage: &'static str,
    pub runs: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOn {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// How a plan's price is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLabel {
    /// No list price, shown as "Custom"
    Custom,
    /// Zero price, shown as "$0" without the note
    Free,
    /// Positive price followed by its note
    Amount { amount: u32, note: &'static str },
}

impl PriceLabel {
    /// The large price figure, without the note
    pub fn headline(&self) -> String {
        match self {
            PriceLabel::Custom => "Custom".to_string(),
            PriceLabel::Free => "$0".to_string(),
            PriceLabel::Amount { amount, .. } => format!("${}", amount),
        }
    }

    pub fn note(&self) -> Option<&'static str> {
        match self {
            PriceLabel::Amount { note, .. } => Some(*note),
            _ => None,
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline())?;
        if let Some(note) = self.note() {
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

impl Plan {
    pub fn price_label(&self) -> PriceLabel {
        match self.price {
            None => PriceLabel::Custom,
            Some(0) => PriceLabel::Free,
            Some(amount) => PriceLabel::Amount {
                amount,
                note: self.price_note,
            },
        }
    }

    /// Capacity rows in display order, as (label, value)
    pub fn limits(&self) -> [(&'static str, &'static str); 5] {
        [
            ("Editors:", self.editors),
            ("Viewers:", self.viewers),
            ("Records/Base:", self.records),
            ("Storage/Base:", self.storage),
            ("Automation Runs:", self.runs),
        ]
    }
}

pub static PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: Some(0),
        price_note: "forever",
        editors: "1–2",
        viewers: "Unlimited",
        records: "5,000",
        storage: "1 GB",
        runs: "500 / mo",
        popular: false,
        features: &[
            "Basic tables & forms",
            "Public templates",
            "Slack & Zapier integration",
            "CSV/Excel import",
        ],
        cta: "Get started",
    },
    Plan {
        name: "Pro",
        price: Some(17),
        price_note: "/ editor / mo (annual)",
        editors: "Unlimited",
        viewers: "Unlimited",
        records: "100k+",
        storage: "25–50 GB",
        runs: "10,000 / mo",
        popular: true,
        features: &[
            "Advanced views (Kanban, Gallery, Gantt)",
            "Webhooks + REST API",
            "Premium templates",
            "Priority support",
        ],
        cta: "Choose Pro",
    },
    Plan {
        name: "Business",
        price: Some(37),
        price_note: "/ editor / mo (annual)",
        editors: "Unlimited",
        viewers: "Unlimited + 50 externals",
        records: "250k–500k+",
        storage: "100 GB",
        runs: "50,000 / mo",
        popular: false,
        features: &[
            "SSO/SAML, Audit logs",
            "Row-level security",
            "Admin console",
            "Private templates & marketplace",
        ],
        cta: "Talk to sales",
    },
    Plan {
        name: "Enterprise",
        price: None,
        price_note: "Custom",
        editors: "Unlimited",
        viewers: "Unlimited",
        records: "1M+ (custom)",
        storage: "Custom",
        runs: "Custom",
        popular: false,
        features: &[
            "Data residency, HIPAA/BAA",
            "VPC / BYO cloud",
            "SCIM, advanced RBAC",
            "Premium SLAs & onboarding",
        ],
        cta: "Contact us",
    },
];

pub static ADD_ONS: &[AddOn] = &[
    AddOn {
        title: "Automation Credits",
        detail: "$5 = 2,500 runs (12-month rolling validity)",
    },
    AddOn {
        title: "Premium Connectors",
        detail: "+$10 / editor / mo (incl. in Business)",
    },
    AddOn {
        title: "Extra Storage",
        detail: "+$2 / 10 GB",
    },
    AddOn {
        title: "External Users",
        detail: "After 50 free (Business): $3 / user / mo",
    },
    AddOn {
        title: "Seat-Cap Option",
        detail: "Fixed price for first 10 editors",
    },
];

pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What counts as an automation run?",
        answer: "Each time a workflow trigger fires and executes its actions (e.g., ‘on form submit → send Slack message’) it counts as one run.",
    },
    FaqEntry {
        question: "What happens when I exceed my included runs?",
        answer: "You can enable auto top-up: a $5 credit pack (2,500 runs) is purchased when your balance falls below $1. Or pause automations until you manually add credits.",
    },
    FaqEntry {
        question: "Do credits expire?",
        answer: "Credits are valid for 12 months from last use. Any usage resets the 12‑month timer (rolling validity).",
    },
    FaqEntry {
        question: "Is storage used for data or attachments?",
        answer: "Storage applies to file attachments (images, PDFs, videos). Text and numeric table data use negligible space.",
    },
    FaqEntry {
        question: "Can I switch plans anytime?",
        answer: "Yes. Upgrade/downgrade anytime. No setup or cancellation fees.",
    },
    FaqEntry {
        question: "Are viewers and clients free?",
        answer: "Viewers/commenters are free on all plans. Business includes 50 external users free, then $3 per external user per month.",
    },
];

/// Credit wallet explainer copy. The balance is a fixed illustration, not a meter.
pub const CREDIT_WALLET_TITLE: &str = "Automation Credits";
pub const CREDIT_WALLET_COPY: &str = "$5 buys 2,500 runs. Credits auto‑refill when your balance drops below $1 (optional). Credits are valid for 12 months from last use.";
pub const CREDIT_WALLET_BALANCE: &str = "1,650 / 2,500 runs left";

/// Check the shipped tables.
pub fn validate() -> Result<(), CatalogError> {
    validate_tables(PLANS, ADD_ONS, FAQS)
}

/// Check a set of tables for shape defects that would break rendering.
pub fn validate_tables(
    plans: &[Plan],
    add_ons: &[AddOn],
    faqs: &[FaqEntry],
) -> Result<(), CatalogError> {
    if plans.is_empty() {
        return Err(CatalogError::EmptyPlans);
    }

    let mut seen = HashSet::new();
    for plan in plans {
        if plan.name.trim().is_empty() {
            return Err(CatalogError::BlankField {
                plan: plan.name,
                field: "name",
            });
        }
        if !seen.insert(plan.name) {
            return Err(CatalogError::DuplicatePlan(plan.name));
        }

        for (field, value) in [("cta", plan.cta)].into_iter().chain(plan.limits()) {
            if value.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    plan: plan.name,
                    field: field.trim_end_matches(':'),
                });
            }
        }

        if matches!(plan.price, Some(amount) if amount > 0) && plan.price_note.trim().is_empty() {
            return Err(CatalogError::MissingPriceNote(plan.name));
        }
        if plan.features.is_empty() {
            return Err(CatalogError::NoFeatures(plan.name));
        }
    }

    if let Some(idx) = add_ons
        .iter()
        .position(|a| a.title.trim().is_empty() || a.detail.trim().is_empty())
    {
        return Err(CatalogError::BlankAddOn(idx));
    }

    if let Some(idx) = faqs
        .iter()
        .position(|f| f.question.trim().is_empty() || f.answer.trim().is_empty())
    {
        return Err(CatalogError::BlankFaq(idx));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &'static str, price: Option<u32>, note: &'static str) -> Plan {
        Plan {
            name,
            price,
            price_note: note,
            editors: "1",
            viewers: "1",
            records: "1",
            storage: "1 GB",
            runs: "1 / mo",
            popular: false,
            features: &["Tables"],
            cta: "Go",
        }
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        assert_eq!(validate(), Ok(()));
        assert_eq!(PLANS.len(), 4);
        assert_eq!(ADD_ONS.len(), 5);
        assert_eq!(FAQS.len(), 6);
    }

    #[test]
    fn test_price_labels_in_tier_order() {
        let labels: Vec<String> = PLANS.iter().map(|p| p.price_label().to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "$0",
                "$17/ editor / mo (annual)",
                "$37/ editor / mo (annual)",
                "Custom",
            ]
        );
    }

    #[test]
    fn test_custom_price_hides_note() {
        let label = plan("Big", None, "per seat").price_label();
        assert_eq!(label, PriceLabel::Custom);
        assert_eq!(label.to_string(), "Custom");
        assert_eq!(label.note(), None);
    }

    #[test]
    fn test_zero_price_hides_note() {
        let label = plan("Zero", Some(0), "forever").price_label();
        assert_eq!(label, PriceLabel::Free);
        assert_eq!(label.to_string(), "$0");
        assert_eq!(label.note(), None);
    }

    #[test]
    fn test_positive_price_appends_note() {
        let label = plan("Paid", Some(9), "/ mo").price_label();
        assert_eq!(label.headline(), "$9");
        assert_eq!(label.note(), Some("/ mo"));
        assert_eq!(label.to_string(), "$9/ mo");
    }

    #[test]
    fn test_only_pro_is_popular() {
        let popular: Vec<&str> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Pro"]);
    }

    #[test]
    fn test_limits_order() {
        let labels: Vec<&str> = PLANS[0].limits().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Editors:", "Viewers:", "Records/Base:", "Storage/Base:", "Automation Runs:"]
        );
        assert_eq!(PLANS[3].limits()[2].1, "1M+ (custom)");
    }

    #[test]
    fn test_validate_rejects_empty_plans() {
        assert_eq!(validate_tables(&[], ADD_ONS, FAQS), Err(CatalogError::EmptyPlans));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let plans = [plan("Solo", Some(0), ""), plan("Solo", Some(5), "/ mo")];
        assert_eq!(
            validate_tables(&plans, &[], &[]),
            Err(CatalogError::DuplicatePlan("Solo"))
        );
    }

    #[test]
    fn test_validate_rejects_paid_plan_without_note() {
        let plans = [plan("Team", Some(12), " ")];
        assert_eq!(
            validate_tables(&plans, &[], &[]),
            Err(CatalogError::MissingPriceNote("Team"))
        );
    }

    #[test]
    fn test_validate_rejects_blank_limit() {
        let mut broken = plan("Team", Some(0), "");
        broken.storage = "";
        assert_eq!(
            validate_tables(&[broken], &[], &[]),
            Err(CatalogError::BlankField {
                plan: "Team",
                field: "Storage/Base",
            })
        );
    }

    #[test]
    fn test_validate_rejects_plan_without_features() {
        let mut broken = plan("Team", None, "");
        broken.features = &[];
        assert_eq!(
            validate_tables(&[broken], &[], &[]),
            Err(CatalogError::NoFeatures("Team"))
        );
    }

    #[test]
    fn test_validate_rejects_blank_faq() {
        let faqs = [
            FaqEntry { question: "Q?", answer: "A." },
            FaqEntry { question: "Q2?", answer: "" },
        ];
        assert_eq!(
            validate_tables(PLANS, ADD_ONS, &faqs),
            Err(CatalogError::BlankFaq(1))
        );
    }
}
