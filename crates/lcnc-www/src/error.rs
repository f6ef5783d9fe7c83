//! Error types for the pricing site

use thiserror::Error;

/// Defects in the static pricing tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Plan list is empty")]
    EmptyPlans,

    #[error("Duplicate plan name: {0}")]
    DuplicatePlan(&'static str),

    #[error("Plan {plan} has a blank {field}")]
    BlankField {
        plan: &'static str,
        field: &'static str,
    },

    #[error("Paid plan {0} has no price note")]
    MissingPriceNote(&'static str),

    #[error("Plan {0} lists no features")]
    NoFeatures(&'static str),

    #[error("Add-on #{0} has a blank title or detail")]
    BlankAddOn(usize),

    #[error("FAQ entry #{0} has a blank question or answer")]
    BlankFaq(usize),
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
