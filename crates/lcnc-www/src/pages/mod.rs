//! Site pages

mod pricing;

pub use pricing::PricingPage;
