//! Pricing page components

mod cards;
mod cta;
mod disclosure;

pub use cards::*;
pub use cta::FooterCta;
pub use disclosure::{Disclosure, FaqItem};
