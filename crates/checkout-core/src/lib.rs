//! # checkout-core
//!
//! Amount resolution and fee calculation for a donation checkout form.
//!
//! This crate is the pure-domain half of the checkout: it turns user
//! interaction (preset clicks, free-typed amounts, frequency changes,
//! page-level overrides) into a single authoritative contribution amount,
//! and computes the optional processing fee a contributor can agree to
//! cover. No I/O lives here; everything is synchronous and unit-testable
//! without a rendering environment or a network.
//!
//! ## Amount resolution at a glance
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  One-time   [ $60 ] [ $120 ] [ $180 ]   Other: [______]      │
//! │                                                              │
//! │  preset click ──────────▶ resolved = preset value            │
//! │  custom typing ─────────▶ resolved = parsed value (custom    │
//! │                           always wins over presets)          │
//! │  frequency change ──────▶ custom text cleared, value never   │
//! │                           carries over                       │
//! │  page override ─────────▶ custom field forced + pre-filled,  │
//! │                           survives frequency changes         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All monetary values are [`rust_decimal::Decimal`] - never use f64 for
//! money.

pub mod amount;
pub mod currency;
pub mod error;
pub mod fees;
pub mod interval;
pub mod page;

pub use amount::{AmountSelection, Selected};
pub use currency::Currency;
pub use error::{CoreError, Result};
pub use fees::{calculate_fee, fee_notice};
pub use interval::ContributionInterval;
pub use page::{AmountOptions, DonationPage, ElementType, PageElement, RevenueProgram};
