//! Service layer containing business logic for ferry commands.
//!
//! Services own branch resolution and the conditional-commit protocol, and
//! depend on the `GitHubApi` trait so tests can substitute a mock client.

pub mod checkin;
pub mod checkout;
pub mod update;

#[cfg(test)]
pub mod test_mocks;

pub use checkin::{CheckinService, Submitted};
pub use checkout::{CheckedOut, CheckoutService};
pub use update::{UpdateOutcome, UpdateService};
