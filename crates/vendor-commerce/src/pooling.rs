//! Group-buying pools.
//!
//! A pool aggregates demand from nearby vendors toward a target quantity
//! that unlocks a lower unit price. Progress is never enforced as a cap;
//! joins clamp their contribution to the remaining target instead, and
//! display code clamps the percentage.

use crate::error::StoreError;
use crate::ids::PoolId;
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time left until a pool closes, for the card countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCountdown {
    pub hours: i64,
    pub minutes: i64,
}

impl PoolCountdown {
    /// "4h 32m" above an hour, "45m" below it.
    pub fn label(&self) -> String {
        if self.hours > 0 {
            format!("{}h {}m", self.hours, self.minutes)
        } else {
            format!("{}m", self.minutes)
        }
    }
}

/// A group-buying pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkPool {
    /// Unique pool identifier.
    pub id: PoolId,
    /// English product name.
    pub name: String,
    /// Hindi product name.
    pub name_hi: String,
    /// Quantity (kg) that unlocks the group price.
    pub target_quantity: u32,
    /// Quantity accumulated so far.
    pub current_quantity: u32,
    /// Group unit price once the target is met.
    pub target_price: Money,
    /// Individual unit price without the pool.
    pub current_price: Money,
    /// Advertised total savings for the listing card.
    pub savings: Money,
    /// When the pool closes.
    pub ends_at: DateTime<Utc>,
    /// Pickup location.
    pub location: String,
    /// Members who have joined.
    pub participants: u32,
    /// Participant cap.
    pub max_participants: u32,
    /// This vendor's contribution (kg), zero unless joined.
    pub my_contribution: u32,
    /// Whether this vendor has joined.
    pub is_joined: bool,
}

impl BulkPool {
    /// Raw completion percentage; seeds and display math may exceed 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target_quantity == 0 {
            return 0.0;
        }
        self.current_quantity as f64 / self.target_quantity as f64 * 100.0
    }

    /// Completion percentage clamped for progress bars.
    pub fn display_progress(&self) -> f64 {
        self.progress_percent().clamp(0.0, 100.0)
    }

    /// Whether the pool reached its target.
    pub fn is_complete(&self) -> bool {
        self.progress_percent() >= 100.0
    }

    /// Units still needed to reach the target.
    pub fn remaining_quantity(&self) -> u32 {
        self.target_quantity.saturating_sub(self.current_quantity)
    }

    /// Whether the join button is enabled.
    pub fn can_join(&self) -> bool {
        !self.is_joined && !self.is_complete() && self.participants < self.max_participants
    }

    /// Join the pool with a contribution in units.
    ///
    /// The contribution is clamped to the remaining target. Returns the
    /// quantity actually contributed.
    pub fn join(&mut self, contribution: u32) -> Result<u32, StoreError> {
        if self.is_joined {
            return Err(StoreError::AlreadyJoined(self.id.to_string()));
        }
        if self.is_complete() {
            return Err(StoreError::PoolComplete(self.id.to_string()));
        }
        if self.participants >= self.max_participants {
            return Err(StoreError::PoolFull(
                self.id.to_string(),
                self.participants,
                self.max_participants,
            ));
        }
        if contribution == 0 {
            return Err(StoreError::InvalidContribution(contribution));
        }

        let contribution = contribution.min(self.remaining_quantity());
        self.current_quantity += contribution;
        self.participants += 1;
        self.my_contribution = contribution;
        self.is_joined = true;
        tracing::debug!(pool = %self.id, contribution, "joined pool");
        Ok(contribution)
    }

    /// Leave the pool, withdrawing the recorded contribution.
    ///
    /// Returns the quantity withdrawn.
    pub fn leave(&mut self) -> Result<u32, StoreError> {
        if !self.is_joined {
            return Err(StoreError::NotAMember(self.id.to_string()));
        }
        let withdrawn = self.my_contribution;
        self.current_quantity = self.current_quantity.saturating_sub(withdrawn);
        self.participants = self.participants.saturating_sub(1);
        self.my_contribution = 0;
        self.is_joined = false;
        tracing::debug!(pool = %self.id, withdrawn, "left pool");
        Ok(withdrawn)
    }

    /// What a contribution of `quantity` units saves versus buying alone.
    pub fn savings_for(&self, quantity: u32) -> Money {
        self.current_price
            .subtract(&self.target_price)
            .multiply(quantity as i64)
    }

    /// This member's savings at their recorded contribution.
    pub fn member_savings(&self) -> Money {
        self.savings_for(self.my_contribution)
    }

    /// Time left before the pool closes; zero once past.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> PoolCountdown {
        let diff = self.ends_at.signed_duration_since(now);
        if diff.num_seconds() <= 0 {
            return PoolCountdown {
                hours: 0,
                minutes: 0,
            };
        }
        PoolCountdown {
            hours: diff.num_hours(),
            minutes: diff.num_minutes() % 60,
        }
    }
}

/// Aggregate stats over a set of pools, for the header strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolBoard {
    /// Pools this vendor has joined.
    pub joined_count: usize,
    /// Sum of advertised savings across joined pools.
    pub potential_savings: Money,
    /// Pools currently listed.
    pub available_count: usize,
}

impl PoolBoard {
    pub fn from_pools(pools: &[BulkPool]) -> Self {
        let joined: Vec<&BulkPool> = pools.iter().filter(|p| p.is_joined).collect();
        let potential_savings = joined
            .iter()
            .fold(Money::zero(Currency::INR), |acc, p| acc.add(&p.savings));
        Self {
            joined_count: joined.len(),
            potential_savings,
            available_count: pools.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn tomatoes_pool() -> BulkPool {
        BulkPool {
            id: PoolId::new("2"),
            name: "Fresh Tomatoes".to_string(),
            name_hi: "ताज़े टमाटर".to_string(),
            target_quantity: 80,
            current_quantity: 45,
            target_price: Money::from_rupees(35),
            current_price: Money::from_rupees(40),
            savings: Money::from_rupees(400),
            ends_at: Utc::now() + Duration::hours(6),
            location: "Market Area, Delhi".to_string(),
            participants: 6,
            max_participants: 10,
            my_contribution: 0,
            is_joined: false,
        }
    }

    #[test]
    fn test_progress_percent() {
        let pool = tomatoes_pool();
        assert!((pool.progress_percent() - 56.25).abs() < 0.001);
        assert!(!pool.is_complete());
        assert_eq!(pool.remaining_quantity(), 35);
    }

    #[test]
    fn test_display_progress_clamps_overshoot() {
        let mut pool = tomatoes_pool();
        pool.current_quantity = 100;
        assert!(pool.progress_percent() > 100.0);
        assert_eq!(pool.display_progress(), 100.0);
        assert!(pool.is_complete());
    }

    #[test]
    fn test_join_updates_pool() {
        let mut pool = tomatoes_pool();
        let contributed = pool.join(10).unwrap();
        assert_eq!(contributed, 10);
        assert_eq!(pool.current_quantity, 55);
        assert_eq!(pool.participants, 7);
        assert_eq!(pool.my_contribution, 10);
        assert!(pool.is_joined);
    }

    #[test]
    fn test_join_clamps_to_remaining() {
        let mut pool = tomatoes_pool();
        let contributed = pool.join(500).unwrap();
        assert_eq!(contributed, 35);
        assert_eq!(pool.current_quantity, 80);
        assert!(pool.is_complete());
    }

    #[test]
    fn test_leave_reverses_join() {
        let mut pool = tomatoes_pool();
        pool.join(10).unwrap();
        let withdrawn = pool.leave().unwrap();
        assert_eq!(withdrawn, 10);
        assert_eq!(pool.current_quantity, 45);
        assert_eq!(pool.participants, 6);
        assert_eq!(pool.my_contribution, 0);
        assert!(!pool.is_joined);
    }

    #[test]
    fn test_join_guards() {
        let mut full = tomatoes_pool();
        full.participants = full.max_participants;
        assert!(matches!(full.join(5), Err(StoreError::PoolFull(_, 10, 10))));

        let mut complete = tomatoes_pool();
        complete.current_quantity = complete.target_quantity;
        assert!(matches!(complete.join(5), Err(StoreError::PoolComplete(_))));

        let mut joined = tomatoes_pool();
        joined.join(5).unwrap();
        assert!(matches!(joined.join(5), Err(StoreError::AlreadyJoined(_))));

        let mut pool = tomatoes_pool();
        assert!(matches!(
            pool.join(0),
            Err(StoreError::InvalidContribution(0))
        ));
    }

    #[test]
    fn test_leave_requires_membership() {
        let mut pool = tomatoes_pool();
        assert!(matches!(pool.leave(), Err(StoreError::NotAMember(_))));
    }

    #[test]
    fn test_member_savings() {
        let mut pool = tomatoes_pool();
        pool.join(10).unwrap();
        // (40 - 35) * 10 = 50
        assert_eq!(pool.member_savings(), Money::from_rupees(50));
    }

    #[test]
    fn test_countdown_label() {
        let pool = tomatoes_pool();
        let now = pool.ends_at - Duration::hours(4) - Duration::minutes(32);
        let countdown = pool.time_remaining(now);
        assert_eq!(countdown.label(), "4h 32m");

        let now = pool.ends_at - Duration::minutes(45);
        assert_eq!(pool.time_remaining(now).label(), "45m");

        let past = pool.ends_at + Duration::minutes(1);
        assert_eq!(pool.time_remaining(past).label(), "0m");
    }

    #[test]
    fn test_board_stats() {
        let mut joined = tomatoes_pool();
        joined.join(10).unwrap();
        let other = tomatoes_pool();
        let board = PoolBoard::from_pools(&[joined, other]);
        assert_eq!(board.joined_count, 1);
        assert_eq!(board.available_count, 2);
        assert_eq!(board.potential_savings, Money::from_rupees(400));
    }
}
