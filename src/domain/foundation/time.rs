//! Time effort value objects shared by both work-tracking contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Planned effort for a task, in whole hours and minutes.
///
/// Minutes stay below 60; arithmetic normalizes overflow into hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeEstimation {
    hours: u32,
    minutes: u32,
}

impl TimeEstimation {
    /// Creates a new TimeEstimation, rejecting minutes of 60 or more.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ValidationError> {
        if minutes > 59 {
            return Err(ValidationError::out_of_range(
                "minutes",
                0,
                59,
                minutes as i32,
            ));
        }
        Ok(Self { hours, minutes })
    }

    /// Creates a TimeEstimation from a total minute count, normalizing to
    /// hours and remaining minutes.
    pub fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }

    /// The zero estimation.
    pub fn zero() -> Self {
        Self { hours: 0, minutes: 0 }
    }

    /// Returns the whole hours part.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the minutes part, always below 60.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the estimation as a total minute count.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Returns the normalized sum of this estimation and another.
    pub fn add(&self, other: &TimeEstimation) -> Self {
        Self::from_minutes(self.total_minutes() + other.total_minutes())
    }

    /// True when this estimation is strictly greater than another.
    pub fn exceeds(&self, other: &TimeEstimation) -> bool {
        self.total_minutes() > other.total_minutes()
    }
}

impl Default for TimeEstimation {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for TimeEstimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Effort actually spent completing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActualSpentTime {
    hours: u32,
    minutes: u32,
}

impl ActualSpentTime {
    /// Creates a new ActualSpentTime, rejecting minutes of 60 or more.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ValidationError> {
        if minutes > 59 {
            return Err(ValidationError::out_of_range(
                "minutes",
                0,
                59,
                minutes as i32,
            ));
        }
        Ok(Self { hours, minutes })
    }

    /// Creates an ActualSpentTime from a total minute count.
    pub fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }

    /// Returns the whole hours part.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the minutes part, always below 60.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the spent time as a total minute count.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for ActualSpentTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimation_accepts_valid_minutes() {
        let est = TimeEstimation::new(2, 30).unwrap();
        assert_eq!(est.hours(), 2);
        assert_eq!(est.minutes(), 30);
        assert_eq!(est.total_minutes(), 150);
    }

    #[test]
    fn estimation_rejects_minutes_of_sixty_or_more() {
        let result = TimeEstimation::new(1, 60);
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "minutes");
                assert_eq!(min, 0);
                assert_eq!(max, 59);
                assert_eq!(actual, 60);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn estimation_from_minutes_normalizes() {
        let est = TimeEstimation::from_minutes(125);
        assert_eq!(est.hours(), 2);
        assert_eq!(est.minutes(), 5);
    }

    #[test]
    fn estimation_add_carries_minutes_into_hours() {
        let a = TimeEstimation::new(1, 45).unwrap();
        let b = TimeEstimation::new(0, 30).unwrap();
        let sum = a.add(&b);
        assert_eq!(sum.hours(), 2);
        assert_eq!(sum.minutes(), 15);
    }

    #[test]
    fn estimation_exceeds_is_strict() {
        let hour = TimeEstimation::new(1, 0).unwrap();
        let same = TimeEstimation::from_minutes(60);
        let more = TimeEstimation::from_minutes(61);

        assert!(!same.exceeds(&hour));
        assert!(more.exceeds(&hour));
        assert!(!hour.exceeds(&more));
    }

    #[test]
    fn estimation_zero_adds_as_identity() {
        let est = TimeEstimation::new(3, 15).unwrap();
        assert_eq!(est.add(&TimeEstimation::zero()), est);
    }

    #[test]
    fn estimation_displays_hours_and_minutes() {
        let est = TimeEstimation::new(2, 5).unwrap();
        assert_eq!(format!("{}", est), "2h 5m");
    }

    #[test]
    fn estimation_serializes_to_json() {
        let est = TimeEstimation::new(1, 30).unwrap();
        let json = serde_json::to_string(&est).unwrap();
        let back: TimeEstimation = serde_json::from_str(&json).unwrap();
        assert_eq!(est, back);
    }

    #[test]
    fn actual_spent_time_accepts_valid_minutes() {
        let spent = ActualSpentTime::new(4, 59).unwrap();
        assert_eq!(spent.total_minutes(), 299);
    }

    #[test]
    fn actual_spent_time_rejects_minutes_of_sixty_or_more() {
        assert!(ActualSpentTime::new(0, 75).is_err());
    }

    #[test]
    fn actual_spent_time_from_minutes_normalizes() {
        let spent = ActualSpentTime::from_minutes(61);
        assert_eq!(spent.hours(), 1);
        assert_eq!(spent.minutes(), 1);
    }
}
