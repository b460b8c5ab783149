//! Ski run domain model.

use serde::{Deserialize, Serialize};

/// A single ski run record.
///
/// IDs are assigned by callers. The store never generates or deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkiRun {
    pub id: i32,
    pub name: String,
    /// Vertical drop in feet.
    pub vertical: i32,
}

impl SkiRun {
    pub fn new(id: i32, name: impl Into<String>, vertical: i32) -> Self {
        Self {
            id,
            name: name.into(),
            vertical,
        }
    }

    /// Returns true if the vertical drop lies within `[min, max]`.
    ///
    /// An inverted range (`min > max`) matches nothing.
    pub fn vertical_within(&self, min: i32, max: i32) -> bool {
        self.vertical >= min && self.vertical <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_within_is_inclusive() {
        let run = SkiRun::new(1, "Buttermilk", 1000);
        assert!(run.vertical_within(1000, 1000));
        assert!(run.vertical_within(900, 1000));
        assert!(run.vertical_within(1000, 1100));
        assert!(!run.vertical_within(1001, 2000));
    }

    #[test]
    fn test_vertical_within_inverted_range() {
        let run = SkiRun::new(1, "Buttermilk", 1000);
        assert!(!run.vertical_within(2000, 500));
    }

    #[test]
    fn test_json_shape() {
        let run = SkiRun::new(7, "Ajax", -12);
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Ajax", "vertical": -12 })
        );
    }
}
