use crate::club::team::training::TrainingFocus;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One training focus per designated training day. Days without an entry
/// have no session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSchedule {
    days: HashMap<Weekday, TrainingFocus>,
}

impl TrainingSchedule {
    pub fn new() -> Self {
        TrainingSchedule::default()
    }

    pub fn with_day(mut self, day: Weekday, focus: TrainingFocus) -> Self {
        self.set(day, focus);
        self
    }

    pub fn set(&mut self, day: Weekday, focus: TrainingFocus) {
        self.days.insert(day, focus);
    }

    pub fn focus_on(&self, day: Weekday) -> Option<TrainingFocus> {
        self.days.get(&day).copied()
    }

    pub fn training_days(&self) -> usize {
        self.days.len()
    }
}
