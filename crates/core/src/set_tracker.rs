use thiserror::Error;

use crate::model::{SetId, SetRecord};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetTrackerError {
    #[error("set {0} not found")]
    UnknownSet(SetId),

    #[error("at least one set must remain")]
    LastSetRemaining,
}

/// Sets performed on the exercise currently on screen.
///
/// Starts with a single empty set and never drops below one.
#[derive(Debug, Clone, PartialEq)]
pub struct SetTracker {
    target_sets: u32,
    sets: Vec<SetRecord>,
    next_id: u64,
}

impl SetTracker {
    #[must_use]
    pub fn new(target_sets: u32) -> Self {
        Self {
            target_sets,
            sets: vec![SetRecord::empty(SetId::new(1))],
            next_id: 2,
        }
    }

    #[must_use]
    pub fn target_sets(&self) -> u32 {
        self.target_sets
    }

    #[must_use]
    pub fn sets(&self) -> &[SetRecord] {
        &self.sets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Append a zeroed, not-completed set.
    pub fn add_set(&mut self) -> SetId {
        let id = SetId::new(self.next_id);
        self.next_id += 1;
        self.sets.push(SetRecord::empty(id));
        id
    }

    /// # Errors
    ///
    /// Returns `SetTrackerError::LastSetRemaining` when only one set is left and
    /// `SetTrackerError::UnknownSet` when no set has this id.
    pub fn remove_set(&mut self, id: SetId) -> Result<SetRecord, SetTrackerError> {
        let index = self.position(id)?;
        if self.sets.len() == 1 {
            return Err(SetTrackerError::LastSetRemaining);
        }
        Ok(self.sets.remove(index))
    }

    /// Store reps as entered.
    ///
    /// # Errors
    ///
    /// Returns `SetTrackerError::UnknownSet` when no set has this id.
    pub fn update_reps(&mut self, id: SetId, reps: i32) -> Result<(), SetTrackerError> {
        self.set_mut(id)?.reps = reps;
        Ok(())
    }

    /// Store weight as entered.
    ///
    /// # Errors
    ///
    /// Returns `SetTrackerError::UnknownSet` when no set has this id.
    pub fn update_weight(&mut self, id: SetId, weight: f64) -> Result<(), SetTrackerError> {
        self.set_mut(id)?.weight = weight;
        Ok(())
    }

    /// Flip the completed flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns `SetTrackerError::UnknownSet` when no set has this id.
    pub fn toggle_complete(&mut self, id: SetId) -> Result<bool, SetTrackerError> {
        let set = self.set_mut(id)?;
        set.completed = !set.completed;
        Ok(set.completed)
    }

    #[must_use]
    pub fn completed_count(&self) -> u32 {
        let count = self.sets.iter().filter(|set| set.completed).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Completed-set count has reached the target, whatever reps or weight were logged.
    #[must_use]
    pub fn is_target_met(&self) -> bool {
        self.completed_count() >= self.target_sets
    }

    /// Discard all sets and start over for a new exercise.
    pub fn reset(&mut self, target_sets: u32) {
        *self = Self::new(target_sets);
    }

    fn position(&self, id: SetId) -> Result<usize, SetTrackerError> {
        self.sets
            .iter()
            .position(|set| set.id == id)
            .ok_or(SetTrackerError::UnknownSet(id))
    }

    fn set_mut(&mut self, id: SetId) -> Result<&mut SetRecord, SetTrackerError> {
        let index = self.position(id)?;
        Ok(&mut self.sets[index])
    }
}
