use fit_core::model::{SetId, SetRecord, WorkoutId};
use fit_core::session::{CompletionOutcome, SessionPhase, WorkoutSession};
use fit_core::timer::{Countdown, TickOutcome};
use services::{FinishOutcome, SessionFlowService};

use crate::views::ViewError;

/// Labels for the session header and progress bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionHeaderVm {
    pub title: String,
    pub description: String,
    pub difficulty: &'static str,
    pub exercise_label: String,
    pub completed_label: String,
    pub progress_percent: u32,
}

/// Row in the set tracker table.
#[derive(Clone, Debug, PartialEq)]
pub struct SetRowVm {
    pub id: SetId,
    pub number: usize,
    pub reps: String,
    pub weight: String,
    pub completed: bool,
}

impl SetRowVm {
    fn from_record(number: usize, record: &SetRecord) -> Self {
        Self {
            id: record.id,
            number,
            reps: record.reps.to_string(),
            weight: format_weight(record.weight),
            completed: record.completed,
        }
    }
}

/// Session player state: the workout session plus the countdown shown beside it.
///
/// The countdown is the rest timer while resting and the set timer otherwise;
/// it is rebuilt whenever that switches.
pub struct SessionVm {
    session: WorkoutSession,
    timer: Countdown,
}

impl SessionVm {
    /// # Errors
    ///
    /// Returns `ViewError::NotFound` for workouts outside the catalogue.
    pub fn open(flow: &SessionFlowService, workout_id: &WorkoutId) -> Result<Self, ViewError> {
        Ok(Self::from_session(flow.open(workout_id)?))
    }

    #[must_use]
    pub fn from_session(session: WorkoutSession) -> Self {
        let timer = Countdown::new(session.rest_timer_secs());
        Self { session, timer }
    }

    #[must_use]
    pub fn session(&self) -> &WorkoutSession {
        &self.session
    }

    #[must_use]
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == SessionPhase::Finished
    }

    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.session.is_resting()
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` if the session already started.
    pub fn start(&mut self, flow: &SessionFlowService) -> Result<(), ViewError> {
        flow.begin(&mut self.session)?;
        Ok(())
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    /// Feed one elapsed second. A finished rest clears the resting flag and
    /// swaps in a fresh set timer; the exercise does not change.
    pub fn tick(&mut self, flow: &SessionFlowService) -> TickOutcome {
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Completed && self.session.is_resting() {
            flow.rest_finished(&mut self.session);
            self.timer = Countdown::new(self.session.rest_timer_secs());
        }
        outcome
    }

    pub fn add_set(&mut self) {
        self.session.tracker_mut().add_set();
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` when only one set is left.
    pub fn remove_set(&mut self, id: SetId) -> Result<(), ViewError> {
        self.session
            .tracker_mut()
            .remove_set(id)
            .map_err(|_| ViewError::Invalid)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::NotFound` if the set is gone.
    pub fn toggle_set(&mut self, id: SetId) -> Result<bool, ViewError> {
        self.session
            .tracker_mut()
            .toggle_complete(id)
            .map_err(|_| ViewError::NotFound)
    }

    /// Blank input counts as zero; any other integer is stored as typed.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Invalid` for non-numeric input.
    pub fn set_reps(&mut self, id: SetId, raw: &str) -> Result<(), ViewError> {
        let reps = parse_or_zero::<i32>(raw)?;
        self.session
            .tracker_mut()
            .update_reps(id, reps)
            .map_err(|_| ViewError::NotFound)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` for non-numeric input.
    pub fn set_weight(&mut self, id: SetId, raw: &str) -> Result<(), ViewError> {
        let weight = parse_or_zero::<f64>(raw)?;
        self.session
            .tracker_mut()
            .update_weight(id, weight)
            .map_err(|_| ViewError::NotFound)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` when the set target is not met.
    pub fn complete_exercise(
        &mut self,
        flow: &SessionFlowService,
    ) -> Result<CompletionOutcome, ViewError> {
        let outcome = flow.complete_current(&mut self.session)?;
        if let CompletionOutcome::Rest { secs } = outcome {
            self.timer = Countdown::new(secs);
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` when the current exercise is not done or is the last.
    pub fn next_exercise(&mut self, flow: &SessionFlowService) -> Result<(), ViewError> {
        flow.advance(&mut self.session)?;
        self.timer = Countdown::new(self.session.rest_timer_secs());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Invalid` until every exercise is completed.
    pub fn finish(&self, flow: &SessionFlowService) -> Result<FinishOutcome, ViewError> {
        Ok(flow.finish(&self.session)?)
    }

    #[must_use]
    pub fn header(&self) -> SessionHeaderVm {
        let workout = self.session.workout();
        let progress = self.session.progress();
        SessionHeaderVm {
            title: workout.title().to_string(),
            description: workout.description().to_string(),
            difficulty: workout.difficulty().as_str(),
            exercise_label: format!(
                "Exercise {} of {}",
                self.session.current_index() + 1,
                progress.total
            ),
            completed_label: format!("{}/{} completed", progress.completed, progress.total),
            progress_percent: progress.percent,
        }
    }

    #[must_use]
    pub fn set_rows(&self) -> Vec<SetRowVm> {
        self.session
            .tracker()
            .sets()
            .iter()
            .enumerate()
            .map(|(index, record)| SetRowVm::from_record(index + 1, record))
            .collect()
    }

    #[must_use]
    pub fn sets_label(&self) -> String {
        let tracker = self.session.tracker();
        format!("{}/{} sets", tracker.completed_count(), tracker.target_sets())
    }

    #[must_use]
    pub fn timer_title(&self) -> &'static str {
        if self.is_resting() {
            "Rest Timer"
        } else {
            "Exercise Timer"
        }
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        self.timer.format_clock()
    }

    #[must_use]
    pub fn can_complete(&self) -> bool {
        matches!(self.phase(), SessionPhase::InProgress { .. })
            && !self
                .session
                .is_exercise_completed(self.session.current_exercise().id())
            && self.session.tracker().is_target_met()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.session.can_advance()
    }
}

fn parse_or_zero<T: std::str::FromStr + Default>(raw: &str) -> Result<T, ViewError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(|_| ViewError::Invalid)
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        format!("{weight}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use fit_core::catalog::Catalog;
    use fit_core::time::fixed_clock;
    use services::{NoticeQueue, SummaryService};

    fn flow() -> SessionFlowService {
        let clock = fixed_clock();
        SessionFlowService::new(
            clock,
            Arc::new(Catalog::builtin().unwrap()),
            Arc::new(SummaryService::new(clock)),
            Arc::new(NoticeQueue::new()),
        )
    }

    fn vm(flow: &SessionFlowService, id: &str) -> SessionVm {
        SessionVm::open(flow, &WorkoutId::new(id).unwrap()).unwrap()
    }

    fn complete_all_sets(vm: &mut SessionVm) {
        let target = vm.session().tracker().target_sets() as usize;
        while vm.set_rows().len() < target {
            vm.add_set();
        }
        for row in vm.set_rows() {
            vm.toggle_set(row.id).unwrap();
        }
    }

    #[test]
    fn unknown_workout_maps_to_not_found() {
        let flow = flow();
        let result = SessionVm::open(&flow, &WorkoutId::new("nope").unwrap());
        assert!(matches!(result, Err(ViewError::NotFound)));
    }

    #[test]
    fn header_tracks_cursor() {
        let flow = flow();
        let mut vm = vm(&flow, "upper-body-strength");
        vm.start(&flow).unwrap();
        let header = vm.header();
        assert_eq!(header.exercise_label, "Exercise 1 of 6");
        assert_eq!(header.completed_label, "0/6 completed");
        assert_eq!(header.difficulty, "Intermediate");
        assert_eq!(vm.timer_title(), "Exercise Timer");
        assert_eq!(vm.timer_label(), "01:30");
    }

    #[test]
    fn rest_timer_runs_out_without_advancing() {
        let flow = flow();
        let mut vm = vm(&flow, "hiit-cardio-blast");
        vm.start(&flow).unwrap();
        complete_all_sets(&mut vm);
        assert!(vm.can_complete());

        let outcome = vm.complete_exercise(&flow).unwrap();
        assert_eq!(outcome, CompletionOutcome::Rest { secs: 60 });
        assert_eq!(vm.timer_title(), "Rest Timer");
        assert_eq!(vm.timer_label(), "01:00");

        vm.toggle_timer();
        let completions = (0..60)
            .filter(|_| vm.tick(&flow) == TickOutcome::Completed)
            .count();
        assert_eq!(completions, 1);
        assert!(!vm.is_resting());
        assert_eq!(vm.session().current_index(), 0);
        assert_eq!(vm.timer_label(), "00:30");
        assert!(vm.can_advance());

        vm.next_exercise(&flow).unwrap();
        assert_eq!(vm.header().exercise_label, "Exercise 2 of 5");
        assert_eq!(vm.set_rows().len(), 1);
    }

    #[test]
    fn set_inputs_accept_blank_and_negative_values() {
        let flow = flow();
        let mut vm = vm(&flow, "full-body-beginner");
        let id = vm.set_rows()[0].id;
        vm.set_reps(id, "-3").unwrap();
        vm.set_weight(id, "22.5").unwrap();
        assert_eq!(vm.set_rows()[0].reps, "-3");
        assert_eq!(vm.set_rows()[0].weight, "22.5");

        vm.set_reps(id, "").unwrap();
        assert_eq!(vm.set_rows()[0].reps, "0");
        assert_eq!(vm.set_reps(id, "ten"), Err(ViewError::Invalid));
    }

    #[test]
    fn last_set_cannot_be_removed() {
        let flow = flow();
        let mut vm = vm(&flow, "full-body-beginner");
        let only = vm.set_rows()[0].id;
        assert_eq!(vm.remove_set(only), Err(ViewError::Invalid));
        vm.add_set();
        assert_eq!(vm.sets_label(), "0/3 sets");
        assert!(vm.remove_set(only).is_ok());
        assert_eq!(vm.set_rows()[0].number, 1);
    }
}
