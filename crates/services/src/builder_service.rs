use std::sync::{Arc, PoisonError, RwLock};

use fit_core::catalog::Catalog;
use fit_core::model::{
    BuilderEntry, BuilderEntryId, BuilderError, EntryEdit, ExerciseDefinition, ExerciseId,
    ParseIdError, WorkoutBuilder, WorkoutDefinition, WorkoutId, slugify,
};

use crate::error::BuilderServiceError;
use crate::notice::{Notice, Notifier};

/// Rough burn rate used to label custom workouts.
pub const CUSTOM_CALORIES_PER_MINUTE: u32 = 8;

const CUSTOM_ID_PREFIX: &str = "custom";

/// Edits workout drafts against the exercise library and keeps the saved ones.
///
/// Drafts stay with the caller; saved workouts live for the process and can
/// be played like catalogue workouts.
pub struct BuilderService {
    catalog: Arc<Catalog>,
    notifier: Arc<dyn Notifier>,
    saved: RwLock<Vec<Arc<WorkoutDefinition>>>,
}

impl BuilderService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            notifier,
            saved: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn library(&self) -> Vec<ExerciseDefinition> {
        self.catalog.exercises().to_vec()
    }

    /// # Errors
    ///
    /// Returns `BuilderServiceError::UnknownExercise` for ids outside the library.
    pub fn add_exercise(
        &self,
        builder: &mut WorkoutBuilder,
        exercise_id: &ExerciseId,
    ) -> Result<BuilderEntryId, BuilderServiceError> {
        let exercise = self
            .catalog
            .exercise(exercise_id)
            .ok_or_else(|| BuilderServiceError::UnknownExercise(exercise_id.clone()))?;
        let id = builder.add_exercise(exercise);
        tracing::debug!(exercise = %exercise_id, entry = %id, "exercise added to draft");
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `BuilderServiceError::Builder` if the row is gone.
    pub fn remove_exercise(
        &self,
        builder: &mut WorkoutBuilder,
        entry: BuilderEntryId,
    ) -> Result<BuilderEntry, BuilderServiceError> {
        Ok(builder.remove_exercise(entry)?)
    }

    /// # Errors
    ///
    /// Returns `BuilderServiceError::Builder` if the row is gone.
    pub fn edit(
        &self,
        builder: &mut WorkoutBuilder,
        entry: BuilderEntryId,
        edit: EntryEdit,
    ) -> Result<(), BuilderServiceError> {
        Ok(builder.edit(entry, edit)?)
    }

    /// Validate the draft and store it as a playable workout. Saving a title
    /// again replaces the earlier workout.
    ///
    /// # Errors
    ///
    /// Returns `BuilderServiceError::Builder` when the draft has no title, no
    /// exercises or an unplayable row.
    pub fn save(
        &self,
        builder: &WorkoutBuilder,
    ) -> Result<Arc<WorkoutDefinition>, BuilderServiceError> {
        let id = custom_workout_id(&builder.title)?;
        let calories = builder.estimated_minutes() * CUSTOM_CALORIES_PER_MINUTE;
        let workout = match builder.to_definition(id, calories) {
            Ok(workout) => Arc::new(workout),
            Err(err) => {
                tracing::warn!(error = %err, "custom workout rejected");
                self.notifier.notify(rejected_notice(&err));
                return Err(err.into());
            }
        };

        {
            let mut saved = self.saved.write().unwrap_or_else(PoisonError::into_inner);
            saved.retain(|existing| existing.id() != workout.id());
            saved.push(Arc::clone(&workout));
        }

        tracing::info!(
            workout = %workout.id(),
            exercises = workout.exercise_count(),
            "custom workout saved"
        );
        self.notifier.notify(Notice::success(
            "Workout Saved!",
            format!("\"{}\" has been saved to your custom workouts.", workout.title()),
        ));
        Ok(workout)
    }

    /// Saved workouts, oldest first.
    #[must_use]
    pub fn saved(&self) -> Vec<Arc<WorkoutDefinition>> {
        self.saved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn saved_workout(&self, id: &WorkoutId) -> Option<Arc<WorkoutDefinition>> {
        self.saved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|workout| workout.id() == id)
            .cloned()
    }
}

fn custom_workout_id(title: &str) -> Result<WorkoutId, ParseIdError> {
    let slug = slugify(title);
    if slug.is_empty() {
        WorkoutId::new(format!("{CUSTOM_ID_PREFIX}-workout"))
    } else {
        WorkoutId::new(format!("{CUSTOM_ID_PREFIX}-{slug}"))
    }
}

fn rejected_notice(err: &BuilderError) -> Notice {
    match err {
        BuilderError::MissingTitle => {
            Notice::error("Missing Title", "Please add a title for your workout")
        }
        BuilderError::NoExercises => Notice::error(
            "No Exercises",
            "Please add at least one exercise to your workout",
        ),
        other => Notice::error("Invalid Workout", other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{NoticeQueue, Severity};
    use fit_core::model::ExerciseError;

    fn service() -> (BuilderService, NoticeQueue) {
        let queue = NoticeQueue::new();
        let catalog = Arc::new(Catalog::builtin().unwrap());
        (BuilderService::new(catalog, Arc::new(queue.clone())), queue)
    }

    fn first_exercise(service: &BuilderService) -> ExerciseId {
        service.library()[0].id().clone()
    }

    #[test]
    fn save_rejects_missing_title_then_empty_list() {
        let (service, queue) = service();
        let mut builder = WorkoutBuilder::new();

        assert!(matches!(
            service.save(&builder),
            Err(BuilderServiceError::Builder(BuilderError::MissingTitle))
        ));
        builder.title = "Leg Day".into();
        assert!(matches!(
            service.save(&builder),
            Err(BuilderServiceError::Builder(BuilderError::NoExercises))
        ));

        let notices = queue.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "Missing Title");
        assert_eq!(notices[1].title, "No Exercises");
        assert!(notices.iter().all(|n| n.severity == Severity::Error));
        assert!(service.saved().is_empty());
    }

    #[test]
    fn save_stores_playable_workout() {
        let (service, queue) = service();
        let mut builder = WorkoutBuilder::new();
        builder.title = "Leg Day!".into();
        let exercise = first_exercise(&service);
        service.add_exercise(&mut builder, &exercise).unwrap();

        let workout = service.save(&builder).unwrap();
        assert_eq!(workout.id().as_str(), "custom-leg-day");
        assert_eq!(
            workout.calories(),
            builder.estimated_minutes() * CUSTOM_CALORIES_PER_MINUTE
        );
        assert_eq!(
            service.saved_workout(workout.id()).unwrap().title(),
            "Leg Day!"
        );

        let notices = queue.drain();
        assert_eq!(notices[0].title, "Workout Saved!");
        assert_eq!(
            notices[0].body,
            "\"Leg Day!\" has been saved to your custom workouts."
        );
    }

    #[test]
    fn saving_same_title_replaces_workout() {
        let (service, _queue) = service();
        let mut builder = WorkoutBuilder::new();
        builder.title = "Leg Day".into();
        let exercise = first_exercise(&service);
        service.add_exercise(&mut builder, &exercise).unwrap();
        service.save(&builder).unwrap();

        service.add_exercise(&mut builder, &exercise).unwrap();
        service.save(&builder).unwrap();

        let saved = service.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].exercise_count(), 2);
    }

    #[test]
    fn unknown_exercise_and_zero_sets() {
        let (service, queue) = service();
        let mut builder = WorkoutBuilder::new();
        builder.title = "Core".into();
        assert!(matches!(
            service.add_exercise(&mut builder, &ExerciseId::new("moon-walk").unwrap()),
            Err(BuilderServiceError::UnknownExercise(_))
        ));

        let exercise = first_exercise(&service);
        let entry = service.add_exercise(&mut builder, &exercise).unwrap();
        service.edit(&mut builder, entry, EntryEdit::Sets(0)).unwrap();
        assert!(matches!(
            service.save(&builder),
            Err(BuilderServiceError::Builder(BuilderError::Exercise(
                ExerciseError::InvalidTargetSets
            )))
        ));
        assert_eq!(queue.drain()[0].title, "Invalid Workout");
    }

    #[test]
    fn custom_ids_fall_back_for_symbol_titles() {
        assert_eq!(custom_workout_id("!!!").unwrap().as_str(), "custom-workout");
        assert_eq!(
            custom_workout_id("Push & Pull 2").unwrap().as_str(),
            "custom-push-pull-2"
        );
    }
}
