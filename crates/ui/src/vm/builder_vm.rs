use fit_core::model::{BuilderEntryId, EntryEdit, WorkoutBuilder};

use crate::views::ViewError;
use crate::vm::format_minutes;

/// Editable row of the workout builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderRowVm {
    pub id: BuilderEntryId,
    pub position: usize,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub notes: String,
    pub muscles: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderSummaryVm {
    pub heading: String,
    pub total_sets: u32,
    pub duration: String,
    pub can_save: bool,
}

/// Which builder field an input edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderField {
    Sets,
    Reps,
    RestSecs,
    Notes,
}

#[must_use]
pub fn builder_rows(builder: &WorkoutBuilder) -> Vec<BuilderRowVm> {
    builder
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| BuilderRowVm {
            id: entry.id,
            position: index + 1,
            name: entry.name.clone(),
            sets: entry.sets.to_string(),
            reps: entry.reps.clone(),
            rest: entry.rest_secs.to_string(),
            notes: entry.notes.clone(),
            muscles: entry.target_muscles.join(", "),
        })
        .collect()
}

#[must_use]
pub fn builder_summary(builder: &WorkoutBuilder) -> BuilderSummaryVm {
    BuilderSummaryVm {
        heading: format!("Exercises ({})", builder.entries().len()),
        total_sets: builder.total_sets(),
        duration: format_minutes(builder.estimated_minutes()),
        can_save: builder.validate().is_ok(),
    }
}

/// Turn raw input into an edit. Blank numbers count as zero.
///
/// # Errors
///
/// Returns `ViewError::Invalid` for non-numeric sets or rest.
pub fn parse_entry_edit(field: BuilderField, raw: &str) -> Result<EntryEdit, ViewError> {
    let number = |raw: &str| -> Result<u32, ViewError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| ViewError::Invalid)
    };
    Ok(match field {
        BuilderField::Sets => EntryEdit::Sets(number(raw)?),
        BuilderField::RestSecs => EntryEdit::RestSecs(number(raw)?),
        BuilderField::Reps => EntryEdit::Reps(raw.trim().to_string()),
        BuilderField::Notes => EntryEdit::Notes(raw.to_string()),
    })
}
