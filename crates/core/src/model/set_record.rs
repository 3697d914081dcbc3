use crate::model::ids::SetId;

/// One performed set on the exercise currently shown in the session player.
///
/// Reps and weight are stored as entered; negative or zero values are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub id: SetId,
    pub reps: i32,
    pub weight: f64,
    pub completed: bool,
}

impl SetRecord {
    #[must_use]
    pub fn empty(id: SetId) -> Self {
        Self {
            id,
            reps: 0,
            weight: 0.0,
            completed: false,
        }
    }
}
