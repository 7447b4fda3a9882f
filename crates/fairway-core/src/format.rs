use std::fmt::Debug;

use serde::Serialize;

use crate::catalog::{FormatId, FormatMetadata};
use crate::field::Field;

/// Core trait every settled game format implements.
///
/// Settlement is a pure function of the field: no hidden state is read or
/// advanced, so settling the same snapshot twice yields identical outcomes.
pub trait ScoringFormat {
    /// Result structure produced for one round.
    type Outcome: Debug + Clone + PartialEq + Serialize;

    /// Catalog id of the format this engine settles.
    fn id(&self) -> FormatId;

    /// Settle the round for the whole field.
    fn settle(&self, field: &Field<'_>) -> Self::Outcome;

    /// Picker/report metadata for the format.
    fn metadata(&self) -> FormatMetadata {
        self.id().metadata()
    }
}
