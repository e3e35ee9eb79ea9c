//! Embedded pillar configuration, one module per life domain.
//!
//! Definitions are plain constructors over [`crate::types::Question`]; the
//! scoring engine derives everything it needs (scored keys, legacy blocks,
//! narrative fields) from the question schema, so the questionnaire is the
//! single source of truth per pillar.

mod brand;
mod economy;
pub(crate) mod open_track;
mod self_care;
mod skills;
mod talent;

use crate::types::PillarDefinition;

/// All six definitions, in [`crate::types::PillarKey`] declaration order.
pub(crate) fn build_all() -> [PillarDefinition; 6] {
    [
        self_care::definition(),
        skills::definition(),
        talent::definition(),
        brand::definition(),
        economy::definition(),
        open_track::definition(),
    ]
}
