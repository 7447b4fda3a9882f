use std::collections::HashSet;

use crate::course::{Course, HOLE_COUNT, Tee};
use crate::error::ValidationError;
use crate::player::{Player, PlayerId};
use crate::round::{Library, Round, ScoreSheet};

pub const MIN_SLOPE: u32 = 55;
pub const MAX_SLOPE: u32 = 155;
pub const MAX_HANDICAP_INDEX: f64 = 54.0;
pub const MAX_PUTTS: u8 = 5;
pub const MAX_HOLE_PAR: u8 = 9;

pub fn validate_tee(tee: &Tee) -> Result<(), ValidationError> {
    let mut seen = [false; HOLE_COUNT];
    for &si in &tee.stroke_index {
        let slot = usize::from(si)
            .checked_sub(1)
            .and_then(|i| seen.get_mut(i))
            .ok_or_else(|| ValidationError::StrokeIndexNotPermutation {
                tee: tee.id.clone(),
            })?;
        if *slot {
            return Err(ValidationError::StrokeIndexNotPermutation {
                tee: tee.id.clone(),
            });
        }
        *slot = true;
    }

    for (hole, &par) in tee.pars.iter().enumerate() {
        if par == 0 || par > MAX_HOLE_PAR {
            return Err(ValidationError::HoleParOutOfRange {
                tee: tee.id.clone(),
                hole,
                par,
            });
        }
    }

    let summed: u32 = tee.pars.iter().map(|&p| u32::from(p)).sum();
    if summed != tee.par {
        return Err(ValidationError::ParMismatch {
            tee: tee.id.clone(),
            declared: tee.par,
            summed,
        });
    }

    if !(MIN_SLOPE..=MAX_SLOPE).contains(&tee.slope) {
        return Err(ValidationError::SlopeOutOfRange {
            tee: tee.id.clone(),
            slope: tee.slope,
        });
    }
    Ok(())
}

pub fn validate_course(course: &Course) -> Result<(), ValidationError> {
    if course.tees.is_empty() {
        return Err(ValidationError::CourseWithoutTees {
            course: course.id.clone(),
        });
    }
    let mut ids = HashSet::new();
    for tee in &course.tees {
        if !ids.insert(tee.id.as_str()) {
            return Err(ValidationError::DuplicateTee {
                course: course.id.clone(),
                tee: tee.id.clone(),
            });
        }
        validate_tee(tee)?;
    }
    Ok(())
}

pub fn validate_player(player: &Player) -> Result<(), ValidationError> {
    let index = player.handicap_index;
    if !index.is_finite() || !(0.0..=MAX_HANDICAP_INDEX).contains(&index) {
        return Err(ValidationError::HandicapIndexOutOfRange {
            player: player.id,
            index,
        });
    }
    Ok(())
}

pub fn validate_library(library: &Library) -> Result<(), ValidationError> {
    let active = library.courses.iter().filter(|c| c.active).count();
    if active > 1 {
        return Err(ValidationError::MultipleActiveCourses { count: active });
    }
    library.courses.iter().try_for_each(validate_course)?;
    library.roster.iter().try_for_each(validate_player)
}

pub fn validate_sheet(player: PlayerId, sheet: &ScoreSheet) -> Result<(), ValidationError> {
    for hole in 0..HOLE_COUNT {
        if let Some(gross) = sheet.gross[hole]
            && gross == 0
        {
            return Err(ValidationError::GrossOutOfRange {
                player,
                hole,
                gross,
            });
        }
        if let Some(putts) = sheet.putts[hole]
            && putts > MAX_PUTTS
        {
            return Err(ValidationError::PuttsOutOfRange {
                player,
                hole,
                putts,
            });
        }
    }
    Ok(())
}

/// Validate a library and the round played against it.
pub fn validate_snapshot(library: &Library, round: &Round) -> Result<(), ValidationError> {
    validate_library(library)?;
    round
        .scores
        .iter()
        .try_for_each(|(&player, sheet)| validate_sheet(player, sheet))
}
