use std::fmt;

use serde::{Deserialize, Serialize};

use fairway_core::course::{HOLE_COUNT, TeeId};
use fairway_core::field::FieldEntry;
use fairway_core::player::PlayerId;

/// One side of a head-to-head match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSide {
    pub player_id: PlayerId,
    pub name: String,
    pub tee_id: TeeId,
    pub course_handicap: i32,
}

impl MatchSide {
    fn from_entry(entry: &FieldEntry<'_>) -> Self {
        Self {
            player_id: entry.id(),
            name: entry.name().to_string(),
            tee_id: entry.tee.id.clone(),
            course_handicap: entry.course_handicap,
        }
    }
}

/// Ledger line for one played hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHole {
    /// 1-based hole number.
    pub hole: usize,
    pub par: i32,
    pub gross_a: i32,
    pub strokes_a: i32,
    pub net_a: i32,
    pub gross_b: i32,
    pub strokes_b: i32,
    pub net_b: i32,
    /// +1 if A won the hole, -1 if B did, 0 if halved.
    pub change: i32,
    /// Running standing after this hole, positive when A is up.
    pub standing: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Dormie,
    Complete,
}

/// Terminal result of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Won {
        winner: PlayerId,
        loser: PlayerId,
        margin: u32,
        /// Holes left unplayed when the match was clinched.
        remaining: u32,
    },
    Halved,
}

/// A running or finished match between two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub a: MatchSide,
    pub b: MatchSide,
    /// Positive when A is up.
    pub standing: i32,
    pub thru: usize,
    pub holes: Vec<MatchHole>,
    pub clinched: bool,
    pub complete: bool,
    pub dormie: bool,
    pub result: Option<MatchResult>,
    pub label: String,
}

impl Matchup {
    pub fn remaining(&self) -> usize {
        HOLE_COUNT - self.thru
    }

    pub fn status(&self) -> MatchStatus {
        if self.complete {
            MatchStatus::Complete
        } else if self.dormie {
            MatchStatus::Dormie
        } else if self.thru == 0 {
            MatchStatus::NotStarted
        } else {
            MatchStatus::InProgress
        }
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.a.player_id == id || self.b.player_id == id
    }

    /// The side currently up, if anyone is.
    pub fn leader(&self) -> Option<&MatchSide> {
        match self.standing {
            s if s > 0 => Some(&self.a),
            s if s < 0 => Some(&self.b),
            _ => None,
        }
    }

    /// The match as seen from one participant's side.
    pub fn view_from(&self, id: PlayerId) -> Option<MatchView> {
        let relative = if self.a.player_id == id {
            self.standing
        } else if self.b.player_id == id {
            -self.standing
        } else {
            return None;
        };

        if self.thru == 0 {
            return Some(MatchView::NotStarted);
        }
        let margin = relative.unsigned_abs();
        Some(if self.complete {
            match relative {
                r if r > 0 => MatchView::Won(margin),
                r if r < 0 => MatchView::Lost(margin),
                _ => MatchView::Halved,
            }
        } else {
            MatchView::Live {
                standing: relative,
                thru: self.thru,
            }
        })
    }
}

/// One cell of the round-robin matrix: a match from the row player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchView {
    NotStarted,
    Won(u32),
    Lost(u32),
    Halved,
    Live { standing: i32, thru: usize },
}

impl fmt::Display for MatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("—"),
            Self::Won(n) => write!(f, "W {n}"),
            Self::Lost(n) => write!(f, "L {n}"),
            Self::Halved => f.write_str("½"),
            Self::Live { standing: 0, thru } => write!(f, "AS ({thru})"),
            Self::Live { standing, thru } if *standing > 0 => write!(f, "{standing} UP ({thru})"),
            Self::Live { standing, thru } => write!(f, "{} DN ({thru})", standing.unsigned_abs()),
        }
    }
}

/// Play out the match between `a` and `b` hole by hole.
///
/// Strokes are allocated against the lower course handicap of the pair.
/// Scanning stops at the first hole either player has not entered; whether the
/// match is clinched is judged from the final standing.
pub fn compute_matchup(a: &FieldEntry<'_>, b: &FieldEntry<'_>) -> Matchup {
    let reference = a.course_handicap.min(b.course_handicap);
    let mut standing = 0i32;
    let mut thru = 0usize;
    let mut holes = Vec::new();

    for hole in 0..HOLE_COUNT {
        let (Some(gross_a), Some(gross_b)) = (a.gross(hole), b.gross(hole)) else {
            break;
        };
        let strokes_a = a.strokes(reference, hole);
        let strokes_b = b.strokes(reference, hole);
        let net_a = gross_a - strokes_a;
        let net_b = gross_b - strokes_b;
        let change = (net_b - net_a).signum();
        standing += change;
        thru = hole + 1;
        holes.push(MatchHole {
            hole: thru,
            par: a.tee.hole_par(hole),
            gross_a,
            strokes_a,
            net_a,
            gross_b,
            strokes_b,
            net_b,
            change,
            standing,
        });
    }

    let side_a = MatchSide::from_entry(a);
    let side_b = MatchSide::from_entry(b);
    let remaining = HOLE_COUNT - thru;
    let margin = standing.unsigned_abs();
    let clinched = thru > 0 && margin as usize > remaining;
    let complete = thru == HOLE_COUNT || clinched;
    let dormie = !complete && thru > 0 && remaining > 0 && margin as usize == remaining;

    let result = complete.then(|| match standing {
        s if s > 0 => MatchResult::Won {
            winner: side_a.player_id,
            loser: side_b.player_id,
            margin,
            remaining: remaining as u32,
        },
        s if s < 0 => MatchResult::Won {
            winner: side_b.player_id,
            loser: side_a.player_id,
            margin,
            remaining: remaining as u32,
        },
        _ => MatchResult::Halved,
    });

    let leader = match standing {
        s if s > 0 => side_a.name.as_str(),
        s if s < 0 => side_b.name.as_str(),
        _ => "",
    };
    let label = if complete {
        match (standing, remaining) {
            (0, _) => "Halved (All Square)".to_string(),
            (_, 0) => format!("{leader} wins {margin} UP"),
            (_, left) => format!("{leader} wins {margin} & {left}"),
        }
    } else if dormie {
        format!("{leader} DORMIE ({remaining} to play)")
    } else if thru == 0 {
        "Not started".to_string()
    } else if standing == 0 {
        format!("All Square (thru {thru})")
    } else {
        format!("{leader} {margin} UP (thru {thru})")
    };

    if clinched {
        tracing::debug!(
            a = side_a.player_id,
            b = side_b.player_id,
            thru,
            standing,
            "match clinched"
        );
    } else if dormie {
        tracing::trace!(a = side_a.player_id, b = side_b.player_id, thru, "dormie");
    }

    Matchup {
        a: side_a,
        b: side_b,
        standing,
        thru,
        holes,
        clinched,
        complete,
        dormie,
        result,
        label,
    }
}
