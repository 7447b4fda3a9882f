use std::fmt::Write as _;

use serde::Serialize;

use fairway_core::ScoringFormat;
use fairway_core::card::{PlayerCard, player_cards};
use fairway_core::catalog::{FormatId, FormatMetadata};
use fairway_core::course::Segment;
use fairway_core::field::Field;
use fairway_core::snapshot::RoundSnapshot;
use fairway_leaderboard::rank::{Leaderboard, RankMetric, rank_cards};
use fairway_leaderboard::StrokePlay;
use fairway_matchplay::{MatchPlay, RoundRobin};
use fairway_nassau::{Nassau, NassauResult};
use fairway_points::{BingoBangoBongo, PointsResult};
use fairway_skins::{HoleOutcome, Skins, SkinsResult};

use crate::error::CliError;

/// One settled format in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", content = "result", rename_all = "snake_case")]
pub enum FormatReport {
    StrokeNet(Leaderboard),
    StrokeGross(Leaderboard),
    Stableford(Leaderboard),
    Match(RoundRobin),
    Skins(SkinsResult),
    Nassau(NassauResult),
    BingoBangoBongo(PointsResult),
}

impl FormatReport {
    pub fn id(&self) -> FormatId {
        match self {
            Self::StrokeNet(_) => FormatId::StrokeNet,
            Self::StrokeGross(_) => FormatId::StrokeGross,
            Self::Stableford(_) => FormatId::Stableford,
            Self::Match(_) => FormatId::Match,
            Self::Skins(_) => FormatId::Skins,
            Self::Nassau(_) => FormatId::Nassau,
            Self::BingoBangoBongo(_) => FormatId::BingoBangoBongo,
        }
    }
}

/// Settle one catalog format over the field. `None` for descriptive-only
/// formats.
pub fn settle_format(id: FormatId, field: &Field<'_>) -> Option<FormatReport> {
    let report = match id {
        FormatId::StrokeNet => FormatReport::StrokeNet(StrokePlay::net().settle(field)),
        FormatId::StrokeGross => FormatReport::StrokeGross(StrokePlay::gross().settle(field)),
        FormatId::Stableford => FormatReport::Stableford(StrokePlay::stableford().settle(field)),
        FormatId::Match => FormatReport::Match(MatchPlay.settle(field)),
        FormatId::Skins => FormatReport::Skins(Skins.settle(field)),
        FormatId::Nassau => FormatReport::Nassau(Nassau.settle(field)),
        FormatId::BingoBangoBongo => FormatReport::BingoBangoBongo(BingoBangoBongo.settle(field)),
        FormatId::Wolf
        | FormatId::Scramble
        | FormatId::Chapman
        | FormatId::FourBall
        | FormatId::Greenies => return None,
    };
    Some(report)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
}

/// Everything known about a round: who played, what they shot, and how every
/// selected format settles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub round: String,
    pub date: String,
    pub game_format: FormatMetadata,
    pub course: CourseSummary,
    pub cards: Vec<PlayerCard>,
    pub leaderboard: Leaderboard,
    pub results: Vec<FormatReport>,
}

impl RoundReport {
    pub fn result(&self, id: FormatId) -> Option<&FormatReport> {
        self.results.iter().find(|r| r.id() == id)
    }
}

/// Build the report for a snapshot. Formats are settled in the order given;
/// descriptive-only formats are skipped with a warning.
pub fn build_report(
    snapshot: &RoundSnapshot,
    formats: &[FormatId],
    metric: RankMetric,
) -> Result<RoundReport, CliError> {
    let field = Field::build(&snapshot.library, &snapshot.round)?;
    let cards = player_cards(&field);
    let leaderboard = rank_cards(cards.clone(), metric);

    let mut results = Vec::with_capacity(formats.len());
    for &id in formats {
        match settle_format(id, &field) {
            Some(report) => results.push(report),
            None => tracing::warn!(format = %id, "format is descriptive only, skipping"),
        }
    }

    tracing::info!(
        round = %snapshot.round.name,
        players = field.len(),
        formats = results.len(),
        "round settled"
    );

    Ok(RoundReport {
        round: snapshot.round.name.clone(),
        date: snapshot.round.date.clone(),
        game_format: snapshot.round.game_format.metadata(),
        course: CourseSummary {
            id: field.course.id.clone(),
            name: field.course.name.clone(),
        },
        cards,
        leaderboard,
        results,
    })
}

fn opt(v: Option<i32>) -> String {
    v.map_or_else(|| "—".to_string(), |v| v.to_string())
}

/// Plain-text rendering for terminals.
pub fn render_pretty(report: &RoundReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.round, report.date);
    let _ = writeln!(
        out,
        "{} · {} {}",
        report.course.name, report.game_format.icon, report.game_format.name
    );

    let _ = writeln!(out, "\nLeaderboard: {}", report.leaderboard.metric.label());
    for row in report.leaderboard.standings() {
        let c = &row.card;
        let _ = writeln!(
            out,
            "  {:>4}  {:<20} CH {:>3}  F {:>3}  B {:>3}  Gross {:>3}  Net {:>3}  Pts {:>3}  Putts {:>3}  {}",
            row.rank_label,
            c.name,
            c.course_handicap,
            opt(c.front),
            opt(c.back),
            opt(c.gross),
            opt(c.net),
            opt(c.stableford),
            opt(c.putts),
            if c.done { "Done" } else { "" },
        );
    }

    for result in &report.results {
        let meta = result.id().metadata();
        let _ = writeln!(out, "\n{} {}", meta.icon, meta.name);
        match result {
            FormatReport::StrokeNet(board)
            | FormatReport::StrokeGross(board)
            | FormatReport::Stableford(board) => {
                for row in board.standings() {
                    let _ = writeln!(
                        out,
                        "  {:>4}  {:<20} {}",
                        row.rank_label,
                        row.card.name,
                        opt(board.metric.value(&row.card))
                    );
                }
            },
            FormatReport::Match(rr) => {
                let _ = writeln!(
                    out,
                    "  {}/{} matches complete",
                    rr.progress.complete, rr.progress.total
                );
                for m in &rr.matchups {
                    let _ = writeln!(out, "  {} v {}: {}", m.a.name, m.b.name, m.label);
                }
                for s in &rr.standings {
                    let _ = writeln!(
                        out,
                        "  {:<20} {}-{}-{}  {} pts",
                        s.name, s.wins, s.halves, s.losses, s.points
                    );
                }
            },
            FormatReport::Skins(skins) => {
                for hole in &skins.holes {
                    let outcome = match &hole.outcome {
                        HoleOutcome::Won { name, .. } => name.as_str(),
                        HoleOutcome::Carried => "Carry →",
                        HoleOutcome::Unresolved => "—",
                    };
                    let _ = writeln!(
                        out,
                        "  {:>2}  par {}  x{}  {}",
                        hole.hole, hole.par, hole.stake, outcome
                    );
                }
                for t in skins.winners() {
                    let _ = writeln!(out, "  {:<20} {}", t.name, t.skins);
                }
                if skins.carry > 0 {
                    let _ = writeln!(out, "  carry outstanding: {}", skins.carry);
                }
            },
            FormatReport::Nassau(nassau) => {
                for row in &nassau.rows {
                    let _ = write!(out, "  {:<20}", row.name);
                    for segment in Segment::ALL {
                        let line = row.line(segment);
                        let _ = write!(
                            out,
                            "  {} {} {}",
                            segment.label(),
                            opt(line.net),
                            line.result
                        );
                    }
                    let _ = writeln!(out);
                }
            },
            FormatReport::BingoBangoBongo(points) => {
                for t in points.standings() {
                    let _ = writeln!(out, "  {:<20} {}", t.name, t.points);
                }
            },
        }
    }
    out
}
