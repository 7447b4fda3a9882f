use fairway_cli::config::{FairwayConfig, OutputFormat};
use fairway_cli::report::{FormatReport, build_report};
use fairway_cli::{read_snapshot, settle, write_report};
use fairway_core::aggregate::ScoreClass;
use fairway_core::catalog::{FormatId, computed_formats};
use fairway_core::round::ScoreEdit;
use fairway_core::snapshot::{RoundSnapshot, encode_binary, encode_json};
use fairway_core::test_helpers::{FIXTURE_PARS, field_round, flat_library, full_round};
use fairway_leaderboard::rank::{Rank, RankMetric};
use fairway_skins::HoleOutcome;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("fairway-it-{}-{name}", std::process::id()))
}

/// Four players, everyone at par except a birdie for player 3 on the 1st and
/// a double for player 4 on the 18th.
fn saturday() -> RoundSnapshot {
    let mut cards = [FIXTURE_PARS; 4];
    cards[2][0] -= 1;
    cards[3][17] += 2;
    let (library, round) = field_round(&cards);
    RoundSnapshot::new(library, round)
}

#[test]
fn json_snapshot_settles_every_computed_format() {
    let path = temp_path("round.json");
    std::fs::write(&path, encode_json(&saturday()).unwrap()).unwrap();
    let snapshot = read_snapshot(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let report = settle(&snapshot, &FairwayConfig::default()).unwrap();
    let ids: Vec<FormatId> = report.results.iter().map(FormatReport::id).collect();
    assert_eq!(ids, computed_formats());
    assert_eq!(report.cards.len(), 4);
    assert!(report.cards.iter().all(|c| c.done));
    assert_eq!(report.cards[2].classes[0], Some(ScoreClass::Birdie));
    assert_eq!(report.cards[3].classes[17], Some(ScoreClass::DoubleBogey));

    let Some(FormatReport::StrokeGross(gross)) = report.result(FormatId::StrokeGross) else {
        panic!("gross leaderboard missing");
    };
    let leader = gross.leader().unwrap();
    assert_eq!(leader.card.player_id, 3);
    assert_eq!(leader.card.gross, Some(71));

    let Some(FormatReport::Skins(skins)) = report.result(FormatId::Skins) else {
        panic!("skins missing");
    };
    assert_eq!(skins.holes.len(), 18);
    assert!(skins.awarded() + skins.carry <= 18);
}

#[test]
fn binary_snapshot_reads_the_same_as_json() {
    let path = temp_path("round.msgpack");
    std::fs::write(&path, encode_binary(&saturday()).unwrap()).unwrap();
    let snapshot = read_snapshot(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(snapshot, saturday());
}

#[test]
fn partial_round_leaves_unfinished_players_unranked() {
    let mut snapshot = saturday();
    snapshot.round = snapshot.round.apply(ScoreEdit::Gross {
        player: 2,
        hole: 9,
        value: None,
    });
    let report = build_report(&snapshot, &[FormatId::Nassau], RankMetric::Net).unwrap();

    let row = report
        .leaderboard
        .rows
        .iter()
        .find(|r| r.card.player_id == 2)
        .unwrap();
    assert_eq!(row.rank, Rank::Unranked);
    assert_eq!(row.rank_label, "—");
    assert!(!row.card.done);

    let Some(FormatReport::Nassau(nassau)) = report.result(FormatId::Nassau) else {
        panic!("nassau missing");
    };
    assert_eq!(nassau.row(2).unwrap().back.net, None);
}

#[test]
fn every_output_format_writes() {
    let report = settle(&saturday(), &FairwayConfig::default()).unwrap();
    for output in [OutputFormat::Json, OutputFormat::Pretty, OutputFormat::Msgpack] {
        let mut buf = Vec::new();
        write_report(&report, output, &mut buf).unwrap();
        assert!(!buf.is_empty(), "{output:?} wrote nothing");
    }

    let mut buf = Vec::new();
    write_report(&report, OutputFormat::Json, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    let skins = value["results"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["format"] == "skins")
        .unwrap();
    assert_eq!(skins["result"]["holes"][0]["stake"], 1);
}

#[test]
fn skins_carry_shows_in_the_ledger() {
    // Level handicaps: a halved 1st, then a birdie for player 1 on the 2nd.
    let mut cards = [FIXTURE_PARS; 2];
    cards[0][1] -= 1;
    let snapshot = RoundSnapshot::new(flat_library(&[0.0, 0.0]), full_round(&cards));
    let report = build_report(&snapshot, &[FormatId::Skins], RankMetric::Net).unwrap();
    let Some(FormatReport::Skins(skins)) = report.result(FormatId::Skins) else {
        panic!("skins missing");
    };

    assert_eq!(skins.holes[0].stake, 1);
    assert_eq!(skins.holes[0].outcome, HoleOutcome::Carried);
    assert_eq!(skins.holes[1].stake, 2);
    assert_eq!(skins.holes[1].par, 5);
    assert_eq!(
        skins.holes[1].outcome,
        HoleOutcome::Won {
            player_id: 1,
            name: "John Smith".to_string(),
        }
    );
    assert_eq!(skins.holes[2].stake, 1);
    assert_eq!(skins.total_for(1), 2);
    assert_eq!(skins.total_for(2), 0);
    // Holes 3 through 18 all halve.
    assert_eq!(skins.carry, 16);
}
