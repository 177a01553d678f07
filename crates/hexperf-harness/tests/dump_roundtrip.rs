use hexperf_core::GeneratorConfig;
use hexperf_harness::dump::{dump_filename, PerfDump};
use hexperf_harness::record::{MeasurementRecord, Outcome, PatternStats};
use hexperf_harness::serde::from_json_slice;

fn sample_dump() -> PerfDump {
    let config = GeneratorConfig::BeamPool {
        carryover: 200,
        num_threads: 4,
    };
    let mut dump = PerfDump::new(&config);
    dump.data.push(MeasurementRecord::new(
        0,
        0.0125,
        Outcome::Success(PatternStats {
            points: Some(3),
            segments: Some(2),
            largest_dim: Some(4),
            quasi_area: Some(24),
            bounds: Some((2, 3, 4)),
            pattern: Some("aqaa".to_string()),
        }),
    ));
    // Older generator APIs report only a subset of the stat fields.
    dump.data.push(MeasurementRecord::new(
        1,
        0.5,
        Outcome::Success(PatternStats {
            points: Some(5),
            ..PatternStats::default()
        }),
    ));
    dump.data.push(MeasurementRecord::new(2, 2.25, Outcome::Failure));
    dump
}

#[test]
fn save_then_load_preserves_everything() {
    let dump = sample_dump();
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dump.save(dir.path(), true).expect("save");
    let restored = PerfDump::load(&path).expect("load");

    assert_eq!(dump, restored);
    assert_eq!(restored.algorithm, "BeamPool");
    assert_eq!(restored.carryover, Some(200));
    assert_eq!(restored.num_threads, Some(4));
}

#[test]
fn save_leaves_no_temporary_sibling() {
    let dump = sample_dump();
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dump.save(dir.path(), true).expect("save");

    assert!(path.exists());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().map(|ext| ext == "tmp") == Some(true))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn rerun_overwrites_the_same_artifact() {
    let dump = sample_dump();
    let dir = tempfile::tempdir().expect("tmp dir");
    let first = dump.save(dir.path(), true).expect("first save");
    let second = dump.save(dir.path(), true).expect("second save");
    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 1);
}

#[test]
fn failure_records_carry_no_stat_fields_on_the_wire() {
    let dump = sample_dump();
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dump.save(dir.path(), true).expect("save");
    let text = std::fs::read_to_string(&path).expect("read artifact");

    assert!(text.contains("\"status\":\"failure\""));
    // The failure record is the only one for target 2; no stats ride along.
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse");
    let failed = &value["data"][2];
    assert_eq!(failed["target"], 2);
    assert_eq!(failed["outcome"]["status"], "failure");
    assert!(failed["outcome"].get("points").is_none());
}

#[test]
fn status_discriminant_is_required_not_inferred() {
    // A record shaped like a success but missing the discriminant must
    // not parse; the store never infers success from field presence.
    let doc = br#"{
        "algorithm": "Beam",
        "carryover": 25,
        "num_threads": null,
        "data": [{"target": 0, "time": 0.1, "outcome": {"points": 3}}]
    }"#;
    assert!(from_json_slice::<PerfDump>(doc).is_err());
}

#[test]
fn partial_stat_fields_parse_presence_based() {
    let doc = br#"{
        "algorithm": "AStar",
        "carryover": null,
        "num_threads": null,
        "data": [
            {"target": 0, "time": 0.1,
             "outcome": {"status": "success", "segments": 9}},
            {"target": 1, "time": 0.2, "outcome": {"status": "failure"}}
        ]
    }"#;
    let dump: PerfDump = from_json_slice(doc).expect("parse");
    let stats = dump.data[0].outcome.stats().expect("success stats");
    assert_eq!(stats.segments, Some(9));
    assert_eq!(stats.points, None);
    assert!(dump.data[1].outcome.is_failure());
}

#[test]
fn filename_matches_legacy_artifact_names() {
    let pool = PerfDump::new(&GeneratorConfig::BeamPool {
        carryover: 200,
        num_threads: 4,
    });
    assert_eq!(dump_filename(&pool, true), "BeamPool_c200_t4.json");

    let astar = PerfDump::new(&GeneratorConfig::AStar);
    assert_eq!(dump_filename(&astar, true), "AStar.json");
    assert_eq!(dump_filename(&astar, false), "AStar_noTL.json");
}
