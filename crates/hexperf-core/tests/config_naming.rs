use hexperf_core::GeneratorConfig;

#[test]
fn algorithm_names_are_stable() {
    assert_eq!(
        GeneratorConfig::Beam { carryover: 200 }.algorithm_name(),
        "Beam"
    );
    assert_eq!(
        GeneratorConfig::BeamPool {
            carryover: 200,
            num_threads: 4
        }
        .algorithm_name(),
        "BeamPool"
    );
    assert_eq!(
        GeneratorConfig::BeamSplit {
            carryover: 50,
            num_threads: 4
        }
        .algorithm_name(),
        "BeamSplit"
    );
    assert_eq!(GeneratorConfig::AStar.algorithm_name(), "AStar");
    assert_eq!(
        GeneratorConfig::AStarSplit { num_threads: 8 }.algorithm_name(),
        "AStarSplit"
    );
}

#[test]
fn carryover_only_on_beam_variants() {
    assert_eq!(
        GeneratorConfig::Beam { carryover: 768 }.carryover(),
        Some(768)
    );
    assert_eq!(
        GeneratorConfig::BeamSplit {
            carryover: 96,
            num_threads: 8
        }
        .carryover(),
        Some(96)
    );
    assert_eq!(GeneratorConfig::AStar.carryover(), None);
    assert_eq!(
        GeneratorConfig::AStarSplit { num_threads: 2 }.carryover(),
        None
    );
}

#[test]
fn thread_count_only_on_parallel_variants() {
    assert_eq!(GeneratorConfig::Beam { carryover: 25 }.num_threads(), None);
    assert_eq!(GeneratorConfig::AStar.num_threads(), None);
    assert_eq!(
        GeneratorConfig::BeamPool {
            carryover: 100,
            num_threads: 6
        }
        .num_threads(),
        Some(6)
    );
    assert_eq!(
        GeneratorConfig::AStarSplit { num_threads: 10 }.num_threads(),
        Some(10)
    );
}

#[test]
fn config_serde_roundtrip_keeps_variant() {
    let config = GeneratorConfig::BeamSplit {
        carryover: 1000,
        num_threads: 10,
    };
    let json = serde_json::to_string(&config).expect("serialize");
    assert!(json.contains("\"algorithm\":\"BeamSplit\""));
    let restored: GeneratorConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(config, restored);
}
