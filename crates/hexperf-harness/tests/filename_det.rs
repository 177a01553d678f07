use hexperf_core::GeneratorConfig;
use hexperf_harness::dump::{dump_filename, PerfDump};

fn name(config: &GeneratorConfig, trim_larger: bool) -> String {
    dump_filename(&PerfDump::new(config), trim_larger)
}

#[test]
fn identical_configs_derive_identical_filenames() {
    let config = GeneratorConfig::BeamPool {
        carryover: 200,
        num_threads: 4,
    };
    assert_eq!(name(&config, true), name(&config.clone(), true));
}

#[test]
fn changing_any_parameter_changes_the_filename() {
    let base = GeneratorConfig::BeamPool {
        carryover: 200,
        num_threads: 4,
    };
    let more_threads = GeneratorConfig::BeamPool {
        carryover: 200,
        num_threads: 8,
    };
    let wider = GeneratorConfig::BeamPool {
        carryover: 400,
        num_threads: 4,
    };
    assert_ne!(name(&base, true), name(&more_threads, true));
    assert_ne!(name(&base, true), name(&wider, true));
    assert_ne!(name(&base, true), name(&base, false));
}

#[test]
fn distinct_variants_never_collide() {
    let configs = [
        GeneratorConfig::Beam { carryover: 200 },
        GeneratorConfig::BeamPool {
            carryover: 200,
            num_threads: 4,
        },
        GeneratorConfig::BeamSplit {
            carryover: 200,
            num_threads: 4,
        },
        GeneratorConfig::AStar,
        GeneratorConfig::AStarSplit { num_threads: 4 },
    ];
    let mut names: Vec<String> = configs.iter().map(|c| name(c, true)).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), configs.len());
}
