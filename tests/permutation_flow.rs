use perm_gen::{write_sequence, GeneratorConfig, SeedSource, Sequence};

fn render(config: &GeneratorConfig) -> String {
    let mut out = Vec::new();
    write_sequence(&mut out, &config.generate()).unwrap();
    String::from_utf8(out).unwrap()
}

fn tokens(line: &str) -> Vec<usize> {
    line.split_whitespace().map(|t| t.parse().unwrap()).collect()
}

#[test]
fn seeded_run_prints_every_value_once() {
    let config = GeneratorConfig::from_args("500", Some("7")).unwrap();
    let line = render(&config);
    assert!(line.ends_with('\n'));
    assert!(!line.starts_with(' '));
    assert!(!line.trim_end_matches('\n').ends_with(' '));

    let mut values = tokens(&line);
    assert_eq!(values.len(), 500);
    values.sort_unstable();
    assert_eq!(values, (0..500).collect::<Vec<usize>>());
}

#[test]
fn seeded_output_is_stable() {
    let config = GeneratorConfig::from_args("5", Some("42")).unwrap();
    let first = render(&config);
    for _ in 0..5 {
        assert_eq!(render(&config), first);
    }
}

#[test]
fn different_seeds_give_different_orders() {
    let outputs: Vec<String> = (0..4)
        .map(|seed| render(&GeneratorConfig::new(100, SeedSource::Fixed(seed))))
        .collect();
    for (i, a) in outputs.iter().enumerate() {
        for b in &outputs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn zero_and_negative_counts_print_blank_line() {
    for count in ["0", "-3"] {
        let config = GeneratorConfig::from_args(count, Some("1")).unwrap();
        assert_eq!(render(&config), "\n");
    }
}

#[test]
fn unseeded_runs_still_produce_permutations() {
    for seed in [None, Some("not-a-seed"), Some("1.5")] {
        let config = GeneratorConfig::from_args("64", seed).unwrap();
        assert!(!config.seed.is_fixed());
        let sequence = Sequence(tokens(&render(&config)));
        assert!(sequence.is_permutation());
        assert_eq!(sequence.len(), 64);
    }
}

#[test]
fn single_value_is_always_zero() {
    let config = GeneratorConfig::from_args("1", None).unwrap();
    assert_eq!(render(&config), "0\n");
}
