use super::*;

#[test]
fn toml_names_a_selector() {
    let config = SelectorConfig::from_toml("kind = \"material\"\ndepth = 3\n").unwrap();
    assert_eq!(config.kind, SelectorKind::Material);
    assert_eq!(config.depth, Some(3));
    assert_eq!(config.seed, None);
}

#[test]
fn knobs_are_optional() {
    let config = SelectorConfig::from_toml("kind = \"random\"\n").unwrap();
    assert_eq!(config.kind, SelectorKind::Random);
    assert_eq!(config.depth, None);
    assert_eq!(config.seed, None);
}

#[test]
fn unknown_kinds_are_rejected() {
    assert!(SelectorConfig::from_toml("kind = \"stockfish\"\n").is_err());
}

#[test]
fn json_round_trips() {
    let config = SelectorConfig {
        kind: SelectorKind::Clock,
        depth: None,
        seed: Some(11),
    };
    let text = serde_json::to_string(&config).unwrap();
    let back: SelectorConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back.kind, config.kind);
    assert_eq!(back.seed, config.seed);
}

#[test]
fn build_produces_the_named_selector() {
    let cases = [
        (SelectorKind::Material, "Material v1.0"),
        (SelectorKind::Random, "Random v1.0"),
        (SelectorKind::Alphabetical, "Alphabetical v1.0"),
        (SelectorKind::FirstUci, "FirstMove v1.0"),
        (SelectorKind::Clock, "Combo v1.0"),
    ];
    for (kind, name) in cases {
        let selector = build(&SelectorConfig::of(kind));
        assert_eq!(selector.name(), name);
    }
}
