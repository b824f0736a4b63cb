use super::*;

#[test]
fn test_parse_search_specs() {
    assert_eq!(
        "alphabeta:3".parse::<EngineSpec>().unwrap(),
        EngineSpec::Search {
            algorithm: SearchAlgorithm::AlphaBeta,
            depth: 3
        }
    );
    assert_eq!(
        "negamax".parse::<EngineSpec>().unwrap(),
        EngineSpec::Search {
            algorithm: SearchAlgorithm::Negamax,
            depth: DEFAULT_DEPTH
        }
    );
    assert_eq!(
        "minimax:1".parse::<EngineSpec>().unwrap().limits(),
        SearchLimits::depth(1)
    );
    assert_eq!("greedy".parse::<EngineSpec>().unwrap().limits().depth, 1);
    assert_eq!("random".parse::<EngineSpec>().unwrap(), EngineSpec::Random);
}

#[test]
fn test_parse_rejects_bad_specs() {
    assert!(matches!(
        "stockfish".parse::<EngineSpec>(),
        Err(TournamentError::UnknownEngine(_))
    ));
    assert!(matches!(
        "alphabeta:deep".parse::<EngineSpec>(),
        Err(TournamentError::InvalidDepth { .. })
    ));
    assert!(matches!(
        "random:3".parse::<EngineSpec>(),
        Err(TournamentError::InvalidDepth { .. })
    ));
    assert!(matches!(
        "greedy:4".parse::<EngineSpec>(),
        Err(TournamentError::InvalidDepth { .. })
    ));
}

#[test]
fn test_display_round_trips() {
    for text in ["alphabeta:3", "negamax:2", "minimax:1", "greedy", "random"] {
        let spec: EngineSpec = text.parse().unwrap();
        assert_eq!(spec.to_string(), text);
    }
}

#[test]
fn test_build_names_engine() {
    let engine = "negamax:1".parse::<EngineSpec>().unwrap().build(Some(1));
    assert_eq!(engine.name(), "negamax");
    let engine = EngineSpec::Random.build(None);
    assert_eq!(engine.name(), "random");
}
