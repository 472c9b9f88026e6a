//! End-to-end tokenize scenarios over a small order-taking catalog.

use semtok::catalog::Catalog;
use semtok::graph::{enumerate_paths, GraphWalker};
use semtok::lexicon::Lexicon;
use semtok::tokenizer::{EdgeLabel, Lattice, SemanticToken, Tokenizer};

const MENU_CATALOG: &str = r#"{
    "domains": [
        {
            "name": "menu",
            "aliases": [
                { "token": "ICE_TEA", "text": "ice tea" },
                { "token": "BURGER", "text": "big burger" },
                { "token": "FRIES", "text": "fries" },
                { "token": "COMBO", "text": "combo one", "matcher": "exact_prefix" }
            ]
        },
        {
            "name": "sizes",
            "aliases": [
                { "token": "LARGE", "text": "large" },
                { "token": "SMALL", "text": "small" }
            ]
        },
        {
            "name": "intents",
            "aliases": [
                { "token": "ADD", "text": "i want" },
                { "token": "REMOVE", "text": "no" }
            ]
        }
    ]
}"#;

fn menu() -> (Lexicon, Tokenizer) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let catalog = Catalog::from_json(MENU_CATALOG).unwrap();
    let mut lexicon = catalog.build_lexicon().unwrap();
    let mut tokenizer = Tokenizer::new(
        lexicon.term_model().clone(),
        lexicon.number_parser().clone(),
    );
    lexicon.ingest(&mut tokenizer).unwrap();
    (lexicon, tokenizer)
}

/// Stringified tokens of the best complete path.
fn best_path_tokens(tokenizer: &Tokenizer, lattice: &Lattice) -> Vec<String> {
    let walker = GraphWalker::new(lattice);
    walker
        .right()
        .iter()
        .map(|step| {
            tokenizer
                .token_from_edge(walker.edge(*step))
                .unwrap()
                .to_string()
        })
        .collect()
}

/// Relevance-harness matching: walk the lattice, backtracking with
/// `retreat(false) + discard()` until the emitted token strings equal
/// `expected`.
fn matches_expected(tokenizer: &Tokenizer, lattice: &Lattice, expected: &[&str]) -> bool {
    let mut walker = GraphWalker::new(lattice);
    loop {
        let extended = loop {
            if walker.complete() {
                break true;
            }
            if !walker.advance() {
                break false;
            }
            let index = walker.left().len() - 1;
            if index >= expected.len() {
                break false;
            }
            let token = tokenizer
                .token_from_edge(walker.edge(walker.left()[index]))
                .unwrap();
            if token.to_string() != expected[index] {
                break false;
            }
        };

        if extended && walker.left().len() == expected.len() {
            return true;
        }

        loop {
            if !walker.retreat(false) {
                return false;
            }
            if walker.discard() {
                break;
            }
        }
    }
}

#[test]
fn test_order_with_intent_number_size_and_item() {
    let (_, tokenizer) = menu();
    let lattice = tokenizer.lattice_for("i want two large ice teas");

    assert_eq!(
        best_path_tokens(&tokenizer, &lattice),
        vec!["ADD", "2", "LARGE", "ICE_TEA"]
    );
}

#[test]
fn test_noisy_item_still_matches() {
    let (_, tokenizer) = menu();
    // An inserted adjective inside the alias span.
    let lattice = tokenizer.lattice_for("i want a big juicy burger");

    let tokens = best_path_tokens(&tokenizer, &lattice);
    assert_eq!(tokens.last().unwrap(), "BURGER");
    assert_eq!(tokens[0], "ADD");
}

#[test]
fn test_unknown_surface_recovery() {
    let (_, tokenizer) = menu();
    let input = "i want shiny fries";
    let terms: Vec<&str> = input.split_whitespace().collect();
    let lattice = tokenizer.lattice_for(input);

    let walker = GraphWalker::new(&lattice);
    let mut recovered = Vec::new();
    for step in walker.right() {
        let edge = walker.edge(*step);
        match tokenizer.token_from_edge(edge).unwrap() {
            SemanticToken::Unknown => {
                recovered.push(terms[step.position..step.position + edge.length].join(" "));
            }
            token => recovered.push(token.to_string()),
        }
    }
    assert_eq!(recovered, vec!["ADD", "shiny", "FRIES"]);
}

#[test]
fn test_backtracking_reaches_second_best_edges() {
    let mut lexicon = Lexicon::new();
    lexicon
        .add_domain(
            "cars",
            vec![
                semtok::lexicon::AliasSpec::new("RED", "red"),
                semtok::lexicon::AliasSpec::new("CONV", "red convertible"),
            ],
            true,
        )
        .unwrap();
    let mut tokenizer = Tokenizer::new(
        lexicon.term_model().clone(),
        lexicon.number_parser().clone(),
    );
    lexicon.ingest(&mut tokenizer).unwrap();

    let lattice = tokenizer.lattice_for("red convertible");

    // Greedy best: the two-term alias wins in one edge.
    assert_eq!(best_path_tokens(&tokenizer, &lattice), vec!["CONV"]);
    assert!(matches_expected(&tokenizer, &lattice, &["CONV"]));

    // The finer-grained reading needs retreat + discard to reach the
    // second-best edge at position 0.
    assert!(matches_expected(&tokenizer, &lattice, &["RED", "CONV"]));

    // And sequences the lattice cannot produce fail cleanly.
    assert!(!matches_expected(&tokenizer, &lattice, &["RED", "RED"]));
}

#[test]
fn test_exact_prefix_alias_policy() {
    let (_, tokenizer) = menu();

    // Whole-prefix match: the combo wins its two positions.
    let lattice = tokenizer.lattice_for("combo one please");
    let tokens = best_path_tokens(&tokenizer, &lattice);
    assert_eq!(tokens[0], "COMBO");

    // The exact-prefix matcher tolerates no insertions, so the combo
    // alias contributes nothing here and the position falls back to
    // unknown.
    let lattice = tokenizer.lattice_for("combo deluxe one");
    let edges = lattice.edges_at(0);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].label, EdgeLabel::Unknown);
}

#[test]
fn test_round_trip_single_alias() {
    let mut lexicon = Lexicon::new();
    lexicon
        .add_domain(
            "menu",
            vec![semtok::lexicon::AliasSpec::new(
                "TEA",
                "small unsweeten ice tea",
            )],
            true,
        )
        .unwrap();
    let mut tokenizer = Tokenizer::new(
        lexicon.term_model().clone(),
        lexicon.number_parser().clone(),
    );
    lexicon.ingest(&mut tokenizer).unwrap();

    let lattice = tokenizer.lattice_for("small unsweeten ice tea");
    let paths = enumerate_paths(&lattice);

    // Best complete path: one edge labelling the alias, scoring its
    // full length.
    let best = &paths[0];
    assert_eq!(best.len(), 1);
    let edge = &lattice.edges_at(0)[best[0].index];
    assert_eq!(edge.label, EdgeLabel::Alias(0));
    assert_eq!(edge.length, 4);
    assert!((edge.score - 4.0).abs() < 1e-9);
}

#[test]
fn test_empty_query_completes_immediately() {
    let (_, tokenizer) = menu();
    let lattice = tokenizer.lattice_for("");

    assert!(lattice.is_empty());
    let walker = GraphWalker::new(&lattice);
    assert!(walker.complete());
    assert_eq!(enumerate_paths(&lattice), vec![Vec::new()]);
}

#[test]
fn test_all_unknown_query_has_one_path() {
    let (_, tokenizer) = menu();
    let lattice = tokenizer.lattice_for("quantum flux capacitor");

    let paths = enumerate_paths(&lattice);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 3);
    for step in &paths[0] {
        let edge = &lattice.edges_at(step.position)[step.index];
        assert_eq!(edge.length, 1);
        assert!(edge.label.is_unknown());
    }
}

#[test]
fn test_number_phrase_tokens() {
    let (_, tokenizer) = menu();
    let lattice = tokenizer.lattice_for("twenty five fries");

    assert_eq!(
        best_path_tokens(&tokenizer, &lattice),
        vec!["25", "FRIES"]
    );
}

#[test]
fn test_shared_model_across_queries() {
    let (_, tokenizer) = menu();

    // The index is read-only after ingestion: lattices are independent.
    let first = tokenizer.lattice_for("i want fries");
    let second = tokenizer.lattice_for("no large ice tea");

    assert_eq!(best_path_tokens(&tokenizer, &first), vec!["ADD", "FRIES"]);
    assert_eq!(
        best_path_tokens(&tokenizer, &second),
        vec!["REMOVE", "LARGE", "ICE_TEA"]
    );
}
