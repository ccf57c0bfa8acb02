use indoc::indoc;
use std::{sync::Arc, thread};
use word_class::{build, normalize, scan, Classifier, Dfa, DfaBuilder, Vocabulary};

const ADJECTIVES: &str = indoc! {"
    big
    fast
    new
    quick
    slow
"};

const CONJUNCTIONS: &str = indoc! {"
    and
    as well as
    but
    or
    so
"};

fn vocabulary(name: &str, words: &str) -> Vocabulary {
    Vocabulary::from_reader(name, words.as_bytes()).unwrap()
}

#[test]
fn determinism() {
    let dfa = vocabulary("adjectives", ADJECTIVES).build();
    let input = "the big dog is fast but the new cat is quick";

    let first = scan(&dfa, input);
    let second = scan(&dfa, input);

    assert_eq!(first, second);
    assert_eq!(first, ["big", "fast", "new", "quick"]);
}

#[test]
fn no_substring_false_positive() {
    assert!(scan(&build(&["new"]), "newly arrives").is_empty());
}

#[test]
fn exact_word_match() {
    assert_eq!(
        scan(&build(&["and", "or"]), "cats and dogs or fish"),
        ["and", "or"]
    );
}

#[test]
fn end_of_string_acceptance() {
    assert_eq!(scan(&build(&["fast"]), "run fast"), ["fast"]);
}

#[test]
fn duplicate_preservation() {
    assert_eq!(
        scan(&build(&["the"]), "the cat and the dog"),
        ["the", "the"]
    );
}

#[test]
fn shared_prefix_independence() {
    assert_eq!(scan(&build(&["do", "does"]), "he does it"), ["does"]);
}

#[test]
fn idempotent_construction() {
    let with_duplicates = build(&["so", "and", "so", "or", "and", "so"]);
    let deduplicated = build(&["so", "and", "or"]);

    assert_eq!(with_duplicates, deduplicated);
    assert_eq!(with_duplicates.state_count(), deduplicated.state_count());
}

#[test]
fn idempotent_construction_up_to_numbering() {
    // Different word orders number states differently but recognize the same words.
    let forward = build(&["and", "or", "and"]);
    let backward = build(&["or", "and"]);

    assert_eq!(forward.state_count(), backward.state_count());
    assert_eq!(forward.accepting_count(), backward.accepting_count());
    for input in ["and", "or", "an", "o", "and or", ""].iter() {
        assert_eq!(scan(&forward, input), scan(&backward, input));
    }
}

#[test]
fn empty_input() {
    assert!(scan(&vocabulary("adjectives", ADJECTIVES).build(), "").is_empty());
    assert!(scan(&build(Vec::<String>::new()), "").is_empty());
}

#[test]
fn final_token_mismatch_without_trailing_space() {
    let dfa = build(&["fast", "new"]);

    assert_eq!(scan(&dfa, "fast and newer"), ["fast"]);
    assert_eq!(scan(&dfa, "new fast newer"), ["new", "fast"]);
}

#[test]
fn tree_shape() {
    let dfa = vocabulary("conjunctions", CONJUNCTIONS).build();

    // Every state but the start has exactly one incoming transition.
    let mut incoming = vec![0; dfa.state_count()];
    for state in dfa.states() {
        for (_, to) in dfa.transitions(state) {
            incoming[to.index()] += 1;
        }
    }
    assert_eq!(incoming[Dfa::START.index()], 0);
    assert!(incoming[1..].iter().all(|count| *count == 1));
}

#[test]
fn every_state_on_a_word_path() {
    let dfa = vocabulary("conjunctions", CONJUNCTIONS).build();

    // Leaves are exactly the states without outgoing transitions, and each must be accepting.
    for state in dfa.states() {
        if dfa.transitions(state).is_empty() {
            assert!(dfa.is_accepting(state), "state {} is a dead end", state);
        }
    }
}

#[test]
fn multi_word_vocabulary_entry() {
    let dfa = vocabulary("conjunctions", CONJUNCTIONS).build();

    assert_eq!(
        scan(&dfa, "bread as well as butter but no jam"),
        ["as well as", "but"]
    );
}

#[test]
fn normalized_input() {
    let dfa = vocabulary("adjectives", ADJECTIVES).build();
    let text = normalize("The BIG, bad wolf (and a NEW pig) ran: fast!");

    assert_eq!(scan(&dfa, &text), ["big", "new", "fast"]);
}

#[test]
fn builder_and_vocabulary_agree() {
    let from_vocabulary = vocabulary("adjectives", ADJECTIVES).build();
    let from_builder = DfaBuilder::new().words(ADJECTIVES.lines()).build();

    assert_eq!(from_vocabulary, from_builder);
}

#[test]
fn concurrent_scans() {
    let dfa = Arc::new(vocabulary("conjunctions", CONJUNCTIONS).build());
    let inputs = [
        "salt and pepper",
        "this or that but not both",
        "so it goes",
        "tea as well as coffee and cake",
    ];
    let expected = inputs
        .iter()
        .map(|input| {
            scan(&dfa, input)
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let handles = inputs
        .iter()
        .map(|input| {
            let dfa = Arc::clone(&dfa);
            let input = input.to_string();
            thread::spawn(move || {
                dfa.scan(&input)
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn dfa_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Dfa>();
    assert_send_sync::<Classifier>();
}

#[test]
fn classify() {
    let mut classifier = Classifier::new();
    classifier
        .add_vocabulary(&vocabulary("adjectives", ADJECTIVES))
        .add_vocabulary(&vocabulary("conjunctions", CONJUNCTIONS));
    let text = normalize("Slow and steady, or fast and reckless? Slow, so slow.");

    let classifications = classifier.classify(&text);

    assert_eq!(classifications.len(), 2);
    assert_eq!(classifications[0].class(), "adjectives");
    assert_eq!(classifications[0].words(), ["slow", "fast", "slow", "slow"]);
    assert_eq!(classifications[0].counts(), [("slow", 3), ("fast", 1)]);
    assert_eq!(classifications[1].class(), "conjunctions");
    assert_eq!(classifications[1].words(), ["and", "or", "and", "so"]);
    assert_eq!(classifications[1].counts(), [("and", 2), ("or", 1), ("so", 1)]);
}
