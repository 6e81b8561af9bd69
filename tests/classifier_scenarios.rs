use bayestag::classifier::NaiveBayesClassifier;
use bayestag::storage::{CategoryStore, MemoryStore, StoreSnapshot};

const GOOD: &str = "sunshine God love sex lobster sloth";
const BAD: &str = "fear death horror government zombie";

/// Every stored tally is positive and each category total matches its words.
fn assert_store_invariants(store: &MemoryStore) {
    for (category, words) in store.snapshot() {
        assert!(
            words.values().all(|count| *count > 0),
            "category {category} holds a non-positive tally: {words:?}"
        );
        let sum: i64 = words.values().sum();
        assert_eq!(store.sum_counts(&category).unwrap(), sum);
    }
}

#[test]
fn test_filtering_scenario() {
    let mut classifier = NaiveBayesClassifier::in_memory().unwrap();
    classifier.reset().unwrap();

    assert_eq!(classifier.classify("nothing trained yet").unwrap(), None);

    classifier.train("good", GOOD).unwrap();
    classifier.train("bad", BAD).unwrap();
    assert_store_invariants(classifier.store());

    assert_eq!(
        classifier
            .classify("sloths are so cute i love them")
            .unwrap()
            .as_deref(),
        Some("good")
    );
    assert_eq!(
        classifier
            .classify("i am a zombie and love the government")
            .unwrap()
            .as_deref(),
        Some("bad")
    );

    let scores = classifier
        .score("i am a zombie and love the government")
        .unwrap();
    assert_eq!(scores["bad"] as i64, -7);
    assert_eq!(scores["good"] as i64, -9);

    classifier.untrain("good", GOOD).unwrap();
    classifier.untrain("bad", BAD).unwrap();
    assert_store_invariants(classifier.store());

    assert!(classifier.score("lolcat").unwrap().is_empty());
    assert!(classifier.store().is_empty());
}

#[test]
fn test_reset_scenario() {
    let mut classifier = NaiveBayesClassifier::in_memory().unwrap();
    classifier.train("good", GOOD).unwrap();
    classifier.train("bad", BAD).unwrap();

    assert!(classifier.classify("nothing trained yet").unwrap().is_some());

    classifier.reset().unwrap();

    assert_eq!(classifier.classify("nothing trained yet").unwrap(), None);
}

#[test]
fn test_reset_preserves_pre_existing_data() {
    let mut existing = StoreSnapshot::new();
    existing
        .entry("ham".to_string())
        .or_default()
        .insert("meeting".to_string(), 3);
    let store = MemoryStore::from(existing.clone());

    let mut classifier = NaiveBayesClassifier::new(store).unwrap();
    classifier.train("spam", "lottery winner prize").unwrap();
    classifier.reset().unwrap();

    assert_eq!(classifier.into_store().snapshot(), existing);
}

#[test]
fn test_train_untrain_round_trip() {
    let mut classifier = NaiveBayesClassifier::in_memory().unwrap();
    classifier.train("good", "sloth sunshine").unwrap();
    let before = classifier.store().snapshot();

    classifier.train("good", GOOD).unwrap();
    classifier.train("good", GOOD).unwrap();
    assert_store_invariants(classifier.store());
    assert_eq!(classifier.store().get_count("good", "sloth").unwrap(), Some(3));

    classifier.untrain("good", GOOD).unwrap();
    classifier.untrain("good", GOOD).unwrap();

    assert_eq!(classifier.store().snapshot(), before);
}

#[test]
fn test_train_untrain_restores_empty_store() {
    let mut classifier = NaiveBayesClassifier::in_memory().unwrap();
    classifier.train("bad", BAD).unwrap();
    classifier.untrain("bad", BAD).unwrap();

    assert!(classifier.store().is_empty());
}

#[test]
fn test_invariants_hold_through_mixed_operations() {
    let mut classifier = NaiveBayesClassifier::in_memory().unwrap();
    let steps: [(bool, &str, &str); 6] = [
        (true, "good", GOOD),
        (true, "bad", BAD),
        (false, "good", "sloth sloth sloth unknown"),
        (true, "bad", "zombie zombie apocalypse"),
        (false, "bad", "government horror fear fear"),
        (false, "ghost", "nothing here"),
    ];

    for (train, category, text) in steps {
        if train {
            classifier.train(category, text).unwrap();
        } else {
            classifier.untrain(category, text).unwrap();
        }
        assert_store_invariants(classifier.store());
    }

    let scores = classifier.score("zombie sloth").unwrap();
    for category in scores.keys() {
        assert!(classifier.tally(category).unwrap() > 0);
    }
}

#[test]
fn test_zero_total_categories_excluded_from_scores() {
    let mut classifier = NaiveBayesClassifier::in_memory().unwrap();
    classifier.train("good", GOOD).unwrap();
    classifier.train("empty", "").unwrap();

    let scores = classifier.score("love").unwrap();
    assert_eq!(scores.keys().collect::<Vec<_>>(), vec!["good"]);
}
