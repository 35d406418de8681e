//! Integration tests for the Naive Bayes classifier public API.

use std::sync::Arc;
use std::thread;

use nbayes::prelude::*;

const QUERY: [&str; 5] = ["Chinese", "Chinese", "Chinese", "Tokyo", "Japan"];

fn train_textbook(nb: &mut NaiveBayes) -> Result<()> {
    nb.train("yes", ["Chinese", "Beijing", "Chinese"])?;
    nb.train("yes", ["Chinese", "Chinese", "Shanghai"])?;
    nb.train("yes", ["Chinese", "Monaco"])?;
    nb.train("no", ["Tokyo", "Japan", "Chinese"])?;
    Ok(())
}

#[test]
fn test_textbook_example_live_denominator() -> Result<()> {
    let config = ClassifierConfig::new().with_denominator_policy(DenominatorPolicy::Live);
    let mut nb = NaiveBayes::with_config(config);
    train_textbook(&mut nb)?;

    assert!((nb.word_probability("yes", "Chinese")? - 0.4286).abs() < 1e-4);
    assert!((nb.word_probability("yes", "Tokyo")? - 0.0714).abs() < 1e-4);
    assert!((nb.word_probability("no", "Chinese")? - 0.2222).abs() < 1e-4);
    assert!((nb.word_probability("no", "Tokyo")? - 0.2222).abs() < 1e-4);

    assert!((nb.score("yes", &QUERY)? - -8.11).abs() < 0.01);
    assert!((nb.score("no", &QUERY)? - -8.91).abs() < 0.01);

    let ranking = nb.classify(&QUERY);
    assert_eq!(ranking[0].category(), "yes");
    assert_eq!(ranking[1].category(), "no");
    Ok(())
}

#[test]
fn test_textbook_example_training_snapshot() -> Result<()> {
    let mut nb = NaiveBayes::new();
    train_textbook(&mut nb)?;

    // "yes" was last trained before Tokyo and Japan entered the vocabulary.
    assert_eq!(nb.denominator("yes"), Some(12));
    assert_eq!(nb.denominator("no"), Some(9));
    assert!((nb.score("no", &QUERY)? - -8.91).abs() < 0.01);

    let ranking = nb.classify(&QUERY);
    assert_eq!(ranking[0].category(), "yes");
    assert_eq!(ranking[0].to_string(), format!("category=yes score={}", ranking[0].score()));
    Ok(())
}

#[test]
fn test_scores_are_reproducible() -> Result<()> {
    let mut first = NaiveBayes::new();
    let mut second = NaiveBayes::new();
    train_textbook(&mut first)?;
    train_textbook(&mut second)?;

    let a = first.classify(&QUERY);
    let b = second.classify(&QUERY);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.category(), y.category());
        assert_eq!(x.score().to_bits(), y.score().to_bits());
    }
    Ok(())
}

#[test]
fn test_ranking_sorted_descending() -> Result<()> {
    let mut nb = NaiveBayes::new();
    let corpus = [
        ("sports", "the team won the match with a late goal"),
        ("sports", "coach praises team after cup match"),
        ("tech", "new compiler release improves rust build times"),
        ("tech", "the team ships a faster database engine"),
        ("food", "slow cooked tomato sauce with fresh pasta"),
        ("travel", "cheap flights and a late train to rome"),
    ];
    for (category, text) in corpus {
        nb.train(category, text.split_whitespace())?;
    }

    let query: Vec<&str> = "team match goal".split_whitespace().collect();
    let ranking = nb.classify(&query);
    assert_eq!(ranking.len(), 4);
    assert_eq!(ranking[0].category(), "sports");
    for pair in ranking.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
    Ok(())
}

#[test]
fn test_errors() {
    let mut nb = NaiveBayes::new();
    assert!(matches!(
        nb.train("", ["word"]),
        Err(NbayesError::InvalidArgument(_))
    ));
    assert!(nb.is_empty());
    assert!(nb.classify(&["word"]).is_empty());
    assert!(matches!(
        nb.score("missing", &["word"]),
        Err(NbayesError::CategoryNotFound(_))
    ));
    assert!(matches!(
        nb.word_probability("missing", "word"),
        Err(NbayesError::CategoryNotFound(_))
    ));
}

#[test]
fn test_clear_then_retrain_matches_fresh() -> Result<()> {
    let mut reused = NaiveBayes::new();
    reused.train("noise", ["a", "b", "c", "d"])?;
    reused.clear();
    assert!(reused.classify(&QUERY).is_empty());
    train_textbook(&mut reused)?;

    let mut fresh = NaiveBayes::new();
    train_textbook(&mut fresh)?;

    assert_eq!(reused.classify(&QUERY), fresh.classify(&QUERY));
    assert_eq!(reused.stats(), fresh.stats());
    Ok(())
}

#[test]
fn test_training_examples_from_strings() -> Result<()> {
    let examples: Vec<TrainingExample> = [
        "yes:Chinese Beijing Chinese",
        "yes:Chinese Chinese Shanghai",
        "yes:Chinese Monaco",
        "no:Tokyo Japan Chinese",
    ]
    .iter()
    .map(|s| s.parse())
    .collect::<Result<_>>()?;

    let mut batch = NaiveBayes::new();
    batch.train_batch(&examples)?;

    let mut single = NaiveBayes::new();
    train_textbook(&mut single)?;

    assert_eq!(batch.classify(&QUERY), single.classify(&QUERY));
    Ok(())
}

#[test]
fn test_shared_classifier_readers_and_writer() -> Result<()> {
    let shared = Arc::new(SharedClassifier::new());
    shared.train("no", ["Tokyo", "Japan", "Chinese"])?;

    let writer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || -> Result<()> {
            shared.train("yes", ["Chinese", "Beijing", "Chinese"])?;
            shared.train("yes", ["Chinese", "Chinese", "Shanghai"])?;
            shared.train("yes", ["Chinese", "Monaco"])?;
            Ok(())
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..50 {
                    let ranking = shared.classify(&QUERY);
                    assert!(!ranking.is_empty());
                    for pair in ranking.windows(2) {
                        assert!(pair[0].score() >= pair[1].score());
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap()?;
    for reader in readers {
        reader.join().unwrap();
    }

    let mut expected = NaiveBayes::new();
    expected.train("no", ["Tokyo", "Japan", "Chinese"])?;
    expected.train("yes", ["Chinese", "Beijing", "Chinese"])?;
    expected.train("yes", ["Chinese", "Chinese", "Shanghai"])?;
    expected.train("yes", ["Chinese", "Monaco"])?;
    assert_eq!(shared.classify(&QUERY), expected.classify(&QUERY));
    assert_eq!(shared.predict(&QUERY).map(|c| c.category), Some("yes".to_string()));
    Ok(())
}
