//! End-to-end behaviour of the analyzer against the built-in lexicon.

use std::sync::Arc;

use tulip_sentiment::{
    classify_score, Confidence, EmotionLexicon, SentimentAnalyzer, SentimentLabel,
};

fn analyzer() -> SentimentAnalyzer {
    SentimentAnalyzer::new(Arc::new(
        EmotionLexicon::builtin().expect("builtin lexicon"),
    ))
}

const SAMPLE_POSTS: &[&str] = &[
    "",
    "   ",
    "반도체 실적 발표",
    "떡상 가즈아!!",
    "떡상!!!! 👍🏻",
    "폭락 손절 각",
    "상폐 각이다",
    "에휴 망했다",
    "떡상 했는데 폭락",
    "떡상 👍🏻 폭락",
    "떡상!! 상폐",
    "ㅅㅂ 떡상 가즈아!! 👍🏻",
    "TSLA TO THE MOON 🚀🚀",
    "개ㅂㅅ 같은 잡주",
];

#[test]
fn swear_terms_pin_the_score_to_five() {
    let analyzer = analyzer();
    for text in [
        "ㅅㅂ",
        "ㅈㄴ 떡상 가즈아!! 👍🏻",
        "대박 호재 ㅂㅅ들",
        "상폐 에휴 ㅁㅊ",
    ] {
        let result = analyzer.analyze(text);
        assert_eq!(result.score, 5.0, "{text}");
        assert_eq!(result.label, SentimentLabel::StronglyNegative, "{text}");
        assert_eq!(result.confidence, Confidence::High, "{text}");
    }
}

#[test]
fn swear_pin_holds_for_very_long_posts() {
    let text = format!("{} ㅅㅂ", "떡상 가즈아!! ".repeat(3000));
    let result = analyzer().analyze(&text);
    assert_eq!(result.score, 5.0);
    assert!(result.class_probabilities.is_some());
}

#[test]
fn scores_stay_in_range() {
    let analyzer = analyzer();
    for text in SAMPLE_POSTS {
        let score = analyzer.analyze(text).score;
        assert!((0.0..=100.0).contains(&score), "{text}: {score}");
    }
}

#[test]
fn label_is_a_function_of_score() {
    let analyzer = analyzer();
    for text in SAMPLE_POSTS {
        let result = analyzer.analyze(text);
        assert_eq!(result.label, classify_score(result.score), "{text}");
    }
}

#[test]
fn boundary_scores_land_outside_neutral() {
    let analyzer = analyzer();

    // positive + very_negative + "!!": 50 + 20 - 35 + 10
    let low_edge = analyzer.analyze("떡상!! 상폐");
    assert_eq!(low_edge.score, 45.0);
    assert_eq!(low_edge.label, SentimentLabel::MildlyNegative);

    // positive + negative + thumbs-up: 50 + 20 - 20 + 5
    let high_edge = analyzer.analyze("떡상 👍🏻 폭락");
    assert_eq!(high_edge.score, 55.0);
    assert_eq!(high_edge.label, SentimentLabel::MildlyPositive);
}

#[test]
fn probabilities_sum_to_one_hundred_and_track_the_label() {
    let analyzer = analyzer();
    for text in SAMPLE_POSTS {
        let result = analyzer.analyze(text);
        let probabilities = result
            .class_probabilities
            .unwrap_or_else(|| panic!("{text}: missing class probabilities"));
        assert!(
            (probabilities.total() - 100.0).abs() <= 0.1,
            "{text}: total {}",
            probabilities.total()
        );
        let argmax = probabilities.argmax();
        let centre = 25.0 * f64::from(u8::try_from(argmax.index()).expect("label index"));
        assert!(
            (result.score - centre).abs() < 12.5,
            "{text}: argmax {argmax:?} is not the band nearest score {}",
            result.score
        );
        assert!(
            argmax.index().abs_diff(result.label.index()) <= 1,
            "{text}: argmax {argmax:?} vs label {:?}",
            result.label
        );
    }
}

#[test]
fn keywords_of_empty_batch_are_empty() {
    let analyzer = analyzer();
    let texts: [&str; 0] = [];
    for top_n in [0, 1, 3, 100] {
        assert!(analyzer.extract_top_keywords(&texts, top_n).is_empty());
    }
}

#[test]
fn keywords_exclude_positive_terms_even_when_most_frequent() {
    let keywords = analyzer().extract_top_keywords(&["가즈아 가즈아 대박"], 3);
    assert!(!keywords.contains(&"가즈아".to_string()));
    assert!(!keywords.contains(&"대박".to_string()));
}

#[test]
fn keywords_surface_only_non_lexicon_tokens() {
    let analyzer = analyzer();

    let lexicon_only = ["떡상 떡상 간다", "떡상 좋다"];
    assert!(analyzer.extract_top_keywords(&lexicon_only, 1).is_empty());

    let with_topic = ["떡상 떡상 간다 반도체 반도체", "떡상 좋다"];
    assert_eq!(analyzer.extract_top_keywords(&with_topic, 1), vec!["반도체"]);
}

#[test]
fn analyze_is_idempotent() {
    let analyzer = analyzer();
    for text in SAMPLE_POSTS {
        let first = serde_json::to_string(&analyzer.analyze(text)).expect("serialize");
        let second = serde_json::to_string(&analyzer.analyze(text)).expect("serialize");
        assert_eq!(first, second, "{text}");
    }
}

#[test]
fn analyzer_is_shareable_across_threads() {
    let analyzer = analyzer();
    let expected = analyzer.analyze("떡상 가즈아!!");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || analyzer.analyze("떡상 가즈아!!"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}
