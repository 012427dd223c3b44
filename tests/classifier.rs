use bookmood::emotion::{EmotionLabel, LabeledScore, SentenceScores};
use bookmood::error::EmotionError;
use bookmood::nlp::classifier::decode_batch;

fn entry(label: &str, score: f64) -> LabeledScore {
    LabeledScore {
        label: label.to_string(),
        score,
    }
}

fn full_set(scores: [f64; 7]) -> Vec<LabeledScore> {
    EmotionLabel::ALL
        .iter()
        .zip(scores)
        .map(|(label, score)| entry(label.as_str(), score))
        .collect()
}

#[test]
fn label_order_inside_a_vector_is_irrelevant() {
    let canonical = full_set([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]);
    let mut shuffled = canonical.clone();
    shuffled.rotate_left(3);
    shuffled.swap(0, 2);

    let a = SentenceScores::from_labeled(&canonical).unwrap();
    let b = SentenceScores::from_labeled(&shuffled).unwrap();
    assert_eq!(a, b);
    assert_eq!(b.get(EmotionLabel::Joy), 0.4);
}

#[test]
fn missing_label_is_rejected() {
    let mut entries = full_set([0.1; 7]);
    entries.pop();
    let err = SentenceScores::from_labeled(&entries).unwrap_err();
    assert!(matches!(
        err,
        EmotionError::MissingLabel {
            label: EmotionLabel::Neutral
        }
    ));
}

#[test]
fn unknown_label_is_rejected() {
    let mut entries = full_set([0.1; 7]);
    entries[0].label = "melancholy".to_string();
    let err = SentenceScores::from_labeled(&entries).unwrap_err();
    assert!(matches!(err, EmotionError::UnknownLabel { .. }));
}

#[test]
fn duplicated_label_is_rejected() {
    let mut entries = full_set([0.1; 7]);
    entries[1].label = "anger".to_string();
    let err = SentenceScores::from_labeled(&entries).unwrap_err();
    assert!(matches!(
        err,
        EmotionError::DuplicateLabel {
            label: EmotionLabel::Anger
        }
    ));
}

#[test]
fn out_of_range_score_is_rejected() {
    let mut entries = full_set([0.1; 7]);
    entries[3].score = 1.2;
    let err = SentenceScores::from_labeled(&entries).unwrap_err();
    assert!(matches!(
        err,
        EmotionError::ScoreOutOfRange {
            label: EmotionLabel::Joy,
            ..
        }
    ));
}

#[test]
fn wire_format_decodes_into_validated_vectors() {
    let body = r#"[
        [{"label": "joy", "score": 0.93}, {"label": "neutral", "score": 0.4},
         {"label": "anger", "score": 0.01}, {"label": "disgust", "score": 0.02},
         {"label": "fear", "score": 0.03}, {"label": "sadness", "score": 0.04},
         {"label": "surprise", "score": 0.05}],
        [{"label": "surprise", "score": 0.7}, {"label": "joy", "score": 0.1},
         {"label": "anger", "score": 0.1}, {"label": "disgust", "score": 0.1},
         {"label": "fear", "score": 0.1}, {"label": "sadness", "score": 0.1},
         {"label": "neutral", "score": 0.1}]
    ]"#;
    let raw: Vec<Vec<LabeledScore>> = serde_json::from_str(body).unwrap();
    let vectors = decode_batch(2, &raw).unwrap();
    assert_eq!(vectors.len(), 2);
    assert_eq!(vectors[0].get(EmotionLabel::Joy), 0.93);
    assert_eq!(vectors[1].get(EmotionLabel::Surprise), 0.7);
}

#[test]
fn batch_arity_mismatch_is_fatal() {
    let raw = vec![full_set([0.1; 7])];
    let err = decode_batch(2, &raw).unwrap_err();
    let err = err.downcast_ref::<EmotionError>().expect("domain error");
    assert!(matches!(
        err,
        EmotionError::BatchArity {
            expected: 2,
            got: 1
        }
    ));
}
