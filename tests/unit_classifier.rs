// Unit tests for the model artifacts: linear classifier, label encoder,
// and the first-match-wins artifact search.

use std::fs;

use corkboard::classify::error::ClassifyError;
use corkboard::classify::model::{
    find_model_file, LabelEncoder, TrainedClassifier, LABEL_ENCODER_FILE,
};
use corkboard::classify::pipeline::{ArtifactPaths, JobClassifier};

fn two_class_model() -> TrainedClassifier {
    // Class 0 fires on feature 0, class 1 on feature 1.
    serde_json::from_str(
        r#"{
            "n_features": 3,
            "weights": [[1.0, 0.0, 0.1], [0.0, 1.0, 0.1]],
            "intercepts": [0.0, -0.5]
        }"#,
    )
    .unwrap()
}

// ============================================================
// TrainedClassifier::predict
// ============================================================

#[test]
fn predict_picks_highest_scoring_class() {
    let model = two_class_model();
    assert_eq!(model.predict(&vec![3, 0, 0]).unwrap(), 0);
    assert_eq!(model.predict(&vec![0, 3, 0]).unwrap(), 1);
}

#[test]
fn intercepts_break_otherwise_equal_scores() {
    let model = two_class_model();
    // Equal weight contributions; class 1's negative intercept loses.
    assert_eq!(model.predict(&vec![1, 1, 0]).unwrap(), 0);
}

#[test]
fn dimension_mismatch_is_a_prediction_error() {
    let model = two_class_model();
    let err = model.predict(&vec![1, 0]).unwrap_err();
    assert!(matches!(err, ClassifyError::Prediction(_)));
    assert!(err.to_string().starts_with("Unable to classify: "));
}

#[test]
fn zero_vector_still_predicts_some_class() {
    let model = two_class_model();
    // All scores reduce to intercepts; argmax is still well defined.
    assert_eq!(model.predict(&vec![0, 0, 0]).unwrap(), 0);
}

// ============================================================
// Artifact loading and shape validation
// ============================================================

#[test]
fn load_rejects_inconsistent_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_model_linear.json");
    // Two weight rows but one intercept.
    fs::write(
        &path,
        r#"{"n_features": 2, "weights": [[1.0, 0.0], [0.0, 1.0]], "intercepts": [0.0]}"#,
    )
    .unwrap();

    let err = TrainedClassifier::load(&path).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedArtifact { .. }));
}

#[test]
fn load_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_model_linear.json");
    fs::write(&path, "not json at all").unwrap();

    let err = TrainedClassifier::load(&path).unwrap_err();
    assert!(matches!(err, ClassifyError::MalformedArtifact { .. }));
}

// ============================================================
// LabelEncoder
// ============================================================

#[test]
fn decode_maps_class_id_to_label() {
    let encoder = LabelEncoder::from_labels(["Engineering", "Healthcare"]);
    assert_eq!(encoder.decode(0).unwrap(), "Engineering");
    assert_eq!(encoder.decode(1).unwrap(), "Healthcare");
}

#[test]
fn decode_out_of_range_is_a_prediction_error_not_a_panic() {
    let encoder = LabelEncoder::from_labels(["Engineering"]);
    let err = encoder.decode(7).unwrap_err();
    assert!(matches!(err, ClassifyError::Prediction(_)));
}

#[test]
fn every_label_in_the_fitted_set_decodes_non_empty() {
    let encoder = LabelEncoder::from_labels(["Engineering", "Healthcare", "Sales"]);
    for id in 0..encoder.labels().len() {
        assert!(!encoder.decode(id).unwrap().is_empty());
    }
}

#[test]
fn missing_encoder_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = LabelEncoder::load(&dir.path().join(LABEL_ENCODER_FILE)).unwrap_err();
    assert!(matches!(err, ClassifyError::LabelEncoderNotFound { .. }));
}

// ============================================================
// Artifact search
// ============================================================

#[test]
fn first_directory_with_a_match_wins() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("best_model_a.json"), "{}").unwrap();
    fs::write(second.path().join("best_model_b.json"), "{}").unwrap();

    let found = find_model_file(&[
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ])
    .unwrap();
    assert_eq!(found, first.path().join("best_model_a.json"));
}

#[test]
fn non_matching_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.txt"), "").unwrap();
    fs::write(dir.path().join("best_model_linear.onnx"), "").unwrap();
    fs::write(dir.path().join("best_model_linear.json"), "{}").unwrap();

    let found = find_model_file(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(found, dir.path().join("best_model_linear.json"));
}

#[test]
fn exhausted_search_reports_directories_searched() {
    let empty = tempfile::tempdir().unwrap();
    let missing = empty.path().join("does-not-exist");

    let err = find_model_file(&[empty.path().to_path_buf(), missing]).unwrap_err();
    match err {
        ClassifyError::ModelNotFound { searched } => assert_eq!(searched.len(), 2),
        other => panic!("expected ModelNotFound, got {other:?}"),
    }
}

// ============================================================
// Degraded facade
// ============================================================

#[test]
fn facade_with_missing_artifacts_is_degraded_not_dead() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths {
        stopwords: dir.path().join("stopwords_en.txt"),
        vocabulary: dir.path().join("vocab.txt"),
        model_dirs: vec![dir.path().to_path_buf()],
        label_encoder: dir.path().join(LABEL_ENCODER_FILE),
    };

    let classifier = JobClassifier::load(&paths);
    assert!(classifier.is_degraded());
    assert!(classifier.labels().is_none());
    assert!(classifier.preprocessed("some text").is_none());

    // Every call returns the same message — no retry, no panic.
    let expected = "Unable to classify due to missing model or label encoder";
    for _ in 0..3 {
        assert_eq!(classifier.classify_job("a software developer role"), expected);
        assert!(matches!(
            classifier.classify("anything").unwrap_err(),
            ClassifyError::Degraded
        ));
    }
}
