//! Integration tests for Affinity CLI commands.
//!
//! Uses tempfile for testing file-based operations.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use affinity::cli::{CliError, cmd_bands, cmd_batch, cmd_classify, evaluate_lines};
use affinity_core::{AffinityError, EmotionalState, Evaluation, EvaluationReport, Love, Thresholds};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a sample levels file.
fn create_levels_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("levels.txt");
    let content = "# sample levels\n-0.9\n-0.3\n\n0.0\n0.4\n0.9\nhigh\n";
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// CLASSIFY COMMAND TESTS
// =============================================================================

#[test]
fn test_classify_text_output() {
    let love = Love::default();
    assert_eq!(cmd_classify(&love, "0.8", false, false).unwrap(), "LOVE\n");
    assert_eq!(cmd_classify(&love, "-0.8", false, false).unwrap(), "HATE\n");
    assert_eq!(cmd_classify(&love, "0", false, false).unwrap(), "NONE\n");
}

#[test]
fn test_classify_boundary_literals() {
    let love = Love::default();
    assert_eq!(cmd_classify(&love, "-0.6", false, false).unwrap(), "DISLIKE\n");
    assert_eq!(cmd_classify(&love, "-0.1", false, false).unwrap(), "NONE\n");
    assert_eq!(cmd_classify(&love, "0.1", false, false).unwrap(), "NONE\n");
    assert_eq!(cmd_classify(&love, "0.6", false, false).unwrap(), "LIKE\n");
}

#[test]
fn test_classify_json_output() {
    let love = Love::default();
    let output = cmd_classify(&love, "0.3", true, false).unwrap();

    let evaluation: Evaluation = serde_json::from_str(&output).unwrap();
    assert_eq!(evaluation.emotion, "love");
    assert_eq!(evaluation.level, 0.3);
    assert_eq!(evaluation.state, EmotionalState::Like);
}

#[test]
fn test_classify_rejects_unparseable_input() {
    let result = cmd_classify(&Love::default(), "fond", false, false);
    assert!(matches!(
        result,
        Err(CliError::Core(AffinityError::ParseLevel(_)))
    ));
}

#[test]
fn test_classify_rejects_nan_by_default() {
    let result = cmd_classify(&Love::default(), "NaN", false, false);
    assert!(matches!(
        result,
        Err(CliError::Core(AffinityError::NonFinite(_)))
    ));
}

#[test]
fn test_classify_allows_non_finite_on_request() {
    let love = Love::default();
    assert_eq!(cmd_classify(&love, "NaN", false, true).unwrap(), "NONE\n");
    assert_eq!(cmd_classify(&love, "inf", false, true).unwrap(), "LOVE\n");
    assert_eq!(cmd_classify(&love, "-inf", false, true).unwrap(), "HATE\n");
}

#[test]
fn test_classify_with_custom_thresholds() {
    let love = Love::with_thresholds(Thresholds::new(0.3, 0.9).unwrap());
    assert_eq!(cmd_classify(&love, "0.2", false, false).unwrap(), "NONE\n");
    assert_eq!(cmd_classify(&love, "0.8", false, false).unwrap(), "LIKE\n");
}

// =============================================================================
// BATCH COMMAND TESTS
// =============================================================================

#[test]
fn test_batch_from_file_text() {
    let temp = create_temp_dir();
    let file = create_levels_file(&temp);

    let output = cmd_batch(&Love::default(), Some(&file), false, false).unwrap();
    assert!(output.contains("EVALUATIONS"));
    assert!(output.contains("-0.9 → HATE"));
    assert!(output.contains("0.9 → LOVE"));
    assert!(output.contains("\"high\""));
}

#[test]
fn test_batch_from_file_json() {
    let temp = create_temp_dir();
    let file = create_levels_file(&temp);

    let output = cmd_batch(&Love::default(), Some(&file), true, false).unwrap();
    let report: EvaluationReport = serde_json::from_str(&output).unwrap();

    let states: Vec<_> = report.evaluations.iter().map(|e| e.state).collect();
    assert_eq!(
        states,
        vec![
            EmotionalState::Hate,
            EmotionalState::Dislike,
            EmotionalState::None,
            EmotionalState::Like,
            EmotionalState::Love,
        ]
    );
    assert_eq!(report.rejections.len(), 1);
    assert_eq!(report.rejections[0].input, "high");
}

#[test]
fn test_batch_missing_file() {
    let temp = create_temp_dir();
    let missing = temp.path().join("missing.txt");

    let result = cmd_batch(&Love::default(), Some(&missing), false, false);
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_batch_empty_file() {
    let temp = create_temp_dir();
    let path = temp.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let output = cmd_batch(&Love::default(), Some(&path), true, false).unwrap();
    let report: EvaluationReport = serde_json::from_str(&output).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_evaluate_lines_strict_rejects_non_finite() {
    let input = Cursor::new("0.5\nNaN\ninf\n");
    let report = evaluate_lines(&Love::default(), input, false).unwrap();

    assert_eq!(report.evaluations.len(), 1);
    assert_eq!(report.rejections.len(), 2);
    assert_eq!(report.rejections[0].input, "NaN");
}

#[test]
fn test_evaluate_lines_lenient_classifies_non_finite() {
    let input = Cursor::new("NaN\n-inf\n");
    let report = evaluate_lines(&Love::default(), input, true).unwrap();

    assert!(report.rejections.is_empty());
    assert_eq!(report.count(EmotionalState::None), 1);
    assert_eq!(report.count(EmotionalState::Hate), 1);
}

#[test]
fn test_evaluate_lines_skips_comments_and_blanks() {
    let input = Cursor::new("# header\n\n   \n  0.2  \n# trailing\n");
    let report = evaluate_lines(&Love::default(), input, false).unwrap();

    assert_eq!(report.evaluations.len(), 1);
    assert_eq!(report.evaluations[0].state, EmotionalState::Like);
    assert!(report.rejections.is_empty());
}

#[test]
fn test_evaluate_lines_rejects_invalid_utf8_line() {
    let input = Cursor::new(b"0.5\n\xff\xfe\n0.9\n".to_vec());
    let report = evaluate_lines(&Love::default(), input, false).unwrap();

    assert_eq!(report.evaluations.len(), 2);
    assert_eq!(report.evaluations[0].state, EmotionalState::Like);
    assert_eq!(report.evaluations[1].state, EmotionalState::Love);
    assert_eq!(report.rejections.len(), 1);
    assert_eq!(report.rejections[0].input, "\u{FFFD}\u{FFFD}");
    assert!(report.rejections[0].reason.contains("UTF-8"));
}

#[test]
fn test_batch_file_with_invalid_utf8_keeps_going() {
    let temp = create_temp_dir();
    let path = temp.path().join("mixed.txt");
    std::fs::write(&path, b"0.5\n\xff\xfe\n0.9\n").unwrap();

    let output = cmd_batch(&Love::default(), Some(&path), true, false).unwrap();
    let report: EvaluationReport = serde_json::from_str(&output).unwrap();
    assert_eq!(report.evaluations.len(), 2);
    assert_eq!(report.rejections.len(), 1);
}

#[test]
fn test_evaluate_lines_handles_crlf_and_missing_final_newline() {
    let input = Cursor::new("-0.7\r\n0.3");
    let report = evaluate_lines(&Love::default(), input, false).unwrap();

    let states: Vec<_> = report.evaluations.iter().map(|e| e.state).collect();
    assert_eq!(states, vec![EmotionalState::Hate, EmotionalState::Like]);
    assert!(report.rejections.is_empty());
}

// =============================================================================
// BANDS COMMAND TESTS
// =============================================================================

#[test]
fn test_bands_text_default() {
    let output = cmd_bands(&Thresholds::default(), false).unwrap();
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "HATE     (-inf, -0.6)");
    assert_eq!(lines[1], "DISLIKE  [-0.6, -0.1)");
    assert_eq!(lines[2], "NONE     [-0.1, 0.1]");
    assert_eq!(lines[3], "LIKE     (0.1, 0.6]");
    assert_eq!(lines[4], "LOVE     (0.6, +inf)");
}

#[test]
fn test_bands_json() {
    let output = cmd_bands(&Thresholds::new(0.2, 0.5).unwrap(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let bands = value.as_array().unwrap();
    assert_eq!(bands.len(), 5);
    assert_eq!(bands[0]["state"], "HATE");
    assert!(bands[0]["lower"].is_null());
    assert_eq!(bands[2]["upper"]["inclusive"], true);
    assert_eq!(bands[4]["state"], "LOVE");
    assert!(bands[4]["upper"].is_null());
}
