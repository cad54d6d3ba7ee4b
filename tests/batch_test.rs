//! Batch processing tests: isolation between files and reporting.

mod common;

use std::path::PathBuf;

use common::*;
use orange_poster::error::ProcessError;
use orange_poster::models::PosterSettings;
use orange_poster::services::BatchProcessor;
use pretty_assertions::assert_eq;
use tritone::Palette;

#[test]
fn test_failed_file_does_not_stop_the_batch() {
    let ws = Workspace::new();
    let inputs = vec![
        ws.gray_png("first.png", 12, 6, 20),
        ws.corrupt_png("second.png"),
        ws.gray_png("third.png", 12, 6, 230),
    ];
    let out_dir = ws.output_dir();

    let report = BatchProcessor::new(PosterSettings::default())
        .run(&inputs, &out_dir)
        .unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 1);
    assert!(!report.is_success());

    let (failed_input, error) = report.failed().next().unwrap();
    assert_eq!(failed_input, inputs[1].as_path());
    assert!(matches!(error, ProcessError::Load { .. }));

    assert_solid(&read_poster(&out_dir.join("first_orange.png")), Palette::BLACK);
    assert!(!out_dir.join("second_orange.png").exists());
    assert_solid(&read_poster(&out_dir.join("third_orange.png")), Palette::ORANGE);
}

#[test]
fn test_missing_file_is_reported_per_file() {
    let ws = Workspace::new();
    let inputs = vec![
        ws.input("does_not_exist.jpg"),
        ws.gray_png("present.png", 5, 5, 128),
    ];

    let report = BatchProcessor::new(PosterSettings::default())
        .run(&inputs, &ws.output_dir())
        .unwrap();

    assert!(!report.outcomes[0].is_success());
    assert!(report.outcomes[1].is_success());
    assert!(is_file(&ws.output_dir().join("present_orange.png")));
}

#[test]
fn test_outcomes_follow_input_order() {
    let ws = Workspace::new();
    let inputs = vec![
        ws.gray_png("c.png", 4, 4, 0),
        ws.gray_png("a.png", 4, 4, 0),
        ws.gray_png("b.png", 4, 4, 0),
    ];

    let report = BatchProcessor::new(PosterSettings::default())
        .run(&inputs, &ws.output_dir())
        .unwrap();

    let order: Vec<PathBuf> = report.outcomes.iter().map(|o| o.input.clone()).collect();
    assert_eq!(order, inputs);
}

#[test]
fn test_duplicate_inputs_are_processed_once() {
    let ws = Workspace::new();
    let photo = ws.gray_png("photo.png", 8, 8, 100);
    let inputs = vec![photo.clone(), photo.clone(), photo];

    let report = BatchProcessor::new(PosterSettings::default())
        .run(&inputs, &ws.output_dir())
        .unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert!(report.is_success());
}

#[test]
fn test_empty_selection_is_rejected() {
    let ws = Workspace::new();

    let result = BatchProcessor::new(PosterSettings::default()).run(&[], &ws.output_dir());

    assert!(matches!(result, Err(ProcessError::NoInputs)));
    assert!(!ws.output_dir().exists());
}

#[test]
fn test_same_stem_in_different_dirs_overwrites() {
    let ws = Workspace::new();
    std::fs::create_dir(ws.input("dark")).unwrap();
    std::fs::create_dir(ws.input("light")).unwrap();
    let inputs = vec![
        ws.gray_png("dark/pic.png", 6, 6, 0),
        ws.gray_png("light/pic.png", 6, 6, 255),
    ];

    let report = BatchProcessor::new(PosterSettings::default())
        .run(&inputs, &ws.output_dir())
        .unwrap();

    assert_eq!(report.success_count(), 2);
    // Later input wins
    assert_solid(
        &read_poster(&ws.output_dir().join("pic_orange.png")),
        Palette::ORANGE,
    );
}
