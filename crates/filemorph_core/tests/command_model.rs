use filemorph_core::{Command, CommandValidationError};
use std::path::PathBuf;

#[test]
fn every_operation_has_a_stable_name() {
    let cases = [
        (
            Command::Reverse {
                input: PathBuf::from("a"),
                output: PathBuf::from("b"),
            },
            "reverse",
        ),
        (
            Command::Copy {
                input: PathBuf::from("a"),
                output: PathBuf::from("b"),
            },
            "copy",
        ),
        (
            Command::DuplicateContents {
                path: PathBuf::from("a"),
                count: 2,
            },
            "duplicate-contents",
        ),
        (
            Command::ReplaceString {
                path: PathBuf::from("a"),
                needle: "x".to_string(),
                replacement: "y".to_string(),
            },
            "replace-string",
        ),
    ];
    for (command, expected) in cases {
        assert_eq!(command.name(), expected);
    }
}

#[test]
fn empty_output_path_is_rejected() {
    let command = Command::Copy {
        input: PathBuf::from("in.txt"),
        output: PathBuf::new(),
    };
    assert_eq!(
        command.validate().unwrap_err(),
        CommandValidationError::EmptyPath { role: "output" }
    );
}

#[test]
fn empty_target_path_is_rejected_for_in_place_operations() {
    let duplicate = Command::DuplicateContents {
        path: PathBuf::new(),
        count: 1,
    };
    let replace = Command::ReplaceString {
        path: PathBuf::new(),
        needle: "x".to_string(),
        replacement: "y".to_string(),
    };

    for command in [duplicate, replace] {
        assert_eq!(
            command.validate().unwrap_err(),
            CommandValidationError::EmptyPath { role: "target" }
        );
    }
}

#[test]
fn validation_errors_render_human_readable_messages() {
    assert_eq!(
        CommandValidationError::EmptyNeedle.to_string(),
        "search string cannot be empty"
    );
    assert!(CommandValidationError::EmptyPath { role: "input" }
        .to_string()
        .contains("input"));
}

#[test]
fn empty_replacement_is_allowed() {
    let command = Command::ReplaceString {
        path: PathBuf::from("data.txt"),
        needle: "strip".to_string(),
        replacement: String::new(),
    };
    command.validate().expect("empty replacement should validate");
}
