//! Integration tests for the habitdoc CLI
//!
//! Each test drives the real commands through `run_from` against a report
//! and output directory inside a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use habitdoc_core::citations::BIBLIOGRAPHY_HEADING;
use habitdoc_ooxml::Document;
use tempfile::TempDir;

/// Write a settings file pointing every output into `dir`
fn write_settings(dir: &Path) -> PathBuf {
    let config = dir.join("habitdoc.toml");
    fs::write(
        &config,
        format!(
            "[document]\npath = '{}'\n\n[diagrams]\noutput_dir = '{}'\nscale = 0.5\n",
            dir.join("report.docx").display(),
            dir.join("figures").display(),
        ),
    )
    .unwrap();
    config
}

fn habitdoc(config: &Path, args: &[&str]) -> anyhow::Result<()> {
    let config = config.to_string_lossy().into_owned();
    let mut argv = vec!["habitdoc", "--config", config.as_str()];
    argv.extend_from_slice(args);
    habitdoc_cli::run_from(argv)
}

fn paragraph_texts(path: &Path) -> Vec<String> {
    Document::open(path)
        .unwrap()
        .paragraphs()
        .map(|p| p.text().to_string())
        .collect()
}

#[test]
fn test_generate_expand_cite_workflow() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());
    let report = dir.path().join("report.docx");

    habitdoc(&config, &["generate"]).unwrap();
    assert!(report.exists());
    let generated = paragraph_texts(&report).len();

    habitdoc(&config, &["expand", "requirements"]).unwrap();
    habitdoc(&config, &["expand", "code"]).unwrap();
    let expanded = paragraph_texts(&report);
    assert!(expanded.len() > generated);

    habitdoc(&config, &["cite"]).unwrap();
    let cited = paragraph_texts(&report);
    assert!(cited.iter().any(|t| t.contains(" [5]")));
    assert_eq!(
        cited
            .iter()
            .filter(|t| t.trim() == BIBLIOGRAPHY_HEADING)
            .count(),
        1
    );

    // A second run neither re-annotates nor appends another reference list
    habitdoc(&config, &["cite"]).unwrap();
    assert_eq!(paragraph_texts(&report), cited);
}

#[test]
fn test_cite_with_custom_references() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());
    let mut toml = fs::read_to_string(&config).unwrap();
    toml.push_str(
        r#"
[[citations.references]]
key = "spring_boot"
id = 1
text = "Spring Boot Reference Documentation."

[[citations.technologies]]
phrase = "Spring Boot 3.2.0"
topics = ["spring_boot"]
"#,
    );
    fs::write(&config, toml).unwrap();
    let report = dir.path().join("report.docx");

    habitdoc(&config, &["generate"]).unwrap();
    habitdoc(&config, &["expand", "code"]).unwrap();
    habitdoc(&config, &["cite"]).unwrap();

    // Only the configured rule applies; built-in patterns are not consulted
    let cited = paragraph_texts(&report);
    let marked = "Spring Boot 3.2.0 [1] з використанням";
    assert!(cited.iter().any(|t| t.contains(marked)));
    assert!(!cited.iter().any(|t| t.contains(" [5]")));
}

#[test]
fn test_document_flag_overrides_configured_path() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());
    let other = dir.path().join("other.docx");

    habitdoc(
        &config,
        &["generate", "--document", other.to_str().unwrap()],
    )
    .unwrap();

    assert!(other.exists());
    assert!(!dir.path().join("report.docx").exists());
}

#[test]
fn test_expand_without_report_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());

    let err = habitdoc(&config, &["expand", "code"]).unwrap_err();
    assert!(err.to_string().contains("Report not found"));
}

#[test]
fn test_cite_without_report_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());

    assert!(habitdoc(&config, &["cite"]).is_err());
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(habitdoc(&missing, &["generate"]).is_err());
}

#[test]
fn test_diagrams_only_selected() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());

    habitdoc(&config, &["diagrams", "--only", "usecase", "--only", "3"]).unwrap();

    let mut written: Vec<String> = fs::read_dir(dir.path().join("figures"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["2_usecase.png", "3_er_diagram.png"]);
}

#[test]
fn test_diagrams_output_flag_and_unknown_name() {
    let dir = TempDir::new().unwrap();
    let config = write_settings(dir.path());
    let out = dir.path().join("elsewhere");

    habitdoc(
        &config,
        &[
            "diagrams",
            "-o",
            out.to_str().unwrap(),
            "--only",
            "architecture",
        ],
    )
    .unwrap();
    assert!(out.join("1_architecture.png").exists());

    assert!(habitdoc(&config, &["diagrams", "--only", "flowchart"]).is_err());
}
