//! Library integration tests.

use mobile_doctor::requirements::{
    CommandRequirements, Requirement, RequirementList, RequirementProcessor,
};
use mobile_doctor::ui::{DoctorTheme, ExecutionMode, HeadlessReporter};
use mobile_doctor::DoctorError;

#[test]
fn error_types_are_public() {
    let err = DoctorError::ConfigValidationError {
        message: "bad timeout".into(),
    };
    assert!(err.to_string().contains("bad timeout"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> mobile_doctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use mobile_doctor::cli::{Cli, Commands};

    let cli = Cli::parse_from(["mobile-doctor", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

fn sample() -> CommandRequirements {
    CommandRequirements::new()
        .with(
            "android",
            RequirementList::new(vec![
                Requirement::new("adb", || async { Ok(Some("1.0.41".to_string())) }),
                Requirement::new("Java", || async { Err("java not found".to_string()) })
                    .with_supplemental_message("Install a JDK."),
            ]),
        )
        .with(
            "ios",
            RequirementList::with_enabled(
                vec![Requirement::new("Xcode", || async { Ok(None) })],
                false,
            ),
        )
}

#[tokio::test]
async fn processor_runs_only_enabled_groups() {
    let result = RequirementProcessor::execute(sample(), ExecutionMode::Silent)
        .await
        .unwrap();
    assert!(!result.has_met_all_requirements);
    assert_eq!(result.tests.len(), 2);
    assert!(result.tests.iter().all(|t| t.title != "Xcode"));

    let java = result.tests.iter().find(|t| t.title == "Java").unwrap();
    assert_eq!(java.message, "java not found Install a JDK.");
}

#[tokio::test]
async fn headless_report_lists_failures() {
    let mut reporter = HeadlessReporter::new(Vec::new(), DoctorTheme::plain());
    let result = RequirementProcessor::execute_with_reporter(sample(), &mut reporter)
        .await
        .unwrap();
    assert_eq!(result.passed_count(), 1);

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("Checked 2 requirements in "));
    assert!(first.ends_with(": 1 of 2 passed"));
    assert!(out.contains("✗ Java"));
    assert!(out.contains("      java not found Install a JDK."));
    assert!(out.contains("✓ adb"));
}
