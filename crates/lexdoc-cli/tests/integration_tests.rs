//! Integration tests for CLI commands that run without a backend

use lexdoc_cli::cli::{CheckArgs, FieldsArgs, GenerateArgs, TypeArg};
use lexdoc_cli::commands::{execute_check, execute_fields, execute_generate};
use lexdoc_cli::config::{OutputFormat, Profile};
use lexdoc_cli::{CliError, Config, Formatter};
use std::fs;

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Table, false)
}

fn generate_args(document_type: TypeArg, output: &str) -> GenerateArgs {
    GenerateArgs {
        document_type,
        set: Vec::new(),
        values: None,
        sample: None,
        output: Some(output.to_string()),
        remote: false,
        allow_missing: false,
    }
}

#[tokio::test]
async fn test_generate_rental_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("lease.txt");

    let mut args = generate_args(TypeArg::Rental, output.to_str().unwrap());
    args.set = [
        "landlordName=Alice",
        "tenantName=Bob",
        "propertyAddress=42 Oak Street",
        "monthlyRent=2000",
        "leaseStartDate=2024-01-01",
        "leaseDuration=12 months",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    execute_generate(args, &Config::default(), &formatter())
        .await
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("Alice"));
    assert!(text.contains("$2000"));
    assert!(text.contains("December 31, 2024"));
}

#[tokio::test]
async fn test_generate_accepts_canonical_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("lease.txt");

    let mut args = generate_args(TypeArg::Rental, output.to_str().unwrap());
    args.set = [
        "party1Name=Alice",
        "party2Name=Bob",
        "propertyAddress=42 Oak Street",
        "amount=2000",
        "date=2024-01-01",
        "duration=12 months",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    execute_generate(args, &Config::default(), &formatter())
        .await
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(!text.contains("[LANDLORD NAME]"));
    assert!(text.contains("Bob"));
    assert!(text.contains("December 31, 2024"));
}

#[tokio::test]
async fn test_generate_requires_fields_unless_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nda.txt");

    let args = generate_args(TypeArg::Nda, output.to_str().unwrap());
    let result = execute_generate(args, &Config::default(), &formatter()).await;
    assert!(matches!(result, Err(CliError::Generator(_))));
    assert!(!output.exists());

    let mut args = generate_args(TypeArg::Nda, output.to_str().unwrap());
    args.allow_missing = true;
    execute_generate(args, &Config::default(), &formatter())
        .await
        .unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("[EFFECTIVE DATE]"));
}

#[tokio::test]
async fn test_generate_from_values_file_and_sample() {
    let dir = tempfile::tempdir().unwrap();
    let sample = dir.path().join("sample.txt");
    fs::write(
        &sample,
        "this lease agreement is made on 01/01/2024 between John Smith and Jane Doe \
         for the premises at 42 Oak Street, rent is $1,800 per month.",
    )
    .unwrap();
    let values = dir.path().join("values.json");
    fs::write(&values, r#"{"party2Name": "Mary Major"}"#).unwrap();
    let output = dir.path().join("lease.txt");

    let mut args = generate_args(TypeArg::Rental, output.to_str().unwrap());
    args.sample = Some(sample.to_str().unwrap().to_string());
    args.values = Some(values.to_str().unwrap().to_string());

    execute_generate(args, &Config::default(), &formatter())
        .await
        .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    // Prefilled from the sample, then overridden by the values file
    assert!(text.contains("John Smith"));
    assert!(text.contains("Mary Major"));
    assert!(!text.contains("Jane Doe"));
}

#[test]
fn test_fields_and_check_accept_samples() {
    let dir = tempfile::tempdir().unwrap();
    let sample = dir.path().join("sample.txt");
    fs::write(&sample, "whereas the parties agree to the terms").unwrap();

    execute_fields(
        FieldsArgs {
            document_type: TypeArg::Service,
            sample: Some(sample.to_str().unwrap().to_string()),
        },
        &formatter(),
    )
    .unwrap();
    execute_check(
        CheckArgs {
            document_type: TypeArg::Service,
            sample: sample.to_str().unwrap().to_string(),
        },
        &formatter(),
    )
    .unwrap();
}

#[test]
fn test_fields_rejects_implausible_sample() {
    let dir = tempfile::tempdir().unwrap();
    let sample = dir.path().join("groceries.txt");
    fs::write(&sample, "eggs, milk, bread").unwrap();

    let result = execute_fields(
        FieldsArgs {
            document_type: TypeArg::Rental,
            sample: Some(sample.to_str().unwrap().to_string()),
        },
        &formatter(),
    );
    assert!(matches!(result, Err(CliError::Generator(_))));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.set_profile(
        "staging".to_string(),
        Profile::new("https://staging.example.com", "local"),
    );
    config.switch_profile("staging".to_string()).unwrap();
    config.settings.format = OutputFormat::Json;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Config::load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::default());
}
