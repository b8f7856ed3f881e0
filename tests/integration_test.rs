// file: tests/integration_test.rs
// version: 2.0.0
// guid: f41c7e29-b053-4d8a-96f2-0e8b5a13c7d4

//! Integration tests for the logger registry

use logger_registry::{
    transport::{DailyOptions, FileOptions},
    Level, LoggerOptions, LoggerRegistry, RegistryConfig, Result, TransportDescriptor,
    TransportKind, TransportSettings,
};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

fn registry_in(temp_dir: &TempDir) -> LoggerRegistry {
    LoggerRegistry::new(RegistryConfig::with_base_log_dir(temp_dir.path()))
}

#[test]
fn test_missing_transports_fall_back_to_console() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger = registry.create(LoggerOptions::named("plain"))?;
    assert_eq!(logger.transports().len(), 1);
    assert_eq!(logger.transports()[0].kind(), TransportKind::Console);

    let mut empty = LoggerOptions::named("empty");
    empty.transports = Some(Vec::new());
    let logger = registry.create(empty)?;
    assert_eq!(logger.transports().len(), 1);
    assert_eq!(logger.transports()[0].kind(), TransportKind::Console);

    Ok(())
}

#[test]
fn test_same_name_returns_identical_instance() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let first = registry.create(LoggerOptions::named("n"))?;
    let second = registry.create(
        LoggerOptions::named("n")
            .with_level(Level::Trace)
            .with_transport(TransportDescriptor::file("ignored")),
    )?;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.transports()[0].kind(), TransportKind::Console);
    assert!(!temp_dir.path().join("ignored.log").exists());

    Ok(())
}

#[test]
fn test_unnamed_calls_return_distinct_instances() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let first = registry.create(LoggerOptions::new())?;
    let second = registry.create(LoggerOptions::new())?;

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(registry.is_empty());

    Ok(())
}

#[test]
fn test_file_transport_defaults() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger = registry.create(
        LoggerOptions::named("x").with_transport(TransportDescriptor::file("info")),
    )?;

    match logger.transports()[0].settings() {
        TransportSettings::File(settings) => {
            assert!(settings.colorize);
            assert!(settings.filename.ends_with("info.log"));
        }
        other => panic!("expected file transport, got {:?}", other),
    }
    assert!(temp_dir.path().join("info.log").exists());

    Ok(())
}

#[test]
fn test_file_transport_filename_override() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);
    let custom = temp_dir.path().join("custom").join("audit.txt");

    let logger = registry.create(LoggerOptions::new().with_transport(TransportDescriptor::File(
        FileOptions {
            name: Some("info".to_string()),
            filename: Some(custom.clone()),
            ..FileOptions::default()
        },
    )))?;

    match logger.transports()[0].settings() {
        TransportSettings::File(settings) => assert_eq!(settings.filename, custom),
        other => panic!("expected file transport, got {:?}", other),
    }
    assert!(custom.exists());

    Ok(())
}

#[test]
fn test_unknown_transport_falls_back_to_console() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger = registry
        .create(LoggerOptions::named("x").with_transport(TransportDescriptor::unknown("bogus")))?;

    assert_eq!(logger.transports().len(), 1);
    assert_eq!(logger.transports()[0].kind(), TransportKind::Console);

    Ok(())
}

#[test]
fn test_daily_transport_default_date_pattern() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger =
        registry.create(LoggerOptions::new().with_transport(TransportDescriptor::daily("rotate")))?;

    match logger.transports()[0].settings() {
        TransportSettings::Daily(settings) => {
            assert_eq!(settings.date_pattern, ".yyyy-MM-dd.log");
            assert!(settings.filename.ends_with("rotate"));
        }
        other => panic!("expected daily transport, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_daily_transport_writes_dated_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger = registry.create(LoggerOptions::new().with_transport(TransportDescriptor::Daily(
        DailyOptions {
            name: Some("rotate".to_string()),
            max_files: Some(3),
            ..DailyOptions::default()
        },
    )))?;
    logger.warn("rotation check");

    let written: Vec<String> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("rotate."));
    assert!(written[0].ends_with(".log"));

    let content = std::fs::read_to_string(temp_dir.path().join(&written[0]))?;
    assert!(content.contains("rotation check"));

    Ok(())
}

#[test]
fn test_transport_thresholds_filter_by_rank() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger = registry.create(
        LoggerOptions::named("levels")
            .with_level(Level::Verbose)
            .with_transport(TransportDescriptor::file("everything"))
            .with_transport(TransportDescriptor::File(FileOptions {
                name: Some("problems".to_string()),
                level: Some(Level::Warn),
                colorize: Some(false),
                ..FileOptions::default()
            })),
    )?;

    logger.trace("too quiet");
    logger.prompt("asking the operator");
    logger.help("see the manual");
    logger.error("disk full");

    let everything = std::fs::read_to_string(temp_dir.path().join("everything.log"))?;
    assert!(!everything.contains("too quiet"));
    assert!(everything.contains("asking the operator"));
    assert!(everything.contains("see the manual"));
    assert!(everything.contains("disk full"));

    let problems = std::fs::read_to_string(temp_dir.path().join("problems.log"))?;
    assert!(!problems.contains("asking the operator"));
    assert!(!problems.contains("see the manual"));
    assert!(problems.contains("disk full"));
    assert!(problems.contains("label=\"error\""));

    Ok(())
}

#[test]
fn test_json_file_transport_carries_meta() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let logger = registry.create(
        LoggerOptions::named("json")
            .with_meta("service", "billing")
            .with_transport(TransportDescriptor::File(FileOptions {
                name: Some("structured".to_string()),
                json: Some(true),
                colorize: Some(false),
                ..FileOptions::default()
            })),
    )?;
    logger.data("row exported");

    let content = std::fs::read_to_string(temp_dir.path().join("structured.log"))?;
    let line = content.lines().next().expect("one json line");
    let record: serde_json::Value = serde_json::from_str(line)?;

    assert_eq!(record["fields"]["message"], "row exported");
    assert_eq!(record["fields"]["label"], "data");
    assert_eq!(record["fields"]["severity"], 6);
    assert_eq!(record["fields"]["logger"], "json");
    assert!(record["fields"]["meta"].as_str().unwrap().contains("billing"));

    Ok(())
}

#[test]
fn test_concurrent_first_create_builds_one_instance() {
    let temp_dir = TempDir::new().unwrap();
    let registry = Arc::new(registry_in(&temp_dir));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .create(LoggerOptions::named("shared"))
                    .expect("logger builds")
            })
        })
        .collect();

    let loggers: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .collect();

    assert!(loggers.iter().all(|logger| Arc::ptr_eq(logger, &loggers[0])));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_options_from_json_config() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry_in(&temp_dir);

    let options: LoggerOptions = serde_json::from_str(
        r#"{
            "name": "app",
            "transports": [
                {"type": "file", "name": "info", "level": "info"},
                {"type": "bogus"},
                {"type": "console", "prettyPrint": false}
            ]
        }"#,
    )?;

    let logger = registry.create(options)?;
    let kinds: Vec<TransportKind> = logger.transports().iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![TransportKind::File, TransportKind::Console]);

    Ok(())
}
