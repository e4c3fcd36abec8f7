//! File discovery, generation, and staleness checks on a real directory.

mod common;

use std::fs;
use std::path::PathBuf;

use browsercase::config::{GeneratorConfig, CONFIG_FILE_NAME};
use browsercase::pipeline::{
    check_generated, discover_model_files, fingerprint, generate_all, generate_file,
    write_generated, FileStatus,
};
use browsercase::CodegenError;
use tempfile::tempdir;

use common::{copy_fixture, read_fixture, BROWSERS_FIXTURE, JOURNEYS_FIXTURE};

#[test]
fn discovery_skips_config_and_foreign_files() {
    let dir = tempdir().unwrap();
    copy_fixture(JOURNEYS_FIXTURE, dir.path());
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/alpha.json"), r#"{"title": "Alpha"}"#).unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "namespace: Acme\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a model").unwrap();

    let files = discover_model_files(dir.path(), &GeneratorConfig::default()).unwrap();
    let names: Vec<PathBuf> = files
        .iter()
        .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![PathBuf::from("journeys.yaml"), PathBuf::from("nested/alpha.json")]
    );
}

#[test]
fn discovery_skips_the_browser_listing() {
    let dir = tempdir().unwrap();
    copy_fixture(JOURNEYS_FIXTURE, dir.path());
    let listing = copy_fixture(BROWSERS_FIXTURE, dir.path());

    let all = discover_model_files(dir.path(), &GeneratorConfig::default()).unwrap();
    assert_eq!(all.len(), 2);

    let config = GeneratorConfig {
        supported_browsers: Some(listing),
        ..GeneratorConfig::default()
    };
    let models = discover_model_files(dir.path(), &config).unwrap();
    assert_eq!(models, vec![dir.path().join("journeys.yaml")]);
}

#[test]
fn generated_file_sits_next_to_the_model() {
    let dir = tempdir().unwrap();
    let source = copy_fixture(JOURNEYS_FIXTURE, dir.path());

    let generated = generate_file(&source, dir.path(), &GeneratorConfig::default()).unwrap();

    assert_eq!(generated.output, dir.path().join("journeys.feature.cs"));
    assert_eq!(generated.class_name, "JourneyPlannerFeature");
    assert_eq!(generated.test_cases, 7);
    assert_eq!(generated.fingerprint, fingerprint(read_fixture(JOURNEYS_FIXTURE).as_bytes()));
    assert!(generated
        .contents
        .contains(&format!("Fingerprint: {}", generated.fingerprint)));
    assert!(generated.contents.contains("namespace Generated.Features"));
}

#[test]
fn check_reports_missing_fresh_and_stale_outputs() {
    let dir = tempdir().unwrap();
    copy_fixture(JOURNEYS_FIXTURE, dir.path());
    let config = GeneratorConfig::default();

    let files = generate_all(dir.path(), &config).unwrap();
    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(check_generated(file).unwrap(), FileStatus::Missing);

    write_generated(file).unwrap();
    assert_eq!(check_generated(file).unwrap(), FileStatus::UpToDate);

    fs::write(&file.output, "// edited by hand\n").unwrap();
    assert_eq!(
        check_generated(file).unwrap(),
        FileStatus::Stale {
            existing: "// edited by hand\n".to_string()
        }
    );
}

#[test]
fn output_dir_mirrors_the_model_tree() {
    let dir = tempdir().unwrap();
    let models = dir.path().join("models");
    fs::create_dir_all(models.join("rail")).unwrap();
    copy_fixture(JOURNEYS_FIXTURE, &models.join("rail"));

    let config = GeneratorConfig {
        output_dir: Some(dir.path().join("generated")),
        namespace: "Acme.Specs".into(),
        ..GeneratorConfig::default()
    };
    let files = generate_all(&models, &config).unwrap();
    for file in &files {
        write_generated(file).unwrap();
    }

    let written = dir.path().join("generated/rail/journeys.feature.cs");
    let contents = fs::read_to_string(written).unwrap();
    assert!(contents.contains("namespace Acme.Specs"));
}

#[test]
fn model_changes_change_the_output() {
    let dir = tempdir().unwrap();
    let source = copy_fixture(JOURNEYS_FIXTURE, dir.path());
    let config = GeneratorConfig::default();

    let before = generate_file(&source, dir.path(), &config).unwrap();
    write_generated(&before).unwrap();

    let edited = read_fixture(JOURNEYS_FIXTURE).replace("browser:firefox", "browser:safari");
    fs::write(&source, edited).unwrap();
    let after = generate_file(&source, dir.path(), &config).unwrap();

    assert_ne!(before.fingerprint, after.fingerprint);
    assert!(matches!(check_generated(&after).unwrap(), FileStatus::Stale { .. }));
}

#[test]
fn invalid_models_surface_typed_errors() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("broken.yaml");
    fs::write(&source, "title: [unclosed").unwrap();

    let err = generate_file(&source, dir.path(), &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, CodegenError::ModelDecode { .. }));

    fs::write(&source, "title: '  '\n").unwrap();
    let err = generate_file(&source, dir.path(), &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, CodegenError::InvalidModel { .. }));
}

#[test]
fn non_utf8_models_are_decode_errors() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("latin1.yaml");
    fs::write(&source, b"title: Caf\xe9\n").unwrap();

    let err = generate_file(&source, dir.path(), &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, CodegenError::ModelDecode { .. }));
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn config_is_discovered_from_the_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "namespace: Acme.Specs\noutput_dir: out\nsupported_browsers: browsers.json\n",
    )
    .unwrap();

    let config = GeneratorConfig::discover(dir.path()).unwrap();
    assert_eq!(config.namespace, "Acme.Specs");
    assert_eq!(config.output_dir, Some(dir.path().join("out")));
    assert_eq!(config.supported_browsers, Some(dir.path().join("browsers.json")));

    let empty = tempdir().unwrap();
    assert_eq!(
        GeneratorConfig::discover(empty.path()).unwrap(),
        GeneratorConfig::default()
    );
}

#[test]
fn malformed_config_is_a_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "namespace: [1, 2\n").unwrap();
    let err = GeneratorConfig::load(&path).unwrap_err();
    assert!(matches!(err, CodegenError::ConfigDecode { .. }));
}
