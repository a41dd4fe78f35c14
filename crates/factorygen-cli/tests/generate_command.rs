use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn temp_project() -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("factorygen_cli_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(dir.join("app")).expect("create project tree");

    fs::write(
        dir.join("app/user.toml"),
        r#"
        [model]
        name = "app::models::User"
        table = "users"
        "#,
    )
    .expect("write user definition");
    fs::write(
        dir.join("app/post.toml"),
        r#"
        [model]
        name = "app::models::Post"
        table = "posts"
        "#,
    )
    .expect("write post definition");

    fs::write(
        dir.join("schema.json"),
        r#"{
            "schema_version": "0.1",
            "databases": [
                {
                    "name": "app",
                    "default": true,
                    "tables": [
                        {
                            "name": "users",
                            "columns": [
                                { "name": "id", "storage_type": "bigint" },
                                { "name": "name", "storage_type": "string" },
                                { "name": "email", "storage_type": "string" },
                                { "name": "created_at", "storage_type": "datetime" },
                                { "name": "updated_at", "storage_type": "datetime" }
                            ]
                        },
                        {
                            "name": "posts",
                            "columns": [
                                { "name": "id", "storage_type": "bigint" },
                                { "name": "title", "storage_type": "string" },
                                { "name": "created_at", "storage_type": "datetime" },
                                { "name": "updated_at", "storage_type": "datetime" }
                            ]
                        }
                    ]
                }
            ]
        }"#,
    )
    .expect("write schema snapshot");

    dir
}

fn run_generate(project: &Path, extra_args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_factorygen"))
        .arg("generate")
        .arg("--project-root")
        .arg(project)
        .args(extra_args)
        .output()
        .expect("run factorygen")
}

fn factories_path(project: &Path) -> PathBuf {
    project.join("database/factories/model_factories.rs")
}

fn count_defines(document: &str, name: &str) -> usize {
    document
        .matches(&format!("factory.define(\"{name}\""))
        .count()
}

#[test]
fn generates_factories_for_scanned_models() {
    let project = temp_project();

    let output = run_generate(&project, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Model factories were written to"));

    let document = fs::read_to_string(factories_path(&project)).expect("read factories");
    assert_eq!(count_defines(&document, "app::models::User"), 1);
    assert_eq!(count_defines(&document, "app::models::Post"), 1);
    assert!(document.contains("f.set(\"email\", SafeEmail().fake::<String>());"));
    assert!(!document.contains("\"created_at\""));

    let _ = fs::remove_dir_all(&project);
}

#[test]
fn rerunning_does_not_duplicate_factories() {
    let project = temp_project();

    assert!(run_generate(&project, &[]).status.success());
    let first = fs::read_to_string(factories_path(&project)).expect("read factories");

    assert!(run_generate(&project, &[]).status.success());
    let second = fs::read_to_string(factories_path(&project)).expect("read factories");

    assert_eq!(first, second);
    let _ = fs::remove_dir_all(&project);
}

#[test]
fn reset_replaces_the_document() {
    let project = temp_project();

    assert!(run_generate(&project, &[]).status.success());
    assert!(
        run_generate(&project, &["--reset", "app::models::User"])
            .status
            .success()
    );

    let document = fs::read_to_string(factories_path(&project)).expect("read factories");
    assert!(document.starts_with("//! Model factories."));
    assert_eq!(count_defines(&document, "app::models::User"), 1);
    assert_eq!(count_defines(&document, "app::models::Post"), 0);

    let _ = fs::remove_dir_all(&project);
}

#[test]
fn ignore_option_suppresses_models() {
    let project = temp_project();

    let output = run_generate(&project, &["--ignore", "app::models::Post"]);
    assert!(output.status.success());

    let document = fs::read_to_string(factories_path(&project)).expect("read factories");
    assert_eq!(count_defines(&document, "app::models::User"), 1);
    assert_eq!(count_defines(&document, "app::models::Post"), 0);

    let _ = fs::remove_dir_all(&project);
}

#[test]
fn missing_snapshot_is_a_top_level_error() {
    let project = temp_project();
    fs::remove_file(project.join("schema.json")).expect("remove snapshot");

    let output = run_generate(&project, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    let _ = fs::remove_dir_all(&project);
}
