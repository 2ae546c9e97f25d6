use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn gap_create(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gap-create").unwrap();
    cmd.env("GAP_CREATE_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn read_without_bom(path: &Path) -> String {
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(BOM), "{} has no BOM", path.display());
    String::from_utf8(bytes[BOM.len()..].to_vec()).unwrap()
}

#[test]
fn test_missing_class_prints_help_and_writes_nothing() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("--cls"));

    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_default_creates_header_and_source() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File has been created"))
        .stdout(predicate::str::contains("GapFoo.h"))
        .stdout(predicate::str::contains("GapFoo.cpp"));

    assert!(out.path().join("GapFoo.h").is_file());
    assert!(out.path().join("GapFoo.cpp").is_file());
    assert!(!out.path().join("GapFoo.ui").exists());
}

#[test]
fn test_all_with_constructor_and_destructor() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo", "--all", "--dc", "--dest"])
        .assert()
        .success();

    let header = read_without_bom(&out.path().join("GapFoo.h"));
    let declarations: Vec<&str> = header
        .lines()
        .map(str::trim)
        .filter(|l| l.ends_with(");"))
        .collect();
    assert_eq!(declarations, vec!["Foo();", "~Foo();"]);
    assert!(header.contains("#include \"ui_GapFoo.h\""));

    let source = read_without_bom(&out.path().join("GapFoo.cpp"));
    assert!(source.contains("Foo::Foo()\n{\n}\n\nFoo::~Foo()\n{\n}\n"));
    assert_eq!(source.matches("{\n}").count(), 2);

    let ui_bytes = std::fs::read(out.path().join("GapFoo.ui")).unwrap();
    assert!(!ui_bytes.starts_with(BOM));
    let ui = String::from_utf8(ui_bytes).unwrap();
    assert!(ui.contains("<class>FooUI</class>"));
    assert!(ui.contains("name=\"FooUI\""));
}

#[test]
fn test_author_banner_comes_from_config() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("author_info.json"),
        r#"{"owner":"tom","co_owner":"jerry"}"#,
    )
    .unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo"])
        .assert()
        .success();

    let header = read_without_bom(&out.path().join("GapFoo.h"));
    assert!(header.starts_with("// Owner: tom\n// Co-Owner: jerry\n"));
}

#[test]
fn test_malformed_author_config_fails() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(home.path().join("author_info.json"), "not json").unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author_info.json"));

    assert!(!out.path().join("GapFoo.h").exists());
}

#[test]
fn test_output_dir_is_created() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let target = out.path().join("src").join("dialogs");

    gap_create(home.path())
        .arg("--cls")
        .arg("Foo")
        .arg("--ui")
        .arg("--h")
        .arg("false")
        .arg("--cpp")
        .arg("false")
        .arg("-o")
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("GapFoo.ui").is_file());
    assert!(!target.join("GapFoo.h").exists());
}

#[test]
fn test_empty_namespace_has_no_wrapper() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo", "--ns", "", "--mc"])
        .assert()
        .success();

    let header = read_without_bom(&out.path().join("GapFoo.h"));
    assert!(!header.contains("namespace"));
    assert!(header.contains("    Foo(Foo&& other);"));
}

#[test]
fn test_relative_output_dir_reports_full_path() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let output = gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo", "-o", "rel/dir"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let paths: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("File has been created: "))
        .collect();
    assert_eq!(paths.len(), 2);
    for path in paths {
        assert!(Path::new(path).is_absolute(), "not a full path: {path}");
    }
    assert!(out.path().join("rel/dir/GapFoo.h").is_file());
    assert!(out.path().join("rel/dir/GapFoo.cpp").is_file());
}

#[test]
fn test_author_config_with_wrong_shape_uses_defaults() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(home.path().join("author_info.json"), r#"{"owner":5}"#).unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo"])
        .assert()
        .success();

    let header = read_without_bom(&out.path().join("GapFoo.h"));
    assert!(header.starts_with("// Owner: \n// Co-Owner: \n"));
}

#[test]
fn test_default_files_keep_blank_blocks() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    gap_create(home.path())
        .current_dir(out.path())
        .args(["--cls", "Foo"])
        .assert()
        .success();

    let header = read_without_bom(&out.path().join("GapFoo.h"));
    assert_eq!(
        header,
        "// Owner: \n// Co-Owner: \n\n#pragma once\n\n\n\nnamespace gap\n{\n    class Foo\n    {\n    public:\n    };\n}\n"
    );

    let source = read_without_bom(&out.path().join("GapFoo.cpp"));
    assert_eq!(
        source,
        "// Owner: \n// Co-Owner: \n\n#include \"GapFoo.h\"\n#include \"EnableCompileWarning_The_LAST_IncludeInCpp.h\"\n\nusing namespace gcmp;\nusing namespace gap;\n\n\n"
    );
}
