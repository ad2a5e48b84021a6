use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("plainsite").unwrap()
}

/// Write a small two-page site (default `home`, article `blog`) into a temp
/// directory and return it. Commands run with the temp dir as cwd so the
/// relative `content`/`site` defaults resolve inside it.
fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();

    fs::write(
        tmp.path().join("config.toml"),
        r#"
[base]
author = "Jane Doe"

[[pages]]
file = "home"
name = "home"
title = "Welcome"
nav = ["main"]

[[pages]]
file = "blog"
name = "blog"
title = "Blog"
content_type = "article"
nav = ["main", "footer"]
"#,
    )
    .unwrap();

    let home = tmp.path().join("content/home");
    fs::create_dir_all(&home).unwrap();
    fs::write(
        home.join("welcome.md"),
        "Welcome\n-----\n-----\nHello.\n-----\nThis is the **home** page.\n",
    )
    .unwrap();

    let blog = tmp.path().join("content/blog");
    fs::create_dir_all(&blog).unwrap();
    fs::write(
        blog.join("first-post.md"),
        "First Post\n-----\nauthor: Jane\n-----\nA short preview.\n-----\nThe full post.\n",
    )
    .unwrap();

    tmp
}

#[test]
fn renders_site_and_reports_success() {
    let tmp = setup_site();

    cmd()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(contains("001 home → home.html"))
        .stdout(contains("blog/first-post.html"))
        .stdout(contains("Rendered site"));

    assert!(tmp.path().join("site/home.html").is_file());
    assert!(tmp.path().join("site/blog.html").is_file());
    assert!(tmp.path().join("site/blog/first-post.html").is_file());
}

#[test]
fn missing_config_fails_before_rendering() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stdout(contains("Rendering was not successful!"))
        .stderr(contains("not found"));

    assert!(!tmp.path().join("site").exists());
}

#[test]
fn config_flag_points_at_another_file() {
    let tmp = setup_site();
    fs::rename(tmp.path().join("config.toml"), tmp.path().join("other.toml")).unwrap();

    cmd()
        .current_dir(tmp.path())
        .args(["--config", "other.toml"])
        .assert()
        .success();
}

#[test]
fn malformed_content_yields_warning_status() {
    let tmp = setup_site();
    fs::write(
        tmp.path().join("content/blog/broken.md"),
        "Broken\n-----\nno colon\n-----\n-----\n",
    )
    .unwrap();

    cmd()
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(contains("blog: failed"))
        .stdout(contains("Rendered site with warnings"));

    // The healthy page still rendered.
    assert!(tmp.path().join("site/home.html").is_file());
}

#[test]
fn reset_deletes_stale_output() {
    let tmp = setup_site();
    let stale = tmp.path().join("site/stale.html");
    fs::create_dir_all(tmp.path().join("site")).unwrap();
    fs::write(&stale, "old").unwrap();

    cmd()
        .current_dir(tmp.path())
        .arg("--reset")
        .assert()
        .success();

    assert!(!stale.exists());
    assert!(tmp.path().join("site/home.html").is_file());
}
