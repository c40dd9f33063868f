//! Integration tests for the wfp2 binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A project root with `typo3conf/ext/` and an isolated config home.
struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("typo3conf/ext")).unwrap();
        Self { dir }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn ext(&self) -> PathBuf {
        self.root().join("typo3conf/ext")
    }

    fn with_extension(self, slug: &str) -> Self {
        fs::create_dir_all(self.ext().join(slug)).unwrap();
        self
    }

    fn with_skeletons(self) -> Self {
        self.wfp2()
            .args(["skeleton:init", "--ext-path"])
            .arg(self.ext())
            .assert()
            .success();
        self
    }

    /// The binary, run inside the project with no user config or env overrides.
    fn wfp2(&self) -> Command {
        let mut cmd = Command::cargo_bin("wfp2").unwrap();
        cmd.current_dir(self.root())
            .env("HOME", self.root())
            .env("XDG_CONFIG_HOME", self.root().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("WFP2_PATHS__EXT_PATH")
            .env_remove("WFP2_PATHS__ROOT_PATH");
        cmd
    }

    fn generate(&self, controller: &str, extension: &str) -> Command {
        let mut cmd = self.wfp2();
        cmd.args(["generate:controller", controller])
            .arg(format!("--extension={extension}"))
            .arg("--ext-path")
            .arg(self.ext())
            .arg("--root-path")
            .arg(self.root());
        cmd
    }
}

#[test]
fn help_lists_commands() {
    let project = Project::new();
    project
        .wfp2()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate:controller"))
        .stdout(predicate::str::contains("skeleton:init"));
}

#[test]
fn version_flag() {
    let project = Project::new();
    project
        .wfp2()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_controller_help_mentions_extension() {
    let project = Project::new();
    project
        .wfp2()
        .args(["generate:controller", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--extension"));
}

#[test]
fn skeleton_init_writes_three_files_then_keeps_them() {
    let project = Project::new();
    let skeleton_dir = project.ext().join("wfp2_console/skeleton/controller");

    project
        .wfp2()
        .args(["skeleton:init", "--ext-path"])
        .arg(project.ext())
        .assert()
        .success()
        .stdout(predicate::str::contains("controller.php written"));

    for file in ["controller.php", "action.php", "view.html"] {
        assert!(skeleton_dir.join(file).is_file(), "{file} missing");
    }

    fs::write(skeleton_dir.join("view.html"), "custom").unwrap();
    project
        .wfp2()
        .args(["skeleton:init", "--ext-path"])
        .arg(project.ext())
        .assert()
        .success()
        .stdout(predicate::str::contains("view.html kept"));
    assert_eq!(
        fs::read_to_string(skeleton_dir.join("view.html")).unwrap(),
        "custom"
    );
}

#[test]
fn generates_controller_from_piped_answers() {
    let project = Project::new().with_skeletons().with_extension("wfp2_demo");

    project
        .generate("Blog", "wfp2_demo")
        .write_stdin("y\nlist\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Controller generation"))
        .stdout(predicate::str::contains("Create new controller BlogController"))
        .stdout(predicate::str::contains("generate action?"))
        .stdout(predicate::str::contains("Please insert your action name"))
        .stdout(predicate::str::contains(": OK"))
        .stdout(predicate::str::contains("Everything is OK! Now get to work :)."));

    let extension = project.ext().join("wfp2_demo");
    let controller =
        fs::read_to_string(extension.join("Classes/Controller/BlogController.php")).unwrap();
    assert!(controller.contains("namespace WFP2\\Demo\\Controller;"));
    assert!(controller.contains("public function listAction()"));
    assert!(
        extension
            .join("Resources/Private/Templates/Blog/List.html")
            .is_file()
    );
}

#[test]
fn declining_immediately_writes_empty_controller() {
    let project = Project::new().with_skeletons().with_extension("wfp2_demo");

    project
        .generate("BlogController", "wfp2_demo")
        .write_stdin("n\n")
        .assert()
        .success();

    let controller_dir = project.ext().join("wfp2_demo/Classes/Controller");
    assert!(controller_dir.join("BlogController.php").is_file());
    assert!(!controller_dir.join("BlogControllerController.php").exists());
    assert!(
        !project
            .ext()
            .join("wfp2_demo/Resources/Private/Templates")
            .exists()
    );
}

#[test]
fn json_output_is_a_report() {
    let project = Project::new().with_skeletons().with_extension("wfp2_demo");

    let assert = project
        .generate("Blog", "wfp2_demo")
        .args(["--output-format", "json"])
        .write_stdin("y\nshow\nn\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["controller_name"], "BlogController");
    assert_eq!(report["namespace"], "WFP2\\Demo\\Controller");
    assert_eq!(report["actions"][0]["normalized_action_name"], "showAction");
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn config_get_reads_environment() {
    let project = Project::new();
    project
        .wfp2()
        .env("WFP2_GENERATOR__AUTHOR", "Jane Doe")
        .args(["config", "get", "generator.author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generator.author = Jane Doe"));
}

#[test]
fn config_file_supplies_ext_path() {
    let project = Project::new().with_skeletons().with_extension("wfp2_demo");
    let config = project.root().join("wfp2.toml");
    fs::write(
        &config,
        format!(
            "[paths]\next_path = {:?}\nroot_path = {:?}\n",
            project.ext().display().to_string(),
            project.root().display().to_string()
        ),
    )
    .unwrap();

    project
        .wfp2()
        .arg("--config")
        .arg(&config)
        .args(["generate:controller", "Blog", "--extension=wfp2_demo"])
        .write_stdin("n\n")
        .assert()
        .success();

    assert!(
        project
            .ext()
            .join("wfp2_demo/Classes/Controller/BlogController.php")
            .is_file()
    );
}

#[test]
fn completions_for_bash() {
    let project = Project::new();
    project
        .wfp2()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wfp2"));
}

#[test]
fn conventional_no_color_values_are_accepted() {
    let project = Project::new();
    for value in ["1", "true", "0", ""] {
        project
            .wfp2()
            .env("NO_COLOR", value)
            .args(["config", "get", "output.no_color"])
            .assert()
            .success();
    }
}

#[test]
fn environment_ext_path_reaches_generator() {
    let project = Project::new().with_skeletons().with_extension("wfp2_demo");

    project
        .wfp2()
        .env("WFP2_PATHS__EXT_PATH", project.ext())
        .env("WFP2_PATHS__ROOT_PATH", project.root())
        .args(["generate:controller", "Blog", "--extension=wfp2_demo"])
        .write_stdin("n\n")
        .assert()
        .success();

    assert!(
        project
            .ext()
            .join("wfp2_demo/Classes/Controller/BlogController.php")
            .is_file()
    );
}

#[test]
fn config_output_format_selects_json() {
    let project = Project::new().with_skeletons().with_extension("wfp2_demo");
    let config = project.root().join("wfp2.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let assert = project
        .generate("Blog", "wfp2_demo")
        .arg("--config")
        .arg(&config)
        .write_stdin("n\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["controller_name"], "BlogController");
}
