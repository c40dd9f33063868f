//! End-to-end generation against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;
use wfp2_adapters::{LocalFilesystem, MemoryFilesystem, ScriptedPrompt, builtin_skeletons};
use wfp2_core::{
    application::{
        ApplicationError, ControllerGenerator, ExtensionLayout, GeneratorDefaults, Timestamp,
    },
    domain::{DomainError, GenerationRequest},
    error::GeneratorError,
};

struct Site {
    _dir: TempDir,
    root: PathBuf,
    ext: PathBuf,
}

impl Site {
    /// `<root>/typo3conf/ext/` with the bundled skeletons and an empty `wfp2_demo`.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let ext = root.join("typo3conf").join("ext");
        fs::create_dir_all(ext.join("wfp2_demo")).unwrap();
        builtin_skeletons::install(&LocalFilesystem::new(), &Site::layout_for(&root), false)
            .unwrap();
        Self {
            _dir: dir,
            root,
            ext,
        }
    }

    fn layout_for(root: &Path) -> ExtensionLayout {
        ExtensionLayout::new(root.join("typo3conf").join("ext"), root)
    }

    fn generator(&self, prompt: ScriptedPrompt) -> ControllerGenerator {
        let at = NaiveDate::from_ymd_opt(2016, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        ControllerGenerator::new(
            Arc::new(LocalFilesystem::new()),
            Box::new(prompt),
            Site::layout_for(&self.root),
            GeneratorDefaults {
                timestamp: Timestamp::Fixed(at),
                ..GeneratorDefaults::default()
            },
        )
    }

    fn extension(&self) -> PathBuf {
        self.ext.join("wfp2_demo")
    }
}

fn request(controller: &str) -> GenerationRequest {
    GenerationRequest::new(Some("wfp2_demo".into()), controller)
}

#[test]
fn blog_controller_with_list_action() {
    let site = Site::new();
    let report = site
        .generator(ScriptedPrompt::new().action("list").no())
        .run(&request("Blog"))
        .unwrap();

    let controller_path = site
        .extension()
        .join("Classes/Controller/BlogController.php");
    let view_path = site
        .extension()
        .join("Resources/Private/Templates/Blog/List.html");

    assert_eq!(report.controller_path, controller_path);
    assert!(report.is_ok());

    let controller = fs::read_to_string(&controller_path).unwrap();
    assert!(controller.contains("namespace WFP2\\Demo\\Controller;"));
    assert!(controller.contains("class BlogController extends"));
    assert!(controller.contains("public function listAction()"));
    assert!(controller.contains("Template: wfp2_demo/Resources/Private/Templates/Blog/List.html"));
    assert!(controller.contains("File: typo3conf/ext/wfp2_demo/Classes/Controller/BlogController.php"));
    assert!(controller.contains("on 16-03-07 09:30:00"));

    let view = fs::read_to_string(&view_path).unwrap();
    assert!(view.contains("<h1>BlogController::listAction</h1>"));
}

#[test]
fn no_known_placeholder_survives() {
    let site = Site::new();
    site.generator(ScriptedPrompt::new().action("list").action("show").no())
        .run(&request("Blog"))
        .unwrap();

    let controller = fs::read_to_string(
        site.extension()
            .join("Classes/Controller/BlogController.php"),
    )
    .unwrap();
    for key in [
        "{generator.date}",
        "{generator.name}",
        "{generator.author}",
        "{generator.file}",
        "{name}",
        "{namespace}",
        "{body}",
        "{actionname}",
        "{view}",
    ] {
        assert!(!controller.contains(key), "{key} left in controller");
    }
    assert!(controller.find("listAction").unwrap() < controller.find("showAction").unwrap());
}

#[test]
fn controller_suffix_is_not_doubled() {
    let site = Site::new();
    let report = site
        .generator(ScriptedPrompt::new().no())
        .run(&request("BlogController"))
        .unwrap();
    assert_eq!(report.controller_name, "BlogController");
    assert!(
        site.extension()
            .join("Classes/Controller/BlogController.php")
            .is_file()
    );
}

#[test]
fn missing_extension_directory_creates_nothing() {
    let site = Site::new();
    let err = site
        .generator(ScriptedPrompt::new())
        .run(&GenerationRequest::new(Some("not_installed".into()), "Blog"))
        .unwrap_err();

    assert!(matches!(
        err,
        GeneratorError::Application(ApplicationError::PathNotFound { .. })
    ));
    assert!(!site.ext.join("not_installed").exists());
    assert!(!site.extension().join("Classes").exists());
}

#[test]
fn missing_extension_option_is_missing_parameter() {
    let site = Site::new();
    let err = site
        .generator(ScriptedPrompt::new())
        .run(&GenerationRequest::new(None, "Blog"))
        .unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::Domain(DomainError::MissingParameter { .. })
    ));
}

#[test]
fn missing_view_skeleton_keeps_created_directories() {
    let site = Site::new();
    fs::remove_file(
        site.ext
            .join("wfp2_console/skeleton/controller/view.html"),
    )
    .unwrap();

    let err = site
        .generator(ScriptedPrompt::new().action("list").no())
        .run(&request("Blog"))
        .unwrap_err();

    assert!(matches!(
        err,
        GeneratorError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert!(site.extension().join("Classes/Controller").is_dir());
    assert!(
        !site
            .extension()
            .join("Classes/Controller/BlogController.php")
            .exists()
    );
}

#[test]
fn failed_controller_write_keeps_written_views() {
    let ext = Path::new("/www/typo3conf/ext");
    let skeletons = ext.join("wfp2_console/skeleton/controller");
    let memory = MemoryFilesystem::new()
        .with_dir(ext.join("wfp2_demo/Classes/Controller"))
        .with_file(skeletons.join("controller.php"), builtin_skeletons::CONTROLLER_PHP)
        .with_file(skeletons.join("action.php"), builtin_skeletons::ACTION_PHP)
        .with_file(skeletons.join("view.html"), builtin_skeletons::VIEW_HTML)
        .deny_writes(ext.join("wfp2_demo/Classes/Controller"));

    let generator = ControllerGenerator::new(
        Arc::new(memory.clone()),
        Box::new(ScriptedPrompt::new().action("list").no()),
        ExtensionLayout::new(ext, "/www"),
        GeneratorDefaults::default(),
    );
    let err = generator.run(&request("Blog")).unwrap_err();

    assert!(matches!(
        err,
        GeneratorError::Application(ApplicationError::WriteFailed { .. })
    ));
    assert!(
        memory
            .read_file(&ext.join("wfp2_demo/Resources/Private/Templates/Blog/List.html"))
            .is_some()
    );
}
