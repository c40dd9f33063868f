//! Controller Generator - the interactive `generate:controller` use case.
//!
//! ```text
//! Start -> EnsureExtensionExists -> EnsureDirectories -> AskAddAction
//!                                                          |    ^
//!                                                      yes |    | action + view written
//!                                                          v    |
//!                                                       RenderAction
//!                                       no: RenderController -> Done
//! ```
//!
//! Every error aborts the run immediately. Nothing is rolled back: views
//! written before a failing controller write stay on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Prompt},
        services::{
            file_writer::FileWriter,
            layout::{ExtensionLayout, relative_to},
            step_runner::{StepOutcome, StepRunner},
            template_renderer::{GeneratorDefaults, TemplateRenderer},
        },
    },
    domain::{
        ActionSpec, GenerationRequest, NamespacePath, ParameterMapping, SkeletonId, TemplateKind,
        naming,
    },
    error::{GeneratorError, GeneratorResult},
};

pub const ADD_ACTION_QUESTION: &str = "generate action?";
pub const ACTION_NAME_QUESTION: &str = "Please insert your action name";

/// Line separator between rendered action bodies.
const BODY_SEPARATOR: &str = "\n";

/// States of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Start,
    EnsureExtensionExists,
    EnsureDirectories,
    AskAddAction,
    RenderAction,
    RenderController,
    Done,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub controller_name: String,
    pub namespace: NamespacePath,
    pub controller_path: PathBuf,
    pub actions: Vec<ActionSpec>,
    pub steps: Vec<StepOutcome>,
    /// Manual follow-ups; empty when everything was automated.
    pub errors: Vec<String>,
}

impl GenerationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Per-run state once the extension has been validated.
struct Session {
    controller_name: String,
    namespace: NamespacePath,
    ext_root: PathBuf,
    extension_dir: PathBuf,
    controller_dir: PathBuf,
    actions: Vec<ActionSpec>,
    bodies: Vec<String>,
    runner: StepRunner,
}

/// Drives the prompt loop and writes the controller, action views and class.
pub struct ControllerGenerator {
    filesystem: Arc<dyn Filesystem>,
    prompt: Box<dyn Prompt>,
    renderer: TemplateRenderer,
    writer: FileWriter,
}

impl ControllerGenerator {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        prompt: Box<dyn Prompt>,
        layout: ExtensionLayout,
        defaults: GeneratorDefaults,
    ) -> Self {
        Self {
            renderer: TemplateRenderer::new(Arc::clone(&filesystem), layout, defaults),
            writer: FileWriter::new(Arc::clone(&filesystem)),
            filesystem,
            prompt,
        }
    }

    fn layout(&self) -> &ExtensionLayout {
        self.renderer.layout()
    }

    /// Run the whole generation for `request`.
    pub fn run(&self, request: &GenerationRequest) -> GeneratorResult<GenerationReport> {
        self.run_with(request, |_| {})
    }

    /// Like [`Self::run`]; `on_ready` gets the controller class name once the
    /// extension is validated and its directories exist, before the first
    /// question.
    #[instrument(
        skip_all,
        fields(controller = %request.raw_controller_name())
    )]
    pub fn run_with<F>(
        &self,
        request: &GenerationRequest,
        on_ready: F,
    ) -> GeneratorResult<GenerationReport>
    where
        F: FnOnce(&str),
    {
        let mut session = self.prepare(request)?;
        on_ready(&session.controller_name);

        let mut state = GenerationState::AskAddAction;
        while state != GenerationState::Done {
            debug!(?state, "Generation state");
            state = self.step(state, request, &mut session)?;
        }

        debug!(state = ?GenerationState::Done, "Generation state");
        Ok(finish(session))
    }

    /// `Start`, `EnsureExtensionExists` and `EnsureDirectories`.
    fn prepare(&self, request: &GenerationRequest) -> GeneratorResult<Session> {
        debug!(state = ?GenerationState::Start, "Generation state");
        let slug = request.extension_slug()?;

        debug!(state = ?GenerationState::EnsureExtensionExists, "Generation state");
        let extension_dir = self.layout().extension_dir(slug);
        if !self.filesystem.is_dir(&extension_dir) {
            return Err(ApplicationError::PathNotFound {
                path: extension_dir,
            }
            .into());
        }

        debug!(state = ?GenerationState::EnsureDirectories, "Generation state");
        self.open_session(request, slug, &extension_dir)
    }

    /// One transition of the action loop.
    fn step(
        &self,
        state: GenerationState,
        request: &GenerationRequest,
        session: &mut Session,
    ) -> GeneratorResult<GenerationState> {
        match state {
            GenerationState::AskAddAction => {
                if self.prompt.ask_yes_no(ADD_ACTION_QUESTION)? {
                    Ok(GenerationState::RenderAction)
                } else {
                    Ok(GenerationState::RenderController)
                }
            }
            GenerationState::RenderAction => {
                self.render_action(request, session)?;
                Ok(GenerationState::AskAddAction)
            }
            GenerationState::RenderController => {
                self.render_controller(session)?;
                Ok(GenerationState::Done)
            }
            GenerationState::Done => Ok(GenerationState::Done),
            GenerationState::Start
            | GenerationState::EnsureExtensionExists
            | GenerationState::EnsureDirectories => Err(GeneratorError::Internal {
                message: format!("{state:?} is handled before the action loop"),
            }),
        }
    }

    /// Create `Classes/` and `Classes/Controller/` and fix the names.
    fn open_session(
        &self,
        request: &GenerationRequest,
        slug: &str,
        extension_dir: &Path,
    ) -> GeneratorResult<Session> {
        let namespace = naming::derive_namespace(slug)?.child("Controller");
        let classes_dir = self.writer.ensure_directory(&extension_dir.join("Classes"))?;
        let controller_dir = self.writer.ensure_directory(&classes_dir.join("Controller"))?;
        let ext_root = self.filesystem.canonicalize(self.layout().ext_path())?;
        let extension_dir = self.filesystem.canonicalize(extension_dir)?;

        let controller_name = request.controller_class_name();
        info!(controller = %controller_name, "Create new controller");

        Ok(Session {
            controller_name,
            namespace,
            ext_root,
            extension_dir,
            controller_dir,
            actions: Vec::new(),
            bodies: Vec::new(),
            runner: StepRunner::new(),
        })
    }

    /// Ask for an action name until a non-blank one arrives.
    ///
    /// The answer is kept as typed; surrounding whitespace is not stripped.
    fn ask_action_name(&self) -> GeneratorResult<String> {
        loop {
            let answer = self.prompt.ask_text(ACTION_NAME_QUESTION)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
            warn!("Empty action name, asking again");
        }
    }

    /// Write the view for one action and keep its rendered method body.
    fn render_action(&self, request: &GenerationRequest, session: &mut Session) -> GeneratorResult<()> {
        let raw_name = self.ask_action_name()?;

        let templates_dir = self.writer.ensure_directory(
            &session
                .extension_dir
                .join("Resources")
                .join("Private")
                .join("Templates")
                .join(request.raw_controller_name()),
        )?;
        let view_path = templates_dir.join(ActionSpec::view_file_name(&raw_name));
        let view_relative = relative_to(&view_path, &[&session.ext_root, self.layout().ext_path()]);
        let action = ActionSpec::new(raw_name, view_relative);

        self.renderer.render_to_file(
            &SkeletonId::controller(TemplateKind::View),
            &view_path,
            &ParameterMapping::new()
                .with("controller", session.controller_name.as_str())
                .with("action", action.normalized_action_name.as_str()),
        )?;
        session
            .runner
            .record(format!("Write view {}", view_path.display()), Vec::new());

        let body = self.renderer.render(
            &SkeletonId::controller(TemplateKind::Action),
            &ParameterMapping::new()
                .with("actionname", action.normalized_action_name.as_str())
                .with("view", action.view_relative_path.as_str()),
        )?;

        info!(action = %action.normalized_action_name, view = %view_path.display(), "Action added");
        session.bodies.push(body);
        session.actions.push(action);
        Ok(())
    }

    /// Render the class once with every collected action body.
    fn render_controller(&self, session: &mut Session) -> GeneratorResult<()> {
        let target = session
            .controller_dir
            .join(format!("{}.php", session.controller_name));

        self.renderer.render_to_file(
            &SkeletonId::controller(TemplateKind::Controller),
            &target,
            &ParameterMapping::new()
                .with("name", session.controller_name.as_str())
                .with("namespace", session.namespace.to_string())
                .with("body", session.bodies.join(BODY_SEPARATOR)),
        )?;
        session
            .runner
            .record(format!("Write controller {}", target.display()), Vec::new());

        info!(path = %target.display(), actions = session.actions.len(), "Controller written");
        Ok(())
    }
}

fn finish(session: Session) -> GenerationReport {
    let controller_path = session
        .controller_dir
        .join(format!("{}.php", session.controller_name));
    let (steps, errors) = session.runner.into_parts();
    GenerationReport {
        controller_name: session.controller_name,
        namespace: session.namespace,
        controller_path,
        actions: session.actions,
        steps,
        errors,
    }
}
