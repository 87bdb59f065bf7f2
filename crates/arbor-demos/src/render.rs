//! Rendering a demo with scripted navigation and clicks.
//!
//! This is the HTML render driver: it evaluates the demo, applies the
//! requested path and click events one at a time, running passes until the
//! runtime is idle after each, and returns the final markup.

use crate::apps::DemoApp;
use crate::settings::DemoSettings;
use arbor_core::{Runtime, RuntimeConfig, ViewError};
use arbor_router::RouterError;
use thiserror::Error;

/// Errors raised while rendering a demo.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
	/// Evaluating the view tree failed.
	#[error(transparent)]
	View(#[from] ViewError),

	/// Navigation failed.
	#[error(transparent)]
	Router(#[from] RouterError),

	/// A path was given for a demo without a router.
	#[error("demo `{0}` has no router, --path is not supported")]
	NotRouted(&'static str),

	/// A click targeted an element without a click handler.
	#[error("element `{0}` does not handle clicks")]
	NotClickable(String),
}

/// What to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
	pub app: DemoApp,
	/// Location to navigate to before any click.
	pub path: Option<String>,
	/// Element ids to click, in order.
	pub clicks: Vec<String>,
}

impl RenderRequest {
	/// Renders `app` at its initial location without events.
	pub fn new(app: DemoApp) -> Self {
		Self {
			app,
			path: None,
			clicks: Vec::new(),
		}
	}
}

/// The result of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
	/// Final markup.
	pub html: String,
	/// Location after the last click, for routed demos.
	pub location: Option<String>,
	/// Passes run after the initial evaluation.
	pub passes: usize,
}

/// Builds the runtime a demo renders in, bounded by the configured pass limit.
pub fn runtime_for(settings: &DemoSettings) -> Runtime {
	Runtime::with_config(RuntimeConfig {
		max_passes: settings.max_passes,
	})
}

/// Renders `request` with `settings`.
pub fn render_demo(request: &RenderRequest, settings: &DemoSettings) -> Result<RenderOutput, RenderError> {
	let demo = request.app.build(settings);
	let mut runtime = runtime_for(settings);

	if let Some(path) = &request.path {
		let router = demo
			.router
			.as_ref()
			.ok_or(RenderError::NotRouted(request.app.name()))?;
		router.replace(path)?;
	}

	tracing::info!(app = request.app.name(), path = ?request.path, "rendering demo");
	runtime.evaluate(demo.view)?;

	let mut passes = 0;
	for id in &request.clicks {
		if !runtime.dispatch(id, "click")? {
			return Err(RenderError::NotClickable(id.clone()));
		}
		passes += runtime.run_until_idle()?.len();
	}

	Ok(RenderOutput {
		html: runtime.render_to_string()?,
		location: demo.router.map(|router| router.current_location()),
		passes,
	})
}
