//! Arbor Demos
//!
//! The demo applications shipped with Arbor and the pieces of the
//! `arbor-demo` command that renders them:
//!
//! - [`apps`]: counter, props, context and company demos
//! - [`settings`]: TOML settings
//! - [`logging`]: tracing subscriber setup
//! - [`output`]: colored status output
//! - [`render`]: evaluating a demo with scripted navigation and events

pub mod apps;
pub mod logging;
pub mod output;
pub mod render;
pub mod settings;

pub use apps::{Demo, DemoApp};
pub use render::{RenderError, RenderOutput, RenderRequest, render_demo, runtime_for};
pub use settings::{DemoSettings, SettingsError};
