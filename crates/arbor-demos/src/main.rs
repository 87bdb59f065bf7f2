//! Arbor Demo CLI
//!
//! Renders the demo applications to HTML.
//!
//! ## Usage
//!
//! ```bash
//! arbor-demo apps
//! arbor-demo render counter --click increment --click increment
//! arbor-demo render company --path /about
//! arbor-demo routes
//! ```

use anyhow::Context;
use arbor_demos::apps::company;
use arbor_demos::{DemoApp, DemoSettings, RenderRequest, logging, output, render_demo};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "arbor-demo")]
#[command(about = "Render the Arbor demo applications", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Settings file (defaults to ./arbor.toml when present)
	#[arg(long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// List the demo applications
	Apps,

	/// Render a demo application to HTML
	Render {
		/// Demo to render
		#[arg(value_enum, value_name = "APP")]
		app: DemoApp,

		/// Location to open before clicking (routed demos only)
		#[arg(long, value_name = "PATH")]
		path: Option<String>,

		/// Element id to click; repeat to click several in order
		#[arg(long = "click", value_name = "ELEMENT_ID")]
		clicks: Vec<String>,
	},

	/// List the routes of the company site
	Routes,
}

fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(cli) {
		output::error(&format!("{:#}", e));
		process::exit(1);
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let settings = DemoSettings::load(cli.config.as_deref()).context("failed to load settings")?;
	logging::init(&logging::effective_level(&settings.log_level, cli.verbosity));

	match cli.command {
		Commands::Apps => {
			let width = DemoApp::ALL.iter().map(|app| app.name().len()).max().unwrap_or(0);
			for app in DemoApp::ALL {
				println!("{}", output::row(app.name(), app.description(), width));
			}
			Ok(())
		}
		Commands::Render { app, path, clicks } => {
			let request = RenderRequest { app, path, clicks };
			let rendered = render_demo(&request, &settings)
				.with_context(|| format!("failed to render `{}`", app.name()))?;
			println!("{}", rendered.html);
			if let Some(location) = rendered.location {
				output::info(&format!("location: {}", location));
			}
			output::success(&format!("rendered `{}` after {} pass(es)", app.name(), rendered.passes));
			Ok(())
		}
		Commands::Routes => {
			let router = company::router();
			let width = router
				.routes()
				.iter()
				.map(|route| route.pattern().as_str().len())
				.max()
				.unwrap_or(0);
			for route in router.routes() {
				println!(
					"{}",
					output::row(route.pattern().as_str(), route.name().unwrap_or("-"), width)
				);
			}
			if router.has_not_found() {
				output::info("unmatched paths render the not-found page");
			}
			Ok(())
		}
	}
}
