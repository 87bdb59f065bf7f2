//! Demo applications.

pub mod company;
pub mod counter;
pub mod profile;

use crate::settings::DemoSettings;
use arbor_core::View;
use arbor_router::Router;
use clap::ValueEnum;
use std::rc::Rc;

/// The demos the CLI can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoApp {
	/// Counter with increment, decrement and reset buttons
	Counter,
	/// Profile page with the user passed down as parameters
	Props,
	/// Profile page with the user provided through context
	Context,
	/// Company site with client-side routing
	Company,
}

impl DemoApp {
	/// Every demo, in listing order.
	pub const ALL: [DemoApp; 4] = [Self::Counter, Self::Props, Self::Context, Self::Company];

	/// Returns the name used on the command line.
	pub fn name(self) -> &'static str {
		match self {
			Self::Counter => "counter",
			Self::Props => "props",
			Self::Context => "context",
			Self::Company => "company",
		}
	}

	/// Returns a one-line description.
	pub fn description(self) -> &'static str {
		match self {
			Self::Counter => "Counter with increment, decrement and reset buttons",
			Self::Props => "Profile page with the user passed down as parameters",
			Self::Context => "Profile page with the user provided through context",
			Self::Company => "Company site with client-side routing",
		}
	}

	/// Builds the demo's root view and, for routed demos, its router.
	pub fn build(self, settings: &DemoSettings) -> Demo {
		match self {
			Self::Counter => Demo {
				view: counter::app(),
				router: None,
			},
			Self::Props => Demo {
				view: profile::props_app((&settings.profile).into()),
				router: None,
			},
			Self::Context => Demo {
				view: profile::context_app((&settings.profile).into()),
				router: None,
			},
			Self::Company => {
				let router = Rc::new(company::router());
				Demo {
					view: company::app(&router, settings),
					router: Some(router),
				}
			}
		}
	}
}

/// A built demo.
#[derive(Debug)]
pub struct Demo {
	/// Root view to evaluate.
	pub view: View,
	/// Router of routed demos.
	pub router: Option<Rc<Router>>,
}
