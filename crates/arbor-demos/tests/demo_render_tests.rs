//! Integration tests for the demo render driver
//!
//! These tests render every demo through the same entry point the CLI uses.

use arbor_demos::apps::company::NAV_LINKS;
use arbor_demos::{DemoApp, DemoSettings, RenderError, RenderRequest, render_demo, runtime_for};
use arbor_core::{View, ViewError};
use rstest::rstest;
use std::io::Write;

#[rstest]
#[case(DemoApp::Counter, "Current Count: 0")]
#[case(DemoApp::Props, "Bio: Loves hiking and photography")]
#[case(DemoApp::Context, "Bio: Loves hiking and photography")]
#[case(DemoApp::Company, "Welcome to Our Company")]
fn test_every_demo_renders(#[case] app: DemoApp, #[case] expected: &str) {
	let output = render_demo(&RenderRequest::new(app), &DemoSettings::default()).unwrap();
	assert!(output.html.contains(expected), "{}", output.html);
	assert_eq!(output.passes, 0);
}

#[rstest]
fn test_settings_file_reaches_demos() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "company = \"Initech\"\ncopyright_year = 1999\n\n[profile]\nname = \"Peter\"").unwrap();
	let settings = DemoSettings::load(Some(file.path())).unwrap();

	let company = render_demo(&RenderRequest::new(DemoApp::Company), &settings).unwrap();
	assert!(company.html.contains("© 1999 Initech. All rights reserved."));

	let context = render_demo(&RenderRequest::new(DemoApp::Context), &settings).unwrap();
	assert!(context.html.contains(">Peter</h2>"));
}

#[rstest]
fn test_company_visits_every_page() {
	let request = RenderRequest {
		clicks: NAV_LINKS.iter().rev().map(|(id, _, _)| id.to_string()).collect(),
		..RenderRequest::new(DemoApp::Company)
	};
	let output = render_demo(&request, &DemoSettings::default()).unwrap();
	assert_eq!(output.location.as_deref(), Some("/"));
	assert_eq!(output.passes, NAV_LINKS.len());
}

#[rstest]
fn test_pass_limit_from_settings() {
	let mut settings = DemoSettings::default();
	settings.max_passes = 1;
	let mut runtime = runtime_for(&settings);
	assert_eq!(runtime.config().max_passes, 1);

	// A component that writes on every evaluation never settles.
	runtime
		.evaluate(View::component("Ticker", |cx| {
			let ticks = cx.use_state(|| 0u32)?;
			ticks.update(|n| n + 1);
			Ok(View::text(ticks.read().to_string()))
		}))
		.unwrap();
	assert_eq!(
		runtime.run_until_idle().unwrap_err(),
		ViewError::RenderLoop { passes: 1 }
	);
}

#[rstest]
fn test_click_on_text_is_rejected() {
	let request = RenderRequest {
		clicks: vec!["count".into()],
		..RenderRequest::new(DemoApp::Counter)
	};
	let error = render_demo(&request, &DemoSettings::default()).unwrap_err();
	assert!(matches!(error, RenderError::NotClickable(ref id) if id == "count"));
	assert!(!matches!(error, RenderError::View(ViewError::RenderLoop { .. })));
}
