//! The counter demo.

use arbor_core::{Component, IntoView, Result, Scope, View};

/// A count with increment, decrement and reset buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counter;

impl Component for Counter {
	fn render(&self, cx: &mut Scope<'_>) -> Result<View> {
		let count = cx.use_state(|| 0i64)?;

		let increment = count.clone();
		let decrement = count.clone();
		let reset = count.clone();

		Ok(View::element("div")
			.attr("class", "counter")
			.child(View::element("p").attr("id", "count").child(format!("Current Count: {}", count.read())))
			.child(
				View::element("button")
					.attr("id", "increment")
					.on("click", move || increment.update(|n| n + 1))
					.child("Increment"),
			)
			.child(
				View::element("button")
					.attr("id", "decrement")
					.on("click", move || decrement.update(|n| n - 1))
					.child("Decrement"),
			)
			.child(
				View::element("button")
					.attr("id", "reset")
					.on("click", move || reset.replace(0))
					.child("Reset"),
			)
			.into_view())
	}

	fn name() -> &'static str {
		"Counter"
	}
}

/// The counter demo root.
pub fn app() -> View {
	View::from_component(Counter)
}
