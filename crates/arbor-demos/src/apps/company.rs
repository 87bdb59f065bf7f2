//! The company site: a navbar, four routed pages and a fixed footer.

use crate::settings::DemoSettings;
use arbor_core::{Component, IntoView, Result, Scope, StateCell, View};
use arbor_router::{Link, Router, RouterOutlet};
use std::rc::Rc;

const LINK_STYLE: &str = "color: #fff; margin: 0 15px; text-decoration: none; font-weight: bold;";
const NAV_STYLE: &str = "display: flex; justify-content: center; align-items: center; \
	background-color: #333; padding: 10px 0; margin-bottom: 20px;";
const FOOTER_STYLE: &str = "background: #333; color: #fff; text-align: center; padding: 15px 0; \
	position: fixed; left: 0; bottom: 0; width: 100%; z-index: 100;";
const INPUT_STYLE: &str = "display: block; margin: 10px 0;";

/// Navigation targets, in navbar order.
pub const NAV_LINKS: [(&str, &str, &str); 4] = [
	("nav-home", "/", "Home"),
	("nav-about", "/about", "About"),
	("nav-services", "/services", "Services"),
	("nav-contact", "/contact", "Contact"),
];

fn page(name: &'static str, build: fn() -> View) -> View {
	View::component(name, move |_| Ok(build()))
}

fn home() -> View {
	page("Home", || {
		View::element("div")
			.attr("style", "padding: 20px;")
			.child(View::element("h1").child("Welcome to Our Company"))
			.child(View::element("p").child("We are dedicated to delivering excellence in all our services."))
			.into_view()
	})
}

fn about() -> View {
	page("About", || {
		View::element("div")
			.attr("style", "padding: 20px;")
			.child(View::element("h1").child("About Us"))
			.child(View::element("p").child(
				"Our company has been providing top-notch services since 1990. We specialize in various fields including technology, marketing, and consultancy.",
			))
			.into_view()
	})
}

fn services() -> View {
	page("Services", || {
		View::element("div")
			.attr("style", "padding: 20px;")
			.child(View::element("h1").child("Our Services"))
			.child(
				View::element("ul").children(
					["Technology Consulting", "Market Analysis", "Product Development"]
						.map(|service| View::element("li").child(service)),
				),
			)
			.into_view()
	})
}

fn not_found() -> View {
	page("NotFoundPage", || {
		View::element("div")
			.attr("style", "padding: 20px;")
			.child(View::element("h1").child("Page Not Found"))
			.child(View::from_component(Link::new("/", "Back to Home").id("back-home")))
			.into_view()
	})
}

/// The contact form.
///
/// Field values live in state cells and are edited through `input` events
/// carrying a fixed demo value; `submit` flips the submitted flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact;

impl Contact {
	/// Value an `input` event writes into each field.
	pub const SAMPLE_INPUT: [(&'static str, &'static str); 3] = [
		("contact-name", "Jane Doe"),
		("contact-email", "jane@example.com"),
		("contact-message", "Hello there"),
	];

	fn field(id: &'static str, tag: &'static str, placeholder: &'static str, cell: &StateCell<String>) -> View {
		let sample = Self::SAMPLE_INPUT
			.iter()
			.find(|(field, _)| *field == id)
			.map(|(_, value)| *value)
			.unwrap_or_default();
		let writer = cell.clone();

		let el = View::element(tag)
			.attr("id", id)
			.attr("placeholder", placeholder)
			.attr("style", INPUT_STYLE)
			.on("input", move || writer.replace(sample.to_string()));
		if tag == "textarea" {
			el.child(cell.read()).into_view()
		} else {
			el.attr("value", cell.read()).into_view()
		}
	}
}

impl Component for Contact {
	fn render(&self, cx: &mut Scope<'_>) -> Result<View> {
		let name = cx.use_state(String::new)?;
		let email = cx.use_state(String::new)?;
		let message = cx.use_state(String::new)?;
		let submitted = cx.use_state(|| false)?;

		let mut form = View::element("div")
			.attr("style", "padding: 20px;")
			.child(View::element("h1").child("Contact Us"));

		if submitted.read() {
			form = form.child(
				View::element("p")
					.attr("id", "contact-thanks")
					.child(format!("Thank you, {}!", name.read())),
			);
		}

		let submit = submitted.clone();
		form = form.child(
			View::element("form")
				.child(Self::field("contact-name", "input", "Your Name", &name))
				.child(Self::field("contact-email", "input", "Your Email", &email))
				.child(Self::field("contact-message", "textarea", "Your Message", &message))
				.child(
					View::element("button")
						.attr("id", "contact-submit")
						.attr("type", "submit")
						.on("click", move || submit.replace(true))
						.child("Send Message"),
				),
		);

		Ok(form.into_view())
	}

	fn name() -> &'static str {
		"Contact"
	}
}

fn navbar() -> View {
	View::component("Navbar", |_| {
		Ok(View::element("nav")
			.attr("style", NAV_STYLE)
			.children(NAV_LINKS.map(|(id, to, label)| {
				View::from_component(Link::new(to, label).id(id).style(LINK_STYLE))
			}))
			.into_view())
	})
}

fn footer(year: i32, company: String) -> View {
	View::component("Footer", move |_| {
		Ok(View::element("footer")
			.attr("style", FOOTER_STYLE)
			.child(format!("© {} {}. All rights reserved.", year, company))
			.into_view())
	})
}

/// Builds the site's route table.
pub fn router() -> Router {
	Router::new()
		.named_route("home", "/", home)
		.named_route("about", "/about", about)
		.named_route("services", "/services", services)
		.named_route("contact", "/contact", || View::from_component(Contact))
		.not_found(not_found)
}

/// The company site root.
pub fn app(router: &Rc<Router>, settings: &DemoSettings) -> View {
	Router::provide(
		router,
		[
			navbar(),
			View::from_component(RouterOutlet::new().style("min-height: 80vh;")),
			footer(settings.copyright_year, settings.company.clone()),
		],
	)
}
