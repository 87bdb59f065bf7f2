//! Data passing demos: explicit parameters vs. context.
//!
//! Both apps render the same page. In the props app the user travels from
//! `App` through `ProfilePage` and `UserInfo` down to `UserProfile` as an
//! explicit parameter of every component. In the context app `App` provides
//! it once and `UserProfile` reads it from [`USER_CONTEXT`]; the components
//! in between never see it.

use super::counter::Counter;
use crate::settings::ProfileSettings;
use arbor_core::{Component, ContextSlot, IntoView, Result, Scope, View};
use std::sync::LazyLock;

/// The user shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
	pub name: String,
	pub age: u32,
	pub bio: String,
}

impl From<&ProfileSettings> for UserData {
	fn from(profile: &ProfileSettings) -> Self {
		Self {
			name: profile.name.clone(),
			age: profile.age,
			bio: profile.bio.clone(),
		}
	}
}

/// Context slot the context app binds the user to.
pub static USER_CONTEXT: LazyLock<ContextSlot<UserData>> = LazyLock::new(|| ContextSlot::new("UserContext"));

fn static_component(name: &'static str, build: fn() -> View) -> View {
	View::component(name, move |_| Ok(build()))
}

fn welcome_message() -> View {
	static_component("WelcomeMessage", || {
		View::element("div")
			.child(View::element("h1").child("Hello everyone, I am learning React at ALX!"))
			.child(View::element("p").child("This is a simple JSX component."))
			.child(View::element("p").child("I am learning about JSX!"))
			.into_view()
	})
}

fn header() -> View {
	static_component("Header", || {
		View::element("header")
			.attr("style", "background-color: navy; color: white; text-align: center; padding: 10px;")
			.child(View::element("h1").child("My Favorite Cities"))
			.into_view()
	})
}

fn main_content() -> View {
	static_component("MainContent", || {
		View::element("main")
			.attr("style", "padding: 20px; background-color: #f0f8ff;")
			.child(View::element("p").child("I love to visit New York, Paris, and Tokyo."))
			.into_view()
	})
}

fn footer() -> View {
	static_component("Footer", || {
		View::element("footer")
			.attr("style", "background-color: #333; color: white; text-align: center; padding: 10px;")
			.child(View::element("p").child("© 2025 City Lovers"))
			.into_view()
	})
}

/// Renders a user card, either from its own parameter or from
/// [`USER_CONTEXT`].
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
	user: Option<UserData>,
}

impl UserProfile {
	/// A profile that renders `user`.
	pub fn new(user: UserData) -> Self {
		Self { user: Some(user) }
	}

	/// A profile that reads its user from the nearest [`USER_CONTEXT`].
	pub fn from_context() -> Self {
		Self { user: None }
	}
}

impl Component for UserProfile {
	fn render(&self, cx: &mut Scope<'_>) -> Result<View> {
		let user = match &self.user {
			Some(user) => user.clone(),
			None => cx.consume(&USER_CONTEXT)?,
		};

		Ok(View::element("div")
			.attr("class", "user-profile")
			.attr("style", "border: 1px solid gray; padding: 10px; margin: 10px;")
			.child(
				View::element("h2")
					.attr("style", "color: blue;")
					.child(user.name),
			)
			.child(View::element("p").child(format!("Age: {}", user.age)))
			.child(View::element("p").child(format!("Bio: {}", user.bio)))
			.into_view())
	}

	fn name() -> &'static str {
		"UserProfile"
	}
}

/// Middle of the drilling chain. Holds the user only to hand it on.
#[derive(Debug, Clone, Default)]
struct UserInfo {
	user: Option<UserData>,
}

impl Component for UserInfo {
	fn render(&self, _cx: &mut Scope<'_>) -> Result<View> {
		let profile = match &self.user {
			Some(user) => UserProfile::new(user.clone()),
			None => UserProfile::from_context(),
		};
		Ok(View::element("section").child(View::from_component(profile)).into_view())
	}

	fn name() -> &'static str {
		"UserInfo"
	}
}

#[derive(Debug, Clone, Default)]
struct ProfilePage {
	user: Option<UserData>,
}

impl Component for ProfilePage {
	fn render(&self, _cx: &mut Scope<'_>) -> Result<View> {
		Ok(View::from_component(UserInfo {
			user: self.user.clone(),
		}))
	}

	fn name() -> &'static str {
		"ProfilePage"
	}
}

fn shell(profile_page: ProfilePage) -> View {
	View::fragment([
		welcome_message(),
		header(),
		main_content(),
		View::from_component(profile_page),
		footer(),
		View::from_component(Counter),
	])
}

/// The props demo root: the user is passed down explicitly.
pub fn props_app(user: UserData) -> View {
	View::component("App", move |_| Ok(shell(ProfilePage { user: Some(user.clone()) })))
}

/// The context demo root: the user is provided once and consumed at the leaf.
pub fn context_app(user: UserData) -> View {
	View::component("App", move |_| {
		Ok(USER_CONTEXT.provide(user.clone(), [shell(ProfilePage::default())]))
	})
}
