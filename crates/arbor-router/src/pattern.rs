//! Path patterns.
//!
//! A pattern is a path whose segments are either literal text or a
//! `{name}` placeholder capturing exactly one non-empty segment:
//!
//! ```ignore
//! let pattern = PathPattern::new("/users/{id}/");
//! assert_eq!(pattern.matches("/users/42/").unwrap()["id"], "42");
//! assert!(pattern.matches("/users/42").is_none()); // trailing slash matters
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Parameters captured from a matched path.
pub type RouteParams = HashMap<String, String>;

static PARAM_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)\}$").expect("parameter segment regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A compiled route pattern.
#[derive(Clone, PartialEq, Eq)]
pub struct PathPattern {
	source: String,
	segments: Vec<Segment>,
}

impl fmt::Debug for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("PathPattern").field(&self.source).finish()
	}
}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

impl PathPattern {
	/// Parses `pattern`. Segments that are not exactly `{identifier}` are
	/// matched literally.
	pub fn new(pattern: &str) -> Self {
		let segments = pattern
			.split('/')
			.map(|segment| match PARAM_SEGMENT.captures(segment) {
				Some(captures) => Segment::Param(captures[1].to_string()),
				None => Segment::Literal(segment.to_string()),
			})
			.collect();
		Self {
			source: pattern.to_string(),
			segments,
		}
	}

	/// Returns the pattern text.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Returns whether the pattern has no parameters.
	pub fn is_static(&self) -> bool {
		self.segments.iter().all(|s| matches!(s, Segment::Literal(_)))
	}

	/// Returns the parameter names in declaration order.
	pub fn param_names(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|s| match s {
			Segment::Param(name) => Some(name.as_str()),
			Segment::Literal(_) => None,
		})
	}

	/// Matches `path`, returning the captured parameters.
	///
	/// Static patterns match by exact string equality.
	pub fn matches(&self, path: &str) -> Option<RouteParams> {
		if self.is_static() {
			return (self.source == path).then(RouteParams::new);
		}

		let parts: Vec<&str> = path.split('/').collect();
		if parts.len() != self.segments.len() {
			return None;
		}

		let mut params = RouteParams::new();
		for (segment, part) in self.segments.iter().zip(parts) {
			match segment {
				Segment::Literal(literal) if literal == part => {}
				Segment::Literal(_) => return None,
				Segment::Param(_) if part.is_empty() => return None,
				Segment::Param(name) => {
					params.insert(name.clone(), part.to_string());
				}
			}
		}
		Some(params)
	}

	/// Builds a path from `params`.
	///
	/// Returns the name of the first parameter without a value on failure.
	pub fn reverse(&self, params: &RouteParams) -> Result<String, String> {
		let mut parts = Vec::with_capacity(self.segments.len());
		for segment in &self.segments {
			match segment {
				Segment::Literal(literal) => parts.push(literal.clone()),
				Segment::Param(name) => match params.get(name) {
					Some(value) => parts.push(value.clone()),
					None => return Err(name.clone()),
				},
			}
		}
		Ok(parts.join("/"))
	}
}
