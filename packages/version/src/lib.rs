use {
	std::cmp::Ordering,
	winnow::{
		combinator::{opt, preceded, separated},
		prelude::*,
		stream::AsChar,
		token::{one_of, take_while},
	},
};

pub use self::compare::{compare, compare_prerelease, sort_newest_first};

pub mod compare;

/// A semantic version.
///
/// Equality, ordering, and hashing ignore the build metadata. The natural
/// order of `Ord` is ascending precedence, so the greatest version is the
/// newest. Use [`compare`] or [`sort_newest_first`] for a newest-first sort.
#[derive(Clone, Debug, serde_with::DeserializeFromStr, serde_with::SerializeDisplay)]
pub struct Version {
	pub major: u64,
	pub minor: u64,
	pub patch: u64,
	pub prerelease: Option<String>,
	pub build: Option<String>,
}

#[derive(Clone, Debug, derive_more::Display, derive_more::Error)]
#[display("invalid semantic version {input:?}")]
pub struct ParseError {
	pub input: String,
}

impl Version {
	#[must_use]
	pub fn new(major: u64, minor: u64, patch: u64) -> Self {
		Self {
			major,
			minor,
			patch,
			prerelease: None,
			build: None,
		}
	}

	pub fn parse(string: &str) -> Result<Self, ParseError> {
		string.parse()
	}

	#[must_use]
	pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Self {
		self.prerelease = Some(prerelease.into());
		self
	}

	#[must_use]
	pub fn with_build(mut self, build: impl Into<String>) -> Self {
		self.build = Some(build.into());
		self
	}

	/// Whether this version carries a non-empty prerelease label.
	#[must_use]
	pub fn is_prerelease(&self) -> bool {
		self.prerelease
			.as_deref()
			.is_some_and(|prerelease| !prerelease.is_empty())
	}

	/// Whether this version sorts before `other` in newest-first order. Every
	/// version is newer than `None`.
	#[must_use]
	pub fn is_newer_than(&self, other: Option<&Self>) -> bool {
		compare(Some(self), other) == Ordering::Less
	}

	/// Whether this version sorts after `other` in newest-first order.
	#[must_use]
	pub fn is_older_than(&self, other: Option<&Self>) -> bool {
		compare(Some(self), other) == Ordering::Greater
	}

	/// Render the canonical version string, optionally prefixed with a `v`.
	#[must_use]
	pub fn to_version_string(&self, leading_v: bool) -> String {
		let mut string = if leading_v {
			format!("v{}.{}.{}", self.major, self.minor, self.patch)
		} else {
			format!("{}.{}.{}", self.major, self.minor, self.patch)
		};
		if let Some(prerelease) = self
			.prerelease
			.as_deref()
			.filter(|prerelease| !prerelease.is_empty())
		{
			string.push('-');
			string.push_str(prerelease);
		}
		if let Some(build) = self.build.as_deref().filter(|build| !build.is_empty()) {
			string.push('+');
			string.push_str(build);
		}
		string
	}
}

impl Default for Version {
	fn default() -> Self {
		Self::new(1, 0, 0)
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.to_version_string(true))
	}
}

impl std::str::FromStr for Version {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		version.parse(s).ok().ok_or_else(|| ParseError {
			input: s.to_owned(),
		})
	}
}

impl PartialEq for Version {
	fn eq(&self, other: &Self) -> bool {
		compare(Some(self), Some(other)) == Ordering::Equal
	}
}

impl Eq for Version {}

impl std::hash::Hash for Version {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.major.hash(state);
		self.minor.hash(state);
		self.patch.hash(state);
		self.prerelease
			.as_deref()
			.filter(|prerelease| !prerelease.is_empty())
			.hash(state);
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> Ordering {
		compare(Some(self), Some(other)).reverse()
	}
}

fn version(input: &mut &str) -> ModalResult<Version> {
	let (_, major, _, minor, _, patch, prerelease, build) = (
		opt(one_of(['v', 'V'])),
		number,
		".",
		number,
		".",
		number,
		opt(preceded("-", prerelease)),
		opt(preceded("+", build)),
	)
		.parse_next(input)?;
	Ok(Version {
		major,
		minor,
		patch,
		prerelease: prerelease.map(ToOwned::to_owned),
		build: build.map(ToOwned::to_owned),
	})
}

fn number(input: &mut &str) -> ModalResult<u64> {
	take_while(1.., AsChar::is_dec_digit)
		.verify(|digits: &str| digits.len() == 1 || !digits.starts_with('0'))
		.parse_to()
		.parse_next(input)
}

fn prerelease<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	separated::<_, _, Vec<_>, _, _, _, _>(1.., prerelease_identifier, ".")
		.take()
		.parse_next(input)
}

fn prerelease_identifier<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	take_while(1.., ('0'..='9', 'a'..='z', 'A'..='Z', '-'))
		.verify(|identifier: &str| {
			let numeric = identifier.bytes().all(|byte| byte.is_ascii_digit());
			!numeric || identifier.len() == 1 || !identifier.starts_with('0')
		})
		.parse_next(input)
}

fn build<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	separated::<_, _, Vec<_>, _, _, _, _>(1.., build_identifier, ".")
		.take()
		.parse_next(input)
}

fn build_identifier<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
	take_while(1.., ('0'..='9', 'a'..='z', 'A'..='Z', '-')).parse_next(input)
}
