use {crate::Version, std::cmp::Ordering};

/// Compare two versions for a newest-first sort.
///
/// Sorting ascending by this comparer orders the newest version first, so
/// `Less` means `x` is newer than `y`. `major`, `minor`, and `patch` are
/// compared with reversed operands, then the tie is broken by
/// [`compare_prerelease`]. Build metadata is never consulted.
///
/// `None` sorts as oldest: a version is always newer than `None`, so
/// `compare(None, Some(_))` is `Greater` and `compare(Some(_), None)` is
/// `Less`.
#[must_use]
pub fn compare(x: Option<&Version>, y: Option<&Version>) -> Ordering {
	match (x, y) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(x), Some(y)) => y
			.major
			.cmp(&x.major)
			.then_with(|| y.minor.cmp(&x.minor))
			.then_with(|| y.patch.cmp(&x.patch))
			.then_with(|| compare_prerelease(x.prerelease.as_deref(), y.prerelease.as_deref())),
	}
}

/// Compare two prerelease labels for a newest-first sort.
///
/// An empty or absent label marks a release, which is newer than any
/// prerelease of the same version, so the side carrying a label sorts as
/// older. Otherwise the labels are split on `.` and compared identifier by
/// identifier: two numeric identifiers compare numerically with reversed
/// operands, a numeric identifier is older than an alphanumeric one, and two
/// alphanumeric identifiers compare as ordinal strings. If all shared
/// positions tie, the label with more identifiers sorts first.
#[must_use]
pub fn compare_prerelease(x: Option<&str>, y: Option<&str>) -> Ordering {
	let x = x.filter(|label| !label.is_empty());
	let y = y.filter(|label| !label.is_empty());
	match (x, y) {
		(None, None) => Ordering::Equal,
		(Some(_), None) => Ordering::Greater,
		(None, Some(_)) => Ordering::Less,
		(Some(x), Some(y)) => {
			let x = x.split('.').collect::<Vec<_>>();
			let y = y.split('.').collect::<Vec<_>>();
			for (x, y) in std::iter::zip(&x, &y) {
				let ordering = compare_identifier(x, y);
				if ordering != Ordering::Equal {
					return ordering;
				}
			}
			x.len().cmp(&y.len())
		},
	}
}

/// Sort versions in place so the newest version comes first.
pub fn sort_newest_first(versions: &mut [Version]) {
	versions.sort_by(|x, y| compare(Some(x), Some(y)));
}

fn compare_identifier(x: &str, y: &str) -> Ordering {
	match (x.parse::<u64>().ok(), y.parse::<u64>().ok()) {
		(Some(x), Some(y)) => y.cmp(&x),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => x.cmp(y),
	}
}
