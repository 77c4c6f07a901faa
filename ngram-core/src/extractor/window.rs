use serde::{Deserialize, Serialize};

use super::ngram::{check_length, extract_paired_unchecked, extract_unchecked};
use crate::error::Result;

/// Which extraction to run, and with which lengths.
///
/// `Window` is the configuration shared by every streaming helper and by
/// the HTTP surface. It serializes as an internally tagged object:
/// `{"kind": "single", "len": 3}` or
/// `{"kind": "paired", "len_a": 3, "len_b": 2}`.
///
/// # Invariants
/// - Values built with `single` / `paired` always hold lengths >= 1
/// - Deserialized values are not checked until `validate` or `apply`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Window {
	Single { len: usize },
	Paired { len_a: usize, len_b: usize },
}

impl Window {
	/// Creates a single-length window.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `len == 0`.
	pub fn single(len: usize) -> Result<Self> {
		check_length("len", len)?;
		Ok(Window::Single { len })
	}

	/// Creates a paired-length window.
	///
	/// # Errors
	/// Returns `InvalidArgument` if either length is zero.
	pub fn paired(len_a: usize, len_b: usize) -> Result<Self> {
		check_length("len_a", len_a)?;
		check_length("len_b", len_b)?;
		Ok(Window::Paired { len_a, len_b })
	}

	/// Re-checks the lengths, for values that did not go through a constructor.
	pub fn validate(&self) -> Result<()> {
		match *self {
			Window::Single { len } => check_length("len", len),
			Window::Paired { len_a, len_b } => {
				check_length("len_a", len_a)?;
				check_length("len_b", len_b)
			}
		}
	}

	/// Runs the extraction this window describes on `s`.
	pub fn apply(&self, s: &str) -> Result<Vec<String>> {
		self.validate()?;
		Ok(self.apply_validated(s))
	}

	/// Number of characters one output step spans (`len` or `len_a + len_b`).
	pub fn span(&self) -> usize {
		match *self {
			Window::Single { len } => len,
			Window::Paired { len_a, len_b } => len_a.saturating_add(len_b),
		}
	}

	/// `apply` for a window already known to be valid.
	pub(crate) fn apply_validated(&self, s: &str) -> Vec<String> {
		match *self {
			Window::Single { len } => extract_unchecked(s, len),
			Window::Paired { len_a, len_b } => extract_paired_unchecked(s, len_a, len_b),
		}
	}
}
