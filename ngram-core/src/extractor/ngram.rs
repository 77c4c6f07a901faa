use log::debug;

use crate::error::{NGramError, Result};

/// Byte offsets of every character start in `s`, followed by `s.len()`.
///
/// Character `i` spans `bounds[i]..bounds[i + 1]`, so a run of `len`
/// characters starting at `i` is `bounds[i]..bounds[i + len]`.
fn char_boundaries(s: &str) -> Vec<usize> {
	let mut bounds: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
	bounds.push(s.len());
	bounds
}

/// Rejects zero lengths.
pub(crate) fn check_length(name: &str, len: usize) -> Result<()> {
	if len == 0 {
		debug!("rejected {name} = 0");
		return Err(NGramError::InvalidArgument(format!("{name} must be >= 1")));
	}
	Ok(())
}

/// Gets n-grams from a string with the specified length.
///
/// Produces every contiguous run of exactly `len` characters, left to
/// right, one per starting offset (stride 1). The `i`-th element covers
/// characters `[i, i + len)`.
///
/// If `len` is longer than the string itself, an empty vector is returned.
///
/// # Errors
/// Returns `NGramError::InvalidArgument` if `len == 0`, before the
/// string is inspected.
///
/// # Example
/// ```
/// let grams = ngram_core::extract("hello", 4).unwrap();
/// assert_eq!(grams, ["hell", "ello"]);
/// ```
pub fn extract(s: &str, len: usize) -> Result<Vec<String>> {
	check_length("len", len)?;
	Ok(extract_unchecked(s, len))
}

/// Gets pairs of n-grams from a string with the specified lengths.
///
/// For each window start `i` (advancing one character at a time), emits
/// the `len_a` characters starting at `i` followed by the `len_b`
/// characters starting at `i + len_a`. Consecutive pairs overlap.
///
/// Given `"foobar"` with lengths 3 and 2, the result is
/// `["foo", "ba", "oob", "ar"]`.
///
/// If the string is shorter than `len_a + len_b`, an empty vector is returned.
///
/// # Errors
/// Returns `NGramError::InvalidArgument` if either length is zero.
pub fn extract_paired(s: &str, len_a: usize, len_b: usize) -> Result<Vec<String>> {
	check_length("len_a", len_a)?;
	check_length("len_b", len_b)?;
	Ok(extract_paired_unchecked(s, len_a, len_b))
}

/// `extract` without the length check. `len` must be >= 1.
pub(crate) fn extract_unchecked(s: &str, len: usize) -> Vec<String> {
	let bounds = char_boundaries(s);
	let count = bounds.len() - 1;
	if count < len {
		return Vec::new();
	}

	(0..=count - len)
		.map(|i| s[bounds[i]..bounds[i + len]].to_owned())
		.collect()
}

/// `extract_paired` without the length checks. Both lengths must be >= 1.
pub(crate) fn extract_paired_unchecked(s: &str, len_a: usize, len_b: usize) -> Vec<String> {
	let bounds = char_boundaries(s);
	let count = bounds.len() - 1;
	let window = match len_a.checked_add(len_b) {
		Some(w) if w <= count => w,
		_ => return Vec::new(),
	};

	let num = count - window + 1;
	let mut ret = Vec::with_capacity(2 * num);
	for i in 0..num {
		ret.push(s[bounds[i]..bounds[i + len_a]].to_owned());
		ret.push(s[bounds[i + len_a]..bounds[i + window]].to_owned());
	}
	ret
}
