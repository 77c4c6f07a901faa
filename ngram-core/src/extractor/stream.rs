use log::trace;

use super::window::Window;
use crate::error::Result;

/// Runs a procedure for each string of the given source.
///
/// For each element, in source order, computes `extract(element, len)`
/// and hands the result to `callback` before pulling the next element.
///
/// # Errors
/// Returns `InvalidArgument` if `len == 0`. The length is checked once,
/// before the source is touched, so an invalid call fails immediately
/// even for an empty or unbounded source.
pub fn for_each<I, F>(source: I, len: usize, callback: F) -> Result<()>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
	F: FnMut(Vec<String>),
{
	for_each_window(source, &Window::single(len)?, callback)
}

/// Runs a procedure for each string of the given source, using paired extraction.
///
/// Same contract as `for_each`, delegating to `extract_paired`.
pub fn for_each_paired<I, F>(source: I, len_a: usize, len_b: usize, callback: F) -> Result<()>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
	F: FnMut(Vec<String>),
{
	for_each_window(source, &Window::paired(len_a, len_b)?, callback)
}

/// Runs a procedure for each string of the given source, with any window.
pub fn for_each_window<I, F>(source: I, window: &Window, mut callback: F) -> Result<()>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
	F: FnMut(Vec<String>),
{
	window.validate()?;
	for (index, element) in source.into_iter().enumerate() {
		let grams = window.apply_validated(element.as_ref());
		trace!("element {index}: {} n-grams", grams.len());
		callback(grams);
	}
	Ok(())
}

/// Lazy adapter yielding one n-gram vector per source element.
///
/// Built by `ngrams`. Each call to `next` pulls exactly one element from
/// the source; nothing is computed ahead.
#[derive(Clone, Debug)]
pub struct NGrams<I> {
	source: I,
	window: Window,
}

impl<I> Iterator for NGrams<I>
where
	I: Iterator,
	I::Item: AsRef<str>,
{
	type Item = Vec<String>;

	fn next(&mut self) -> Option<Self::Item> {
		let element = self.source.next()?;
		Some(self.window.apply_validated(element.as_ref()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.source.size_hint()
	}
}

/// Wraps `source` into an iterator of per-element extraction results.
///
/// # Errors
/// Returns `InvalidArgument` if `window` holds a zero length.
///
/// # Example
/// ```
/// use ngram_core::{ngrams, Window};
///
/// let window = Window::single(2).unwrap();
/// let mut it = ngrams(["abc", "de"], window).unwrap();
/// assert_eq!(it.next().unwrap(), ["ab", "bc"]);
/// assert_eq!(it.next().unwrap(), ["de"]);
/// assert!(it.next().is_none());
/// ```
pub fn ngrams<I>(source: I, window: Window) -> Result<NGrams<I::IntoIter>>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	window.validate()?;
	Ok(NGrams { source: source.into_iter(), window })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{extract, extract_paired};

	#[test]
	fn test_for_each_order_and_results() {
		let lines = ["hello there!", "hi", "hello"];
		let mut seen = Vec::new();
		for_each(lines, 4, |grams| seen.push(grams)).unwrap();

		assert_eq!(seen.len(), 3);
		for (line, grams) in lines.iter().zip(&seen) {
			assert_eq!(*grams, extract(line, 4).unwrap());
		}
		// Too-short elements still get a callback, with an empty result
		assert!(seen[1].is_empty());
	}

	#[test]
	fn test_for_each_paired() {
		let lines = vec!["foobar".to_owned(), "hello world".to_owned()];
		let mut seen = Vec::new();
		for_each_paired(&lines, 3, 2, |grams| seen.push(grams)).unwrap();

		assert_eq!(seen[0], ["foo", "ba", "oob", "ar"]);
		assert_eq!(seen[1], extract_paired("hello world", 3, 2).unwrap());
	}

	#[test]
	fn test_invalid_length_short_circuits() {
		let mut calls = 0;
		let err = for_each(["abc", "def"], 0, |_| calls += 1).unwrap_err();
		assert!(err.is_invalid_argument());
		assert_eq!(calls, 0);

		let err = for_each_paired(["abcdef"], 1, 0, |_| calls += 1).unwrap_err();
		assert!(err.is_invalid_argument());
		assert_eq!(calls, 0);

		// Validated once up front, even when there is nothing to pull
		let err = for_each_paired(Vec::<String>::new(), 0, 2, |_| calls += 1).unwrap_err();
		assert!(err.is_invalid_argument());
	}

	#[test]
	fn test_callback_runs_before_next_pull() {
		use std::cell::RefCell;

		let events = RefCell::new(Vec::new());
		let source = ["ab", "cd"].into_iter().inspect(|s| events.borrow_mut().push(format!("pull {s}")));
		for_each(source, 2, |grams| events.borrow_mut().push(format!("emit {}", grams.concat()))).unwrap();

		assert_eq!(*events.borrow(), ["pull ab", "emit ab", "pull cd", "emit cd"]);
	}

	#[test]
	fn test_ngrams_iterator_is_lazy_over_unbounded_source() {
		let source = std::iter::repeat("xyz");
		let window = Window::paired(1, 1).unwrap();
		let first: Vec<Vec<String>> = ngrams(source, window).unwrap().take(2).collect();
		assert_eq!(first, [["x", "y", "y", "z"], ["x", "y", "y", "z"]]);
	}

	#[test]
	fn test_ngrams_rejects_invalid_window() {
		assert!(ngrams(["abc"], Window::Single { len: 0 }).is_err());
	}
}
