use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ngram_core::{for_each_window, Window};

/// Opens a line source: the given file, or stdin when `path` is `None`.
pub fn open_source(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Applies `window` to every line read from `reader`, one callback per line.
///
/// - Lines are pulled lazily, the whole input is never held in memory
/// - Line terminators (`\n` / `\r\n`) are stripped before extraction
/// - A read error stops the iteration; lines already handed to `callback` stay handed
pub fn for_each_line<R, F>(reader: R, window: &Window, callback: F) -> Result<(), Box<dyn Error>>
where
    R: BufRead,
    F: FnMut(Vec<String>),
{
    let mut failure = None;
    let lines = reader
        .lines()
        .map_while(|line| line.map_err(|e| failure = Some(e)).ok());

    for_each_window(lines, window, callback)?;

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
