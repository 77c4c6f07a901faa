use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use ngram_core::{extract, extract_paired, for_each, NGramError, Window};

mod io;

use io::{for_each_line, open_source};

/// Prints the n-grams of each input line, `|`-separated.
///
/// Without a length, runs a short showcase on built-in strings.
#[derive(Parser, Debug)]
#[command(name = "ngram-exemple", version)]
struct Cli {
    /// Length of each n-gram (of the first n-gram of each pair with --len-b)
    len: Option<usize>,

    /// File to read, stdin when omitted
    file: Option<PathBuf>,

    /// Length of the second n-gram of each pair, enables paired extraction
    #[arg(long, requires = "len")]
    len_b: Option<usize>,
}

impl Cli {
    /// The window described by the arguments, `None` for the showcase.
    fn window(&self) -> Result<Option<Window>, NGramError> {
        match (self.len, self.len_b) {
            (None, _) => Ok(None),
            (Some(len), None) => Window::single(len).map(Some),
            (Some(len_a), Some(len_b)) => Window::paired(len_a, len_b).map(Some),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(window) = cli.window()? else {
        return showcase();
    };

    let source = cli.file.as_deref();
    info!("window {:?}, source {}", window, source.map_or("<stdin>".into(), |p| p.display().to_string()));
    debug!("lines shorter than {} characters yield nothing", window.span());

    // Each line is printed as soon as it is read
    let mut lines = 0usize;
    for_each_line(open_source(source)?, &window, |grams| {
        lines += 1;
        println!("{}", grams.join("|"));
    })?;

    info!("{lines} lines processed");
    Ok(())
}

/// Prints a few extractions on fixed inputs.
fn showcase() -> Result<(), Box<dyn std::error::Error>> {
    // Every window of 4 characters, stride 1
    println!("{:?}", extract("hello there!", 4)?);

    // Window longer than the input: empty, not an error
    println!("{:?}", extract("hello!", 10)?);

    // Alternating 3 then 2 characters, window start advancing by 1
    println!("{:?}", extract_paired("foobar", 3, 2)?);

    // A zero length is the only error
    match extract("x", 0) {
        Ok(_) => println!("Should not happen"),
        Err(NGramError::InvalidArgument(msg)) => println!("Rejected: {msg}"),
    }

    // Streaming over a sequence of strings, one callback per element
    let corpus = ["the cat", "sat", "on the mat"];
    for_each(corpus, 3, |grams| println!("{} n-grams: {:?}", grams.len(), grams))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ngram-exemple").chain(args.iter().copied()))
    }

    #[test]
    fn single_window_from_stdin() {
        let cli = parse(&["4"]).unwrap();
        assert_eq!(cli.window().unwrap(), Some(Window::Single { len: 4 }));
        assert!(cli.file.is_none());
    }

    #[test]
    fn paired_window_with_file() {
        let cli = parse(&["3", "--len-b", "2", "corpus.txt"]).unwrap();
        assert_eq!(cli.window().unwrap(), Some(Window::Paired { len_a: 3, len_b: 2 }));
        assert_eq!(cli.file, Some(PathBuf::from("corpus.txt")));
    }

    #[test]
    fn no_arguments_runs_showcase() {
        assert_eq!(parse(&[]).unwrap().window().unwrap(), None);
    }

    #[test]
    fn negative_lengths_are_rejected() {
        assert!(parse(&["-3"]).is_err());
        assert!(parse(&["3", "-2"]).is_err());
        assert!(parse(&["3", "--len-b", "-2"]).is_err());
    }

    #[test]
    fn zero_lengths_are_rejected() {
        assert!(parse(&["0"]).unwrap().window().unwrap_err().is_invalid_argument());
        assert!(parse(&["3", "--len-b", "0"]).unwrap().window().is_err());
    }

    #[test]
    fn second_length_needs_a_first() {
        assert!(parse(&["--len-b", "2"]).is_err());
    }
}
