use chrono::prelude::*;
use std::error::Error;
use std::{path::Path, time::Instant};

use distance::levenshtein;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use structopt::clap::{App, AppSettings, Arg};
use triespell::speller::suggestion::Suggestion;
use triespell::speller::{Speller, SpellerConfig, TrieSpeller};

static CFG: SpellerConfig = SpellerConfig::default();

fn load_words(
    path: &str,
    max_words: Option<usize>,
) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    Ok(rdr
        .records()
        .filter_map(Result::ok)
        .filter_map(|r| {
            r.get(0)
                .and_then(|x| r.get(1).map(|y| (x.to_string(), y.to_string())))
        })
        .take(max_words.unwrap_or(usize::MAX))
        .collect())
}

#[derive(Debug, Default, Serialize, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
struct Time {
    secs: u64,
    subsec_nanos: u32,
}

impl Time {
    fn since(start: Instant) -> Time {
        let elapsed = start.elapsed();
        Time {
            secs: elapsed.as_secs(),
            subsec_nanos: elapsed.subsec_nanos(),
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let ms = self.secs * 1000 + (self.subsec_nanos as u64 / 1_000_000);
        write!(f, "{}ms", ms)
    }
}

#[derive(Debug, Serialize)]
struct AccuracyResult<'a> {
    input: &'a str,
    expected: &'a str,
    distance: usize,
    is_correct: bool,
    suggestions: Vec<Suggestion>,
    found: bool,
    time: Time,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    dictionary: &'a str,
    dictionary_size: usize,
    config: &'a SpellerConfig,
    summary: Summary,
    results: Vec<AccuracyResult<'a>>,
    start_timestamp: String,
    total_time: Time,
}

#[derive(Serialize, Default, Debug, Clone)]
struct Summary {
    total_words: u32,
    already_correct: u32,
    found: u32,
    out_of_reach: u32,
    no_suggestions: u32,
    only_wrong: u32,
    average_suggestions: f32,
    slowest_lookup: Time,
    fastest_lookup: Time,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let percent = |v: u32| -> String {
            if self.total_words == 0 {
                return "-".to_string();
            }
            format!("{:.2}%", v as f32 / self.total_words as f32 * 100f32)
        };

        write!(
            f,
            "[found] {} [correct] {} [none] {} [wrong] {} [far] {} [avg] {:.1} [fast] {} [slow] {}",
            percent(self.found),
            percent(self.already_correct),
            percent(self.no_suggestions),
            percent(self.only_wrong),
            percent(self.out_of_reach),
            self.average_suggestions,
            self.fastest_lookup,
            self.slowest_lookup
        )
    }
}

impl Summary {
    fn new(results: &[AccuracyResult<'_>], config: &SpellerConfig) -> Summary {
        let mut summary = Summary::default();
        let mut suggestion_count = 0usize;

        results.iter().for_each(|result| {
            summary.total_words += 1;
            suggestion_count += result.suggestions.len();

            if result.distance > config.max_distance {
                summary.out_of_reach += 1;
            }

            if result.is_correct {
                summary.already_correct += 1;
            } else if result.found {
                summary.found += 1;
            } else if result.suggestions.is_empty() {
                summary.no_suggestions += 1;
            } else {
                summary.only_wrong += 1;
            }
        });

        if !results.is_empty() {
            summary.average_suggestions = suggestion_count as f32 / results.len() as f32;
        }

        summary.slowest_lookup = results.iter().map(|x| x.time).max().unwrap_or_default();
        summary.fastest_lookup = results.iter().map(|x| x.time).min().unwrap_or_default();

        summary
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let matches = App::new("triespell-accuracy")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Accuracy testing for triespell word lists.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .takes_value(true)
                .help("Provide JSON config file to override test defaults"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .required(true)
                .help("The 'input -> expected' list in tab-delimited value file (TSV)"),
        )
        .arg(
            Arg::with_name("dictionary")
                .value_name("DICTIONARY")
                .required(true)
                .help("Word list to check against, one word per line"),
        )
        .arg(
            Arg::with_name("json-output")
                .short("o")
                .value_name("JSON-OUTPUT")
                .help("The file path for the JSON report output"),
        )
        .arg(
            Arg::with_name("max-words")
                .short("w")
                .takes_value(true)
                .help("Truncate typos list to max number of words specified"),
        )
        .get_matches();

    let cfg: SpellerConfig = match matches.value_of("config") {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(file)?
        }
        None => CFG.clone(),
    };

    let dictionary = matches.value_of("dictionary").unwrap_or_default();
    let speller = TrieSpeller::open(Path::new(dictionary))?;

    let words = load_words(
        matches.value_of("words").unwrap_or_default(),
        matches
            .value_of("max-words")
            .and_then(|x| x.parse::<usize>().ok()),
    )?;

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} [{percent}%] {wide_bar} {elapsed_precise}"),
    );

    let start_timestamp = Local::now().to_rfc3339();
    let start_time = Instant::now();
    let results = words
        .par_iter()
        .progress_with(pb)
        .map(|(input, expected)| {
            let now = Instant::now();
            let is_correct = speller.clone().is_correct(input);
            let suggestions = if is_correct {
                vec![]
            } else {
                speller.nearest(input, &cfg)
            };
            let time = Time::since(now);

            let found = suggestions.iter().any(|x| x.value == expected.as_str());
            let distance = levenshtein(input, expected);
            AccuracyResult {
                input,
                expected,
                distance,
                is_correct,
                suggestions,
                found,
                time,
            }
        })
        .collect::<Vec<_>>();
    let total_time = Time::since(start_time);

    let summary = Summary::new(&results, &cfg);
    println!("{}", summary);

    if let Some(path) = matches.value_of("json-output") {
        let output = std::fs::File::create(path)?;
        let report = Report {
            dictionary,
            dictionary_size: speller.trie().len(),
            config: &cfg,
            summary,
            results,
            start_timestamp,
            total_time,
        };
        println!("Writing JSON report…");
        serde_json::to_writer_pretty(output, &report)?;
    }

    println!("Done!");
    Ok(())
}
