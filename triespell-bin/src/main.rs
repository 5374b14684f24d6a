use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use triespell::dictionary::save_dictionary;
use triespell::speller::suggestion::Suggestion;
use triespell::speller::{Speller, SpellerConfig, TrieSpeller};
use triespell::tokenizer::{normalize_word, InputError};

const EXIT_COMMAND: &str = "exit";
const PROMPT: &str = "Enter a word (type 'exit' to quit): ";

trait OutputWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool);
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if is_correct { "CORRECT" } else { "INCORRECT" }
        );
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        for sugg in suggestions {
            println!("{}\t\t{}", sugg.value, sugg.distance);
        }
        println!();
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionRequest {
    word: String,
    is_correct: bool,
    suggestions: Vec<Suggestion>,
}

#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonWriter {
    results: Vec<SuggestionRequest>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        Self::default()
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        self.results.push(SuggestionRequest {
            word: word.to_owned(),
            is_correct,
            suggestions: vec![],
        });
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        if let Some(last) = self.results.last_mut() {
            last.suggestions = suggestions.to_vec();
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

fn run(
    speller: Arc<TrieSpeller>,
    words: Vec<String>,
    writer: &mut dyn OutputWriter,
    is_always_suggesting: bool,
    suggest_cfg: &SpellerConfig,
) {
    for word in words {
        let is_correct = speller.clone().is_correct(&word);
        writer.write_correction(&word, is_correct);

        if is_always_suggesting {
            writer.write_suggestions(&word, &speller.nearest(&word, suggest_cfg));
        } else if !is_correct {
            let suggestions = speller.clone().suggest_with_config(&word, suggest_cfg);
            writer.write_suggestions(&word, &suggestions);
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(
        help = "word list to load, one word per line",
        meta = "PATH",
        default = "words.txt"
    )]
    dictionary: PathBuf,

    #[options(help = "JSON file overriding the suggestion config", meta = "PATH")]
    config: Option<PathBuf>,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "get suggestions for provided input")]
    Suggest(SuggestArgs),

    #[options(help = "check words interactively, one per line")]
    Repl(ReplArgs),

    #[options(help = "write the loaded word list back out, sorted and deduplicated")]
    Export(ExportArgs),
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "S", help = "always show suggestions even if word is correct")]
    always_suggest: bool,

    #[options(help = "maximum edit distance for suggestions")]
    max_distance: Option<usize>,

    #[options(help = "count a swap of adjacent letters as one edit")]
    transpositions: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct ReplArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "maximum edit distance for suggestions")]
    max_distance: Option<usize>,
}

#[derive(Debug, Options)]
struct ExportArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(free, required, help = "file to write")]
    output: PathBuf,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SpellerConfig> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(SpellerConfig::default()),
    }
}

fn load_speller(path: &Path) -> anyhow::Result<Arc<TrieSpeller>> {
    let speller = TrieSpeller::open(path)?;
    log::info!(
        "Loaded {} words from {}",
        speller.trie().len(),
        path.display()
    );
    Ok(speller)
}

fn suggest(
    speller: Arc<TrieSpeller>,
    mut suggest_cfg: SpellerConfig,
    args: SuggestArgs,
) -> anyhow::Result<()> {
    if let Some(v) = args.max_distance {
        suggest_cfg.max_distance = v;
    }

    if args.transpositions {
        suggest_cfg.transpositions = true;
    }

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let words = if args.inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
            .lines()
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        args.inputs
    };

    run(
        speller,
        words,
        &mut *writer,
        args.always_suggest,
        &suggest_cfg,
    );

    writer.finish()
}

/// What the interactive loop prints for one line of input, or `None` when
/// the line is blank.
fn respond(
    speller: &Arc<TrieSpeller>,
    line: &str,
    config: &SpellerConfig,
) -> Option<Result<String, InputError>> {
    let word = match normalize_word(line) {
        Ok(word) => word,
        Err(InputError::Empty) => return None,
        Err(e) => return Some(Err(e)),
    };

    if speller.clone().is_correct(&word) {
        return Some(Ok(format!("{} is a valid word.", word)));
    }

    let suggestions = speller.clone().suggest_with_config(&word, config);
    if suggestions.is_empty() {
        return Some(Ok("No suggestions available.".to_string()));
    }

    let values = suggestions
        .iter()
        .map(Suggestion::value)
        .collect::<Vec<_>>();
    Some(Ok(format!("Did you mean: {}?", values.join(", "))))
}

fn repl(
    speller: Arc<TrieSpeller>,
    mut config: SpellerConfig,
    args: ReplArgs,
) -> anyhow::Result<()> {
    if let Some(v) = args.max_distance {
        config.max_distance = v;
    }

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }

        if line.trim().to_lowercase() == EXIT_COMMAND {
            break;
        }

        match respond(&speller, &line, &config) {
            Some(Ok(reply)) => writeln!(stdout, "{}", reply)?,
            Some(Err(e)) => eprintln!("{}", e),
            None => {}
        }
    }

    Ok(())
}

fn export(speller: Arc<TrieSpeller>, args: ExportArgs) -> anyhow::Result<()> {
    save_dictionary(&args.output, speller.trie())
        .with_context(|| format!("writing {}", args.output.display()))?;
    eprintln!(
        "Wrote {} words to {}",
        speller.trie().len(),
        args.output.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    let command = match args.command {
        None => {
            eprintln!("{}", Args::usage());
            if let Some(commands) = Args::command_list() {
                eprintln!("\nAvailable commands:\n{}", commands);
            }
            return Ok(());
        }
        Some(command) => command,
    };

    let config = load_config(args.config.as_deref())?;
    let speller = load_speller(&args.dictionary)?;

    match command {
        Command::Suggest(args) => suggest(speller, config, args),
        Command::Repl(args) => repl(speller, config, args),
        Command::Export(args) => export(speller, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller() -> Arc<TrieSpeller> {
        TrieSpeller::new(["cat", "cart", "cats", "dog"].iter().collect())
    }

    fn reply(line: &str) -> Option<Result<String, InputError>> {
        respond(&speller(), line, &SpellerConfig::default())
    }

    #[test]
    fn valid_word() {
        assert_eq!(reply("Cat\n"), Some(Ok("cat is a valid word.".to_string())));
    }

    #[test]
    fn suggestions() {
        assert_eq!(
            reply("cas"),
            Some(Ok("Did you mean: cart, cat, cats?".to_string()))
        );
    }

    #[test]
    fn no_suggestions() {
        assert_eq!(
            reply("xyz"),
            Some(Ok("No suggestions available.".to_string()))
        );
    }

    #[test]
    fn rejected_input() {
        assert_eq!(reply("   "), None);
        assert!(matches!(reply("c4t"), Some(Err(InputError::NotAlphabetic(_)))));
    }

    #[test]
    fn json_output_shape() {
        let mut writer = JsonWriter::new();
        run(
            speller(),
            vec!["cat".to_string(), "cap".to_string()],
            &mut writer,
            false,
            &SpellerConfig {
                max_distance: 1,
                transpositions: false,
            },
        );

        let json = serde_json::to_value(&writer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "results": [
                    { "word": "cat", "isCorrect": true, "suggestions": [] },
                    {
                        "word": "cap",
                        "isCorrect": false,
                        "suggestions": [{ "value": "cat", "distance": 1 }]
                    }
                ]
            })
        );
    }

    #[test]
    fn always_suggest_includes_correct_words() {
        let mut writer = JsonWriter::new();
        run(
            speller(),
            vec!["cat".to_string()],
            &mut writer,
            true,
            &SpellerConfig::default(),
        );

        assert_eq!(writer.results.len(), 1);
        let request = &writer.results[0];
        assert!(request.is_correct);
        assert_eq!(
            request
                .suggestions
                .iter()
                .map(Suggestion::value)
                .collect::<Vec<_>>(),
            vec!["cart", "cat", "cats"]
        );
    }
}
