use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hanmal::{format_json, format_text, tokenize_with_profile};
use hanmal_core::TokenizerProfile;
use hanmal_dictionary::WordListDictionary;

/// Korean morphological analysis from the command line.
#[derive(Parser, Debug)]
#[command(name = "hanmal", version, about, author)]
struct Cli {
    /// The input file path that contains the text for morphological
    /// analysis. If not specified, reads from stdin, one line at a time.
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// (Optional) A JSON file of `TokenizerProfile` field overrides. If not
    /// specified, the default profile is used.
    #[arg(short, long, value_name = "PROFILE")]
    profile: Option<PathBuf>,

    /// The output format: `text` or `json`.
    #[arg(short, long, value_name = "OUTPUT", default_value = "text")]
    output: String,
}

fn load_profile(path: Option<&PathBuf>) -> Result<TokenizerProfile> {
    let Some(path) = path else {
        return Ok(TokenizerProfile::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading profile file {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing profile file {}", path.display()))
}

fn run_line(
    line: &str,
    dictionary: &WordListDictionary,
    profile: &TokenizerProfile,
    output_format: &str,
) -> Result<()> {
    let tokens = tokenize_with_profile(line, dictionary, profile)?;
    match output_format {
        "json" => println!("{}", format_json(&tokens)?),
        _ => println!("{}", format_text(&tokens)),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = WordListDictionary::new();
    let profile = load_profile(cli.profile.as_ref())?;

    if let Some(input_file) = &cli.input_file {
        let contents = fs::read_to_string(input_file)
            .with_context(|| format!("reading input file {}", input_file.display()))?;
        for line in contents.lines() {
            run_line(line, &dictionary, &profile, &cli.output)?;
        }
    } else {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("reading line from stdin")?;
            run_line(&line, &dictionary, &profile, &cli.output)?;
        }
    }
    Ok(())
}
