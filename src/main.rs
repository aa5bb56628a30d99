use std::{env, process::ExitCode};

use anyhow::{anyhow, Result};
use clap::Parser;
use lexan::{
    config::{ScannerConfig, DEFAULT_MAX_LEXEME_LEN},
    display_error,
    lexer::{lexer::Scanner, tokens::Token},
    report::Summary,
};

const SAMPLE_EXPRESSIONS: [&str; 2] = ["(sum + 47) / total", "x = y * (z - 5)"];

#[derive(Parser)]
#[command(name = "lexan")]
#[command(about = "Lexical analyzer for arithmetic-assignment expressions", long_about = None)]
struct Cli {
    /// Expressions to analyse (defaults to two built-in samples)
    expressions: Vec<String>,

    /// Longest lexeme kept before further characters are dropped
    #[arg(long, default_value_t = DEFAULT_MAX_LEXEME_LEN)]
    max_lexeme_len: usize,

    /// Do not log each token as it is scanned
    #[arg(short, long)]
    quiet: bool,
}

fn analyse(expression: &str, config: ScannerConfig) -> Result<Summary> {
    println!("Testing expression: \"{}\"\n", expression);

    let mut scanner =
        Scanner::with_config(expression, None, config).map_err(|e| anyhow!("{}", e))?;
    let tokens: Vec<Token> = scanner.by_ref().collect();

    for error in scanner.take_diagnostics() {
        display_error(&error, expression);
    }

    Ok(Summary::new(expression, tokens))
}

fn entrypoint() -> Result<()> {
    let filters = env::var("RUST_LOG").unwrap_or_else(|_| String::from("lexan=debug"));
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();

    let cli = Cli::parse();
    let config = ScannerConfig::default()
        .with_max_lexeme_len(cli.max_lexeme_len)
        .with_trace_tokens(!cli.quiet);

    let expressions = if cli.expressions.is_empty() {
        SAMPLE_EXPRESSIONS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.expressions
    };

    println!("LEXICAL ANALYZER TEST");
    println!("=====================");

    for expression in &expressions {
        let summary = analyse(expression, config)?;
        println!("\n{}", summary);
        println!("End of analysis\n");
    }

    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
