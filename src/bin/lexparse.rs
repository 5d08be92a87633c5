//! Command-line interface for lexparse
//! Runs language definitions and automaton descriptions against input and
//! prints what each stage produced.
//!
//! Usage:
//!   lexparse tokens `<definition>` `<input>` [--format table|json]
//!       Tokenize input
//!   lexparse parse `<definition>` `<input>` [--format `<format>`] [--trace]
//!       Parse input and print the tree
//!   lexparse language `<definition>`
//!       Print the terminal and rule tables of a definition
//!   lexparse automaton `<description>` [--minimize]
//!       Subset-construct (and minimize) an NFA
//!
//! `<input>` may be `-` to read standard input. Repeat `-v` for more logging, or
//! set `LEXPARSE_LOG` to a tracing filter such as `lexparse=trace`.

use clap::{Arg, ArgAction, Command};
use lexparse::automata::{AutomatonDefinition, Dfa};
use lexparse::definition::{Language, LanguageDefinition};
use lexparse::formats::{
    dfa_table, grammar_table, parse_trace_table, terminal_table, token_table, FormatRegistry,
};
use lexparse::lexing::tokenize;
use lexparse::parsing::parse;
use lexparse::set::Set;
use std::error::Error;
use std::io::Read;
use tracing_subscriber::EnvFilter;

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    let registry = FormatRegistry::with_defaults();
    let format_help = format!("Tree output format ({})", registry.list_formats().join(", "));

    let matches = Command::new("lexparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Step through lexing, parsing and automaton construction")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase logging (-v info, -vv debug, -vvv trace)"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize input with a language definition")
                .arg(definition_arg())
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Token output format")
                        .value_parser(["table", "json"])
                        .default_value("table"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse input with a language definition")
                .arg(definition_arg())
                .arg(input_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help(format_help)
                        .default_value("treeviz"),
                )
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .action(ArgAction::SetTrue)
                        .help("Print every parse step before the tree"),
                ),
        )
        .subcommand(
            Command::new("language")
                .about("Print the terminals and rules of a language definition")
                .arg(definition_arg()),
        )
        .subcommand(
            Command::new("automaton")
                .about("Build the DFA for an NFA description")
                .arg(
                    Arg::new("description")
                        .help("Path to the automaton description (.yaml, .yml or .json)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("minimize")
                        .long("minimize")
                        .action(ArgAction::SetTrue)
                        .help("Also print the minimized DFA"),
                ),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let definition = tokens_matches.get_one::<String>("definition").unwrap();
            let input = tokens_matches.get_one::<String>("input").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(definition, input, format)
        }
        Some(("parse", parse_matches)) => {
            let definition = parse_matches.get_one::<String>("definition").unwrap();
            let input = parse_matches.get_one::<String>("input").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            let trace = parse_matches.get_flag("trace");
            handle_parse_command(&registry, definition, input, format, trace)
        }
        Some(("language", language_matches)) => {
            let definition = language_matches.get_one::<String>("definition").unwrap();
            handle_language_command(definition)
        }
        Some(("automaton", automaton_matches)) => {
            let description = automaton_matches.get_one::<String>("description").unwrap();
            let minimize = automaton_matches.get_flag("minimize");
            handle_automaton_command(description, minimize)
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn definition_arg() -> Arg {
    Arg::new("definition")
        .help("Path to the language definition (.yaml, .yml or .json)")
        .required(true)
        .index(1)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the input text, or - for standard input")
        .required(true)
        .index(2)
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("LEXPARSE_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn load_language(path: &str) -> Result<Language, Box<dyn Error>> {
    Ok(LanguageDefinition::load(path)?.compile()?)
}

/// Handle the tokens command
fn handle_tokens_command(definition: &str, input: &str, format: &str) -> CliResult {
    let language = load_language(definition)?;
    let text = read_input(input)?;
    let tokens = tokenize(&text, &language.terminals)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&tokens)?),
        _ => print!("{}", token_table(&tokens)),
    }
    Ok(())
}

/// Handle the parse command
fn handle_parse_command(
    registry: &FormatRegistry,
    definition: &str,
    input: &str,
    format: &str,
    trace: bool,
) -> CliResult {
    let language = load_language(definition)?;
    let text = read_input(input)?;
    let tokens = tokenize(&text, &language.terminals)?;
    let outcome = parse(&language.grammar, &tokens)?;

    if trace {
        println!("{}", parse_trace_table(&outcome.trace));
    }
    print!("{}", registry.serialize(&outcome.tree, format)?);
    Ok(())
}

/// Handle the language command
fn handle_language_command(definition: &str) -> CliResult {
    let language = load_language(definition)?;
    print!("{}", terminal_table(&language.terminals));
    println!();
    print!("{}", grammar_table(&language.grammar));
    Ok(())
}

/// Handle the automaton command
fn handle_automaton_command(path: &str, minimize: bool) -> CliResult {
    let nfa = AutomatonDefinition::load(path)?.to_nfa();
    let closure = nfa.epsilon_closure(&Set::from([nfa.start()]));
    println!("epsilon-closure({}) = {:?}", nfa.start(), closure);

    let (dfa, state_map) = Dfa::from_subset_construction(&nfa);
    println!("\nDFA ({} states)", dfa.n_states());
    print!("{}", dfa_table(&dfa, &state_map));

    if minimize {
        let (minimal, groups) = Dfa::from_minimization(&dfa);
        println!("\nMinimized DFA ({} states)", minimal.n_states());
        print!("{}", dfa_table(&minimal, &groups));
    }
    Ok(())
}
