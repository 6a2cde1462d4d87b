/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand, ValueEnum};
use namefmt_core::{FormatConfig, MarkupMode};
use namefmt_processor::{
    compile,
    io::load_names,
    pattern::{ComponentSource, Token},
    Markup, NameFormatter, ProcessorError,
};
#[cfg(feature = "schema")]
use schemars::schema_for;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format the names in a YAML/JSON file
    Format {
        /// Path to a file holding one name mapping or a list of them
        #[arg(index = 1)]
        names: PathBuf,

        /// Name format identifier
        #[arg(short, long)]
        format: Option<String>,

        /// Join all names with this list format instead of one per line
        #[arg(short, long)]
        list: Option<String>,

        /// Extra formats layered over the builtin ones
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Markup mode
        #[arg(short, long, value_enum)]
        markup: Option<MarkupArg>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Output::Plain)]
        output: Output,
    },
    /// Compile a pattern and show its tokens
    Check {
        pattern: String,
    },
    /// List the configured name and list formats
    Formats {
        /// Extra formats layered over the builtin ones
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the merged configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate JSON schema for format configuration files
    #[cfg(feature = "schema")]
    Schema,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Output {
    Plain,
    Html,
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Plain => write!(f, "plain"),
            Output::Html => write!(f, "html"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum MarkupArg {
    None,
    Simple,
    Html,
    Raw,
}

impl From<MarkupArg> for MarkupMode {
    fn from(arg: MarkupArg) -> Self {
        match arg {
            MarkupArg::None => MarkupMode::None,
            MarkupArg::Simple => MarkupMode::Simple,
            MarkupArg::Html => MarkupMode::Html,
            MarkupArg::Raw => MarkupMode::Raw,
        }
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            names,
            format,
            list,
            config,
            markup,
            output,
        } => {
            let mut formatter = load_formatter(config.as_deref())
                .unwrap_or_else(|e| exit_with("Error loading formats", e));
            if let Some(markup) = markup {
                formatter
                    .set_setting("markup", MarkupMode::from(markup).as_str())
                    .unwrap_or_else(|e| exit_with("Error", e));
            }

            let names = load_names(&names).unwrap_or_else(|e| exit_with("Error reading names", e));
            debug!(count = names.len(), "loaded names");

            let render = |markup: &Markup| match output {
                Output::Plain => markup.to_text(),
                Output::Html => markup.to_html(),
            };

            if list.is_some() {
                let joined = formatter
                    .format_list(&names, format.as_deref(), list.as_deref())
                    .unwrap_or_else(|e| exit_with("Error formatting names", e));
                println!("{}", render(&joined));
            } else {
                for name in &names {
                    let formatted = formatter
                        .format(name, format.as_deref())
                        .unwrap_or_else(|e| exit_with("Error formatting name", e));
                    println!("{}", render(&formatted));
                }
            }
        }
        Commands::Check { pattern } => match compile(&pattern) {
            Ok(compiled) => {
                println!("Pattern {:?} compiles to {} tokens:", pattern, compiled.tokens().len());
                for token in compiled.tokens() {
                    print_token(token, 1);
                }
            }
            Err(e) => exit_with("Invalid pattern", e),
        },
        Commands::Formats { config, json } => {
            let formatter = load_formatter(config.as_deref())
                .unwrap_or_else(|e| exit_with("Error loading formats", e));
            if json {
                match serde_json::to_string_pretty(formatter.config()) {
                    Ok(out) => println!("{}", out),
                    Err(e) => exit_with("Error serializing formats", e),
                }
            } else {
                print_formats(&formatter);
            }
        }
        #[cfg(feature = "schema")]
        Commands::Schema => {
            let schema = schema_for!(FormatConfig);
            match serde_json::to_string_pretty(&schema) {
                Ok(out) => println!("{}", out),
                Err(e) => exit_with("Error serializing schema", e),
            }
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("namefmt=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(context: &str, error: impl Display) -> ! {
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}

fn load_formatter(config: Option<&Path>) -> Result<NameFormatter, ProcessorError> {
    let config = match config {
        Some(path) => FormatConfig::with_builtins(&FormatConfig::load(path)?)?,
        None => FormatConfig::builtin()?,
    };
    Ok(NameFormatter::new(config))
}

fn print_token(token: &Token, depth: usize) {
    let indent = "  ".repeat(depth);
    match token {
        Token::Component(component) => {
            let source = match component.source {
                ComponentSource::Single(kind) => kind.to_string(),
                ComponentSource::Either(first, second) => format!("{} or {}", first, second),
            };
            let initial = if component.initial { " (initial)" } else { "" };
            println!("{}component {}{}", indent, source, initial);
        }
        Token::Literal(text) => println!("{}literal {:?}", indent, text),
        Token::Separator(index) => println!("{}separator sep{}", indent, index),
        Token::Group(tokens) => {
            println!("{}group", indent);
            for token in tokens {
                print_token(token, depth + 1);
            }
        }
        Token::Modified { modifiers, token } => {
            println!("{}modified {:?}", indent, modifiers);
            print_token(token, depth + 1);
        }
        Token::Conditional { condition, token } => {
            println!("{}if {:?}", indent, condition);
            print_token(token, depth + 1);
        }
    }
}

fn print_formats(formatter: &NameFormatter) {
    let config = formatter.config();

    println!("Name formats:");
    for (id, format) in &config.name_formats {
        println!(
            "  {:<14} {:<28} {}",
            id,
            format.pattern,
            format.label.as_deref().unwrap_or("")
        );
    }

    println!("\nList formats:");
    for (id, format) in &config.list_formats {
        let spec = &format.spec;
        let et_al = spec
            .et_al
            .map(|e| format!(", et al after {} (min {})", e.use_first, e.min))
            .unwrap_or_default();
        println!(
            "  {:<14} {:?} {} {}{}",
            id,
            spec.delimiter,
            spec.and.as_str(),
            spec.delimiter_precedes_last.as_str(),
            et_al
        );
    }

    println!("\nLast delimiter types:");
    for (id, label) in formatter.last_delimiter_types(true) {
        println!("  {:<14} {}", id, label);
    }

    println!("\nLast delimiter behaviors:");
    for (id, label) in formatter.last_delimiter_behaviors(true) {
        println!("  {:<14} {}", id, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_flag_accepts_known_modes() {
        let cli = Cli::try_parse_from(["namefmt", "format", "names.yaml", "--markup", "html"])
            .unwrap();
        match cli.command {
            Commands::Format { markup, .. } => {
                assert_eq!(markup.map(MarkupMode::from), Some(MarkupMode::Html));
            }
            _ => panic!("expected the format command"),
        }
    }

    #[test]
    fn test_markup_flag_rejects_unknown_mode() {
        let err = Cli::try_parse_from(["namefmt", "format", "names.yaml", "--markup", "fancy"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
