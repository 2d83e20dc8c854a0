//! Command-line interface for coffer
//! This binary builds containers from command-line elements and prints their
//! rendering in different formats.
//!
//! Usage:
//!   coffer render `<elements>`... [--format `<format>`]  - Render a container built from the given elements
//!   coffer demo                                        - Run the two-container move demonstration

use std::fmt;

use clap::{Arg, Command};
use coffer::coffer::Coffer;

fn main() {
    let matches = Command::new("coffer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for building and rendering ordered value containers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Build a container from elements and print its rendering")
                .arg(
                    Arg::new("elements")
                        .help("Elements to place in the container, in order")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'text', 'json', 'yaml')")
                        .default_value("text"),
                ),
        )
        .subcommand(Command::new("demo").about("Run the two-container move demonstration"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let elements: Vec<String> = render_matches
                .get_many::<String>("elements")
                .unwrap()
                .cloned()
                .collect();
            let format = render_matches.get_one::<String>("format").unwrap();
            handle_render_command(elements, format);
        }
        Some(("demo", _)) => {
            handle_demo_command();
        }
        _ => unreachable!(),
    }
}

/// Errors from producing command output
#[derive(Debug)]
enum OutputError {
    /// The requested output format is not supported
    UnknownFormat(String),
    /// Serialization of the container failed
    Serialize(String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::UnknownFormat(format) => {
                write!(f, "Unknown output format: {}", format)
            }
            OutputError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for OutputError {}

/// Handle the render command
fn handle_render_command(elements: Vec<String>, format: &str) {
    let container = Coffer::from_list(elements);
    match render_output(&container, format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Produce the container's representation in the requested format
fn render_output(container: &Coffer<String>, format: &str) -> Result<String, OutputError> {
    match format {
        "text" => Ok(container.render()),
        "json" => serde_json::to_string_pretty(container)
            .map_err(|e| OutputError::Serialize(e.to_string())),
        "yaml" => {
            serde_yaml::to_string(container).map_err(|e| OutputError::Serialize(e.to_string()))
        }
        other => Err(OutputError::UnknownFormat(other.to_string())),
    }
}

/// Handle the demo command: build two containers, render both, move-assign
/// one into the other, and render both again.
fn handle_demo_command() {
    let mut a = Coffer::from_list(["one", "two", "three", "four", "five"].map(String::from));
    let mut b = Coffer::from_list(["five", "six", "seven"].map(String::from));

    println!("a: {}", a.render());
    println!("b: {}", b.render());

    b.assign(Coffer::from_move(&mut a));

    println!("a: {}", a.render());
    println!("b: {}", b.render());
}
