use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use colored::*;
use propgen::cli::output::{self, OutputFormat, SourceResult};
use propgen::config::parse_abbreviation;
use propgen::generator::render::Target;
use propgen::{cli, Config, Generator};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propgen")]
#[command(version, about = "Generate typed property declarations from field-definition lines", long_about = None)]
struct Cli {
    /// Files with one field definition per line (reads stdin when omitted or `-`)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Output language (csharp, typescript)
    #[arg(short, long)]
    target: Option<Target>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Write generated code to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Config file (defaults to ./.propgen.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Extra abbreviation, e.g. qty=quantity
    #[arg(long = "abbrev", value_name = "KEY=VALUE", value_parser = parse_abbreviation)]
    abbreviations: Vec<(String, String)>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if lines were skipped or files could not be read
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Abbreviation table
    Abbrev {
        #[command(subcommand)]
        action: AbbrevCommands,
    },
}

#[derive(Parser, Debug)]
enum AbbrevCommands {
    /// List the abbreviations in effect
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "propgen", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.target, cli.config.clone(), cli.abbreviations.clone())?;

    if let Some(command) = cli.command {
        return handle_command(command, &config, !cli.no_color);
    }

    let generator = Generator::new(config.abbreviation_table(), config.target);
    let colored = !cli.no_color;

    let mut results = Vec::new();
    let mut unreadable = 0;

    if cli.files.is_empty() {
        let input = cli::read_stdin()?;
        results.push(SourceResult {
            source: cli::STDIN_SOURCE.to_string(),
            result: generator.process(&input),
        });
    } else {
        for file_path in &cli.files {
            let input = match cli::read_source(file_path) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    unreadable += 1;
                    continue;
                }
            };
            results.push(SourceResult {
                source: cli::source_name(file_path),
                result: generator.process(&input),
            });
        }
    }

    if results.is_empty() {
        anyhow::bail!("No readable input files. Use --help for usage information.");
    }

    for r in &results {
        output::print_diagnostics(&r.source, &r.result.diagnostics, colored);
    }

    let text = output::format_results(&results, generator.target(), cli.format)?;
    match &cli.output_file {
        Some(path) => fs::write(path, format!("{}\n", text))
            .with_context(|| format!("Failed to write file: {}", path.display()))?,
        None => println!("{}", text),
    }

    let total_declarations: usize = results.iter().map(|r| r.result.declarations.len()).sum();
    let total_skipped: usize = results.iter().map(|r| r.result.diagnostics.len()).sum();
    output::print_summary(total_declarations, total_skipped, colored);

    // Exit with appropriate code
    if (total_skipped > 0 || unreadable > 0) && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands, config: &Config, colored: bool) -> Result<()> {
    match command {
        Commands::Abbrev { action } => match action {
            AbbrevCommands::List => {
                for (short, long) in config.abbreviation_table().iter() {
                    if colored {
                        println!("  {} → {}", short.cyan().bold(), long);
                    } else {
                        println!("  {} → {}", short, long);
                    }
                }
            }
        },
    }
    Ok(())
}
