use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use umlscan::core::{FileScanner, Project, ProjectAnalyzer};
use umlscan::formatters::{JsonCompactFormatter, MermaidFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "umlscan",
    version = "0.1.0",
    author = "umlscan developers",
    about = "Class-diagram extraction for JavaScript and TypeScript projects"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Scan a directory and write its class diagram
    #[command(name = "get_uml", visible_alias = "get-uml")]
    GetUml {
        /// Directory to analyze
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output file path
        #[arg(short, long, value_name = "FILE", default_value = "diagram.mmd")]
        output: PathBuf,

        /// Output format: mermaid, json-compact
        #[arg(
            short,
            long,
            value_name = "FORMAT",
            value_enum,
            default_value_t = OutputFormat::Mermaid
        )]
        format: OutputFormat,

        /// Project name shown in the diagram header (defaults to the folder name)
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Mermaid,
    JsonCompact,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Mermaid => "mermaid",
            OutputFormat::JsonCompact => "json-compact",
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Command::GetUml {
        path,
        output,
        format,
        name,
    } = cli.command;

    let start_time = Instant::now();
    let root = FileScanner::validate_target(&path)?;

    println!("Input: {}", root.display());
    println!("Output: {}", output.display());
    println!("Format: {}", format.as_str());

    let project = match name {
        Some(name) => Project::new(name, &root),
        None => Project::from_root(&root),
    };
    let project = ProjectAnalyzer::new().analyze_into(project, &root)?;

    println!(
        "Found {} entities, {} dependency edges",
        project.entities.len(),
        project.edge_count()
    );

    match format {
        OutputFormat::Mermaid => MermaidFormatter::new().format_to_file(&project, &output)?,
        OutputFormat::JsonCompact => JsonCompactFormatter::new().format_to_file(&project, &output)?,
    }

    println!(
        "Analysis complete. Generated {} in {:.2}s",
        output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
