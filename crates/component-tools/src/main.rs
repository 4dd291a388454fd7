//! Component Tools - pick a UI component scaffold for any supported framework

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use component_core::{ComponentFlags, Framework, ResolvedSelection, ScaffoldError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "component-tools")]
#[command(about = "CLI for resolving UI component scaffolds across frameworks")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve which template to scaffold a new component from
    Create(CliCreateArgs),
    /// List the templates each framework can resolve to
    Templates(TemplatesArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliCreateArgs {
    /// Component name (alphanumeric segments joined by hyphens)
    #[arg(long)]
    pub name: Option<String>,

    /// Framework: Vue, Angular, React, Svelte, Qwik or Astro (case-insensitive)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Folder relative to the components directory
    #[arg(long)]
    pub folder: Option<String>,

    /// How to print the resolved selection
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<&CliCreateArgs> for ComponentFlags {
    fn from(args: &CliCreateArgs) -> Self {
        ComponentFlags {
            name: args.name.clone(),
            framework: args.framework.clone(),
            folder: args.folder.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Only list templates for this framework
    #[arg(short, long)]
    pub framework: Option<Framework>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// YAML document for the template engine
    Yaml,
}

/// Diagnostics go to stderr so stdout stays machine-readable
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_selection(selection: &ResolvedSelection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let folder = if selection.folder.is_empty() {
                "(default)"
            } else {
                selection.folder.as_str()
            };

            println!();
            println!("  {}      {}", "Component".bold(), selection.component_name);
            println!("  {}      {}", "Framework".bold(), selection.framework.cyan());
            println!("  {}       {}", "Template".bold(), selection.template.green());
            println!("  {}         {}", "Folder".bold(), folder);
            println!();
        }
        OutputFormat::Yaml => {
            let yaml =
                serde_yaml::to_string(selection).context("Failed to serialize selection")?;
            print!("{}", yaml);
        }
    }

    Ok(())
}

fn print_templates(args: &TemplatesArgs) {
    let frameworks: Vec<Framework> = match args.framework {
        Some(fw) => vec![fw],
        None => Framework::ALL.to_vec(),
    };

    for fw in frameworks {
        println!("{} ({})", fw.display_name().cyan().bold(), fw.id());
        for template in fw.templates() {
            println!("  {} {}", "->".blue(), template);
        }
    }
}

async fn create(args: CliCreateArgs) -> Result<()> {
    let flags = ComponentFlags::from(&args);
    tracing::debug!(?flags, "parsed flags");

    let result = component_core::run(&flags).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(selection) => print_selection(&selection, args.format),
        // Already reported by the prompt flow
        Err(e) => std::process::exit(exit_code(&e)),
    }
}

fn exit_code(err: &ScaffoldError) -> i32 {
    match err {
        ScaffoldError::Cancelled => 130,
        ScaffoldError::FrameworkNotSelected | ScaffoldError::Prompt(_) => 1,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();

    match args.command {
        Some(Command::Create(create_args)) => create(create_args).await,
        Some(Command::Templates(templates_args)) => {
            print_templates(&templates_args);
            Ok(())
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => create(CliCreateArgs::default()).await,
    }
}
