use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use scenario_core::{
    clear_parameters, feature_collection, load_map_style_from_env, save_parameters,
    write_delimited, FileStore,
};
use scenario_schema::ScenarioParameters;
use tracing::info;

mod app;
mod report;

use app::SessionSources;

#[derive(Parser, Debug)]
#[command(author, version, about = "Demographic and labour scenario explorer", long_about = None)]
struct Cli {
    /// Static overlay document merged over the builtin defaults.
    /// Falls back to SCENARIO_OVERLAY_PATH when omitted.
    #[arg(long, global = true)]
    overlay: Option<PathBuf>,
    /// Local key-value store holding the last saved parameter set.
    #[arg(long, global = true, default_value = "scenario_store.json")]
    store: PathBuf,
    /// Ignore any parameters saved in the local store.
    #[arg(long, global = true)]
    no_store: bool,
    /// Override the number of simulated months.
    #[arg(long, global = true, allow_negative_numbers = true)]
    horizon: Option<i64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate and print the monthly sequence.
    Run {
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Emit the map overlay as a GeoJSON feature collection.
    Project {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Persist the effective parameters to the local store.
    Save,
    /// Remove saved parameters from the local store.
    Clear,
    /// Print the JSON Schema of the parameter document.
    Schema,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Csv,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let sources = SessionSources {
        overlay: cli.overlay.clone(),
        store: (!cli.no_store).then(|| FileStore::new(&cli.store)),
        horizon: cli.horizon,
    };

    match cli.command {
        Command::Run { format, output } => {
            let session = sources.build();
            let mut writer = open_output(output.as_deref())?;
            match format {
                OutputFormat::Summary => report::write_summary(&mut writer, &session)?,
                OutputFormat::Csv => write_delimited(&mut writer, session.snapshots())?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut writer, session.snapshots())?;
                    writeln!(writer)?;
                }
            }
            writer.flush()?;
        }
        Command::Project { output } => {
            let session = sources.build();
            let attributes = session.projection()?;
            let style = load_map_style_from_env();
            let collection = feature_collection(session.locations(), &attributes, &style)?;
            let mut writer = open_output(output.as_deref())?;
            writeln!(writer, "{}", collection.to_json_string()?)?;
            writer.flush()?;
        }
        Command::Save => {
            let session = sources.build();
            let mut store = FileStore::new(&cli.store);
            save_parameters(&mut store, &session.params())?;
            info!(
                target: "scenario::cli",
                path = %cli.store.display(),
                "store.saved"
            );
        }
        Command::Clear => {
            let mut store = FileStore::new(&cli.store);
            clear_parameters(&mut store)?;
            info!(
                target: "scenario::cli",
                path = %cli.store.display(),
                "store.cleared"
            );
        }
        Command::Schema => {
            let schema = schemars::schema_for!(ScenarioParameters);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
