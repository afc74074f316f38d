use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use rngbias::config::ConfigManager;
use rngbias::data::{InputFormat, RecordWriter, SequenceReader};
use rngbias::ScoringPipeline;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Compute cognitive and statistical bias of a given sequence.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, `-` for stdin
    #[arg(short, long, default_value = "-")]
    file: PathBuf,

    /// Sequence length
    #[arg(short = 'x', long, value_parser = clap::value_parser!(u64).range(1..))]
    variables: Option<u64>,

    /// Objective groups as a JSON list of feature index lists
    #[arg(short, long)]
    objectives: Option<String>,

    /// Constrained feature indices as a JSON list
    #[arg(short = 's', long)]
    constraints: Option<String>,

    /// Lower bounds of the constraints as a JSON list
    #[arg(short, long)]
    lower_bounds: Option<String>,

    /// Upper bounds of the constraints as a JSON list
    #[arg(short, long)]
    upper_bounds: Option<String>,

    /// Alpha for cognitive bias (15 numbers, JSON)
    #[arg(short = 'a', long)]
    bias_alpha: Option<String>,

    /// Beta for cognitive bias (15 numbers, JSON)
    #[arg(short = 'b', long)]
    bias_beta: Option<String>,

    /// Gamma for cognitive bias (15 numbers, JSON)
    #[arg(short = 'g', long)]
    bias_gamma: Option<String>,

    /// Input layout
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Be quieter
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,

    /// Be more verbose
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Prettify output
    #[arg(short, long)]
    pretty: bool,

    /// Configuration file (TOML or JSON); `config.toml` is used when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        const LEVELS: [LevelFilter; 6] = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ];
        let level = (2 + i32::from(self.verbose) - i32::from(self.quiet)).clamp(0, 5);
        LEVELS[level as usize]
    }

    fn config_manager(&self) -> ConfigManager {
        let mut manager = ConfigManager::new();
        if let Some(path) = &self.config {
            manager = manager.with_file(path);
        }
        manager
            .set_override_option("sequence.variables", self.variables.map(|v| v as i64))
            .set_override_option("sequence.format", self.format.map(|f| f.as_str()))
            .set_override_option("objective.groups", self.objectives.clone())
            .set_override_option("constraint.features", self.constraints.clone())
            .set_override_option("constraint.lower_bounds", self.lower_bounds.clone())
            .set_override_option("constraint.upper_bounds", self.upper_bounds.clone())
            .set_override_option("bias.alpha", self.bias_alpha.clone())
            .set_override_option("bias.beta", self.bias_beta.clone())
            .set_override_option("bias.gamma", self.bias_gamma.clone())
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let app_config = args
        .config_manager()
        .load()
        .context("Failed to load configuration")?;

    if args.print_config {
        print!("{}", app_config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    let scoring = app_config.resolve().context("Invalid configuration")?;
    let pipeline = ScoringPipeline::new(&scoring);
    let format = app_config.sequence.format;

    let input = if args.file.as_os_str() == "-" {
        SequenceReader::read(io::stdin().lock(), format)
    } else {
        SequenceReader::load(&args.file, format)
    };

    let record = pipeline.score_input(input);
    RecordWriter::new(args.pretty).write(&record, io::stdout().lock())?;

    Ok(if record.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();
    log::info!("Log level is set to {}", args.log_level());
    log::debug!("{:?}", args);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rngbias: {:#}", e);
            ExitCode::from(2)
        }
    }
}
