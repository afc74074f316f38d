use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rngbias::data::SequenceGenerator;

/// Generate a random number sequence.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence length
    #[arg(short = 'n', long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    seqlen: u64,

    /// Choices as a JSON list
    #[arg(short, long, default_value = "[1, 2, 3, 4, 5, 6]")]
    choices: String,

    /// Weights for choices as a JSON list (default to uniform)
    #[arg(short, long)]
    weights: Option<String>,

    /// Emit reals in [0, 1), one per line, instead of drawing from choices
    #[arg(long)]
    unit: bool,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,
}

fn choice_labels(json: &str) -> anyhow::Result<Vec<String>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).with_context(|| format!("Invalid choices: {}", json))?;
    Ok(values
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let len = args.seqlen as usize;

    if args.unit {
        for value in SequenceGenerator::generate_unit(&mut rng, len) {
            println!("{}", value);
        }
        return Ok(());
    }

    let weights = args
        .weights
        .as_deref()
        .map(serde_json::from_str::<Vec<f64>>)
        .transpose()
        .context("Invalid weights")?;
    let generator = SequenceGenerator::new(choice_labels(&args.choices)?, weights)?;
    log::debug!("Drawing {} symbols with {:?}", len, generator);

    println!("{}", generator.generate(&mut rng, len));
    Ok(())
}
