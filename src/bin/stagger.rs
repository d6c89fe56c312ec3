use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stagger", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a content tree and dump the split units plus extracted text.
    Split(SplitArgs),
    /// Compute the full animation plan for a content tree.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct SplitArgs {
    /// Input content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Split granularity (unknown values fall back to character).
    #[arg(long, default_value = "character")]
    mode: String,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Split granularity (unknown values fall back to character).
    #[arg(long, default_value = "character")]
    mode: String,

    /// Animation preset name; repeat for layered presets (later wins).
    #[arg(long)]
    preset: Vec<String>,

    /// Explicit motion configuration JSON (mutually exclusive with --preset).
    #[arg(long, conflicts_with = "preset")]
    motion: Option<PathBuf>,

    /// Stagger direction.
    #[arg(long, value_enum, default_value_t = OrderChoice::FirstToLast)]
    order: OrderChoice,

    /// Seconds added to every unit's delay.
    #[arg(long, default_value_t = 0.0)]
    initial_delay: f64,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderChoice {
    FirstToLast,
    LastToFirst,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Split(args) => cmd_split(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn read_content_json(path: &Path) -> anyhow::Result<stagger::Node> {
    let f = File::open(path).with_context(|| format!("open content '{}'", path.display()))?;
    let r = BufReader::new(f);
    let node: stagger::Node = serde_json::from_reader(r).with_context(|| "parse content JSON")?;
    Ok(node)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_split(args: SplitArgs) -> anyhow::Result<()> {
    let content = read_content_json(&args.in_path)?;
    let mode = stagger::SplitMode::parse(&args.mode);
    let tree = stagger::split_tree(&content, mode);
    let total_units = stagger::count_units(&tree.units);

    #[derive(serde::Serialize)]
    struct SplitOutput {
        units: Vec<stagger::SplitUnit>,
        text: String,
        total_units: usize,
    }

    print_json(
        &SplitOutput {
            units: tree.units,
            text: tree.text,
            total_units,
        },
        args.pretty,
    )
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let content = read_content_json(&args.in_path)?;

    let motion = if let Some(path) = &args.motion {
        let f = File::open(path).with_context(|| format!("open motion '{}'", path.display()))?;
        let config: stagger::MotionConfig =
            serde_json::from_reader(BufReader::new(f)).with_context(|| "parse motion JSON")?;
        Some(stagger::MotionSpec::Motion(config))
    } else if !args.preset.is_empty() {
        Some(stagger::MotionSpec::Presets(args.preset.clone()))
    } else {
        None
    };

    let options = stagger::AnimateOptions {
        split: stagger::SplitMode::parse(&args.mode),
        order: match args.order {
            OrderChoice::FirstToLast => stagger::SequenceOrder::FirstToLast,
            OrderChoice::LastToFirst => stagger::SequenceOrder::LastToFirst,
        },
        initial_delay: args.initial_delay,
        motion,
    };

    if let Some(stagger::MotionSpec::Motion(config)) = &options.motion {
        for warning in stagger::check_motion(config) {
            eprintln!("warning: [{}] {}", warning.family, warning.message);
        }
    }

    let plan = stagger::animate(&content, &options, None)?;
    print_json(&plan, args.pretty)
}
