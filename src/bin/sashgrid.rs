use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sashgrid", version)]
struct Cli {
    /// Log engine diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a quote item and write its layout plan as JSON.
    Layout(LayoutArgs),
    /// Validate a quote item and report every problem found.
    Check(CheckArgs),
    /// Decompose a bare opening into panes.
    Panes(PanesArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input quote item JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout settings JSON (defaults apply when omitted).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output plan path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fit the plan into a `WIDTHxHEIGHT` target before writing.
    #[arg(long, value_parser = parse_size)]
    scale_to: Option<(f64, f64)>,

    /// Margin kept on every side when fitting with `--scale-to`.
    #[arg(long, default_value_t = 0.0)]
    margin: f64,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input quote item JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layout settings JSON (defaults apply when omitted).
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PanesArgs {
    /// Inner opening width (mm).
    #[arg(long)]
    width: f64,

    /// Inner opening height (mm).
    #[arg(long)]
    height: f64,

    /// Full-height mullion centreline (repeatable).
    #[arg(long)]
    mullion: Vec<f64>,

    /// Full-width transom centreline (repeatable).
    #[arg(long)]
    transom: Vec<f64>,

    /// Member thickness for every divider.
    #[arg(long, default_value_t = 80.0)]
    thickness: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Check(args) => cmd_check(args),
        Command::Panes(args) => cmd_panes(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<sashgrid::LayoutSettings> {
    match path {
        Some(p) => sashgrid::LayoutSettings::from_path(p)
            .with_context(|| format!("load settings '{}'", p.display())),
        None => Ok(sashgrid::LayoutSettings::default()),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_deref())?;
    let item = sashgrid::QuoteItem::from_path(&args.in_path)?;
    item.validate(&settings)?;

    let mut plan = sashgrid::compose(&item, &settings);
    let fingerprint = sashgrid::fingerprint_plan(&plan);
    if let Some((w, h)) = args.scale_to {
        let viewport = sashgrid::Viewport::fit(plan.bounds, w, h, args.margin);
        plan = plan.transformed(&viewport);
    }

    let json = serde_json::to_string_pretty(&plan).context("serialize layout plan")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json + "\n")
                .with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write plan to stdout")?;
        }
    }
    eprintln!("fingerprint {fingerprint}");
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.settings.as_deref())?;
    let item = sashgrid::QuoteItem::from_path(&args.in_path)?;
    match sashgrid::validate_item(&item, &settings) {
        Ok(()) => {
            println!("ok: {}", item.id);
            Ok(())
        }
        Err(errors) => {
            for issue in &errors.issues {
                println!("{issue}");
            }
            anyhow::bail!(
                "quote item '{}' has {} problem(s)",
                item.id,
                errors.issues.len()
            )
        }
    }
}

fn cmd_panes(args: PanesArgs) -> anyhow::Result<()> {
    let dividers: Vec<sashgrid::Divider> = args
        .mullion
        .iter()
        .enumerate()
        .map(|(i, &x)| sashgrid::Divider::mullion(format!("m{i}"), x))
        .chain(
            args.transom
                .iter()
                .enumerate()
                .map(|(i, &y)| sashgrid::Divider::transom(format!("t{i}"), y)),
        )
        .collect();
    let panes = sashgrid::decompose(
        args.width,
        args.height,
        &dividers,
        sashgrid::MemberThickness::uniform(args.thickness),
    );
    let json = serde_json::to_string_pretty(&panes).context("serialize panes")?;
    println!("{json}");
    Ok(())
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if !(w > 0.0 && h > 0.0) {
        return Err(format!("size must be positive, got '{s}'"));
    }
    Ok((w, h))
}
