use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use seedart::{
    ArtConfig, Color, ColorPreset, OutputFormat, RenderThreading, RenderedArt, Resolution, Style,
    WallpaperVariant, batch_file_names, download_file_name, render_batch, render_seed, write_png,
    write_svg,
};

#[derive(Parser, Debug)]
#[command(name = "seedart", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the SVG document for a seed.
    Svg(SvgArgs),
    /// Rasterize a seed to PNG.
    Png(PngArgs),
    /// Print the generated composition as JSON.
    Inspect(ArtArgs),
    /// Render many seeds into a directory.
    Batch(BatchArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Generative,
    Luxe,
    Wallpaper,
}

impl From<StyleArg> for Style {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Generative => Style::Generative,
            StyleArg::Luxe => Style::Luxe,
            StyleArg::Wallpaper => Style::Wallpaper,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Bauhaus,
    Circuit,
    Flow,
}

impl From<VariantArg> for WallpaperVariant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Bauhaus => WallpaperVariant::Bauhaus,
            VariantArg::Circuit => WallpaperVariant::Circuit,
            VariantArg::Flow => WallpaperVariant::Flow,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Svg,
    Png,
}

/// Everything but the seed; shared by single renders and batches.
#[derive(Args, Debug)]
struct StyleArgs {
    /// Art style.
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Luxe only: transparent variant.
    #[arg(long)]
    transparent: bool,

    /// Generative and wallpaper: omit the background pattern.
    #[arg(long)]
    no_grid: bool,

    /// Output size: `N`, `WxH`, `1080p`, `4k`, `8k` or `phone`. Wallpapers are generated at
    /// this size.
    #[arg(long)]
    resolution: Option<Resolution>,

    /// Wallpaper layout.
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Wallpaper density, 0 to 100.
    #[arg(long)]
    complexity: Option<u32>,

    /// Wallpaper color preset, e.g. `vaporwave` or `pipboy_amber`.
    #[arg(long)]
    preset: Option<ColorPreset>,

    /// Wallpaper custom colors, comma-separated hex, background last.
    #[arg(long, value_delimiter = ',')]
    colors: Vec<Color>,

    /// Wallpaper film grain, 0 to 50.
    #[arg(long)]
    grain: Option<u32>,

    /// Load settings from a JSON config; flags given on the command line override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ArtArgs {
    /// Seed string; omitted means the style's default seed.
    #[arg(long)]
    seed: Option<String>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    art: ArtArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PngArgs {
    #[command(flatten)]
    art: ArtArgs,

    /// Background fill, `#RRGGBB` or `#RRGGBBAA`.
    #[arg(long)]
    background: Option<Color>,

    /// Output path; defaults to the export file name in the current directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Comma-separated seeds.
    #[arg(long, value_delimiter = ',', required = true)]
    seeds: Vec<String>,

    #[command(flatten)]
    style: StyleArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "svg")]
    format: FormatArg,

    /// Render seeds concurrently.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &StyleArgs) -> anyhow::Result<ArtConfig> {
    let mut cfg = match &args.config {
        Some(path) => ArtConfig::from_path(path)?,
        None => ArtConfig::default(),
    };
    if let Some(style) = args.style {
        cfg.style = style.into();
    }
    if args.transparent {
        cfg.transparent = true;
    }
    if args.no_grid {
        cfg.background_grid = false;
    }
    if let Some(resolution) = args.resolution {
        cfg.resolution = Some(resolution);
    }
    if let Some(variant) = args.variant {
        cfg.variant = variant.into();
    }
    if let Some(complexity) = args.complexity {
        cfg.complexity = complexity;
    }
    if let Some(preset) = args.preset {
        cfg.preset = preset;
        cfg.colors = None;
    }
    if !args.colors.is_empty() {
        cfg.colors = Some(args.colors.clone());
    }
    if let Some(grain) = args.grain {
        cfg.grain = grain;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn load_art_config(args: &ArtArgs) -> anyhow::Result<ArtConfig> {
    let mut cfg = load_config(&args.style)?;
    if let Some(seed) = &args.seed {
        cfg.seed = Some(seed.clone());
    }
    Ok(cfg)
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let cfg = load_art_config(&args.art)?;
    let rendered = render_seed(cfg.effective_seed(), &cfg.render_opts(OutputFormat::Svg))?;

    match &args.out {
        Some(path) => {
            write_svg(path, &rendered.svg)?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(rendered.svg.as_bytes())
                .context("write svg to stdout")?;
        }
    }
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let mut cfg = load_art_config(&args.art)?;
    if let Some(background) = args.background {
        cfg.background = Some(background);
    }
    cfg.validate()?;

    let rendered = render_seed(cfg.effective_seed(), &cfg.render_opts(OutputFormat::Png))?;
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(download_file_name(&rendered.artwork, "png")));
    write_rendered(&rendered, &out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_inspect(args: ArtArgs) -> anyhow::Result<()> {
    let cfg = load_art_config(&args)?;
    let rendered = render_seed(cfg.effective_seed(), &cfg.render_opts(OutputFormat::Svg))?;
    let art = &rendered.artwork;

    let report = serde_json::json!({
        "seed": art.seed(),
        "safe_id": art.seed().safe_id(),
        "style": art.style(),
        "mode": art.mode(),
        "size": art.size(),
        "hue": art.hue(),
        "palette": art.palette(),
        "colors": art.colors(),
        "grain": art.grain(),
        "shape_count": art.shapes().len(),
        "fingerprint": rendered.fingerprint,
        "shapes": art.shapes(),
    });
    let text = serde_json::to_string_pretty(&report).context("serialize inspect report")?;
    println!("{text}");
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.style)?;
    let (format, ext) = match args.format {
        FormatArg::Svg => (OutputFormat::Svg, "svg"),
        FormatArg::Png => (OutputFormat::Png, "png"),
    };
    let opts = cfg.render_opts(format);

    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let rendered = render_batch(&args.seeds, &opts, &threading)?;
    let names = batch_file_names(rendered.iter().map(|r| &r.artwork), ext)?;

    for (item, name) in rendered.iter().zip(&names) {
        write_rendered(item, &args.out_dir.join(name))?;
    }
    eprintln!(
        "wrote {} files to {}",
        rendered.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn write_rendered(rendered: &RenderedArt, path: &Path) -> anyhow::Result<()> {
    match &rendered.frame {
        Some(frame) => write_png(path, frame)?,
        None => write_svg(path, &rendered.svg)?,
    }
    tracing::debug!(
        path = %path.display(),
        fingerprint = %rendered.fingerprint,
        "wrote artwork"
    );
    Ok(())
}
