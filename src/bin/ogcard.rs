use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

use ogcard::{
    Branding, FontAsset, FontWeight, PagePreviewRequest, PreviewService, SiteConfig, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "ogcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single preview card as a PNG.
    Render(RenderArgs),
    /// Render every card of a site into an output directory.
    Build(BuildArgs),
    /// List every route of a site with its image path.
    Routes(RoutesArgs),
    /// Serve cards on demand under `/og/<route>.png`.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct FontArgs {
    /// Directory holding `<family>-Regular.ttf` and `<family>-Bold.ttf`.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Font file stem.
    #[arg(long)]
    family: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = ogcard::DEFAULT_CATEGORY)]
    category: String,

    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    theme: ThemeArg,

    /// Optional site config for fonts and footer branding.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    fonts: FontArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print the resolved font family and the SHA-256 of each face.
    #[arg(long, default_value_t = false)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Site config JSON.
    #[arg(long)]
    config: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,

    /// Output root; images land in `<out>/og/<route>.png`.
    #[arg(long)]
    out: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct RoutesArgs {
    /// Site config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Site config JSON.
    #[arg(long)]
    config: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,

    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:4321")]
    addr: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Build(args) => cmd_build(args),
        Command::Routes(args) => cmd_routes(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path, fonts: &FontArgs) -> anyhow::Result<SiteConfig> {
    let mut cfg =
        SiteConfig::load(path).with_context(|| format!("load site config '{}'", path.display()))?;
    apply_font_overrides(&mut cfg, fonts);
    Ok(cfg)
}

fn apply_font_overrides(cfg: &mut SiteConfig, fonts: &FontArgs) {
    if let Some(dir) = &fonts.fonts_dir {
        cfg.fonts.dir = dir.clone();
    }
    if let Some(family) = &fonts.family {
        cfg.fonts.family = family.clone();
    }
}

fn load_fonts(cfg: &SiteConfig) -> anyhow::Result<FontAsset> {
    cfg.load_fonts().with_context(|| {
        format!(
            "load fonts '{}' from '{}'",
            cfg.fonts.family,
            cfg.fonts.dir.display()
        )
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => load_config(path, &args.fonts)?,
        None => {
            let mut cfg = SiteConfig::default();
            apply_font_overrides(&mut cfg, &args.fonts);
            cfg
        }
    };
    let fonts = load_fonts(&cfg)?;

    if args.dump_fonts {
        dump_fonts(&fonts);
    }

    let request = PagePreviewRequest::new(
        args.title,
        args.description,
        args.category,
        args.theme.into(),
    );
    let img = ogcard::render_preview(&request, &fonts, &cfg.branding())?;
    write_png(&args.out, &img.png)?;

    tracing::info!(path = %args.out.display(), "wrote preview");
    Ok(())
}

fn dump_fonts(fonts: &FontAsset) {
    println!("family: {}", fonts.family());
    for (label, weight) in [("regular", FontWeight::Regular), ("bold", FontWeight::Bold)] {
        let bytes = fonts.bytes(weight);
        let digest = sha2::Sha256::digest(bytes);
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        println!("{label}: sha256={hex} bytes={}", bytes.len());
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("configure rayon thread pool")?;
    }

    let cfg = load_config(&args.config, &args.fonts)?;
    let table = cfg.route_table()?;
    let fonts = load_fonts(&cfg)?;
    let branding: Branding = cfg.branding();
    let routes = cfg.routes();

    let results = ogcard::render_routes(&routes, &fonts, &branding);
    let mut failed = 0usize;
    for (route, result) in results {
        match result {
            Ok(img) => {
                let path = output_path(&args.out, &route.route);
                write_png(&path, &img.png)?;
                tracing::info!(route = %route.route, path = %path.display(), "wrote preview");
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(route = %route.route, error = %e, "render failed");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} previews failed to render", table.len());
    }
    tracing::info!(count = table.len(), out = %args.out.display(), "build finished");
    Ok(())
}

fn cmd_routes(args: RoutesArgs) -> anyhow::Result<()> {
    let cfg = SiteConfig::load(&args.config)
        .with_context(|| format!("load site config '{}'", args.config.display()))?;
    cfg.route_table()?;
    for route in cfg.routes() {
        println!("{}\t{}", route.route, route.og_path());
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config, &args.fonts)?;
    let table = cfg.route_table()?;
    let fonts = load_fonts(&cfg)?;
    let service = PreviewService::new(table, fonts, cfg.branding());
    ogcard::serve::serve(&args.addr, service)?;
    Ok(())
}

fn output_path(out: &Path, route: &str) -> PathBuf {
    let rel = ogcard::og_path(route);
    out.join(rel.trim_start_matches('/'))
}

fn write_png(path: &Path, png: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))
}
