use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

use filterbooth::{
    DirectorySink, EffectChain, ImageFile, PRESETS, RasterRgba8, Session, SessionConfig,
    UploadStatus, check_displayable, contact_sheet, render_filtered,
};

#[derive(Parser, Debug)]
#[command(name = "filterbooth", version, about = "Preview and export filtered images")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Session config JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the media type declared for the input file.
    #[arg(long, global = true)]
    media_type: Option<String>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the filter presets and their CSS filter values.
    Presets,
    /// Write the full-size preview as a PNG.
    Preview(PreviewArgs),
    /// Write the gallery contact sheet as a PNG.
    Gallery(GalleryArgs),
    /// Export the filtered image into a directory.
    Export(ExportArgs),
    /// Apply an ad-hoc CSS filter chain.
    Apply(ApplyArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Filter preset name.
    #[arg(long, default_value = "Original")]
    filter: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Preset to mark as selected.
    #[arg(long, default_value = "Original")]
    select: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Filter preset name.
    #[arg(long, default_value = "Original")]
    filter: String,

    /// Directory receiving the exported PNG.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the SHA-256 of the exported file.
    #[arg(long, default_value_t = false)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// CSS filter value, e.g. "sepia(70%) contrast(120%)".
    #[arg(long)]
    effects: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Preview(args) => cmd_preview(&cli.global, args),
        Command::Gallery(args) => cmd_gallery(&cli.global, args),
        Command::Export(args) => cmd_export(&cli.global, args),
        Command::Apply(args) => cmd_apply(&cli.global, args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in PRESETS.iter() {
        println!("{:<14} {}", preset.name(), preset.css_filter());
    }
    Ok(())
}

fn cmd_preview(global: &GlobalArgs, args: PreviewArgs) -> anyhow::Result<()> {
    let mut session = open_session(global, &args.in_path)?;
    session.select_filter_by_name(&args.filter)?;
    let frame = session.preview().context("no image loaded")?;
    write_png(&args.out, &frame.raster)?;
    session_result(&session)
}

fn cmd_gallery(global: &GlobalArgs, args: GalleryArgs) -> anyhow::Result<()> {
    let mut session = open_session(global, &args.in_path)?;
    session.select_filter_by_name(&args.select)?;
    let tiles = session.gallery();
    let sheet = contact_sheet(&tiles, session.config().gallery_columns)?;
    write_png(&args.out, &sheet)?;
    session_result(&session)
}

fn cmd_export(global: &GlobalArgs, args: ExportArgs) -> anyhow::Result<()> {
    let mut session = open_session(global, &args.in_path)?;
    session.select_filter_by_name(&args.filter)?;
    let mut sink = DirectorySink::new(&args.out_dir);
    let receipt = session.export(&mut sink)?;
    println!("{}", receipt.location);

    if args.digest {
        let path = args.out_dir.join(&receipt.file_name);
        let bytes =
            std::fs::read(&path).with_context(|| format!("read '{}'", path.display()))?;
        println!("sha256: {}", sha256_hex(&bytes));
    }
    Ok(())
}

fn cmd_apply(global: &GlobalArgs, args: ApplyArgs) -> anyhow::Result<()> {
    let chain = EffectChain::parse_css(&args.effects)?;
    let session = open_session(global, &args.in_path)?;
    let image = session.loaded_image().context("no image loaded")?;
    check_displayable(&image.raster, session.config().max_display_pixels)?;
    let out = render_filtered(&image.raster, &chain.compile())?;
    write_png(&args.out, &out)
}

/// Build a session and load `in_path`, decoding on a rayon worker.
fn open_session(global: &GlobalArgs, in_path: &Path) -> anyhow::Result<Session> {
    let config = match &global.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };
    let mut session = Session::new(config)?;

    let mut file = ImageFile::from_path(in_path)?;
    if let Some(media_type) = &global.media_type {
        file = file.with_media_type(media_type.as_str());
    }
    let ticket = session.begin_upload(file)?;

    let (tx, rx) = mpsc::channel();
    rayon::spawn(move || {
        let _ = tx.send(ticket.decode());
    });
    let outcome = rx.recv().context("decode worker exited")?;

    match session.complete_upload(outcome) {
        UploadStatus::Loaded => Ok(session),
        UploadStatus::Failed => Err(session
            .last_error()
            .map(anyhow::Error::from)
            .unwrap_or_else(|| anyhow::anyhow!("decode failed"))),
        UploadStatus::Stale => anyhow::bail!("upload was superseded"),
    }
}

/// Surface a recorded session error (e.g. a display failure) as a non-zero exit.
fn session_result(session: &Session) -> anyhow::Result<()> {
    match session.last_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn write_png(path: &Path, raster: &RasterRgba8) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
