use clap::{Parser, Subcommand};
use qr_studio::capture::{Frame, FrameDecoder, FrameFeedFactory, ImageSequence};
use qr_studio::render::{encode_png, rasterize};
use qr_studio::tools::collect_images;
use qr_studio::{App, Capabilities, PanelAction, ScanOutcome, StudioConfig, Viewport};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code generator and scanner")]
struct Cli {
    /// Viewport width used to pick mobile or desktop sizes
    #[arg(long, global = true)]
    viewport_width: Option<u32>,
    /// Log filter, e.g. `debug` or `qr_studio=trace`
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render text and export it as a PNG
    Generate {
        #[arg(long)]
        text: String,
        /// Directory the PNG is written to
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print the on-screen SVG instead of exporting
        #[arg(long)]
        svg: bool,
    },
    /// Scan still images as if they were camera frames
    Scan {
        #[arg(long, required_unless_present = "dir")]
        image: Vec<PathBuf>,
        /// Scan every image under a directory
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,
    },
    /// Share text through the share sheet or clipboard
    Share {
        #[arg(long)]
        text: String,
    },
    /// Render, rasterize and decode text, checking the payload survives
    Roundtrip {
        #[arg(long)]
        text: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut config = StudioConfig::from_env();
    if let Some(width) = cli.viewport_width {
        config = config.with_viewport(Viewport::new(width));
    }

    let ok = match cli.command {
        Command::Generate { text, out_dir, svg } => generate_cmd(config, text, out_dir, svg).await,
        Command::Scan { image, dir, fps } => scan_cmd(config, image, dir, fps).await,
        Command::Share { text } => share_cmd(config, text).await,
        Command::Roundtrip { text } => roundtrip_cmd(config, &text),
    };
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn build_app(config: StudioConfig, images: Vec<PathBuf>) -> App {
    let cameras = FrameFeedFactory::new(move || Ok(ImageSequence::new(images.clone())));
    let caps = Capabilities::native(&config, Box::new(cameras));
    App::new(config, caps)
}

async fn generate_cmd(
    mut config: StudioConfig,
    text: String,
    out_dir: Option<PathBuf>,
    svg: bool,
) -> bool {
    if let Some(dir) = out_dir {
        config = config.with_download_dir(dir);
    }
    let mut app = build_app(config, Vec::new());
    app.set_text(text);

    if svg {
        return match app.preview() {
            Some(symbol) => {
                println!("{}", symbol.svg);
                true
            }
            None => {
                eprintln!("Nothing to render");
                false
            }
        };
    }

    match app.export().await {
        Ok(download) => {
            println!("Saved {} ({} bytes)", download.path.display(), download.size_bytes);
            true
        }
        Err(err) => {
            eprintln!("{}", app.state().error.clone().unwrap_or_else(|| err.to_string()));
            false
        }
    }
}

async fn scan_cmd(
    mut config: StudioConfig,
    mut images: Vec<PathBuf>,
    dir: Option<PathBuf>,
    fps: Option<u32>,
) -> bool {
    if let Some(dir) = dir {
        images.extend(collect_images(&dir));
    }
    if let Some(fps) = fps {
        config.scanner.fps = fps;
    }
    let mut app = build_app(config, images);

    if app.open_scanner().await.is_err() {
        eprintln!("{}", app.state().error.clone().unwrap_or_default());
        return false;
    }

    match app.next_scan().await {
        Ok(ScanOutcome::Decoded(text)) => {
            println!("Scan result: {}", text);
            for action in app.result_actions() {
                match action {
                    PanelAction::Copy => println!("  [copy]"),
                    PanelAction::OpenLink { target } => println!("  [open link] {}", target),
                }
            }
            true
        }
        Ok(ScanOutcome::Ended) => {
            println!("No QR code found");
            if let Err(err) = app.cancel_scan() {
                log::debug!("cancel after feed end: {}", err);
            }
            false
        }
        Err(err) => {
            eprintln!("Scan failed: {}", err);
            false
        }
    }
}

async fn share_cmd(config: StudioConfig, text: String) -> bool {
    let mut app = build_app(config, Vec::new());
    app.set_text(text);
    match app.share().await {
        Ok(outcome) => {
            println!("Share: {:?}", outcome);
            true
        }
        Err(err) => {
            eprintln!("{}", err);
            false
        }
    }
}

fn roundtrip_cmd(config: StudioConfig, text: &str) -> bool {
    let mut app = build_app(config.clone(), Vec::new());
    app.set_text(text);
    let Some(symbol) = app.preview() else {
        eprintln!("Cannot render input");
        return false;
    };
    println!(
        "Rendered version {} ({}x{} modules)",
        symbol.version,
        symbol.width(),
        symbol.width()
    );

    let image = rasterize(&symbol, config.render.export_size);
    match encode_png(&image) {
        Ok(bytes) => println!("PNG: {} bytes", bytes.len()),
        Err(err) => {
            eprintln!("Encoding failed: {}", err);
            return false;
        }
    }

    let frame = Frame::from_image(image::DynamicImage::ImageRgb8(image));
    match FrameDecoder::new().decode(&frame) {
        Ok(decoded) if decoded.content == text => {
            println!("Decoded payload matches");
            true
        }
        Ok(decoded) => {
            eprintln!("Payload mismatch: got {:?}", decoded.content);
            false
        }
        Err(reason) => {
            eprintln!("Decode failed: {}", reason);
            false
        }
    }
}
