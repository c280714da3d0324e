use std::f64::consts::TAU;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use prosvg::{
    Demo, FfmpegSink, FfmpegSinkOpts, Fps, FrameIndex, FrameRGBA, FrameSink, Point2, ProsvgResult,
    RenderSession, SessionOpts, SinkConfig, TessellateOpts,
};

#[derive(Parser, Debug)]
#[command(name = "prosvg", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a demo scene to MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Write one frame of a demo as PNG or SVG.
    Frame(FrameArgs),
    /// Tessellate a built-in curve and print its path data.
    Path(PathArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[arg(long, value_enum)]
    demo: DemoChoice,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output pixels per canvas unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[arg(long, value_enum)]
    demo: DemoChoice,

    /// Output path; `.png` or `.svg`.
    #[arg(long)]
    out: PathBuf,

    /// Time of the frame in seconds. Defaults to the final state of the scene. PNG only.
    #[arg(long)]
    at: Option<f64>,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct PathArgs {
    #[arg(long, value_enum)]
    curve: CurveChoice,

    /// Parameter start; defaults per curve.
    #[arg(long, allow_hyphen_values = true)]
    from: Option<f64>,

    /// Parameter end; defaults per curve.
    #[arg(long, allow_hyphen_values = true)]
    to: Option<f64>,

    #[arg(long, default_value_t = 30)]
    samples: usize,

    /// Print the command list as JSON instead of an SVG `d` string.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DemoChoice {
    Circle,
    Parametric,
    Text,
    Orbit,
}

impl From<DemoChoice> for Demo {
    fn from(c: DemoChoice) -> Self {
        match c {
            DemoChoice::Circle => Demo::Circle,
            DemoChoice::Parametric => Demo::Parametric,
            DemoChoice::Text => Demo::Text,
            DemoChoice::Orbit => Demo::Orbit,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CurveChoice {
    Parabola,
    Sine,
    Spiral,
    Epicycloid,
    /// `sqrt(x)`, undefined for negative `x`.
    Sqrt,
}

impl CurveChoice {
    fn limits(self) -> (f64, f64) {
        match self {
            Self::Parabola => (-2.0, 2.0),
            Self::Sine | Self::Epicycloid => (0.0, TAU),
            Self::Spiral => (0.0, 2.0 * TAU),
            Self::Sqrt => (-1.0, 4.0),
        }
    }

    fn eval(self, t: f64) -> Point2 {
        match self {
            Self::Parabola => Point2::new(t, -t * t),
            Self::Sine => Point2::new(t, t.sin()),
            Self::Spiral => Point2::polar(t / TAU, 3.0 * t),
            Self::Epicycloid => Point2::polar(1.0, t) + Point2::polar(0.25, 4.0 * t),
            Self::Sqrt => Point2::new(t, t.sqrt()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Path(args) => cmd_path(args),
    }
}

fn make_session(demo: Demo, fps: u32, scale: f64) -> anyhow::Result<RenderSession> {
    let opts = SessionOpts {
        fps: Fps::new(fps, 1)?,
        scale,
    };
    RenderSession::new(demo.scene(), opts).with_context(|| format!("set up demo '{}'", demo.name()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let demo = Demo::from(args.demo);
    let mut session = make_session(demo, args.fps, args.scale)?;
    session.attach(FfmpegSink::new(FfmpegSinkOpts::new(&args.out)))?;
    demo.run(&mut session)
        .with_context(|| format!("play demo '{}'", demo.name()))?;
    let stats = session.finish()?;

    eprintln!(
        "wrote {} ({} frames, {:.2}s)",
        args.out.display(),
        stats.frames,
        stats.seconds
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let demo = Demo::from(args.demo);
    let mut session = make_session(demo, args.fps, args.scale)?;

    match args.at {
        None => {
            demo.run(&mut session)
                .with_context(|| format!("play demo '{}'", demo.name()))?;
            session.save(&args.out)?;
        }
        Some(secs) => {
            let fps = session.opts().fps;
            anyhow::ensure!(
                secs.is_finite() && secs >= 0.0,
                "--at must be a non-negative number of seconds"
            );
            let grab = Grab::new(FrameIndex(fps.secs_to_frames_floor(secs)));
            let picked = Arc::clone(&grab.frame);
            session.attach(grab)?;
            demo.run(&mut session)
                .with_context(|| format!("play demo '{}'", demo.name()))?;
            let total = session.finish()?.seconds;

            let frame = picked
                .lock()
                .map_err(|_| anyhow::anyhow!("frame grab lock poisoned"))?
                .take()
                .with_context(|| format!("demo '{}' ends at {total:.2}s", demo.name()))?;
            if let Some(parent) = args.out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            frame.save_png(&args.out)?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let (t0, t1) = args.curve.limits();
    let (from, to) = (args.from.unwrap_or(t0), args.to.unwrap_or(t1));
    let curve = args.curve;
    let path = prosvg::tessellate(
        |t| curve.eval(t),
        from,
        to,
        TessellateOpts::with_samples(args.samples),
    )?;

    if args.json {
        let json = serde_json::to_string_pretty(&path).context("serialize path data")?;
        println!("{json}");
    } else {
        println!("{}", path.to_svg_d());
    }
    Ok(())
}

/// Keeps the frame that covers one output index.
struct Grab {
    target: FrameIndex,
    frame: Arc<Mutex<Option<FrameRGBA>>>,
}

impl Grab {
    fn new(target: FrameIndex) -> Self {
        Self {
            target,
            frame: Arc::new(Mutex::new(None)),
        }
    }
}

impl FrameSink for Grab {
    fn begin(&mut self, _cfg: SinkConfig) -> ProsvgResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA, repeat: u32) -> ProsvgResult<()> {
        let covers = idx.0 <= self.target.0 && self.target.0 < idx.0 + u64::from(repeat);
        if covers && let Ok(mut slot) = self.frame.lock() {
            *slot = Some(frame.clone());
        }
        Ok(())
    }

    fn end(&mut self) -> ProsvgResult<()> {
        Ok(())
    }
}
