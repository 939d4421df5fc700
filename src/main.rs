use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use signage::constants::FPS;
use signage::content::{ContentPools, TickerFeed};
use signage::content_loader::{load_media_dir, load_playlist};
use signage::presenter::{LogPresenter, Presenter};
use signage::{LayoutModeController, SchedulerConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Signage player: rotates media, ticker and sponsor ads")]
struct Args {
    /// JSON playlist with media, ads and ticker headlines
    #[arg(long, conflicts_with = "media_dir")]
    playlist: Option<PathBuf>,

    /// Directory of images/videos used as primary media (no ads)
    #[arg(long)]
    media_dir: Option<PathBuf>,

    /// Seconds between playlist reloads
    #[arg(long, requires = "playlist")]
    refresh_secs: Option<u64>,

    /// Default dwell for primary and sidebar items, in seconds
    #[arg(long, default_value_t = 10)]
    slot_secs: u64,

    /// Default dwell for stripe ads, in seconds
    #[arg(long, default_value_t = 10)]
    ad_secs: u64,

    /// Default dwell for fullscreen takeovers, in seconds
    #[arg(long, default_value_t = 15)]
    fullscreen_secs: u64,

    /// Ticker phase length between stripe ads, in seconds
    #[arg(long, default_value_t = 30)]
    ticker_secs: u64,

    /// Period of the fullscreen takeover trigger, in seconds
    #[arg(long, default_value_t = 60)]
    interrupt_secs: u64,

    /// Scheduler updates per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Seed for takeover selection, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many seconds instead of running until Ctrl-C
    #[arg(long)]
    run_secs: Option<u64>,
}

impl Args {
    fn config(&self) -> SchedulerConfig {
        SchedulerConfig::default()
            .with_slot_dwell(Duration::from_secs(self.slot_secs))
            .with_ad_dwell(Duration::from_secs(self.ad_secs))
            .with_fullscreen_dwell(Duration::from_secs(self.fullscreen_secs))
            .with_ticker_dwell(Duration::from_secs(self.ticker_secs))
            .with_interrupt_period(Duration::from_secs(self.interrupt_secs))
    }

    fn load_content(&self) -> Result<ContentPools> {
        if let Some(playlist) = &self.playlist {
            return load_playlist(playlist)
                .with_context(|| format!("loading playlist {}", playlist.display()));
        }
        if let Some(dir) = &self.media_dir {
            let media = load_media_dir(dir)
                .with_context(|| format!("loading media from {}", dir.display()))?;
            return Ok(ContentPools::partition(media, &[], TickerFeed::default()));
        }
        bail!("either --playlist or --media-dir is required")
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if args.fps == 0 {
        bail!("--fps must be at least 1");
    }

    let pools = args.load_content()?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut controller = LayoutModeController::start(&args.config(), rng, pools);
    let mut presenter = LogPresenter::new();

    let frame_time = Duration::from_secs(1) / args.fps;
    let mut frames = tokio::time::interval(frame_time);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let refresh_every = Duration::from_secs(args.refresh_secs.unwrap_or(0).max(1));
    let mut refresh = tokio::time::interval_at(tokio::time::Instant::now() + refresh_every, refresh_every);

    let deadline = args.run_secs.map(Duration::from_secs);
    let started = tokio::time::Instant::now();
    info!(?frame_time, "player started");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    // --- Main Loop ---
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("interrupted, shutting down");
                break;
            }
            _ = refresh.tick(), if args.refresh_secs.is_some() => {
                match args.load_content() {
                    Ok(pools) => controller.replace_content(pools),
                    Err(e) => error!("content refresh failed, keeping current pools: {e:#}"),
                }
            }
            _ = frames.tick() => {
                controller.advance_to(started.elapsed());
                presenter.present(&controller.frame());

                if deadline.is_some_and(|limit| controller.now() >= limit) {
                    info!(changes = presenter.changes(), "run length reached");
                    break;
                }
            }
        }
    }

    Ok(())
}
