//! scenely: a scene-stepping presentation player for the terminal.

use std::{
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use log::info;
use scenely_core::{
    app::{FlowConfig, SceneApp, TickResult},
    deck::SceneSource,
    render::FlowMode,
};
use scenely_hal_term::{
    deck::TomlDeck, input::TermInput, render::TermRenderer, terminal::TermSession,
};

use location_sync::LocationSync;

#[path = "main/demo_deck.rs"]
mod demo_deck;
#[path = "main/location_sync.rs"]
mod location_sync;

const FRAME_MS: u64 = 16;
const LOG_FILE: &str = "scenely.log";

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum FlowArg {
    Paged,
    Scrolling,
}

#[derive(Debug, Parser)]
#[command(name = "scenely", about = "Scene-stepping presentation player")]
struct Args {
    /// TOML deck to present; the built-in demo deck when omitted.
    deck: Option<PathBuf>,

    /// Restore a shared position, e.g. `--at scene-5`.
    #[arg(long)]
    at: Option<String>,

    /// Scene layout: one panel at a time, or a scrollable stack.
    #[arg(long, value_enum, default_value = "paged")]
    flow: FlowArg,

    /// Show the periodic swipe hint.
    #[arg(long)]
    hint: bool,

    /// Skip the loading overlay.
    #[arg(long)]
    no_loading: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let final_fragment = match &args.deck {
        Some(path) => {
            let deck =
                TomlDeck::load(path).with_context(|| format!("loading deck {}", path.display()))?;
            // The deck presents for the rest of the process; so does its title.
            let title: &'static str = Box::leak(deck.title().to_owned().into_boxed_str());
            run(deck, title, &args)?
        }
        None => run(demo_deck::deck(), demo_deck::TITLE, &args)?,
    };

    if let Some(fragment) = final_fragment {
        println!("resume with: scenely --at {fragment}");
    }
    Ok(())
}

fn run<DS>(deck: DS, title: &'static str, args: &Args) -> anyhow::Result<Option<String>>
where
    DS: SceneSource,
{
    let flow = match args.flow {
        FlowArg::Paged => FlowMode::Paged,
        FlowArg::Scrolling => FlowMode::Scrolling,
    };
    let config = FlowConfig {
        flow,
        show_hint: args.hint,
        show_loading: !args.no_loading,
    };

    let session = TermSession::enter()?;
    let input = TermInput::new(deck.scene_count(), flow)?;

    let mut app = SceneApp::new(deck, input, config, title);
    let mut viewport_rows = app.input().viewport_rows();
    app.set_viewport_height(viewport_rows);
    let extents = app.input().scene_extents();
    app.set_scene_extents(&extents);
    app.restore_from_location(args.at.as_deref().unwrap_or(""), 0);

    let mut renderer = TermRenderer::new();
    let mut location = LocationSync::new();
    let epoch = Instant::now();

    loop {
        let now_ms = epoch.elapsed().as_millis() as u64;

        if app.tick(now_ms) == TickResult::RenderRequested {
            let offset = app.input().scroll_offset();
            let mut drawn = Ok(());
            app.with_frame(now_ms, |frame| {
                drawn = renderer.draw(&frame, app.deck(), offset);
            });
            drawn?;
        }

        if let Some(fragment) = app.take_fragment_write() {
            location.apply(&fragment, now_ms);
        }
        if let Some(target) = app.take_scroll_request() {
            app.input_mut().scroll_to_scene(target);
        }

        // Resizes change the per-scene extents along with the viewport.
        let rows = app.input().viewport_rows();
        if rows != viewport_rows {
            viewport_rows = rows;
            let extents = app.input().scene_extents();
            app.set_scene_extents(&extents);
        }

        if app.input().quit_requested() {
            break;
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }

    drop(session);
    info!("session: fragments_applied={}", location.writes());
    Ok(location.current().map(str::to_owned))
}

fn init_logging() {
    // The alternate screen owns the terminal; logs go to a file instead,
    // and only when the operator asked for them.
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = std::fs::File::create(LOG_FILE) else {
        return;
    };
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
