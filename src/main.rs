// main.rs
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

use qwstpad_demos::config::{self, Settings};
use qwstpad_demos::demos::arena::ArenaDemo;
use qwstpad_demos::demos::led_wave::LedWaveDemo;
use qwstpad_demos::demos::maze::{FixedMazeDemo, RandomMazeDemo};
use qwstpad_demos::demos::pad_detect::PadDetect;
use qwstpad_demos::demos::read_all::ReadAll;
use qwstpad_demos::demos::{Demo, DemoError, connect_one};
use qwstpad_demos::logger;
use qwstpad_demos::pad::DEFAULT_ADDRESS;
use qwstpad_demos::pad::sim::SimBus;
use qwstpad_demos::render::framebuffer::Framebuffer;
use qwstpad_demos::render::pad_view::draw_pad_strip;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DemoKind {
    ReadAll,
    LedWave,
    PadDetect,
    Arena,
    Maze,
    RandomMaze,
}

impl DemoKind {
    fn title(self) -> &'static str {
        match self {
            DemoKind::ReadAll => "QwSTPad - Read All",
            DemoKind::LedWave => "QwSTPad - LED Wave",
            DemoKind::PadDetect => "QwSTPad - Pad Detect",
            DemoKind::Arena => "QwSTPad - Arena",
            DemoKind::Maze => "QwSTPad - Maze",
            DemoKind::RandomMaze => "QwSTPad - Random Maze",
        }
    }

    /// Slots plugged in at start-up unless `--pads` says otherwise.
    fn default_pads(self) -> usize {
        match self {
            DemoKind::Arena => 4,
            DemoKind::PadDetect => 2,
            _ => 1,
        }
    }
}

/// QwSTPad demos on a simulated display. F1-F4 plug and unplug the pads.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(value_enum)]
    demo: DemoKind,

    /// Seed for the random maze. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Window pixels per display pixel.
    #[arg(long, default_value_t = config::DEFAULT_SCALE, value_parser = clap::value_parser!(i32).range(1..=8))]
    scale: i32,

    /// Pads plugged in at start-up (0-4).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
    pads: Option<u8>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn build_demo(kind: DemoKind, bus: &mut SimBus, seed: u64) -> Result<Box<dyn Demo>, DemoError> {
    let demo: Box<dyn Demo> = match kind {
        DemoKind::ReadAll => Box::new(ReadAll::new(connect_one(bus, DEFAULT_ADDRESS)?)),
        DemoKind::LedWave => Box::new(LedWaveDemo::new(connect_one(bus, DEFAULT_ADDRESS)?)?),
        DemoKind::PadDetect => Box::new(PadDetect::new(bus.clone())),
        DemoKind::Arena => Box::new(ArenaDemo::connect(bus)?),
        DemoKind::Maze => Box::new(FixedMazeDemo::new(connect_one(bus, DEFAULT_ADDRESS)?)),
        DemoKind::RandomMaze => {
            let pad = connect_one(bus, DEFAULT_ADDRESS)?;
            Box::new(RandomMazeDemo::new(pad, StdRng::seed_from_u64(seed))?)
        }
    };
    Ok(demo)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.log_level).context("installing logger")?;

    let settings = Settings {
        seed: args.seed.unwrap_or_else(rand::random),
        scale: args.scale,
        pads: args.pads.map_or(args.demo.default_pads(), usize::from),
    };
    info!("{:?}: seed {}, {} pad(s)", args.demo, settings.seed, settings.pads);

    let mut bus = SimBus::new(settings.pads);
    let (window_width, window_height) = settings.window_size();
    let (mut window, raylib_thread) = raylib::init()
        .size(window_width, window_height)
        .title(args.demo.title())
        .build();

    let mut demo = match build_demo(args.demo, &mut bus, settings.seed) {
        Ok(demo) => demo,
        Err(DemoError::Pad(e)) => {
            error!("{e}");
            return Err(anyhow!("QwSTPad: Not Connected ... Exiting"));
        }
        Err(e) => return Err(e).context("starting demo"),
    };

    let image = Image::gen_image_color(config::SCREEN_WIDTH, config::SCREEN_HEIGHT, Color::BLACK);
    let mut texture = window
        .load_texture_from_image(&raylib_thread, &image)
        .map_err(|e| anyhow!("creating display texture: {e}"))?;

    let mut framebuffer = Framebuffer::new(config::SCREEN_WIDTH as u32, config::SCREEN_HEIGHT as u32);
    framebuffer.set_backlight(config::BRIGHTNESS);

    let screen_height = config::SCREEN_HEIGHT * settings.scale;
    let mut outcome = Ok(());

    while !window.window_should_close() {
        bus.sample(&window);
        let dt = window.get_frame_time();

        if let Err(e) = demo.update(dt) {
            error!("{e}");
            outcome = Err(anyhow!("QwSTPad: Disconnected .. Exiting"));
            break;
        }

        demo.draw(&mut framebuffer);
        framebuffer.upload_to_texture(&mut texture);
        let slots = bus.snapshot();

        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            framebuffer.present(&mut d, &texture, settings.scale);
            draw_pad_strip(&mut d, &slots, screen_height, window_width, config::PAD_STRIP_HEIGHT);
        }

        // ~60 FPS (16 ms)
        thread::sleep(Duration::from_millis(config::FRAME_MS));
    }

    // turn the hardware off: LEDs, backlight, then one black frame
    demo.shutdown();
    framebuffer.set_backlight(0.0);
    framebuffer.set_pen(Color::BLACK);
    framebuffer.clear();
    framebuffer.upload_to_texture(&mut texture);
    {
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        framebuffer.present(&mut d, &texture, settings.scale);
    }
    info!("bye");

    outcome
}
