//! Target Pong headless driver
//!
//! Runs a scripted session at a fixed 60 Hz frame clock: the pointer follows
//! the ball's height along the paddle's home column, and every frame goes
//! through input, update and draw exactly as a windowed host would drive it.
//!
//! With `--gpu` each frame is also rendered into an offscreen texture through
//! the wgpu pipeline.
//!
//! Usage: `target-pong [TUNING.json] [--seed N] [--seconds S] [--gpu]`

use std::path::PathBuf;

use glam::{UVec2, Vec2};

use target_pong::renderer::{RenderState, ViewTransform};
use target_pong::sim::SeededRandom;
use target_pong::{Game, InputEvent, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const WINDOW_SIZE: UVec2 = UVec2::new(1280, 720);

struct Options {
    tuning: Option<PathBuf>,
    seed: Option<u64>,
    seconds: f32,
    gpu: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        tuning: None,
        seed: None,
        seconds: 30.0,
        gpu: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(value.parse().map_err(|e| format!("bad seed: {e}"))?);
            }
            "--seconds" => {
                let value = args.next().ok_or("--seconds needs a value")?;
                options.seconds = value.parse().map_err(|e| format!("bad duration: {e}"))?;
            }
            "--gpu" => options.gpu = true,
            _ if options.tuning.is_none() && !arg.starts_with("--") => {
                options.tuning = Some(PathBuf::from(arg));
            }
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }
    Ok(options)
}

/// Court point to window pixel (top-left origin, y down)
fn court_to_window(view: &ViewTransform, p: Vec2) -> Vec2 {
    let clip = view.court_to_clip_point(p);
    let size = view.window_size.as_vec2();
    Vec2::new(
        (clip.x + 1.0) * 0.5 * size.x - 0.5,
        (1.0 - clip.y) * 0.5 * size.y - 0.5,
    )
}

/// Offscreen color target plus the pipeline drawing into it
struct OffscreenTarget {
    render: RenderState,
    view: wgpu::TextureView,
    _texture: wgpu::Texture,
}

impl OffscreenTarget {
    fn new(size: UVec2) -> Result<Self, String> {
        let instance = wgpu::Instance::default();
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| format!("no GPU adapter: {e}"))?;
        log::info!("GPU: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("target-pong-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        }))
        .map_err(|e| format!("device request failed: {e}"))?;

        let format = wgpu::TextureFormat::Rgba8UnormSrgb;
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen_target"),
            size: wgpu::Extent3d {
                width: size.x.max(1),
                height: size.y.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let render = RenderState::new(&device, &queue, format);

        Ok(Self {
            render,
            view,
            _texture: texture,
        })
    }
}

#[derive(Debug, Default)]
struct SessionStats {
    frames: u64,
    paddle_bounces: u32,
    wall_hits: u32,
    targets_popped: u32,
    targets_spawned: u32,
    max_vertices: usize,
    /// Vertices submitted to the GPU over the session
    gpu_vertices: u64,
}

fn run(options: Options) {
    let tuning = options
        .tuning
        .as_deref()
        .map(Tuning::load)
        .unwrap_or_default();

    let mut game = match options.seed {
        Some(seed) => {
            log::info!("Seed {seed}");
            Game::with_random(tuning, Box::new(SeededRandom::new(seed)))
        }
        None => Game::new(tuning),
    };

    let mut offscreen = if options.gpu {
        match OffscreenTarget::new(WINDOW_SIZE) {
            Ok(target) => Some(target),
            Err(e) => {
                log::warn!("GPU rendering disabled: {e}");
                None
            }
        }
    } else {
        None
    };

    let home_x = game.tuning().paddle_start().x;
    let frames = (options.seconds.max(0.0) / FRAME_DT).round() as u64;
    let mut stats = SessionStats::default();

    for frame_index in 0..frames {
        if let Some(view) = game.view().copied() {
            let target = Vec2::new(home_x, game.state().ball.pos.y);
            let pointer = court_to_window(&view, target);
            game.handle_input(
                &InputEvent::PointerMoved {
                    x: pointer.x,
                    y: pointer.y,
                },
                WINDOW_SIZE,
            );
        }

        let events = game.update(FRAME_DT);
        stats.paddle_bounces += events.paddle.is_some() as u32;
        stats.wall_hits += events.wall.is_some() as u32;
        stats.targets_popped += events.hits.len() as u32;
        stats.targets_spawned += events.spawned.is_some() as u32;

        let frame = game.draw(WINDOW_SIZE);
        stats.max_vertices = stats.max_vertices.max(frame.vertices.len());
        if let Some(target) = offscreen.as_mut() {
            target.render.draw(&frame, &target.view);
            stats.gpu_vertices += u64::from(target.render.vertex_count());
        }
        stats.frames += 1;

        if frame_index % 60 == 59 {
            let scores = game.state().scores;
            log::info!(
                "t={:.0}s score {}:{} live targets {} vertices {}",
                (frame_index + 1) as f32 * FRAME_DT,
                scores.left,
                scores.right,
                game.state().targets.live_count(),
                frame.vertices.len()
            );
        }
    }

    let scores = game.state().scores;
    log::info!("Session finished: {stats:?}");
    println!(
        "{} frames, score {}:{}, {}/{} targets popped, {} paddle bounces, {} wall hits, \
         peak {} vertices",
        stats.frames,
        scores.left,
        scores.right,
        stats.targets_popped,
        stats.targets_spawned,
        stats.paddle_bounces,
        stats.wall_hits,
        stats.max_vertices
    );
    if offscreen.is_some() {
        println!("{} vertices rendered offscreen", stats.gpu_vertices);
    }
}

fn main() {
    env_logger::init();
    log::info!("Target Pong (headless) starting...");

    match parse_args() {
        Ok(options) => run(options),
        Err(e) => {
            log::error!("{e}");
            eprintln!("usage: target-pong [TUNING.json] [--seed N] [--seconds S] [--gpu]");
            std::process::exit(2);
        }
    }
}
