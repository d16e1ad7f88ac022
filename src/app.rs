use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use futures::executor::block_on;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use crate::config::Config;
use crate::generators::{new_generator, Generator, GeneratorKind};
use crate::renderer::GraphicsContext;

/// Hands out redraw slots at a fixed rate. Late frames are not made up for.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    frame_time: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(frame_time: Duration, now: Instant) -> Self {
        Self {
            frame_time,
            next_frame: now,
        }
    }

    /// true if a frame is due; books the next slot when it is
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame = now + self.frame_time;
        true
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }
}

pub struct State {
    pub config: Config,
    pub gfx_ctx: GraphicsContext,
    pub maze_generator: Box<dyn Generator>,
}

impl State {
    fn update(&mut self) {
        self.maze_generator.step_generation();
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let verts = self.maze_generator.grid().render(&self.config);
        self.gfx_ctx.render(&verts)
    }
}

/// Opens the window and advances `kind` by one step per frame until the window
/// is closed.
pub fn run(config: Config, kind: GeneratorKind) -> anyhow::Result<()> {
    log::info!(
        "{:?}: {}x{} cells of {}px at {} fps",
        kind,
        config.rows,
        config.columns,
        config.cell_size,
        config.fps
    );

    let event_loop = EventLoop::new().context("failed to start the event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Maze Generation")
            .with_inner_size(PhysicalSize::new(config.width(), config.height()))
            .with_resizable(false)
            .build(&event_loop)
            .context("failed to open a window")?,
    );

    // Since main can't be async, we're going to need to block
    let gfx_ctx = block_on(GraphicsContext::new(window.clone()))?;

    let mut state = State {
        config,
        gfx_ctx,
        maze_generator: new_generator(kind, &config),
    };
    let mut clock = FrameClock::new(config.frame_time(), Instant::now());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key: Key::Named(NamedKey::Escape),
                        ..
                    },
                ..
            } => {
                log::info!("window closed");
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => {
                state.gfx_ctx.resize(*physical_size);
            }
            WindowEvent::RedrawRequested => {
                state.update();
                match state.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.gfx_ctx.size;
                        state.gfx_ctx.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of graphics memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("dropped frame: {:?}", e),
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if clock.tick(Instant::now()) {
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(clock.deadline()));
        }
        _ => {}
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_immediate() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(10), start);
        assert!(clock.tick(start));
        assert_eq!(clock.deadline(), start + Duration::from_millis(10));
    }

    #[test]
    fn holds_frames_until_deadline() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(10), start);
        assert!(clock.tick(start));
        assert!(!clock.tick(start + Duration::from_millis(5)));
        assert!(clock.tick(start + Duration::from_millis(10)));
        assert!(!clock.tick(start + Duration::from_millis(19)));
    }

    #[test]
    fn late_frames_do_not_pile_up() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(10), start);
        assert!(clock.tick(start));
        let late = start + Duration::from_millis(55);
        assert!(clock.tick(late));
        assert!(!clock.tick(late + Duration::from_millis(1)));
        assert_eq!(clock.deadline(), late + Duration::from_millis(10));
    }
}
