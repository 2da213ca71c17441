//! Barometric altimeter simulator for desktop.
//!
//! Shows pressure, estimated altitude and an altitude-tinted background in
//! an `embedded-graphics-simulator` window. Pressure comes either from a
//! (synthetic) sensor polled on a worker thread, or from a slider the user
//! drags while in simulated mode.
//!
//! Pass `--no-sensor` to start without a pressure sensor.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]

mod input;
mod popup;
mod render;
mod screens;
mod sensor_feed;
mod state;
mod timing;
mod widgets;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use altimeter_common::animations::BackgroundFade;
use altimeter_common::colors::{BLACK, altitude_background};
use altimeter_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use altimeter_common::log::EventLog;
use altimeter_common::sensor::{PressureSource, SyntheticBarometer};
use altimeter_common::{AltimeterConfig, Page, PressureMode};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::MouseButton;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::input::{Action, SliderDrag, action_for_key, action_for_wheel};
use crate::popup::Popup;
use crate::render::{FrameKey, RenderState};
use crate::screens::{AltimeterView, LogStats, draw_altimeter_page, draw_log_page};
use crate::sensor_feed::{FeedChange, SensorFeed};
use crate::state::AltimeterState;
use crate::timing::{FRAME_TIME, SENSOR_INTERVAL};
use crate::widgets::draw_popup;

fn main() -> ExitCode {
    let mut state = match AltimeterState::new(AltimeterConfig::default()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("altimeter: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = *state.config();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Altimeter Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut log = EventLog::new();
    log.push("System started");

    // Sensor
    let source = if std::env::args().skip(1).any(|arg| arg == "--no-sensor") {
        SyntheticBarometer::unavailable()
    } else {
        SyntheticBarometer::default()
    };
    let sensor_available = source.is_available();
    if !sensor_available {
        log.push("No pressure sensor");
    }
    let mut feed = SensorFeed::new(source, SENSOR_INTERVAL);
    sync_feed(&mut feed, state.mode(), &mut log);

    // UI state
    let mut current_page = Page::default();
    let mut active_popup: Option<Popup> = None;
    let mut drag = SliderDrag::new();
    let mut show_fps = false;
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Render state
    let mut render_state = RenderState::new();
    let mut fade = BackgroundFade::new();
    if let Ok(result) = state.estimate() {
        fade.jump_to(altitude_background(result.intensity));
    }

    let mut readings_rejected = 0u32;
    let mut last_rejected: Option<u32> = None;
    let mut actions: Vec<Action> = Vec::with_capacity(8);

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            let action = match ev {
                SimulatorEvent::Quit => Some(Action::Quit),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Held arrow keys keep nudging, everything else fires once
                    action_for_key(keycode, current_page, &config)
                        .filter(|action| !repeat || matches!(action, Action::Nudge(_)))
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } if current_page == Page::Altimeter && state.mode() == PressureMode::Simulated => {
                    drag.press(point, &config)
                }
                SimulatorEvent::MouseMove { point } => drag.motion(point, &config),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } if drag.is_dragging() => {
                    drag.release();
                    None
                }
                SimulatorEvent::MouseWheel { scroll_delta, .. } => {
                    action_for_wheel(scroll_delta.y, current_page, &config)
                }
                _ => None,
            };
            if let Some(action) = action {
                actions.push(action);
            }
        }

        for action in actions.drain(..) {
            match action {
                Action::Quit => return ExitCode::SUCCESS,
                Action::ToggleMode => {
                    drag.release();
                    let mode = state.toggle_mode();
                    active_popup = Some(Popup::Mode(mode, Instant::now()));
                    log.push_fmt(format_args!("Mode: {}", mode.badge()));
                    sync_feed(&mut feed, mode, &mut log);
                }
                Action::Nudge(delta) => {
                    state.nudge_simulated(delta);
                }
                Action::SetSimulated(pressure) => {
                    state.set_simulated(pressure);
                }
                Action::ResetSimulated => {
                    if state.reset_simulated() {
                        log.push_fmt(format_args!("Reset to {:.2} hPa", config.reference_hpa));
                    }
                }
                Action::TogglePage => {
                    current_page = current_page.toggle();
                    active_popup = None;
                    drag.release();
                    render_state.invalidate();
                }
                Action::ToggleFps => {
                    show_fps = !show_fps;
                    active_popup = Some(Popup::Fps(show_fps, Instant::now()));
                }
            }
        }

        // Sensor readings
        if let Some(pressure) = feed.drain() {
            state.on_sensor_reading(pressure);
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }

        // Altitude and background
        let pressure = state.current_pressure();
        let estimate = state.estimate();
        match estimate {
            Ok(result) => {
                last_rejected = None;
                fade.set_target(altitude_background(result.intensity));
            }
            Err(err) => {
                // Keep the previous background; log each bad value once
                if last_rejected != Some(pressure.to_bits()) {
                    last_rejected = Some(pressure.to_bits());
                    readings_rejected = readings_rejected.wrapping_add(1);
                    log.push_fmt(format_args!("Rejected {pressure:.2} hPa ({err})"));
                }
            }
        }
        fade.update();

        // FPS calculation
        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }
        let fps = show_fps.then_some(current_fps);

        // Counters on the log page change without a new log line
        let content_revision = match current_page {
            Page::Altimeter => 0,
            Page::Log => log.revision().wrapping_add(state.readings_applied),
        };

        let key = FrameKey::new(
            current_page,
            state.mode(),
            pressure,
            fade.current(),
            active_popup.as_ref().map(Popup::message),
            fps,
            content_revision,
        );

        if render_state.needs_redraw(key) {
            match current_page {
                Page::Altimeter => {
                    let view = AltimeterView {
                        config: &config,
                        mode: state.mode(),
                        pressure_hpa: pressure,
                        estimate,
                        background: fade.current(),
                        // A lost worker leaves live mode without readings
                        sensor_available: sensor_available && (state.mode() != PressureMode::Live || feed.is_registered()),
                    };
                    draw_altimeter_page(&mut display, &view, fps);
                }
                Page::Log => {
                    let stats = LogStats {
                        readings_applied: state.readings_applied,
                        readings_rejected,
                        frames_drawn: render_state.frames_drawn,
                        frames_skipped: render_state.frames_skipped,
                    };
                    draw_log_page(&mut display, &log, &stats, state.mode(), fps);
                }
            }

            if let Some(ref popup) = active_popup {
                draw_popup(&mut display, popup.message());
            }
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Register or unregister the sensor feed for `mode` and log what changed.
fn sync_feed<S>(
    feed: &mut SensorFeed<S>,
    mode: PressureMode,
    log: &mut EventLog,
) where
    S: PressureSource + Send + 'static,
{
    match feed.sync(mode) {
        Ok(Some(FeedChange::Registered)) => log.push("Sensor registered"),
        Ok(Some(FeedChange::Unregistered)) => log.push("Sensor unregistered"),
        Ok(Some(FeedChange::SourceLost)) => log.push("Sensor worker lost"),
        Ok(None) => {}
        Err(err) => log.push_fmt(format_args!("Sensor start failed: {err}")),
    }
}
