// Common test utilities for video integration tests
//
// A backend that records every host call and serves scripted events, and an
// engine that records every callback.

#![allow(dead_code)]

use retro_video::display::{HostEvent, VideoBackend, SCREEN_SIZE};
use retro_video::engine::{Engine, InputSink, MouseSink};
use retro_video::input::MouseReport;
use retro_video::VideoError;
use std::collections::VecDeque;

/// Host call made by the video context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    InitSubsystem,
    CreateWindow(String, u32, u32),
    CreateRenderer,
    SetLogicalSize(u32, u32),
    CreateTexture(u32, u32),
    SetCursorVisible(bool),
    DestroyTexture,
    DestroyRenderer,
    DestroyWindow,
    QuitSubsystem,
    UpdateTexture,
    Present,
    Warp(u16, u16),
}

/// Creation step a `RecordingBackend` can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Subsystem,
    Window,
    Renderer,
    LogicalSize,
    Texture,
}

pub struct RecordingBackend {
    pub calls: Vec<Call>,
    pub events: VecDeque<HostEvent>,
    pub fail_at: Option<Step>,
    /// Whether warps come back as motion events
    pub warp_echoes: bool,
    pub last_frame: Vec<u32>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            events: VecDeque::new(),
            fail_at: None,
            warp_echoes: true,
            last_frame: Vec::new(),
        }
    }

    pub fn failing_at(step: Step) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::new()
        }
    }

    pub fn without_warp_echo() -> Self {
        Self {
            warp_echoes: false,
            ..Self::new()
        }
    }

    pub fn push(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn warps(&self) -> Vec<(u16, u16)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Warp(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    fn step(&mut self, step: Step, call: Call) -> Result<(), VideoError> {
        self.calls.push(call);
        if self.fail_at != Some(step) {
            return Ok(());
        }
        let msg = "scripted failure".to_string();
        Err(match step {
            Step::Subsystem => VideoError::Subsystem(msg),
            Step::Window => VideoError::Window(msg),
            Step::Renderer => VideoError::Renderer(msg),
            Step::LogicalSize => VideoError::LogicalSize(msg),
            Step::Texture => VideoError::Texture(msg),
        })
    }
}

impl VideoBackend for RecordingBackend {
    fn init_subsystem(&mut self) -> Result<(), VideoError> {
        self.step(Step::Subsystem, Call::InitSubsystem)
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<(), VideoError> {
        self.step(
            Step::Window,
            Call::CreateWindow(title.to_string(), width, height),
        )
    }

    fn create_renderer(&mut self) -> Result<(), VideoError> {
        self.step(Step::Renderer, Call::CreateRenderer)
    }

    fn set_logical_size(&mut self, width: u32, height: u32) -> Result<(), VideoError> {
        self.step(Step::LogicalSize, Call::SetLogicalSize(width, height))
    }

    fn create_texture(&mut self, width: u32, height: u32) -> Result<(), VideoError> {
        self.step(Step::Texture, Call::CreateTexture(width, height))
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.calls.push(Call::SetCursorVisible(visible));
    }

    fn destroy_texture(&mut self) {
        self.calls.push(Call::DestroyTexture);
    }

    fn destroy_renderer(&mut self) {
        self.calls.push(Call::DestroyRenderer);
    }

    fn destroy_window(&mut self) {
        self.calls.push(Call::DestroyWindow);
    }

    fn quit_subsystem(&mut self) {
        self.calls.push(Call::QuitSubsystem);
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    fn update_texture(&mut self, pixels: &[u32]) -> Result<(), VideoError> {
        self.calls.push(Call::UpdateTexture);
        self.last_frame = pixels.to_vec();
        Ok(())
    }

    fn present(&mut self) -> Result<(), VideoError> {
        self.calls.push(Call::Present);
        Ok(())
    }

    fn warp_pointer(&mut self, x: u16, y: u16) -> bool {
        self.calls.push(Call::Warp(x, y));
        if self.warp_echoes {
            self.events.push_back(HostEvent::MouseMotion { x, y });
        }
        self.warp_echoes
    }
}

/// Engine stand-in recording every callback
pub struct RecordingEngine {
    pub screen: Vec<u8>,
    pub keys: Vec<u8>,
    pub mouse: Vec<MouseReport>,
    pub file_operation: bool,
    pub ended: usize,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            screen: vec![0; SCREEN_SIZE],
            keys: Vec::new(),
            mouse: Vec::new(),
            file_operation: false,
            ended: 0,
        }
    }
}

impl InputSink for RecordingEngine {
    fn input_event(&mut self, code: u8) {
        self.keys.push(code);
    }
}

impl MouseSink for RecordingEngine {
    fn mouse_event(&mut self, report: MouseReport) {
        self.mouse.push(report);
    }
}

impl Engine for RecordingEngine {
    fn screen(&self) -> &[u8] {
        &self.screen
    }

    fn file_operation_active(&self) -> bool {
        self.file_operation
    }

    fn prepare_end(&mut self) {
        self.ended += 1;
    }
}

pub fn report(x: u16, y: u16, left: bool, right: bool) -> MouseReport {
    MouseReport { x, y, left, right }
}
