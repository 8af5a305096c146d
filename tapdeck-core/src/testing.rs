//! Test doubles for the hardware capability traits

use std::cell::Cell;
use std::string::String;
use std::vec::Vec;

use crate::geometry::{Point, Region};
use crate::traits::{
    Color, LcdController, LcdError, Layer, TextAlign, TickSource, Ticks, TouchError, TouchPanel,
    TouchSample,
};

/// One recorded LCD call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Init,
    InitLayer(Layer),
    DisplayOn,
    Select(Layer),
    Clear(Color),
    TextColor(Color),
    BackColor(Color),
    Polygon(Vec<Point>),
    Circle(Point, u16),
    Rect(Region),
    FillRect(Region),
    Text(Point, String, TextAlign),
    WaitVsync,
    Present(Layer),
}

/// LCD that records every call and never blocks on vsync
#[derive(Debug, Default)]
pub struct MockLcd {
    pub ops: Vec<DrawOp>,
    pub visible: Option<Layer>,
    pub fail_layer: Option<Layer>,
}

impl MockLcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Present(_)))
            .count()
    }

    /// Operations after the last `Present`
    pub fn since_last_present(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Present(_)))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Operations of the last complete frame (between the last two presents)
    pub fn last_frame(&self) -> &[DrawOp] {
        let presents: Vec<usize> = self
            .ops
            .iter()
            .enumerate()
            .filter(|(_, op)| matches!(op, DrawOp::Present(_)))
            .map(|(i, _)| i)
            .collect();
        let end = *presents.last().expect("no frame presented");
        let start = presents.len().checked_sub(2).map_or(0, |i| presents[i] + 1);
        &self.ops[start..end]
    }

    pub fn texts(&self, ops: &[DrawOp]) -> Vec<String> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::Text(_, text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every present must directly follow a vsync wait
    pub fn assert_presents_gated_by_vsync(&self) {
        for (i, op) in self.ops.iter().enumerate() {
            if matches!(op, DrawOp::Present(_)) {
                assert!(i > 0, "present without vsync wait");
                assert_eq!(self.ops[i - 1], DrawOp::WaitVsync);
            }
        }
    }
}

impl LcdController for MockLcd {
    fn init(&mut self) -> Result<(), LcdError> {
        self.ops.push(DrawOp::Init);
        Ok(())
    }

    fn init_layer(&mut self, layer: Layer) -> Result<(), LcdError> {
        if self.fail_layer == Some(layer) {
            return Err(LcdError::LayerInitFailed(layer));
        }
        self.ops.push(DrawOp::InitLayer(layer));
        Ok(())
    }

    fn display_on(&mut self) {
        self.ops.push(DrawOp::DisplayOn);
    }

    fn dimensions(&self) -> (u16, u16) {
        (480, 272)
    }

    fn select_layer(&mut self, layer: Layer) {
        self.ops.push(DrawOp::Select(layer));
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_text_color(&mut self, color: Color) {
        self.ops.push(DrawOp::TextColor(color));
    }

    fn set_back_color(&mut self, color: Color) {
        self.ops.push(DrawOp::BackColor(color));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.ops.push(DrawOp::Polygon(points.to_vec()));
    }

    fn fill_circle(&mut self, center: Point, radius: u16) {
        self.ops.push(DrawOp::Circle(center, radius));
    }

    fn draw_rect(&mut self, region: Region) {
        self.ops.push(DrawOp::Rect(region));
    }

    fn fill_rect(&mut self, region: Region) {
        self.ops.push(DrawOp::FillRect(region));
    }

    fn draw_text(&mut self, position: Point, text: &str, align: TextAlign) {
        self.ops.push(DrawOp::Text(position, text.into(), align));
    }

    fn present(&mut self, layer: Layer) {
        self.visible = Some(layer);
        self.ops.push(DrawOp::Present(layer));
    }

    fn in_vertical_blank(&self) -> bool {
        true
    }

    fn wait_for_vsync(&mut self) {
        self.ops.push(DrawOp::WaitVsync);
    }
}

/// Touch panel replaying a scripted sequence of samples
#[derive(Debug, Default)]
pub struct ScriptedTouch {
    pub samples: Vec<TouchSample>,
    pub reads: usize,
    pub initialized: Option<(u16, u16)>,
    pub fail_init: bool,
}

impl ScriptedTouch {
    pub fn new(samples: &[TouchSample]) -> Self {
        Self {
            samples: samples.to_vec(),
            ..Self::default()
        }
    }
}

impl TouchPanel for ScriptedTouch {
    fn init(&mut self, width: u16, height: u16) -> Result<(), TouchError> {
        if self.fail_init {
            return Err(TouchError::NotDetected);
        }
        self.initialized = Some((width, height));
        Ok(())
    }

    fn read(&mut self) -> TouchSample {
        let sample = self
            .samples
            .get(self.reads)
            .copied()
            .unwrap_or(TouchSample::Released);
        self.reads += 1;
        sample
    }
}

/// Clock advanced by hand
#[derive(Debug, Default)]
pub struct ManualClock {
    pub now: Cell<u32>,
}

impl ManualClock {
    pub fn at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }
}

impl TickSource for ManualClock {
    fn now(&self) -> Ticks {
        Ticks(self.now.get())
    }
}

impl TickSource for &ManualClock {
    fn now(&self) -> Ticks {
        Ticks(self.now.get())
    }
}
