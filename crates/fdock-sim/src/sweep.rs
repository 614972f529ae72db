//! `sweep`: drag a pointer across a dock at a fixed frame rate and record
//! every frame.
//!
//! The dock is laid out with [`StackedLayout`] from its own rendered sizes,
//! re-arranged after each tick the way a flex container would reflow. Once
//! the pointer has crossed the dock it leaves, and frames keep coming until
//! every item is back at rest or the settle budget runs out.
//!
//! Frame deltas come from a [`FrameClock`] fed synthetic timestamps, so a
//! very low `--fps` sees the same per-tick cap a live host would.

use std::io::Write;
use std::time::Duration;

use clap::Args;
use fdock::{Dock, DockConfig, DockFrame, DockItem, StackedLayout};
use fdock_core::event::PointerEvent;
use fdock_core::frame_clock::{FrameClock, Instant};
use fdock_core::geometry::{Axis, Point, Rect};
use serde::Serialize;

use crate::error::{Result, SimError};
use crate::options::ConfigArgs;
use crate::output::{Format, OutputArgs, write_json_line};

#[derive(Debug, Clone, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub dock: ConfigArgs,

    /// Number of items in the dock.
    #[arg(long, default_value_t = 5)]
    pub items: usize,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Pointer speed along the dock in pixels per second.
    #[arg(long, default_value_t = 300.0)]
    pub speed: f64,

    /// Longest time to keep ticking after the pointer leaves, in seconds.
    #[arg(long, default_value_t = 2.0)]
    pub settle: f64,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Upper bound on frames per phase (crossing, settling).
pub const MAX_FRAMES: u64 = 1_000_000;

/// Upper bound on dock size.
pub const MAX_ITEMS: usize = 10_000;

/// Parameters of one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPlan {
    pub items: usize,
    pub fps: u32,
    pub speed: f64,
    pub settle: Duration,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self {
            items: 5,
            fps: 60,
            speed: 300.0,
            settle: Duration::from_secs(2),
        }
    }
}

impl SweepPlan {
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(SimError::invalid("--fps must be at least 1"));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(SimError::invalid(format!(
                "--speed must be a positive number, got {}",
                self.speed
            )));
        }
        if self.items > MAX_ITEMS {
            return Err(SimError::invalid(format!(
                "--items must be at most {MAX_ITEMS}, got {}",
                self.items
            )));
        }
        self.settle_frames()?;
        Ok(())
    }

    fn settle_frames(&self) -> Result<u64> {
        let frames = (self.settle.as_secs_f64() * f64::from(self.fps)).ceil();
        if frames > MAX_FRAMES as f64 {
            return Err(SimError::invalid(format!(
                "--settle needs {frames} frames at {} fps, limit is {MAX_FRAMES}",
                self.fps
            )));
        }
        Ok(frames as u64)
    }

    /// Frames needed to cross `extent` pixels.
    fn crossing_frames(&self, extent: f64) -> Result<u64> {
        let frames = (extent / (self.speed / f64::from(self.fps))).ceil();
        if !frames.is_finite() || frames > MAX_FRAMES as f64 {
            return Err(SimError::invalid(format!(
                "--speed {} crosses the dock in more than {MAX_FRAMES} frames",
                self.speed
            )));
        }
        Ok(frames as u64)
    }

    fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }
}

impl TryFrom<&SweepArgs> for SweepPlan {
    type Error = SimError;

    fn try_from(args: &SweepArgs) -> Result<Self> {
        if !(args.settle.is_finite() && args.settle >= 0.0) {
            return Err(SimError::invalid(format!(
                "--settle must be a non-negative number, got {}",
                args.settle
            )));
        }
        let settle = Duration::try_from_secs_f64(args.settle).map_err(|_| {
            SimError::invalid(format!("--settle is out of range, got {}", args.settle))
        })?;
        let plan = Self {
            items: args.items,
            fps: args.fps,
            speed: args.speed,
            settle,
        };
        plan.validate()?;
        Ok(plan)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSize {
    pub id: String,
    pub size: f64,
}

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub time_ms: f64,
    /// Pointer position along the primary axis; `None` once it has left.
    pub pointer: Option<f64>,
    pub hovered: Option<String>,
    pub visibility: &'static str,
    pub sizes: Vec<ItemSize>,
    pub needs_frame: bool,
}

impl FrameRecord {
    fn new(frame: &DockFrame, time: Duration, pointer: Option<f64>) -> Self {
        Self {
            frame: frame.index,
            time_ms: time.as_secs_f64() * 1000.0,
            pointer,
            hovered: frame.hovered.as_ref().map(|id| id.as_str().to_owned()),
            visibility: frame.visibility.as_str(),
            sizes: frame
                .items
                .iter()
                .map(|item| ItemSize {
                    id: item.id.as_str().to_owned(),
                    size: item.size,
                })
                .collect(),
            needs_frame: frame.needs_frame,
        }
    }
}

fn sample_items(count: usize) -> Vec<DockItem> {
    (0..count)
        .map(|i| DockItem::new(format!("item-{i}"), format!("Item {i}")).href(format!("/item/{i}")))
        .collect()
}

/// Container large enough for every item at peak size.
fn container(config: &DockConfig, items: usize) -> Rect {
    let peak = config.magnifier().peak();
    let padding = fdock::geometry::DEFAULT_PADDING;
    let gap = fdock::geometry::DEFAULT_GAP;
    let main = items as f64 * peak + items.saturating_sub(1) as f64 * gap + 2.0 * padding;
    let cross = peak + 2.0 * padding;
    match config.orientation().primary_axis() {
        Axis::Horizontal => Rect::new(0.0, 0.0, main, cross),
        Axis::Vertical => Rect::new(0.0, 0.0, cross, main),
    }
}

fn point_on(axis: Axis, along: f64, across: f64) -> Point {
    match axis {
        Axis::Horizontal => Point::new(along, across),
        Axis::Vertical => Point::new(across, along),
    }
}

/// Run a sweep and return every frame.
pub fn simulate(config: &DockConfig, plan: &SweepPlan) -> Result<Vec<FrameRecord>> {
    plan.validate()?;
    let axis = config.orientation().primary_axis();
    let base = config.base_size();
    let interval = plan.interval();
    let bounds = container(config, plan.items);
    let crossing_frames = plan.crossing_frames(bounds.extent(axis))?;
    let settle_frames = plan.settle_frames()?;

    let mut dock = Dock::new(config.clone(), sample_items(plan.items));
    dock.set_bounds(Some(bounds));
    let mut layout = StackedLayout::new(bounds, config.orientation());
    layout.arrange(dock.items(), |id| dock.size_of(id).unwrap_or(base));

    // The pointer arrives over the anchored edge.
    dock.set_trigger_zone(true);

    let origin = Instant::now();
    let mut clock = FrameClock::new();
    clock.tick_at(origin);

    let mut records = Vec::new();
    let mut time = Duration::ZERO;
    let start = bounds.start(axis);
    let across = bounds.start(axis.cross()) + bounds.extent(axis.cross()) / 2.0;
    let step = plan.speed / f64::from(plan.fps);

    for i in 0..crossing_frames {
        let along = start + step * i as f64;
        let p = point_on(axis, along, across);
        dock.handle_pointer(&PointerEvent::moved(p.x, p.y));
        time += interval;
        let frame = dock.tick(clock.tick_at(origin + time), &layout);
        records.push(FrameRecord::new(&frame, time, Some(along)));
        layout.arrange(dock.items(), |id| dock.size_of(id).unwrap_or(base));
    }

    dock.handle_pointer(&PointerEvent::left());
    for _ in 0..settle_frames {
        time += interval;
        let frame = dock.tick(clock.tick_at(origin + time), &layout);
        let done = !frame.needs_frame;
        records.push(FrameRecord::new(&frame, time, None));
        layout.arrange(dock.items(), |id| dock.size_of(id).unwrap_or(base));
        if done {
            break;
        }
    }

    tracing::info!(
        message = "sim.sweep",
        frames = records.len(),
        items = plan.items,
        settled = dock.is_settled()
    );
    Ok(records)
}

pub fn run_sweep(args: SweepArgs) -> Result<()> {
    let plan = SweepPlan::try_from(&args)?;
    let config = args.dock.resolve()?;
    let records = simulate(&config, &plan)?;

    let mut out = args.out.open()?;
    match args.out.format {
        Format::Table => write_table(&mut *out, &records)?,
        Format::Json => {
            for record in &records {
                write_json_line(&mut *out, record)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_table(out: &mut dyn Write, records: &[FrameRecord]) -> Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };
    write!(out, "{:>6}  {:>9}  {:>8}", "frame", "time_ms", "pointer")?;
    for item in &first.sizes {
        write!(out, "  {:>8}", item.id)?;
    }
    writeln!(out)?;
    for record in records {
        let pointer = record
            .pointer
            .map_or_else(|| "-".to_owned(), |p| format!("{p:.1}"));
        write!(
            out,
            "{:>6}  {:>9.1}  {:>8}",
            record.frame, record.time_ms, pointer
        )?;
        for item in &record.sizes {
            write!(out, "  {:>8.2}", item.size)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_size(records: &[FrameRecord], index: usize) -> f64 {
        records
            .iter()
            .map(|r| r.sizes[index].size)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[test]
    fn sweep_magnifies_then_settles_at_base() {
        let records = simulate(&DockConfig::default(), &SweepPlan::default()).unwrap();
        assert!(!records.is_empty());
        assert!(max_size(&records, 2) > 65.0);

        let last = records.last().unwrap();
        assert!(last.pointer.is_none());
        assert!(!last.needs_frame);
        for item in &last.sizes {
            assert!((item.size - 52.0).abs() < 0.5, "{item:?}");
        }
    }

    #[test]
    fn every_item_gets_hovered_on_the_way() {
        let records = simulate(&DockConfig::default(), &SweepPlan::default()).unwrap();
        for i in 0..5 {
            let id = format!("item-{i}");
            assert!(
                records.iter().any(|r| r.hovered.as_deref() == Some(id.as_str())),
                "{id} never hovered"
            );
        }
    }

    #[test]
    fn vertical_sweep_matches_horizontal() {
        let plan = SweepPlan::default();
        let bottom = simulate(&DockConfig::default(), &plan).unwrap();
        let left = simulate(
            &DockConfig::default().with_orientation(fdock::Orientation::Left),
            &plan,
        )
        .unwrap();
        assert_eq!(bottom.len(), left.len());
        for (a, b) in bottom.iter().zip(&left) {
            assert_eq!(a.sizes, b.sizes);
        }
    }

    #[test]
    fn empty_dock_records_frames_without_items() {
        let plan = SweepPlan {
            items: 0,
            ..SweepPlan::default()
        };
        let records = simulate(&DockConfig::default(), &plan).unwrap();
        assert!(records.iter().all(|r| r.sizes.is_empty()));
    }

    #[test]
    fn zero_fps_rejected() {
        let plan = SweepPlan {
            fps: 0,
            ..SweepPlan::default()
        };
        assert!(simulate(&DockConfig::default(), &plan).is_err());
    }

    #[test]
    fn crawling_pointer_rejected() {
        let plan = SweepPlan {
            speed: 1e-30,
            ..SweepPlan::default()
        };
        let err = simulate(&DockConfig::default(), &plan).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument { .. }), "{err}");
    }

    #[test]
    fn endless_settle_rejected() {
        let plan = SweepPlan {
            settle: Duration::MAX,
            ..SweepPlan::default()
        };
        assert!(matches!(
            simulate(&DockConfig::default(), &plan),
            Err(SimError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn oversized_dock_rejected() {
        let plan = SweepPlan {
            items: MAX_ITEMS + 1,
            ..SweepPlan::default()
        };
        assert!(simulate(&DockConfig::default(), &plan).is_err());
    }

    #[test]
    fn unrepresentable_settle_argument_is_usage_error() {
        use clap::Parser;

        let cli = crate::cli::Cli::try_parse_from(["fdock-sim", "sweep", "--settle", "1e30"])
            .unwrap();
        let crate::cli::Commands::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        let err = SweepPlan::try_from(&args).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("--settle"));
    }

    #[test]
    fn table_has_header_and_one_row_per_frame() {
        let records = simulate(&DockConfig::default(), &SweepPlan::default()).unwrap();
        let mut buf = Vec::new();
        write_table(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), records.len() + 1);
        assert!(text.lines().next().unwrap().contains("item-0"));
    }
}
