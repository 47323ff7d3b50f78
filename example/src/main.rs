//! Simulates a paged feed driving a `MotionGrid` through its whole
//! lifecycle: app shell, first page entrance, load-more button, sentinel
//! paging, and the final settled layout.
//!
//! Run with `RUST_LOG=motion_grid=debug` to also see the controller's own
//! transition events.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};

use motion_grid::{
    AnimationKind, CellContent, ColumnSpec, FrameContent, GridFrame, GridRow, InnerPadding,
    MotionGrid, MotionGridArgs, PagingOptions, PagingState, SpringTuning,
};
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);

const IDLE: PagingState = PagingState {
    is_fetched_all: false,
    is_loading: false,
};
const LOADING: PagingState = PagingState {
    is_fetched_all: false,
    is_loading: true,
};
const DONE: PagingState = PagingState {
    is_fetched_all: true,
    is_loading: false,
};

fn main() {
    init_tracing();

    let fetch_requested = Arc::new(AtomicBool::new(false));
    let handler_flag = fetch_requested.clone();

    let columns = ColumnSpec::sequence([6, 6, 4, 4, 4, 12]).expect("widths fit the grid");
    let args = MotionGridArgs::default()
        .columns(columns)
        .animation(AnimationKind::BottomFade)
        .spring(SpringTuning::GENTLE)
        .inner_padding(InnerPadding::Uniform(8.0))
        .enable_paging(true)
        .paging(PagingOptions::new(move || {
            handler_flag.store(true, Ordering::SeqCst);
        }))
        .enable_placeholders(true)
        .placeholder_rows(2)
        .minimum_display_time(Duration::from_millis(250));
    let mut grid = MotionGrid::new(args);

    let mut clock = SimClock::new();
    let mut printer = FramePrinter::default();

    // nothing has loaded yet, so the first frame is the app shell
    let frame = grid.plan(clock.now, IDLE);
    printer.show(clock.elapsed(), &frame);
    print_rows(&frame);

    // the first page arrives while the shell window is still open
    clock.advance(Duration::from_millis(120));
    grid.sync_items(6);
    info!(items = grid.item_count(), "first page arrived");
    drive(&mut grid, &mut clock, IDLE, &mut printer);
    info!(settled = grid.is_settled(), "entrance finished");

    // the user presses the load-more button
    grid.notify_load_more_click(IDLE);
    assert!(fetch_requested.swap(false, Ordering::SeqCst));
    let frame = grid.plan(clock.now, LOADING);
    printer.show(clock.elapsed(), &frame);

    // the fetch lands after a while and appends the second page
    clock.advance(Duration::from_millis(200));
    grid.append_items(4);
    info!(items = grid.item_count(), "second page arrived");
    drive(&mut grid, &mut clock, IDLE, &mut printer);

    // the sentinel scrolls into view and requests the last page
    grid.notify_sentinel_visible(IDLE);
    assert!(fetch_requested.swap(false, Ordering::SeqCst));
    clock.advance(Duration::from_millis(200));
    grid.append_items(2);
    info!(items = grid.item_count(), "last page arrived");
    let frame = drive(&mut grid, &mut clock, DONE, &mut printer);

    info!(patches = grid.patch_count(), "feed complete");
    print_rows(&frame);
}

/// Runs the host frame loop until the grid stops asking for frames,
/// printing a line whenever the frame summary changes.
fn drive(
    grid: &mut MotionGrid,
    clock: &mut SimClock,
    paging: PagingState,
    printer: &mut FramePrinter,
) -> GridFrame {
    let mut frame = grid.plan(clock.now, paging);
    while grid.needs_frame(clock.now) {
        clock.advance(FRAME);
        grid.tick(clock.now);
        frame = grid.plan(clock.now, paging);
        printer.show(clock.elapsed(), &frame);
    }
    frame
}

struct SimClock {
    start: Instant,
    now: Instant,
}

impl SimClock {
    fn new() -> Self {
        let start = Instant::now();
        Self { start, now: start }
    }

    fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    fn elapsed(&self) -> Duration {
        self.now.duration_since(self.start)
    }
}

#[derive(Default)]
struct FramePrinter {
    last: Option<String>,
}

impl FramePrinter {
    fn show(&mut self, elapsed: Duration, frame: &GridFrame) {
        let line = summarize(frame);
        if self.last.as_deref() != Some(&line) {
            println!("[{:>5} ms] {line}", elapsed.as_millis());
            self.last = Some(line);
        }
    }
}

fn summarize(frame: &GridFrame) -> String {
    match &frame.content {
        FrameContent::Shell(rows) => format!("shell with {} placeholder rows", rows.len()),
        FrameContent::Patches(patches) => {
            let visible: usize = patches
                .iter()
                .flat_map(|patch| patch.rows.iter())
                .map(|row| row.cells.len())
                .sum();
            format!(
                "{} patches, {visible} cells visible, paging {:?}",
                patches.len(),
                frame.paging
            )
        }
    }
}

fn print_rows(frame: &GridFrame) {
    let rows: Vec<&GridRow> = match &frame.content {
        FrameContent::Shell(rows) => rows.iter().collect(),
        FrameContent::Patches(patches) => {
            patches.iter().flat_map(|patch| patch.rows.iter()).collect()
        }
    };
    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| match cell.content {
                CellContent::Item(ordinal) => format!("[item {ordinal:>2} w{}]", cell.width),
                CellContent::Placeholder => format!("[shimmer w{}]", cell.width),
            })
            .collect();
        println!("    {}", cells.join(" "));
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,example=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}
