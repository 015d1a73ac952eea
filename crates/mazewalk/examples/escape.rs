//! Run a batch of random walks out of the escape room.
//!
//! ```text
//! cargo run -p mazewalk --example escape -- [attempts] [seed]
//! RUST_LOG=debug cargo run -p mazewalk --example escape
//! ```
//!
//! Draw instructions are recorded into a [`DrawList`] rather than shown
//! in a window; the totals are printed at the end.

use log::info;
use mazewalk::grid::layouts::escape_room;
use mazewalk::prelude::*;
use mazewalk::render::LineSegment;
use std::env;
use std::error::Error;
use std::process;

/// Prints each walk's result as it finishes and feeds the renderer.
struct Console {
    render: RenderObserver<DrawList>,
}

impl WalkObserver for Console {
    fn walk_started(&mut self, attempt: u32, grid: &Grid, start: Position) {
        self.render.walk_started(attempt, grid, start);
    }

    fn stepped(&mut self, attempt: u32, step: &Step) {
        self.render.stepped(attempt, step);
    }

    fn walk_finished(&mut self, attempt: u32, outcome: &WalkOutcome) {
        println!("{outcome}");
        info!("walk {attempt} left through {}", outcome.exit);
    }
}

fn parse_args() -> Result<WalkConfig, Box<dyn Error>> {
    let mut config = WalkConfig::default();
    let mut args = env::args().skip(1);
    if let Some(attempts) = args.next() {
        config.attempts = attempts.parse()?;
    }
    if let Some(seed) = args.next() {
        config.seed = seed.parse()?;
    }
    Ok(config)
}

fn run() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = parse_args()?;
    let grid = escape_room()?;
    let layout = Layout::default();
    let (w, h) = layout.window_size(&grid);
    info!("escape room {}x{} ({w}x{h} px), start {}", grid.width(), grid.height(), grid.start());

    let mut console = Console {
        render: RenderObserver::new(layout, DrawList::new()),
    };
    let report = config.run(&grid, &mut console)?;
    println!("{report}");

    let list = console.render.into_canvas();
    let trail: Vec<&LineSegment> = list.lines().filter(|l| l.color == layout.trail).collect();
    println!(
        "Recorded {} draw commands ({} trail lines, {} presents); shortest walk {}, longest {}.",
        list.commands().len(),
        trail.len(),
        list.presents(),
        report.min_moves(),
        report.max_moves(),
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
