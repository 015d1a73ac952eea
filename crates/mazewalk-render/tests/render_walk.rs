use mazewalk_core::Position;
use mazewalk_grid::layouts::escape_room;
use mazewalk_grid::Grid;
use mazewalk_render::{
    maze_frame, Color, DrawCommand, DrawList, Layout, LineSegment, Point, RenderObserver,
};
use mazewalk_test_utils::fixtures::corridor;
use mazewalk_test_utils::{script, RecordingObserver};
use mazewalk_walk::{run_batch_with, Step, WalkConfig, WalkObserver, WalkOutcome};

/// Fans events out to two observers.
struct Both<'a>(&'a mut RecordingObserver, &'a mut RenderObserver<DrawList>);

impl WalkObserver for Both<'_> {
    fn walk_started(&mut self, attempt: u32, grid: &Grid, start: Position) {
        self.0.walk_started(attempt, grid, start);
        self.1.walk_started(attempt, grid, start);
    }

    fn stepped(&mut self, attempt: u32, step: &Step) {
        self.0.stepped(attempt, step);
        self.1.stepped(attempt, step);
    }

    fn walk_finished(&mut self, attempt: u32, outcome: &WalkOutcome) {
        self.0.walk_finished(attempt, outcome);
        self.1.walk_finished(attempt, outcome);
    }
}

#[test]
fn corridor_walk_draws_frame_then_trail() {
    let layout = Layout::default();
    let g = corridor(3, 1);
    let mut render = RenderObserver::new(layout, DrawList::new());
    // north (blocked), east, east (escapes)
    run_batch_with(&g, g.start(), 1, script("nee"), &mut render).unwrap();

    let commands = render.into_canvas().take();
    let frame = maze_frame(&layout, &g);
    assert_eq!(&commands[..frame.len()], frame.as_slice());

    let trail = &commands[frame.len()..];
    let red = Color::RED;
    assert_eq!(
        trail,
        &[
            DrawCommand::Line(LineSegment {
                start: Point::new(75, 25),
                end: Point::new(125, 25),
                color: red,
            }),
            DrawCommand::Present,
            DrawCommand::Line(LineSegment {
                start: Point::new(125, 25),
                end: Point::new(175, 25),
                color: red,
            }),
            DrawCommand::Present,
        ]
    );
}

#[test]
fn escape_room_batch_draws_one_trail_line_per_accepted_move() {
    let layout = Layout::default();
    let g = escape_room().unwrap();
    let mut rec = RecordingObserver::new();
    let mut render = RenderObserver::new(layout, DrawList::new());
    let config = WalkConfig {
        attempts: 3,
        seed: 5,
        start: None,
    };
    config.run(&g, Both(&mut rec, &mut render)).unwrap();

    let list = render.into_canvas();
    let frame = maze_frame(&layout, &g);
    let frame_lines = frame
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line(_)))
        .count();
    let trail_lines = list.lines().filter(|l| l.color == layout.trail).count();
    let wall_lines = list.lines().filter(|l| l.color == layout.wall).count();

    assert_eq!(trail_lines, rec.accepted_steps());
    assert_eq!(wall_lines, 3 * frame_lines);
    let clears = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Clear(_)))
        .count();
    assert_eq!(clears, 3);
}
