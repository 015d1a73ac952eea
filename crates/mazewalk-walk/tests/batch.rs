use mazewalk_core::Position;
use mazewalk_grid::layouts::escape_room;
use mazewalk_test_utils::fixtures::{corridor, east_exit, open_grid, sealed_grid};
use mazewalk_test_utils::{script, RecordingObserver};
use mazewalk_walk::{
    run_batch, run_batch_with, run_walk, RandomDirections, Walk, WalkConfig, WalkState,
};

#[test]
fn scripted_batch_of_3_5_4_4_averages_4() {
    let g = east_exit();
    let report = run_batch(&g, g.start(), 4, script("nse nnswe wwwe snwe")).unwrap();
    assert_eq!(report.total_moves(), 16);
    assert_eq!(report.average_moves(), 4);
}

#[test]
fn each_walk_restarts_at_start() {
    let g = corridor(5, 2);
    let mut rec = RecordingObserver::new();
    run_batch_with(&g, g.start(), 3, script("e e e w w w"), &mut rec).unwrap();
    assert_eq!(
        rec.starts,
        vec![(0, Position::new(2, 0)), (1, Position::new(2, 0)), (2, Position::new(2, 0))]
    );
    for (attempt, outcome) in &rec.outcomes {
        let steps = rec.steps_of(*attempt);
        assert_eq!(steps.len() as u64, outcome.moves);
        assert_eq!(steps.first().unwrap().from, Position::new(2, 0));
        assert!(steps.last().unwrap().escaped);
        assert!(steps[..steps.len() - 1].iter().all(|s| !s.escaped));
    }
}

#[test]
fn corridor_walls_block_vertical_moves() {
    let g = corridor(3, 1);
    let outcome = run_walk(&g, g.start(), script("nsnsee")).unwrap();
    assert_eq!(outcome.moves, 6);
    assert_eq!(outcome.blocked, 4);
    assert_eq!(outcome.exit, Position::new(3, 0));
}

#[test]
fn escape_room_walks_are_reproducible() {
    let g = escape_room().unwrap();
    let config = WalkConfig {
        attempts: 5,
        seed: 2024,
        start: None,
    };
    let mut first = RecordingObserver::new();
    let a = config.run(&g, &mut first).unwrap();
    let b = config.run(&g, &mut RecordingObserver::new()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.attempts(), 5);
    for outcome in a.outcomes() {
        // The only exit is north of (1, 0).
        assert_eq!(outcome.exit, Position::new(1, -1));
        assert!(outcome.moves >= 1);
        assert!(outcome.blocked < outcome.moves);
    }
    assert_eq!(first.outcomes.len(), 5);
    assert!(a.min_moves() <= a.average_moves() && a.average_moves() <= a.max_moves());
}

#[test]
fn sealed_grid_walk_never_escapes_within_cap() {
    let g = sealed_grid(2, 2, 0, 0);
    let mut walk = Walk::new(&g, g.start(), RandomDirections::seeded(3)).unwrap();
    let steps: Vec<_> = walk.by_ref().take(1000).collect();
    assert_eq!(steps.len(), 1000);
    assert!(steps.iter().all(|s| s.blocked));
    assert_eq!(walk.state(), WalkState::InBounds(Position::new(0, 0)));
    assert!(walk.outcome().is_none());
}

#[test]
fn open_single_cell_always_one_move() {
    let g = open_grid(1, 1, 0, 0);
    let report = run_batch(&g, g.start(), 50, RandomDirections::seeded(11)).unwrap();
    assert!(report.outcomes().iter().all(|o| o.moves == 1));
    assert_eq!(report.average_moves(), 1);
    assert!(report.outcomes().iter().all(|o| !g.contains(o.exit)));
}
