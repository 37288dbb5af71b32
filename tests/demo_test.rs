//! End-to-end runs of the demo game on a headless terminal.

use tui_arcade::core::Drawable;
use tui_arcade::demo::{Demo, PAUSED, PLAY};
use tui_arcade::term::{HeadlessTerminal, Terminal};
use tui_arcade::types::{Key, Vector2};

fn play(script: impl FnOnce(&mut HeadlessTerminal)) -> (Demo, HeadlessTerminal) {
    let mut term = HeadlessTerminal::new(80, 24);
    script(&mut term);
    let mut game = Demo::new(7);
    let mut machine = Demo::machine();
    machine.run(&mut game, &mut term).unwrap();
    (game, term)
}

#[test]
fn quit_key_ends_the_run_and_restores_the_terminal() {
    let (_, term) = play(|t| {
        t.push_idle(5).push_key('q');
    });

    assert_eq!(term.frames().len(), 6);
    assert_eq!(term.slept_ms(), 6 * 50);
    assert!(!term.is_raw());
    assert_eq!(term.exit_count(), 1);
}

#[test]
fn identical_input_gives_identical_frames() {
    let script = |t: &mut HeadlessTerminal| {
        t.push_idle(10)
            .push_key('d')
            .push_key(' ')
            .push_idle(20)
            .push_key('a')
            .push_key('w')
            .push_idle(5)
            .push_key('q');
    };
    let (a_game, a) = play(script);
    let (b_game, b) = play(script);

    assert_eq!(a.frames(), b.frames());
    assert_eq!(a_game.player, b_game.player);
    assert_eq!(a_game.trails, b_game.trails);
}

#[test]
fn ctrl_c_quits_too() {
    let (_, term) = play(|t| {
        t.push_idle(2).push_key(Key::Interrupt).push_idle(5);
    });
    assert_eq!(term.frames().len(), 3);
    assert_eq!(term.pending_input(), 5);
    assert_eq!(term.exit_count(), 1);
}

#[test]
fn frames_show_the_player() {
    let (_, term) = play(|t| {
        t.push_key('q');
    });
    let frame = term.last_frame().unwrap();
    assert!(frame.contains("*_*"));
    assert!(frame.contains('#'));
    assert_eq!(frame.lines().count(), 24);
}

#[test]
fn pause_freezes_the_world() {
    let (_, term) = play(|t| {
        t.push_key('p').push_idle(3).push_key('q');
    });

    let frames = term.frames();
    assert_eq!(frames.len(), 5);
    assert!(frames.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn pause_toggles_back_to_play() {
    let mut term = HeadlessTerminal::new(80, 24);
    term.push_key('p').push_key('q');
    let mut game = Demo::new(7);
    let mut machine = Demo::machine();
    machine.run(&mut game, &mut term).unwrap();
    assert_eq!(machine.state(), PAUSED);

    let mut term = HeadlessTerminal::new(80, 24);
    term.push_key('p').push_key('p').push_key('q');
    let mut machine = Demo::machine();
    machine.run(&mut Demo::new(7), &mut term).unwrap();
    assert_eq!(machine.state(), PLAY);
}

#[test]
fn space_toggles_the_wave_frame() {
    let (game, _) = play(|t| {
        t.push_key(' ').push_key('q');
    });
    assert_eq!(game.player.image().get(1, 0), '\\');
    assert_eq!(game.player.image().get(1, 2), '/');

    let (game, _) = play(|t| {
        t.push_key(' ').push_key(' ').push_key('q');
    });
    assert_eq!(game.player.image().get(1, 0), '/');
    assert_eq!(game.player.image().get(1, 2), '\\');
    assert_eq!(game.player.shape(), (4, 3));
}

#[test]
fn waving_redraws_before_the_next_tick() {
    let (_, term) = play(|t| {
        t.push_key(' ').push_key('q');
    });
    let frames = term.frames();
    assert_eq!(frames.len(), 3);
    assert!(frames[0].contains("\\|/"));
}

#[test]
fn resize_resyncs_world_bounds() {
    let (game, term) = play(|t| {
        t.push_resize(40, 12).push_key('q');
    });
    assert_eq!(game.physics.bounds(), Vector2::new(40.0, 12.0));
    assert_eq!(term.last_frame().unwrap().lines().count(), 12);
}

#[test]
fn jump_is_only_bound_on_the_ground() {
    let mut term = HeadlessTerminal::new(80, 24);
    term.push_idle(3).push_key('q');
    let mut game = Demo::new(7);
    let mut machine = Demo::machine();
    machine.run(&mut game, &mut term).unwrap();

    let airborne = game.physics.is_airborne(&game.player);
    assert_eq!(machine.is_key_bound('w'), !airborne);
    assert!(!machine.is_key_bound('s'));
    assert!(machine.is_key_bound('a') && machine.is_key_bound('d'));
    assert!(machine.is_key_bound(Key::Resize));
}

#[test]
fn everything_settles_inside_the_viewport() {
    let (game, _) = play(|t| {
        t.push_idle(600).push_key('q');
    });
    // One tick of travel past a wall is allowed; the next tick clamps it.
    let bounds = game.physics.bounds();
    for head in game.trails.iter().map(|n| n.body()).chain([&game.player]) {
        assert!(head.position().x >= -1.0, "{:?}", head.position());
        assert!(head.right() <= bounds.x + 1.0, "{:?}", head.position());
        assert!(head.bottom() <= bounds.y + 1.0, "{:?}", head.position());
    }
}
