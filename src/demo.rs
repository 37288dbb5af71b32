//! Demo game: a stick figure in a box of bouncing snake trails.
//!
//! States:
//! - [`INIT`]: build key bindings and sync the world to the viewport
//! - [`PLAY`]: the per-frame simulation loop
//! - [`PAUSED`]: input only, world frozen
//!
//! Controls: `a`/`d` walk (or steer while airborne), `w` jumps, space waves,
//! `p` pauses, `q` or Ctrl-C quits.

use anyhow::Result;

use crate::core::{
    CompositeSprite, Drawable, Image, Motion, PhysicsConfig, PhysicsEngine, SimpleRng, Sprite,
    SpriteNode,
};
use crate::engine::{Frame, Signal, SpriteCommand, StateId, StateMachine};
use crate::types::{Key, Vector2, VectorUpdate};

pub const INIT: StateId = StateId::INITIAL;
pub const PLAY: StateId = StateId(1);
pub const PAUSED: StateId = StateId(2);

/// Returned by the init handler once the world is ready.
pub const READY: Signal = Signal(1);

/// Seed used by the binary so every launch starts from the same world.
pub const DEMO_SEED: u32 = 0x00C0_FFEE;

pub const TRAIL_COUNT: usize = 20;
pub const TRAIL_LEN: usize = 10;

const DEMO_FRICTION: f64 = 0.8;

const PLAYER_ART: &str = "*_*\n/+\\\n | \n/ \\";
const WAVE_ART: &str = "*_*\n\\|/\n | \n/ \\";
const REST_ART: &str = "*_*\n/|\\\n | \n/ \\";

pub struct Demo {
    pub physics: PhysicsEngine,
    pub trails: Vec<SpriteNode>,
    pub player: Sprite,
    frame_ms: u64,
}

fn player_sprite(game: &mut Demo) -> &mut Sprite {
    &mut game.player
}

fn player_command(motion: Motion) -> SpriteCommand<Demo> {
    SpriteCommand::new(player_sprite, motion)
}

/// `#` head, `+` neck, `len` dashes, then a `-` tail leaf.
fn trail(len: usize) -> SpriteNode {
    let mut node = SpriteNode::from(Sprite::new("-"));
    for _ in 0..len {
        node = CompositeSprite::new(Sprite::new("-"), node).into();
    }
    node = CompositeSprite::new(Sprite::new("+"), node).into();
    CompositeSprite::new(Sprite::new("#"), node).into()
}

fn scatter(sprite: &mut Sprite, rng: &mut SimpleRng) {
    let dx = rng.int_between(1, 20) as f64;
    let dy = rng.int_between(1, 20) as f64;
    sprite.move_by(Vector2::new(dx, dy));
    let vx = rng.int_between(1, 20) as f64;
    let vy = rng.int_between(1, 20) as f64;
    sprite.set_velocity(Vector2::new(vx, vy));
}

impl Demo {
    pub fn new(seed: u32) -> Self {
        let physics = PhysicsEngine::new(PhysicsConfig::default().with_friction(DEMO_FRICTION));
        let frame_ms = (physics.time_step() * 1000.0).round() as u64;

        let mut rng = SimpleRng::new(seed);
        let mut trails: Vec<SpriteNode> = (0..TRAIL_COUNT).map(|_| trail(TRAIL_LEN)).collect();
        let mut player = Sprite::new(PLAYER_ART);
        for node in &mut trails {
            scatter(node.body_mut(), &mut rng);
        }
        scatter(&mut player, &mut rng);

        Self {
            physics,
            trails,
            player,
            frame_ms,
        }
    }

    /// Driver with every state bound.
    pub fn machine() -> StateMachine<Demo> {
        let mut machine = StateMachine::new();
        machine.bind_chained(INIT, READY, PLAY, Demo::initialize);
        machine.bind(PLAY, Demo::play);
        machine.bind(PAUSED, Demo::paused);
        machine
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    fn initialize(&mut self, frame: &mut Frame<'_, Demo>) -> Result<Signal> {
        frame.bind_action('w', player_command(Motion::shift(0.0, -1.0)));
        frame.bind_action('a', player_command(Motion::shift(-1.0, 0.0)));
        frame.bind_action('d', player_command(Motion::shift(1.0, 0.0)));
        frame.bind_key(Key::Resize, Demo::sync_bounds);
        frame.bind_key('q', Demo::quit);
        frame.bind_key(Key::Interrupt, Demo::quit);
        frame.bind_key(' ', Demo::wave);
        frame.bind_key('p', Demo::toggle_pause);
        self.sync_bounds(frame)?;
        Ok(READY)
    }

    fn play(&mut self, frame: &mut Frame<'_, Demo>) -> Result<Signal> {
        frame.poll_input(self)?;
        self.step();
        self.rebind_controls(frame);
        self.render(frame)?;
        frame.wait(self.frame_ms);
        Ok(Signal::NONE)
    }

    fn paused(&mut self, frame: &mut Frame<'_, Demo>) -> Result<Signal> {
        frame.poll_input(self)?;
        self.render(frame)?;
        frame.wait(self.frame_ms);
        Ok(Signal::NONE)
    }

    /// One simulation tick: trails first, then physics for every body.
    pub fn step(&mut self) {
        for node in &mut self.trails {
            node.propagate_trail();
        }
        for node in &mut self.trails {
            self.physics.advance(node.body_mut());
        }
        self.physics.advance(&mut self.player);
    }

    /// Airborne: steer by overriding horizontal speed, no jumping.
    /// Grounded: walk a column at a time and jump.
    fn rebind_controls(&self, frame: &mut Frame<'_, Demo>) {
        if self.physics.is_airborne(&self.player) {
            frame.bind_action('d', player_command(Motion::SetVelocity(VectorUpdate::x(5.0))));
            frame.bind_action('a', player_command(Motion::SetVelocity(VectorUpdate::x(-5.0))));
            frame.unbind_key('s');
            frame.unbind_key('w');
        } else {
            frame.bind_action('w', player_command(Motion::push(0.0, 10.0)));
            frame.bind_action('a', player_command(Motion::shift(-1.0, 0.0)));
            frame.bind_action('d', player_command(Motion::shift(1.0, 0.0)));
        }
    }

    pub fn render(&self, frame: &mut Frame<'_, Demo>) -> Result<()> {
        frame.clear();
        for node in &self.trails {
            node.draw(frame);
        }
        self.player.draw(frame);
        frame.present()
    }

    fn sync_bounds(&mut self, frame: &mut Frame<'_, Demo>) -> Result<()> {
        let (rows, cols) = frame.refresh_size()?;
        self.physics.set_bounds(cols as f64, rows as f64);
        Ok(())
    }

    fn quit(&mut self, frame: &mut Frame<'_, Demo>) -> Result<()> {
        frame.quit();
        Ok(())
    }

    fn toggle_pause(&mut self, frame: &mut Frame<'_, Demo>) -> Result<()> {
        match frame.state() {
            PLAY => frame.set_state(PAUSED),
            PAUSED => frame.set_state(PLAY),
            _ => {}
        }
        Ok(())
    }

    /// Swap in the waving pose and show it right away.
    fn wave(&mut self, frame: &mut Frame<'_, Demo>) -> Result<()> {
        self.player.set_image(Image::parse(WAVE_ART));
        frame.bind_key(' ', Demo::unwave);
        self.render(frame)
    }

    fn unwave(&mut self, frame: &mut Frame<'_, Demo>) -> Result<()> {
        self.player.set_image(Image::parse(REST_ART));
        frame.bind_key(' ', Demo::wave);
        self.render(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_is_seeded_deterministically() {
        let a = Demo::new(42);
        let b = Demo::new(42);
        assert_eq!(a.trails, b.trails);
        assert_eq!(a.player, b.player);

        let c = Demo::new(43);
        assert_ne!(a.player, c.player);
    }

    #[test]
    fn trails_have_expected_shape() {
        let demo = Demo::new(1);
        assert_eq!(demo.trails.len(), TRAIL_COUNT);
        for node in &demo.trails {
            assert_eq!(node.chain_len(), TRAIL_LEN + 3);
            let art: String = node.segments().map(|s| s.image().get(0, 0)).collect();
            assert!(art.starts_with("#+-"));
        }
    }

    #[test]
    fn heads_and_player_start_scattered() {
        let demo = Demo::new(9);
        for node in &demo.trails {
            let p = node.body().position();
            let v = node.body().velocity();
            assert!((1.0..=20.0).contains(&p.x) && (1.0..=20.0).contains(&p.y));
            assert!((1.0..=20.0).contains(&v.x) && (1.0..=20.0).contains(&v.y));
            // Only the head moves at setup; the rest catch up via trails.
            assert!(node.segments().skip(1).all(|s| s.position() == Vector2::ZERO));
        }
        assert!(demo.player.position().x >= 1.0);
    }

    #[test]
    fn frame_delay_follows_time_step() {
        assert_eq!(Demo::new(1).frame_ms(), 50);
    }

    #[test]
    fn step_moves_trails_down_the_chain() {
        let mut demo = Demo::new(5);
        let head_before = demo.trails[0].body().position();
        demo.step();
        let second = demo.trails[0].segments().nth(1).map(Sprite::position);
        assert_eq!(second, Some(head_before));
    }
}
