/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::aliens;
use crate::config::Tuning;
use crate::entities::{
    Color, EntityKind, GameState, GameStatus, Input, Mode, RenderItem, Ship, Timers, SHIP_COLOR,
    SHIP_START,
};
use crate::mode;
use crate::projectiles;
use crate::schedule::{Event, Scheduler};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a given mode.
pub fn init_state(mode: Mode, tuning: Tuning) -> GameState {
    GameState {
        ship: Ship {
            position: SHIP_START,
            color: SHIP_COLOR,
        },
        aliens: aliens::formation(Color::RED),
        descending: Vec::new(),
        player_shot: None,
        alien_shots: Vec::new(),
        current_color: Color::RED,
        alternate_color: Color::BLUE,
        direction: 1,
        timers: None,
        status: GameStatus::Running,
        mode,
        generation: 0,
        events: Scheduler::new(),
        tuning,
        frame: 0,
    }
}

/// Start over in the current mode.
pub fn restart(state: &GameState) -> GameState {
    mode::reset(state, state.mode)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_ship_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    steer(&mut next, true, false);
    next
}

pub fn move_ship_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    steer(&mut next, false, true);
    next
}

/// Fire a shot from the ship. Only one may be in flight at a time.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    projectiles::spawn_player_shot(&mut next);
    next
}

/// Screen-left is world +x (the stage is seen from behind). Both keys held
/// cancel out; the clamp is applied once after both.
fn steer(state: &mut GameState, left: bool, right: bool) {
    let speed = state.tuning.ship_speed;
    let limit = state.tuning.ship_limit;
    let x = &mut state.ship.position.x;
    if right {
        *x -= speed;
    }
    if left {
        *x += speed;
    }
    *x = x.clamp(-limit, limit);
}

// ── Per-frame tick (nearly pure, RNG is injected) ───────────────────────────

/// Advance the simulation by one frame at wall-clock time `now` (ms).
/// All randomness comes through `rng` so callers control determinism.
///
/// Finished games (won or lost) are returned unchanged unless the input
/// toggles the mode, which starts a fresh game.
pub fn tick(state: &GameState, input: &Input, now: u64, rng: &mut impl Rng) -> GameState {
    let mut state = if input.toggle_mode {
        mode::toggle_mode(state)
    } else {
        state.clone()
    };
    if state.status != GameStatus::Running {
        return state;
    }
    state.frame += 1;
    state.timers.get_or_insert(Timers::starting_at(now));

    // ── 0. Due events, then edge-triggered input ─────────────────────────────
    apply_due_events(&mut state, now, rng);
    if input.fire {
        projectiles::spawn_player_shot(&mut state);
    }

    // ── 1. Ship ──────────────────────────────────────────────────────────────
    steer(&mut state, input.left, input.right);

    // ── 2–4. Formation, colours, descent schedule ────────────────────────────
    aliens::patrol(&mut state);
    aliens::cycle_colors(&mut state, now);
    aliens::schedule_descents(&mut state, now, rng);

    // ── 5. Divers ────────────────────────────────────────────────────────────
    if aliens::advance_descents(&mut state, now) {
        return game_over(state);
    }

    // ── 6. Player shot ───────────────────────────────────────────────────────
    projectiles::advance_player_shot(&mut state);

    // ── 7. Alien fire ────────────────────────────────────────────────────────
    if projectiles::advance_alien_shots(&mut state) {
        return game_over(state);
    }

    // ── 8–10. Terminal conditions ────────────────────────────────────────────
    if state.aliens.is_empty() {
        log::info!("all aliens destroyed after {} frames", state.frame);
        state.status = GameStatus::Won;
    }
    state
}

/// Apply every queued event due by `now`, dropping ones scheduled before the
/// last reset.
fn apply_due_events(state: &mut GameState, now: u64, rng: &mut impl Rng) {
    while let Some(scheduled) = state.events.pop_due(now) {
        if scheduled.generation != state.generation {
            log::trace!("dropping stale {:?}", scheduled.event);
            continue;
        }
        match scheduled.event {
            Event::StartDescent { started_at } => {
                aliens::start_descent(state, started_at, rng);
            }
            Event::SpawnAlienShot { alien, slope } => {
                projectiles::spawn_alien_shot(state, alien, slope);
            }
        }
    }
}

fn game_over(mut state: GameState) -> GameState {
    log::info!("game over after {} frames", state.frame);
    state.status = GameStatus::GameOver;
    state
}

// ── Renderer view ────────────────────────────────────────────────────────────

/// Everything the renderer should draw this frame: ship, aliens in roster
/// order, the player shot, then alien shots.
pub fn render_list(state: &GameState) -> Vec<RenderItem> {
    let mut items = Vec::with_capacity(2 + state.aliens.len() + state.alien_shots.len());

    items.push(RenderItem {
        position: state.ship.position,
        color: state.ship.color,
        half_size: EntityKind::Ship.render_half_size(),
        kind: EntityKind::Ship,
    });
    for alien in &state.aliens {
        items.push(RenderItem {
            position: alien.position,
            color: alien.color,
            half_size: EntityKind::Alien.render_half_size(),
            kind: EntityKind::Alien,
        });
    }
    for shot in state.player_shot.iter().chain(&state.alien_shots) {
        items.push(RenderItem {
            position: shot.position,
            color: shot.color(),
            half_size: shot.kind().render_half_size(),
            kind: shot.kind(),
        });
    }
    items
}
