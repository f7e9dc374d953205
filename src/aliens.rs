/// Alien formation, patrol, colour cycling and dives.
///
/// Every function here mutates the state it is given in place; `compute::tick`
/// calls them on its private copy in a fixed order.

use glam::Vec3;
use rand::Rng;

use crate::collision::overlaps;
use crate::entities::{Alien, AlienId, AlienState, Color, Descent, GameState};
use crate::projectiles::schedule_burst;
use crate::schedule::Event;

// ── Formation ────────────────────────────────────────────────────────────────

pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 6;
const GRID_SPACING_X: f32 = 1.0;
const GRID_SPACING_Y: f32 = 1.0;
const GRID_TOP_Y: f32 = 2.5;

/// Rows × cols grid centred on x = 0, top row first.
pub fn formation(color: Color) -> Vec<Alien> {
    let start_x = -((GRID_COLS - 1) as f32 * GRID_SPACING_X) / 2.0;
    let mut aliens = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let home = Vec3::new(
                start_x + col as f32 * GRID_SPACING_X,
                GRID_TOP_Y - row as f32 * GRID_SPACING_Y,
                0.0,
            );
            aliens.push(Alien {
                id: AlienId(row * GRID_COLS + col),
                position: home,
                home,
                color,
                state: AlienState::Patrolling,
            });
        }
    }
    aliens
}

// ── Patrol ───────────────────────────────────────────────────────────────────

/// Slide every patrolling alien sideways, then turn around at the limits.
///
/// The two limit checks each flip the direction on their own, so a formation
/// touching both limits at once keeps its heading.
pub fn patrol(state: &mut GameState) {
    let step = state.direction as f32 * state.tuning.alien_speed(state.mode);
    for alien in state.aliens.iter_mut().filter(|a| !a.is_descending()) {
        alien.position.x += step;
    }

    let left = state.tuning.alien_left_limit;
    let right = state.tuning.alien_right_limit;
    if state
        .aliens
        .iter()
        .any(|a| !a.is_descending() && a.position.x <= left)
    {
        state.direction = -state.direction;
    }
    if state
        .aliens
        .iter()
        .any(|a| !a.is_descending() && a.position.x >= right)
    {
        state.direction = -state.direction;
    }
}

// ── Colour cycling ───────────────────────────────────────────────────────────

pub fn cycle_colors(state: &mut GameState, now: u64) {
    let interval = state.tuning.color_change_interval_ms;
    let Some(timers) = state.timers.as_mut() else {
        return;
    };
    if now.saturating_sub(timers.last_color_change) < interval {
        return;
    }
    timers.last_color_change = now;

    std::mem::swap(&mut state.current_color, &mut state.alternate_color);
    for alien in &mut state.aliens {
        alien.color = state.current_color;
    }
}

// ── Descents ─────────────────────────────────────────────────────────────────

/// Every descent interval, send one alien down now and queue a second one a
/// descent gap later.
pub fn schedule_descents(state: &mut GameState, now: u64, rng: &mut impl Rng) {
    let interval = state.tuning.descent_interval_ms;
    let Some(timers) = state.timers.as_mut() else {
        return;
    };
    if now.saturating_sub(timers.last_descent) < interval {
        return;
    }
    timers.last_descent = now;

    start_descent(state, now, rng);
    let due = now + state.tuning.descent_gap_ms;
    state
        .events
        .schedule(due, state.generation, Event::StartDescent { started_at: due });
}

/// Pick a patrolling alien uniformly at random and send it diving.
/// Returns `None` when every alien is already diving.
pub fn start_descent(
    state: &mut GameState,
    started_at: u64,
    rng: &mut impl Rng,
) -> Option<AlienId> {
    let available: Vec<usize> = state
        .aliens
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.is_descending())
        .map(|(i, _)| i)
        .collect();
    if available.is_empty() {
        return None;
    }

    let index = available[rng.gen_range(0..available.len())];
    let amplitude: f32 = rng.gen_range(0.5..1.0);
    let alien = &mut state.aliens[index];
    alien.state = AlienState::Descending(Descent {
        started_at,
        amplitude,
        has_started_shooting: false,
    });
    state.descending.push(alien.id);

    log::debug!(
        "alien {:?} dives at t={} (amplitude {:.2})",
        alien.id,
        started_at,
        amplitude
    );
    Some(alien.id)
}

/// Move every diving alien one tick along its path.
///
/// A diver fires its burst the first time it drops to the lower row, returns
/// home once it falls past the floor, and ends the game if it touches the
/// ship. Returns `true` in that last case, leaving the remaining divers
/// unmoved.
pub fn advance_descents(state: &mut GameState, now: u64) -> bool {
    let tuning = state.tuning;

    // Newest dive first.
    let mut i = state.descending.len();
    while i > 0 {
        i -= 1;
        let id = state.descending[i];
        let Some(index) = state.aliens.iter().position(|a| a.id == id) else {
            state.descending.remove(i);
            continue;
        };

        let alien = &mut state.aliens[index];
        let AlienState::Descending(descent) = &mut alien.state else {
            state.descending.remove(i);
            continue;
        };

        let previous = alien.position;
        alien.position.y -= tuning.descent_speed;
        let elapsed = now.saturating_sub(descent.started_at) as f32 / 1000.0;
        alien.position.x +=
            descent.amplitude * (tuning.dive_frequency * elapsed).sin() * tuning.dive_drift;

        let mut burst_slope = None;
        if !descent.has_started_shooting && alien.position.y <= tuning.lower_row_y {
            descent.has_started_shooting = true;
            let dx = alien.position.x - previous.x;
            let dy = alien.position.y - previous.y;
            let slope = if dy != 0.0 { dx / dy } else { 0.0 };
            burst_slope = Some(-slope);
        }

        if let Some(slope) = burst_slope {
            schedule_burst(state, id, slope, now);
        }

        if overlaps(&state.ship, &state.aliens[index]) {
            log::info!("alien {:?} rammed the ship", id);
            return true;
        }

        if state.aliens[index].position.y < tuning.descent_floor {
            send_home(&mut state.aliens[index]);
            state.descending.remove(i);
        }
    }
    false
}

/// Put a diver back in its formation slot.
pub fn send_home(alien: &mut Alien) {
    alien.state = AlienState::Patrolling;
    alien.position = alien.home;
}
