/// Player shot and alien bursts: spawning, movement, hits and culling.

use crate::collision::overlaps;
use crate::entities::{AlienId, GameState, Projectile, ProjectileOwner};
use crate::schedule::Event;

// ── Player shot ──────────────────────────────────────────────────────────────

/// Fire from just above the ship. Only one player shot may be in flight;
/// returns `false` when the shot was blocked.
pub fn spawn_player_shot(state: &mut GameState) -> bool {
    if state.player_shot.is_some() {
        return false;
    }
    let mut position = state.ship.position;
    position.y += state.tuning.shot_offset;
    state.player_shot = Some(Projectile {
        position,
        owner: ProjectileOwner::Player,
        slope: 0.0,
    });
    true
}

/// Move the player shot up. The first alien it touches (in roster order) is
/// destroyed along with the shot; a shot past the ceiling just disappears.
/// Returns the destroyed alien, if any.
pub fn advance_player_shot(state: &mut GameState) -> Option<AlienId> {
    let mut shot = state.player_shot.take()?;
    shot.position.y += state.tuning.shot_speed;

    if let Some(index) = state.aliens.iter().position(|a| overlaps(&shot, a)) {
        let alien = state.aliens.remove(index);
        state.descending.retain(|id| *id != alien.id);
        log::debug!(
            "alien {:?} destroyed, {} left",
            alien.id,
            state.aliens.len()
        );
        return Some(alien.id);
    }

    if shot.position.y <= state.tuning.shot_ceiling {
        state.player_shot = Some(shot);
    }
    None
}

// ── Alien bursts ─────────────────────────────────────────────────────────────

/// Queue a burst from `alien`: the first shot is due immediately, the rest
/// one burst interval apart. Each shot leaves from wherever the alien is when
/// that shot comes due, so a moving diver sprays a little.
pub fn schedule_burst(state: &mut GameState, alien: AlienId, slope: f32, now: u64) {
    let interval = state.tuning.burst_interval_ms(state.mode);
    for shot in 0..state.tuning.burst_size as u64 {
        state.events.schedule(
            now + shot * interval,
            state.generation,
            Event::SpawnAlienShot { alien, slope },
        );
    }
    log::debug!(
        "alien {:?} fires a burst of {} (slope {:.3})",
        alien,
        state.tuning.burst_size,
        slope
    );
}

/// Launch one burst shot from the alien's current position. Aliens destroyed
/// since the burst was queued hold their fire; returns `false` then.
pub fn spawn_alien_shot(state: &mut GameState, alien: AlienId, slope: f32) -> bool {
    let Some(shooter) = state.aliens.iter().find(|a| a.id == alien) else {
        return false;
    };
    state.alien_shots.push(Projectile {
        position: shooter.position,
        owner: ProjectileOwner::Alien,
        slope,
    });
    true
}

/// Move every alien shot down along its slope. Returns `true` as soon as a
/// shot hits the ship; shots that leave the stage are dropped.
pub fn advance_alien_shots(state: &mut GameState) -> bool {
    let speed = state.tuning.alien_shot_speed;
    let floor = state.tuning.alien_shot_floor;
    let side = state.tuning.alien_shot_side_limit;

    for i in (0..state.alien_shots.len()).rev() {
        let shot = &mut state.alien_shots[i];
        shot.position.y -= speed;
        shot.position.x += shot.slope * speed;

        if overlaps(&*shot, &state.ship) {
            log::info!("ship hit by alien fire");
            return true;
        }

        if shot.position.y < floor || shot.position.x < -side || shot.position.x > side {
            state.alien_shots.remove(i);
        }
    }
    false
}
