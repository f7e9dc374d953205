use galaxian::aliens::formation;
use galaxian::compute::{init_state, restart, tick};
use galaxian::config::Tuning;
use galaxian::entities::*;
use galaxian::mode::*;
use galaxian::projectiles::schedule_burst;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    init_state(Mode::Normal, Tuning::default())
}

/// A game that has been going for a while: aliens shifted, one diving,
/// shots in the air, a burst pending.
fn messy_state() -> GameState {
    let mut s = make_state();
    for alien in &mut s.aliens {
        alien.position.x += 0.4;
    }
    s.aliens.remove(3);
    s.aliens[0].state = AlienState::Descending(Descent {
        started_at: 100,
        amplitude: 0.6,
        has_started_shooting: true,
    });
    s.descending.push(s.aliens[0].id);
    s.player_shot = Some(Projectile {
        position: Vec3::new(0.0, 1.0, 0.0),
        owner: ProjectileOwner::Player,
        slope: 0.0,
    });
    s.alien_shots.push(Projectile {
        position: Vec3::new(1.0, 0.0, 0.0),
        owner: ProjectileOwner::Alien,
        slope: 0.2,
    });
    s.ship.position.x = -2.0;
    s.direction = -1;
    s.current_color = Color::BLUE;
    s.alternate_color = Color::RED;
    s.timers = Some(Timers::starting_at(100));
    schedule_burst(&mut s, AlienId(0), 0.2, 200);
    s
}

#[test]
fn toggle_switches_mode_and_background() {
    let s = toggle_mode(&make_state());
    assert_eq!(s.mode, Mode::Hard);
    assert_eq!(s.mode.background(), Background::Space);
    let s = toggle_mode(&s);
    assert_eq!(s.mode, Mode::Normal);
    assert_eq!(s.mode.background(), Background::Sky);
}

#[test]
fn toggle_resets_everything() {
    let s = toggle_mode(&messy_state());

    let fresh = formation(Color::RED);
    assert_eq!(s.aliens.len(), fresh.len());
    for (a, b) in s.aliens.iter().zip(&fresh) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.position, b.position);
        assert_eq!(a.state, AlienState::Patrolling);
    }
    assert!(s.descending.is_empty());
    assert!(s.player_shot.is_none());
    assert!(s.alien_shots.is_empty());
    assert_eq!(s.ship.position, SHIP_START);
    assert_eq!(s.direction, 1);
    assert_eq!(s.current_color, Color::RED);
    assert_eq!(s.timers, None);
    assert_eq!(s.status, GameStatus::Running);
}

#[test]
fn reset_bumps_generation() {
    let s = messy_state();
    let r = reset(&s, Mode::Normal);
    assert_eq!(r.generation, s.generation + 1);
    assert_eq!(r.mode, Mode::Normal);
    assert_eq!(toggle_mode(&r).generation, s.generation + 2);
}

#[test]
fn reset_keeps_tuning() {
    let mut tuning = Tuning::default();
    tuning.alien_speed_hard = 0.09;
    let s = init_state(Mode::Normal, tuning);
    assert_eq!(toggle_mode(&s).tuning.alien_speed_hard, 0.09);
}

#[test]
fn stale_burst_does_not_fire_after_reset() {
    let s = toggle_mode(&messy_state());
    assert!(!s.events.is_empty());

    let mut rng = StdRng::seed_from_u64(1);
    let s = tick(&s, &Input::default(), 0, &mut rng);
    let s = tick(&s, &Input::default(), 2000, &mut rng);
    assert!(s.alien_shots.is_empty());
    assert!(s.events.is_empty());
}

#[test]
fn restart_keeps_mode() {
    let mut s = init_state(Mode::Hard, Tuning::default());
    s.status = GameStatus::GameOver;
    s.aliens.clear();
    let r = restart(&s);
    assert_eq!(r.mode, Mode::Hard);
    assert_eq!(r.status, GameStatus::Running);
    assert_eq!(r.aliens.len(), 12);
}
