use galaxian::compute::init_state;
use galaxian::config::Tuning;
use galaxian::entities::*;

use glam::Vec3;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(EntityKind::Ship, EntityKind::Ship);
    assert_ne!(EntityKind::PlayerShot, EntityKind::AlienShot);
    assert_eq!(Mode::Normal, Mode::Normal);
    assert_ne!(Mode::Normal, Mode::Hard);
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::GameOver, GameStatus::Won);
    assert_ne!(ProjectileOwner::Player, ProjectileOwner::Alien);
}

#[test]
fn kind_geometry() {
    assert_eq!(EntityKind::Ship.scale(), 2.5);
    assert_eq!(EntityKind::Alien.scale(), 2.0);
    assert_eq!(EntityKind::PlayerShot.scale(), 1.5);
    assert_eq!(EntityKind::AlienShot.base_size(), 0.1);
    assert!((EntityKind::Ship.render_half_size() - 0.25).abs() < 1e-6);
    assert!((EntityKind::Alien.render_half_size() - 0.2).abs() < 1e-6);
    assert!((EntityKind::AlienShot.render_half_size() - 0.075).abs() < 1e-6);
}

#[test]
fn mode_toggles_and_picks_background() {
    assert_eq!(Mode::Normal.toggled(), Mode::Hard);
    assert_eq!(Mode::Hard.toggled(), Mode::Normal);
    assert_eq!(Mode::Normal.background(), Background::Sky);
    assert_eq!(Mode::Hard.background().asset(), "space.png");
    assert_eq!(Background::Sky.asset(), "sky.png");
}

#[test]
fn projectile_kind_and_color_follow_owner() {
    let mut shot = Projectile {
        position: Vec3::ZERO,
        owner: ProjectileOwner::Player,
        slope: 0.0,
    };
    assert_eq!(shot.kind(), EntityKind::PlayerShot);
    assert_eq!(shot.color(), Color::YELLOW);
    shot.owner = ProjectileOwner::Alien;
    assert_eq!(shot.kind(), EntityKind::AlienShot);
    assert_eq!(shot.color(), Color::RED);
}

#[test]
fn alien_state_is_exclusive() {
    let mut alien = init_state(Mode::Normal, Tuning::default()).aliens[0].clone();
    assert!(!alien.is_descending());
    assert!(alien.descent().is_none());

    alien.state = AlienState::Descending(Descent {
        started_at: 5,
        amplitude: 0.9,
        has_started_shooting: false,
    });
    assert!(alien.is_descending());
    assert_eq!(alien.descent().map(|d| d.started_at), Some(5));
}

#[test]
fn timers_start_together() {
    let t = Timers::starting_at(42);
    assert_eq!(t.last_color_change, 42);
    assert_eq!(t.last_descent, 42);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Mode::Normal, Tuning::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.position.x = 3.0;
    cloned.aliens.clear();
    cloned.alien_shots.push(Projectile {
        position: Vec3::ZERO,
        owner: ProjectileOwner::Alien,
        slope: 0.0,
    });

    assert_eq!(original.ship.position, SHIP_START);
    assert_eq!(original.aliens.len(), 12);
    assert!(original.alien_shots.is_empty());
}
