use std::time::Duration;

use terminal_shooters::dodge::compute::*;
use terminal_shooters::dodge::keymap::Action;
use terminal_shooters::dodge::state::*;
use terminal_shooters::entities::{EntityKind, Faction, GameStatus};

use rand::rngs::StdRng;
use rand::SeedableRng;

const SECOND: Duration = Duration::from_secs(1);

fn make_state() -> DodgeState {
    DodgeState {
        player: Entity::player(20, 10),
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        last_spawn: Duration::ZERO,
        width: 40,
        height: 20,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_centres_player() {
    let s = init_state(40, 20);
    assert_eq!((s.player.x, s.player.y), (20, 10));
    assert_eq!(s.player.kind, EntityKind::Player);
    assert!(s.enemies.is_empty());
    assert!(s.bullets.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.status, GameStatus::Running);
}

// ── move_player ───────────────────────────────────────────────────────────────

#[test]
fn move_one_tile() {
    let s2 = move_player(&make_state(), 1, 0);
    assert_eq!((s2.player.x, s2.player.y), (21, 10));
}

#[test]
fn move_off_grid_is_ignored() {
    let mut s = make_state();
    s.player.x = 0;
    s.player.y = 19;
    let left = move_player(&s, -1, 0);
    let down = move_player(&s, 0, 1);
    assert_eq!((left.player.x, left.player.y), (0, 19));
    assert_eq!((down.player.x, down.player.y), (0, 19));
}

#[test]
fn move_does_not_mutate_original() {
    let s = make_state();
    let _ = move_player(&s, 0, -1);
    assert_eq!(s.player.y, 10);
}

// ── player_shoot ──────────────────────────────────────────────────────────────

#[test]
fn shoot_places_arrow_next_to_player() {
    let s2 = player_shoot(&make_state(), Direction::Up);
    assert_eq!(s2.bullets.len(), 1);
    let b = &s2.bullets[0];
    assert_eq!((b.x, b.y), (20, 9));
    assert_eq!(b.glyph, '↑');
    assert_eq!(b.velocity, Some((0, -1)));
    assert_eq!(b.kind, EntityKind::Projectile(Faction::Player));
}

#[test]
fn bullet_glyph_matches_direction() {
    let s = make_state();
    let glyphs: Vec<char> = [Direction::Left, Direction::Right, Direction::Down]
        .iter()
        .map(|&d| player_shoot(&s, d).bullets[0].glyph)
        .collect();
    assert_eq!(glyphs, vec!['←', '→', '↓']);
}

#[test]
fn shoot_into_edge_creates_nothing() {
    let mut s = make_state();
    s.player.x = 39;
    let s2 = player_shoot(&s, Direction::Right);
    assert!(s2.bullets.is_empty());
}

#[test]
fn quit_action_ends_game() {
    let s2 = apply_action(&make_state(), Action::Quit);
    assert_eq!(s2.status, GameStatus::GameOver);
}

// ── spawn_enemy ───────────────────────────────────────────────────────────────

#[test]
fn no_spawn_before_interval() {
    let s2 = spawn_enemy(&make_state(), Duration::from_millis(999), SECOND, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.last_spawn, Duration::ZERO);
}

#[test]
fn spawn_lands_on_border() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for i in 1..=50 {
        s = spawn_enemy(&s, SECOND * i, SECOND, &mut rng);
    }
    assert_eq!(s.enemies.len(), 50);
    for e in &s.enemies {
        assert!(e.x == 0 || e.x == 39 || e.y == 0 || e.y == 19, "({}, {})", e.x, e.y);
        assert!(s.contains(e.x, e.y));
        assert_eq!(e.kind, EntityKind::Enemy);
    }
}

#[test]
fn spawn_at_most_once_per_interval() {
    let mut rng = seeded_rng();
    let s = spawn_enemy(&make_state(), SECOND, SECOND, &mut rng);
    let s = spawn_enemy(&s, SECOND + Duration::from_millis(500), SECOND, &mut rng);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.last_spawn, SECOND);
}

// ── move_enemies ──────────────────────────────────────────────────────────────

#[test]
fn adjacent_enemy_catches_player() {
    let mut s = make_state();
    s.enemies.push(Entity::enemy(21, 10));
    let s2 = move_enemies(&s);
    assert_eq!((s2.enemies[0].x, s2.enemies[0].y), (20, 10));
    assert_eq!(s2.status, GameStatus::GameOver);
}

#[test]
fn adjacent_enemy_above_catches_player() {
    let mut s = make_state();
    s.enemies.push(Entity::enemy(20, 9));
    let s2 = move_enemies(&s);
    assert_eq!((s2.enemies[0].x, s2.enemies[0].y), (20, 10));
    assert_eq!(s2.status, GameStatus::GameOver);
}

#[test]
fn enemy_moves_diagonally_toward_player() {
    let mut s = make_state();
    s.enemies.push(Entity::enemy(15, 5));
    let s2 = move_enemies(&s);
    assert_eq!((s2.enemies[0].x, s2.enemies[0].y), (16, 6));
    assert_eq!(s2.status, GameStatus::Running);
}

#[test]
fn enemy_moves_along_dominant_axis() {
    // (0, 19) → player (20, 10): unit ≈ (0.91, -0.41) → step (1, 0)
    let mut s = make_state();
    s.enemies.push(Entity::enemy(0, 19));
    let s2 = move_enemies(&s);
    assert_eq!((s2.enemies[0].x, s2.enemies[0].y), (1, 19));
}

// ── update_bullets ────────────────────────────────────────────────────────────

#[test]
fn bullet_advances_one_tile() {
    let mut s = make_state();
    s.bullets.push(Entity::bullet(5, 5, Direction::Right));
    let s2 = update_bullets(&s);
    assert_eq!((s2.bullets[0].x, s2.bullets[0].y), (6, 5));
}

#[test]
fn bullet_removed_on_first_tick_off_grid() {
    let mut s = make_state();
    s.bullets.push(Entity::bullet(39, 5, Direction::Right));
    s.bullets.push(Entity::bullet(5, 0, Direction::Up));
    s.bullets.push(Entity::bullet(0, 5, Direction::Left));
    s.bullets.push(Entity::bullet(5, 19, Direction::Down));
    s.bullets.push(Entity::bullet(38, 5, Direction::Right)); // lands on 39, stays
    let s2 = update_bullets(&s);
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].x, 39);
}

#[test]
fn bullet_kills_enemy_and_scores() {
    let mut s = make_state();
    s.enemies.push(Entity::enemy(6, 5));
    s.bullets.push(Entity::bullet(5, 5, Direction::Right));
    let s2 = update_bullets(&s);
    assert!(s2.enemies.is_empty());
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.score, SCORE_PER_KILL);
}

#[test]
fn two_bullets_on_one_enemy_remove_only_one_bullet() {
    let mut s = make_state();
    s.enemies.push(Entity::enemy(6, 5));
    s.bullets.push(Entity::bullet(5, 5, Direction::Right));
    s.bullets.push(Entity::bullet(7, 5, Direction::Left));
    let s2 = update_bullets(&s);
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.score, 10);
}

#[test]
fn one_bullet_on_stacked_enemies_kills_one() {
    let mut s = make_state();
    s.enemies.push(Entity::enemy(6, 5));
    s.enemies.push(Entity::enemy(6, 5));
    s.bullets.push(Entity::bullet(5, 5, Direction::Right));
    let s2 = update_bullets(&s);
    assert_eq!(s2.enemies.len(), 1);
    assert!(s2.bullets.is_empty());
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_spawns_and_moves() {
    let s2 = tick(&make_state(), SECOND, SECOND, &mut seeded_rng());
    assert_eq!(s2.enemies.len(), 1);
    // Spawned on the border, then moved one step inward.
    let e = &s2.enemies[0];
    assert!((e.x > 0 && e.x < 39) || (e.y > 0 && e.y < 19));
}

#[test]
fn tick_leaves_finished_game_alone() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    s.bullets.push(Entity::bullet(5, 5, Direction::Right));
    let s2 = tick(&s, SECOND * 5, SECOND, &mut seeded_rng());
    assert!(s2.enemies.is_empty());
    assert_eq!(s2.bullets[0].x, 5);
}
