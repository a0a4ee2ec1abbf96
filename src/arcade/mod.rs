//! Arcade — "DevOps Defender", a tiny shoot-'em-up.
//!
//! `GameState::tick` is a pure step: it consumes the state, advances it by
//! one frame and hands back the new state with a report of what happened.
//! Whoever owns the frame clock (the app loop, a test) drives it.
//! `Arcade` wraps the state in the `Idle → Running → Closed` session machine.

pub mod draw;

use rand::Rng;

use crate::config::ArcadeConfig;

pub const PLAYER_SIZE: f32 = 40.0;
pub const PLAYER_BOTTOM_GAP: f32 = 50.0;
pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const ENEMY_SIZE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Axis-aligned overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Fire,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Enemies destroyed this tick.
    pub kills: u32,
    pub spawned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub field: Field,
    pub player: Rect,
    pub bullets: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub score: u32,
    tuning: ArcadeConfig,
}

impl GameState {
    pub fn new(field: Field, tuning: ArcadeConfig) -> Self {
        GameState {
            field,
            player: Rect::new(
                field.width / 2.0,
                field.height - PLAYER_BOTTOM_GAP,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            tuning,
        }
    }

    fn max_player_x(&self) -> f32 {
        (self.field.width - self.player.w).max(0.0)
    }

    /// Apply one key press. Returns true when a bullet was fired.
    pub fn press(&mut self, key: GameKey) -> bool {
        let step = self.tuning.player_step;
        match key {
            GameKey::Left => {
                self.player.x = (self.player.x - step).clamp(0.0, self.max_player_x());
                false
            }
            GameKey::Right => {
                self.player.x = (self.player.x + step).clamp(0.0, self.max_player_x());
                false
            }
            GameKey::Fire => {
                self.bullets.push(Rect::new(
                    self.player.x + self.player.w / 2.0,
                    self.player.y,
                    BULLET_WIDTH,
                    BULLET_HEIGHT,
                ));
                true
            }
        }
    }

    /// Advance one frame.
    ///
    /// Order: bullets move up and leave at the top, maybe one enemy spawns,
    /// enemies move down and leave at the bottom, then collisions. Collisions
    /// are marked over the full bullet x enemy scan and swept afterwards, so
    /// removals never shift the indices being scanned. A bullet and an enemy
    /// are each consumed by at most one hit.
    pub fn tick<R: Rng>(mut self, rng: &mut R) -> (Self, TickReport) {
        let mut report = TickReport::default();

        let bullet_speed = self.tuning.bullet_speed;
        for b in &mut self.bullets {
            b.y -= bullet_speed;
        }
        self.bullets.retain(|b| b.y > 0.0);

        let chance = self.tuning.spawn_chance.clamp(0.0, 1.0);
        if rng.gen_bool(chance) {
            let span = (self.field.width - ENEMY_SIZE).max(0.0);
            let x = rng.r#gen::<f32>() * span;
            self.enemies.push(Rect::new(x, 0.0, ENEMY_SIZE, ENEMY_SIZE));
            report.spawned = true;
        }

        let enemy_speed = self.tuning.enemy_speed;
        for e in &mut self.enemies {
            e.y += enemy_speed;
        }
        let bottom = self.field.height;
        self.enemies.retain(|e| e.y < bottom);

        let mut spent = vec![false; self.bullets.len()];
        let mut destroyed = vec![false; self.enemies.len()];
        for (bi, bullet) in self.bullets.iter().enumerate() {
            let hit = self
                .enemies
                .iter()
                .enumerate()
                .position(|(ei, enemy)| !destroyed[ei] && bullet.overlaps(enemy));
            if let Some(ei) = hit {
                spent[bi] = true;
                destroyed[ei] = true;
                report.kills += 1;
            }
        }
        if report.kills > 0 {
            let mut spent = spent.into_iter();
            self.bullets.retain(|_| !spent.next().unwrap_or(false));
            let mut destroyed = destroyed.into_iter();
            self.enemies.retain(|_| !destroyed.next().unwrap_or(false));
            self.score += report.kills * self.tuning.kill_score;
        }

        (self, report)
    }
}

// ---------------------------------------------------------------------------
// Session machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Running(GameState),
    Closed { score: u32 },
}

pub struct Arcade {
    phase: Phase,
    tuning: ArcadeConfig,
}

impl Arcade {
    pub fn new(tuning: ArcadeConfig) -> Self {
        Arcade {
            phase: Phase::Idle,
            tuning,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn state(&self) -> Option<&GameState> {
        match &self.phase {
            Phase::Running(state) => Some(state),
            _ => None,
        }
    }

    /// Start a fresh game on `field`, discarding any previous one.
    pub fn open(&mut self, field: Field) {
        log::info!("arcade opened on {}x{} field", field.width, field.height);
        self.phase = Phase::Running(GameState::new(field, self.tuning.clone()));
    }

    /// Stop the game. Returns the final score if one was running.
    pub fn close(&mut self) -> Option<u32> {
        let Phase::Running(state) = &self.phase else {
            return None;
        };
        let score = state.score;
        log::info!("arcade closed with score {score}");
        self.phase = Phase::Closed { score };
        Some(score)
    }

    /// Forward a key to the running game. Returns true when it fired.
    pub fn press(&mut self, key: GameKey) -> bool {
        match &mut self.phase {
            Phase::Running(state) => state.press(key),
            _ => false,
        }
    }

    /// Run one tick if the game is running; otherwise nothing happens.
    pub fn frame<R: Rng>(&mut self, rng: &mut R) -> TickReport {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Running(state) => {
                let (state, report) = state.tick(rng);
                self.phase = Phase::Running(state);
                report
            }
            other => {
                self.phase = other;
                TickReport::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FIELD: Field = Field {
        width: 400.0,
        height: 300.0,
    };

    fn tuning(spawn_chance: f64) -> ArcadeConfig {
        ArcadeConfig {
            spawn_chance,
            ..ArcadeConfig::default()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn quiet_ticks_leave_everything_empty() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        let mut rng = rng();
        for _ in 0..500 {
            let (next, report) = state.tick(&mut rng);
            assert_eq!(report, TickReport::default());
            state = next;
        }
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn player_starts_at_half_width_near_bottom() {
        let state = GameState::new(FIELD, tuning(0.0));
        assert_eq!(state.player, Rect::new(200.0, 250.0, 40.0, 40.0));
    }

    #[test]
    fn player_is_clamped_to_field() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        for _ in 0..50 {
            state.press(GameKey::Right);
            assert!(state.player.x >= 0.0 && state.player.x <= 360.0);
        }
        assert_eq!(state.player.x, 360.0);
        for _ in 0..50 {
            state.press(GameKey::Left);
            assert!(state.player.x >= 0.0 && state.player.x <= 360.0);
        }
        assert_eq!(state.player.x, 0.0);
    }

    #[test]
    fn narrow_field_pins_player_at_zero() {
        let mut state = GameState::new(
            Field {
                width: 30.0,
                height: 300.0,
            },
            tuning(0.0),
        );
        state.press(GameKey::Left);
        assert_eq!(state.player.x, 0.0);
        state.press(GameKey::Right);
        assert_eq!(state.player.x, 0.0);
    }

    #[test]
    fn fire_spawns_bullet_at_player_center() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        assert!(state.press(GameKey::Fire));
        assert_eq!(state.bullets, vec![Rect::new(220.0, 250.0, 4.0, 10.0)]);
    }

    #[test]
    fn bullets_leave_at_the_top() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        state.bullets.push(Rect::new(10.0, 6.0, 4.0, 10.0));
        state.bullets.push(Rect::new(10.0, 4.0, 4.0, 10.0));
        let (state, _) = state.tick(&mut rng());
        assert_eq!(state.bullets, vec![Rect::new(10.0, 1.0, 4.0, 10.0)]);
    }

    #[test]
    fn enemies_leave_at_the_bottom() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        state.enemies.push(Rect::new(10.0, 299.0, 30.0, 30.0));
        state.enemies.push(Rect::new(50.0, 200.0, 30.0, 30.0));
        let (state, _) = state.tick(&mut rng());
        assert_eq!(state.enemies, vec![Rect::new(50.0, 202.0, 30.0, 30.0)]);
    }

    #[test]
    fn certain_spawn_lands_on_top_edge_inside_field() {
        let state = GameState::new(FIELD, tuning(1.0));
        let (state, report) = state.tick(&mut rng());
        assert!(report.spawned);
        assert_eq!(state.enemies.len(), 1);
        let e = state.enemies[0];
        assert_eq!(e.y, 2.0);
        assert!(e.x >= 0.0 && e.x <= 370.0);
    }

    #[test]
    fn identical_boxes_collide_once_for_ten_points() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        // Both sit at the same place after this tick's movement.
        state.bullets.push(Rect::new(100.0, 105.0, 30.0, 30.0));
        state.enemies.push(Rect::new(100.0, 98.0, 30.0, 30.0));
        let (state, report) = state.tick(&mut rng());
        assert_eq!(report.kills, 1);
        assert_eq!(state.score, 10);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn simultaneous_kills_are_all_resolved() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        for x in [20.0, 120.0, 220.0] {
            state.bullets.push(Rect::new(x + 10.0, 105.0, 4.0, 10.0));
            state.enemies.push(Rect::new(x, 90.0, 30.0, 30.0));
        }
        let (state, report) = state.tick(&mut rng());
        assert_eq!(report.kills, 3);
        assert_eq!(state.score, 30);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn one_bullet_kills_at_most_one_enemy() {
        let mut state = GameState::new(FIELD, tuning(0.0));
        state.bullets.push(Rect::new(110.0, 105.0, 4.0, 10.0));
        state.enemies.push(Rect::new(100.0, 90.0, 30.0, 30.0));
        state.enemies.push(Rect::new(105.0, 95.0, 30.0, 30.0));
        let (state, report) = state.tick(&mut rng());
        assert_eq!(report.kills, 1);
        assert_eq!(state.enemies, vec![Rect::new(105.0, 97.0, 30.0, 30.0)]);
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn arcade_moves_idle_running_closed() {
        let mut arcade = Arcade::new(tuning(0.0));
        assert_eq!(arcade.phase(), &Phase::Idle);
        assert!(!arcade.press(GameKey::Fire));
        assert_eq!(arcade.frame(&mut rng()), TickReport::default());
        assert_eq!(arcade.close(), None);

        arcade.open(FIELD);
        assert!(arcade.is_running());
        assert!(arcade.press(GameKey::Fire));
        assert_eq!(arcade.close(), Some(0));
        assert_eq!(arcade.phase(), &Phase::Closed { score: 0 });
    }

    #[test]
    fn closed_arcade_ignores_input_and_ticks() {
        let mut arcade = Arcade::new(tuning(1.0));
        arcade.open(FIELD);
        arcade.close();
        assert!(!arcade.press(GameKey::Right));
        assert_eq!(arcade.frame(&mut rng()), TickReport::default());
        assert!(arcade.state().is_none());
    }

    #[test]
    fn reopening_starts_from_scratch() {
        let mut arcade = Arcade::new(tuning(1.0));
        arcade.open(FIELD);
        let mut rng = rng();
        for _ in 0..5 {
            arcade.press(GameKey::Fire);
            arcade.frame(&mut rng);
        }
        if let Phase::Running(state) = &mut arcade.phase {
            state.score = 70;
        }
        arcade.close();

        arcade.open(FIELD);
        let state = arcade.state().unwrap();
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.x, 200.0);
    }
}
