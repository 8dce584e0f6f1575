//! Four-player arena: turn, drive, shoot, score.
//!
//! Players are circles with a heading. Projectiles fly in a straight line until
//! they leave the screen. A projectile inside another player's circle scores a
//! point for its owner on every frame it stays there.
use crate::pad::Buttons;

pub const PROJECTILE_LIMIT: usize = 15;
pub const PROJECTILE_SPEED: f32 = 5.0;
pub const PLAYER_SPEED: f32 = 4.0;
pub const PLAYER_RADIUS: f32 = 10.0;
pub const LINE_LENGTH: f32 = 25.0;
/// Degrees.
pub const START_ANGLE: f32 = 20.0;
pub const TURN_STEP: f32 = 0.1;
pub const GRID_SPACING: i32 = 20;

pub const POSITIONS: [(f32, f32); 4] = [(30.0, 50.0), (280.0, 50.0), (30.0, 200.0), (280.0, 200.0)];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
}

impl Projectile {
    pub fn update(&mut self) {
        self.x += PROJECTILE_SPEED * self.direction.cos();
        self.y += PROJECTILE_SPEED * self.direction.sin();
    }

    pub fn is_on_screen(&self, width: f32, height: f32) -> bool {
        self.x >= 0.0 && self.x < width && self.y >= 0.0 && self.y < height
    }

    pub fn has_hit(&self, player: &ArenaPlayer) -> bool {
        let dx = self.x - player.x;
        let dy = self.y - player.y;
        dx * dx + dy * dy < player.size * player.size
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArenaPlayer {
    /// Slot the player's pad sits in; fixes colour and score position.
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub direction: f32,
    pub size: f32,
    pub projectiles: Vec<Projectile>,
    pub was_hit: bool,
    pub score: u32,
}

impl ArenaPlayer {
    pub fn new(index: usize) -> Self {
        let (x, y) = POSITIONS[index];
        Self {
            index,
            x,
            y,
            direction: START_ANGLE.to_radians(),
            size: PLAYER_RADIUS,
            projectiles: Vec::with_capacity(PROJECTILE_LIMIT),
            was_hit: false,
            score: 0,
        }
    }

    pub fn fire(&mut self) {
        if self.projectiles.len() < PROJECTILE_LIMIT {
            self.projectiles.push(Projectile { x: self.x, y: self.y, direction: self.direction });
        }
    }

    pub fn update(&mut self, buttons: &Buttons, width: f32, height: f32) {
        if buttons.left {
            self.direction -= TURN_STEP;
        }
        if buttons.right {
            self.direction += TURN_STEP;
        }
        if buttons.up {
            self.x += PLAYER_SPEED * self.direction.cos();
            self.y += PLAYER_SPEED * self.direction.sin();
        }
        if buttons.down {
            self.x -= PLAYER_SPEED * self.direction.cos();
            self.y -= PLAYER_SPEED * self.direction.sin();
        }
        if buttons.a {
            self.fire();
        }

        self.x = self.x.max(self.size).min(width - self.size);
        self.y = self.y.max(self.size).min(height - self.size);

        for p in &mut self.projectiles {
            p.update();
        }
        self.projectiles.retain(|p| p.is_on_screen(width, height));
    }

    /// End of the heading line drawn from the centre.
    pub fn pointer(&self) -> (f32, f32) {
        (
            self.x + LINE_LENGTH * self.direction.cos(),
            self.y + LINE_LENGTH * self.direction.sin(),
        )
    }
}

pub struct Arena {
    pub players: Vec<ArenaPlayer>,
    width: f32,
    height: f32,
}

impl Arena {
    pub fn new(indices: &[usize], width: i32, height: i32) -> Self {
        Self {
            players: indices.iter().map(|&i| ArenaPlayer::new(i)).collect(),
            width: width as f32,
            height: height as f32,
        }
    }

    /// `buttons[i]` drives `players[i]`.
    pub fn update(&mut self, buttons: &[Buttons]) {
        for (player, b) in self.players.iter_mut().zip(buttons) {
            player.update(b, self.width, self.height);
        }

        let n = self.players.len();
        for shooter in 0..n {
            for target in 0..n {
                if shooter == target {
                    continue;
                }
                let hits = self.players[shooter]
                    .projectiles
                    .iter()
                    .filter(|p| p.has_hit(&self.players[target]))
                    .count();
                if hits > 0 {
                    self.players[target].was_hit = true;
                    self.players[shooter].score += hits as u32;
                }
            }
        }
    }

    /// Hit flashes last a single drawn frame.
    pub fn clear_hits(&mut self) {
        for p in &mut self.players {
            p.was_hit = false;
        }
    }
}
