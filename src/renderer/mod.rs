//! Sprite rendering
//!
//! `draw_frame` walks the game state in paint order and issues sprite-sheet
//! draws against a [`Surface`]. The web build implements `Surface` on a
//! Canvas 2D context; tests record the calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::consts::*;
use crate::hud::{self, HudView};
use crate::sim::{EnemyKind, ExplosionKind, GameState, Rect};

/// A sprite sheet (one `<img>` element in the page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Player,
    Shield,
    Fireball,
    Gears,
    SmokeExplosion,
    FireExplosion,
    Enemy(EnemyKind),
    /// Background strip, 1-based
    Layer(u32),
}

impl Sheet {
    /// DOM id of the image element
    pub fn element_id(self) -> &'static str {
        match self {
            Sheet::Player => "player",
            Sheet::Shield => "shield",
            Sheet::Fireball => "fireball",
            Sheet::Gears => "gears",
            Sheet::SmokeExplosion => "smokeExplosion",
            Sheet::FireExplosion => "fireExplosion",
            Sheet::Enemy(kind) => kind.archetype().sprite,
            Sheet::Layer(1) => "layer1",
            Sheet::Layer(2) => "layer2",
            Sheet::Layer(3) => "layer3",
            Sheet::Layer(_) => "layer4",
        }
    }

    /// Every sheet the game draws from
    pub fn all() -> Vec<Sheet> {
        let mut sheets = vec![
            Sheet::Player,
            Sheet::Shield,
            Sheet::Fireball,
            Sheet::Gears,
            Sheet::SmokeExplosion,
            Sheet::FireExplosion,
        ];
        sheets.extend(EnemyKind::ALL.iter().map(|&k| Sheet::Enemy(k)));
        sheets.extend((1..=4).map(Sheet::Layer));
        sheets
    }
}

impl From<ExplosionKind> for Sheet {
    fn from(kind: ExplosionKind) -> Self {
        match kind {
            ExplosionKind::Smoke => Sheet::SmokeExplosion,
            ExplosionKind::Fire => Sheet::FireExplosion,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Font and placement for overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub family: &'static str,
    pub color: &'static str,
    pub align: Align,
    /// 2px black drop shadow
    pub shadow: bool,
}

impl TextStyle {
    fn hud(size: f32, align: Align) -> Self {
        Self {
            size,
            family: hud::FONT_FAMILY,
            color: hud::TEXT_COLOR,
            align,
            shadow: true,
        }
    }

    fn debug() -> Self {
        Self {
            size: 20.0,
            family: "Helvetica, arial",
            color: "black",
            align: Align::Left,
            shadow: false,
        }
    }
}

/// A 2D drawing target
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    /// Copy `src` from a sheet into `dst`
    fn draw_sprite(&mut self, sheet: Sheet, src: Rect, dst: Rect);
    /// Copy `src` into a `size` square centred on `center`, rotated by `angle` radians
    fn draw_sprite_rotated(&mut self, sheet: Sheet, src: Rect, center: Vec2, size: f32, angle: f32);
    /// Draw a whole sheet at its natural size
    fn draw_image(&mut self, sheet: Sheet, pos: Vec2);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

/// Source rectangle of frame (`frame_x`, `frame_y`) on a uniform grid
#[inline]
pub fn frame_rect(frame_x: u32, frame_y: u32, width: f32, height: f32) -> Rect {
    Rect::new(frame_x as f32 * width, frame_y as f32 * height, width, height)
}

/// Paint one frame
pub fn draw_frame(state: &GameState, surface: &mut impl Surface) {
    let playfield = state.playfield();
    surface.clear(playfield.x, playfield.y);

    for layer in &state.background.layers {
        draw_layer(surface, layer.index, layer.x);
    }

    draw_hud(state, surface);
    draw_player(state, surface);

    if state.shield.is_active() {
        let player = &state.player;
        surface.draw_sprite(
            Sheet::Shield,
            frame_rect(state.shield.frame_x, 0, player.size.x, player.size.y),
            player.bounds(),
        );
    }

    for particle in &state.particles {
        let (col, row) = particle.sprite_cell;
        surface.draw_sprite_rotated(
            Sheet::Gears,
            frame_rect(col, row, PARTICLE_SPRITE_SIZE, PARTICLE_SPRITE_SIZE),
            particle.pos,
            particle.size,
            particle.angle,
        );
    }

    for enemy in &state.enemies {
        let bounds = enemy.bounds();
        if state.debug {
            surface.stroke_rect(bounds);
            surface.fill_text(
                &enemy.lives.to_string(),
                Vec2::new(bounds.x, bounds.y),
                &TextStyle::debug(),
            );
        }
        surface.draw_sprite(
            Sheet::Enemy(enemy.kind),
            frame_rect(enemy.frame_x, enemy.frame_y, bounds.width, bounds.height),
            bounds,
        );
    }

    for explosion in &state.explosions {
        surface.draw_sprite(
            explosion.kind.into(),
            frame_rect(explosion.frame_x, 0, EXPLOSION_SIZE, EXPLOSION_SIZE),
            explosion.bounds(),
        );
    }

    draw_layer(surface, state.background.foreground.index, state.background.foreground.x);
}

/// Each strip is drawn twice, end to end, so the wrap is seamless
fn draw_layer(surface: &mut impl Surface, index: u32, x: f32) {
    surface.draw_image(Sheet::Layer(index), Vec2::new(x, 0.0));
    surface.draw_image(Sheet::Layer(index), Vec2::new(x + LAYER_WIDTH, 0.0));
}

fn draw_player(state: &GameState, surface: &mut impl Surface) {
    let player = &state.player;
    for projectile in player.projectiles.iter().filter(|p| !p.marked_for_deletion) {
        surface.draw_sprite(
            Sheet::Fireball,
            frame_rect(projectile.frame_x, 0, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile.bounds(),
        );
    }
    if state.debug {
        surface.stroke_rect(player.bounds());
    }
    surface.draw_sprite(
        Sheet::Player,
        frame_rect(player.frame_x, player.frame_y, player.size.x, player.size.y),
        player.bounds(),
    );
}

fn draw_hud(state: &GameState, surface: &mut impl Surface) {
    let view = HudView::from_state(state);
    let text = TextStyle::hud(hud::FONT_SIZE, Align::Left);
    surface.fill_text(&view.score_text, Vec2::new(20.0, 40.0), &text);
    surface.fill_text(&view.time_text, Vec2::new(20.0, 95.0), &text);

    if let Some((headline, subline)) = view.banner {
        let middle = state.playfield() * 0.5;
        surface.fill_text(
            headline,
            middle,
            &TextStyle::hud(hud::BANNER_FONT_SIZE, Align::Center),
        );
        surface.fill_text(
            subline,
            middle + Vec2::new(0.0, 30.0),
            &TextStyle::hud(hud::FONT_SIZE, Align::Center),
        );
    }

    let (ox, oy) = hud::AMMO_BAR_ORIGIN;
    let (w, h) = hud::AMMO_BAR_SIZE;
    for i in 0..view.ammo_bars {
        let bar = Rect::new(ox + i as f32 * hud::AMMO_BAR_PITCH, oy, w, h);
        surface.fill_rect(bar, view.ammo_color);
    }
}
