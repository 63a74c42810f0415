//! Scene rendering for the intro and active screens
//!
//! Sprites are looked up from `GameTextures` by what the simulation says the
//! entity is showing this tick and drawn with their own pixel size at the
//! top-left corner of the entity's hitbox. Draw order is back to front: sky,
//! ground, score, player, then obstacles in spawn order.

use crate::assets::{texture_size, GameTextures};
use crate::entity::Entity;
use crate::game::{GameSession, IntroMessage};
use crate::obstacle::Obstacle;
use crate::player::{Player, PlayerPose};
use crate::score::score_label;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

pub const INTRO_BACKGROUND: Color = Color::RGB(94, 129, 162);
pub const TITLE_COLOR: Color = Color::RGB(111, 196, 169);
pub const SCORE_COLOR: Color = Color::RGB(64, 64, 64);

const TEXT_SCALE: u32 = 4;
const STAND_SCALE: u32 = 2;
const SCORE_Y: i32 = 50;
const TITLE_Y: i32 = 80;
const CAPTION_Y: i32 = 330;

/// Line shown under the standing player on the intro screen
pub fn intro_caption(message: IntroMessage) -> String {
    match message {
        IntroMessage::PressToPlay => "Press space to play".to_string(),
        IntroMessage::Score(score) => score_label(score),
    }
}

/// Wrapper over the entity types drawn on the active screen
///
/// Each variant knows which texture its entity shows this tick; the drawing
/// itself is shared.
pub enum Renderable<'a> {
    Player(&'a Player),
    Obstacle(&'a Obstacle),
}

impl<'a> Renderable<'a> {
    fn bounds(&self) -> Rect {
        match self {
            Renderable::Player(p) => p.bounds(),
            Renderable::Obstacle(o) => o.bounds(),
        }
    }

    fn texture<'t>(&self, textures: &'t GameTextures<'t>) -> Option<&'t Texture<'t>> {
        match self {
            Renderable::Player(p) => match p.pose {
                PlayerPose::Walk(frame) => textures.player_walk.get(frame),
                PlayerPose::Jump => Some(&textures.player_jump),
            },
            Renderable::Obstacle(o) => textures.obstacle_frames(o.kind).get(o.frame_index()),
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>, textures: &GameTextures) -> Result<(), String> {
        let Some(texture) = self.texture(textures) else {
            return Ok(());
        };
        let bounds = self.bounds();
        let size = texture_size(texture);
        canvas.copy(texture, None, Rect::new(bounds.x(), bounds.y(), size.width, size.height))
    }
}

fn screen_center(canvas: &Canvas<Window>) -> Result<Point, String> {
    let (width, height) = canvas.output_size()?;
    Ok(Point::new((width / 2) as i32, (height / 2) as i32))
}

/// Draws one frame of a run in progress
pub fn render_active(
    canvas: &mut Canvas<Window>,
    textures: &GameTextures,
    session: &GameSession,
    ground_y: i32,
    now_ms: u64,
) -> Result<(), String> {
    let center = screen_center(canvas)?;

    let sky = texture_size(&textures.sky);
    canvas.copy(&textures.sky, None, Rect::new(0, 0, sky.width, sky.height))?;
    let ground = texture_size(&textures.ground);
    canvas.copy(&textures.ground, None, Rect::new(0, ground_y, ground.width, ground.height))?;

    let score = session.current_score(now_ms);
    draw_text_centered(canvas, &score_label(score), center.x(), SCORE_Y, SCORE_COLOR, TEXT_SCALE)?;

    let mut renderables = Vec::with_capacity(1 + session.obstacles().len());
    renderables.push(Renderable::Player(session.player()));
    renderables.extend(session.obstacles().obstacles().iter().map(Renderable::Obstacle));

    for renderable in renderables {
        renderable.render(canvas, textures)?;
    }
    Ok(())
}

/// Draws the title screen with the last score or the start prompt
pub fn render_intro(
    canvas: &mut Canvas<Window>,
    textures: &GameTextures,
    message: IntroMessage,
) -> Result<(), String> {
    let center = screen_center(canvas)?;

    canvas.set_draw_color(INTRO_BACKGROUND);
    canvas.clear();

    let stand = texture_size(&textures.player_stand);
    let mut stand_rect = Rect::new(0, 0, stand.width * STAND_SCALE, stand.height * STAND_SCALE);
    stand_rect.center_on(center);
    canvas.copy(&textures.player_stand, None, stand_rect)?;

    draw_text_centered(canvas, "Pixel Runner", center.x(), TITLE_Y, TITLE_COLOR, TEXT_SCALE)?;
    draw_text_centered(canvas, &intro_caption(message), center.x(), CAPTION_Y, TITLE_COLOR, TEXT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_before_first_score() {
        assert_eq!(intro_caption(IntroMessage::PressToPlay), "Press space to play");
    }

    #[test]
    fn test_caption_shows_last_score() {
        assert_eq!(intro_caption(IntroMessage::Score(34)), "Score: 34");
    }
}
