//! Cue Render
//!
//! Turns the entity store into an ordered list of draw calls and hands them
//! to a sink. Backends never see units or scripts, only the store.
//!
//! Draw rules:
//! - only entities with a `Position` are drawn
//! - order is ascending `z`, ties broken by name
//! - hidden sprites are skipped; an entity's text draws after its sprite

pub mod backend;

pub use backend::{FrameRecorder, TraceSink};

use cue_core::{EntityStore, Position, Sprite, Text};
use glam::{DVec2, IVec2, UVec2};

/// One draw call, borrowed from the store for the duration of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<'a> {
    Sprite {
        entity: &'a str,
        image: &'a str,
        /// Top-left of the source cell in the sheet, in pixels.
        source: IVec2,
        size: UVec2,
        dest: DVec2,
    },
    Text {
        entity: &'a str,
        text: &'a str,
        font_size: u32,
        dest: DVec2,
    },
}

impl<'a> DrawCommand<'a> {
    pub fn entity(&self) -> &'a str {
        match self {
            DrawCommand::Sprite { entity, .. } | DrawCommand::Text { entity, .. } => *entity,
        }
    }
}

/// Receives the draw calls for one frame, in order.
pub trait RenderSink {
    fn begin_frame(&mut self, _frame: u64) {}

    fn draw(&mut self, command: &DrawCommand<'_>);

    fn end_frame(&mut self) {}
}

/// Draw calls for the current store contents, in draw order.
pub fn collect(store: &EntityStore) -> Vec<DrawCommand<'_>> {
    let mut commands = Vec::new();
    for name in store.draw_order() {
        let Ok(position) = store.get::<Position>(name) else {
            continue;
        };
        let dest = position.xy();

        if let Ok(sprite) = store.get::<Sprite>(name) {
            if !sprite.hidden {
                commands.push(DrawCommand::Sprite {
                    entity: name,
                    image: sprite.image.path(),
                    source: sprite.source_origin(),
                    size: sprite.cell_size,
                    dest,
                });
            }
        }
        if let Ok(text) = store.get::<Text>(name) {
            commands.push(DrawCommand::Text {
                entity: name,
                text: &text.text,
                font_size: text.font.size,
                dest,
            });
        }
    }
    commands
}

/// Draw one frame into `sink`. Returns the number of draw calls.
pub fn render(store: &EntityStore, frame: u64, sink: &mut dyn RenderSink) -> usize {
    let commands = collect(store);
    sink.begin_frame(frame);
    for command in &commands {
        sink.draw(command);
    }
    sink.end_frame();
    commands.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_core::{FontHandle, ImageHandle};

    fn sheet(frame: IVec2) -> Sprite {
        Sprite::new(ImageHandle::new("sheet.png"), UVec2::new(32, 48), frame)
    }

    #[test]
    fn orders_by_depth_then_name() {
        let mut store = EntityStore::new();
        store.set_position("c", Position::new(0.0, 0.0, 0.0));
        store.set_text("c", Text::new("c", FontHandle::new(10)));
        store.set_position("b", Position::new(0.0, 0.0, 1.0));
        store.set_text("b", Text::new("b", FontHandle::new(10)));
        store.set_position("a", Position::new(0.0, 0.0, 0.0));
        store.set_text("a", Text::new("a", FontHandle::new(10)));

        let order: Vec<&str> = collect(&store).iter().map(|c| c.entity()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
    }

    #[test]
    fn sprite_source_follows_frame_cell() {
        let mut store = EntityStore::new();
        store.set_position("hero", Position::new(10.0, 20.0, 0.0));
        store.set_sprite("hero", sheet(IVec2::new(2, 1)));

        assert_eq!(
            collect(&store),
            vec![DrawCommand::Sprite {
                entity: "hero",
                image: "sheet.png",
                source: IVec2::new(64, 48),
                size: UVec2::new(32, 48),
                dest: DVec2::new(10.0, 20.0),
            }]
        );
    }

    #[test]
    fn skips_hidden_sprites_and_unpositioned_entities() {
        let mut store = EntityStore::new();
        let mut hidden = sheet(IVec2::ZERO);
        hidden.hidden = true;
        store.set_position("ghost", Position::default());
        store.set_sprite("ghost", hidden);
        store.set_text("ghost", Text::new("boo", FontHandle::new(12)));
        store.set_text("floating", Text::new("nowhere", FontHandle::new(12)));

        let commands = collect(&store);
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], DrawCommand::Text { text: "boo", .. }));
    }

    #[test]
    fn render_brackets_frame() {
        let mut store = EntityStore::new();
        store.set_position("hero", Position::default());
        store.set_sprite("hero", sheet(IVec2::ZERO));

        let mut recorder = FrameRecorder::default();
        assert_eq!(render(&store, 7, &mut recorder), 1);
        assert_eq!(recorder.frames(), 1);
        assert_eq!(recorder.last_frame(), Some(7));
        assert_eq!(recorder.draws(), ["sprite:hero"]);
    }
}
