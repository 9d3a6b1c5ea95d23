use std::f32::consts::TAU;
use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, path, Geometry, Path, Stroke};
use iced::{Color, Radians, Rectangle, Theme};

use crate::constants::AVATAR_RING_WIDTH;
use crate::theme::rainbow_ring;

/// The avatar's rainbow border: eight arc segments sweeping the circle.
pub struct AvatarRing<Message> {
    pub background: Color,
    pub _marker: PhantomData<Message>,
}

impl<Message> AvatarRing<Message> {
    pub fn new(background: Color) -> Self {
        Self { background, _marker: PhantomData }
    }
}

impl<Message> canvas::Program<Message> for AvatarRing<Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - AVATAR_RING_WIDTH;

        let disc = Path::circle(center, radius - AVATAR_RING_WIDTH / 2.0);
        frame.fill(&disc, self.background);

        let colors = rainbow_ring();
        let segment = TAU / colors.len() as f32;
        for (i, color) in colors.iter().enumerate() {
            let start = i as f32 * segment;
            let arc = Path::new(|builder| {
                builder.arc(path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + segment),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_color(*color)
                    .with_width(AVATAR_RING_WIDTH),
            );
        }

        vec![frame.into_geometry()]
    }
}
