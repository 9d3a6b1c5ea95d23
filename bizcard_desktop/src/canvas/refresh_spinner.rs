use std::f32::consts::PI;
use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

use crate::animation::RefreshSpinnerState;

/// Orbital busy indicator shown while a refresh cycle is in flight.
pub struct RefreshSpinner<'a, Message> {
    pub state: &'a RefreshSpinnerState,
    pub size: f32,
    pub color: Color,
    pub accent_color: Color,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> RefreshSpinner<'a, Message> {
    pub fn new(state: &'a RefreshSpinnerState, size: f32, color: Color, accent_color: Color) -> Self {
        Self { state, size, color, accent_color, _marker: PhantomData }
    }
}

impl<'a, Message> canvas::Program<Message> for RefreshSpinner<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        vec![self.state.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let time = self.state.tick;
            let dots = 6;
            let orbit = self.size * 0.8;

            for i in 0..dots {
                let phase = i as f32 / dots as f32;
                let angle = time * 3.0 + phase * 2.0 * PI;
                let position = Point::new(
                    center.x + angle.cos() * orbit,
                    center.y + angle.sin() * orbit,
                );
                // Trailing dots shrink and fade.
                let fade = 1.0 - phase * 0.7;
                let dot = Path::circle(position, self.size * 0.12 * fade + 1.0);
                let color = if i == 0 { self.accent_color } else { self.color };
                frame.fill(&dot, Color { a: fade, ..color });
            }
        })]
    }
}
