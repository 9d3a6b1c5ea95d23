use std::f32::consts::PI;
use std::marker::PhantomData;

use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme};

use bizcard_core::TiltState;

use crate::constants::PERSPECTIVE_DISTANCE;
use crate::theme::PaletteColors;

/// Canvas program rendering the card plane as a perspective-projected quad,
/// with a glare sweep while tilted.
pub struct TiltCardCanvas<'a, Message> {
    pub tilt: TiltState,
    pub cache: &'a canvas::Cache,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> TiltCardCanvas<'a, Message> {
    pub fn new(tilt: TiltState, cache: &'a canvas::Cache, palette: PaletteColors) -> Self {
        Self { tilt, cache, palette, _marker: PhantomData }
    }
}

fn rotation_about_x(angle: f32) -> [[f32; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]
}

fn rotation_about_y(angle: f32) -> [[f32; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]
}

fn multiply_matrices(a: &[[f32; 3]; 3], b: &[[f32; 3]; 3]) -> [[f32; 3]; 3] {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

fn multiply_matrix_vector(matrix: &[[f32; 3]; 3], vector: &[f32; 3]) -> [f32; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Rotates the card's corner offsets and projects them back to screen
/// space with a simple perspective divide.
fn project_corners(center: Point, half_w: f32, half_h: f32, tilt: TiltState) -> [Point; 4] {
    let rotation = multiply_matrices(
        &rotation_about_y(tilt.rotation_y.to_radians()),
        &rotation_about_x(tilt.rotation_x.to_radians()),
    );
    let corners = [
        [-half_w, -half_h, 0.0],
        [half_w, -half_h, 0.0],
        [half_w, half_h, 0.0],
        [-half_w, half_h, 0.0],
    ];
    corners.map(|corner| {
        let rotated = multiply_matrix_vector(&rotation, &corner);
        let scale = PERSPECTIVE_DISTANCE / (PERSPECTIVE_DISTANCE + rotated[2]);
        Point::new(center.x + rotated[0] * scale, center.y + rotated[1] * scale)
    })
}

impl<'a, Message> canvas::Program<Message> for TiltCardCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let card = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let margin = 10.0;
            let half_w = bounds.width / 2.0 - margin;
            let half_h = bounds.height / 2.0 - margin;

            let corners = project_corners(center, half_w, half_h, self.tilt);
            let card_path = Path::new(|builder| {
                builder.move_to(corners[0]);
                builder.line_to(corners[1]);
                builder.line_to(corners[2]);
                builder.line_to(corners[3]);
                builder.close();
            });

            // Drop shadow offset opposite the tilt, then the face itself.
            let shadow_path = Path::new(|builder| {
                let dx = self.tilt.rotation_y * 0.3;
                let dy = -self.tilt.rotation_x * 0.3 + 6.0;
                builder.move_to(Point::new(corners[0].x + dx, corners[0].y + dy));
                builder.line_to(Point::new(corners[1].x + dx, corners[1].y + dy));
                builder.line_to(Point::new(corners[2].x + dx, corners[2].y + dy));
                builder.line_to(Point::new(corners[3].x + dx, corners[3].y + dy));
                builder.close();
            });
            frame.fill(&shadow_path, Color { a: 0.18, ..Color::BLACK });
            frame.fill(&card_path, self.palette.surface_raised);

            let magnitude =
                (self.tilt.rotation_x.powi(2) + self.tilt.rotation_y.powi(2)).sqrt();
            let border_color = if magnitude > 0.5 {
                Color { a: 0.8, ..self.palette.accent }
            } else {
                Color { a: 0.6, ..self.palette.border }
            };
            frame.stroke(
                &card_path,
                Stroke::default().with_color(border_color).with_width(1.5),
            );

            // Glare sweep across the face while tilted.
            if magnitude > 0.5 {
                let angle = self.tilt.rotation_y * 0.05 + PI / 4.0;
                let glare_len = bounds.width * 1.5;
                let start = Point::new(
                    center.x + angle.cos() * glare_len * 0.5,
                    center.y + angle.sin() * glare_len * 0.5,
                );
                let end = Point::new(
                    center.x - angle.cos() * glare_len * 0.5,
                    center.y - angle.sin() * glare_len * 0.5,
                );
                let glare = gradient::Linear::new(start, end)
                    .add_stop(0.0, Color::TRANSPARENT)
                    .add_stop(0.5, Color { a: 0.08, ..Color::WHITE })
                    .add_stop(1.0, Color::TRANSPARENT);
                frame.fill(&card_path, glare);
            }
        });
        vec![card]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tilt_projects_to_the_flat_rectangle() {
        let corners = project_corners(Point::new(100.0, 100.0), 50.0, 30.0, TiltState::default());
        assert_eq!(corners[0], Point::new(50.0, 70.0));
        assert_eq!(corners[2], Point::new(150.0, 130.0));
    }

    #[test]
    fn tilt_foreshortens_the_near_edge() {
        let tilt = TiltState { rotation_x: 0.0, rotation_y: 20.0 };
        let corners = project_corners(Point::new(0.0, 0.0), 100.0, 60.0, tilt);
        // Rotation about Y pulls one vertical edge toward the viewer and
        // pushes the other away; projected widths differ.
        let left = corners[0].x.abs();
        let right = corners[1].x.abs();
        assert!((left - right).abs() > 1.0);
    }
}
