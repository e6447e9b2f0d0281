//! Eye layout - white of the eye plus pupil
//!
//! The eye is centered on the body. The pupil sits inside the white,
//! its bottom edge flush with the white's bottom edge.

use super::point::Point;
use super::primitives::{CornerRadii, Rectangle, RoundedRect};

/// White of the eye size in model units
pub const EYE_WHITE_WIDTH: f32 = 170.0;
pub const EYE_WHITE_HEIGHT: f32 = 120.0;
/// Radius of the two rounded top corners
pub const EYE_WHITE_TOP_RADIUS: f32 = 50.0;
/// Side length of the square pupil
pub const PUPIL_SIZE: f32 = 50.0;

/// Placed eye primitives
#[derive(Clone, Debug, PartialEq)]
pub struct EyeLayout {
    pub white: RoundedRect,
    pub pupil: Rectangle,
}

impl EyeLayout {
    /// Lay out the eye around `center`
    pub fn centered_at(center: Point) -> Self {
        let white = RoundedRect::new(
            Rectangle::at(center.x, center.y, EYE_WHITE_WIDTH, EYE_WHITE_HEIGHT),
            CornerRadii::top(EYE_WHITE_TOP_RADIUS),
        );
        let pupil = Rectangle::above(white.rect.bottom_center(), PUPIL_SIZE, PUPIL_SIZE);

        Self { white, pupil }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_centered_on_body() {
        let eye = EyeLayout::centered_at(Point::new(200.0, 200.0));
        assert_eq!(eye.white.rect.center(), Point::new(200.0, 200.0));
        assert_eq!(eye.white.rect.min(), Point::new(115.0, 140.0));
        assert_eq!(eye.white.rect.max(), Point::new(285.0, 260.0));
        assert_eq!(eye.white.radii, CornerRadii::top(50.0));
    }

    #[test]
    fn test_pupil_anchored_bottom_center() {
        let eye = EyeLayout::centered_at(Point::new(200.0, 200.0));
        assert_eq!(eye.pupil.bottom_center(), eye.white.rect.bottom_center());
        let size = eye.pupil.max() - eye.pupil.min();
        assert_eq!(size, Point::new(PUPIL_SIZE, PUPIL_SIZE));
        assert_eq!(eye.pupil.min(), Point::new(175.0, 210.0));
    }
}
