/// Closed set of figures, ordered by area

use std::cmp::Ordering;
use std::fmt;

use super::shape::{Circle, Rectangle, Shape, Square};
use crate::constants::figures::AREA_EPSILON;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
}

impl Figure {
    pub fn rectangle(height: f64, width: f64) -> Self {
        Figure::Rectangle(Rectangle::new(height, width))
    }

    pub fn square(side: f64) -> Self {
        Figure::Square(Square::new(side))
    }

    pub fn circle(radius: f64) -> Self {
        Figure::Circle(Circle::new(radius))
    }

    fn shape(&self) -> &dyn Shape {
        match self {
            Figure::Rectangle(r) => r,
            Figure::Square(s) => s,
            Figure::Circle(c) => c,
        }
    }

    /// Compare by area; areas within `AREA_EPSILON` of each other are equal.
    ///
    /// Not transitive near the tolerance, so this is meant for
    /// `SimpleList::sort_by` rather than an `Ord` impl.
    pub fn compare_area(&self, other: &Figure) -> Ordering {
        let (a, b) = (self.area(), other.area());
        if (a - b).abs() <= AREA_EPSILON {
            Ordering::Equal
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl Shape for Figure {
    fn area(&self) -> f64 {
        self.shape().area()
    }

    fn type_name(&self) -> &'static str {
        self.shape().type_name()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Rectangle(r) => fmt::Display::fmt(r, f),
            Figure::Square(s) => fmt::Display::fmt(s, f),
            Figure::Circle(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Rectangle> for Figure {
    fn from(r: Rectangle) -> Self {
        Figure::Rectangle(r)
    }
}

impl From<Square> for Figure {
    fn from(s: Square) -> Self {
        Figure::Square(s)
    }
}

impl From<Circle> for Figure {
    fn from(c: Circle) -> Self {
        Figure::Circle(c)
    }
}
