/// Geometric figure variants and the capability they share

use std::f64::consts::PI;
use std::fmt;

/// Anything with an area and a printable type name
pub trait Shape {
    fn area(&self) -> f64;
    fn type_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub height: f64,
    pub width: f64,
}

/// A square keeps a single side, so width and height can never disagree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Rectangle {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.height * self.width
    }

    fn type_name(&self) -> &'static str {
        "Rectangle"
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn type_name(&self) -> &'static str {
        "Square"
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn type_name(&self) -> &'static str {
        "Circle"
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Figure type: {}", self.type_name())?;
        writeln!(f, "Width: {}", self.width)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Area: {}", self.area())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Figure type: {}", self.type_name())?;
        writeln!(f, "Side: {}", self.side)?;
        writeln!(f, "Area: {}", self.area())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Figure type: {}", self.type_name())?;
        writeln!(f, "Radius: {}", self.radius)?;
        writeln!(f, "Area: {}", self.area())
    }
}
