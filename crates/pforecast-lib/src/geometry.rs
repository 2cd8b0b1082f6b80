//! Map coordinates and map geometry configuration.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point (or an offset) on the star map, in light-years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for the `(0,0)` offset.
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Squared Euclidean distance to another point.
    pub fn squared_distance_to(&self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.squared_distance_to(other) as f64).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl std::str::FromStr for Point {
    type Err = String;

    /// Parse `X,Y` (surrounding parentheses optional).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid X coordinate in '{s}': {e}"))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid Y coordinate in '{s}': {e}"))?;
        Ok(Point::new(x, y))
    }
}

/// Map topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapMode {
    /// Plain rectangle; coordinates are never altered.
    #[default]
    Flat,
    /// Torus; coordinates leaving one edge re-enter at the opposite edge.
    Wrapped,
}

/// Map geometry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfiguration {
    pub mode: MapMode,
    /// Inclusive lower-left corner of the canonical map rectangle.
    pub min: Point,
    /// Exclusive upper-right corner of the canonical map rectangle.
    pub max: Point,
}

impl Default for MapConfiguration {
    fn default() -> Self {
        Self {
            mode: MapMode::Flat,
            min: Point::new(1000, 1000),
            max: Point::new(3000, 3000),
        }
    }
}

impl MapConfiguration {
    /// Wrapped map with the given canonical rectangle.
    pub fn wrapped(min: Point, max: Point) -> Self {
        Self {
            mode: MapMode::Wrapped,
            min,
            max,
        }
    }

    /// Map a point into canonical coordinates.
    pub fn normalize(&self, pt: Point) -> Point {
        match self.mode {
            MapMode::Flat => pt,
            MapMode::Wrapped => Point::new(
                wrap(pt.x, self.min.x, self.max.x),
                wrap(pt.y, self.min.y, self.max.y),
            ),
        }
    }

    /// Offset from `from` to `to`, the short way round on a wrapped map.
    pub fn delta(&self, from: Point, to: Point) -> Point {
        let d = to - from;
        match self.mode {
            MapMode::Flat => d,
            MapMode::Wrapped => Point::new(
                shortest(d.x, self.max.x - self.min.x),
                shortest(d.y, self.max.y - self.min.y),
            ),
        }
    }
}

fn wrap(value: i32, min: i32, max: i32) -> i32 {
    let size = max - min;
    if size <= 0 {
        return value;
    }
    min + (value - min).rem_euclid(size)
}

fn shortest(delta: i32, size: i32) -> i32 {
    if size <= 0 {
        return delta;
    }
    let d = delta.rem_euclid(size);
    if d > size / 2 {
        d - size
    } else {
        d
    }
}
