//! Two-dimensional coordinates and character maps.
//!
//! `x` grows to the right (column), `y` grows downwards (row).

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub};

use crate::error::{PuzzleError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0, 0);
    pub const UP: Vec2 = Vec2::new(0, -1);
    pub const RIGHT: Vec2 = Vec2::new(1, 0);
    pub const DOWN: Vec2 = Vec2::new(0, 1);
    pub const LEFT: Vec2 = Vec2::new(-1, 0);
    /// Clockwise, starting north.
    pub const DIRS: [Vec2; 4] = [Vec2::UP, Vec2::RIGHT, Vec2::DOWN, Vec2::LEFT];

    pub const fn new(x: i32, y: i32) -> Self {Vec2 {x, y}}

    pub fn turn_right(self) -> Self {Vec2::new(-self.y, self.x)}
    pub fn turn_left(self) -> Self {Vec2::new(self.y, -self.x)}
    pub fn manhattan(self) -> i32 {self.x.abs() + self.y.abs()}

    /// Maps an arrow (`^>v<`) to its direction.
    pub fn from_arrow(arrow: u8) -> Option<Self> {
        match arrow {
            b'^' => Some(Vec2::UP), b'>' => Some(Vec2::RIGHT),
            b'v' => Some(Vec2::DOWN), b'<' => Some(Vec2::LEFT),
            _ => None
        }
    }

    pub fn neighbours(self) -> impl Iterator<Item = Vec2> {
        Vec2::DIRS.into_iter().map(move |d| self + d)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {Vec2::new(self.x + rhs.x, self.y + rhs.y)}
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {*self = *self + rhs}
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {Vec2::new(self.x - rhs.x, self.y - rhs.y)}
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;
    fn mul(self, k: i32) -> Vec2 {Vec2::new(self.x * k, self.y * k)}
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {Vec2::new(-self.x, -self.y)}
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {write!(f, "{},{}", self.x, self.y)}
}

/// A rectangular map of bytes, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self> {
        let rows = input.trim().lines().map(|line| line.trim_end().as_bytes()).collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {return Err(PuzzleError::malformed("empty map"))}
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(PuzzleError::malformed(format!(
                "ragged map: row {:?} is not {width} wide", String::from_utf8_lossy(row)
            )));
        }
        Ok(Grid {width: width as i32, height: rows.len() as i32, cells: rows.concat()})
    }

    pub fn filled(width: i32, height: i32, cell: u8) -> Self {
        Grid {width, height, cells: vec![cell; (width * height) as usize]}
    }

    pub fn width(&self) -> i32 {self.width}
    pub fn height(&self) -> i32 {self.height}

    pub fn contains(&self, p: Vec2) -> bool {
        (0 .. self.width).contains(&p.x) && (0 .. self.height).contains(&p.y)
    }

    pub fn get(&self, p: Vec2) -> Option<u8> {
        self.contains(p).then(|| self.cells[self.offset(p)])
    }

    pub fn set(&mut self, p: Vec2, cell: u8) {
        let at = self.offset(p);
        self.cells[at] = cell;
    }

    /// First position holding `cell`, scanning row by row.
    pub fn find(&self, cell: u8) -> Option<Vec2> {
        self.cells.iter().position(|&c| c == cell).map(|at| self.position(at))
    }

    /// Like [`Grid::find`], but a missing marker is an error.
    pub fn marker(&self, cell: u8) -> Result<Vec2> {
        self.find(cell).ok_or(PuzzleError::MissingMarker(cell as char))
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0 .. self.cells.len()).map(|at| self.position(at))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Vec2, u8)> + '_ {
        self.cells.iter().enumerate().map(|(at, &c)| (self.position(at), c))
    }

    pub fn count(&self, cell: u8) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Dense index of an in-bounds position, for side tables.
    pub fn offset(&self, p: Vec2) -> usize {(p.y * self.width + p.x) as usize}

    pub fn len(&self) -> usize {self.cells.len()}

    pub fn is_empty(&self) -> bool {self.cells.is_empty()}

    fn position(&self, at: usize) -> Vec2 {
        Vec2::new(at as i32 % self.width, at as i32 / self.width)
    }
}

impl Index<Vec2> for Grid {
    type Output = u8;
    fn index(&self, p: Vec2) -> &u8 {&self.cells[self.offset(p)]}
}

impl IndexMut<Vec2> for Grid {
    fn index_mut(&mut self, p: Vec2) -> &mut u8 {
        let at = self.offset(p);
        &mut self.cells[at]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
