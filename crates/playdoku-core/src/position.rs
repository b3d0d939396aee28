//! Board coordinates and the box ↔ row/column bijection.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Every position also belongs to exactly one of the nine 3×3 boxes;
/// [`Position::from_box`] and [`Position::box_index`] /
/// [`Position::in_box_index`] convert between the two addressings and are
/// exact inverses of each other.
///
/// Out-of-range coordinates are a programming error: constructors assert and
/// panic rather than clamp.
///
/// # Examples
///
/// ```
/// use playdoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.box_index(), 7);
/// assert_eq!(Position::from_box(pos.box_index(), pos.in_box_index()), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Creates a position from a box index and a cell index within that box.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom, and so are the
    /// cells inside each box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `in_box` is 9 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use playdoku_core::Position;
    ///
    /// // Box 4 is the center box; cell 0 is its top-left corner.
    /// assert_eq!(Position::from_box(4, 0), Position::new(3, 3));
    /// assert_eq!(Position::from_box(8, 8), Position::new(8, 8));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, in_box: u8) -> Self {
        assert!(box_index < 9 && in_box < 9, "box coordinate out of range");
        Self::new(
            (box_index % 3) * 3 + in_box % 3,
            (box_index / 3) * 3 + in_box / 3,
        )
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the index of this position within its 3×3 box (0-8).
    #[must_use]
    pub const fn in_box_index(self) -> u8 {
        (self.y % 3) * 3 + self.x % 3
    }

    /// Returns the row-major array index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        self.y.checked_sub(1).map(|y| Self::new(self.x, y))
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        (self.y < 8).then(|| Self::new(self.x, self.y + 1))
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.x.checked_sub(1).map(|x| Self::new(x, self.y))
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub fn right(self) -> Option<Self> {
        (self.x < 8).then(|| Self::new(self.x + 1, self.y))
    }

    /// Returns all 9 positions in this position's row, left to right.
    pub fn row_positions(self) -> impl Iterator<Item = Self> {
        (0..9).map(move |x| Self::new(x, self.y))
    }

    /// Returns all 9 positions in this position's column, top to bottom.
    pub fn column_positions(self) -> impl Iterator<Item = Self> {
        (0..9).map(move |y| Self::new(self.x, y))
    }

    /// Returns all 9 positions in this position's box, row-major.
    pub fn box_positions(self) -> impl Iterator<Item = Self> {
        let box_index = self.box_index();
        (0..9).map(move |i| Self::from_box(box_index, i))
    }

    /// Returns the 21 positions sharing a row, column, or box with this one,
    /// including the position itself.
    pub fn house_positions(self) -> impl Iterator<Item = Self> {
        self.row_positions()
            .chain(self.column_positions().filter(move |p| p.y != self.y))
            .chain(
                self.box_positions()
                    .filter(move |p| p.x != self.x && p.y != self.y),
            )
    }

    /// Returns the 20 peers sharing a row, column, or box with this position,
    /// excluding the position itself.
    pub fn house_peers(self) -> impl Iterator<Item = Self> {
        self.house_positions().filter(move |&p| p != self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y + 1, self.x + 1)
    }
}
