use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::COLUMNS;
use crate::error::Error;

/// Stone color. Travels over the wire as its numeric code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Color {
    Black,
    White,
}

/// Accepted color names and their codes. Lookup is by presence, never by code value.
const COLOR_CODES: [(&str, Color); 2] = [("black", Color::Black), ("white", Color::White)];

impl Color {
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        COLOR_CODES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, color)| color)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.code()
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Color::from_code(code).ok_or_else(|| format!("unknown color code {code}"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column and row index of an intersection label such as `D6`.
pub type Point = (usize, usize);

/// Parse an intersection label into `(x, y)` with `y = row - 1`.
///
/// Only used to read a [`Board`]; placement passes labels through untouched.
pub fn parse_intersection(label: &str) -> Option<Point> {
    let mut chars = label.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let x = COLUMNS.find(letter)?;
    let row: usize = chars.as_str().parse().ok()?;
    let y = row.checked_sub(1)?;
    Some((x, y))
}

/// Snapshot of the server's board.
///
/// Decoded from the server's `board[y][x]` grid of codes (`0` empty,
/// `1` black, `2` white).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Stone at a label like `D6`, or `None` if empty or off the board.
    pub fn stone_at(&self, label: &str) -> Option<Color> {
        let (x, y) = parse_intersection(label)?;
        self.get(x, y)
    }

    pub fn stones(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Board {
    type Error = String;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size > COLUMNS.len() {
            return Err(format!("board of size {size} is too large"));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "row {} has {} points, expected {size}",
                    y + 1,
                    row.len()
                ));
            }
            for code in row {
                let cell = match code {
                    0 => None,
                    code => Some(Color::try_from(code)?),
                };
                cells.push(cell);
            }
        }
        Ok(Board { size, cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<char> = COLUMNS.chars().take(self.size).collect();
        for y in (0..self.size).rev() {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for c in columns {
            write!(f, "{c} ")?;
        }
        writeln!(f)
    }
}
