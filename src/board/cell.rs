//! Sides and cell paint states.
//!
//! Three sides compete, each controlling a mirrored pair of agents. A cell
//! carries zero, one, or two coats of one side's paint; painting over a rival
//! strips a coat instead of claiming the cell outright.

/// One of the three competing sides, named by paint color.
///
/// The server serves every client a view rotated into its own frame, so the
/// side a client plays is always index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Green = 1,
    Blue = 2,
}

/// All sides in index order.
pub const ALL_SIDES: [Side; 3] = [Side::Red, Side::Green, Side::Blue];
/// Number of competing sides.
pub const SIDE_COUNT: usize = 3;
/// Number of agent slots; each side controls two, mirrored around the middle.
pub const AGENT_COUNT: usize = 6;

impl Side {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side for a wire or array index.
    pub const fn from_index(i: u8) -> Option<Side> {
        match i {
            0 => Some(Side::Red),
            1 => Some(Side::Green),
            2 => Some(Side::Blue),
            _ => None,
        }
    }

    /// The side controlling agent slot `slot`: side s owns slots s and 5-s.
    pub const fn of_slot(slot: usize) -> Side {
        match if slot < 3 { slot } else { 5 - slot } {
            0 => Side::Red,
            1 => Side::Green,
            _ => Side::Blue,
        }
    }

    /// The two agent slots this side controls, low slot first.
    pub const fn slots(self) -> [usize; 2] {
        [self as usize, 5 - self as usize]
    }
}

/// Paint state of one cell.
///
/// The wire encoding is an (owner, val) pair: (-1, 0) for `Clear`, (s, 1)
/// for `Half(s)`, (s, 2) for `Full(s)`. Fresh paint is always a full coat;
/// rival paint wears it down one coat at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Clear,
    Half(Side),
    Full(Side),
}

impl Cell {
    pub const fn owner(self) -> Option<Side> {
        match self {
            Cell::Clear => None,
            Cell::Half(side) | Cell::Full(side) => Some(side),
        }
    }

    /// Coats of paint on the cell: 0, 1 or 2.
    pub const fn coat(self) -> u8 {
        match self {
            Cell::Clear => 0,
            Cell::Half(_) => 1,
            Cell::Full(_) => 2,
        }
    }

    /// The cell after `by` paints it: claiming clear ground or repainting
    /// one's own yields a full coat; rival paint loses a coat, clearing the
    /// cell entirely when only half remained.
    pub fn painted(self, by: Side) -> Cell {
        match self {
            Cell::Clear => Cell::Full(by),
            Cell::Half(side) | Cell::Full(side) if side == by => Cell::Full(by),
            Cell::Half(_) => Cell::Clear,
            Cell::Full(side) => Cell::Half(side),
        }
    }

    /// Decodes the wire (owner, val) pair.
    pub fn from_wire(owner: i8, val: i8) -> Option<Cell> {
        if owner == -1 && val == 0 {
            return Some(Cell::Clear);
        }
        let side = Side::from_index(u8::try_from(owner).ok()?)?;
        match val {
            1 => Some(Cell::Half(side)),
            2 => Some(Cell::Full(side)),
            _ => None,
        }
    }
}
