//! Room movement deltas and the accumulated room address.

use core::fmt;
use core::num::ParseIntError;
use core::ops::AddAssign;
use core::str::FromStr;

/// Signed movement reported when the player crosses a room boundary.
///
/// Parses from `"z,x,y"`:
///
/// ```
/// use babel_core::RoomMove;
///
/// let m: RoomMove = "1,-1,0".parse().unwrap();
/// assert_eq!(m, RoomMove::new(1, -1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RoomMove {
    pub z: i32,
    pub x: i32,
    pub y: i32,
}

impl RoomMove {
    #[must_use]
    pub const fn new(z: i32, x: i32, y: i32) -> Self {
        Self { z, x, y }
    }

    /// Returns `true` if the move changes nothing.
    #[must_use]
    pub const fn is_still(&self) -> bool {
        self.z == 0 && self.x == 0 && self.y == 0
    }
}

/// Error when parsing a [`RoomMove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomMoveParseError {
    /// The input did not have exactly three comma-separated parts.
    WrongArity {
        /// Number of parts found.
        found: usize,
    },
    /// A part was not a signed integer.
    InvalidComponent {
        /// Zero-based position of the part.
        position: usize,
        /// The parser's complaint.
        source: ParseIntError,
    },
}

impl fmt::Display for RoomMoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity { found } => {
                write!(f, "expected three components z,x,y, found {}", found)
            }
            Self::InvalidComponent { position, source } => {
                write!(f, "component {} is not an integer: {}", position, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RoomMoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WrongArity { .. } => None,
            Self::InvalidComponent { source, .. } => Some(source),
        }
    }
}

impl FromStr for RoomMove {
    type Err = RoomMoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0i32; 3];
        let mut found = 0;
        for (position, part) in s.split(',').enumerate() {
            if position < 3 {
                parts[position] = part
                    .trim()
                    .parse()
                    .map_err(|source| RoomMoveParseError::InvalidComponent { position, source })?;
            }
            found += 1;
        }
        if found != 3 {
            return Err(RoomMoveParseError::WrongArity { found });
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for RoomMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.z, self.x, self.y)
    }
}

/// Where the player stands, as the running sum of every applied move.
///
/// The seed grid only keeps byte-sized counters that wrap; this keeps the
/// unbounded room number a display shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RoomAddress {
    pub z: i64,
    pub x: i64,
    pub y: i64,
}

impl AddAssign<RoomMove> for RoomAddress {
    fn add_assign(&mut self, m: RoomMove) {
        self.z += i64::from(m.z);
        self.x += i64::from(m.x);
        self.y += i64::from(m.y);
    }
}

impl fmt::Display for RoomAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.z, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!("0,0,-1".parse(), Ok(RoomMove::new(0, 0, -1)));
        assert_eq!(" 3 , 4 ,5".parse(), Ok(RoomMove::new(3, 4, 5)));
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            "1,2".parse::<RoomMove>(),
            Err(RoomMoveParseError::WrongArity { found: 2 })
        );
        assert_eq!(
            "1,2,3,4".parse::<RoomMove>(),
            Err(RoomMoveParseError::WrongArity { found: 4 })
        );
    }

    #[test]
    fn test_parse_bad_component() {
        let err = "1,x,3".parse::<RoomMove>().unwrap_err();
        assert!(matches!(
            err,
            RoomMoveParseError::InvalidComponent { position: 1, .. }
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let m = RoomMove::new(-1, 2, 0);
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[test]
    fn test_address_accumulates() {
        let mut room = RoomAddress::default();
        room += RoomMove::new(1, 1, 0);
        room += RoomMove::new(-1, 0, 2);
        assert_eq!(room, RoomAddress { z: 0, x: 1, y: 2 });
        assert_eq!(room.to_string(), "[0, 1, 2]");
    }

    #[test]
    fn test_is_still() {
        assert!(RoomMove::default().is_still());
        assert!(!RoomMove::new(0, 0, 1).is_still());
    }
}
