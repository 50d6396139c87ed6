use crate::{coord::{CoordIJK, FaceIJK}, error, Direction, Face};
use std::fmt;

/// Maximum value for a base cell.
pub const MAX: u8 = 121;

// Bitmap where a bit's position represents a base cell value.
const BASE_PENTAGONS: u128 = 0x0020_0802_0008_0100_8402_0040_0100_4010;

// The two pentagons sitting at the icosahedron's poles (faces 0 and 19);
// all six of their neighbors lie along the `I` axe.
const POLAR_PENTAGONS: [u8; 2] = [4, 117];

// -----------------------------------------------------------------------------

/// One of the 122 base cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseCell(u8);

impl BaseCell {
    /// Initializes a new base cell using a value that may be out of range.
    ///
    /// # Safety
    ///
    /// The value must be a valid base cell.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value <= MAX, "base cell out of range");
        Self(value)
    }

    /// Returns true if the base cell is pentagonal.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::BaseCell;
    ///
    /// assert!(BaseCell::try_from(4)?.is_pentagon());
    /// assert!(!BaseCell::try_from(8)?.is_pentagon());
    /// # Ok::<(), icohex::error::InvalidBaseCell>(())
    /// ```
    #[must_use]
    pub const fn is_pentagon(self) -> bool {
        BASE_PENTAGONS & (1 << self.0) != 0
    }

    /// Returns true if the base cell is one of the two polar pentagons (base
    /// cells 4 and 117), whose six neighbors all sit along the `I` axe.
    #[must_use]
    pub(crate) const fn is_polar_pentagon(self) -> bool {
        self.0 == POLAR_PENTAGONS[0] || self.0 == POLAR_PENTAGONS[1]
    }

    /// Returns true if the base cell, a pentagon, is a CW offset for the
    /// given face (rather than the default CCW orientation).
    #[must_use]
    pub(crate) fn is_cw_offset(self, face: Face) -> bool {
        CW_OFFSETS
            .iter()
            .find(|(base_cell, _, _)| *base_cell == self.0)
            .is_some_and(|(_, face0, face1)| face == *face0 || face == *face1)
    }

    /// Returns the neighbor of this base cell in the given direction, if any.
    ///
    /// Returns `None` only for the `K` direction of a pentagon, since the `K`
    /// axe is deleted there.
    #[must_use]
    pub(crate) fn neighbor(self, direction: Direction) -> Option<Self> {
        let value = NEIGHBORS[usize::from(self.0)][usize::from(direction)];
        (value >= 0).then(|| Self::new_unchecked(value as u8))
    }

    /// Returns the number of 60° CCW rotations to apply to the coordinate
    /// system of the neighbor, in the given direction, to align it onto this
    /// base cell's coordinate system.
    #[must_use]
    pub(crate) fn neighbor_rotation(self, direction: Direction) -> u8 {
        // SAFETY: rotation count is always in [0; 5].
        ROTATIONS[usize::from(self.0)][usize::from(direction)] as u8
    }

    /// Returns the direction from this base cell towards the given
    /// neighboring base cell, if any.
    ///
    /// This is the reverse of [`Self::neighbor`]: brute-forces every
    /// direction and returns the one that lands on `other`.
    #[must_use]
    pub(crate) fn direction(self, other: Self) -> Option<Direction> {
        Direction::iter().find(|&direction| self.neighbor(direction) == Some(other))
    }

    /// Returns the total number of base cells.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::BaseCell;
    ///
    /// assert_eq!(BaseCell::count(), 122);
    /// ```
    #[must_use]
    pub const fn count() -> u8 {
        MAX + 1
    }

    /// Returns all the base cell.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::BaseCell;
    ///
    /// let cells = BaseCell::iter().collect::<Vec<_>>();
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::count()).map(Self::new_unchecked)
    }
}

impl TryFrom<u8> for BaseCell {
    type Error = error::InvalidBaseCell;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX {
            return Err(Self::Error::new(value, "out of range"));
        }
        Ok(Self(value))
    }
}

impl From<BaseCell> for u8 {
    fn from(value: BaseCell) -> Self {
        value.0
    }
}

impl From<BaseCell> for usize {
    fn from(value: BaseCell) -> Self {
        Self::from(value.0)
    }
}

impl From<BaseCell> for FaceIJK {
    fn from(value: BaseCell) -> Self {
        HOMES[usize::from(value.0)]
    }
}

impl fmt::Display for BaseCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for BaseCell {
    fn arbitrary(
        data: &mut arbitrary::Unstructured<'a>,
    ) -> arbitrary::Result<Self> {
        u8::arbitrary(data).and_then(|byte| {
            Self::try_from(byte).map_err(|_| arbitrary::Error::IncorrectFormat)
        })
    }
}

// -----------------------------------------------------------------------------

// For each base cell and direction, the neighboring base cell (-1 when the
// neighbor doesn't exist, i.e. the deleted `K` axe of a pentagon).
#[rustfmt::skip]
static NEIGHBORS: [[i8; 7]; 122] = [
    [  0,   1,   5,   2,   4,   3,   8], // 0
    [  1,   7,   6,   9,   0,   3,   2], // 1
    [  2,   6,  10,  11,   0,   1,   5], // 2
    [  3,  13,   1,   7,   4,  12,   0], // 3
    [  4,  -1,  15,   8,   3,   0,  12], // 4
    [  5,   2,  18,  10,   8,   0,  16], // 5
    [  6,  14,  11,  17,   1,   9,   2], // 6
    [  7,  21,   9,  19,   3,  13,   1], // 7
    [  8,   5,  22,  16,   4,   0,  15], // 8
    [  9,  19,  14,  20,   1,   7,   6], // 9
    [ 10,  11,  24,  23,   5,   2,  18], // 10
    [ 11,  17,  23,  25,   2,   6,  10], // 11
    [ 12,  28,  13,  26,   4,  15,   3], // 12
    [ 13,  26,  21,  29,   3,  12,   7], // 13
    [ 14,  -1,  17,  27,   9,  20,   6], // 14
    [ 15,  22,  28,  31,   4,   8,  12], // 15
    [ 16,  18,  33,  30,   8,   5,  22], // 16
    [ 17,  11,  14,   6,  35,  25,  27], // 17
    [ 18,  24,  30,  32,   5,  10,  16], // 18
    [ 19,  34,  20,  36,   7,  21,   9], // 19
    [ 20,  14,  19,   9,  40,  27,  36], // 20
    [ 21,  38,  19,  34,  13,  29,   7], // 21
    [ 22,  16,  41,  33,  15,   8,  31], // 22
    [ 23,  24,  11,  10,  39,  37,  25], // 23
    [ 24,  -1,  32,  37,  10,  23,  18], // 24
    [ 25,  23,  17,  11,  45,  39,  35], // 25
    [ 26,  42,  29,  43,  12,  28,  13], // 26
    [ 27,  40,  35,  46,  14,  20,  17], // 27
    [ 28,  31,  42,  44,  12,  15,  26], // 28
    [ 29,  43,  38,  47,  13,  26,  21], // 29
    [ 30,  32,  48,  50,  16,  18,  33], // 30
    [ 31,  41,  44,  53,  15,  22,  28], // 31
    [ 32,  30,  24,  18,  52,  50,  37], // 32
    [ 33,  30,  49,  48,  22,  16,  41], // 33
    [ 34,  19,  38,  21,  54,  36,  51], // 34
    [ 35,  46,  45,  56,  17,  27,  25], // 35
    [ 36,  20,  34,  19,  55,  40,  54], // 36
    [ 37,  39,  52,  57,  24,  23,  32], // 37
    [ 38,  -1,  34,  51,  29,  47,  21], // 38
    [ 39,  37,  25,  23,  59,  57,  45], // 39
    [ 40,  27,  36,  20,  60,  46,  55], // 40
    [ 41,  49,  53,  61,  22,  33,  31], // 41
    [ 42,  58,  43,  62,  28,  44,  26], // 42
    [ 43,  62,  47,  64,  26,  42,  29], // 43
    [ 44,  53,  58,  65,  28,  31,  42], // 44
    [ 45,  39,  35,  25,  63,  59,  56], // 45
    [ 46,  60,  56,  68,  27,  40,  35], // 46
    [ 47,  38,  43,  29,  69,  51,  64], // 47
    [ 48,  49,  30,  33,  67,  66,  50], // 48
    [ 49,  -1,  61,  66,  33,  48,  41], // 49
    [ 50,  48,  32,  30,  70,  67,  52], // 50
    [ 51,  69,  54,  71,  38,  47,  34], // 51
    [ 52,  57,  70,  74,  32,  37,  50], // 52
    [ 53,  61,  65,  75,  31,  41,  44], // 53
    [ 54,  71,  55,  73,  34,  51,  36], // 54
    [ 55,  40,  54,  36,  72,  60,  73], // 55
    [ 56,  68,  63,  77,  35,  46,  45], // 56
    [ 57,  59,  74,  78,  37,  39,  52], // 57
    [ 58,  -1,  62,  76,  44,  65,  42], // 58
    [ 59,  63,  78,  79,  39,  45,  57], // 59
    [ 60,  72,  68,  80,  40,  55,  46], // 60
    [ 61,  53,  49,  41,  81,  75,  66], // 61
    [ 62,  43,  58,  42,  82,  64,  76], // 62
    [ 63,  -1,  56,  45,  79,  59,  77], // 63
    [ 64,  47,  62,  43,  84,  69,  82], // 64
    [ 65,  58,  53,  44,  86,  76,  75], // 65
    [ 66,  67,  81,  85,  49,  48,  61], // 66
    [ 67,  66,  50,  48,  87,  85,  70], // 67
    [ 68,  56,  60,  46,  90,  77,  80], // 68
    [ 69,  51,  64,  47,  89,  71,  84], // 69
    [ 70,  67,  52,  50,  83,  87,  74], // 70
    [ 71,  89,  73,  91,  51,  69,  54], // 71
    [ 72,  -1,  73,  55,  80,  60,  88], // 72
    [ 73,  91,  72,  88,  54,  71,  55], // 73
    [ 74,  78,  83,  92,  52,  57,  70], // 74
    [ 75,  65,  61,  53,  94,  86,  81], // 75
    [ 76,  86,  82,  96,  58,  65,  62], // 76
    [ 77,  63,  68,  56,  93,  79,  90], // 77
    [ 78,  74,  59,  57,  95,  92,  79], // 78
    [ 79,  78,  63,  59,  93,  95,  77], // 79
    [ 80,  68,  72,  60,  99,  90,  88], // 80
    [ 81,  85,  94, 101,  61,  66,  75], // 81
    [ 82,  96,  84,  98,  62,  76,  64], // 82
    [ 83,  -1,  74,  70, 100,  87,  92], // 83
    [ 84,  69,  82,  64,  97,  89,  98], // 84
    [ 85,  87, 101, 102,  66,  67,  81], // 85
    [ 86,  76,  75,  65, 104,  96,  94], // 86
    [ 87,  83, 102, 100,  67,  70,  85], // 87
    [ 88,  72,  91,  73,  99,  80, 105], // 88
    [ 89,  97,  91, 103,  69,  84,  71], // 89
    [ 90,  77,  80,  68, 106,  93,  99], // 90
    [ 91,  73,  89,  71, 105,  88, 103], // 91
    [ 92,  83,  78,  74, 108, 100,  95], // 92
    [ 93,  79,  90,  77, 109,  95, 106], // 93
    [ 94,  86,  81,  75, 107, 104, 101], // 94
    [ 95,  92,  79,  78, 109, 108,  93], // 95
    [ 96, 104,  98, 110,  76,  86,  82], // 96
    [ 97,  -1,  98,  84, 103,  89, 111], // 97
    [ 98, 110,  97, 111,  82,  96,  84], // 98
    [ 99,  80, 105,  88, 106,  90, 113], // 99
    [100, 102,  83,  87, 108, 114,  92], // 100
    [101, 102, 107, 112,  81,  85,  94], // 101
    [102, 101,  87,  85, 114, 112, 100], // 102
    [103,  91,  97,  89, 116, 105, 111], // 103
    [104, 107, 110, 115,  86,  94,  96], // 104
    [105,  88, 103,  91, 113,  99, 116], // 105
    [106,  93,  99,  90, 117, 109, 113], // 106
    [107,  -1, 101,  94, 115, 104, 112], // 107
    [108, 100,  95,  92, 118, 114, 109], // 108
    [109, 108,  93,  95, 117, 118, 106], // 109
    [110,  98, 104,  96, 119, 111, 115], // 110
    [111,  97, 110,  98, 116, 103, 119], // 111
    [112, 107, 102, 101, 120, 115, 114], // 112
    [113,  99, 116, 105, 117, 106, 121], // 113
    [114, 112, 100, 102, 118, 120, 108], // 114
    [115, 110, 107, 104, 120, 119, 112], // 115
    [116, 103, 119, 111, 113, 105, 121], // 116
    [117,  -1, 109, 118, 113, 121, 106], // 117
    [118, 120, 108, 114, 117, 121, 109], // 118
    [119, 111, 115, 110, 121, 116, 120], // 119
    [120, 115, 114, 112, 121, 119, 118], // 120
    [121, 116, 120, 119, 117, 113, 118], // 121
];

// For each base cell and direction, the number of 60° CCW rotations to apply
// to the neighbor coordinate system (meaningless where `NEIGHBORS` is -1).
#[rustfmt::skip]
static ROTATIONS: [[i8; 7]; 122] = [
    [ 0,  5,  0,  0,  1,  5,  1], // 0
    [ 0,  0,  1,  0,  1,  0,  1], // 1
    [ 0,  0,  0,  0,  0,  5,  0], // 2
    [ 0,  5,  0,  0,  2,  5,  1], // 3
    [ 0, -1,  1,  0,  3,  4,  2], // 4
    [ 0,  0,  1,  0,  1,  0,  1], // 5
    [ 0,  0,  0,  3,  5,  5,  0], // 6
    [ 0,  0,  0,  0,  0,  5,  0], // 7
    [ 0,  5,  0,  0,  0,  5,  1], // 8
    [ 0,  0,  1,  3,  0,  0,  1], // 9
    [ 0,  0,  1,  3,  0,  0,  1], // 10
    [ 0,  3,  3,  3,  0,  0,  0], // 11
    [ 0,  5,  0,  0,  3,  5,  1], // 12
    [ 0,  0,  1,  0,  1,  0,  1], // 13
    [ 0, -1,  3,  0,  5,  2,  0], // 14
    [ 0,  5,  0,  0,  4,  5,  1], // 15
    [ 0,  0,  0,  0,  0,  5,  0], // 16
    [ 0,  3,  3,  3,  3,  0,  3], // 17
    [ 0,  0,  0,  3,  5,  5,  0], // 18
    [ 0,  3,  3,  3,  0,  0,  0], // 19
    [ 0,  3,  3,  3,  0,  3,  0], // 20
    [ 0,  0,  0,  3,  5,  5,  0], // 21
    [ 0,  0,  1,  0,  1,  0,  1], // 22
    [ 0,  3,  3,  3,  0,  3,  0], // 23
    [ 0, -1,  3,  0,  5,  2,  0], // 24
    [ 0,  0,  0,  3,  0,  0,  3], // 25
    [ 0,  0,  0,  0,  0,  5,  0], // 26
    [ 0,  3,  0,  0,  0,  3,  3], // 27
    [ 0,  0,  1,  0,  1,  0,  1], // 28
    [ 0,  0,  1,  3,  0,  0,  1], // 29
    [ 0,  3,  3,  3,  0,  0,  0], // 30
    [ 0,  0,  0,  0,  0,  5,  0], // 31
    [ 0,  3,  3,  3,  3,  0,  3], // 32
    [ 0,  0,  1,  3,  0,  0,  1], // 33
    [ 0,  3,  3,  3,  3,  0,  3], // 34
    [ 0,  0,  3,  0,  3,  0,  3], // 35
    [ 0,  0,  0,  3,  0,  0,  3], // 36
    [ 0,  3,  0,  0,  0,  3,  3], // 37
    [ 0, -1,  3,  0,  5,  2,  0], // 38
    [ 0,  3,  0,  0,  3,  3,  0], // 39
    [ 0,  3,  0,  0,  3,  3,  0], // 40
    [ 0,  0,  0,  3,  5,  5,  0], // 41
    [ 0,  0,  0,  3,  5,  5,  0], // 42
    [ 0,  3,  3,  3,  0,  0,  0], // 43
    [ 0,  0,  1,  3,  0,  0,  1], // 44
    [ 0,  0,  3,  0,  0,  3,  3], // 45
    [ 0,  0,  0,  3,  0,  3,  0], // 46
    [ 0,  3,  3,  3,  0,  3,  0], // 47
    [ 0,  3,  3,  3,  0,  3,  0], // 48
    [ 0, -1,  3,  0,  5,  2,  0], // 49
    [ 0,  0,  0,  3,  0,  0,  3], // 50
    [ 0,  3,  0,  0,  0,  3,  3], // 51
    [ 0,  0,  3,  0,  3,  0,  3], // 52
    [ 0,  3,  3,  3,  0,  0,  0], // 53
    [ 0,  0,  3,  0,  3,  0,  3], // 54
    [ 0,  0,  3,  0,  0,  3,  3], // 55
    [ 0,  3,  3,  3,  0,  0,  3], // 56
    [ 0,  0,  0,  3,  0,  3,  0], // 57
    [ 0, -1,  3,  0,  5,  2,  0], // 58
    [ 0,  3,  3,  3,  3,  3,  0], // 59
    [ 0,  3,  3,  3,  3,  3,  0], // 60
    [ 0,  3,  3,  3,  3,  0,  3], // 61
    [ 0,  3,  3,  3,  3,  0,  3], // 62
    [ 0, -1,  3,  0,  5,  2,  0], // 63
    [ 0,  0,  0,  3,  0,  0,  3], // 64
    [ 0,  3,  3,  3,  0,  3,  0], // 65
    [ 0,  3,  0,  0,  0,  3,  3], // 66
    [ 0,  3,  0,  0,  3,  3,  0], // 67
    [ 0,  3,  3,  3,  0,  0,  0], // 68
    [ 0,  3,  0,  0,  3,  3,  0], // 69
    [ 0,  0,  3,  0,  0,  3,  3], // 70
    [ 0,  0,  0,  3,  0,  3,  0], // 71
    [ 0, -1,  3,  0,  5,  2,  0], // 72
    [ 0,  3,  3,  3,  0,  0,  3], // 73
    [ 0,  3,  3,  3,  0,  0,  3], // 74
    [ 0,  0,  0,  3,  0,  0,  3], // 75
    [ 0,  3,  0,  0,  0,  3,  3], // 76
    [ 0,  0,  0,  3,  0,  5,  0], // 77
    [ 0,  3,  3,  3,  0,  0,  0], // 78
    [ 0,  0,  1,  3,  1,  0,  1], // 79
    [ 0,  0,  1,  3,  1,  0,  1], // 80
    [ 0,  0,  3,  0,  3,  0,  3], // 81
    [ 0,  0,  3,  0,  3,  0,  3], // 82
    [ 0, -1,  3,  0,  5,  2,  0], // 83
    [ 0,  0,  3,  0,  0,  3,  3], // 84
    [ 0,  0,  0,  3,  0,  3,  0], // 85
    [ 0,  3,  0,  0,  3,  3,  0], // 86
    [ 0,  3,  3,  3,  3,  3,  0], // 87
    [ 0,  0,  0,  3,  0,  5,  0], // 88
    [ 0,  3,  3,  3,  3,  3,  0], // 89
    [ 0,  0,  0,  0,  0,  0,  1], // 90
    [ 0,  3,  3,  3,  0,  0,  0], // 91
    [ 0,  0,  0,  3,  0,  5,  0], // 92
    [ 0,  5,  0,  0,  5,  5,  0], // 93
    [ 0,  0,  3,  0,  0,  3,  3], // 94
    [ 0,  0,  0,  0,  0,  0,  1], // 95
    [ 0,  0,  0,  3,  0,  3,  0], // 96
    [ 0, -1,  3,  0,  5,  2,  0], // 97
    [ 0,  3,  3,  3,  0,  0,  3], // 98
    [ 0,  5,  0,  0,  5,  5,  0], // 99
    [ 0,  0,  1,  3,  1,  0,  1], // 100
    [ 0,  3,  3,  3,  0,  0,  3], // 101
    [ 0,  3,  3,  3,  0,  0,  0], // 102
    [ 0,  0,  1,  3,  1,  0,  1], // 103
    [ 0,  3,  3,  3,  3,  3,  0], // 104
    [ 0,  0,  0,  0,  0,  0,  1], // 105
    [ 0,  0,  1,  0,  3,  5,  1], // 106
    [ 0, -1,  3,  0,  5,  2,  0], // 107
    [ 0,  5,  0,  0,  5,  5,  0], // 108
    [ 0,  0,  1,  0,  4,  5,  1], // 109
    [ 0,  3,  3,  3,  0,  0,  0], // 110
    [ 0,  0,  0,  3,  0,  5,  0], // 111
    [ 0,  0,  0,  3,  0,  5,  0], // 112
    [ 0,  0,  1,  0,  2,  5,  1], // 113
    [ 0,  0,  0,  0,  0,  0,  1], // 114
    [ 0,  0,  1,  3,  1,  0,  1], // 115
    [ 0,  5,  0,  0,  5,  5,  0], // 116
    [ 0, -1,  1,  0,  3,  4,  2], // 117
    [ 0,  0,  1,  0,  0,  5,  1], // 118
    [ 0,  0,  0,  0,  0,  0,  1], // 119
    [ 0,  5,  0,  0,  5,  5,  0], // 120
    [ 0,  0,  1,  0,  1,  5,  1], // 121
];

// Home face and IJK coordinates (at resolution 0) of each base cell.
#[rustfmt::skip]
static HOMES: [FaceIJK; 122] = [
    FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(1, 0, 0)), // 0
    FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(1, 1, 0)), // 1
    FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 0, 0)), // 2
    FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(1, 0, 0)), // 3
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(2, 0, 0)), // 4 (pentagon)
    FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(1, 1, 0)), // 5
    FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 0, 1)), // 6
    FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 0, 0)), // 7
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(1, 0, 0)), // 8
    FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 1, 0)), // 9
    FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 1, 0)), // 10
    FaceIJK::new(Face::new_unchecked(1), CoordIJK::new(0, 1, 1)), // 11
    FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(1, 0, 0)), // 12
    FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(1, 1, 0)), // 13
    FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(2, 0, 0)), // 14 (pentagon)
    FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(1, 0, 0)), // 15
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 0, 0)), // 16
    FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(0, 1, 0)), // 17
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 0, 1)), // 18
    FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 1, 1)), // 19
    FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(0, 0, 1)), // 20
    FaceIJK::new(Face::new_unchecked(2), CoordIJK::new(0, 0, 1)), // 21
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(1, 1, 0)), // 22
    FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(0, 0, 1)), // 23
    FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(2, 0, 0)), // 24 (pentagon)
    FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(0, 0, 0)), // 25
    FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 0, 0)), // 26
    FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(1, 0, 0)), // 27
    FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(1, 1, 0)), // 28
    FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 1, 0)), // 29
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 1, 1)), // 30
    FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 0, 0)), // 31
    FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(0, 1, 0)), // 32
    FaceIJK::new(Face::new_unchecked(0), CoordIJK::new(0, 1, 0)), // 33
    FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(0, 1, 0)), // 34
    FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(1, 1, 0)), // 35
    FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(0, 0, 0)), // 36
    FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(1, 0, 0)), // 37
    FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(2, 0, 0)), // 38 (pentagon)
    FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(1, 0, 1)), // 39
    FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(1, 0, 1)), // 40
    FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 0, 1)), // 41
    FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 0, 1)), // 42
    FaceIJK::new(Face::new_unchecked(3), CoordIJK::new(0, 1, 1)), // 43
    FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 1, 0)), // 44
    FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(1, 0, 0)), // 45
    FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(0, 0, 0)), // 46
    FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(0, 0, 1)), // 47
    FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(0, 0, 1)), // 48
    FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(2, 0, 0)), // 49 (pentagon)
    FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(0, 0, 0)), // 50
    FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(1, 0, 0)), // 51
    FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(1, 1, 0)), // 52
    FaceIJK::new(Face::new_unchecked(4), CoordIJK::new(0, 1, 1)), // 53
    FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(1, 1, 0)), // 54
    FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(1, 0, 0)), // 55
    FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(0, 1, 0)), // 56
    FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(0, 0, 0)), // 57
    FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(2, 0, 0)), // 58 (pentagon)
    FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(0, 0, 1)), // 59
    FaceIJK::new(Face::new_unchecked(11), CoordIJK::new(0, 0, 1)), // 60
    FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(0, 1, 0)), // 61
    FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(0, 1, 0)), // 62
    FaceIJK::new(Face::new_unchecked(6), CoordIJK::new(2, 0, 0)), // 63 (pentagon)
    FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(0, 0, 0)), // 64
    FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(0, 0, 1)), // 65
    FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(1, 0, 0)), // 66
    FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(1, 0, 1)), // 67
    FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 1, 1)), // 68
    FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(1, 0, 1)), // 69
    FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(1, 0, 0)), // 70
    FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(0, 0, 0)), // 71
    FaceIJK::new(Face::new_unchecked(7), CoordIJK::new(2, 0, 0)), // 72 (pentagon)
    FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(0, 1, 0)), // 73
    FaceIJK::new(Face::new_unchecked(10), CoordIJK::new(0, 1, 0)), // 74
    FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(0, 0, 0)), // 75
    FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(1, 0, 0)), // 76
    FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 0, 1)), // 77
    FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 1, 1)), // 78
    FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 1, 0)), // 79
    FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 1, 0)), // 80
    FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(1, 1, 0)), // 81
    FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(1, 1, 0)), // 82
    FaceIJK::new(Face::new_unchecked(5), CoordIJK::new(2, 0, 0)), // 83 (pentagon)
    FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(1, 0, 0)), // 84
    FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(0, 0, 0)), // 85
    FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(1, 0, 1)), // 86
    FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(0, 0, 1)), // 87
    FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 0, 1)), // 88
    FaceIJK::new(Face::new_unchecked(12), CoordIJK::new(0, 0, 1)), // 89
    FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(0, 0, 0)), // 90
    FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 1, 1)), // 91
    FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 0, 1)), // 92
    FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(1, 0, 1)), // 93
    FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(1, 0, 0)), // 94
    FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(0, 0, 0)), // 95
    FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(0, 0, 0)), // 96
    FaceIJK::new(Face::new_unchecked(8), CoordIJK::new(2, 0, 0)), // 97 (pentagon)
    FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(0, 1, 0)), // 98
    FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(1, 0, 1)), // 99
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 1, 0)), // 100
    FaceIJK::new(Face::new_unchecked(14), CoordIJK::new(0, 1, 0)), // 101
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 1, 1)), // 102
    FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 1, 0)), // 103
    FaceIJK::new(Face::new_unchecked(13), CoordIJK::new(0, 0, 1)), // 104
    FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(0, 0, 0)), // 105
    FaceIJK::new(Face::new_unchecked(16), CoordIJK::new(1, 0, 0)), // 106
    FaceIJK::new(Face::new_unchecked(9), CoordIJK::new(2, 0, 0)), // 107 (pentagon)
    FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(1, 0, 1)), // 108
    FaceIJK::new(Face::new_unchecked(15), CoordIJK::new(1, 0, 0)), // 109
    FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 1, 1)), // 110
    FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 0, 1)), // 111
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 0, 1)), // 112
    FaceIJK::new(Face::new_unchecked(17), CoordIJK::new(1, 0, 0)), // 113
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(0, 0, 0)), // 114
    FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 1, 0)), // 115
    FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(1, 0, 1)), // 116
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(2, 0, 0)), // 117 (pentagon)
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(1, 0, 0)), // 118
    FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(0, 0, 0)), // 119
    FaceIJK::new(Face::new_unchecked(19), CoordIJK::new(1, 0, 1)), // 120
    FaceIJK::new(Face::new_unchecked(18), CoordIJK::new(1, 0, 0)), // 121
];

// For the ten (non-polar) pentagons, the two faces on which that pentagon
// uses a CW (rather than CCW) offset rotation.
#[rustfmt::skip]
static CW_OFFSETS: [(u8, Face, Face); 10] = [
    (14, Face::new_unchecked(2), Face::new_unchecked(6)), // base cell 14
    (24, Face::new_unchecked(1), Face::new_unchecked(5)), // base cell 24
    (38, Face::new_unchecked(3), Face::new_unchecked(7)), // base cell 38
    (49, Face::new_unchecked(0), Face::new_unchecked(9)), // base cell 49
    (58, Face::new_unchecked(4), Face::new_unchecked(8)), // base cell 58
    (63, Face::new_unchecked(11), Face::new_unchecked(15)), // base cell 63
    (72, Face::new_unchecked(12), Face::new_unchecked(16)), // base cell 72
    (83, Face::new_unchecked(10), Face::new_unchecked(19)), // base cell 83
    (97, Face::new_unchecked(13), Face::new_unchecked(17)), // base cell 97
    (107, Face::new_unchecked(14), Face::new_unchecked(18)), // base cell 107
];
