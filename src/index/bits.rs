//! Bit twiddling.

use super::IndexMode;
use crate::{Direction, Resolution};
use std::num::NonZeroU8;

/// Offset (in bits) of the mode in an H3 index.
const MODE_OFFSET: usize = 59;
const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;

/// Offset (in bits) of the cell edge in an H3 index.
const EDGE_OFFSET: usize = 56;
const EDGE_MASK: u64 = 0b111 << EDGE_OFFSET;

/// Offset (in bits) of the cell vertex in an H3 index.
const VERTEX_OFFSET: usize = 56;
const VERTEX_MASK: u64 = 0b111 << VERTEX_OFFSET;

/// The bit offset of the resolution in an H3 index.
const RESOLUTION_OFFSET: u64 = 52;
// Bitmask to select the resolution bits in an H3 index.
const RESOLUTION_MASK: u64 = 0b1111 << RESOLUTION_OFFSET;

/// Offset (in bits) of the base cell in an H3 index.
const BASE_CELL_OFFSET: u64 = 45;
// Bitmask to select the base cell bits in an H3 index.
const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;

// Bitmask to select the directions bits in an H3 index.
pub const DIRECTIONS_MASK: u64 = 0x0000_1fff_ffff_ffff;

/// Returns the H3 index mode  bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_mode(bits: u64) -> u8 {
    ((bits & MODE_MASK) >> MODE_OFFSET) as u8
}

/// Clears the H3 index mode bits.
#[must_use]
pub const fn clr_mode(bits: u64) -> u64 {
    bits & !MODE_MASK
}

/// Sets the H3 index mode bits.
#[must_use]
pub const fn set_mode(bits: u64, mode: IndexMode) -> u64 {
    clr_mode(bits) | ((mode as u64) << MODE_OFFSET)
}

/// Returns the H3 index cell edge bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_edge(bits: u64) -> u8 {
    ((bits & EDGE_MASK) >> EDGE_OFFSET) as u8
}

/// Clears the H3 index cell edge bits.
#[must_use]
pub const fn clr_edge(bits: u64) -> u64 {
    bits & !EDGE_MASK
}

/// Sets the H3 index cell edge bits.
#[must_use]
pub const fn set_edge(bits: u64, edge: u8) -> u64 {
    clr_edge(bits) | ((edge as u64) << EDGE_OFFSET)
}

/// Returns the H3 index cell vertex bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_vertex(bits: u64) -> u8 {
    ((bits & VERTEX_MASK) >> VERTEX_OFFSET) as u8
}

/// Clears the H3 index cell vertex bits.
#[must_use]
pub const fn clr_vertex(bits: u64) -> u64 {
    bits & !VERTEX_MASK
}

/// Sets the H3 index cell vertex bits.
#[must_use]
pub const fn set_vertex(bits: u64, vertex: u8) -> u64 {
    clr_vertex(bits) | ((vertex as u64) << VERTEX_OFFSET)
}

/// Returns the H3 index resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_resolution(bits: u64) -> Resolution {
    // SAFETY: the masking restricts the value on 4 bits (thus 0-15).
    Resolution::new_unchecked(
        ((bits & RESOLUTION_MASK) >> RESOLUTION_OFFSET) as u8,
    )
}

/// Clears the H3 index resolution bits.
#[must_use]
pub const fn clr_resolution(bits: u64) -> u64 {
    bits & !RESOLUTION_MASK
}

/// Sets the H3 index resolution bits.
#[must_use]
pub fn set_resolution(bits: u64, resolution: Resolution) -> u64 {
    clr_resolution(bits) | (u64::from(resolution) << RESOLUTION_OFFSET)
}

/// Returns the H3 index base cell bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_base_cell(bits: u64) -> u8 {
    ((bits & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as u8
}

/// Sets the H3 index base cell bits.
#[must_use]
pub fn set_base_cell(bits: u64, cell: u8) -> u64 {
    (bits & !BASE_CELL_MASK) | (u64::from(cell) << BASE_CELL_OFFSET)
}

/// Returns the H3 index direction bits at the given resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub fn get_direction(bits: u64, resolution: Resolution) -> u8 {
    ((bits & resolution.direction_mask()) >> resolution.direction_offset())
        as u8
}

/// Sets unused directions in an H3 index at the given resolution.
#[must_use]
pub fn set_unused(bits: u64, resolution: Resolution) -> u64 {
    let unused_end_offset = resolution.direction_offset();
    let unused_bits = (1 << unused_end_offset) - 1;

    bits | unused_bits
}

/// Sets the H3 index cell direction bits at the given resolution.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn set_direction(bits: u64, direction: u8, resolution: Resolution) -> u64 {
    let offset = resolution.direction_offset();
    let mask = 0b111 << offset;

    (bits & !mask) | (u64::from(direction) << offset)
}

/// Clears the H3 index cell direction bits at the given resolution (i.e. sets
/// them to the "unused" pattern `0b111`).
#[must_use]
pub fn clr_direction(bits: u64, resolution: Resolution) -> u64 {
    let offset = resolution.direction_offset();
    let mask = 0b111 << offset;

    bits | mask
}

/// Returns the axe of the first non-center direction of the index, if any.
///
/// Used to detect deleted K-axis subsequences on pentagons: the relevant
/// digit is always the first non-zero one.
#[must_use]
pub fn first_axe(bits: u64) -> Option<NonZeroU8> {
    let resolution = get_resolution(bits);

    for res in Resolution::range(Resolution::One, resolution) {
        if let Some(axe) = NonZeroU8::new(get_direction(bits, res)) {
            return Some(axe);
        }
    }

    None
}

/// Rotates the cell's directions `count` times, 60° at a time.
///
/// This only affects the per-resolution direction digits, the base cell part
/// of the index is left untouched (base cell rotation is handled separately,
/// through lookup tables).
#[must_use]
pub fn rotate60<const CCW: bool>(mut bits: u64, count: usize) -> u64 {
    for _ in 0..count {
        let resolution = get_resolution(bits);

        for res in Resolution::range(Resolution::One, resolution) {
            // SAFETY: `get_direction` always returns a valid direction value.
            let direction =
                Direction::new_unchecked(get_direction(bits, res))
                    .rotate60_once::<CCW>();

            bits = set_direction(bits, direction.into(), res);
        }
    }

    bits
}

/// Rotates a pentagon's directions 60°, skipping any resulting deleted K-axis
/// subsequence by applying an additional rotation.
#[must_use]
pub fn pentagon_rotate60<const CCW: bool>(bits: u64) -> u64 {
    let bits = rotate60::<CCW>(bits, 1);

    if first_axe(bits) == Direction::K.axe() {
        rotate60::<CCW>(bits, 1)
    } else {
        bits
    }
}

#[cfg(test)]
#[path = "./bits_tests.rs"]
mod tests;
