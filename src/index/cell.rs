use super::{
    iterator::{Children, Compact, GridPathCells},
    triangle::Triangle,
};
use crate::{
    coord::{FaceIJK, LocalIJ, LocalIJK},
    error::{CompactionError, LocalIjError, ResolutionMismatch},
    grid,
    index::{bits, Edge, IndexMode},
    resolution, BaseCell, Boundary, DirectedEdgeIndex, Direction, LatLng,
    Resolution, Vertex, VertexIndex, DIRECTION_BITSIZE, EARTH_RADIUS_KM,
    NUM_HEX_VERTS, NUM_PENT_VERTS,
};
use std::{cmp::Ordering, fmt, num::NonZeroU64, str::FromStr};

/// Lookup table for number of children for hexagonal cells.
// 7.pow(resolution_delta)
const HEXAGON_CHILDREN_COUNTS: [u64; 16] = [
    1,
    7,
    49,
    343,
    2401,
    16_807,
    117_649,
    823_543,
    5_764_801,
    40_353_607,
    282_475_249,
    1_977_326_743,
    13_841_287_201,
    96_889_010_407,
    678_223_072_849,
    4_747_561_509_943,
];

/// Lookup table for number of children for pentagonal cells.
// 1 + 5 * (7.pow(resolution delta) - 1) / 6
const PENTAGON_CHILDREN_COUNTS: [u64; 16] = [
    1,
    6,
    41,
    286,
    2001,
    14_006,
    98_041,
    686_286,
    4_804_001,
    33_628_006,
    235_396_041,
    1_647_772_286,
    11_534_406_001,
    80_740_842_006,
    565_185_894_041,
    3_956_301_258_286,
];

// -----------------------------------------------------------------------------

/// Helper iterator for [`CellIndex::grid_ring_fast`], handling the `k == 0`
/// case (simply the origin) and upfront failure (pentagon in the initial
/// walk to the ring) without forcing `RingUnsafe` to special-case either.
enum RingFast {
    Origin(Option<CellIndex>),
    Ring(grid::RingUnsafe),
    Failed(bool),
}

impl Iterator for RingFast {
    type Item = Option<CellIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Origin(slot) => slot.take().map(Some),
            Self::Ring(iter) => iter.next(),
            Self::Failed(done) => {
                if *done {
                    None
                } else {
                    *done = true;
                    Some(None)
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------

/// Represents a cell (hexagon or pentagon) in the H3 grid system at a
/// particular resolution.
///
/// The index is encoded on 64-bit with the following bit layout:
///
/// ```text
///  ┏━┳━━━┳━━━━┳━━━━┳━━━━━━━┳━━━┳━━━┳━┈┈┈┈┈┈┈┈━┳━━━┳━━━┓
///  ┃U┃ M ┃ U  ┃ R  ┃ B     ┃C₀ ┃C₁ ┃          ┃C₁₄┃C₁₅┃
///  ┗━┻━━━┻━━━━┻━━━━┻━━━━━━━┻━━━┻━━━┻━┈┈┈┈┈┈┈┈━┻━━━┻━━━┛
/// 64 63 59   56   52      45  42  39          6   3   0
/// ```
///
/// Where:
/// - `U` are unused reserved bit, always set to 0 (bit 63 and bits 56-58).
/// - `M` is the index mode, always set to 1, coded on 4 bits (59-62).
/// - `R` is the cell resolution, in [0; 15], coded on 4 bits (52-55).
/// - `B` is the base cell, in [0; 121], coded on 7 bits (45-51)
/// - `C` are cells, coded on 3 bits each, with either a value in [0; 6] or the
///   pattern `0b111` if unused.
///
/// Refrences:
/// - [H3 Index Representations](https://h3geo.org/docs/core-library/h3Indexing)
/// - [H3 Index Bit Layout](https://observablehq.com/@nrabinowitz/h3-index-bit-layout?collection=@nrabinowitz/h3)
/// - [H3 Index Inspector](https://observablehq.com/@nrabinowitz/h3-index-inspector?collection=@nrabinowitz/h3)
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex(NonZeroU64);

impl CellIndex {
    /// Returns the resolution of the index.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.resolution(), icohex::Resolution::Ten);
    /// # Ok::<(), icohex::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub const fn resolution(self) -> Resolution {
        bits::get_resolution(self.0.get())
    }

    /// Returns the base cell of the index.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.base_cell(), icohex::BaseCell::try_from(15)?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub const fn base_cell(self) -> BaseCell {
        let value = bits::get_base_cell(self.0.get());
        // SAFETY: `CellIndex` only contains valid base cell (invariant).
        BaseCell::new_unchecked(value)
    }

    /// Returns true if this index represents a pentagonal cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert!(!index.is_pentagon());
    /// # Ok::<(), icohex::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn is_pentagon(self) -> bool {
        let bits = self.0.get();
        let base = self.base_cell();

        let resolution = usize::from(bits::get_resolution(bits));
        let unused_count = usize::from(resolution::MAX) - resolution;
        let unused_bitsize = unused_count * DIRECTION_BITSIZE;
        let dirs_mask = (1 << (resolution * DIRECTION_BITSIZE)) - 1;
        let dirs = (bits >> unused_bitsize) & dirs_mask;

        // Pentagonal cells always have all directions but the base one set to
        // 0.
        base.is_pentagon() && dirs == 0
    }

    /// Returns the maximum number of icosahedron faces the index may intersect.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.max_face_count(), 2);
    /// # Ok::<(), icohex::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn max_face_count(self) -> usize {
        // A pentagon always intersects 5 faces.
        if self.is_pentagon() {
            5
        // An hexagon never intersects more than 2 (but may only intersect 1).
        } else {
            2
        }
    }

    /// Returns the cell at the given resolution in the index, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::{CellIndex, Direction, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.direction_at(Resolution::Five), Some(Direction::K));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn direction_at(self, resolution: Resolution) -> Option<Direction> {
        (resolution != Resolution::Zero && resolution <= self.resolution())
            .then(|| {
                let value = bits::get_direction(self.0.get(), resolution);
                Direction::new_unchecked(value)
            })
    }

    /// Returns the parent, at the specified resolution, of the cell.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(
    ///     index.parent(Resolution::Five),
    ///     CellIndex::try_from(0x851fb467fffffff).ok()
    /// );
    /// # Ok::<(), icohex::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn parent(self, resolution: Resolution) -> Option<Self> {
        (resolution <= self.resolution()).then(|| {
            let bits = bits::set_resolution(self.0.get(), resolution);
            Self::new_unchecked(bits::set_unused(bits, resolution))
        })
    }

    /// Returns the center child index at the specified resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(
    ///     index.center_child(Resolution::Fifteen),
    ///     CellIndex::try_from(0x8f1fb46622d8000).ok()
    /// );
    /// # Ok::<(), icohex::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn center_child(self, resolution: Resolution) -> Option<Self> {
        (resolution >= self.resolution()).then(|| {
            let start = self.resolution().direction_offset();
            let stop = resolution.direction_offset();
            let mask = (1 << (start - stop)) - 1;

            let bits = bits::set_resolution(self.0.get(), resolution);
            Self::new_unchecked(bits & !(mask << stop))
        })
    }

    /// Returns the exact number of children for a cell at a given resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.children_count(Resolution::Fifteen), 16_807);
    /// # Ok::<(), icohex::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    // In this case, `mut-let-if` is faster than the idiomatic `let-if-else`.
    // Actually 12.5% faster for hexagons and 3.5% slower for pentagons.
    // Given that hexagons are way more common than pentagons, worth it.
    #[allow(clippy::useless_let_if_seq)]
    pub fn children_count(self, resolution: Resolution) -> u64 {
        let resolution = usize::from(resolution);
        let curr_resolution = usize::from(bits::get_resolution(self.0.get()));
        if curr_resolution > resolution {
            return 0;
        }
        if curr_resolution == resolution {
            return 1;
        }

        let n = resolution - curr_resolution;
        let mut res = HEXAGON_CHILDREN_COUNTS[n];
        if self.is_pentagon() {
            res = PENTAGON_CHILDREN_COUNTS[n];
        }
        res
    }

    /// Returns all the base cell indexes.
    ///
    /// # Example
    ///
    /// ```
    /// let cells = icohex::CellIndex::base_cells().collect::<Vec<_>>();
    /// ```
    pub fn base_cells() -> impl Iterator<Item = Self> {
        // Template for a resolution 0 index
        // mode = CELL, resolution = 0, all children unset.
        const TEMPLATE: u64 = 0x0800_1fff_ffff_ffff;

        (0..BaseCell::count()).map(|base_cell| {
            Self::new_unchecked(bits::set_base_cell(TEMPLATE, base_cell))
        })
    }

    /// Returns the children of this cell, at the given resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let children = index.children(Resolution::Twelve).collect::<Vec<_>>();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn children(
        self,
        resolution: Resolution,
    ) -> impl Iterator<Item = Self> + ExactSizeIterator {
        Children::new(self, resolution)
    }

    /// Returns the center coordinates of the cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let ll = index.to_latlng();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn to_latlng(self) -> LatLng {
        FaceIJK::from(self).to_latlng(self.resolution())
    }

    /// Returns the boundary, in spherical coordinates, of the cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let boundary = index.boundary();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn boundary(self) -> Boundary {
        let fijk = FaceIJK::from(self);
        let resolution = self.resolution();
        let start = Vertex::new_unchecked(0);

        if self.is_pentagon() {
            fijk.pentagon_boundary(resolution, start, NUM_PENT_VERTS)
        } else {
            fijk.hexagon_boundary(resolution, start, NUM_HEX_VERTS)
        }
    }

    /// Computes the exact area of this cell, in radians².
    #[must_use]
    pub fn area_rads2(self) -> f64 {
        let center = self.to_latlng();
        let boundary = self.boundary();
        let count = boundary.len();

        (0..count)
            .map(|i| {
                Triangle::new(center, boundary[i], boundary[(i + 1) % count])
                    .area()
            })
            .sum()
    }

    /// Computes the exact area of this cell, in km².
    #[must_use]
    pub fn area_km2(self) -> f64 {
        self.area_rads2() * EARTH_RADIUS_KM * EARTH_RADIUS_KM
    }

    /// Computes the exact area of this cell, in m².
    #[must_use]
    pub fn area_m2(self) -> f64 {
        self.area_km2() * 1_000_000.
    }

    /// Returns the number of CCW 60° rotations to apply to this cell's
    /// canonical vertex/direction numbering.
    ///
    /// Always 0 for hexagons: the bit-encoding already normalizes hexagon
    /// cells to a single canonical orientation (see [`Self::try_from`]).
    /// Pentagons whose home base cell sits on a "CW offset" icosahedron face
    /// need one extra step to compensate for the mirrored coordinate space.
    pub(crate) fn vertex_rotations(self) -> u8 {
        if !self.is_pentagon() {
            return 0;
        }
        let fijk = FaceIJK::from(self);
        u8::from(self.base_cell().is_cw_offset(fijk.face))
    }

    /// Returns the index of the vertex, if any, of this cell.
    ///
    /// # Example
    ///
    /// ```
    /// use icohex::{CellIndex, Vertex};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let vertex = index.vertex(Vertex::try_from(2)?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn vertex(self, vertex: Vertex) -> Option<VertexIndex> {
        let count = if self.is_pentagon() {
            NUM_PENT_VERTS
        } else {
            NUM_HEX_VERTS
        };
        (u8::from(vertex) < count).then(|| {
            let bits = bits::set_mode(self.into(), IndexMode::Vertex);
            VertexIndex::new_unchecked(bits::set_vertex(bits, vertex.into()))
        })
    }

    /// Returns the topological vertexes of this cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let vertexes = index.vertexes().collect::<Vec<_>>();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn vertexes(self) -> impl Iterator<Item = VertexIndex> {
        let count = if self.is_pentagon() {
            NUM_PENT_VERTS
        } else {
            NUM_HEX_VERTS
        };
        (0..count).map(move |v| {
            self.vertex(Vertex::new_unchecked(v))
                .expect("valid cell vertex")
        })
    }

    /// Returns the directed edges originating from this cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = icohex::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// let edges = index.edges().collect::<Vec<_>>();
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn edges(self) -> impl Iterator<Item = DirectedEdgeIndex> {
        let min_edge = 1 + u8::from(self.is_pentagon());
        let bits = bits::set_mode(self.into(), IndexMode::DirectedEdge);

        (min_edge..=6).map(move |edge| {
            DirectedEdgeIndex::new_unchecked(bits::set_edge(bits, edge))
        })
    }

    /// Returns true if this cell is a neighbor of the given cell.
    ///
    /// # Errors
    ///
    /// [`ResolutionMismatch`] if the two cells don't have the same
    /// resolution.
    pub fn is_neighbor_with(
        self,
        other: Self,
    ) -> Result<bool, ResolutionMismatch> {
        if self.resolution() != other.resolution() {
            return Err(ResolutionMismatch);
        }
        if self == other {
            return Ok(false);
        }
        Ok(grid::direction_for_neighbor(self, other).is_some())
    }

    /// Returns all the cells within `k` grid distance of this cell.
    ///
    /// In contrast to [`Self::grid_disk_safe`], this is collected eagerly
    /// into the given container type.
    pub fn grid_disk<T: FromIterator<Self>>(self, k: u32) -> T {
        self.grid_disk_safe(k).collect()
    }

    /// Returns an iterator over all the cells within `k` grid distance of
    /// this cell.
    ///
    /// Handles pentagonal distortion, at the cost of being slower than
    /// [`Self::grid_disk_fast`].
    pub fn grid_disk_safe(self, k: u32) -> impl Iterator<Item = Self> {
        self.grid_disk_distances_safe(k).map(|(cell, _)| cell)
    }

    /// Returns an iterator over all the cells within `k` grid distance of
    /// this cell, paired with their distance.
    pub fn grid_disk_distances_safe(
        self,
        k: u32,
    ) -> impl Iterator<Item = (Self, u32)> {
        grid::DiskDistancesSafe::new(self, k)
    }

    /// Returns an iterator over all the cells within `k` grid distance of
    /// this cell.
    ///
    /// Faster than [`Self::grid_disk_safe`], but yields `None` items (and
    /// keeps yielding `None` afterward) as soon as pentagonal distortion is
    /// encountered.
    pub fn grid_disk_fast(
        self,
        k: u32,
    ) -> impl Iterator<Item = Option<Self>> {
        self.grid_disk_distances_fast(k)
            .map(|item| item.map(|(cell, _)| cell))
    }

    /// Same as [`Self::grid_disk_fast`], but yields cells paired with their
    /// distance.
    pub fn grid_disk_distances_fast(
        self,
        k: u32,
    ) -> impl Iterator<Item = Option<(Self, u32)>> {
        grid::DiskDistancesUnsafe::new(self, k)
    }

    /// Returns an iterator over all the cells within `k` grid distance of the
    /// given cells, as a single deduplicated fast disk (pentagon-intolerant).
    pub fn grid_disks_fast(
        origins: impl IntoIterator<Item = Self>,
        k: u32,
    ) -> impl Iterator<Item = Option<Self>> {
        origins
            .into_iter()
            .flat_map(move |origin| origin.grid_disk_fast(k))
    }

    /// Returns the cells at exactly grid distance `k` of this cell.
    ///
    /// Returns `None` (and keeps returning it) if pentagonal distortion was
    /// encountered while walking the ring.
    pub fn grid_ring_fast(
        self,
        k: u32,
    ) -> impl Iterator<Item = Option<Self>> {
        if k == 0 {
            RingFast::Origin(Some(self))
        } else {
            grid::RingUnsafe::new(self, k)
                .map_or(RingFast::Failed(false), RingFast::Ring)
        }
    }

    /// Returns the grid distance between this cell and another.
    ///
    /// Returns `None` if the cells don't share a common base cell (the
    /// distance can't be computed through local coordinates in that case) or
    /// if pentagonal distortion prevents it.
    #[must_use]
    pub fn grid_distance(self, other: Self) -> Option<i32> {
        let src = self.to_local_ijk(self).ok()?;
        let dst = other.to_local_ijk(self).ok()?;
        Some(src.coord().distance(dst.coord()))
    }

    /// Returns the coordinates of this cell in the local `IJK` system
    /// anchored by `anchor`.
    ///
    /// # Errors
    ///
    /// [`LocalIjError`] if `anchor` doesn't share this cell's resolution, or
    /// doesn't share its base cell.
    pub fn to_local_ijk(self, anchor: Self) -> Result<LocalIJK, LocalIjError> {
        crate::coord::cell_to_local_ijk(anchor, self)
    }

    /// Returns the coordinates of this cell in the local `IJ` system
    /// anchored by `anchor`.
    ///
    /// # Errors
    ///
    /// [`LocalIjError`] if `anchor` doesn't share this cell's resolution, or
    /// doesn't share its base cell.
    pub fn to_local_ij(self, anchor: Self) -> Result<LocalIJ, LocalIjError> {
        let ijk = self.to_local_ijk(anchor)?;
        Ok(LocalIJ::new(anchor, ijk.coord().into()))
    }

    /// Returns a line of cells between this cell and `end` (inclusive).
    ///
    /// # Errors
    ///
    /// [`LocalIjError`] if the path can't be computed (e.g. crossing
    /// pentagonal distortion, or base cells too far apart).
    pub fn grid_path_cells(
        self,
        end: Self,
    ) -> Result<impl Iterator<Item = Result<Self, LocalIjError>>, LocalIjError>
    {
        GridPathCells::new(self, end)
    }

    /// Returns the number of cells in the line between this cell and `end`.
    ///
    /// # Errors
    ///
    /// [`LocalIjError`] if the path can't be computed.
    pub fn grid_path_cells_size(self, end: Self) -> Result<i64, LocalIjError> {
        let src = self.to_local_ijk(self)?;
        let dst = end.to_local_ijk(self)?;
        Ok(i64::from(src.coord().distance(dst.coord())) + 1)
    }

    /// Compacts a set of cells at the same resolution into the smallest
    /// equivalent set (replacing complete groups of siblings by their
    /// parent, recursively).
    ///
    /// # Errors
    ///
    /// [`CompactionError`] if the input contains cells with heterogeneous
    /// resolutions or duplicates.
    pub fn compact(
        cells: impl IntoIterator<Item = Self>,
    ) -> Result<impl Iterator<Item = Self>, CompactionError> {
        Compact::new(cells)
    }

    /// Uncompacts a set of cells, returning every descendant at the given
    /// resolution.
    pub fn uncompact(
        cells: impl IntoIterator<Item = Self>,
        resolution: Resolution,
    ) -> impl Iterator<Item = Self> {
        cells.into_iter().flat_map(move |cell| {
            let children_resolution = resolution.max(cell.resolution());
            cell.children(children_resolution)
        })
    }

    pub(crate) fn new_unchecked(value: u64) -> Self {
        debug_assert!(Self::try_from(value).is_ok(), "invalid cell index");
        Self(NonZeroU64::new(value).expect("valid cell index"))
    }
}

impl Ord for CellIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare while ignoring the resolution to get the right ordering.
        // This is useful when building hierarchical tree of H3 cells.
        //
        // To understand why, let's take an example with these two cells:
        // - Cell A: 0x89194e69d4fffff (resolution  9, 12-5-1-6-3-2-3-5-2-3)
        // - Cell B: 0x8a194e699ab7fff (resolution 10, 12-5-1-6-3-2-3-1-5-2-6)
        //
        // If we don't ignore the resolution, cell A comes BEFORE cell B
        // (because the resolution is lower AND resolution comes before the
        // cells in the bit layout, thus has more weight).
        //
        // By ignoring the resolution bits we get the right ordering.
        (bits::clr_resolution(self.0.get()))
            .cmp(&bits::clr_resolution(other.0.get()))
    }
}

impl PartialOrd for CellIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<CellIndex> for u64 {
    fn from(value: CellIndex) -> Self {
        value.0.get()
    }
}

impl TryFrom<u64> for CellIndex {
    type Error = InvalidCellIndex;

    // Basically a simpler/faster version of `h3IsValid`.
    //
    // Simpler because here we focus only on the trailing 56-bit part.
    // Faster because no loops, just plain ol' bitwise operationss :)
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if (value >> 56) & 0b1000_0111 != 0 {
            return Err(Self::Error::new(Some(value), "tainted reserved bits"));
        }
        if bits::get_mode(value) != u8::from(IndexMode::Cell) {
            return Err(Self::Error::new(Some(value), "invalid index mode"));
        }

        let base = BaseCell::try_from(bits::get_base_cell(value))
            .map_err(|_| Self::Error::new(Some(value), "invalid base cell"))?;

        // Resolution is always valid: coded on 4 bits, valid range is [0; 15].
        let resolution = usize::from(bits::get_resolution(value));

        // Check that we have a tail of unused cells  after `resolution` cells.
        //
        // We expect every bit to be 1 in the tail (because unused cells are
        // represented by `0b111`), i.e. every bit set to 0 after a NOT.
        let unused_count = usize::from(resolution::MAX) - resolution;
        let unused_bitsize = unused_count * DIRECTION_BITSIZE;
        let unused_mask = (1 << unused_bitsize) - 1;
        if (!value) & unused_mask != 0 {
            return Err(Self::Error::new(
                Some(value),
                "invalid unused direction pattern",
            ));
        }

        // Check that we have `resolution` valid cells (no unused ones).
        let dirs_mask = (1 << (resolution * DIRECTION_BITSIZE)) - 1;
        let dirs = (value >> unused_bitsize) & dirs_mask;
        if has_unused_direction(dirs) {
            return Err(Self::Error::new(
                Some(value),
                "unexpected unused direction",
            ));
        }

        // Check for pentagons with deleted subsequence.
        if base.is_pentagon() && resolution != 0 {
            // Move directions to the front, so that we can count leading
            // zeroes.
            let offset = 64 - (resolution * DIRECTION_BITSIZE);

            // Find the position of the first bit set, if it's a multiple of 3
            // that means we have a K axe as the first non-center direction,
            // which is forbidden.
            if ((dirs << offset).leading_zeros() + 1) % 3 == 0 {
                return Err(Self::Error::new(
                    Some(value),
                    "pentagonal cell index with a deleted subsequence",
                ));
            }
        }

        // XXX: 0 is rejected by the mode check (mode cannot be 0).
        Ok(Self(NonZeroU64::new(value).expect("non-zero cell index")))
    }
}

impl FromStr for CellIndex {
    type Err = InvalidCellIndex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16)
            .map_err(|_| Self::Err {
                value: None,
                reason: "invalid 64-bit hex number",
            })
            .and_then(Self::try_from)
    }
}

impl fmt::Debug for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:015o} ({})",
            self.base_cell(),
            u64::from(*self) & bits::DIRECTIONS_MASK,
            self
        )
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl fmt::Binary for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Octal for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for CellIndex {
    fn arbitrary(
        data: &mut arbitrary::Unstructured<'a>,
    ) -> arbitrary::Result<Self> {
        u64::arbitrary(data).and_then(|byte| {
            Self::try_from(byte).map_err(|_| arbitrary::Error::IncorrectFormat)
        })
    }
}

// -----------------------------------------------------------------------------

/// Checks if there is at least one unused direction in the given directions.
#[inline(always)]
#[rustfmt::skip] // Keep constants aligned for readability.
#[allow(clippy::unusual_byte_groupings)] // Grouping by 3-bit is better here.
const fn has_unused_direction(dirs: u64) -> bool {
    // Unused directions are represented by `0b111`, so we actually want to
    // check the absence of this pattern.
    // This is akin to splitting the data into chunks of 3 bits and looking for
    // the presence of a three-1 triplet.
    //
    // Now, looking for `0b111` is clearly not a common task, but we can twist
    // the problem a bit to find back our footing ;)
    // If we apply a NOT on our data we're now looking for `0b000` which is
    // awfully similar to the research of a nul byte, a well-known task in
    // C-land thanks to null-terminated strings.
    //
    // STOP, Archeology time!
    //
    // Let's dive into the annals of the Old Gods, a.k.a. comp.lang.c, and
    // extract this golden nugget: Alan Mycroft's null-byte detection algorithm,
    // posted in 1987
    // See: https://groups.google.com/forum/#!original/comp.lang.c/2HtQXvg7iKc/xOJeipH6KLMJ
    //
    // The spell is: (value - lo_magic) & (!value & hi_magic)
    //
    // Here's a quick rundown on how it works:
    //
    // - The first part, `value - lo_magic`, will make sure that the MSB (most
    //   significant bit) of each chunk is set if:
    //   * the chunk is null (`0b000 - 0b001` wraps around to `0b111`).
    //   * the MSB + another bit are already set, e.g. `0b101`. That's because
    //     the lowest bit absorb the subtraction and the highest one is left
    //     untouched (e.g. `0b101 - 0b001 = 0b100`)
    // - The second part, `!value & hi_magic`, will set the MSB of each chunk
    //   only if the MSB was unset in the original value.
    //
    // By ANDing both parts, we get a non-zero value if there was at least one
    // null chunk: the first part selects null chunks and the ones with the MSB
    // already set whereas the second part filter out the latter, thus leaving
    // only null chunk with a bit set.
    //
    // A little example:
    //
    //     dirs   = 001 010 111 011 110 110 000
    //     !dirs  = 110 101 000 100 001 001 111 // negate to convert 111 to 000.
    //     part 1 = 101 011 111 011 000 000 110
    //     part 2 = 000 000 100 000 100 100 000
    //     result = 000 000 100 000 000 000 000
    //
    // By tweaking this a bit to works on 64-bit AND on triplet instead of
    // bytes, the magic occurs :)
    const LO_MAGIC: u64 = 0b001_001_001_001_001_001_001_001_001_001_001_001_001_001_001;
    const HI_MAGIC: u64 = 0b100_100_100_100_100_100_100_100_100_100_100_100_100_100_100;

    ((!dirs - LO_MAGIC) & (dirs & HI_MAGIC)) != 0
}

#[cfg(test)]
#[path = "./cell_tests.rs"]
mod tests;
