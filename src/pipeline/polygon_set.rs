use crate::math::{Point, Real};
use crate::motion::PolygonInput;
use crate::pipeline::update_overlap_flags;
use crate::shape::{Polygon, Segment};
use crate::utils::SortedPair;
use alloc::vec::Vec;

/// The identifier of a polygon inserted into a [`PolygonSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolygonHandle(usize);

impl PolygonHandle {
    /// The insertion rank of this polygon in its set.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors raised when addressing the polygons of a [`PolygonSet`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonSetError {
    /// The handle does not identify a polygon of this set.
    #[error("no polygon with handle {0:?} in this set")]
    UnknownHandle(PolygonHandle),
}

/// A collection of polygons tested against each other once per frame.
///
/// Polygons are only ever added: their models are fixed and their poses are driven by
/// [`PolygonInput`]s. Each call to [`PolygonSet::update`] runs a complete collision pass, after
/// which every polygon's overlap flag and [`PolygonSet::overlapping_pairs`] reflect the current
/// poses.
#[derive(Clone, Debug, Default)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
    overlapping_pairs: Vec<SortedPair<PolygonHandle>>,
}

impl PolygonSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a polygon to this set.
    ///
    /// Its overlap flag is meaningless until the next call to [`PolygonSet::update`].
    pub fn insert(&mut self, polygon: Polygon) -> PolygonHandle {
        self.polygons.push(polygon);
        PolygonHandle(self.polygons.len() - 1)
    }

    /// The polygon identified by `handle`.
    pub fn get(&self, handle: PolygonHandle) -> Option<&Polygon> {
        self.polygons.get(handle.0)
    }

    /// A mutable reference to the polygon identified by `handle`.
    pub fn get_mut(&mut self, handle: PolygonHandle) -> Option<&mut Polygon> {
        self.polygons.get_mut(handle.0)
    }

    /// The number of polygons in this set.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// All the polygons of this set, in insertion order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Iterates through the polygons of this set and their handles.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (PolygonHandle, &Polygon)> {
        self.polygons
            .iter()
            .enumerate()
            .map(|(i, polygon)| (PolygonHandle(i), polygon))
    }

    /// Applies an input to the polygon identified by `handle`.
    pub fn apply_input(
        &mut self,
        handle: PolygonHandle,
        input: PolygonInput,
    ) -> Result<(), PolygonSetError> {
        let polygon = self
            .get_mut(handle)
            .ok_or(PolygonSetError::UnknownHandle(handle))?;
        input.apply_to(polygon);
        Ok(())
    }

    /// Runs a collision pass over all the polygons of this set.
    ///
    /// Returns the overlapping pairs found, which remain available through
    /// [`PolygonSet::overlapping_pairs`] until the next pass.
    pub fn update(&mut self) -> &[SortedPair<PolygonHandle>] {
        let pairs = update_overlap_flags(&mut self.polygons);
        self.overlapping_pairs.clear();
        self.overlapping_pairs.extend(pairs.into_iter().map(|pair| {
            let (m, n) = pair.into_inner();
            SortedPair::new(PolygonHandle(m), PolygonHandle(n))
        }));
        &self.overlapping_pairs
    }

    /// Applies a frame's worth of inputs, then runs a collision pass.
    ///
    /// Inputs are applied in order. If one of them targets an unknown polygon, the inputs before
    /// it remain applied, the collision pass is skipped and the error is returned.
    pub fn step(
        &mut self,
        inputs: impl IntoIterator<Item = (PolygonHandle, PolygonInput)>,
    ) -> Result<&[SortedPair<PolygonHandle>], PolygonSetError> {
        for (handle, input) in inputs {
            self.apply_input(handle, input)?;
        }

        Ok(self.update())
    }

    /// The overlapping pairs found by the last collision pass.
    pub fn overlapping_pairs(&self) -> &[SortedPair<PolygonHandle>] {
        &self.overlapping_pairs
    }

    /// What a renderer needs to draw each polygon of this set, in insertion order.
    pub fn render_data(&self) -> impl ExactSizeIterator<Item = PolygonRenderData<'_>> {
        self.iter()
            .map(|(handle, polygon)| PolygonRenderData { handle, polygon })
    }
}

/// A read-only view of a polygon, for drawing.
#[derive(Copy, Clone, Debug)]
pub struct PolygonRenderData<'a> {
    handle: PolygonHandle,
    polygon: &'a Polygon,
}

impl<'a> PolygonRenderData<'a> {
    /// The handle of the polygon.
    pub fn handle(&self) -> PolygonHandle {
        self.handle
    }

    /// The world-space vertices of the polygon.
    pub fn vertices(&self) -> &'a [Point<Real>] {
        self.polygon.world_vertices()
    }

    /// The world-space boundary of the polygon, closed.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment> + 'a {
        self.polygon.edges()
    }

    /// The segment showing which way the polygon is facing.
    pub fn heading(&self) -> Segment {
        self.polygon.heading()
    }

    /// Should the polygon be highlighted as overlapping another one?
    pub fn is_overlapping(&self) -> bool {
        self.polygon.is_overlapping()
    }
}
