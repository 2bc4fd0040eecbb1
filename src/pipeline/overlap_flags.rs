use crate::query;
use crate::shape::Polygon;
use crate::utils::SortedPair;
use alloc::vec::Vec;

/// Tests every unordered pair of polygons and returns the indices of those overlapping.
///
/// Each pair `(m, n)` with `m < n` is tested once. The result is sorted by `m`, then `n`.
/// With the `parallel` feature enabled the pair tests run on the rayon thread pool; the
/// result is identical.
pub fn find_overlapping_pairs(polygons: &[Polygon]) -> Vec<SortedPair<usize>> {
    let len = polygons.len();

    #[cfg(not(feature = "parallel"))]
    {
        let mut pairs = Vec::new();

        for m in 0..len {
            for n in m + 1..len {
                if query::intersection_test(&polygons[m], &polygons[n]) {
                    pairs.push(SortedPair::new(m, n));
                }
            }
        }

        pairs
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..len)
            .into_par_iter()
            .flat_map_iter(|m| {
                (m + 1..len)
                    .filter(move |&n| query::intersection_test(&polygons[m], &polygons[n]))
                    .map(move |n| SortedPair::new(m, n))
            })
            .collect()
    }
}

/// Runs a collision pass over `polygons`, updating their overlap flags.
///
/// Every flag is cleared first, then set on both polygons of each overlapping pair, so a
/// polygon that no longer overlaps anything ends the pass with a `false` flag. The world-space
/// vertices are read as they are: any pose change made through [`Polygon`]'s methods has
/// already been applied to them.
///
/// Returns the overlapping pairs, see [`find_overlapping_pairs`].
pub fn update_overlap_flags(polygons: &mut [Polygon]) -> Vec<SortedPair<usize>> {
    for polygon in polygons.iter_mut() {
        polygon.set_overlapping(false);
    }

    let pairs = find_overlapping_pairs(polygons);

    for pair in &pairs {
        let (m, n) = pair.into_inner();
        polygons[m].set_overlapping(true);
        polygons[n].set_overlapping(true);
    }

    log::trace!(
        "Collision pass over {} polygons found {} overlapping pairs.",
        polygons.len(),
        pairs.len()
    );

    pairs
}
