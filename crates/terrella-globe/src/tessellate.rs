//! Grid-to-triangle-list tessellation.

/// Emit the triangle-list indices for a (rings x sectors) vertex grid.
///
/// Each interior cell becomes two triangles, six indices, in a fixed order
/// (vertex index = `ring * sectors + sector`):
///
/// ```text
/// (r, s), (r+1, s+1), (r, s+1)
/// (r, s), (r+1, s),   (r+1, s+1)
/// ```
///
/// The winding is part of the renderer contract: the external pipeline culls
/// back faces, so reordering these silently discards the whole mesh. Output
/// length is exactly `(rings - 1) * (sectors - 1) * 6`.
///
/// Callers validate `rings >= 2` and `sectors >= 2` up front; a smaller grid
/// yields an empty index list rather than a panic.
pub fn tessellate_grid(rings: u32, sectors: u32) -> Vec<u32> {
    let cells = rings.saturating_sub(1) as usize * sectors.saturating_sub(1) as usize;
    let mut indices = Vec::with_capacity(cells * 6);

    for r in 0..rings.saturating_sub(1) {
        let row = r * sectors;
        let next_row = (r + 1) * sectors;
        for s in 0..sectors.saturating_sub(1) {
            indices.extend_from_slice(&[
                row + s,
                next_row + s + 1,
                row + s + 1,
                row + s,
                next_row + s,
                next_row + s + 1,
            ]);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_3x3_grid_matches_literal_order() {
        let indices = tessellate_grid(3, 3);
        #[rustfmt::skip]
        let expected: Vec<u32> = vec![
            0, 4, 1,  0, 3, 4,
            1, 5, 2,  1, 4, 5,
            3, 7, 4,  3, 6, 7,
            4, 8, 5,  4, 7, 8,
        ];
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_smallest_grid_is_one_quad() {
        assert_eq!(tessellate_grid(2, 2), vec![0, 3, 1, 0, 2, 3]);
    }

    #[test]
    fn test_index_count_formula() {
        for (rings, sectors) in [(2, 2), (2, 5), (4, 4), (3, 7), (16, 32)] {
            let indices = tessellate_grid(rings, sectors);
            let expected = (rings as usize - 1) * (sectors as usize - 1) * 6;
            assert_eq!(
                indices.len(),
                expected,
                "count mismatch for {rings}x{sectors}"
            );
        }
    }

    #[test]
    fn test_all_indices_in_vertex_range() {
        let indices = tessellate_grid(5, 8);
        let vertex_count = 5 * 8;
        for &i in &indices {
            assert!(i < vertex_count, "index {i} out of range");
        }
    }

    #[test]
    fn test_every_triangle_references_two_adjacent_rows() {
        let sectors = 6u32;
        let indices = tessellate_grid(4, sectors);
        for tri in indices.chunks(3) {
            let rows: Vec<u32> = tri.iter().map(|i| i / sectors).collect();
            let min = *rows.iter().min().unwrap();
            let max = *rows.iter().max().unwrap();
            assert_eq!(max, min + 1, "triangle {tri:?} does not span two rows");
        }
    }
}
