use crate::error::Result;
use crate::geometry::{Grid, PageAttributes, Seeds};
use crate::permutation::build_sequence;
use publus_pack::Keys;

/// A rectangle copied from the scrambled raster into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The left edge in the scrambled raster.
    pub src_x: u32,
    /// The top edge in the scrambled raster.
    pub src_y: u32,
    /// The left edge in the output.
    pub dest_x: u32,
    /// The top edge in the output.
    pub dest_y: u32,
    /// The width of the rectangle.
    pub width: u32,
    /// The height of the rectangle.
    pub height: u32,
}

/// Compute the tile moves that unscramble a `width` by `height` page.
///
/// The moves cover every pixel of the raster exactly once on both the
/// source and the destination side.
pub fn plan_moves(
    width: u32,
    height: u32,
    page_id: &str,
    attributes: &PageAttributes,
    keys: &Keys,
) -> Result<Vec<Move>> {
    let grid = Grid::new(
        width,
        height,
        attributes.block_width,
        attributes.block_height,
    )?;
    let seeds = Seeds::derive(page_id, attributes, keys);
    let sequence = build_sequence(seeds.words(&grid));

    ldebug!(
        "{}x{} page as {}x{} tiles of {}x{}",
        width,
        height,
        grid.columns,
        grid.rows,
        grid.block_width,
        grid.block_height
    );

    Ok(decode_moves(&grid, &sequence))
}

fn decode_moves(grid: &Grid, sequence: &[usize]) -> Vec<Move> {
    let (columns, rows) = (grid.columns as usize, grid.rows as usize);
    let (bw, bh) = (grid.block_width, grid.block_height);
    let (lw, lh) = (grid.last_width, grid.last_height);

    // Full tiles, the corner, the bottom row, then the right column.
    let groups = [
        (columns * rows, bw, bh),
        (1, lw, lh),
        (columns, bw, lh),
        (rows, lw, bh),
    ];

    let (stride_x, stride_y) = (grid.stride_x(), grid.stride_y());
    let mut moves = Vec::new();
    let mut start = 0;

    for (count, width, height) in groups {
        let end = start + count * 2;

        if width > 0 && height > 0 {
            for pair in sequence[start..end].chunks_exact(2) {
                let (f, g) = (pair[0], pair[1]);

                moves.push(Move {
                    src_x: grid.offset_x(g / stride_y),
                    src_y: grid.offset_y(f / stride_x),
                    dest_x: grid.offset_x(f % stride_x),
                    dest_y: grid.offset_y(g % stride_y),
                    width,
                    height,
                });
            }
        }

        start = end;
    }

    ldebug!("planned {} tile moves", moves.len());

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Keys {
        let mut keys = Keys::default();

        for i in 0..32 {
            keys.k1[i] = (i * 7 + 3) as u8;
            keys.k2[i] = (i * 13 + 101) as u8;
            keys.k3[i] = (255 - i * 5) as u8;
        }

        keys
    }

    fn attributes(block: u32) -> PageAttributes {
        PageAttributes {
            number: 3,
            ns: 123_456_789,
            ps: 987_654_321,
            rs: 555,
            block_width: block,
            block_height: block,
            content_width: 0,
            content_height: 0,
        }
    }

    #[test]
    fn small_even_grid() {
        let moves = plan_moves(16, 16, "item/xhtml/p-003.xhtml", &attributes(4), &keys()).unwrap();

        let expected: Vec<(u32, u32, u32, u32)> = vec![
            (0, 8, 0, 0),
            (0, 12, 0, 4),
            (4, 12, 0, 8),
            (8, 0, 0, 12),
            (12, 12, 4, 0),
            (12, 0, 4, 4),
            (0, 0, 4, 8),
            (8, 8, 4, 12),
            (8, 12, 8, 0),
            (0, 4, 8, 4),
            (4, 0, 8, 8),
            (4, 8, 8, 12),
            (4, 4, 12, 0),
            (12, 8, 12, 4),
            (12, 4, 12, 8),
            (8, 4, 12, 12),
        ];

        let actual: Vec<_> = moves
            .iter()
            .map(|m| (m.src_x, m.src_y, m.dest_x, m.dest_y))
            .collect();

        assert_eq!(actual, expected);
        assert!(moves.iter().all(|m| m.width == 4 && m.height == 4));
    }

    #[test]
    fn group_sizes() {
        let grid = Grid::new(37, 35, 8, 8).unwrap();
        let seeds = Seeds::derive("x", &attributes(8), &keys());
        let moves = decode_moves(&grid, &build_sequence(seeds.words(&grid)));
        let sizes: Vec<_> = moves.iter().map(|m| (m.width, m.height)).collect();

        assert_eq!(moves.len(), 16 + 1 + 4 + 4);
        assert!(sizes[..16].iter().all(|s| *s == (8, 8)));
        assert_eq!(sizes[16], (5, 3));
        assert!(sizes[17..21].iter().all(|s| *s == (8, 3)));
        assert!(sizes[21..].iter().all(|s| *s == (5, 8)));
    }
}
