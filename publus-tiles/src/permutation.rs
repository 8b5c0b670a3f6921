//! Building the packed tile coordinate sequence from four seed words.
//!
//! The grid of full tiles is shuffled as a whole. The partial column and
//! partial row are then threaded through it: every row gets a gap position
//! where the partial column crosses it, and every column gets one for the
//! partial row. This happens once for the scrambled layout and once for the
//! original one, so that both sides stay consistent with each other.

use crate::shuffle::ShuffleEngine;

/// A 64-bit seed made of two 32-bit halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedWord {
    /// The upper half.
    pub high: u32,
    /// The lower half.
    pub low: u32,
}

impl SeedWord {
    /// Create a new seed word.
    pub fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    /// Bits 16 to 47 of the word.
    fn middle(self) -> u32 {
        (self.high << 16) | (self.low >> 16)
    }
}

/// The number of packed values a `columns` by `rows` grid produces.
pub fn sequence_len(columns: usize, rows: usize) -> usize {
    2 * (columns * rows + 1 + columns + rows)
}

/// Build the packed coordinate sequence.
///
/// The second and third words carry the column and row count of full tiles in
/// their upper halves.
pub fn build_sequence(words: [SeedWord; 4]) -> Vec<usize> {
    let [w1, w2, w3, w4] = words;
    let mut engine = ShuffleEngine::new();

    engine.select((w2.middle() ^ w3.middle() ^ w4.middle()) >> 16);
    engine.reseed(w2.low ^ w3.low ^ w4.low);

    let mask = engine.next_below(1 << 16) | (engine.next_below(1 << 16) << 16);
    let bias = engine.next_below(512);

    let columns = (w2.middle() >> 16) as usize;
    let rows = (w3.middle() >> 16) as usize;

    engine.select(((w1.middle() ^ w4.middle()) >> 16) ^ bias);
    engine.reseed(w1.low ^ w2.low ^ mask);
    let tiles = baseline(&mut engine, columns * rows);

    engine.reseed(w1.low ^ w3.low ^ mask);
    let gap_x = gap(&mut engine, columns);
    let gap_y = gap(&mut engine, rows);
    let slot_x = slot(&mut engine, gap_x, columns);
    let slot_y = slot(&mut engine, gap_y, rows);

    engine.reseed(w1.low ^ w4.low ^ mask);
    let mut row_gaps = vec![0; rows];
    let mut col_gaps = vec![0; columns];
    interleave(&mut engine, &mut row_gaps, &mut col_gaps, gap_x, gap_y);

    let col_order = baseline(&mut engine, columns);
    let row_order = baseline(&mut engine, rows);

    let mut row_slots = vec![0; rows];
    let mut col_slots = vec![0; columns];
    interleave(&mut engine, &mut row_slots, &mut col_slots, slot_x, slot_y);

    Layout {
        columns,
        rows,
        tiles,
        gap_x,
        gap_y,
        slot_x,
        slot_y,
        row_gaps,
        col_gaps,
        row_slots,
        col_slots,
        col_order,
        row_order,
    }
    .assemble()
}

struct Layout {
    columns: usize,
    rows: usize,
    tiles: Vec<usize>,
    gap_x: usize,
    gap_y: usize,
    slot_x: usize,
    slot_y: usize,
    row_gaps: Vec<usize>,
    col_gaps: Vec<usize>,
    row_slots: Vec<usize>,
    col_slots: Vec<usize>,
    col_order: Vec<usize>,
    row_order: Vec<usize>,
}

impl Layout {
    fn assemble(&self) -> Vec<usize> {
        let (span_x, span_y) = (self.columns + 1, self.rows + 1);
        let (stride_x, stride_y) = (span_x * 2, span_y * 2);
        let split = |v: usize, bound: usize, span: usize| if v < bound { v } else { v + span };

        let mut out = Vec::with_capacity(sequence_len(self.columns, self.rows));

        for a in 0..self.columns {
            for b in 0..self.rows {
                let tile = self.tiles[a + b * self.columns];
                let (x, y) = (tile % self.columns, tile / self.columns);

                let r = split(a, self.row_gaps[b], span_x);
                let s = split(b, self.col_gaps[a], span_y);
                let t = split(x, self.row_slots[y], span_x);
                let u = split(y, self.col_slots[x], span_y);

                out.push(u * stride_x + r);
                out.push(t * stride_y + s);
            }
        }

        out.push(self.slot_y * stride_x + self.gap_x);
        out.push(self.slot_x * stride_y + self.gap_y);

        for (a, &x) in self.col_order.iter().enumerate() {
            out.push(self.col_slots[x] * stride_x + split(a, self.gap_x, span_x));
            out.push(split(x, self.slot_x, span_x) * stride_y + self.col_gaps[a]);
        }

        for (b, &y) in self.row_order.iter().enumerate() {
            out.push(split(y, self.slot_y, span_y) * stride_x + self.row_gaps[b]);
            out.push(self.row_slots[y] * stride_y + split(b, self.gap_y, span_y));
        }

        out
    }
}

fn below(engine: &mut ShuffleEngine, n: usize) -> usize {
    engine.next_below(n as u32) as usize
}

/// An inside-out Fisher-Yates shuffle of `0..n`.
fn baseline(engine: &mut ShuffleEngine, n: usize) -> Vec<usize> {
    let mut out = vec![0; n];

    for i in 0..n {
        let r = below(engine, i + 1);
        out[i] = out[r];
        out[r] = i;
    }

    out
}

fn gap(engine: &mut ShuffleEngine, n: usize) -> usize {
    if n < 4 {
        below(engine, n + 1)
    } else {
        below(engine, n - 1) + 1
    }
}

fn slot(engine: &mut ShuffleEngine, gap: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }

    let v = below(engine, n);

    if v < gap { v } else { v + 1 }
}

/// Thread a partial column through the rows and a partial row through the
/// columns.
///
/// `rows[i]` receives the column index at which the partial column crosses
/// row `i`, and `cols[j]` the row index at which the partial row crosses
/// column `j`. `col_front` columns and `row_front` rows are placed before the
/// crossing; the rest are placed after it.
fn interleave(
    engine: &mut ShuffleEngine,
    rows: &mut [usize],
    cols: &mut [usize],
    mut col_front: usize,
    mut row_front: usize,
) {
    let mut open_cols = cols.len();
    let mut open_rows = rows.len();
    let mut col = 0;
    let mut row = 0;

    while open_cols + open_rows > 0 {
        let pick = below(engine, open_cols + open_rows);

        if pick < open_cols {
            if pick < col_front {
                let (lo, hi) = span(rows, row, row + open_rows, |b| col < b);
                cols[col] = below(engine, hi - lo) + lo;
                col += 1;
                col_front -= 1;
            } else {
                let end = col + open_cols;
                let (lo, hi) = span(rows, row, row + open_rows, |b| end > b);
                cols[end - 1] = below(engine, hi - lo) + lo;
            }

            open_cols -= 1;
        } else {
            if pick - open_cols < row_front {
                let (lo, hi) = span(cols, col, col + open_cols, |b| row < b);
                rows[row] = below(engine, hi - lo) + lo;
                row += 1;
                row_front -= 1;
            } else {
                let end = row + open_rows;
                let (lo, hi) = span(cols, col, col + open_cols, |b| end > b);
                rows[end - 1] = below(engine, hi - lo) + lo;
            }

            open_rows -= 1;
        }
    }
}

// Widen `lo..hi` over the neighbouring entries of `table` that satisfy `inside`.
fn span(
    table: &[usize],
    mut lo: usize,
    mut hi: usize,
    inside: impl Fn(usize) -> bool,
) -> (usize, usize) {
    while lo > 0 && inside(table[lo - 1]) {
        lo -= 1;
    }

    while hi < table.len() && inside(table[hi]) {
        hi += 1;
    }

    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_permutation() {
        let mut engine = ShuffleEngine::new();

        for n in [0, 1, 2, 7, 64] {
            let mut values = baseline(&mut engine, n);
            values.sort_unstable();
            assert_eq!(values, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn gap_and_slot_ranges() {
        let mut engine = ShuffleEngine::new();

        for n in 0..10 {
            for _ in 0..20 {
                let g = gap(&mut engine, n);
                let s = slot(&mut engine, g, n);

                if n < 4 {
                    assert!(g <= n);
                } else {
                    assert!((1..n).contains(&g));
                }

                if n == 0 {
                    assert_eq!(s, 0);
                } else {
                    assert!(s <= n && s != g);
                }
            }
        }
    }

    #[test]
    fn interleave_stays_in_bounds() {
        let mut engine = ShuffleEngine::new();
        let mut rows = vec![0; 5];
        let mut cols = vec![0; 3];
        interleave(&mut engine, &mut rows, &mut cols, 1, 2);

        assert!(rows.iter().all(|c| *c <= 3));
        assert!(cols.iter().all(|r| *r <= 5));
    }

    #[test]
    fn sequence_length() {
        for (columns, rows) in [(0, 0), (1, 0), (4, 4), (4, 3), (0, 5)] {
            let words = [
                SeedWord::new(7, 0x0102_0304),
                SeedWord::new(columns, 11),
                SeedWord::new(rows, 13),
                SeedWord::new(100, 17),
            ];

            assert_eq!(
                build_sequence(words).len(),
                sequence_len(columns as usize, rows as usize)
            );
        }
    }

    #[test]
    fn middle_bits() {
        assert_eq!(SeedWord::new(0x1234, 0xABCD_0000).middle(), 0x1234_ABCD);
    }
}
