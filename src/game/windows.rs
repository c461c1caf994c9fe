//! Every run of four aligned cells on the board, precomputed as flat indices.

use super::board::{Board, Cell, COLS, ROWS};

pub const WINDOW_LEN: usize = 4;

pub const WINDOW_COUNT: usize = (ROWS - 3) * COLS // vertical
    + ROWS * (COLS - 3) // horizontal
    + 2 * (ROWS - 3) * (COLS - 3); // both diagonals

/// Flat cell indices of one window, ordered along its direction.
pub type Window = [usize; WINDOW_LEN];

/// Vertical windows first, then horizontal, rising diagonals, falling diagonals.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn window(row: usize, col: usize, d_row: usize, d_col: isize) -> Window {
    let mut w = [0; WINDOW_LEN];
    let mut i = 0;
    while i < WINDOW_LEN {
        let c = (col as isize + d_col * i as isize) as usize;
        w[i] = Board::index(row + d_row * i, c);
        i += 1;
    }
    w
}

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut out = [[0; WINDOW_LEN]; WINDOW_COUNT];
    let mut n = 0;

    let mut col = 0;
    while col < COLS {
        let mut row = 0;
        while row + WINDOW_LEN <= ROWS {
            out[n] = window(row, col, 1, 0);
            n += 1;
            row += 1;
        }
        col += 1;
    }

    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + WINDOW_LEN <= COLS {
            out[n] = window(row, col, 0, 1);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    let mut row = 0;
    while row + WINDOW_LEN <= ROWS {
        let mut col = 0;
        while col + WINDOW_LEN <= COLS {
            out[n] = window(row, col, 1, 1);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Falling diagonals start at the right and step down-left as rows climb.
    let mut row = 0;
    while row + WINDOW_LEN <= ROWS {
        let mut col = COLS - 1;
        while col + 1 >= WINDOW_LEN {
            out[n] = window(row, col, 1, -1);
            n += 1;
            if col == WINDOW_LEN - 1 {
                break;
            }
            col -= 1;
        }
        row += 1;
    }

    out
}

/// The four cells of a window as currently placed on `board`.
pub fn cells(board: &Board, window: &Window) -> [Cell; WINDOW_LEN] {
    window.map(|i| board.cell(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn coords(w: &Window) -> Vec<(usize, usize)> {
        w.iter().map(|&i| (i / COLS, i % COLS)).collect()
    }

    #[test]
    fn test_window_count_for_six_by_seven() {
        assert_eq!(WINDOW_COUNT, 21 + 24 + 12 + 12);
        assert_eq!(WINDOWS.len(), 69);
    }

    #[test]
    fn test_windows_are_distinct() {
        let unique: HashSet<Window> = WINDOWS.iter().copied().collect();
        assert_eq!(unique.len(), WINDOW_COUNT);
    }

    #[test]
    fn test_every_window_is_a_straight_run() {
        for w in WINDOWS.iter() {
            let c = coords(w);
            let dr = c[1].0 as isize - c[0].0 as isize;
            let dc = c[1].1 as isize - c[0].1 as isize;
            assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
            for pair in c.windows(2) {
                assert_eq!(pair[1].0 as isize - pair[0].0 as isize, dr);
                assert_eq!(pair[1].1 as isize - pair[0].1 as isize, dc);
            }
        }
    }

    #[test]
    fn test_order_is_vertical_horizontal_then_diagonals() {
        assert_eq!(coords(&WINDOWS[0]), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(coords(&WINDOWS[21]), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(coords(&WINDOWS[45]), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(coords(&WINDOWS[57]), vec![(0, 6), (1, 5), (2, 4), (3, 3)]);
        assert_eq!(coords(&WINDOWS[68]), vec![(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn test_corner_cell_sits_in_three_windows() {
        let corner = Board::index(0, 0);
        let n = WINDOWS.iter().filter(|w| w.contains(&corner)).count();
        assert_eq!(n, 3);
    }
}
