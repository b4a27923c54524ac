//! Slide transform tests - direction, path, and rotation behavior.

use slide_match::core::{rotate_along, slide_direction, Grid, SlideMove};
use slide_match::types::{CellPos, ColorId, SlideDirection, Tile};

fn grid_from(rows: &[&[ColorId]]) -> Grid {
    let size = rows.len();
    let mut grid = Grid::empty(size);
    for (row, colors) in rows.iter().enumerate() {
        assert_eq!(colors.len(), size);
        for (col, &color) in colors.iter().enumerate() {
            grid.set(row, col, Some(Tile::new(color)));
        }
    }
    grid
}

fn row_colors(grid: &Grid, row: usize) -> Vec<ColorId> {
    (0..grid.size())
        .filter_map(|col| grid.color(row, col))
        .collect()
}

fn col_colors(grid: &Grid, col: usize) -> Vec<ColorId> {
    (0..grid.size())
        .filter_map(|row| grid.color(row, col))
        .collect()
}

#[test]
fn test_dominant_axis_picks_the_larger_delta() {
    let from = CellPos::new(3, 3);
    assert_eq!(slide_direction(from, CellPos::new(0, 2)), SlideDirection::Up);
    assert_eq!(
        slide_direction(from, CellPos::new(6, 4)),
        SlideDirection::Down
    );
    assert_eq!(
        slide_direction(from, CellPos::new(4, 6)),
        SlideDirection::Right
    );
    assert_eq!(
        slide_direction(from, CellPos::new(2, 0)),
        SlideDirection::Left
    );
}

#[test]
fn test_exact_diagonal_resolves_horizontal() {
    let from = CellPos::new(2, 2);
    assert_eq!(
        slide_direction(from, CellPos::new(5, 5)),
        SlideDirection::Right
    );
    assert_eq!(
        slide_direction(from, CellPos::new(0, 0)),
        SlideDirection::Left
    );
}

#[test]
fn test_off_axis_pairs_have_no_move() {
    assert!(SlideMove::between(CellPos::new(0, 0), CellPos::new(2, 1)).is_none());
    assert!(SlideMove::between(CellPos::new(5, 5), CellPos::new(4, 4)).is_none());
    // Same cell is deselection, not a move.
    assert!(SlideMove::between(CellPos::new(1, 1), CellPos::new(1, 1)).is_none());
}

#[test]
fn test_path_is_inclusive_and_ordered() {
    let mv = SlideMove::between(CellPos::new(0, 1), CellPos::new(3, 1)).unwrap();
    assert_eq!(mv.direction, SlideDirection::Down);
    assert_eq!(
        mv.path,
        vec![
            CellPos::new(0, 1),
            CellPos::new(1, 1),
            CellPos::new(2, 1),
            CellPos::new(3, 1),
        ]
    );

    let mv = SlideMove::between(CellPos::new(2, 3), CellPos::new(2, 0)).unwrap();
    assert_eq!(mv.direction, SlideDirection::Left);
    assert_eq!(mv.path[0], CellPos::new(2, 3));
    assert_eq!(mv.path[3], CellPos::new(2, 0));
}

#[test]
fn test_rotation_wraps_last_color_to_front() {
    use ColorId::*;
    let mut grid = grid_from(&[
        &[Red, Green, Blue, Orange],
        &[Purple, Pink, Cyan, Lime],
        &[Orange, Blue, Green, Red],
        &[Lime, Cyan, Pink, Purple],
    ]);

    // Whole-row slide left to right: [c0, c1, c2, c3] -> [c3, c0, c1, c2].
    let mv = SlideMove::between(CellPos::new(0, 0), CellPos::new(0, 3)).unwrap();
    rotate_along(&mut grid, &mv.path);
    assert_eq!(row_colors(&grid, 0), vec![Orange, Red, Green, Blue]);

    // Other rows are untouched.
    assert_eq!(row_colors(&grid, 1), vec![Purple, Pink, Cyan, Lime]);
}

#[test]
fn test_rotation_respects_travel_order() {
    use ColorId::*;
    let mut grid = grid_from(&[
        &[Red, Green, Blue, Orange],
        &[Purple, Pink, Cyan, Lime],
        &[Orange, Blue, Green, Red],
        &[Lime, Cyan, Pink, Purple],
    ]);

    // Column 2 bottom-to-top: [Pink, Green, Cyan, Blue] -> [Blue, Pink, Green, Cyan],
    // which reads top-to-bottom as [Cyan, Green, Pink, Blue].
    let mv = SlideMove::between(CellPos::new(3, 2), CellPos::new(0, 2)).unwrap();
    rotate_along(&mut grid, &mv.path);
    assert_eq!(col_colors(&grid, 2), vec![Cyan, Green, Pink, Blue]);
}

#[test]
fn test_partial_path_leaves_the_rest_alone() {
    use ColorId::*;
    let mut grid = grid_from(&[
        &[Red, Green, Blue, Orange],
        &[Purple, Pink, Cyan, Lime],
        &[Orange, Blue, Green, Red],
        &[Lime, Cyan, Pink, Purple],
    ]);

    let mv = SlideMove::between(CellPos::new(1, 1), CellPos::new(1, 2)).unwrap();
    rotate_along(&mut grid, &mv.path);
    // Two-cell path is a swap.
    assert_eq!(row_colors(&grid, 1), vec![Purple, Cyan, Pink, Lime]);
}

#[test]
fn test_rotation_only_permutes_colors() {
    use ColorId::*;
    let mut grid = grid_from(&[
        &[Red, Green, Blue],
        &[Orange, Purple, Pink],
        &[Cyan, Lime, Red],
    ]);
    let mv = SlideMove::between(CellPos::new(0, 0), CellPos::new(0, 2)).unwrap();
    rotate_along(&mut grid, &mv.path);

    // Same multiset of colors, same tile count, no vacancies.
    assert!(!grid.has_empty_cells());
    let mut colors: Vec<u8> = grid
        .cells()
        .iter()
        .map(|c| c.unwrap().color.index())
        .collect();
    colors.sort();
    let mut expected: Vec<u8> = [Red, Green, Blue, Orange, Purple, Pink, Cyan, Lime, Red]
        .iter()
        .map(|c| c.index())
        .collect();
    expected.sort();
    assert_eq!(colors, expected);
}

#[test]
fn test_rotation_resets_matched_flags_on_path() {
    use ColorId::*;
    let mut grid = grid_from(&[
        &[Red, Green, Blue],
        &[Orange, Purple, Pink],
        &[Cyan, Lime, Red],
    ]);
    grid.set(
        0,
        2,
        Some(Tile {
            color: Blue,
            matched: true,
        }),
    );

    let mv = SlideMove::between(CellPos::new(0, 0), CellPos::new(0, 2)).unwrap();
    rotate_along(&mut grid, &mv.path);
    assert!(grid
        .cells()
        .iter()
        .all(|c| c.map_or(true, |tile| !tile.matched)));
}
