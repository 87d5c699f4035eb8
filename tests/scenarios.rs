use sparsegrid::{parse_script, render, Cell, SparseGrid};

/// Parse `script` and return everything it prints on a fresh grid.
fn run(script: &str) -> String {
    render(&parse_script(script).unwrap().commands).unwrap()
}

#[test]
fn houses_print_front() {
    let out = run("4\nHouse 5 5\nHouse 6 5\nHouse 5 6\nPrintFront\n");
    assert_eq!(out, "PrintFront\n(5,5)\n(6,5)\n(5,6)\n");
}

#[test]
fn bomb_clears_same_row_and_row_below() {
    let out = run("6\nHouse 5 5\nHouse 6 5\nHouse 5 6\nPrintFront\nBomb 5 5\nPrintFront\n");
    assert_eq!(out, "PrintFront\n(5,5)\n(6,5)\n(5,6)\nPrintFront\n");
}

#[test]
fn bomb_between_two_houses_clears_both() {
    let out = run("4\nHouse 0 0\nHouse 2 0\nBomb 1 0\nPrintFront\n");
    assert_eq!(out, "PrintFront\n");
}

#[test]
fn bomb_on_empty_grid_prints_only_header() {
    assert_eq!(run("3\nBomb 0 0\nPrintFront\nPrintEnd"), "PrintFront\nPrintEnd\n");
}

#[test]
fn print_end_reverses_rows_and_columns() {
    let out = run("7\nHouse 3 1\nHouse -2 1\nHouse 0 -4\nHouse 9 8\nHouse 7 8\nPrintFront\nPrintEnd\n");
    assert_eq!(
        out,
        "PrintFront\n(0,-4)\n(-2,1)\n(3,1)\n(7,8)\n(9,8)\n\
         PrintEnd\n(9,8)\n(7,8)\n(3,1)\n(-2,1)\n(0,-4)\n",
    );
}

#[test]
fn diagonals_survive_a_bomb() {
    let mut grid: SparseGrid = (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| Cell::new(10 + dc, 20 + dr)))
        .collect();
    assert_eq!(grid.len(), 9);

    let blast = grid.bomb(Cell::new(10, 20));
    assert_eq!(blast.len(), 5);
    for cell in [Cell::new(9, 19), Cell::new(11, 19), Cell::new(9, 21), Cell::new(11, 21)] {
        assert!(grid.contains(cell), "{cell} should survive");
    }
    assert_eq!(grid.len(), 4);
    grid.check_invariants().unwrap();
}

#[test]
fn bomb_reaches_only_one_row_away() {
    let mut grid: SparseGrid = [(4, 2), (4, 3), (4, 4), (4, 5), (4, 6)].into_iter().map(Cell::from).collect();
    grid.bomb(Cell::new(4, 4));

    assert_eq!(grid.iter().collect::<Vec<_>>(), vec![Cell::new(4, 2), Cell::new(4, 6)]);
    assert_eq!(grid.num_rows(), 2);
    grid.check_invariants().unwrap();
}

#[test]
fn bomb_reaches_only_one_column_away() {
    let mut grid: SparseGrid = (0..7).map(|col| Cell::new(col, 0)).collect();
    grid.bomb(Cell::new(3, 0));

    assert_eq!(grid.row_len(0), Some(4));
    assert_eq!(
        grid.iter().map(|c| c.col).collect::<Vec<_>>(),
        vec![0, 1, 5, 6],
    );
    grid.check_invariants().unwrap();
}

#[test]
fn duplicate_house_is_idempotent() {
    let once = run("2\nHouse 1 1\nPrintFront");
    let twice = run("3\nHouse 1 1\nHouse 1 1\nPrintFront");
    assert_eq!(once, twice);
}

#[test]
fn isolated_house_then_bomb_restores_grid() {
    let mut grid: SparseGrid = [(0, 0), (10, 10), (-7, 3)].into_iter().map(Cell::from).collect();
    let before = grid.clone();

    grid.house(Cell::new(50, -50));
    assert_ne!(grid, before);
    let blast = grid.bomb(Cell::new(50, -50));

    assert_eq!(blast.as_slice(), &[Cell::new(50, -50)]);
    assert_eq!(grid, before);
    grid.check_invariants().unwrap();
}

#[test]
fn trailing_tokens_are_not_executed() {
    assert_eq!(run("1\nPrintFront\nHouse 1 1\nPrintFront"), "PrintFront\n");
}
