//! Tests for the text table layout of a grid

#[cfg(test)]
mod tests {
    use mazegrid::io::render::{render_layout, write_layout};
    use mazegrid::spatial::grid::MazeGrid;
    use mazegrid::spatial::vector::Vector2D;

    // Tests the full table of a small grid with one placed and one empty room
    #[test]
    fn test_render_small_grid() -> mazegrid::Result<()> {
        let mut grid = MazeGrid::new(2, 1)?;
        grid.set_room(Vector2D::new(0, 0), 3, 90)?;

        let expected = "\
Maze layout: 2 x 1 - ( Room / Rotation )

 ---------------------------
|     |     0    |     1    |
|-----+----------+----------|
|  0  |  3 /  90 |  - /   - |
 ---------------------------
";
        assert_eq!(render_layout(&grid), expected);
        Ok(())
    }

    // Tests every row spans the border plus its closing edge
    #[test]
    fn test_rows_are_aligned() -> mazegrid::Result<()> {
        let mut grid = MazeGrid::new(5, 3)?;
        grid.set_room(Vector2D::new(3, 1), 1, 90)?;
        grid.set_room(Vector2D::new(2, 2), 12, 270)?;

        let layout = render_layout(&grid);
        let table: Vec<&str> = layout.lines().skip(2).collect();
        assert_eq!(table.len(), 2 + 2 * 3 + 1);
        // Borders leave the outer corners blank
        let border = table.first().map_or(0, |line| line.chars().count());
        for line in table.iter().skip(1).take(table.len() - 2) {
            assert_eq!(line.chars().count(), border + 1, "misaligned: {line:?}");
        }
        assert_eq!(table.first(), table.last());
        Ok(())
    }

    // Tests title names the dimensions and cells show their values
    #[test]
    fn test_title_and_cells() -> mazegrid::Result<()> {
        let mut grid = MazeGrid::new(5, 3)?;
        grid.set_room(Vector2D::new(3, 1), 1, 90)?;
        grid.set_room(Vector2D::new(2, 2), 2, 270)?;

        let layout = grid.to_string();
        assert!(layout.starts_with("Maze layout: 5 x 3 - ( Room / Rotation )\n"));

        let row_one = layout
            .lines()
            .find(|line| line.starts_with("|  1  "))
            .unwrap_or_default();
        assert_eq!(
            row_one,
            "|  1  |  - /   - |  - /   - |  - /   - |  1 /  90 |  - /   - |"
        );
        assert!(layout.contains("|  2 / 270 |"));
        Ok(())
    }

    // Tests writing into a string matches the display form
    #[test]
    fn test_write_layout_matches_display() -> mazegrid::Result<()> {
        let grid = MazeGrid::new(3, 2)?;
        let mut out = String::new();
        write_layout(&grid, &mut out).unwrap_or_else(|e| unreachable!("{e}"));
        assert_eq!(out, grid.to_string());
        Ok(())
    }
}
