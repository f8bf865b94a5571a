use crate::ModuleGrid;

/// Renders the symbol with its quiet zone as text, two module rows per line.
///
/// Light modules are drawn with block glyphs and dark modules as blanks, so
/// the code reads correctly on a dark terminal background.
pub fn preview_lines(grid: &ModuleGrid, margin: u32) -> Vec<String> {
    let margin = i64::from(margin);
    let end = i64::from(grid.size()) + margin;
    let light = |x: i64, y: i64| y < end && !grid.is_dark(x, y);

    (-margin..end)
        .step_by(2)
        .map(|y| {
            (-margin..end)
                .map(|x| match (light(x, y), light(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::preview_lines;
    use crate::ModuleGrid;

    #[test]
    fn single_dark_module_with_margin() {
        let grid = ModuleGrid::new(1, vec![true]);
        let lines = preview_lines(&grid, 1);

        // Rows -1..2 pair up as (-1,0) and (1,2); row 2 is past the end.
        assert_eq!(lines, vec!["█▀█".to_string(), "▀▀▀".to_string()]);
    }

    #[test]
    fn all_light_without_margin() {
        let grid = ModuleGrid::new(2, vec![false; 4]);
        assert_eq!(preview_lines(&grid, 0), vec!["██".to_string()]);
    }
}
