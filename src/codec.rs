//! Fixed-width text format for N×N grids.
//!
//! Line 1 carries the box size `n`; the next N lines carry N fields each,
//! every field exactly `floor(log10(N)) + 1` characters wide. A field of
//! all dashes is an empty cell, anything else is a zero-padded digit in
//! `[1, N]`.

use crate::board::Board;
use crate::{Result, SudokuError};

/// Characters per field for a grid of side `size`.
pub fn field_width(size: usize) -> usize {
    let mut width = 1;
    let mut rest = size;
    while rest >= 10 {
        rest /= 10;
        width += 1;
    }
    width
}

/// Parses a board from its textual form. Blank lines are skipped; the
/// remaining lines must be the header plus exactly N grid rows.
pub fn parse(text: &str) -> Result<Board> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let header = lines.next().unwrap_or("");
    let box_size: usize = header
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| SudokuError::InvalidBoxSize(header.to_string()))?;
    let size = box_size * box_size;
    let width = field_width(size);

    let rows: Vec<&str> = lines.collect();
    if rows.len() != size {
        return Err(SudokuError::RowCount {
            expected: size,
            found: rows.len(),
        });
    }

    let mut values = Vec::with_capacity(size);
    for (row, line) in rows.iter().enumerate() {
        if !line.is_ascii() || line.len() != size * width {
            return Err(SudokuError::RowWidth {
                row,
                expected: size * width,
                found: line.chars().count(),
            });
        }
        let mut row_values = Vec::with_capacity(size);
        for col in 0..size {
            // Slicing is safe at any index, the line is all ASCII
            let field = &line[col * width..(col + 1) * width];
            row_values.push(parse_field(field, row, col, size)?);
        }
        values.push(row_values);
    }

    Board::new(box_size, values)
}

fn parse_field(field: &str, row: usize, col: usize, size: usize) -> Result<u32> {
    if field.bytes().all(|b| b == b'-') {
        return Ok(0);
    }
    let value: u32 = field.parse().map_err(|_| SudokuError::InvalidField {
        row,
        col,
        field: field.to_string(),
    })?;
    if value == 0 || value > size as u32 {
        return Err(SudokuError::InvalidValue { row, col, value });
    }
    Ok(value)
}

/// Renders a board in the same format `parse` accepts, values zero-padded
/// to the field width and empty cells as dashes.
pub fn render(board: &Board) -> String {
    let size = board.size();
    let width = field_width(size);
    let mut out = String::with_capacity(size * (size * width + 1) + 8);
    out.push_str(&board.box_size().to_string());
    out.push('\n');
    for row in 0..size {
        for col in 0..size {
            let value = board.value(row, col);
            if value == 0 {
                out.push_str(&"-".repeat(width));
            } else {
                out.push_str(&format!("{:0width$}", value, width = width));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_width() {
        assert_eq!(field_width(4), 1);
        assert_eq!(field_width(9), 1);
        assert_eq!(field_width(16), 2);
        assert_eq!(field_width(25), 2);
        assert_eq!(field_width(100), 3);
    }

    #[test]
    fn test_parse_simple_grid() {
        let board = parse("2\n12--\n--21\n2---\n---2\n").unwrap();
        assert_eq!(board.box_size(), 2);
        assert_eq!(board.value(0, 0), 1);
        assert_eq!(board.value(0, 1), 2);
        assert_eq!(board.value(0, 2), 0);
        assert_eq!(board.value(1, 3), 1);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let board = parse("2\n\n12--\n--21\n\n2---\n---2\n\n").unwrap();
        assert_eq!(board.value(0, 0), 1);
    }

    #[test]
    fn test_parse_width_two_fields() {
        // 16×16 grid: every field is two characters
        let mut text = String::from("4\n");
        let mut first = String::new();
        first.push_str("01");
        first.push_str("--");
        first.push_str("16");
        first.push_str(&"--".repeat(13));
        text.push_str(&first);
        text.push('\n');
        for _ in 1..16 {
            text.push_str(&"--".repeat(16));
            text.push('\n');
        }
        let board = parse(&text).unwrap();
        assert_eq!(board.size(), 16);
        assert_eq!(board.value(0, 0), 1);
        assert_eq!(board.value(0, 1), 0);
        assert_eq!(board.value(0, 2), 16);
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        assert!(matches!(parse(""), Err(SudokuError::InvalidBoxSize(_))));
        assert!(matches!(parse("x\n"), Err(SudokuError::InvalidBoxSize(_))));
        assert!(matches!(parse("0\n"), Err(SudokuError::InvalidBoxSize(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_row_count() {
        assert_eq!(
            parse("2\n12--\n--21\n"),
            Err(SudokuError::RowCount {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_row_width() {
        assert_eq!(
            parse("2\n12--\n--21\n2--\n---2\n"),
            Err(SudokuError::RowWidth {
                row: 2,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_parse_rejects_garbage_field() {
        assert!(matches!(
            parse("2\n12--\n--21\n2x--\n---2\n"),
            Err(SudokuError::InvalidField { row: 2, col: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_value() {
        assert_eq!(
            parse("2\n12--\n--21\n5---\n---2\n"),
            Err(SudokuError::InvalidValue {
                row: 2,
                col: 0,
                value: 5
            })
        );
        // All-zero fields are not valid clues either
        let mut text = String::from("4\n00");
        text.push_str(&"--".repeat(15));
        text.push('\n');
        for _ in 1..16 {
            text.push_str(&"--".repeat(16));
            text.push('\n');
        }
        assert!(matches!(
            parse(&text),
            Err(SudokuError::InvalidValue { value: 0, .. })
        ));
    }

    #[test]
    fn test_render_round_trip() {
        let text = "2\n12--\n--21\n2---\n---2\n";
        let board = parse(text).unwrap();
        assert_eq!(render(&board), text);
    }

    #[test]
    fn test_render_zero_pads_wide_fields() {
        let mut values = vec![vec![0; 16]; 16];
        values[0][0] = 5;
        values[0][1] = 12;
        let board = Board::new(4, values).unwrap();
        let rendered = render(&board);
        let first_row = rendered.lines().nth(1).unwrap();
        assert!(first_row.starts_with("0512--"));
    }
}
