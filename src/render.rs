use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color as TermColor, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connectn_ai::{Board, Color};

/// Display color for an engine color
fn tile_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Yellow => TermColor::Yellow,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Cyan,
        Color::Purple => TermColor::Magenta,
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Yellow => "Yellow",
        Color::Green => "Green",
        Color::Blue => "Blue",
        Color::Purple => "Purple",
    }
}

/// Draws the whole grid with column numbers along the top
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=board.columns()).map(|c| (c % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let tile = match board.cell(row, column) {
                Some(color) => style("O")
                    .attribute(Attribute::Bold)
                    .on(TermColor::DarkBlue)
                    .with(tile_color(color)),
                None => style("O").on(TermColor::DarkBlue).with(TermColor::DarkBlue),
            };
            stdout.queue(PrintStyledContent(tile))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
