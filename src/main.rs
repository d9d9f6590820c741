use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};

use connectn_ai::*;

mod render;

/// Colors offered to a new game, the human player's first
const COLOR_BANK: [Color; 5] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
];

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect-N\n");

    // choose the number of AI opponents
    let ai_count = loop {
        print!("How many AI opponents? (1-{}): ", COLOR_BANK.len() - 1);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        match buffer.trim().parse::<usize>() {
            Ok(count) if (1..COLOR_BANK.len()).contains(&count) => break count,
            _ => println!(
                "Please answer with a number between 1 and {}",
                COLOR_BANK.len() - 1
            ),
        }
    };

    let teams: Vec<Color> = COLOR_BANK.iter().copied().take(ai_count + 1).collect();
    let human = teams[0];

    let mut board = Board::new(
        DEFAULT_ROWS,
        DEFAULT_COLUMNS,
        teams,
        DEFAULT_STREAK_TARGET,
    )?;
    let mut turn = human;
    println!(
        "\nYou play {}. First to {} in a row wins.\n",
        render::color_name(human),
        board.streak_target()
    );

    // game loop
    loop {
        render::draw(&board)?;

        if let Some(winner) = board.winner() {
            println!("{} wins!", render::color_name(winner));
            break;
        }
        if board.available_columns().is_empty() {
            println!("It's a draw!");
            break;
        }

        if turn == human {
            print!("Column (1-{}) > ", board.columns());
            stdout().flush().expect("failed to flush to stdout!");

            let mut input = String::new();
            stdin.read_line(&mut input)?;
            let column = match input.trim().parse::<usize>() {
                Ok(column) if (1..=board.columns()).contains(&column) => column - 1,
                _ => {
                    println!("Invalid column: {}", input.trim());
                    continue;
                }
            };
            if board.place(column, turn)?.is_none() {
                println!("Column {} is full", column + 1);
                continue;
            }
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
            spinner.set_message(&format!("{} is thinking...", render::color_name(turn)));
            spinner.enable_steady_tick(80);

            let choice = board.find_move(turn)?;
            spinner.finish_and_clear();

            if let Some(column) = choice {
                println!("{} drops into column {}", render::color_name(turn), column + 1);
                board.place(column, turn)?;
            }
        }

        turn = board.next_color(turn)?;
    }
    Ok(())
}
