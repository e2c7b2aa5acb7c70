//! Symmetry command - Show the D4 images of a board

use anyhow::{Context, Result};
use clap::Parser;

use crate::tictactoe::{Board, D4Transform};

#[derive(Parser, Debug)]
#[command(about = "Show the eight symmetric images of a board")]
pub struct SymmetryArgs {
    /// Board cells, row-major (e.g. "OX..O.X.." or "OX. .O. X..")
    #[arg(long, short = 'b')]
    pub board: Option<String>,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s).with_context(|| format!("parsing board '{s}'"))?,
        None => Board::new(),
    };
    let (canonical, to_canonical) = board.canonical_with_transform();

    println!("=== Symmetry Analysis ===");
    println!("Board ({} to move):", board.active_player());
    println!("{board}");
    println!("\nCanonical form ({}):", describe(&to_canonical));
    println!("{canonical}");
    println!("Back to the board: {}", describe(&to_canonical.inverse()));

    let images = board.symmetries();
    let distinct = images
        .iter()
        .map(Board::encode)
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    println!("\n{distinct} distinct image(s) out of 8");
    println!();

    for (i, (transform, image)) in D4Transform::all().iter().zip(images.iter()).enumerate() {
        let marker = if *image == canonical {
            " (canonical)"
        } else {
            ""
        };
        println!("{}. {}{marker}", i + 1, describe(transform));
        println!("{image}");
        println!();
    }

    Ok(())
}

fn describe(t: &D4Transform) -> String {
    if t.reflection {
        format!("reflect, then rotate {}°", t.rotation)
    } else {
        format!("rotate {}°", t.rotation)
    }
}
