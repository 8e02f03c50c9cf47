use docopt::Docopt;
use log::info;
use rand::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    io,
    io::prelude::*,
    fs::File,
};
use treemaze::{Maze, MazeSolver, utils};

const USAGE: &str = "Tree Maze

Generates random perfect mazes and solves mazes read back from their text.
Without a command it shows a few sample mazes then solves --maze-file.

Usage:
    treemaze_driver [--maze-file=<path>] [--seed=<n>]
    treemaze_driver generate [--width=<w> --height=<h>] [--debug] [--seed=<n>] [--text-out=<path>]
    treemaze_driver solve <maze-file>
    treemaze_driver -h | --help

Options:
    -h --help              Show this screen.
    --width=<w>            Number of cells across the maze [default: 15].
    --height=<h>           Number of cells down the maze [default: 10].
    --debug                Print the maze every time a wall is added while generating it.
    --seed=<n>             Seed the random number generator to repeat a maze.
    --text-out=<path>      Output file path for the maze text instead of the screen.
    --maze-file=<path>     Maze text file solved by the demo [default: data/maze_test.txt].
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_generate: bool,
    cmd_solve: bool,
    arg_maze_file: String,
    flag_width: usize,
    flag_height: usize,
    flag_debug: bool,
    flag_seed: Option<u32>,
    flag_text_out: String,
    flag_maze_file: String,
}

// Driver errors: failures from the maze library, argument parsing and file output.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::treemaze::Error, ::treemaze::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut rng = match args.flag_seed {
        Some(seed) => utils::seeded_rng(seed),
        None => rand::weak_rng(),
    };

    if args.cmd_generate {
        generate(&args, &mut rng)
    } else if args.cmd_solve {
        solve(&args.arg_maze_file)
    } else {
        demo(&args, &mut rng)
    }
}

/// Sample mazes of a few sizes, the first printed as it is carved, then a solved maze file.
fn demo(maze_args: &MazeArgs, rng: &mut XorShiftRng) -> Result<()> {

    for &(width, height, debug) in &[(5, 5, true), (5, 5, false), (15, 10, false)] {
        let maze = Maze::with_rng(width, height, debug, rng)?;
        maze.display();
    }

    let solver = MazeSolver::from_file(&maze_args.flag_maze_file)?;
    println!("{}", solver);

    Ok(())
}

fn generate(maze_args: &MazeArgs, rng: &mut XorShiftRng) -> Result<()> {

    let maze = Maze::with_rng(maze_args.flag_width, maze_args.flag_height, maze_args.flag_debug, rng)?;
    info!("generated {}x{} maze", maze.width(), maze.height());

    if maze_args.flag_text_out.is_empty() {
        maze.display();
    } else {
        write_text_to_file(&maze.to_string(), &maze_args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", maze_args.flag_text_out))?;
    }

    Ok(())
}

fn solve(maze_file: &str) -> Result<()> {

    let solver = MazeSolver::from_file(maze_file)?;
    print!("{}", solver);

    match solver.path() {
        Some(route) => println!("Route from entrance to exit crosses {} squares.", route.len()),
        None => println!("There is no route from the entrance to the exit."),
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}


#[cfg(test)]
mod tests {

    use super::*;

    fn parse(argv: &[&str]) -> ::std::result::Result<MazeArgs, docopt::Error> {
        let argv = ["treemaze_driver"].iter().chain(argv.iter()).map(|arg| arg.to_string());
        Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())
    }

    #[test]
    fn generate_defaults() {
        let args = parse(&["generate"]).unwrap();
        assert!(args.cmd_generate);
        assert_eq!((args.flag_width, args.flag_height), (15, 10));
        assert_eq!(args.flag_seed, None);
        assert!(args.flag_text_out.is_empty());
    }

    #[test]
    fn generate_with_text_out_and_seed() {
        let args = parse(&["generate", "--width=4", "--height=3", "--seed=9",
                           "--text-out=maze.txt"])
            .unwrap();
        assert_eq!((args.flag_width, args.flag_height), (4, 3));
        assert_eq!(args.flag_seed, Some(9));
        assert_eq!(args.flag_text_out, "maze.txt");
    }

    #[test]
    fn mazes_are_only_saved_as_text() {
        assert!(parse(&["generate", "--save-edges=maze.graph"]).is_err());
    }

    #[test]
    fn solve_takes_a_file() {
        let args = parse(&["solve", "data/maze_test.txt"]).unwrap();
        assert!(args.cmd_solve);
        assert_eq!(args.arg_maze_file, "data/maze_test.txt");
    }

    #[test]
    fn demo_maze_file_default() {
        let args = parse(&[]).unwrap();
        assert!(!args.cmd_generate && !args.cmd_solve);
        assert_eq!(args.flag_maze_file, "data/maze_test.txt");
    }
}
