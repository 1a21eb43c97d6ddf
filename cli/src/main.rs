use asciify::{ConvertConfig, convert_file};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "asciify", version, about = "Convert an image to ASCII art")]
struct Cli {
    /// Path to the input image
    image_path: PathBuf,

    /// Path to the output text file (a .txt extension is appended if missing)
    #[arg(short, long, default_value = "ascii_art.txt")]
    output: PathBuf,

    /// Use the dark-mode ramp (dense glyphs for bright pixels, for
    /// light-background terminals)
    #[arg(short, long)]
    dark: bool,

    /// Height of the output in characters
    #[arg(short = 'H', long, default_value_t = 100)]
    height: u32,

    /// Colour the output with ANSI truecolor escape sequences
    #[arg(short, long)]
    colour: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ConvertConfig {
        height: cli.height,
        dark_mode: cli.dark,
        colour: cli.colour,
    };

    match convert_file(&cli.image_path, &cli.output, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["asciify", "photo.jpg"]);
        assert_eq!(cli.image_path, PathBuf::from("photo.jpg"));
        assert_eq!(cli.output, PathBuf::from("ascii_art.txt"));
        assert_eq!(cli.height, 100);
        assert!(!cli.dark);
        assert!(!cli.colour);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["asciify", "in.png", "-o", "out", "-d", "-H", "40", "-c"]);
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.height, 40);
        assert!(cli.dark);
        assert!(cli.colour);
    }

    #[test]
    fn test_cli_requires_image_path() {
        assert!(Cli::try_parse_from(["asciify"]).is_err());
    }
}
