// args.rs - Command line parsing

use std::path::PathBuf;

pub const USAGE: &str = "Usage: render-frames [--width N] [--height N] [--frames N] [--seed N] \
[--config preset.json] [--out frame.png] [--sequence DIR]";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub seed: u64,
    pub config: Option<PathBuf>,
    pub out: PathBuf,
    pub sequence: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frames: 300,
            seed: 0x5EED,
            config: None,
            out: PathBuf::from("frame.png"),
            sequence: None,
        }
    }
}

impl Args {
    pub fn parse<I: Iterator<Item = String>>(mut it: I) -> Result<Self, String> {
        let mut args = Args::default();

        while let Some(flag) = it.next() {
            let mut value = || it.next().ok_or_else(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--width" => args.width = number(&flag, value()?)?,
                "--height" => args.height = number(&flag, value()?)?,
                "--frames" => args.frames = number(&flag, value()?)?,
                "--seed" => args.seed = number(&flag, value()?)?,
                "--config" => args.config = Some(PathBuf::from(value()?)),
                "--out" => args.out = PathBuf::from(value()?),
                "--sequence" => args.sequence = Some(PathBuf::from(value()?)),
                other => return Err(format!("unknown argument {other}")),
            }
        }

        Ok(args)
    }
}

fn number<T: std::str::FromStr>(flag: &str, raw: String) -> Result<T, String> {
    raw.parse().map_err(|_| format!("{flag}: not a number: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Args, String> {
        Args::parse(line.split_whitespace().map(String::from))
    }

    #[test]
    fn empty_line_gives_defaults() {
        assert_eq!(parse("").unwrap(), Args::default());
    }

    #[test]
    fn reads_every_flag() {
        let args = parse("--width 320 --height 240 --frames 10 --seed 9 --config p.json --out a.png --sequence seq").unwrap();
        assert_eq!((args.width, args.height, args.frames, args.seed), (320, 240, 10, 9));
        assert_eq!(args.config, Some(PathBuf::from("p.json")));
        assert_eq!(args.out, PathBuf::from("a.png"));
        assert_eq!(args.sequence, Some(PathBuf::from("seq")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("--width").is_err());
        assert!(parse("--width wide").is_err());
        assert!(parse("--colors 3").is_err());
    }
}
