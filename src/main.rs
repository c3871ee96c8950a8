//! Lesson launcher binary for the tutorial3d crate.

use std::path::PathBuf;

use clap::Parser;
use tutorial3d::{LessonKind, Options, Viewer};

/// Run one of the 3D tutorial lessons in a window.
#[derive(Debug, Parser)]
#[command(name = "tutorial3d", version, about)]
struct Cli {
    /// Lesson to run. Defaults to the options file's `lesson`.
    #[arg(value_enum)]
    lesson: Option<LessonKind>,

    /// TOML options preset.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Window width in logical pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels.
    #[arg(long)]
    height: Option<u32>,
}

fn load_options(cli: &Cli) -> Result<Options, tutorial3d::TutorialError> {
    let mut options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(width) = cli.width {
        options.window.width = width;
    }
    if let Some(height) = cli.height {
        options.window.height = height;
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut builder = Viewer::builder().with_options(options);
    if let Some(lesson) = cli.lesson {
        builder = builder.with_lesson(lesson);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
