use env_logger::Env;
use failure::Error;
use log::{info, LevelFilter};
use seamcarve::{calculate_energy, energy_to_image, PixelGrid, SeamCarver};
use std::process;

#[macro_use]
extern crate clap;

use clap::{App, Arg};

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .short("W")
                .takes_value(true)
                .help("Target width (defaults to the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .short("H")
                .takes_value(true)
                .help("Target height (defaults to the current height)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .short("e")
                .takes_value(true)
                .help("Also write the energy map of the input image here"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    // RUST_LOG decides unless -v was given.
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    let logger = match matches.occurrences_of("verbose") {
        0 => &mut builder,
        1 => builder.filter_level(LevelFilter::Info),
        2 => builder.filter_level(LevelFilter::Debug),
        _ => builder.filter_level(LevelFilter::Trace),
    };
    logger.init();

    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?;
    let grid = PixelGrid::from_image(&image)?;
    let (width, height) = grid.dimensions();
    info!("loaded {} ({}x{})", input, width, height);

    if let Some(path) = matches.value_of("energy") {
        energy_to_image(&calculate_energy(&grid)).save(path)?;
        info!("wrote energy map to {}", path);
    }

    let new_width = if matches.is_present("width") {
        value_t!(matches, "width", u32)?
    } else {
        width
    };
    let new_height = if matches.is_present("height") {
        value_t!(matches, "height", u32)?
    } else {
        height
    };

    let mut carver = SeamCarver::new(grid);
    carver.carve(new_width, new_height)?;
    carver.into_grid().to_rgb_image().save(output)?;
    info!("wrote {} ({}x{})", output, new_width, new_height);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
