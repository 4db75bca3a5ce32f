use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kundli_config::KundliConfig;
use kundli_rs::{
    BirthDetails, DashaSequence, GEMSTONES, Kundli, KundliError, KundliGenerator,
    MeanElementEngine, ObservationContext, RenderOptions, UtcTime, render_options,
};
use kundli_vedic_base::{AscendantMap, Gemstone, PlanetPositions, dasha_sequence, house_ordinal};
use log::info;

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic birth chart generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: look up the birth place, compute and render
    Generate {
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time, UTC (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Config file (default: kundli.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// SVG output path (default: chart.output from config)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// House, sign and degree of the nine bodies
    Positions {
        #[command(flatten)]
        at: Moment,
    },
    /// Sign for each house in 2-hour steps
    Ascendants {
        #[command(flatten)]
        at: Moment,
    },
    /// Render a chart for known coordinates, no location lookup
    Chart {
        #[command(flatten)]
        at: Moment,
        #[arg(long, default_value = "kundli.svg")]
        output: PathBuf,
        /// Canvas size in pixels
        #[arg(long, default_value = "800")]
        size: u32,
    },
    /// Gemstone recommendation per body
    Gemstones,
    /// Dasha sequence
    Dasha,
}

#[derive(clap::Args)]
struct Moment {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Time, UTC (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
}

impl Moment {
    fn context(&self) -> Result<ObservationContext, KundliError> {
        let time = UtcTime::parse(&self.date, &self.time)?;
        Ok(ObservationContext::from_coordinates(time, self.lat, self.lon)?)
    }
}

fn print_positions(positions: &PlanetPositions) {
    println!("Planet positions:");
    for p in positions {
        println!(
            "  {:<8} {:>4} house  {:<12} {:<10} {:>7.2} deg",
            p.body.name(),
            house_ordinal(p.house),
            p.sign_name(),
            p.sign.name(),
            p.degree
        );
    }
}

fn print_ascendants(ascendants: &AscendantMap) {
    println!("Ascendants:");
    for (house, sign) in ascendants.iter() {
        println!("  House {house:>2}: {sign}");
    }
}

fn print_yogas(messages: &[&str]) {
    println!("Yogas:");
    for msg in messages {
        println!("  {msg}");
    }
}

fn print_dasha(dasha: &DashaSequence) {
    println!("Dasha:");
    for period in dasha.periods() {
        println!("  {}: {}", period.label, period.lord);
    }
}

fn print_gemstones(gemstones: &[Gemstone]) {
    println!("Gemstones:");
    for g in gemstones {
        println!("  {:<8} {g}", g.body.name());
    }
}

fn print_kundli(kundli: &Kundli) {
    if let Some(place) = &kundli.place {
        println!("Place: {place}");
    }
    println!(
        "Time: {}  ({:.4}, {:.4})",
        kundli.context.time,
        kundli.context.location.latitude_deg,
        kundli.context.location.longitude_deg
    );
    print_positions(&kundli.positions);
    print_ascendants(&kundli.ascendants);
    print_yogas(&kundli.yoga_messages());
    print_dasha(&kundli.dasha);
    print_gemstones(kundli.gemstones());
}

fn generate(
    config: &KundliConfig,
    details: &BirthDetails,
    output: Option<PathBuf>,
) -> Result<(), KundliError> {
    // Fails on a missing credential before any lookup or computation.
    let generator = KundliGenerator::from_config(config)?;
    info!("generating chart for {} at {} {}", details.place, details.date, details.time);
    let kundli = generator.generate(details)?;
    print_kundli(&kundli);
    let path = output.unwrap_or_else(|| config.chart.output.clone());
    kundli.write_svg(&path, &render_options(&config.chart))?;
    println!("Chart written to {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<(), KundliError> {
    match cli.command {
        Commands::Generate {
            city,
            state,
            date,
            time,
            config,
            output,
        } => {
            let config = KundliConfig::resolve(config.as_deref())?;
            let details = BirthDetails::new(city, state, date, time);
            generate(&config, &details, output)?;
        }

        Commands::Positions { at } => {
            let ctx = at.context()?;
            let positions = kundli_vedic_base::compute_positions(&MeanElementEngine, &ctx)?;
            print_positions(&positions);
        }

        Commands::Ascendants { at } => {
            let ctx = at.context()?;
            let map = kundli_vedic_base::ascendant_map(&MeanElementEngine, &ctx)?;
            print_ascendants(&map);
        }

        Commands::Chart { at, output, size } => {
            let kundli = Kundli::compute(&MeanElementEngine, at.context()?)?;
            let opts = RenderOptions {
                size_px: size,
                ..RenderOptions::default()
            };
            kundli.write_svg(&output, &opts)?;
            println!("Chart written to {}", output.display());
        }

        Commands::Gemstones => print_gemstones(&GEMSTONES),

        Commands::Dasha => print_dasha(&dasha_sequence()),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
