//! dimcalc CLI
//!
//! Small front end over a fixed unit catalog: runs the worked scenarios,
//! lists the catalog and converts between compatible units.

use clap::{Parser, Subcommand, ValueEnum};
use miette::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dimensional::{DimensionRegistry, Quantity, Ratio, ScaledUnit, UnitSignature};

#[derive(Parser)]
#[command(name = "dimcalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Unit-checked arithmetic over a small catalog of physical units")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the worked examples
    Scenarios,

    /// List catalog units with their scale and signature
    Units,

    /// Convert a value between two catalog units
    Convert {
        /// Value expressed in the source unit
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit
        #[arg(long, value_enum)]
        from: CatalogUnit,

        /// Target unit
        #[arg(long, value_enum)]
        to: CatalogUnit,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CatalogUnit {
    #[value(name = "s")]
    Second,
    #[value(name = "min")]
    Minute,
    #[value(name = "h")]
    Hour,
    #[value(name = "m")]
    Meter,
    #[value(name = "km")]
    Kilometer,
    #[value(name = "kg")]
    Kilogram,
    #[value(name = "mps")]
    MetersPerSecond,
    #[value(name = "kph")]
    KilometersPerHour,
    #[value(name = "mps2")]
    MetersPerSecondSquared,
    #[value(name = "N")]
    Newton,
    #[value(name = "J")]
    Joule,
}

impl CatalogUnit {
    const ALL: [CatalogUnit; 11] = [
        CatalogUnit::Second,
        CatalogUnit::Minute,
        CatalogUnit::Hour,
        CatalogUnit::Meter,
        CatalogUnit::Kilometer,
        CatalogUnit::Kilogram,
        CatalogUnit::MetersPerSecond,
        CatalogUnit::KilometersPerHour,
        CatalogUnit::MetersPerSecondSquared,
        CatalogUnit::Newton,
        CatalogUnit::Joule,
    ];

    fn label(self) -> &'static str {
        match self {
            CatalogUnit::Second => "s",
            CatalogUnit::Minute => "min",
            CatalogUnit::Hour => "h",
            CatalogUnit::Meter => "m",
            CatalogUnit::Kilometer => "km",
            CatalogUnit::Kilogram => "kg",
            CatalogUnit::MetersPerSecond => "mps",
            CatalogUnit::KilometersPerHour => "kph",
            CatalogUnit::MetersPerSecondSquared => "mps2",
            CatalogUnit::Newton => "N",
            CatalogUnit::Joule => "J",
        }
    }
}

/// Base signatures the catalog is built from
struct Catalog {
    second: UnitSignature,
    meter: UnitSignature,
    kilogram: UnitSignature,
}

impl Catalog {
    fn new(registry: &DimensionRegistry) -> dimensional::Result<Self> {
        let (_, second) = registry.define("time", "second")?;
        let (_, meter) = registry.define("Distance", "meter")?;
        let (_, kilogram) = registry.define("Mass", "kilogram")?;
        tracing::debug!(dimensions = registry.len(), "catalog ready");
        Ok(Self {
            second,
            meter,
            kilogram,
        })
    }

    fn scaled(&self, unit: CatalogUnit) -> ScaledUnit {
        let mps = &self.meter / &self.second;
        let mps2 = &self.meter / &self.second.pow(2);
        let newton = &self.kilogram * &mps2;
        match unit {
            CatalogUnit::Second => self.second.clone().into(),
            CatalogUnit::Minute => Ratio::integer(60) * &self.second,
            CatalogUnit::Hour => Ratio::integer(3600) * &self.second,
            CatalogUnit::Meter => self.meter.clone().into(),
            CatalogUnit::Kilometer => Ratio::integer(1000) * &self.meter,
            CatalogUnit::Kilogram => self.kilogram.clone().into(),
            CatalogUnit::MetersPerSecond => mps.into(),
            CatalogUnit::KilometersPerHour => {
                &(Ratio::integer(1000) * &self.meter) / &(Ratio::integer(3600) * &self.second)
            }
            CatalogUnit::MetersPerSecondSquared => mps2.into(),
            CatalogUnit::Joule => (&newton * &self.meter).into(),
            CatalogUnit::Newton => newton.into(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let registry = DimensionRegistry::new();
    let catalog = Catalog::new(&registry)?;

    match cli.command {
        Commands::Scenarios => scenarios(&catalog),
        Commands::Units => units(&catalog),
        Commands::Convert { value, from, to } => convert(&catalog, value, from, to),
    }
}

fn scenarios(catalog: &Catalog) -> Result<()> {
    let acceleration = 9.8_f64 * catalog.scaled(CatalogUnit::MetersPerSecondSquared);
    let time = 10.0_f64 * &catalog.second;
    let velocity = acceleration * time;
    println!("velocity:   9.8 mps2 * 10 s = {}", velocity);

    let frequency = Quantity::scalar(1.0_f64) / (100.0_f64 * &catalog.second);
    println!("frequency:  1 / 100 s       = {}", frequency);

    let speed = (1.0_f64 * catalog.scaled(CatalogUnit::Kilometer))
        / (1.0_f64 * catalog.scaled(CatalogUnit::Hour));
    println!("conversion: 1 km / 1 h      = {}", speed);

    let force = 1.0_f64 * catalog.scaled(CatalogUnit::Newton);
    let energy = 1.0_f64 * catalog.scaled(CatalogUnit::Joule);
    match force + energy {
        Ok(sum) => println!("mismatch:   1 N + 1 J       = {}", sum),
        Err(err) => println!("mismatch:   1 N + 1 J       rejected\n{:?}", miette::Report::new(err)),
    }
    Ok(())
}

fn units(catalog: &Catalog) -> Result<()> {
    for unit in CatalogUnit::ALL {
        let scaled = catalog.scaled(unit);
        println!("{:<5} {:>10}  {}", unit.label(), scaled.ratio().to_string(), scaled.unit());
    }
    Ok(())
}

fn convert(catalog: &Catalog, value: f64, from: CatalogUnit, to: CatalogUnit) -> Result<()> {
    let quantity = value * catalog.scaled(from);
    let converted = quantity.value_in(&catalog.scaled(to))?;
    tracing::debug!(from = from.label(), to = to.label(), "converted {}", value);
    println!("{} {} = {} {}", value, from.label(), converted, to.label());
    Ok(())
}
