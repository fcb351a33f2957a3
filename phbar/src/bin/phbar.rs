use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phbar::{
    read_filtration, BoundaryStrategy, Filtration, Pipeline, PipelineConfig, ReductionStrategy,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "phbar - Persistence barcodes of simplicial filtrations over GF(2)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the persistence diagram of a filtration file
    Barcodes {
        /// Filtration file (`value dimension v0 .. vd` records)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,

        /// Hide finite bars shorter than this
        #[arg(long)]
        min_persistence: Option<f64>,

        /// Boundary construction (subset-scan, face-index, parallel-subset-scan)
        #[arg(long)]
        boundary: Option<BoundaryStrategy>,

        /// Column reduction (standard, pivot-index)
        #[arg(long)]
        reduction: Option<ReductionStrategy>,

        /// Verify every face precedes its coface
        #[arg(long)]
        check_faces: bool,

        /// JSON pipeline configuration; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read the file through a memory map
        #[arg(long)]
        mmap: bool,

        /// Print per-stage timings to stderr
        #[arg(long)]
        timings: bool,
    },
    /// Print the boundary matrix columns
    Boundary {
        /// Filtration file
        file: PathBuf,

        /// Print the reduced matrix instead
        #[arg(long)]
        reduced: bool,
    },
    /// Show simplex counts and the value range
    Info {
        /// Filtration file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Plain,
    Verbose,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    match cli.command {
        Commands::Barcodes {
            file,
            format,
            min_persistence,
            boundary,
            reduction,
            check_faces,
            config,
            mmap,
            timings,
        } => {
            let mut pipeline_config = load_config(config.as_deref())?;
            if let Some(boundary) = boundary {
                pipeline_config = pipeline_config.with_boundary(boundary);
            }
            if let Some(reduction) = reduction {
                pipeline_config = pipeline_config.with_reduction(reduction);
            }
            if let Some(min) = min_persistence {
                pipeline_config = pipeline_config.with_min_persistence(min);
            }
            if check_faces {
                pipeline_config = pipeline_config.with_face_check(true);
            }
            handle_barcodes(&file, format, pipeline_config, mmap, timings)?;
        }
        Commands::Boundary { file, reduced } => {
            handle_boundary(&file, reduced)?;
        }
        Commands::Info { file } => {
            handle_info(&file)?;
        }
    }

    Ok(())
}

#[cfg(feature = "serde")]
fn load_config(path: Option<&Path>) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(PipelineConfig::from_json_file(path)?),
        None => Ok(PipelineConfig::default()),
    }
}

#[cfg(not(feature = "serde"))]
fn load_config(path: Option<&Path>) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(_) => Err("--config requires the 'serde' feature".into()),
        None => Ok(PipelineConfig::default()),
    }
}

fn load_filtration(path: &Path, mmap: bool) -> Result<Filtration, Box<dyn std::error::Error>> {
    if mmap {
        #[cfg(feature = "mmap")]
        return Ok(phbar::read_filtration_mmap(path)?);
        #[cfg(not(feature = "mmap"))]
        return Err("--mmap requires the 'mmap' feature".into());
    }
    Ok(read_filtration(path)?)
}

fn handle_barcodes(
    file: &Path,
    format: OutputFormat,
    config: PipelineConfig,
    mmap: bool,
    timings: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filtration = load_filtration(file, mmap)?;
    let output = Pipeline::new(config.clone()).run(&filtration)?;
    let diagram = output.diagram(&filtration, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => diagram.write_plain(&mut out)?,
        OutputFormat::Verbose => diagram.write_verbose(&mut out)?,
        #[cfg(feature = "serde")]
        OutputFormat::Json => writeln!(out, "{}", diagram.to_json()?)?,
        #[cfg(not(feature = "serde"))]
        OutputFormat::Json => return Err("--format json requires the 'serde' feature".into()),
    }

    if timings {
        let t = output.timings;
        eprintln!("Face check: {:.2?}", t.face_check);
        eprintln!("Boundary:   {:.2?}", t.boundary);
        eprintln!("Reduction:  {:.2?}", t.reduction);
        eprintln!("Extraction: {:.2?}", t.extraction);
        eprintln!("Total:      {:.2?}", t.total());
    }

    Ok(())
}

fn handle_boundary(file: &Path, reduced: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filtration = read_filtration(file)?;
    let output = Pipeline::default().run(&filtration)?;
    let columns = if reduced {
        output.reduced.columns()
    } else {
        output.boundary.columns()
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (j, column) in columns.iter().enumerate() {
        write!(out, "{j}:")?;
        for row in column {
            write!(out, " {row}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn handle_info(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let filtration = read_filtration(file)?;

    println!("Filtration Info:");
    println!("  File: {}", file.display());
    println!("  Simplices: {}", filtration.len());
    let Some(max_dimension) = filtration.max_dimension() else {
        return Ok(());
    };

    let mut counts = vec![0usize; max_dimension + 1];
    for simplex in &filtration {
        counts[simplex.dimension()] += 1;
    }
    for (dimension, count) in counts.iter().enumerate() {
        println!("  Dimension {dimension}: {count}");
    }
    println!(
        "  Values: {} .. {}",
        filtration.value(0),
        filtration.value(filtration.len() - 1)
    );

    Ok(())
}
