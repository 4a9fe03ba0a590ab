use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Generate a minimal surface and write it to disk.
#[derive(Debug, Parser)]
struct Args {
    /// Surface family: "chen-gackstatter" or "enneper".
    #[arg(long, default_value = "chen-gackstatter")]
    surface: String,

    /// Samples along each parameter range.
    #[arg(long, default_value_t = 50)]
    resolution: usize,

    /// Enneper order parameter.
    #[arg(long, default_value_t = 1)]
    order: u32,

    /// Evaluate on a single thread instead of the worker pool.
    #[arg(long)]
    sequential: bool,

    /// Worker-pool width for the parallel path.
    #[arg(long, default_value_t = ms_generate::DEFAULT_WORKERS)]
    workers: usize,

    /// Colormap for the heightmap: "thermal", "rainbow", or "gray".
    #[arg(long, default_value = "thermal")]
    colormap: String,

    /// Output path for the Z-grid heightmap PNG.
    #[arg(long, default_value = "surface.png")]
    out: PathBuf,

    /// Optional path for a JSON dump of the coordinate grids.
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let colormap = ms_core::image::Colormap::from_name(&args.colormap)?;
    let request = ms_generate::request_for(
        &args.surface,
        args.resolution,
        args.order,
        !args.sequential,
        args.workers,
    )
    .map_err(|err| err.to_string())?;
    let surface = ms_generate::generate(&request).map_err(|err| err.to_string())?;

    let image = ms_core::image::Renderer { colormap }.render(&surface.z)?;
    image
        .save(&args.out)
        .map_err(|err| format!("failed to write {}: {}", args.out.display(), err))?;
    println!("{} -> {}", surface.title, args.out.display());

    if let Some(path) = &args.json {
        let doc = serde_json::json!({
            "title": surface.title,
            "x": surface.x.to_rows(),
            "y": surface.y.to_rows(),
            "z": surface.z.to_rows(),
        });
        let file = std::fs::File::create(path)
            .map_err(|err| format!("failed to create {}: {}", path.display(), err))?;
        serde_json::to_writer(file, &doc)
            .map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
        println!("coordinate grids -> {}", path.display());
    }

    Ok(())
}
