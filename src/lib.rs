//! yolopost: post-processing for YOLO-family object detectors.
//!
//! A detection network emits, per anchor/cell, a box proposal and a score
//! for every class. yolopost turns those raw output tensors into a short,
//! ordered list of labelled boxes in frame-relative coordinates:
//!
//! raw image → [`preprocess`] → *(external inference)* → [`decode`] →
//! [`nms`] → [`normalize`] → [`assemble`] → detections.
//!
//! The forward pass itself is not part of this crate; plug a backend in
//! through [`detector::InferenceProvider`], or feed captured outputs to
//! [`Detector::postprocess`].
//!
//! # Modules
//!
//! - [`config`]: validated detector parameters
//! - [`classes`]: optional class-name table and label resolution
//! - [`tensor`]: raw output layout and JSON I/O
//! - [`geom`]: typed pixel/normalized boxes and IoU
//! - [`detector`]: the per-frame pipeline
//! - [`error`]: error types for yolopost operations
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use yolopost::{ClassTable, Detector, DetectorConfig, InputSize};
//!
//! let config = DetectorConfig::new(0.5, 0.4, InputSize::new(416, 416)).unwrap();
//! let classes = ClassTable::from_names_str("person\ncar\n");
//! let detector = Detector::new(config, Some(classes));
//!
//! let outputs = vec![array![[0.5f32, 0.5, 0.2, 0.2, 0.9, 0.1]]];
//! let report = detector.postprocess(&outputs).unwrap();
//!
//! assert_eq!(report.detections.len(), 1);
//! assert_eq!(report.detections[0].label, "person");
//! ```

pub mod assemble;
pub mod classes;
pub mod config;
pub mod decode;
pub mod detector;
pub mod error;
pub mod geom;
pub mod nms;
pub mod normalize;
pub mod preprocess;
pub mod tensor;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, Level};

pub use assemble::{Detection, DetectionReport};
pub use classes::ClassTable;
pub use config::{DetectorConfig, InputSize};
pub use detector::{Detector, InferenceProvider};
pub use error::DetectError;

/// The yolopost CLI application.
#[derive(Parser)]
#[command(name = "yolopost")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode, suppress and normalize captured network outputs.
    Postprocess(PostprocessArgs),
}

/// Arguments for the postprocess subcommand.
#[derive(clap::Args)]
struct PostprocessArgs {
    /// JSON file holding the raw output tensors (array of tensors, each an
    /// array of rows).
    outputs: PathBuf,

    /// Optional class names file, one name per line.
    #[arg(long, value_name = "FILE")]
    classes: Option<PathBuf>,

    /// Confidence threshold (0.0 - 1.0).
    #[arg(long, default_value_t = config::DEFAULT_CONFIDENCE_THRESHOLD, env = "YOLOPOST_CONFIDENCE")]
    confidence: f32,

    /// Non-maximum suppression IoU threshold (0.0 - 1.0).
    #[arg(long, default_value_t = config::DEFAULT_IOU_THRESHOLD, env = "YOLOPOST_NMS")]
    nms: f32,

    /// Network input width in pixels.
    #[arg(long, default_value_t = config::DEFAULT_INPUT_SIDE, env = "YOLOPOST_WIDTH")]
    width: u32,

    /// Network input height in pixels.
    #[arg(long, default_value_t = config::DEFAULT_INPUT_SIDE, env = "YOLOPOST_HEIGHT")]
    height: u32,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the yolopost CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), DetectError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Postprocess(args)) => run_postprocess(args),
        None => {
            println!("yolopost {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Post-processing for YOLO-family object detectors.");
            println!();
            println!("Run 'yolopost --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // A subscriber installed by an embedding program takes precedence.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the postprocess subcommand.
fn run_postprocess(args: PostprocessArgs) -> Result<(), DetectError> {
    if !matches!(args.output.as_str(), "text" | "json") {
        return Err(DetectError::UnsupportedFormat(format!(
            "'{}' (supported: text, json)",
            args.output
        )));
    }

    let config = DetectorConfig::new(
        args.confidence,
        args.nms,
        InputSize::new(args.width, args.height),
    )?;
    let class_table = args
        .classes
        .as_deref()
        .map(ClassTable::load)
        .transpose()?;

    info!(
        outputs = %args.outputs.display(),
        input = %config.input_size(),
        confidence = config.confidence_threshold(),
        nms = config.iou_threshold(),
        classes = class_table.as_ref().map(ClassTable::len),
        "post-processing captured outputs"
    );

    let outputs = tensor::io_json::read_raw_outputs(&args.outputs)?;
    let detector = Detector::new(config, class_table);
    let report = detector.postprocess(&outputs)?;

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report).map_err(DetectError::ReportWrite)?;
            println!("{}", json);
        }
        _ => print!("{}", report),
    }

    Ok(())
}
