use std::io::stdin;
use std::io::IsTerminal;
use std::io::Read;
use std::io::Write;

use bilabel_solver::grid_walk::count_unique_cells;
use bilabel_solver::grid_walk::parse_points;
use bilabel_solver::grid_walk::visited_cells;
use bilabel_solver::grid_walk::GridCell;
use clap::Parser;
use log::debug;
use log::error;
use log::LevelFilter;

const SAMPLE_POINTS: [GridCell; 10] = [
    GridCell::new(17, 4),
    GridCell::new(32, 19),
    GridCell::new(6, 39),
    GridCell::new(0, 33),
    GridCell::new(20, 34),
    GridCell::new(38, 8),
    GridCell::new(21, 18),
    GridCell::new(32, 35),
    GridCell::new(4, 16),
    GridCell::new(20, 11),
];

/// Counts the distinct grid cells visited when walking in straight lines between waypoints.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The waypoints, such as '[[0,0],[4,2],[6,6]]'; the outer brackets may be omitted.
    ///
    /// When not given, the waypoints are read from stdin if it is not a terminal; otherwise a
    /// built-in sample of ten waypoints is walked.
    #[arg(long, verbatim_doc_comment)]
    points: Option<String>,

    /// Logs the parsed waypoints and every visited cell to stderr.
    #[arg(long)]
    debug: bool,
}

fn configure_logging(debug: bool) {
    let level_filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    configure_logging(args.debug);

    let text = match read_input(&args) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read stdin: {e}");
            None
        }
    };

    let points = match text.as_deref().map(parse_points) {
        None => SAMPLE_POINTS.to_vec(),
        Some(Ok(points)) => points,
        Some(Err(e)) => {
            eprintln!("INPUT_ERROR: {e}");
            println!("{}", SAMPLE_POINTS.len());
            return;
        }
    };

    debug!("Parsed points: {points:?}");
    println!("{}", count_unique_cells(&points));

    if log::log_enabled!(log::Level::Debug) {
        let cells = visited_cells(&points);
        debug!("Visited {} unique cells: {cells:?}", cells.len());
    }
}

/// The waypoint text from a non-empty `--points`, or from stdin when it is not a terminal and not
/// blank.
fn read_input(args: &Args) -> std::io::Result<Option<String>> {
    if let Some(points) = args.points.as_ref().filter(|points| !points.is_empty()) {
        return Ok(Some(points.clone()));
    }

    if stdin().is_terminal() {
        return Ok(None);
    }

    let mut contents = String::new();
    let _ = stdin().read_to_string(&mut contents)?;

    Ok((!contents.trim().is_empty()).then_some(contents))
}
