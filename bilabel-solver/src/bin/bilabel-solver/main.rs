mod result;

use std::io::stderr;
use std::io::stdin;
use std::io::IsTerminal;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use bilabel_solver::core::asserts::BILABEL_ASSERT_LEVEL_DEFINITION;
use bilabel_solver::core::asserts::BILABEL_ASSERT_MODERATE;
use bilabel_solver::core::convert_case::Case;
use bilabel_solver::core::statistics::configure_statistic_logging;
use bilabel_solver::core::statistics::log_statistic_postfix;
use bilabel_solver::core::statistics::should_log_statistics;
use bilabel_solver::options::OutputPolarity;
use bilabel_solver::options::SolverOptions;
use bilabel_solver::options::StartPolicy;
use bilabel_solver::LabellingSolver;
use bilabel_solver::RelationMatrix;
use clap::Parser;
use log::debug;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use relation_format::reader::parse_matrix;
use relation_format::writer::write_matrix;
use relation_format::MatrixFormat;
use result::BilabelError;
use result::BilabelResult;

/// Solved when no matrix is given on the command line or through stdin.
const SAMPLE: [[i64; 9]; 9] = [
    [1, 0, 0, 0, 0, 1, -1, -1, 0],
    [-1, 1, 1, 1, -1, -1, 0, 1, 1],
    [0, 0, 1, 1, 0, 0, 1, 1, 1],
    [-1, 0, 0, 1, -1, -1, 1, 1, 0],
    [0, 0, 0, -1, 1, 0, -1, -1, 0],
    [0, -1, 0, 0, 1, 1, -1, 0, -1],
    [0, 1, 0, 1, 0, -1, 1, 1, 0],
    [-1, 0, 1, 1, 0, -1, 1, 1, 0],
    [-1, 1, 0, 1, 0, 0, 0, 1, 1],
];

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about
)]
struct Args {
    /// The relation matrix, given as a nested list literal such as '[[1,1,0],[1,1,-1],[0,-1,1]]'.
    ///
    /// Cell (i, j) holds 1 if entities i and j have the same label, -1 if their labels differ,
    /// and 0 if nothing is known. The sized format ('n' followed by n*n values) is also accepted.
    #[arg(long, verbatim_doc_comment)]
    matrix: Option<String>,

    /// A file containing the relation matrix, in either the nested list or the sized format.
    ///
    /// Ignored when `--matrix` is given. When neither is given, the matrix is read from stdin if
    /// it is not a terminal; otherwise a built-in sample matrix is solved.
    #[arg(long, verbatim_doc_comment)]
    file: Option<PathBuf>,

    /// Which of the two labels is written as '1' in the output.
    #[arg(long, value_enum, default_value_t)]
    output_polarity: OutputPolarity,

    /// How the first entity of every independent group of entities is labelled.
    ///
    /// Possible values:
    ///  - 'fixed-start': it receives the first label, as entity 0 does,
    ///  - 'lexicographically-minimal': whichever labelling of the group renders smallest.
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    start_policy: StartPolicy,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging(
            "%% stat:",
            Some("%% stat-end"),
            Some(Case::Snake),
            Some(Box::new(stderr())),
        );
    }
    let level_filter = if verbose {
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
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            println!("INPUT_ERROR: {e}");
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> BilabelResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if BILABEL_ASSERT_LEVEL_DEFINITION >= BILABEL_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {BILABEL_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active."
        );
    }

    let matrix = read_input(&args)?;

    if log::log_enabled!(log::Level::Debug) {
        let mut rendered = vec![];
        write_matrix(&mut rendered, &matrix, MatrixFormat::Sized)?;
        debug!(
            "Solving the matrix\n{}",
            String::from_utf8_lossy(&rendered).trim_end()
        );
    }

    let mut solver = LabellingSolver::new(SolverOptions {
        output_polarity: args.output_polarity,
        start_policy: args.start_policy,
    });

    match solver.solve(&matrix) {
        Ok(labelling) => println!("{labelling}"),
        Err(contradiction) => {
            info!("No consistent labelling exists: {contradiction}");
            println!("IMPOSSIBLE");
        }
    }

    if should_log_statistics() {
        solver.log_statistics();
        log_statistic_postfix();
    }

    Ok(())
}

/// Reads the matrix from the first source which provides one: `--matrix`, `--file`, a non-blank
/// stdin which is not a terminal, and finally the built-in sample.
fn read_input(args: &Args) -> BilabelResult<RelationMatrix> {
    if let Some(matrix) = args.matrix.as_ref() {
        debug!("Reading the matrix from the command line");
        return Ok(parse_matrix(matrix)?);
    }

    if let Some(path) = args.file.as_ref() {
        debug!("Reading the matrix from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|reason| BilabelError::unreadable_file(path.display(), reason))?;
        return Ok(parse_matrix(&contents)?);
    }

    if !stdin().is_terminal() {
        let mut contents = String::new();
        let _ = stdin().read_to_string(&mut contents)?;

        if !contents.trim().is_empty() {
            debug!("Reading the matrix from stdin");
            return Ok(parse_matrix(&contents)?);
        }
    }

    debug!("No input given, solving the sample matrix");
    let sample = SAMPLE.iter().map(|row| row.to_vec()).collect();
    Ok(RelationMatrix::from_values(sample)?)
}
