//! OpenEBS Tables CLI
//!
//! Inspects the static registry: report column sequences, cas-type and
//! component lookups, and unit conversions.

use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use openebs_tables::constant::{cas_type_for_component_name, component_name_for_cas_type};
use openebs_tables::util::{
    bytes_to_gb, bytes_to_kb, bytes_to_mb, cas_type_for_provisioner, format_capacity,
    parse_quantity, write_aligned,
};
use openebs_tables::{OutputFormat, ReportKind, Result, TableColumnDefinition};

// =============================================================================
// CLI Arguments
// =============================================================================

/// OpenEBS Tables - registry of CLI constants and report layouts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, env = "OUTPUT", value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the column sequence of a report, or list report kinds
    Columns {
        /// Report kind, e.g. cstor-pool-list
        report: Option<ReportKind>,
    },

    /// Resolve a cas type from a provisioner or controller component
    #[command(group(ArgGroup::new("source").required(true).args(["provisioner", "component"])))]
    CasType {
        #[arg(long)]
        provisioner: Option<String>,

        #[arg(long)]
        component: Option<String>,
    },

    /// Show the CSI controller component for a cas type
    Component {
        cas_type: String,
    },

    /// Convert a quantity (e.g. 10Gi) using the registry's unit constants
    Units {
        quantity: String,
    },
}

// =============================================================================
// Main
// =============================================================================

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args);
    debug!("openebs-tables {}", openebs_tables::VERSION);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Columns { report: Some(kind) } => {
            print_columns(&mut out, *kind, args.output)?;
        }
        Command::Columns { report: None } => {
            let kinds: Vec<&str> = ReportKind::ALL.iter().map(|k| k.as_str()).collect();
            emit(&mut out, args.output, &kinds, || {
                (
                    vec!["REPORT".to_string(), "COLUMNS".to_string()],
                    ReportKind::ALL
                        .iter()
                        .map(|k| vec![k.to_string(), k.columns().len().to_string()])
                        .collect(),
                )
            })?;
        }
        Command::CasType {
            provisioner,
            component,
        } => {
            let resolved = match (provisioner, component) {
                (Some(p), _) => cas_type_for_provisioner(p),
                (None, Some(c)) => cas_type_for_component_name(c),
                (None, None) => None,
            };
            return print_lookup(&mut out, resolved);
        }
        Command::Component { cas_type } => {
            return print_lookup(&mut out, component_name_for_cas_type(cas_type));
        }
        Command::Units { quantity } => {
            let bytes = parse_quantity(quantity)?;
            info!(quantity = %quantity, bytes, "converted quantity");
            print_units(&mut out, bytes, args.output)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// Output
// =============================================================================

fn print_columns<W: Write>(out: &mut W, kind: ReportKind, format: OutputFormat) -> Result<()> {
    let columns: &[TableColumnDefinition] = kind.columns();
    emit(out, format, &columns, || {
        (
            vec!["NAME".to_string(), "TYPE".to_string()],
            columns
                .iter()
                .map(|c| vec![c.name.to_string(), c.column_type.to_string()])
                .collect(),
        )
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnitsReport {
    bytes: u64,
    gb: f64,
    mb: f64,
    kb: f64,
    capacity: String,
}

fn print_units<W: Write>(out: &mut W, bytes: u64, format: OutputFormat) -> Result<()> {
    let report = UnitsReport {
        bytes,
        gb: bytes_to_gb(bytes),
        mb: bytes_to_mb(bytes),
        kb: bytes_to_kb(bytes),
        capacity: format_capacity(bytes),
    };
    emit(out, format, &report, || {
        (
            ["BYTES", "GB", "MB", "KB", "CAPACITY"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            vec![vec![
                report.bytes.to_string(),
                format!("{:.2}", report.gb),
                format!("{:.2}", report.mb),
                format!("{:.2}", report.kb),
                report.capacity.clone(),
            ]],
        )
    })
}

/// Lookup misses are reported on stderr with exit code 1, not as errors
fn print_lookup<W: Write>(out: &mut W, value: Option<&str>) -> Result<ExitCode> {
    match value {
        Some(v) => {
            writeln!(out, "{}", v)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("not found");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Write `value` as JSON/YAML, or the aligned text built by `text`
fn emit<W, T, F>(out: &mut W, format: OutputFormat, value: &T, text: F) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce() -> (Vec<String>, Vec<Vec<String>>),
{
    match format {
        OutputFormat::Table => {
            let (header, body) = text();
            write_aligned(out, &header, &body)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, value)?;
            Ok(())
        }
    }
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["openebs-tables", "-o", "json", "columns", "bd-list"]).unwrap();
        assert_eq!(args.output, OutputFormat::Json);
        assert!(matches!(
            args.command,
            Command::Columns { report: Some(ReportKind::BdList) }
        ));
    }

    #[test]
    fn test_args_reject_unknown_report() {
        assert!(Args::try_parse_from(["openebs-tables", "columns", "pools"]).is_err());
    }

    #[test]
    fn test_cas_type_requires_source() {
        assert!(Args::try_parse_from(["openebs-tables", "cas-type"]).is_err());
        assert!(Args::try_parse_from([
            "openebs-tables",
            "cas-type",
            "--provisioner",
            "cstor.csi.openebs.io"
        ])
        .is_ok());
    }

    #[test]
    fn test_print_columns_text() {
        let mut buf = Vec::new();
        print_columns(&mut buf, ReportKind::BdList, OutputFormat::Table).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "NAME        TYPE\nName        string\nCapacity    string\nState       string\n");
    }

    #[test]
    fn test_print_units_json() {
        let mut buf = Vec::new();
        print_units(&mut buf, 1024, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["bytes"], 1024);
        assert_eq!(value["kb"], 1.0);
        assert_eq!(value["capacity"], "1.00KiB");
    }

    #[test]
    fn test_print_lookup() {
        let mut buf = Vec::new();
        assert_eq!(print_lookup(&mut buf, Some("cstor")).unwrap(), ExitCode::SUCCESS);
        assert_eq!(buf, b"cstor\n");
        assert_eq!(print_lookup(&mut Vec::new(), None).unwrap(), ExitCode::FAILURE);
    }

    #[test]
    fn test_component_lookups_print() {
        let mut buf = Vec::new();
        let code = print_lookup(&mut buf, component_name_for_cas_type("jiva")).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(buf, b"openebs-jiva-csi-controller\n");

        let mut buf = Vec::new();
        let code = print_lookup(&mut buf, cas_type_for_component_name("openebs-cstor-csi-controller")).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(buf, b"cstor\n");

        let code = print_lookup(&mut Vec::new(), component_name_for_cas_type("localpv-zfs")).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }
}
