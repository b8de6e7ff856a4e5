use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use primetri::export::export_metapost;
use primetri::hull::triangulate;
use primetri::search::SearchCfg;
use primetri::sweep::{check_prime, sweep, SweepCfg};
use primetri::{Lat2, Triangle};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Prime triangle experiments: triangulation pictures and hypothesis sweeps")]
#[command(args_conflicts_with_subcommands = true)]
struct Cmd {
    // Without a subcommand, draw a picture.
    #[command(flatten)]
    picture: PictureArgs,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Write a MetaPost file with the lifted-hull triangulation of a triangle
    Picture(PictureArgs),
    /// Check every slope of one prime
    Check {
        #[arg(long)]
        prime: i64,
        /// Stop at the first degenerate slope and log it in full
        #[arg(long)]
        full_log: bool,
        /// Print the findings as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        search: SearchFlags,
    },
    /// Check every prime in a range; optionally write a CSV/Parquet table of findings
    Sweep {
        #[arg(long, default_value_t = 2)]
        from: i64,
        #[arg(long, default_value_t = 200)]
        to: i64,
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        search: SearchFlags,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct PictureArgs {
    /// MetaPost output format (png, svg, eps, ...)
    #[arg(default_value = "png")]
    format: String,
    #[arg(long, default_value = "triangulation.mp")]
    out: PathBuf,
    /// Counterclockwise vertices as x0,y0,x1,y1,x2,y2 (default: Craw's Example 2.1)
    #[arg(long, value_parser = parse_triangle, allow_hyphen_values = true)]
    triangle: Option<Triangle>,
}

#[derive(Args, Clone, Copy, Debug)]
struct SearchFlags {
    /// Only count parallelograms with no other interior point inside
    #[arg(long)]
    empty_parallelogram: bool,
    /// Only count unit-area parallelograms
    #[arg(long)]
    unit_area: bool,
}

impl From<SearchFlags> for SearchCfg {
    fn from(f: SearchFlags) -> Self {
        SearchCfg {
            require_empty_parallelogram: f.empty_parallelogram,
            require_unit_area: f.unit_area,
        }
    }
}

fn parse_triangle(s: &str) -> Result<Triangle, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<i64>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<i64>, String>>()?;
    let [x0, y0, x1, y1, x2, y2] = coords[..] else {
        return Err(format!("expected 6 coordinates, got {}", coords.len()));
    };
    Triangle::try_new(Lat2::new(x0, y0), Lat2::new(x1, y1), Lat2::new(x2, y2))
        .map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        None => picture(cmd.picture),
        Some(Action::Picture(args)) => picture(args),
        Some(Action::Check {
            prime,
            full_log,
            json,
            search,
        }) => check(prime, full_log, json, search.into()),
        Some(Action::Sweep {
            from,
            to,
            out,
            search,
        }) => run_sweep(from, to, out, search.into()),
        Some(Action::Report) => report(),
    }
}

fn picture(args: PictureArgs) -> Result<()> {
    let t = args.triangle.unwrap_or_else(primetri::craw_example);
    tracing::info!(%t, format = args.format, out = %args.out.display(), "picture");
    let faces = triangulate(&t);
    tracing::info!(faces = faces.len(), "triangulated");
    export_metapost(&args.out, &faces, &t, &args.format)
        .with_context(|| format!("writing {}", args.out.display()))?;
    let [v0, v1, v2] = t.vertices();
    write_sidecar(
        &args.out,
        Payload::new(
            "picture",
            json!({
                "format": args.format,
                "triangle": [[v0.x, v0.y], [v1.x, v1.y], [v2.x, v2.y]],
                "faces": faces.len()
            }),
        ),
    )?;
    Ok(())
}

fn check(prime: i64, full_log: bool, as_json: bool, search: SearchCfg) -> Result<()> {
    let cfg = SweepCfg {
        search,
        stop_at_first: full_log,
    };
    let report = check_prime(prime, cfg)?;
    if !report.hypothesis_holds() {
        tracing::warn!(p = prime, "hypothesis failed for at least one slope");
    }
    if as_json {
        let rows = table::rows(std::slice::from_ref(&report));
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("p = {prime}: degenerate slopes {:?}", report.slopes());
    }
    Ok(())
}

fn run_sweep(from: i64, to: i64, out: Option<PathBuf>, search: SearchCfg) -> Result<()> {
    tracing::info!(from, to, ?search, "sweep");
    let cfg = SweepCfg {
        search,
        stop_at_first: false,
    };
    let reports = sweep(from..=to, cfg);
    let rows = table::rows(&reports);
    let violated = reports.iter().filter(|r| !r.hypothesis_holds()).count();
    tracing::info!(
        primes = reports.len(),
        degenerate_slopes = rows.len(),
        primes_violating = violated,
        "sweep done"
    );
    if let Some(out) = out {
        table::write_rows(&out, &rows)?;
        write_sidecar(
            &out,
            Payload::new(
                "sweep",
                json!({
                    "from": from,
                    "to": to,
                    "require_empty_parallelogram": search.require_empty_parallelogram,
                    "require_unit_area": search.require_unit_area
                }),
            ),
        )?;
    }
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn bare_invocation_defaults_to_png_picture() {
        let cmd = Cmd::try_parse_from(["cli"]).unwrap();
        assert!(cmd.action.is_none());
        assert_eq!(cmd.picture.format, "png");
        assert_eq!(cmd.picture.out, PathBuf::from("triangulation.mp"));
        assert!(cmd.picture.triangle.is_none());
    }

    #[test]
    fn positional_format_is_accepted() {
        let cmd = Cmd::try_parse_from(["cli", "svg"]).unwrap();
        assert_eq!(cmd.picture.format, "svg");
    }

    #[test]
    fn triangle_flag_parses_and_validates() {
        assert_eq!(
            parse_triangle("0,0,-5,11,-1,0"),
            Ok(primetri::craw_example())
        );
        assert!(parse_triangle("0,0,0,1,1,0").unwrap_err().contains("counterclockwise"));
        assert!(parse_triangle("0,0,1").unwrap_err().contains("expected 6"));
        assert!(parse_triangle("0,0,x,1,1,0").is_err());
    }

    #[test]
    fn sweep_flags_map_to_search_cfg() {
        let cmd = Cmd::try_parse_from(["cli", "sweep", "--to", "50", "--unit-area"]).unwrap();
        match cmd.action {
            Some(Action::Sweep {
                from, to, search, ..
            }) => {
                assert_eq!((from, to), (2, 50));
                let cfg: SearchCfg = search.into();
                assert!(cfg.require_unit_area);
                assert!(!cfg.require_empty_parallelogram);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn picture_writes_metapost_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("craw.mp");
        picture(PictureArgs {
            format: "svg".into(),
            out: out.clone(),
            triangle: None,
        })
        .unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("outputformat:=\"svg\";"));
        assert_eq!(text.matches("draw ").count(), 11);
        assert!(dir.path().join("craw.provenance.json").exists());
    }

    #[test]
    fn check_rejects_composite() {
        let err = check(9, false, false, SearchCfg::default()).unwrap_err();
        assert!(err.to_string().contains("not prime"));
    }
}
