use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use polyray::geom2::rand::{draw_queries, draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polyray::geom2::Coord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "polyray")]
#[command(about = "Point-in-polygon queries over JSON polygon files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Coordinate type used to parse and evaluate the input.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Numeric {
    I64,
    F64,
}

impl Numeric {
    fn as_str(self) -> &'static str {
        match self {
            Numeric::I64 => "i64",
            Numeric::F64 => "f64",
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Test every query point against every polygon
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Numeric::F64)]
        numeric: Numeric,
        /// Output file; results go to stdout when absent
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random star-shaped polygon plus query points as a `check` input
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 100)]
        queries: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            input,
            numeric,
            out,
        } => match numeric {
            Numeric::I64 => check::<i64>(&input, numeric, out.as_deref()),
            Numeric::F64 => check::<f64>(&input, numeric, out.as_deref()),
        },
        Action::Sample {
            seed,
            index,
            vertices,
            queries,
            out,
        } => sample(ReplayToken { seed, index }, vertices, queries, &out),
        Action::Report => report(),
    }
}

fn check<T>(input: &Path, numeric: Numeric, out: Option<&Path>) -> Result<()>
where
    T: Coord + Serialize + DeserializeOwned,
{
    let file = io::read_query_file::<T>(input)?;
    let set = io::build_set(&file.polygons)?;
    let invalid = set.iter().filter(|p| !p.is_valid()).count();
    tracing::info!(
        input = %input.display(),
        numeric = numeric.as_str(),
        polygons = set.len(),
        invalid,
        queries = file.queries.len(),
        "check"
    );
    let results = io::evaluate(&set, &file.queries);
    let hits = results
        .results
        .iter()
        .filter(|r| r.inside.iter().any(|&b| b))
        .count();
    tracing::info!(hits, "check_done");

    match out {
        Some(out) => {
            io::write_json(out, &results)?;
            let prov = provenance::Provenance::new(
                "check",
                json!({
                    "input": input.to_string_lossy(),
                    "numeric": numeric.as_str(),
                    "polygons": set.len(),
                    "queries": file.queries.len(),
                }),
            );
            provenance::write_sidecar(out, prov)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}

fn sample(tok: ReplayToken, vertices: usize, queries: usize, out: &Path) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, vertices, queries, out = %out.display(), "sample");
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..StarCfg::default()
    };
    let poly = draw_star_polygon(&cfg, tok);
    let file = io::QueryFile {
        polygons: vec![poly.vertices().iter().map(|&p| p.into()).collect()],
        queries: draw_queries(poly.bounding_box(), queries, tok.next())
            .into_iter()
            .map(<[f64; 2]>::from)
            .collect(),
    };
    io::write_json(out, &file)?;
    let prov = provenance::Provenance::new(
        "sample",
        json!({
            "seed": tok.seed,
            "index": tok.index,
            "vertices": vertices,
            "queries": queries,
        }),
    );
    provenance::write_sidecar(out, prov)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "polyray_version": polyray::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
