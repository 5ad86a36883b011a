use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planarity::api::{
    decide_with, draw_graph, fixtures, Certificate, DecideCfg, DisconnectedPolicy, Graph,
    NonPlanarReason, OrderDist, PlanarityResult, RandomGraphCfg, ReplayToken,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planarity checks for adjacency matrices, random graphs, and fixtures")]
struct Cmd {
    /// How graphs with several components are decided
    #[arg(long, value_enum, default_value_t = Policy::PerComponent)]
    policy: Policy,

    /// Per-graph time limit for the search stages, in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print verdicts as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide a graph given as an adjacency-matrix file (.json rows or .csv)
    Check {
        #[arg(long)]
        input: PathBuf,
        /// Also write the verdict row as JSON, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decide a batch of random graphs; optionally write verdicts plus provenance
    Random {
        #[arg(long, default_value_t = 3)]
        count: u64,
        #[arg(long, default_value_t = 5)]
        min_order: usize,
        #[arg(long, default_value_t = 10)]
        max_order: usize,
        #[arg(long, default_value_t = 0.5)]
        edge_prob: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Decide the built-in reference graphs (K5, K3,3, their subdivisions, K4)
    Fixtures,
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    PerComponent,
    WholeGraph,
    Reject,
}

impl From<Policy> for DisconnectedPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::PerComponent => DisconnectedPolicy::PerComponent,
            Policy::WholeGraph => DisconnectedPolicy::WholeGraph,
            Policy::Reject => DisconnectedPolicy::Reject,
        }
    }
}

/// Options shared by every subcommand.
#[derive(Clone, Copy)]
struct RunOpts {
    policy: Policy,
    timeout: Option<Duration>,
    json: bool,
}

impl RunOpts {
    /// The deadline starts counting when the graph's decision starts.
    fn decide_cfg(&self) -> DecideCfg {
        DecideCfg {
            disconnected: self.policy.into(),
            deadline: self.timeout.map(|t| Instant::now() + t),
            ..DecideCfg::default()
        }
    }
}

/// One verdict, as printed with `--json` and written by `random --out`.
#[derive(Debug, Serialize)]
struct VerdictRow {
    name: String,
    order: usize,
    size: usize,
    planar: bool,
    reason: Option<&'static str>,
    certificate: Option<CertificateRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replay: Option<ReplayRow>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind")]
enum CertificateRow {
    K5 {
        vertices: Vec<usize>,
        edges: Vec<[usize; 2]>,
    },
    K33 {
        left: Vec<usize>,
        right: Vec<usize>,
        edges: Vec<[usize; 2]>,
    },
}

#[derive(Debug, Serialize)]
struct ReplayRow {
    seed: u64,
    index: u64,
}

impl VerdictRow {
    fn new(name: impl Into<String>, g: &Graph, verdict: &PlanarityResult) -> Self {
        let reason = match verdict {
            PlanarityResult::Planar => None,
            PlanarityResult::NonPlanar { reason } => Some(match reason {
                NonPlanarReason::EdgeBound => "edge_bound",
                NonPlanarReason::DegreeBound => "degree_bound",
                NonPlanarReason::ForbiddenMinor(_) => "forbidden_minor",
            }),
        };
        Self {
            name: name.into(),
            order: g.order(),
            size: g.size(),
            planar: verdict.is_planar(),
            reason,
            certificate: verdict.certificate().map(CertificateRow::from),
            replay: None,
        }
    }
}

impl From<&Certificate> for CertificateRow {
    fn from(c: &Certificate) -> Self {
        let ids = |vs: &[planarity::VertexId]| -> Vec<usize> { vs.iter().map(|v| v.0).collect() };
        let edges: Vec<[usize; 2]> = c.edges().into_iter().map(|(u, v)| [u.0, v.0]).collect();
        match c {
            Certificate::K5 { vertices } => CertificateRow::K5 {
                vertices: ids(vertices.as_slice()),
                edges,
            },
            Certificate::K33 { left, right } => CertificateRow::K33 {
                left: ids(left.as_slice()),
                right: ids(right.as_slice()),
                edges,
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let opts = RunOpts {
        policy: cmd.policy,
        timeout: cmd.timeout_ms.map(Duration::from_millis),
        json: cmd.json,
    };
    match cmd.action {
        Action::Check { input, out } => check(&input, out.as_deref(), opts),
        Action::Random {
            count,
            min_order,
            max_order,
            edge_prob,
            seed,
            out,
        } => {
            let cfg = RandomGraphCfg {
                order: OrderDist::Uniform {
                    min: min_order,
                    max: max_order,
                },
                edge_prob,
            };
            random(cfg, count, seed, out.as_deref(), opts)
        }
        Action::Fixtures => run_fixtures(opts),
        Action::Report => report(),
    }
}

fn check(input: &Path, out: Option<&Path>, opts: RunOpts) -> Result<()> {
    tracing::info!(input = %input.display(), policy = ?opts.policy, "check");
    let row = check_row(input, opts)?;
    if let Some(out) = out {
        let payload = provenance::Payload::new(serde_json::json!({
            "command": "check",
            "policy": format!("{:?}", opts.policy),
            "timeout_ms": opts.timeout.map(|t| t.as_millis() as u64),
        }))
        .with_input(input.display().to_string());
        write_json(out, std::slice::from_ref(&row), payload)?;
    }
    emit(&[row], opts)
}

fn check_row(input: &Path, opts: RunOpts) -> Result<VerdictRow> {
    let matrix = input::load_matrix(input)?;
    let g = Graph::from_adjacency(&matrix)
        .with_context(|| format!("building graph from {}", input.display()))?;
    let verdict = decide_with(&g, opts.decide_cfg())
        .with_context(|| format!("deciding {}", input.display()))?;
    Ok(VerdictRow::new(input.display().to_string(), &g, &verdict))
}

fn random(
    cfg: RandomGraphCfg,
    count: u64,
    seed: u64,
    out: Option<&Path>,
    opts: RunOpts,
) -> Result<()> {
    tracing::info!(count, seed, edge_prob = cfg.edge_prob, "random");
    let rows = random_rows(cfg, count, seed, opts)?;
    let planar = rows.iter().filter(|r| r.planar).count();
    tracing::info!(planar, non_planar = rows.len() - planar, "random_done");
    if let Some(out) = out {
        write_rows(out, &rows, cfg, count, seed, opts)?;
    }
    emit(&rows, opts)
}

fn random_rows(
    cfg: RandomGraphCfg,
    count: u64,
    seed: u64,
    opts: RunOpts,
) -> Result<Vec<VerdictRow>> {
    (0..count)
        .map(|index| -> Result<VerdictRow> {
            let sample = draw_graph(cfg, ReplayToken::new(seed, index));
            let verdict = decide_with(&sample.graph, opts.decide_cfg())
                .with_context(|| format!("deciding random graph seed={seed} index={index}"))?;
            tracing::debug!(index, order = sample.graph.order(), %verdict, "sample");
            let mut row = VerdictRow::new(format!("random-{index}"), &sample.graph, &verdict);
            row.replay = Some(ReplayRow {
                seed: sample.replay.seed,
                index: sample.replay.index,
            });
            Ok(row)
        })
        .collect()
}

fn write_rows(
    out: &Path,
    rows: &[VerdictRow],
    cfg: RandomGraphCfg,
    count: u64,
    seed: u64,
    opts: RunOpts,
) -> Result<()> {
    let (min_order, max_order) = match cfg.order {
        OrderDist::Fixed(n) => (n, n),
        OrderDist::Uniform { min, max } => (min, max),
    };
    let payload = provenance::Payload::new(serde_json::json!({
        "command": "random",
        "count": count,
        "seed": seed,
        "min_order": min_order,
        "max_order": max_order,
        "edge_prob": cfg.edge_prob,
        "policy": format!("{:?}", opts.policy),
        "timeout_ms": opts.timeout.map(|t| t.as_millis() as u64),
    }));
    write_json(out, rows, payload)
}

/// Verdict rows as a JSON array at `out`, plus `<stem>.provenance.json`.
fn write_json(out: &Path, rows: &[VerdictRow], payload: provenance::Payload) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(rows)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    Ok(())
}

fn run_fixtures(opts: RunOpts) -> Result<()> {
    let mut rows = Vec::new();
    for (name, g) in fixtures() {
        let verdict = decide_with(&g, opts.decide_cfg())
            .with_context(|| format!("deciding fixture {name}"))?;
        rows.push(VerdictRow::new(name, &g, &verdict));
    }
    emit(&rows, opts)
}

fn emit(rows: &[VerdictRow], opts: RunOpts) -> Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    for row in rows {
        println!("{}", render_row(row));
    }
    Ok(())
}

fn render_row(row: &VerdictRow) -> String {
    let verdict = match (row.reason, &row.certificate) {
        (None, _) => "planar".to_string(),
        (Some(_), Some(CertificateRow::K5 { vertices, .. })) => {
            format!("non-planar: K5 {vertices:?}")
        }
        (Some(_), Some(CertificateRow::K33 { left, right, .. })) => {
            format!("non-planar: K3,3 {left:?} | {right:?}")
        }
        (Some(reason), None) => format!("non-planar: {reason}"),
    };
    format!("{} n={} m={} {verdict}", row.name, row.order, row.size)
}

/// Build identity plus the defaults `check` and `random` run with.
fn report() -> Result<()> {
    let decide_cfg = DecideCfg::default();
    let sampler = RandomGraphCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "planarity_version": planarity::VERSION,
        "defaults": {
            "disconnected": format!("{:?}", decide_cfg.disconnected),
            "empty": format!("{:?}", decide_cfg.empty),
            "order": format!("{:?}", sampler.order),
            "edge_prob": sampler.edge_prob,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use planarity::api::{k33, k5, k5_subdivided};
    use tempfile::tempdir;

    fn opts() -> RunOpts {
        RunOpts {
            policy: Policy::PerComponent,
            timeout: None,
            json: true,
        }
    }

    #[test]
    fn cli_parses_global_flags_and_subcommands() {
        let cmd = Cmd::try_parse_from([
            "cli", "--policy", "reject", "--timeout-ms", "250", "random", "--count", "2",
        ])
        .unwrap();
        assert_eq!(cmd.policy, Policy::Reject);
        assert_eq!(cmd.timeout_ms, Some(250));
        assert!(matches!(cmd.action, Action::Random { count: 2, .. }));
    }

    #[test]
    fn rows_carry_reason_and_certificate() {
        let g = k5();
        let row = VerdictRow::new("K5", &g, &decide_with(&g, opts().decide_cfg()).unwrap());
        assert_eq!(row.reason, Some("edge_bound"));
        assert!(row.certificate.is_none());
        assert_eq!(render_row(&row), "K5 n=5 m=10 non-planar: edge_bound");

        let g = k33();
        let row = VerdictRow::new("K3,3", &g, &decide_with(&g, opts().decide_cfg()).unwrap());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["certificate"]["kind"], "K33");
        assert_eq!(json["certificate"]["left"], serde_json::json!([1, 2, 3]));
        let edges = json["certificate"]["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 9);
        assert_eq!(edges[0], serde_json::json!([1, 4]));
        assert!(json.get("replay").is_none());

        let g = k5_subdivided();
        let row = VerdictRow::new("sub", &g, &decide_with(&g, opts().decide_cfg()).unwrap());
        assert_eq!(render_row(&row), "sub n=6 m=11 non-planar: K5 [1, 2, 3, 4, 5]");
    }

    #[test]
    fn random_batch_is_reproducible_and_writes_sidecar() {
        let cfg = RandomGraphCfg::default();
        let a = random_rows(cfg, 4, 9, opts()).unwrap();
        let b = random_rows(cfg, 4, 9, opts()).unwrap();
        let as_json = |rows: &[VerdictRow]| serde_json::to_value(rows).unwrap();
        assert_eq!(as_json(&a), as_json(&b));
        assert!(a.iter().all(|r| (5..=10).contains(&r.order)));

        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("verdicts.json");
        write_rows(&out, &a, cfg, 4, 9, opts()).unwrap();
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written.as_array().map(|v| v.len()), Some(4));
        assert_eq!(written[0]["replay"]["seed"], 9);
        assert!(dir
            .path()
            .join("runs")
            .join("verdicts.provenance.json")
            .exists());
    }

    #[test]
    fn check_out_records_input_in_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("k33.json");
        std::fs::write(
            &input,
            "[[0,0,0,1,1,1],[0,0,0,1,1,1],[0,0,0,1,1,1],\
              [1,1,1,0,0,0],[1,1,1,0,0,0],[1,1,1,0,0,0]]",
        )
        .unwrap();
        let out = dir.path().join("k33.verdict.json");
        check(&input, Some(&out), opts()).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written[0]["planar"], false);
        assert_eq!(written[0]["certificate"]["kind"], "K33");
        let sidecar: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("k33.verdict.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["inputs"][0], input.display().to_string());
        assert_eq!(sidecar["params"]["command"], "check");
    }

    #[test]
    fn check_accepts_out_flag() {
        let cmd = Cmd::try_parse_from(["cli", "check", "--input", "g.csv", "--out", "v.json"])
            .unwrap();
        match cmd.action {
            Action::Check { input, out } => {
                assert_eq!(input, PathBuf::from("g.csv"));
                assert_eq!(out, Some(PathBuf::from("v.json")));
            }
            _ => panic!("expected check"),
        }
    }
}
