//! Metrics Binary
//!
//! Scores an observed measurement distribution against a mixture-of-Gaussians
//! target over the `2^n` outcomes of an `n`-qubit register.
//!
//! Options: --qubits, --mu, --sigma, --observed, --loss, --config

use anyhow::Context;
use clap::Parser;
use qcbm::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Compare a measured distribution against a Born machine target")]
struct Args {
    /// register width; the distributions have 2^qubits outcomes
    #[arg(long, default_value_t = 4)]
    qubits: usize,
    /// target component means (repeatable); defaults to the quartiles of the grid
    #[arg(long = "mu")]
    mus: Vec<f64>,
    /// target component widths (one per mean, or one shared)
    #[arg(long = "sigma")]
    sigmas: Vec<f64>,
    /// JSON counts {"0101": 12, ..} or probability array; uniform when absent
    #[arg(long)]
    observed: Option<PathBuf>,
    /// loss to report
    #[arg(long, value_enum, default_value_t = Which::All)]
    loss: Which,
    /// Sinkhorn temperature
    #[arg(long, default_value_t = SINKHORN_TEMPERATURE)]
    epsilon: Entropy,
    /// JSON array of loss specifications, overriding --loss and --epsilon
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Which {
    Mmd,
    Kl,
    Sinkhorn,
    All,
}

/// measurement file contents
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Observed {
    Counts(BTreeMap<String, usize>),
    Probs(Vec<Probability>),
}

impl Args {
    fn target(&self) -> anyhow::Result<Vec<Probability>> {
        let ref grid = bitstring_grid(self.qubits);
        let size = grid.len() as f64;
        let mus = match self.mus.is_empty() {
            true => vec![size / 4., 3. * size / 4.],
            false => self.mus.clone(),
        };
        let sigmas = match self.sigmas.is_empty() {
            true => vec![size / 8.],
            false => self.sigmas.clone(),
        };
        log::info!("target means {:?} widths {:?}", mus, sigmas);
        Ok(mixture_gaussian_pdf(grid, &mus, &sigmas)?)
    }
    fn observed(&self) -> anyhow::Result<Vec<Probability>> {
        let size = 1usize << self.qubits;
        let Some(ref path) = self.observed else {
            log::info!("no observation supplied, using uniform distribution");
            return Ok(vec![1. / size as Probability; size]);
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read observation {}", path.display()))?;
        match serde_json::from_str::<Observed>(&text)? {
            Observed::Counts(counts) => {
                log::info!("decoding {} distinct outcomes", counts.len());
                Ok(counts_to_probs(&counts, self.qubits)?)
            }
            Observed::Probs(probs) => Ok(normalize(&probs)),
        }
    }
    fn losses(&self) -> anyhow::Result<Vec<Loss>> {
        if let Some(ref path) = self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read loss config {}", path.display()))?;
            return Ok(serde_json::from_str(&text)?);
        }
        let sinkhorn = Loss::Sinkhorn {
            regularization: Regularization::from(self.epsilon),
        };
        Ok(match self.loss {
            Which::Mmd => vec![Loss::default()],
            Which::Kl => vec![Loss::Kl { eps: KL_CLIP }],
            Which::Sinkhorn => vec![sinkhorn],
            Which::All => vec![Loss::default(), Loss::Kl { eps: KL_CLIP }, sinkhorn],
        })
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    anyhow::ensure!(args.qubits < 24, "{} qubits is too many outcomes to tabulate", args.qubits);
    let target = args.target()?;
    let observed = args.observed()?;
    let valid = probs_to_bitstrings(&target, BITSTRING_THRESHOLD)
        .into_iter()
        .collect::<std::collections::HashSet<_>>();
    let support = probs_to_bitstrings(&observed, BITSTRING_THRESHOLD);
    log::info!("chi {:.4}", compute_chi(&support, &valid));
    let ref space = bitstring_grid(args.qubits);
    for loss in args.losses()? {
        let value = loss.evaluate(&observed, &target, Some(space.as_slice()))?;
        log::info!("{:<8} {:.6}", loss, value);
        println!("{}\t{}", loss, value);
    }
    Ok(())
}
