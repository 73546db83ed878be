//! `sumcheck verify` – check a directory against its manifest.

use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use sumcheck_core::config::SumcheckConfig;
use sumcheck_core::manifest;
use sumcheck_core::verify::{Report, Status, Verifier};
use sumcheck_core::Algorithm;

/// Resolved `verify` arguments; `None` falls back to config.
#[derive(Debug, Clone)]
pub struct VerifyArgs {
    pub dir: PathBuf,
    pub manifest: Option<PathBuf>,
    pub algorithm: Option<Algorithm>,
    pub chunk_size: Option<usize>,
    pub json: bool,
}

impl VerifyArgs {
    fn manifest_path(&self, cfg: &SumcheckConfig) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.dir.join(&cfg.manifest_name))
    }

    fn verifier(&self, cfg: &SumcheckConfig) -> Verifier {
        let mut v = Verifier::from(cfg);
        if let Some(a) = self.algorithm {
            v.algorithm = a;
        }
        if let Some(n) = self.chunk_size {
            v.chunk_size = n;
        }
        v
    }
}

pub fn run_verify(cfg: &SumcheckConfig, args: &VerifyArgs) -> Result<()> {
    let manifest_path = args.manifest_path(cfg);
    let name = manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| manifest_path.display().to_string());
    if !manifest_path.is_file() {
        if manifest_path.parent() == Some(args.dir.as_path()) {
            bail!("{} not found in selected directory.", name);
        }
        bail!("manifest {} not found.", manifest_path.display());
    }

    let verifier = args.verifier(cfg);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.json {
        writeln!(out, "Reading {}...", name)?;
    }
    let manifest = manifest::read_manifest(&manifest_path)?;
    if !args.json {
        writeln!(out, "Checking files...\n")?;
    }
    let report = verifier.verify(&args.dir, &manifest);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize outcomes")?;
        writeln!(out, "{json}")?;
    } else {
        render_text(&mut out, &report)?;
    }
    out.flush()?;

    let summary = report.summary();
    if summary.failed() > 0 {
        bail!("{} of {} files failed verification", summary.failed(), summary.total());
    }
    Ok(())
}

/// One block per outcome; both checksums only for MISMATCH.
pub(crate) fn render_text<W: Write>(w: &mut W, report: &Report) -> io::Result<()> {
    for o in report.outcomes() {
        writeln!(w, "{}: {}", o.filename(), o.status())?;
        if o.status() == Status::Mismatch {
            writeln!(w, "  Computed: {}", o.computed().unwrap_or_default())?;
            writeln!(w, "  Expected: {}", o.expected())?;
        }
        writeln!(w)?;
    }
    writeln!(w, "Done.")?;
    writeln!(w, "{}", report.summary())?;
    Ok(())
}
