//! Compiles a template to wasm and stages everything the browser needs under
//! `target/www/<variant>`.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

use flate2::Compression;
use flate2::write::GzEncoder;
use log::{debug, info};
use thiserror::Error;

use crate::variant::Variant;

const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        source: io::Error,
    },

    #[error("{tool} failed ({status})")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
    },

    #[error("build artifact not found: {}", .0.display())]
    MissingArtifact(PathBuf),
}

pub type Result<T> = std::result::Result<T, BundleError>;

#[derive(Debug, Clone, Copy)]
pub struct BundleOptions {
    pub variant: Variant,
    pub release: bool,
    pub gzip: bool,
}

#[derive(Debug)]
pub struct BundleReport {
    pub out_dir: PathBuf,
    pub files: usize,
    pub total_bytes: u64,
    pub elapsed: Duration,
}

pub struct Bundler {
    workspace: PathBuf,
}

impl Bundler {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// Bundler rooted at the workspace this binary was built from.
    pub fn for_workspace() -> Self {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self::new(manifest_dir.parent().unwrap_or(manifest_dir))
    }

    pub fn target_dir(&self) -> PathBuf {
        self.workspace.join("target")
    }

    pub fn out_dir(&self, variant: Variant) -> PathBuf {
        self.target_dir().join("www").join(variant.dir_name())
    }

    pub fn wasm_artifact(&self, variant: Variant, release: bool) -> PathBuf {
        let profile = if release { "release" } else { "debug" };
        self.target_dir()
            .join(WASM_TARGET)
            .join(profile)
            .join(format!("{}.wasm", variant.package()))
    }

    pub fn bundle(&self, options: &BundleOptions) -> Result<BundleReport> {
        let started = Instant::now();
        let variant = options.variant;
        let out_dir = self.out_dir(variant);

        info!("building the {variant} template");
        self.compile(variant, options.release)?;

        let wasm = self.wasm_artifact(variant, options.release);
        if !wasm.is_file() {
            return Err(BundleError::MissingArtifact(wasm));
        }

        if out_dir.exists() {
            fs::remove_dir_all(&out_dir)?;
        }
        fs::create_dir_all(&out_dir)?;

        run_tool(
            "wasm-bindgen",
            Command::new("wasm-bindgen")
                .arg("--out-dir")
                .arg(&out_dir)
                .arg("--target")
                .arg("web")
                .arg(&wasm),
        )?;
        self.stage_index(variant, &out_dir)?;

        if options.gzip {
            let compressed = gzip_dir(&out_dir)?;
            debug!("compressed {compressed} files");
        }

        let (files, total_bytes) = dir_size(&out_dir)?;
        Ok(BundleReport {
            out_dir,
            files,
            total_bytes,
            elapsed: started.elapsed(),
        })
    }

    fn compile(&self, variant: Variant, release: bool) -> Result<()> {
        let mut cargo = Command::new(env!("CARGO"));
        cargo
            .current_dir(&self.workspace)
            .arg("build")
            .arg("-p")
            .arg(variant.package())
            .arg("--target")
            .arg(WASM_TARGET)
            .arg("--target-dir")
            .arg(self.target_dir());
        if release {
            cargo.arg("--release");
        }
        run_tool("cargo", &mut cargo)
    }

    /// Copies the template's `index.html` next to the generated bindings.
    pub fn stage_index(&self, variant: Variant, out_dir: &Path) -> Result<PathBuf> {
        let source = self.workspace.join(variant.package()).join("index.html");
        let target = out_dir.join("index.html");
        fs::copy(&source, &target)?;
        Ok(target)
    }
}

fn run_tool(tool: &'static str, command: &mut Command) -> Result<()> {
    debug!("running {command:?}");
    let status = command
        .status()
        .map_err(|source| BundleError::Spawn { tool, source })?;
    if !status.success() {
        return Err(BundleError::ToolFailed { tool, status });
    }
    Ok(())
}

/// Writes a `.gz` sibling for every regular file under `dir`, descending
/// into subdirectories, and returns how many were written. Existing `.gz`
/// files are left alone.
pub fn gzip_dir(dir: &Path) -> Result<usize> {
    let mut written = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            written += gzip_dir(&path)?;
            continue;
        }
        if path.extension().is_some_and(|e| e == "gz") {
            continue;
        }

        let mut gz_name = path.file_name().unwrap_or_default().to_os_string();
        gz_name.push(".gz");
        let gz_path = path.with_file_name(gz_name);

        let mut input = File::open(&path)?;
        let mut encoder = GzEncoder::new(File::create(&gz_path)?, Compression::new(9));
        io::copy(&mut input, &mut encoder)?;
        encoder.finish()?;
        written += 1;
    }
    Ok(written)
}

/// Number of files and total size in bytes of everything under `dir`.
pub fn dir_size(dir: &Path) -> Result<(usize, u64)> {
    let mut files = 0;
    let mut bytes = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_dir() {
            let (nested_files, nested_bytes) = dir_size(&entry.path())?;
            files += nested_files;
            bytes += nested_bytes;
        } else {
            files += 1;
            bytes += metadata.len();
        }
    }
    Ok((files, bytes))
}
