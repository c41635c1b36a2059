//! Post-build health check for the bundled site.
//!
//! Verifies the output of `dx bundle` under `./dist` and the scripts declared
//! in `./package.json`. Every check is tallied as passed, failed or warning;
//! the process exits non-zero iff at least one check failed.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use regex::Regex;
use serde_json::Value;
use walkdir::WalkDir;

/// Paths and thresholds the check runs against.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub dist_dir: PathBuf,
    pub index_html: PathBuf,
    pub assets_dir: PathBuf,
    /// Directories searched for JavaScript bundles. The wasm-bindgen glue of a
    /// Dioxus web bundle lands in `dist/wasm`, next to `dist/assets`.
    pub script_dirs: Vec<PathBuf>,
    pub manifest: PathBuf,
    /// Bundles above this size are reported as warnings.
    pub max_bundle_kb: f64,
    /// Markup fragments `index.html` must contain (case-insensitive), with display names.
    pub required_markup: Vec<(&'static str, &'static str)>,
    pub required_fields: Vec<(&'static str, &'static str)>,
    pub required_scripts: Vec<&'static str>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::rooted_at(".")
    }
}

impl CheckConfig {
    /// Default layout relative to `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let dist_dir = root.join("dist");
        Self {
            index_html: dist_dir.join("index.html"),
            assets_dir: dist_dir.join("assets"),
            script_dirs: vec![dist_dir.join("assets"), dist_dir.join("wasm")],
            dist_dir,
            manifest: root.join("package.json"),
            max_bundle_kb: 500.0,
            required_markup: vec![
                ("<html", "HTML tag"),
                ("<head", "HEAD tag"),
                ("<body", "BODY tag"),
                ("<script", "Script tag"),
            ],
            required_fields: vec![("name", "Package name"), ("version", "Package version")],
            required_scripts: vec!["dev", "build", "lint"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
}

impl Status {
    fn symbol(self) -> ColoredString {
        match self {
            Status::Success => "✓".green(),
            Status::Error => "✗".red(),
            Status::Warning => "⚠".yellow(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: u32,
    pub failed: u32,
    pub warnings: u32,
}

/// Result of a run. `aborted` is set when the build directory is missing and
/// nothing past the first check ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub tally: Tally,
    pub aborted: bool,
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        if self.aborted || self.tally.failed > 0 {
            1
        } else {
            0
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passed={} failed={} warnings={}",
            self.tally.passed, self.tally.failed, self.tally.warnings
        )
    }
}

pub struct HealthCheck<W: Write> {
    config: CheckConfig,
    out: W,
    tally: Tally,
}

impl<W: Write> HealthCheck<W> {
    pub fn new(config: CheckConfig, out: W) -> Self {
        Self {
            config,
            out,
            tally: Tally::default(),
        }
    }

    /// Runs every check in order and prints the summary.
    pub fn run(&mut self) -> Result<Report> {
        writeln!(self.out, "\n🏥 Running Health Checks...\n")?;

        writeln!(self.out, "📁 Checking build output...")?;
        let dist = self.config.dist_dir.clone();
        if !self.check_exists(&dist, "Build directory")? {
            return Ok(Report {
                tally: self.tally,
                aborted: true,
            });
        }

        writeln!(self.out, "\n📄 Checking HTML files...")?;
        let index = self.config.index_html.clone();
        if self.check_exists(&index, "index.html")? {
            self.check_markup(&index)?;
        }

        writeln!(self.out, "\n📦 Checking JavaScript bundles...")?;
        self.check_assets()?;

        writeln!(self.out, "\n📋 Checking package.json...")?;
        self.check_manifest()?;

        self.print_summary()?;
        Ok(Report {
            tally: self.tally,
            aborted: false,
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, status: Status, message: impl fmt::Display) -> Result<()> {
        match status {
            Status::Success => self.tally.passed += 1,
            Status::Error => self.tally.failed += 1,
            Status::Warning => self.tally.warnings += 1,
        }
        writeln!(self.out, "{} {}", status.symbol(), message)?;
        Ok(())
    }

    fn check_exists(&mut self, path: &Path, name: &str) -> Result<bool> {
        if path.exists() {
            self.record(Status::Success, format!("{name} exists"))?;
            Ok(true)
        } else {
            self.record(
                Status::Error,
                format!("{name} not found at {}", path.display()),
            )?;
            Ok(false)
        }
    }

    fn check_markup(&mut self, index: &Path) -> Result<()> {
        let content = match fs::read_to_string(index) {
            Ok(content) => content,
            Err(err) => {
                return self.record(Status::Error, format!("Cannot read index.html: {err}"));
            }
        };

        for (fragment, name) in self.config.required_markup.clone() {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(fragment)))?;
            if pattern.is_match(&content) {
                self.record(Status::Success, format!("{name} found in HTML"))?;
            } else {
                self.record(Status::Error, format!("{name} missing in HTML"))?;
            }
        }
        Ok(())
    }

    fn check_assets(&mut self) -> Result<()> {
        let assets = self.config.assets_dir.clone();
        if !assets.is_dir() {
            return self.record(Status::Error, "Assets directory not found");
        }

        let mut scripts = Vec::new();
        for dir in self.config.script_dirs.clone() {
            if dir.is_dir() {
                scripts.extend(self.files_with_extension(&dir, "js")?);
            }
        }
        let styles = self.files_with_extension(&assets, "css")?.len();

        if scripts.is_empty() {
            self.record(Status::Error, "No JavaScript bundles found")?;
        } else {
            self.record(
                Status::Success,
                format!("Found {} JavaScript bundle(s)", scripts.len()),
            )?;
        }

        if styles > 0 {
            self.record(Status::Success, format!("Found {styles} CSS file(s)"))?;
        } else {
            self.record(Status::Warning, "No CSS files found")?;
        }

        for script in scripts {
            self.check_bundle_size(&script)?;
        }
        Ok(())
    }

    /// Files under `dir` (nested folders included) with extension `ext`.
    /// Unreadable entries are reported as failures and skipped.
    fn files_with_extension(&mut self, dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.record(Status::Error, format!("Error checking assets: {err}"))?;
                    continue;
                }
            };
            if entry.file_type().is_file()
                && entry.path().extension().and_then(|e| e.to_str()) == Some(ext)
            {
                found.push(entry.into_path());
            }
        }
        Ok(found)
    }

    fn check_bundle_size(&mut self, path: &Path) -> Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(err) => return self.record(Status::Error, format!("Cannot stat {name}: {err}")),
        };

        let size_kb = bytes as f64 / 1024.0;
        let limit = self.config.max_bundle_kb;
        if size_kb > limit {
            self.record(
                Status::Warning,
                format!("{name} is {size_kb:.2}KB (exceeds {limit}KB recommended)"),
            )
        } else {
            self.record(Status::Success, format!("{name} size is {size_kb:.2}KB"))
        }
    }

    fn check_manifest(&mut self) -> Result<()> {
        let manifest = match load_manifest(&self.config.manifest) {
            Ok(manifest) => manifest,
            Err(err) => {
                return self.record(
                    Status::Error,
                    format!("Error reading package.json: {err:#}"),
                );
            }
        };

        for (field, label) in self.config.required_fields.clone() {
            match manifest.get(field).and_then(Value::as_str) {
                Some(value) if !value.is_empty() => {
                    self.record(Status::Success, format!("{label}: {value}"))?;
                }
                _ => self.record(Status::Error, format!("{label} missing"))?,
            }
        }

        let scripts = manifest.get("scripts").and_then(Value::as_object);
        for script in self.config.required_scripts.clone() {
            let defined = scripts
                .and_then(|s| s.get(script))
                .and_then(Value::as_str)
                .is_some_and(|cmd| !cmd.is_empty());
            if defined {
                self.record(Status::Success, format!("Script '{script}' defined"))?;
            } else {
                self.record(Status::Error, format!("Script '{script}' missing"))?;
            }
        }
        Ok(())
    }

    fn print_summary(&mut self) -> Result<()> {
        let rule = "=".repeat(50);
        let Tally {
            passed,
            failed,
            warnings,
        } = self.tally;

        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "{}", "📊 Health Check Summary".bold())?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{} Passed:   {passed}", Status::Success.symbol())?;
        writeln!(self.out, "{} Failed:   {failed}", Status::Error.symbol())?;
        writeln!(self.out, "{} Warnings: {warnings}", Status::Warning.symbol())?;
        writeln!(self.out, "{rule}\n")?;

        if failed > 0 {
            writeln!(self.out, "{}\n", "❌ Health check failed!".red().bold())?;
        } else if warnings > 0 {
            writeln!(
                self.out,
                "{}\n",
                "⚠️  Health check passed with warnings".yellow()
            )?;
        } else {
            writeln!(self.out, "{}\n", "✅ All health checks passed!".green().bold())?;
        }
        Ok(())
    }
}

fn load_manifest(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
