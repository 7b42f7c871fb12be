// Wed Jan 15 2026 - Alex

use super::args::Args;
use super::dump::{ByteRole, MatchDump};
use crate::config::ScanConfig;
use crate::memory::MappedFile;
use crate::signature::Signature;
use crate::utils::{init_logger, parse_hex_list};
use anyhow::{anyhow, bail, Context};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub file: Option<PathBuf>,
    pub signature: String,
    pub window_offset: usize,
    pub window_length: usize,
    pub offset: Option<usize>,
    pub elapsed_us: u64,
    #[serde(skip)]
    pub dump: Option<MatchDump>,
}

impl ScanReport {
    pub fn found(&self) -> bool {
        self.offset.is_some()
    }
}

pub struct CommandHandler {
    config: ScanConfig,
    context: usize,
}

impl CommandHandler {
    /// Loads `--config` if given and layers the command line on top.
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => ScanConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ScanConfig::default(),
        };

        if let Some(file) = &args.file {
            config.file = Some(file.clone());
        }
        if let Some(offset) = args.offset {
            config.offset = offset;
        }
        if args.length.is_some() {
            config.length = args.length;
        }
        if let Some(unknown) = args.unknown {
            config.unknown_char = unknown;
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }
        config.strict |= args.strict;
        config.json_output |= args.json;
        config.color &= !args.no_color;

        config.validate()?;

        Ok(Self {
            config,
            context: args.context,
        })
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config, context: 0 }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn setup_logging(&self) {
        if !self.config.color {
            colored::control::set_override(false);
        }
        init_logger(self.config.level_filter());
    }

    pub fn execute(&self, args: &Args) -> anyhow::Result<ScanReport> {
        let signature = self.build_signature(args)?;
        let path = self.config.file.as_ref()
            .ok_or_else(|| anyhow!("No input file given"))?;

        let file = MappedFile::open(path)
            .with_context(|| format!("Failed to map {}", path.display()))?;
        log::info!("Scanning {} ({} bytes) for {}", file.path().display(), file.len(), signature);

        self.scan(&signature, &file)
    }

    pub fn build_signature(&self, args: &Args) -> anyhow::Result<Signature> {
        if let Some(pattern) = &args.pattern {
            let signature = if self.config.strict {
                Signature::from_hybrid_strict(pattern)
            } else {
                Signature::from_hybrid(pattern)
            };
            return signature.with_context(|| format!("Invalid pattern '{}'", pattern));
        }

        let Some(bytes) = &args.bytes else {
            bail!("Either --pattern or --bytes must be specified");
        };
        let bytes = parse_hex_list(bytes)
            .with_context(|| format!("Invalid byte list '{}'", bytes))?;

        if let Some(mask) = &args.mask {
            return Signature::from_masked_str(&bytes, mask, self.config.unknown_char)
                .with_context(|| format!("Invalid mask '{}'", mask));
        }

        match &args.wildcard {
            Some(wildcard) => {
                let wildcard = parse_hex_list(wildcard)
                    .ok()
                    .filter(|parsed| parsed.len() == 1)
                    .map(|parsed| parsed[0])
                    .ok_or_else(|| anyhow!("Invalid wildcard byte '{}'", wildcard))?;
                Ok(Signature::new(&bytes, wildcard))
            }
            None => bail!("--bytes needs either --mask or --wildcard"),
        }
    }

    /// Searches the configured window of `file`. The dump after a match may
    /// run past the window, up to the end of the file.
    pub fn scan(&self, signature: &Signature, file: &MappedFile) -> anyhow::Result<ScanReport> {
        let started = Instant::now();
        let offset = self.config.offset;
        let window = file.slice(offset, self.config.length)?;

        let found = signature.find(window).map(|at| offset + at);
        let elapsed = started.elapsed();
        log::debug!("Scanned 0x{:x} bytes in {:.2}ms", window.len(), elapsed.as_secs_f64() * 1000.0);

        let dump = found.map(|at| {
            let data = file.as_slice();
            let end = at.saturating_add(signature.len().max(self.context)).min(data.len());
            MatchDump::new(signature, &data[at..end], at)
        });

        Ok(ScanReport {
            file: Some(file.path().to_path_buf()),
            signature: signature.to_string(),
            window_offset: offset,
            window_length: window.len(),
            offset: found,
            elapsed_us: elapsed.as_micros() as u64,
            dump,
        })
    }

    pub fn print_report(&self, report: &ScanReport) -> anyhow::Result<()> {
        if self.config.json_output {
            println!("{}", serde_json::to_string_pretty(report)?);
            return Ok(());
        }

        println!("{} Signature: {}", "[*]".blue(), report.signature.cyan());
        println!(
            "{} Window: 0x{:x} - 0x{:x}",
            "[*]".blue(),
            report.window_offset,
            report.window_offset + report.window_length
        );

        match report.offset {
            Some(offset) => {
                println!("{} Found at 0x{:x}", "[+]".green(), offset);
                if let Some(dump) = report.dump.as_ref().filter(|_| self.context > 0) {
                    print!("{}", dump.render(|cell, role| match role {
                        ByteRole::Literal => cell.green().bold().to_string(),
                        ByteRole::Wildcard => cell.yellow().to_string(),
                        ByteRole::Context => cell.dimmed().to_string(),
                    }));
                }
            }
            None => println!("{} Not found", "[-]".yellow()),
        }

        Ok(())
    }
}
