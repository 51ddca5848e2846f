//! Terminal output, GitHub Actions workflow commands and step outputs.

use crate::EnvConfig;
use crate::env_config::GITHUB_OUTPUT;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    github_actions: bool,
    output_file: Option<PathBuf>,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            github_actions: self.github_actions,
            output_file: self.output_file.clone(),
        }
    }
}

impl OutputManager {
    /// Create an output manager that speaks workflow commands when running in Actions
    pub fn from_env(env: &EnvConfig) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            github_actions: env.is_github_actions(),
            output_file: env.get(GITHUB_OUTPUT).map(PathBuf::from),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
        let _ = write!(&mut buffer, "ℹ");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {}", message);
        self.bufwtr.print(&buffer)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        let _ = write!(&mut buffer, "✓");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {}", message);
        self.bufwtr.print(&buffer)
    }

    /// Print an error message.
    ///
    /// In Actions the message becomes an `::error::` annotation on stdout.
    pub fn error(&self, message: &str) {
        if self.github_actions {
            println!("::error::{}", escape_data(message));
            return;
        }

        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();

        if buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true)).is_err()
            || write!(&mut buffer, "✗").is_err()
            || buffer.reset().is_err()
            || buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red))).is_err()
            || writeln!(&mut buffer, " {}", message).is_err()
            || buffer.reset().is_err()
            || bufwtr.print(&buffer).is_err()
        {
            // Stderr failed - fallback to stdout as last resort
            println!("[STDERR ERROR] ✗ {}", message);
        }
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "    {}", message);
        self.bufwtr.print(&buffer)
    }

    /// Set a step output.
    ///
    /// Appends `name=value` to the `GITHUB_OUTPUT` file when there is one,
    /// otherwise prints it.
    pub fn set_output(&self, name: &str, value: &str) -> std::io::Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)
            }
            None => self.indent(&format!("{}: {}", name, value)),
        }
    }

    /// Whether workflow commands are emitted
    pub fn is_github_actions(&self) -> bool {
        self.github_actions
    }
}

/// Escape a workflow command message (`%`, CR and LF)
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Initialize logging.
///
/// `RUST_LOG` controls the filter. In Actions, debug records of this crate are
/// written as `::debug::` workflow commands so they show up when step debug
/// logging is enabled.
pub fn init_logging(env: &EnvConfig) {
    let mut builder = env_logger::Builder::from_default_env();

    if env.is_github_actions() {
        builder
            .filter_module("release_asset_upload", log::LevelFilter::Debug)
            .target(env_logger::Target::Stdout)
            .format(|buf, record| match record.level() {
                log::Level::Debug | log::Level::Trace => {
                    writeln!(buf, "::debug::{}", escape_data(&record.args().to_string()))
                }
                log::Level::Warn => {
                    writeln!(buf, "::warning::{}", escape_data(&record.args().to_string()))
                }
                _ => writeln!(buf, "{}", record.args()),
            });
    }

    let _ = builder.try_init();
}
