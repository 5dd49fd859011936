//! Host-side helper.
//!
//! `logo-bar render` composites a local base PNG exactly as the page does and
//! writes the download file. `logo-bar serve` builds the WASM site and serves
//! `static/` locally.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::path::PathBuf;
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context, Result};
    use clap::{Parser, Subcommand};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use logo_bar::encode::decode_png;
    use logo_bar::{Compositor, CustomizerConfig, PatternStyle, StyleTable};

    #[derive(Parser)]
    #[command(name = "logo-bar", about = "Decorative bar customizer for the logo")]
    struct Cli {
        #[command(subcommand)]
        command: Cmd,
    }

    #[derive(Subcommand)]
    enum Cmd {
        /// Composite a bar onto a base PNG and write the result.
        Render {
            /// Base logo image (PNG).
            #[arg(long)]
            base: PathBuf,
            /// Output path; defaults to the download file name.
            #[arg(long)]
            out: Option<PathBuf>,
            /// Solid white bar, as on first page load.
            #[arg(long, conflicts_with = "style")]
            white: bool,
            /// Force one style instead of drawing from the weight table.
            #[arg(long)]
            style: Option<PatternStyle>,
            /// Seed for reproducible output.
            #[arg(long)]
            seed: Option<u64>,
        },
        /// Build the WASM bundle into static/pkg and serve static/.
        Serve {
            #[arg(long, default_value_t = 8000)]
            port: u16,
        },
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        match Cli::parse().command {
            Cmd::Render {
                base,
                out,
                white,
                style,
                seed,
            } => render(base, out, white, style, seed),
            Cmd::Serve { port } => serve(port),
        }
    }

    fn render(
        base: PathBuf,
        out: Option<PathBuf>,
        white: bool,
        style: Option<PatternStyle>,
        seed: Option<u64>,
    ) -> Result<()> {
        let mut config = CustomizerConfig::default();
        if let Some(style) = style {
            config.styles = StyleTable::only(style);
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let bytes = std::fs::read(&base).with_context(|| format!("reading {}", base.display()))?;
        let image = decode_png(&bytes).with_context(|| format!("decoding {}", base.display()))?;

        let mut compositor = Compositor::new(config, rng);
        compositor.request_render(white)?;
        compositor.asset_loaded(image)?;

        let download = compositor.download()?;
        let out = out.unwrap_or_else(|| PathBuf::from(&download.file_name));
        std::fs::write(&out, &download.bytes)
            .with_context(|| format!("writing {}", out.display()))?;
        log::info!("wrote {}", out.display());
        Ok(())
    }

    fn serve(port: u16) -> Result<()> {
        log::info!("building WASM pkg");
        let status = Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
            .context("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/)")?;
        if !status.success() {
            bail!("wasm-pack finished with errors");
        }

        log::info!("serving static/ at http://127.0.0.1:{port}");
        let status = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .status()
            .context("failed to start http server")?;
        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    host::run()
}

// The page entry point lives in the library's `wasm` module.
#[cfg(target_arch = "wasm32")]
fn main() {}
