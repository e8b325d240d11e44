//! Builds and serves the counter starter templates.

mod bundle;
mod check;
mod server;
mod variant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use bundle::{BundleOptions, Bundler};
use check::Summary;
use variant::Variant;

#[derive(Parser)]
#[command(name = "devserver")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a template to wasm and stage it under target/www/<variant>
    Build {
        #[arg(short, long, value_enum, env = "DEVSERVER_VARIANT", default_value_t = Variant::Component)]
        variant: Variant,

        /// Build with the release profile
        #[arg(long)]
        release: bool,

        /// Also write precompressed .gz copies of every file
        #[arg(long)]
        gzip: bool,
    },

    /// Build every template and print a PASS/FAIL summary
    Check {
        /// Build with the release profile
        #[arg(long)]
        release: bool,

        /// Also write precompressed .gz copies of every file
        #[arg(long)]
        gzip: bool,
    },

    /// Serve a built template
    Serve {
        #[arg(short, long, value_enum, env = "DEVSERVER_VARIANT", default_value_t = Variant::Component)]
        variant: Variant,

        /// Address to listen on
        #[arg(short, long, env = "DEVSERVER_BIND", default_value = "0.0.0.0:8001")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match Cli::parse().command {
        Commands::Build {
            variant,
            release,
            gzip,
        } => {
            let options = BundleOptions {
                variant,
                release,
                gzip,
            };
            let report = tokio::task::spawn_blocking(move || Bundler::for_workspace().bundle(&options))
                .await?
                .with_context(|| format!("failed to build the {variant} template"))?;
            info!(
                "built {} files ({} bytes) into {} in {:.2?}",
                report.files,
                report.total_bytes,
                report.out_dir.display(),
                report.elapsed
            );
        }
        Commands::Check { release, gzip } => {
            let results = tokio::task::spawn_blocking(move || {
                let bundler = Bundler::for_workspace();
                check::check_all(&Variant::ALL, |variant| {
                    bundler.bundle(&BundleOptions {
                        variant,
                        release,
                        gzip,
                    })
                })
            })
            .await?;
            let summary = Summary(&results);
            print!("{summary}");
            if summary.failed() > 0 {
                anyhow::bail!("{} of {} templates failed to build", summary.failed(), results.len());
            }
        }
        Commands::Serve { variant, bind } => {
            server::run(&bind, variant)
                .await
                .with_context(|| format!("server on {bind} stopped"))?;
        }
    }

    Ok(())
}
