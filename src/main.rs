use anyhow::Context;
use clap::{Parser, Subcommand};

mod axis;
mod diagnostics;
mod model;
mod render;
mod results;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "bench-results-plot")]
#[command(about = "Plot per-label benchmark timings against input size", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a line chart (one line per label) as a self-contained HTML page.
    Plot {
        /// Results file with `<label> <size> <time>` lines.
        #[arg(long, default_value = "results_parsed")]
        input: String,

        #[arg(short = 'o', long, default_value = "results.html")]
        out: String,

        /// Only plot labels matching this regex.
        #[arg(long)]
        only: Option<String>,

        #[arg(long)]
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Plot {
            input,
            out,
            only,
            title,
        } => {
            // 1) Options and axis, checked before touching the input.
            let mut options = model::ChartOptions::default();
            if let Some(pattern) = only {
                options.only = Some(
                    regex::Regex::new(&pattern)
                        .with_context(|| format!("bad --only pattern {:?}", pattern))?,
                );
            }
            if let Some(title) = title {
                options.title = title;
            }
            let axis = axis::AxisConfig::default();
            axis.validate()?;

            // 2) Parse + align results.
            let aligned = results::parse_results_file(&input)?;

            // 3) Pair with the x-axis.
            let data = model::build_chart_data(&aligned, &axis, &options)?;

            // 4) Render HTML.
            let html = render::render_html_chart(&data)?;
            std::fs::write(&out, html).with_context(|| format!("write chart {}", out))?;
            println!("Wrote {} ({} of {} labels)", out, data.series.len(), aligned.len());
        }
    }

    Ok(())
}
