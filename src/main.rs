// src/main.rs

use clap::{Parser, Subcommand};
use log::{info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

use delivery_delay_render::annotations::{
    delay_description, pattern_description, sequence_table, APP_SUBTITLE, APP_TITLE,
    DELAYED_INTERPRETATION, DELAY_PROPERTY_LATEX, FOOTER, INTRODUCTION,
    REAL_DATA_INTERPRETATION, REGULAR_INTERPRETATION, Z_TRANSFORM_LATEX,
};
use delivery_delay_render::config::{RealDataConfig, ScheduleConfig, Section};
use delivery_delay_render::constants::{
    DATA_DELAY_DEFAULT, DATA_DELAY_MAX, DELAY_DEFAULT, DELAY_MAX, MAX_EXTERNAL_SEQUENCE_LEN,
    PREVIEW_ROWS, STEPS_DEFAULT, STEPS_MAX, STEPS_MIN,
};
use delivery_delay_render::data_input::{select_numeric_column, CsvTable};
use delivery_delay_render::error::DataError;
use delivery_delay_render::plot_functions::plot_delayed::plot_delayed;
use delivery_delay_render::plot_functions::plot_real_data::plot_real_data;
use delivery_delay_render::plot_functions::plot_regular::plot_regular;
use delivery_delay_render::signal::{build_sequence, delay_sequence, Pattern, Sequence};

// --- CLI Arguments ---
#[derive(Parser, Debug)]
#[command(version, about = APP_TITLE, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory the PNG plots are written to
    #[arg(short, long, default_value = ".", global = true)]
    output_dir: PathBuf,

    /// File name prefix for plots (defaults to the CSV file stem, or "delivery")
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Print the text report only, without rendering plots
    #[arg(long, global = true)]
    no_plot: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe the delivery schedule models
    Intro,
    /// Model 1: regular (on-time) delivery schedule x[n]
    Regular {
        /// Number of time steps (N)
        #[arg(short = 'n', long, default_value_t = STEPS_DEFAULT as u16,
              value_parser = clap::value_parser!(u16).range(STEPS_MIN as i64..=STEPS_MAX as i64))]
        steps: u16,

        /// Pattern type
        #[arg(short, long, value_enum, default_value_t = Pattern::Constant)]
        pattern: Pattern,
    },
    /// Model 2: delayed delivery schedule y[n] = x[n - k]
    Delayed {
        /// Number of time steps (N)
        #[arg(short = 'n', long, default_value_t = STEPS_DEFAULT as u16,
              value_parser = clap::value_parser!(u16).range(STEPS_MIN as i64..=STEPS_MAX as i64))]
        steps: u16,

        /// Delay k in time steps
        #[arg(short = 'k', long, default_value_t = DELAY_DEFAULT as u16,
              value_parser = clap::value_parser!(u16).range(0..=DELAY_MAX as i64))]
        delay: u16,

        /// Pattern type
        #[arg(short, long, value_enum, default_value_t = Pattern::Constant)]
        pattern: Pattern,
    },
    /// Delay a numeric column of a CSV dataset
    Data {
        /// CSV dataset
        input: PathBuf,

        /// Numeric column used as the sequence (defaults to the first numeric column)
        #[arg(short, long)]
        column: Option<String>,

        /// Delay k in time steps
        #[arg(short = 'k', long, default_value_t = DATA_DELAY_DEFAULT as u16,
              value_parser = clap::value_parser!(u16).range(0..=DATA_DELAY_MAX as i64))]
        delay: u16,
    },
}

struct OutputSettings<'a> {
    dir: &'a Path,
    prefix: String,
    render: bool,
}

impl OutputSettings<'_> {
    fn plot_path(&self, section: Section) -> PathBuf {
        self.dir.join(format!("{}_{}.png", self.prefix, section.file_tag()))
    }
}

fn print_section_header(section: Section) {
    println!("\n=== {} ===", section.header());
}

fn run_introduction() {
    print_section_header(Section::Introduction);
    println!("{INTRODUCTION}");
    println!("\nSections:");
    for section in Section::ALL {
        println!("  - {}", section.menu_label());
    }
}

fn run_regular(config: &ScheduleConfig, output: &OutputSettings) -> Result<(), Box<dyn Error>> {
    print_section_header(Section::RegularDelivery);
    info!(
        "Building {} steps with pattern '{}'",
        config.steps, config.pattern
    );
    let (_, x) = build_sequence(config.steps, config.pattern);

    println!("{}", pattern_description(config.pattern));
    println!("{}", sequence_table(&x, None));
    println!("\n{Z_TRANSFORM_LATEX}");
    println!("{REGULAR_INTERPRETATION}");

    if output.render {
        plot_regular(&x, &output.plot_path(Section::RegularDelivery), APP_TITLE)?;
    }
    Ok(())
}

fn run_delayed(config: &ScheduleConfig, output: &OutputSettings) -> Result<(), Box<dyn Error>> {
    print_section_header(Section::DelayedDelivery);
    info!(
        "Building {} steps with pattern '{}', delay k = {}",
        config.steps, config.pattern, config.delay
    );
    let (_, x) = build_sequence(config.steps, config.pattern);
    let y = delay_sequence(&x, config.delay);

    println!("{}", delay_description(config.delay));
    println!("{}", sequence_table(&x, Some(&y)));
    println!("\n{DELAY_PROPERTY_LATEX}");
    println!("{DELAYED_INTERPRETATION}");

    if output.render {
        plot_delayed(&x, &y, &output.plot_path(Section::DelayedDelivery), APP_TITLE)?;
    }
    Ok(())
}

fn run_real_data(
    input: &Path,
    config: &RealDataConfig,
    output: &OutputSettings,
) -> Result<(), Box<dyn Error>> {
    print_section_header(Section::RealData);
    let table = CsvTable::from_path(input)?;

    println!("Dataset Preview:");
    println!("{}", table.preview_table(PREVIEW_ROWS));

    let column = match select_numeric_column(&table, config.column.as_deref()) {
        Ok(column) => column,
        Err(DataError::NoNumericColumns) => {
            warn!("{}", DataError::NoNumericColumns);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("\nNumeric columns: {}", table.numeric_column_names().join(", "));

    let x = Sequence::from_source(&column, config.max_len);
    if x.len() < table.len() {
        info!(
            "Column '{}' truncated from {} to {} entries",
            x.name(),
            table.len(),
            x.len()
        );
    }
    let y = delay_sequence(&x, config.delay);

    println!(
        "Selected column '{}' ({} entries), delay k = {}",
        x.name(),
        x.len(),
        config.delay
    );
    println!("{}", sequence_table(&x, Some(&y)));
    println!("\n{REAL_DATA_INTERPRETATION}");

    if output.render {
        plot_real_data(&x, &y, &output.plot_path(Section::RealData), APP_TITLE)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    println!("{APP_TITLE}");
    println!("{APP_SUBTITLE}");

    let prefix = args.prefix.clone().unwrap_or_else(|| match &args.command {
        Some(Commands::Data { input, .. }) => input
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned(),
        _ => "delivery".to_string(),
    });
    let output = OutputSettings {
        dir: &args.output_dir,
        prefix,
        render: !args.no_plot,
    };
    if output.render && !output.dir.is_dir() {
        std::fs::create_dir_all(output.dir)?;
    }

    match args.command.unwrap_or(Commands::Intro) {
        Commands::Intro => run_introduction(),
        Commands::Regular { steps, pattern } => {
            let config = ScheduleConfig {
                steps: steps as usize,
                pattern,
                ..Default::default()
            };
            config.validate()?;
            run_regular(&config, &output)?;
        }
        Commands::Delayed {
            steps,
            delay,
            pattern,
        } => {
            let config = ScheduleConfig {
                steps: steps as usize,
                delay: delay as usize,
                pattern,
            };
            config.validate()?;
            run_delayed(&config, &output)?;
        }
        Commands::Data {
            input,
            column,
            delay,
        } => {
            let config = RealDataConfig {
                column,
                delay: delay as usize,
                max_len: MAX_EXTERNAL_SEQUENCE_LEN,
            };
            config.validate()?;
            run_real_data(&input, &config, &output)?;
        }
    }

    println!("\n---");
    println!("{FOOTER}");
    Ok(())
}
