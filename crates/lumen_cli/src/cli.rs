use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{BitDepth, RenderConfig};

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Output channel depth
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Depth {
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

impl From<Depth> for BitDepth {
    fn from(depth: Depth) -> Self {
        match depth {
            Depth::Eight => BitDepth::Eight,
            Depth::Sixteen => BitDepth::Sixteen,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A recursive Monte Carlo path tracer")]
pub struct Args {
    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 256)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 256)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, short = 'd', default_value_t = 10)]
    pub max_depth: u32,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(long, short = 'j')]
    pub workers: Option<usize>,

    /// Base random seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Bits per output channel
    #[arg(long, value_enum, default_value = "16")]
    pub bit_depth: Depth,

    /// Output file path (.png or .ppm)
    #[arg(short, long, default_value = "out.png")]
    pub output: String,
}

impl Args {
    /// Map the arguments onto a render configuration.
    pub fn render_config(&self) -> RenderConfig {
        let config = RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_quality(self.samples_per_pixel, self.max_depth)
            .with_seed(self.seed)
            .with_bit_depth(self.bit_depth.into());

        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lumen"]);
        let config = args.render_config();

        assert_eq!(config.width, 512);
        assert_eq!(config.height, 256);
        assert_eq!(config.samples_per_pixel, 256);
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.bit_depth, BitDepth::Sixteen);
        assert!(config.workers >= 1);
        assert_eq!(args.output, "out.png");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lumen", "--width", "64", "--height", "32", "-s", "4", "-d", "3", "-j", "2", "--seed", "9",
            "--bit-depth", "8", "-o", "frame.ppm",
        ]);
        let config = args.render_config();

        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!((config.samples_per_pixel, config.max_depth), (4, 3));
        assert_eq!(config.workers, 2);
        assert_eq!(config.seed, 9);
        assert_eq!(config.bit_depth, BitDepth::Eight);
        assert_eq!(args.output, "frame.ppm");
    }

    #[test]
    fn test_zero_workers_reaches_validation() {
        let args = Args::parse_from(["lumen", "-j", "0"]);
        assert!(args.render_config().validate().is_err());
    }
}
