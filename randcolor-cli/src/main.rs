use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use randcolor::{ColorInfo, ColorModel};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "randcolor",
    about = "Generate and convert colors between hex, HSL, rgb() and web-safe form",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random color
    Random {
        /// Seed the generator for a reproducible color
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Describe a color given as red, green and blue channels (clamped to 0-255)
    Convert {
        #[arg(allow_negative_numbers = true)]
        red: i64,

        #[arg(allow_negative_numbers = true)]
        green: i64,

        #[arg(allow_negative_numbers = true)]
        blue: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Describe a color given as #RRGGBB or #RGB
    Hex {
        /// Hex color, with or without the leading '#'
        value: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print the full info record as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (color, output) = match cli.command {
        Commands::Random { seed, output } => {
            let mut color = ColorModel::default();
            match seed {
                Some(seed) => {
                    debug!(seed, "using seeded generator");
                    color.randomize_with(&mut StdRng::seed_from_u64(seed));
                }
                None => color.randomize(),
            }
            (color, output)
        }

        Commands::Convert {
            red,
            green,
            blue,
            output,
        } => (ColorModel::new(red, green, blue), output),

        Commands::Hex { value, output } => {
            let color = ColorModel::from_hex(&value)
                .with_context(|| format!("could not parse '{value}' as a hex color"))?;
            (color, output)
        }
    };

    let info = color.info();

    if output.json {
        let text = serde_json::to_string_pretty(&info).context("failed to serialize color")?;
        println!("{text}");
    } else {
        print!("{}", render_plain(&info));
    }

    Ok(())
}

fn render_plain(info: &ColorInfo) -> String {
    format!(
        "hex:     {}\nhsl:     {}\nrgb:     {}\nwebsafe: {}\n",
        info.hex.value, info.hsl.value, info.rgb.value, info.websafe.value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_plain() {
        let info = ColorModel::new(255, 0, 0).info();
        assert_eq!(
            render_plain(&info),
            "hex:     #FF0000\nhsl:     hsl(0, 1%, 0.5%)\nrgb:     rgb(255, 0, 0)\nwebsafe: #FF0000\n"
        );
    }

    #[test]
    fn test_parse_convert_with_negative_channel() {
        let cli = Cli::try_parse_from(["randcolor", "convert", "-5", "300", "10"]).unwrap();
        match cli.command {
            Commands::Convert {
                red, green, blue, ..
            } => assert_eq!((red, green, blue), (-5, 300, 10)),
            _ => panic!("Expected convert command"),
        }
    }

    #[test]
    fn test_parse_random_with_seed_and_json() {
        let cli = Cli::try_parse_from(["randcolor", "random", "--seed", "9", "--json"]).unwrap();
        match cli.command {
            Commands::Random { seed, output } => {
                assert_eq!(seed, Some(9));
                assert!(output.json);
            }
            _ => panic!("Expected random command"),
        }
    }
}
