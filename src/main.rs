use clap::{Parser, Subcommand, ValueEnum};

mod calldata;
mod catalog;
mod render;
mod scan;
mod selector;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "selector-check")]
#[command(about = "Derive operation selectors and attribute an observed one", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print selectors for a catalog and check a target against it (default).
    Check {
        /// JSON catalog; the built-in blocklist catalog is used when omitted.
        #[arg(long = "catalog")]
        catalog_path: Option<String>,

        /// Selector to attribute, overrides the catalog's target.
        #[arg(long)]
        target: Option<String>,

        /// Signature printed as the reference value, overrides the catalog's.
        #[arg(long)]
        reference: Option<String>,

        #[arg(long, value_enum, default_value_t)]
        algorithm: selector::HashAlgorithm,

        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },

    /// Print the selector of each signature given.
    Derive {
        #[arg(long, value_enum, default_value_t)]
        algorithm: selector::HashAlgorithm,

        #[arg(required = true)]
        signatures: Vec<String>,
    },

    /// Print call data for a single-address operation.
    Calldata {
        #[arg(long, value_enum, default_value_t = selector::HashAlgorithm::Keccak256)]
        algorithm: selector::HashAlgorithm,

        signature: String,

        address: String,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or(Commands::Check {
        catalog_path: None,
        target: None,
        reference: None,
        algorithm: selector::HashAlgorithm::default(),
        format: Format::default(),
    });

    match cmd {
        Commands::Check {
            catalog_path,
            target,
            reference,
            algorithm,
            format,
        } => {
            // 1) Load catalog, apply overrides, validate.
            let mut spec = match &catalog_path {
                Some(path) => catalog::CatalogSpec::from_file(path)?,
                None => catalog::CatalogSpec::builtin(),
            };
            if target.is_some() {
                spec.target = target;
            }
            if reference.is_some() {
                spec.reference = reference;
            }
            let validated = spec.validate_and_build()?;
            log::debug!(
                "scanning {} signatures with {}",
                validated.signatures.len(),
                algorithm
            );

            // 2) Scan.
            let report = scan::scan(&validated, algorithm);

            // 3) Render.
            let out = match format {
                Format::Text => render::render_text_report(&report)?,
                Format::Json => render::render_json_report(&report)?,
            };
            print!("{}", out);
        }
        Commands::Derive {
            algorithm,
            signatures,
        } => {
            for sig in &signatures {
                println!("{}: {}", sig, selector::derive_selector(sig, algorithm));
            }
        }
        Commands::Calldata {
            algorithm,
            signature,
            address,
        } => {
            let selector = selector::derive_selector(&signature, algorithm);
            let address = calldata::parse_address(&address)?;
            let data = calldata::encode_address_call(selector, &address);
            println!("{}", calldata::to_hex(&data));
        }
    }

    Ok(())
}
