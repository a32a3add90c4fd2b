use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use scaffold_cli::{describe, init_logging, ArtifactWriter};
use scaffold_decl::{Declaration, DeclarationSource, SourceRoot};
use scaffold_synth::{Generator, GeneratorConfig};
use std::path::PathBuf;

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("source-root")
                .long("source-root")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the package tree"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .required(true)
                .help("Fully qualified name of the type under test"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

fn cli() -> Command {
    Command::new("scaffold")
        .version(scaffold_cli::VERSION)
        .about("Branch-aware unit-test skeleton synthesis for Java types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            source_args(Command::new("generate").about("Generate a test skeleton"))
                .arg(
                    Arg::new("methods")
                        .long("methods")
                        .help("Regular expression a method name must fully match"),
                )
                .arg(
                    Arg::new("no-branches")
                        .long("no-branches")
                        .action(ArgAction::SetTrue)
                        .help("Only emit parameter permutation cases"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML generator configuration"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output root; the skeleton goes to stdout when omitted"),
                ),
        )
        .subcommand(source_args(
            Command::new("inspect").about("Show what the generator sees in a type"),
        ))
}

fn load(args: &ArgMatches) -> Result<Declaration> {
    let (Some(root), Some(type_name)) = (
        args.get_one::<PathBuf>("source-root"),
        args.get_one::<String>("type"),
    ) else {
        anyhow::bail!("--source-root and --type are required");
    };

    SourceRoot::new(root)
        .load(type_name)
        .with_context(|| format!("failed to load {type_name} from {}", root.display()))
}

fn config(args: &ArgMatches) -> Result<GeneratorConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            GeneratorConfig::from_toml_str(&document)
                .with_context(|| format!("invalid configuration in {}", path.display()))?
        }
        None => GeneratorConfig::new(),
    };

    if let Some(pattern) = args.get_one::<String>("methods") {
        config = config.with_method_filter(pattern.as_str());
    }
    if args.get_flag("no-branches") {
        config = config.with_branch_cases(false);
    }
    Ok(config)
}

fn generate(args: &ArgMatches) -> Result<()> {
    let generator = Generator::new(config(args)?)?;
    let decl = load(args)?;
    let plan = generator.plan(&decl)?;

    match args.get_one::<PathBuf>("out") {
        Some(out) => {
            let path = ArtifactWriter::new(out)
                .write(&plan)
                .with_context(|| format!("failed to write skeleton under {}", out.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", plan.render()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("generate", args)) => {
            init_logging(args.get_flag("verbose"));
            generate(args)
        }
        Some(("inspect", args)) => {
            init_logging(args.get_flag("verbose"));
            print!("{}", describe(&load(args)?));
            Ok(())
        }
        _ => Ok(()),
    }
}
