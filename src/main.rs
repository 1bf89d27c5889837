use anyhow::{Context, Result};
use heredity::pedigree::{
    common::{
        interface::ScenarioMaker,
        setup::{CommandLineOptions, OutputFormat, parse_configuration_options},
    },
    inference::{Inferencer, report::PosteriorReport},
    model::{Evidence, Family, ProbabilityTables, loader::load_family},
    scenarios::ScenarioMakerFactory,
};
use heredity::{print_blue, print_green, print_red};
use log::{info, warn};

fn load_family_from_options(options: &CommandLineOptions) -> Result<Family> {
    if let Some(path) = &options.data_file {
        return load_family(path).with_context(|| format!("failed to load family from {}", path));
    }
    let name = options
        .scenario_name
        .as_deref()
        .context("either a data file or --scenario is required")?;
    let maker = ScenarioMakerFactory::new_shared(name, options.seed)?;
    info!("Using scenario {}", maker.description());
    Ok(maker.build_family()?)
}

fn load_tables(options: &CommandLineOptions) -> Result<ProbabilityTables> {
    match &options.tables_file {
        Some(path) => ProbabilityTables::load_from_file(path)
            .with_context(|| format!("failed to load probability tables from {}", path)),
        None => Ok(ProbabilityTables::default()),
    }
}

fn parse_observations(options: &CommandLineOptions) -> Result<Evidence> {
    let mut evidence = Evidence::new();
    for text in &options.observations {
        let (name, has_trait) = Evidence::parse_observation(text)?;
        evidence.observe(&name, has_trait);
    }
    Ok(evidence)
}

fn run(options: &CommandLineOptions) -> Result<()> {
    let family = load_family_from_options(options)?;
    let tables = load_tables(options)?;
    let extra = parse_observations(options)?;
    if family.len() > 10 {
        warn!(
            "{} people means {} worlds to enumerate, this may take a while",
            family.len(),
            6u64.saturating_pow(family.len() as u32)
        );
    }

    let (posteriors, stats) = Inferencer::new(&tables)
        .with_max_individuals(options.max_individuals)
        .run_with_evidence(&family, &extra)
        .context("inference failed")?;
    let report = PosteriorReport::new(&options.source_label(), stats, posteriors);

    match options.output_format {
        OutputFormat::Table => {
            print_blue!("Posteriors for {}", report.source);
            print!("{}", report.people.render_marginal_table(options.precision));
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = &options.output_file {
        report.save_to_file(path)?;
        print_green!("Report written to {}", path);
    }
    Ok(())
}

fn main() {
    let options = parse_configuration_options();
    if let Err(e) = run(&options) {
        print_red!("error: {:#}", e);
        std::process::exit(1);
    }
}
