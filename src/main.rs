//! Career matcher: rank career paths for a personal profile

use career_matcher::catalog::CareerCatalog;
use career_matcher::cli::{self, CatalogAction, Cli, Commands, ConfigAction};
use career_matcher::config::Config;
use career_matcher::error::{CareerMatcherError, Result};
use career_matcher::input::manager::ProfileLoader;
use career_matcher::input::validation::profile_warnings;
use career_matcher::matching::MatchEngine;
use career_matcher::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use career_matcher::output::report::{format_salary, MatchReport};
use clap::Parser;
use log::{error, info, warn};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // `config reset` must work on a file that no longer parses or validates,
    // and `config show`/`set` must let the user see and repair one.
    let loaded = match &cli.command {
        Commands::Config {
            action: Some(ConfigAction::Reset),
        } => Config::reset_at(&config_path),
        Commands::Config { .. } => Config::read_from(&config_path),
        _ => Config::load_from(&config_path),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Match {
            profile,
            catalog,
            output,
            save,
            top,
            detailed,
            clamp,
        } => {
            cli::validate_file_extension(&profile, &["json", "toml"])
                .map_err(CareerMatcherError::UnsupportedFormat)?;

            let format = match output {
                Some(value) => cli::parse_output_format(&value).map_err(CareerMatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let catalog = load_catalog(catalog.as_deref().or(config.matching.catalog_path.as_deref()))?;
            let mut loader = ProfileLoader::new();
            let profile_data = loader.load(&profile)?;

            for hint in profile_warnings(&profile_data, &catalog) {
                warn!("{}", hint);
            }

            let mut engine = MatchEngine::from_config(&catalog, &config.matching);
            if let Some(n) = top {
                if n == 0 {
                    return Err(CareerMatcherError::InvalidInput(
                        "--top must be at least 1".to_string(),
                    ));
                }
                engine = engine.with_top_n(n);
            }
            if clamp {
                engine = engine.with_clamped_composite(true);
            }

            let report = MatchReport::generate(&engine, &profile_data);
            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let content = generator.generate_report(&report, &format)?;

            match save {
                Some(target) => {
                    let target = if target.is_dir() {
                        target.join(suggest_filename(&format, &profile.to_string_lossy(), false))
                    } else {
                        target
                    };
                    save_report_to_file(&content, &target)?;
                    info!("Report saved to {}", target.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Catalog { catalog, action } => {
            let catalog = load_catalog(catalog.as_deref().or(config.matching.catalog_path.as_deref()))?;

            match action {
                CatalogAction::List => {
                    println!("📚 {} careers\n", catalog.len());
                    for career in catalog.careers() {
                        println!(
                            "  {:<30} {} ({}, {}{})",
                            career.id,
                            career.title,
                            career.industry,
                            career.growth_outlook,
                            if career.emerging_role { ", emerging" } else { "" }
                        );
                    }
                }

                CatalogAction::Show { id } => {
                    let career = catalog.require(&id)?;
                    println!("💼 {} [{}]\n", career.title, career.id);
                    println!("{}\n", career.description);
                    println!("Industry: {}", career.industry);
                    println!("Experience level: {}", career.experience_level);
                    println!("Growth outlook: {}", career.growth_outlook);
                    println!("Emerging role: {}", if career.emerging_role { "yes" } else { "no" });
                    println!(
                        "Salary: {} entry / {} mid / {} senior",
                        format_salary(career.average_salary.entry),
                        format_salary(career.average_salary.mid),
                        format_salary(career.average_salary.senior)
                    );
                    print_list("Technical skills", &career.required_skills.technical);
                    print_list("Soft skills", &career.required_skills.soft);
                    print_list("Education", &career.education_requirements);
                    print_list("Work environment", &career.work_environment);
                    print_list("Future skills", &career.future_skills);
                    print_list("Certifications", catalog.certifications_for(&career.id));
                    print_list("Projects", catalog.projects_for(&career.id));
                    print_list("Networking", catalog.networking_for(&career.id));
                }

                CatalogAction::Vocabulary => {
                    let vocabulary = catalog.vocabulary();
                    print_list("Technical skills", &vocabulary.technical_skills);
                    print_list("Soft skills", &vocabulary.soft_skills);
                    print_list("Industries", &vocabulary.industries);
                    print_list("Work environments", &vocabulary.work_environments);
                    print_list("Values", &vocabulary.values);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                if let Err(e) = config.validate() {
                    warn!("Configuration is invalid and will be rejected by `match`: {}", e);
                }
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| CareerMatcherError::OutputFormatting(e.to_string()))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                println!("✅ Configuration reset to defaults");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<CareerCatalog> {
    match path {
        Some(path) => {
            info!("Loading career catalog from {}", path.display());
            CareerCatalog::from_path(path)
        }
        None => Ok(CareerCatalog::builtin()),
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", label);
    for item in items {
        println!("  • {}", item);
    }
}

