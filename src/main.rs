use std::rc::Rc;

use clap::Parser;
use refactor_kata::utils::{logger, validation::Validate};
use refactor_kata::{found_people, found_people_api, CliConfig, Department, Person, PersonRefactoring};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting refactor-kata demos");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Study one: replace the delegating manager getter with a direct
    // department reference.
    tracing::info!("Study 1: replace delegation with a direct reference");

    let department = Department::shared(&config.charge_code, &config.manager);

    let mut person = Person::new(config.person.clone());
    person.set_department(Rc::clone(&department));
    println!("before refactoring : {}", person.manager()?);

    let person_refactoring = PersonRefactoring::new(config.person.clone(), Rc::clone(&department));
    println!(
        "after refactoring  : {}",
        person_refactoring.department().borrow().manager()
    );

    // Study two: replace the hand-rolled candidate scan with the built-in
    // search over a membership set.
    tracing::info!("Study 2: replace the manual scan with the library search");

    let sample_rosters: Vec<Vec<String>> = if config.roster.is_empty() {
        vec![
            vec!["Beak".into(), "Don".into(), "Emily".into()],
            vec!["Beak".into(), "Emily".into()],
            vec!["Kent".into(), "Don".into(), "Emily".into()],
        ]
    } else {
        vec![config.roster.clone()]
    };

    for roster in &sample_rosters {
        println!("manual scan {:?} -> {:?}", roster, found_people(roster));
        println!("api search  {:?} -> {:?}", roster, found_people_api(roster));
    }

    tracing::info!("✅ Demos completed");

    Ok(())
}
