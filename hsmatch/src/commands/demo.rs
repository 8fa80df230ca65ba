use crate::{DemoArgs, bootstrap, loader::PersonRow};
use std::fs::{self, File};
use tracing::{Level, event};

/// Write an applicant table and an apartment listing into a directory.
pub fn demo(args: &DemoArgs) -> anyhow::Result<()> {
    fs::create_dir_all(&args.output_dir)?;

    let people = match args.random {
        Some(count) => bootstrap::random_people(count, args.seed)?
            .iter()
            .map(PersonRow::from)
            .collect(),
        None => bootstrap::dummy_people(),
    };

    let people_path = args.output_dir.join("peoplec.csv");
    bootstrap::write_people(File::create(&people_path)?, &people)?;

    let apartments_path = args.output_dir.join("apartment_data.csv");
    bootstrap::write_apartments(
        File::create(&apartments_path)?,
        &bootstrap::sample_apartments(),
        ";",
    )?;

    event!(
        Level::INFO,
        people = %people_path.display(),
        apartments = %apartments_path.display(),
        count = people.len(),
        "wrote sample tables"
    );
    Ok(())
}
