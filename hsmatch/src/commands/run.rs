use crate::{AppConfig, PathOrStd, RunArgs, bootstrap, loader, report};
use anyhow::Context as _;
use hsm_engine::Market;
use tracing::{Level, event};

/// Load the tables, run the market to completion and write the report.
pub fn run(args: &RunArgs) -> anyhow::Result<()> {
    let config = AppConfig::load(args.config.as_deref())?.with_args(args);

    let people_path = PathOrStd::from(config.input.people.as_path());
    if people_path.is_missing() {
        if !config.bootstrap.people {
            anyhow::bail!("applicant table {people_path} does not exist");
        }
        event!(
            Level::WARN,
            path = %people_path,
            "applicant table not found, writing the sample applicants"
        );
        bootstrap::write_people(people_path.write()?, &bootstrap::dummy_people())?;
    }

    let apartments_path = PathOrStd::from(config.input.apartments.as_path());
    if apartments_path.is_missing() {
        anyhow::bail!("apartment listing {apartments_path} does not exist");
    }

    let people = loader::read_people(people_path.read()?)
        .with_context(|| format!("loading {people_path}"))?;
    let apartments =
        loader::read_apartments(apartments_path.read()?, &config.input.direction_delimiter)
            .with_context(|| format!("loading {apartments_path}"))?;

    let outcome = Market::new(people, apartments)?.run();

    if outcome.assignments.is_empty() {
        event!(Level::INFO, "No assignments were made.");
        return Ok(());
    }

    for row in report::rows(&outcome.assignments) {
        event!(
            Level::INFO,
            apartment = %row.apartment_name,
            person = %row.person_name,
            payment = row.expected_payment,
            adjusted_bid = row.adjusted_bid,
            group = %row.group_members_in_winning_bid
        );
    }

    let output_path = PathOrStd::from(config.output.path.as_path());
    report::write(output_path.write()?, &outcome.assignments)?;
    event!(
        Level::INFO,
        path = %output_path,
        unassigned = outcome.unassigned.len(),
        vacant = outcome.vacant.len(),
        "assignment results saved"
    );

    Ok(())
}
