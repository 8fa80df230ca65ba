use hsm_core::models::PersonId;
use hsm_engine::{Market, Termination};
use hsmatch::{bootstrap, loader, report};
use rstest::*;

const HEADER: &str = "Name of Apartment,Sq. Meters,Number of Windows,Window Directions,\
Total Window Size (sq. meters),Number of Bedrooms,Number of Bathrooms,Includes Dishwasher,\
Includes Washer,Includes Dryer,Allow Roommates";

#[fixture]
fn apartments() -> String {
    format!(
        "{HEADER}\n\
         Oak,50,4,South,5,1,1,False,False,False,False\n\
         Elm,40,3,North;West,4,1,1,False,False,False,False\n"
    )
}

fn report_of(people: &str, apartments: &str) -> (Vec<String>, hsm_engine::MatchOutcome) {
    let people = loader::read_people(people.as_bytes()).unwrap();
    let apartments = loader::read_apartments(apartments.as_bytes(), ";").unwrap();
    let outcome = Market::new(people, apartments).unwrap().run();

    let mut buffer = Vec::new();
    report::write(&mut buffer, &outcome.assignments).unwrap();
    let lines = String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    (lines, outcome)
}

#[rstest]
fn test_singles_take_turns(apartments: String) {
    let people = r#"ID,Name,AllowRoommates,Preferences
1,Ann,True,"{""bidAmount"": 1000, ""maxRoommates"": 0}"
2,Ben,False,"{""bidAmount"": 600}"
"#;
    let (lines, outcome) = report_of(people, &apartments);

    assert_eq!(outcome.termination, Termination::PeopleExhausted);
    assert_eq!(outcome.rounds, 2);
    assert!(outcome.unassigned.is_empty());
    assert_eq!(outcome.vacant.len(), 0);

    // Both apartments attract 1000 from Ann; the tie goes to the first listed
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Oak,1,Ann,600.0,1000.0,1000.0,600.0,Ann");
    assert_eq!(lines[2], "Elm,2,Ben,0.0,600.0,600.0,0.0,Ben");
}

#[rstest]
fn test_malformed_preferences_do_not_abort(apartments: String) {
    let people = r#"ID,Name,AllowRoommates,Preferences
1,Ann,True,"{""bidAmount"": 1000}"
2,Ben,True,"{""bidAmount"": 600"
"#;
    let (lines, outcome) = report_of(people, &apartments);

    // Ben falls back to empty preferences, which bid nothing
    assert_eq!(outcome.termination, Termination::NoBids);
    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.unassigned.len(), 1);
    assert_eq!(outcome.unassigned[0].id, PersonId::from("2"));
    assert_eq!(outcome.vacant.len(), 1);
    assert_eq!(outcome.vacant[0].name, "Elm");

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Oak,1,Ann,0.0,1000.0,1000.0,0.0,Ann");
}

#[rstest]
fn test_no_assignments_write_nothing(apartments: String) {
    let people = "ID,Name,AllowRoommates,Preferences\n1,Ann,True,{}\n";
    let (lines, outcome) = report_of(people, &apartments);

    assert_eq!(outcome.termination, Termination::NoBids);
    assert!(lines.is_empty());
}

#[test]
fn test_missing_column_is_fatal() {
    let people = "ID,Name,Preferences\n1,Ann,{}\n";
    assert!(matches!(
        loader::read_people(people.as_bytes()),
        Err(loader::LoadError::MissingColumn {
            column: "AllowRoommates",
            ..
        })
    ));
}

#[test]
fn test_sample_tables_match() {
    let mut people = Vec::new();
    bootstrap::write_people(&mut people, &bootstrap::dummy_people()).unwrap();
    let mut apartments = Vec::new();
    bootstrap::write_apartments(&mut apartments, &bootstrap::sample_apartments(), ";").unwrap();

    let (lines, outcome) = report_of(
        std::str::from_utf8(&people).unwrap(),
        std::str::from_utf8(&apartments).unwrap(),
    );

    assert!(!outcome.assignments.is_empty());
    assert_eq!(lines.len(), 1 + outcome.assignments.iter().map(|a| a.group.len()).sum::<usize>());
    for record in &outcome.assignments {
        approx::assert_abs_diff_eq!(record.total_payment(), record.second_bid, epsilon = 1e-6);
        assert!(record.second_bid <= record.winning_bid);
    }
}
