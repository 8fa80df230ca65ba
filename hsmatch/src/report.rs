//! The assignment report: one row per person housed.

use hsm_core::models::AssignmentRecord;
use serde::Serialize;
use std::io::Write;

/// One row of the assignment report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRow {
    pub apartment_name: String,
    #[serde(rename = "PersonID")]
    pub person_id: String,
    pub person_name: String,
    pub expected_payment: f64,
    pub adjusted_bid: f64,
    pub group_winning_bid: f64,
    pub second_highest_bid_for_apt: f64,
    pub group_members_in_winning_bid: String,
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Flatten the assignments into report rows, in assignment then group order
pub fn rows(assignments: &[AssignmentRecord]) -> Vec<ReportRow> {
    assignments
        .iter()
        .flat_map(|record| {
            let members = record.member_names().collect::<Vec<_>>().join(", ");
            record.shares.iter().map(move |(id, share)| ReportRow {
                apartment_name: record.apartment.name.clone(),
                person_id: id.to_string(),
                person_name: share.name.clone(),
                expected_payment: cents(share.payment),
                adjusted_bid: cents(share.adjusted_bid),
                group_winning_bid: cents(record.winning_bid),
                second_highest_bid_for_apt: cents(record.second_bid),
                group_members_in_winning_bid: members.clone(),
            })
        })
        .collect()
}

/// Write the report as CSV, header included
pub fn write<W: Write>(output: W, assignments: &[AssignmentRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for row in rows(assignments) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
