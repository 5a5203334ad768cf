//! Fairsplit diagnostic CLI
//!
//! Loads a group snapshot (JSON file or stdin), runs the full engine
//! pipeline, and prints balances, the integrity flag, and suggested
//! settlements as JSON. A debugging tool for inspecting what the engine
//! would return for a given group state - not a product surface.
//!
//! # Usage
//!
//! ```text
//! fairsplit-cli group.json
//! cat group.json | fairsplit-cli
//! ```
//!
//! Input shape (camelCase, matching the host application's wire format):
//!
//! ```json
//! {
//!   "currentMemberId": "alice",
//!   "members": [{"id": "alice", "name": "Alice", "coefficient": 5000}],
//!   "expenses": [
//!     {
//!       "id": "e1",
//!       "paidBy": "alice",
//!       "amount": 12000,
//!       "participants": [{"memberId": "alice", "customAmount": null}]
//!     }
//!   ],
//!   "settlements": [
//!     {"id": "s1", "fromMember": "bob", "toMember": "alice", "amount": 500}
//!   ]
//! }
//! ```

use fairsplit_core_rs::{
    balance_report, calculate_optimal_settlements, validate_expense, Expense, ExpenseParticipant,
    Member, Settlement, COEFFICIENT_SCALE,
};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupSnapshot {
    #[serde(default)]
    current_member_id: Option<String>,
    members: Vec<MemberRecord>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    settlements: Vec<SettlementRecord>,
}

#[derive(Debug, Deserialize)]
struct MemberRecord {
    id: String,
    name: Option<String>,
    coefficient: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseRecord {
    id: String,
    paid_by: String,
    amount: i64,
    participants: Vec<ParticipantRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantRecord {
    member_id: String,
    #[serde(default)]
    custom_amount: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettlementRecord {
    id: String,
    from_member: String,
    to_member: String,
    amount: i64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let input = read_input()?;
    let snapshot: GroupSnapshot = serde_json::from_str(&input)?;

    let mut members = Vec::with_capacity(snapshot.members.len());
    for record in snapshot.members {
        if !(0..=COEFFICIENT_SCALE).contains(&record.coefficient) {
            return Err(format!(
                "member '{}': coefficient {} out of range 0..=10000",
                record.id, record.coefficient
            )
            .into());
        }
        let name = record.name.unwrap_or_else(|| record.id.clone());
        members.push(Member::new(record.id, name, record.coefficient));
    }

    let mut expenses = Vec::with_capacity(snapshot.expenses.len());
    for record in snapshot.expenses {
        let participants: Vec<ExpenseParticipant> = record
            .participants
            .into_iter()
            .map(|p| ExpenseParticipant {
                member_id: p.member_id,
                custom_amount: p.custom_amount,
            })
            .collect();

        validate_expense(record.amount, &participants)
            .map_err(|e| format!("expense '{}': {}", record.id, e))?;

        expenses.push(Expense::from_record(
            record.id,
            record.paid_by,
            record.amount,
            participants,
        ));
    }

    let mut settlements = Vec::with_capacity(snapshot.settlements.len());
    for record in snapshot.settlements {
        if record.amount <= 0 {
            return Err(format!(
                "settlement '{}': amount must be positive, got {}",
                record.id, record.amount
            )
            .into());
        }
        settlements.push(Settlement::from_record(
            record.id,
            record.from_member,
            record.to_member,
            record.amount,
        ));
    }

    let report = balance_report(
        snapshot.current_member_id.as_deref(),
        &members,
        &expenses,
        &settlements,
    );
    let suggestions = calculate_optimal_settlements(&report.balances);

    if !report.is_valid {
        eprintln!("warning: group balances do not close to zero");
    }

    let output = serde_json::json!({
        "balances": report.balances,
        "isValid": report.is_valid,
        "suggestions": suggestions,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn read_input() -> Result<String, Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        2 => Ok(fs::read_to_string(&args[1])?),
        _ => Err("usage: fairsplit-cli [group.json]".into()),
    }
}
