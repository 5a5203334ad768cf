//! Tests for group balance aggregation
//!
//! CRITICAL: All money values are i64 (cents)

use fairsplit_core_rs::{
    balance_report, calculate_group_balances, verify_integrity, Expense, ExpenseParticipant,
    Member, MemberBalance, Settlement,
};

fn three_members() -> Vec<Member> {
    vec![
        Member::new("a".to_string(), "Alice".to_string(), 5_000),
        Member::new("b".to_string(), "Bob".to_string(), 3_000),
        Member::new("c".to_string(), "Carol".to_string(), 2_000),
    ]
}

fn find<'a>(balances: &'a [MemberBalance], id: &str) -> &'a MemberBalance {
    balances
        .iter()
        .find(|b| b.member_id == id)
        .unwrap_or_else(|| panic!("missing balance for {}", id))
}

fn everyone_proportional() -> Vec<ExpenseParticipant> {
    vec![
        ExpenseParticipant::proportional("a"),
        ExpenseParticipant::proportional("b"),
        ExpenseParticipant::proportional("c"),
    ]
}

#[test]
fn test_single_expense_accumulation() {
    let members = three_members();
    let expenses = vec![Expense::new("a".to_string(), 120, everyone_proportional())];

    let balances = calculate_group_balances(None, &members, &expenses, &[]);

    let alice = find(&balances, "a");
    assert_eq!(alice.total_paid, 120);
    assert_eq!(alice.total_owed, 60);
    assert_eq!(alice.balance, 60);
    assert_eq!(alice.net_balance, 60);

    assert_eq!(find(&balances, "b").total_owed, 36);
    assert_eq!(find(&balances, "c").total_owed, 24);
}

#[test]
fn test_multiple_expenses_accumulate_per_member() {
    let members = three_members();
    let expenses = vec![
        Expense::new("a".to_string(), 120, everyone_proportional()),
        Expense::new("b".to_string(), 200, everyone_proportional()),
    ];

    let balances = calculate_group_balances(None, &members, &expenses, &[]);

    // Expense 2 shares: a=100, b=60, c=40
    let alice = find(&balances, "a");
    assert_eq!(alice.total_paid, 120);
    assert_eq!(alice.total_owed, 160);
    assert_eq!(alice.net_balance, -40);

    let bob = find(&balances, "b");
    assert_eq!(bob.total_paid, 200);
    assert_eq!(bob.total_owed, 96);
    assert_eq!(bob.net_balance, 104);

    let carol = find(&balances, "c");
    assert_eq!(carol.total_paid, 0);
    assert_eq!(carol.total_owed, 64);
    assert_eq!(carol.net_balance, -64);
}

#[test]
fn test_result_is_expense_order_independent() {
    let members = three_members();
    let e1 = Expense::new("a".to_string(), 997, everyone_proportional());
    let e2 = Expense::new("b".to_string(), 123, everyone_proportional());
    let e3 = Expense::new("c".to_string(), 5_001, everyone_proportional());

    let forward = calculate_group_balances(
        None,
        &members,
        &[e1.clone(), e2.clone(), e3.clone()],
        &[],
    );
    let backward = calculate_group_balances(None, &members, &[e3, e2, e1], &[]);

    assert_eq!(forward, backward);
}

#[test]
fn test_settlements_update_both_legs() {
    let members = three_members();
    let settlements = vec![Settlement::new("c".to_string(), "a".to_string(), 500)];

    let balances = calculate_group_balances(None, &members, &[], &settlements);

    let alice = find(&balances, "a");
    assert_eq!(alice.settlements_received, 500);
    assert_eq!(alice.net_balance, -500);

    let carol = find(&balances, "c");
    assert_eq!(carol.settlements_paid, 500);
    assert_eq!(carol.net_balance, 500);
}

#[test]
fn test_net_balance_formula() {
    let members = three_members();
    let expenses = vec![Expense::new("a".to_string(), 120, everyone_proportional())];
    let settlements = vec![Settlement::new("b".to_string(), "a".to_string(), 36)];

    let balances = calculate_group_balances(None, &members, &expenses, &settlements);

    for balance in &balances {
        assert_eq!(balance.balance, balance.total_paid - balance.total_owed);
        assert_eq!(
            balance.net_balance,
            balance.balance + balance.settlements_paid - balance.settlements_received
        );
    }

    // Bob settled his share: back to zero
    assert_eq!(find(&balances, "b").net_balance, 0);
}

#[test]
fn test_output_sorted_creditors_first() {
    let members = three_members();
    let expenses = vec![Expense::new("c".to_string(), 120, everyone_proportional())];

    let balances = calculate_group_balances(None, &members, &expenses, &[]);

    assert_eq!(balances[0].member_id, "c"); // paid, owes 24: +96
    assert!(balances
        .windows(2)
        .all(|w| w[0].net_balance >= w[1].net_balance));
}

#[test]
fn test_tied_balances_keep_roster_order() {
    let members = three_members();

    let balances = calculate_group_balances(None, &members, &[], &[]);

    let ids: Vec<&str> = balances.iter().map(|b| b.member_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_current_user_flag() {
    let members = three_members();

    let balances = calculate_group_balances(Some("b"), &members, &[], &[]);

    assert!(find(&balances, "b").is_current_user);
    assert!(!find(&balances, "a").is_current_user);
    assert!(!find(&balances, "c").is_current_user);
}

#[test]
fn test_closure_with_expenses_only() {
    let members = three_members();
    let expenses = vec![
        Expense::new("a".to_string(), 997, everyone_proportional()),
        Expense::new("b".to_string(), 12_345, everyone_proportional()),
        Expense::new(
            "c".to_string(),
            501,
            vec![
                ExpenseParticipant::fixed("a", 13),
                ExpenseParticipant::proportional("b"),
                ExpenseParticipant::proportional("c"),
            ],
        ),
    ];

    let balances = calculate_group_balances(None, &members, &expenses, &[]);

    let net_sum: i64 = balances.iter().map(|b| b.net_balance).sum();
    assert_eq!(net_sum, 0);
    assert!(verify_integrity(&balances));
}

#[test]
fn test_departed_member_references_are_ignored() {
    // "ghost" left the group and is no longer on the roster. Their expense
    // still charges the remaining participants, but no balance record
    // appears for them and their own share is dropped.
    let members = three_members();
    let expenses = vec![Expense::new(
        "ghost".to_string(),
        100,
        vec![
            ExpenseParticipant::proportional("a"),
            ExpenseParticipant::fixed("ghost", 40),
        ],
    )];

    let balances = calculate_group_balances(None, &members, &expenses, &[]);

    assert_eq!(balances.len(), 3);
    assert_eq!(find(&balances, "a").total_owed, 60);

    // The payer and part of the owed side vanished with the member, so the
    // group no longer closes - that is exactly what the flag reports.
    assert!(!verify_integrity(&balances));
}

#[test]
fn test_balance_report_carries_integrity_flag() {
    let members = three_members();
    let expenses = vec![Expense::new("a".to_string(), 120, everyone_proportional())];

    let report = balance_report(Some("a"), &members, &expenses, &[]);

    assert!(report.is_valid);
    assert_eq!(report.balances.len(), 3);
    assert_eq!(report.balances[0].member_id, "a");
}
