//! End-to-end session flow: text-change events through normalization,
//! validation, calculation, and reset, the way the UI drives them.

use pretty_assertions::assert_eq;

use mortgage_calculator::calc::MortgageType;
use mortgage_calculator::format::format_currency;
use mortgage_calculator::session::{Field, Session, View};

#[test]
fn filling_the_form_and_calculating_shows_formatted_results() {
    let mut session = Session::new();

    session.amount_changed("£300,000");
    assert_eq!(session.amount(), "300,000");

    session.term_changed("25 years");
    assert_eq!(session.term(), "25");

    session.rate_changed("5.25%");
    assert_eq!(session.rate(), "5.25");

    session.select_mortgage_type(MortgageType::Repayment);
    session.calculate();

    let result = session.result().expect("complete form should calculate");
    assert_eq!(format_currency(result.monthly_payment), "£1,797.74");
    assert_eq!(session.view(), View::ShowingResult);
}

#[test]
fn interest_only_totals_include_the_principal() {
    let mut session = Session::new();
    session.amount_changed("200000");
    session.term_changed("25");
    session.rate_changed("5");
    session.select_mortgage_type(MortgageType::InterestOnly);
    session.calculate();

    let result = session.result().expect("complete form should calculate");
    assert_eq!(format_currency(result.monthly_payment), "£833.33");
    assert_eq!(format_currency(result.total_repayment), "£450,000.00");
}

#[test]
fn incomplete_form_flags_fields_and_correcting_them_recovers() {
    let mut session = Session::new();
    session.amount_changed("150000");
    session.calculate();

    assert!(session.result().is_none());
    assert_eq!(session.view(), View::Empty);
    assert!(session.is_flagged(Field::Term));
    assert!(session.is_flagged(Field::Rate));
    assert!(session.is_flagged(Field::MortgageType));
    assert!(!session.is_flagged(Field::Amount));

    session.term_changed("30");
    session.rate_changed("4.5");
    session.select_mortgage_type(MortgageType::Repayment);
    assert!(!session.has_errors());

    session.calculate();
    assert!(session.result().is_some());
}

#[test]
fn clear_wipes_fields_flags_and_results() {
    let mut session = Session::new();
    session.amount_changed("90000");
    session.term_changed("15");
    session.rate_changed("3");
    session.select_mortgage_type(MortgageType::Repayment);
    session.calculate();
    assert_eq!(session.view(), View::ShowingResult);

    session.clear();

    assert_eq!(session.amount(), "");
    assert_eq!(session.term(), "");
    assert_eq!(session.rate(), "");
    assert_eq!(session.mortgage_type(), None);
    assert!(session.result().is_none());
    assert!(!session.has_errors());
    assert_eq!(session.view(), View::Empty);
}
