//! Session state: the form fields, per-field error flags, and the
//! empty/showing-result view machine.
//!
//! Every operation here is a synchronous state transition driven by one UI
//! event (a text change, a selection, the calculate trigger, the clear
//! trigger). The presentation layer reads the state back out after each
//! event and re-renders.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::calc::{self, CalcError, CalculationResult, LoanTerms, MortgageType};
use crate::input;

/// Identifies one required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Amount,
    Term,
    Rate,
    MortgageType,
}

/// The set of fields currently marked invalid.
///
/// Fields are flagged by a full validation pass (or by the zero-term check)
/// and unflagged only by corrective input on that field. A validation pass
/// never clears flags on its own.
#[derive(Debug, Default)]
pub struct ValidationState {
    flagged: HashSet<Field>,
}

impl ValidationState {
    fn flag(&mut self, field: Field) {
        self.flagged.insert(field);
    }

    fn unflag(&mut self, field: Field) {
        self.flagged.remove(&field);
    }

    pub fn is_flagged(&self, field: Field) -> bool {
        self.flagged.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }
}

/// Which side of the results pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Empty,
    ShowingResult,
}

/// One interactive session, created empty at startup and fully reset by
/// [`Session::clear`].
#[derive(Debug, Default)]
pub struct Session {
    amount: String,
    term: String,
    rate: String,
    mortgage_type: Option<MortgageType>,
    validation: ValidationState,
    result: Option<CalculationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text-change event for the amount field. Stores the normalized form
    /// (the caller re-displays it) and clears the field's error flag once
    /// the value is non-empty.
    pub fn amount_changed(&mut self, raw: &str) {
        self.amount = input::normalize_amount(raw);
        if !self.amount.is_empty() {
            self.validation.unflag(Field::Amount);
        }
    }

    /// Text-change event for the term field.
    pub fn term_changed(&mut self, raw: &str) {
        self.term = input::normalize_term(raw);
        if !self.term.is_empty() {
            self.validation.unflag(Field::Term);
        }
    }

    /// Text-change event for the rate field.
    pub fn rate_changed(&mut self, raw: &str) {
        self.rate = input::normalize_rate(raw);
        if !self.rate.is_empty() {
            self.validation.unflag(Field::Rate);
        }
    }

    /// Selects a mortgage type. The two options are mutually exclusive and
    /// there is no way back to "none selected" short of a full reset.
    pub fn select_mortgage_type(&mut self, choice: MortgageType) {
        self.mortgage_type = Some(choice);
        self.validation.unflag(Field::MortgageType);
    }

    /// Presence check over all four required fields. Flags every failing
    /// field and returns whether the form is complete.
    fn validate(&mut self) -> bool {
        let mut valid = true;
        if self.amount.is_empty() {
            self.validation.flag(Field::Amount);
            valid = false;
        }
        if self.term.is_empty() {
            self.validation.flag(Field::Term);
            valid = false;
        }
        if self.rate.is_empty() {
            self.validation.flag(Field::Rate);
            valid = false;
        }
        if self.mortgage_type.is_none() {
            self.validation.flag(Field::MortgageType);
            valid = false;
        }
        valid
    }

    /// Calculate trigger. Validates, parses, and runs the engine. On any
    /// failure the offending field is flagged and the previous result (if
    /// one is showing) is left untouched.
    pub fn calculate(&mut self) {
        if !self.validate() {
            debug!(state = ?self.validation, "calculation declined, form incomplete");
            return;
        }
        let principal = match input::parse_amount(&self.amount) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "amount rejected");
                self.validation.flag(Field::Amount);
                return;
            }
        };
        let years = match input::parse_term(&self.term) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "term rejected");
                self.validation.flag(Field::Term);
                return;
            }
        };
        let annual_rate_percent = match input::parse_rate(&self.rate) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "rate rejected");
                self.validation.flag(Field::Rate);
                return;
            }
        };
        let Some(mortgage_type) = self.mortgage_type else {
            return;
        };

        let terms = LoanTerms {
            principal,
            years,
            annual_rate_percent,
            mortgage_type,
        };
        match calc::calculate(&terms) {
            Ok(result) => {
                info!(
                    monthly = result.monthly_payment,
                    total = result.total_repayment,
                    "calculated"
                );
                self.result = Some(result);
            }
            Err(error @ CalcError::ZeroTerm) => {
                warn!(%error, "term rejected");
                self.validation.flag(Field::Term);
            }
        }
    }

    /// Clear trigger: back to the all-empty initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
        info!("session cleared");
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    pub fn mortgage_type(&self) -> Option<MortgageType> {
        self.mortgage_type
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn is_flagged(&self, field: Field) -> bool {
        self.validation.is_flagged(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.validation.is_empty()
    }

    pub fn view(&self) -> View {
        if self.result.is_some() {
            View::ShowingResult
        } else {
            View::Empty
        }
    }
}
