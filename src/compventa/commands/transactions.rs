use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CompventaError, FieldError, Result, ValidationErrors};
use crate::model::{Transaction, TransactionKind};
use crate::query;
use crate::query::filter::TransactionCriteria;
use crate::query::sort::{SortDirective, TransactionField};
use crate::store::{FixtureSource, RecordStore};

pub fn list<S: FixtureSource>(
    source: &S,
    criteria: &TransactionCriteria,
    directive: Option<SortDirective<TransactionField>>,
) -> Result<CmdResult> {
    let mut store = RecordStore::new();
    if let Err(err) = store.resolve(source.transactions()) {
        return Ok(CmdResult::load_failure("transactions", &err));
    }

    let rows = query::run(store.records(), criteria, directive);
    let mut result = CmdResult::default().with_transactions(rows);
    if result.transactions.is_empty() {
        result.add_message(CmdMessage::info(
            "No transactions match the current filters.",
        ));
    }
    Ok(result)
}

/// A user-submitted transaction before validation. `kind` stays optional so
/// "nothing selected" is expressible and rejected with its own field error.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    pub description: String,
    pub kind: Option<TransactionKind>,
    pub amount: f64,
    pub branch: String,
}

impl TransactionDraft {
    /// Check every field and accumulate the failures, so the caller can
    /// surface them inline per field. A valid draft becomes a full record
    /// with a synthesized id and today's date.
    pub fn validate(self) -> Result<Transaction> {
        let mut errors = Vec::new();

        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "description is required"));
        }
        if self.kind.is_none() {
            errors.push(FieldError::new("kind", "a transaction kind must be selected"));
        }
        if !(self.amount.is_finite() && self.amount > 0.0) {
            errors.push(FieldError::new("amount", "amount must be a positive number"));
        }
        if self.branch.trim().is_empty() {
            errors.push(FieldError::new("branch", "a branch must be selected"));
        }

        if !errors.is_empty() {
            return Err(CompventaError::Validation(ValidationErrors(errors)));
        }

        // kind checked above
        let kind = self.kind.ok_or_else(|| {
            CompventaError::Api("draft kind missing after validation".to_string())
        })?;
        Ok(Transaction::new(
            self.description.trim().to_string(),
            kind,
            self.amount,
            self.branch.trim().to_string(),
        ))
    }
}

/// Validate a draft, prepend the resulting record to the in-memory view, and
/// return the updated listing. The external source is never written.
pub fn add<S: FixtureSource>(source: &S, draft: TransactionDraft) -> Result<CmdResult> {
    let record = draft.validate()?;

    let mut store = RecordStore::new();
    if let Err(err) = store.resolve(source.transactions()) {
        return Ok(CmdResult::load_failure("transactions", &err));
    }
    store.prepend(record.clone())?;

    let message = CmdMessage::success(format!(
        "Recorded {} \"{}\" (${:.2}) at {}.",
        record.kind, record.description, record.amount, record.branch
    ));
    Ok(CmdResult::default()
        .with_transactions(store.records().to_vec())
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SourceFixture;
    use crate::store::LoadState;

    fn seeded() -> SourceFixture {
        SourceFixture::new()
            .with_transaction(
                "t1",
                (2024, 5, 12),
                "Venta Portátil Gamer XZ",
                TransactionKind::Income,
                1250.75,
                "Central",
            )
            .with_transaction(
                "t2",
                (2024, 5, 13),
                "Pago de alquiler",
                TransactionKind::Expense,
                800.0,
                "North",
            )
    }

    #[test]
    fn lists_all_transactions_in_fetch_order() {
        let fixture = seeded();
        let result = list(&fixture.source, &TransactionCriteria::default(), None).unwrap();
        assert_eq!(result.view_state, LoadState::Ready);
        let ids: Vec<&str> = result.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn empty_result_is_ready_with_a_notice() {
        let fixture = seeded();
        let criteria = TransactionCriteria {
            branch: Some("South".into()),
            ..Default::default()
        };
        let result = list(&fixture.source, &criteria, None).unwrap();
        assert_eq!(result.view_state, LoadState::Ready);
        assert!(result.transactions.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn fetch_failure_yields_error_state_not_a_crash() {
        let fixture = seeded().failing();
        let result = list(&fixture.source, &TransactionCriteria::default(), None).unwrap();
        assert_eq!(result.view_state, LoadState::Error);
        assert!(result.transactions.is_empty());
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn sorted_listing_respects_the_directive() {
        let fixture = seeded();
        let directive = SortDirective::descending(TransactionField::Amount);
        let result = list(
            &fixture.source,
            &TransactionCriteria::default(),
            Some(directive),
        )
        .unwrap();
        let amounts: Vec<f64> = result.transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1250.75, 800.0]);
    }

    #[test]
    fn valid_draft_becomes_a_record() {
        let draft = TransactionDraft {
            description: "Venta mostrador".into(),
            kind: Some(TransactionKind::Income),
            amount: 45.0,
            branch: "Central".into(),
        };
        let record = draft.validate().unwrap();
        assert_eq!(record.description, "Venta mostrador");
        assert_eq!(record.kind, TransactionKind::Income);
    }

    #[test]
    fn invalid_draft_reports_every_failing_field() {
        let draft = TransactionDraft {
            description: "  ".into(),
            kind: None,
            amount: -5.0,
            branch: "".into(),
        };
        let err = draft.validate().unwrap_err();
        match err {
            CompventaError::Validation(ValidationErrors(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["description", "kind", "amount", "branch"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn zero_amount_is_rejected() {
        let draft = TransactionDraft {
            description: "x".into(),
            kind: Some(TransactionKind::Expense),
            amount: 0.0,
            branch: "Central".into(),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn add_prepends_and_keeps_the_rest_in_order() {
        let fixture = seeded();
        let draft = TransactionDraft {
            description: "Venta accesorios".into(),
            kind: Some(TransactionKind::Income),
            amount: 120.0,
            branch: "South".into(),
        };
        let result = add(&fixture.source, draft).unwrap();
        assert_eq!(result.transactions.len(), 3);
        assert_eq!(result.transactions[0].description, "Venta accesorios");
        assert_eq!(result.transactions[1].id, "t1");
        assert_eq!(result.transactions[2].id, "t2");
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn add_on_a_failed_view_reports_the_load_error() {
        let fixture = seeded().failing();
        let draft = TransactionDraft {
            description: "Venta".into(),
            kind: Some(TransactionKind::Income),
            amount: 10.0,
            branch: "Central".into(),
        };
        let result = add(&fixture.source, draft).unwrap();
        assert_eq!(result.view_state, LoadState::Error);
        assert!(result.transactions.is_empty());
    }
}
