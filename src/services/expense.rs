//! Expense service
//!
//! Entry-time validation and appending of expenses. Anything that should be
//! surfaced to the user (unknown payer, unparseable amount) is rejected here,
//! before the expense reaches the group; the balance engine itself stays
//! tolerant of whatever is already on disk.

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{SplitError, SplitResult};
use crate::models::{parse_amount, Expense, Group};
use crate::storage::Storage;

use super::group::GroupSnapshot;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Participant name, or a 1-based position in the participant list
    pub payer: String,
    /// Amount as typed (e.g., "12.50")
    pub amount: String,
    pub description: Option<String>,
    /// Explicit timestamp; defaults to the current local time
    pub timestamp: Option<String>,
}

/// Service for expense entry
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate and append an expense, then persist the group
    pub fn add(
        &self,
        group_name: &str,
        input: CreateExpenseInput,
    ) -> SplitResult<(Expense, GroupSnapshot)> {
        let mut group = self.storage.groups.load(group_name)?;

        if group.participants.len() < 2 {
            return Err(SplitError::Validation(
                "Need at least 2 participants to add an expense".into(),
            ));
        }

        let payer = resolve_payer(&group, &input.payer)?;

        let amount =
            parse_amount(&input.amount).map_err(|e| SplitError::Validation(e.to_string()))?;
        if amount < 0.0 {
            return Err(SplitError::Validation(format!(
                "Amount cannot be negative: {}",
                input.amount.trim()
            )));
        }

        let timestamp = match input.timestamp {
            Some(timestamp) => timestamp,
            None => format_now(&self.settings.timestamp_format)?,
        };

        let expense = Expense::new(payer, amount)
            .with_description(input.description.unwrap_or_default().trim())
            .with_timestamp(timestamp);

        group.record_expense(expense.clone());
        let settlement = self.storage.groups.save(&group)?;

        self.storage.log_append(
            EntityType::Expense,
            group.name.clone(),
            Some(format!("{} paid {:.2}", expense.payer, expense.amount)),
            &expense,
        )?;

        Ok((expense, GroupSnapshot { group, settlement }))
    }

    /// All expenses of a group, in recorded order
    pub fn list(&self, group_name: &str) -> SplitResult<Vec<Expense>> {
        Ok(self.storage.groups.load(group_name)?.expenses)
    }
}

/// Current local time rendered with a strftime format
fn format_now(format: &str) -> SplitResult<String> {
    let items: Vec<Item> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(SplitError::Config(format!(
            "Invalid timestamp format: {}",
            format
        )));
    }
    Ok(Local::now().format_with_items(items.into_iter()).to_string())
}

/// Resolve the payer by exact name, then by 1-based position
fn resolve_payer(group: &Group, payer: &str) -> SplitResult<String> {
    let payer = payer.trim();

    if group.has_participant(payer) {
        return Ok(payer.to_string());
    }

    if let Ok(position) = payer.parse::<usize>() {
        if let Some(name) = position
            .checked_sub(1)
            .and_then(|index| group.participants.get(index))
        {
            return Ok(name.clone());
        }
    }

    Err(SplitError::participant_not_found(payer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitPaths;
    use crate::services::GroupService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn input(payer: &str, amount: &str) -> CreateExpenseInput {
        CreateExpenseInput {
            payer: payer.to_string(),
            amount: amount.to_string(),
            description: None,
            timestamp: Some("2025-01-01 12:00:00".to_string()),
        }
    }

    fn create_group(storage: &Storage, participants: &[&str]) {
        let names: Vec<String> = participants.iter().map(|s| s.to_string()).collect();
        GroupService::new(storage).create("trip", &names).unwrap();
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        create_group(&storage, &["Agnes", "Brian", "Cleo"]);
        let service = ExpenseService::new(&storage, &settings);

        let mut request = input("Agnes", "90");
        request.description = Some("  groceries ".into());
        let (expense, snapshot) = service.add("trip", request).unwrap();

        assert_eq!(expense.payer, "Agnes");
        assert_eq!(expense.amount, 90.0);
        assert_eq!(expense.description, "groceries");
        assert_eq!(expense.timestamp, "2025-01-01 12:00:00");
        assert_eq!(snapshot.settlement.balances.get("Brian"), Some(-45.0));

        let stored = service.list("trip").unwrap();
        assert_eq!(stored, vec![expense]);
    }

    #[test]
    fn test_add_expense_by_position() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        create_group(&storage, &["Agnes", "Brian"]);
        let service = ExpenseService::new(&storage, &settings);

        let (expense, snapshot) = service.add("trip", input("2", "10.50")).unwrap();
        assert_eq!(expense.payer, "Brian");
        assert_eq!(
            snapshot.settlement.summary.entries(),
            vec![("Agnes".to_string(), "owes Brian 10.50".to_string())]
        );
    }

    #[test]
    fn test_default_timestamp_uses_format() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            timestamp_format: "%Y".to_string(),
            ..Settings::default()
        };
        create_group(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage, &settings);

        let mut request = input("A", "1");
        request.timestamp = None;
        let (expense, _) = service.add("trip", request).unwrap();
        assert_eq!(expense.timestamp.len(), 4);
        assert!(expense.timestamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_invalid_timestamp_format() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            timestamp_format: "%Y-%".to_string(),
            ..Settings::default()
        };
        create_group(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage, &settings);

        let mut request = input("A", "1");
        request.timestamp = None;
        let err = service.add("trip", request).unwrap_err();
        assert!(matches!(err, SplitError::Config(_)));
    }

    #[test]
    fn test_unknown_payer_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        create_group(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage, &settings);

        assert!(service.add("trip", input("Mallory", "5")).unwrap_err().is_not_found());
        assert!(service.add("trip", input("3", "5")).unwrap_err().is_not_found());
        assert!(service.add("trip", input("0", "5")).unwrap_err().is_not_found());
        assert!(service.list("trip").unwrap().is_empty());
    }

    #[test]
    fn test_bad_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        create_group(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage, &settings);

        assert!(service.add("trip", input("A", "abc")).unwrap_err().is_validation());
        assert!(service.add("trip", input("A", "-4")).unwrap_err().is_validation());
        assert!(service.list("trip").unwrap().is_empty());
    }

    #[test]
    fn test_audit_records_append() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        create_group(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage, &settings);

        service.add("trip", input("A", "12")).unwrap();

        let entries = storage.audit().read_all().unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.entity_type, EntityType::Expense);
        assert_eq!(last.detail.as_deref(), Some("A paid 12.00"));
    }
}
