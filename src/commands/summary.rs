//! `summary` command

use crate::config::Settings;
use crate::error::PennyResult;
use crate::models::Date;
use crate::reports::SummaryReport;
use crate::storage::Storage;

use super::CommandOutcome;

pub const MESSAGE_USAGE: &str = "summary: Shows the total income, total expenditure and balance \
     of every entry, or of the entries on the given date.\n\
     Parameters: [d/DATE]\n\
     Example: summary d/12-12-2023";

/// Summarizes the entry book, optionally for a single date
///
/// Without a date the summary covers every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryCommand {
    date: Option<Date>,
}

impl SummaryCommand {
    /// Summary over every entry
    pub fn all() -> Self {
        Self { date: None }
    }

    /// Summary over the entries on `date`
    pub fn on_date(date: Date) -> Self {
        Self { date: Some(date) }
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    pub fn execute(self, storage: &mut Storage, settings: &Settings) -> PennyResult<CommandOutcome> {
        let report = SummaryReport::generate(storage.entries.book(), self.date)?;
        Ok(CommandOutcome::message(
            report.format_terminal(&settings.currency_symbol),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::temp_storage;
    use crate::commands::AddCommand;
    use crate::models::{Description, EntryType, Money, Tag};

    #[test]
    fn test_summary_scopes() {
        let (_dir, mut storage, settings) = temp_storage();
        for (date, cents) in [("01-01-2023", 1000), ("02-01-2023", 2500)] {
            AddCommand::new(
                EntryType::Expenditure,
                Description::new("Snacks").unwrap(),
                Money::from_cents(cents),
                Date::parse(date).unwrap(),
                Tag::new(EntryType::Expenditure, "Food").unwrap(),
            )
            .execute(&mut storage, &settings)
            .unwrap();
        }

        let all = SummaryCommand::all().execute(&mut storage, &settings).unwrap();
        assert!(all.feedback.starts_with("Summary of all entries"));
        assert!(all.feedback.contains("$35.00"));

        let one_day = SummaryCommand::on_date(Date::parse("02-01-2023").unwrap())
            .execute(&mut storage, &settings)
            .unwrap();
        assert!(one_day.feedback.starts_with("Summary for 02-01-2023"));
        assert!(one_day.feedback.contains("$25.00"));
        assert!(!one_day.feedback.contains("$35.00"));
    }
}
