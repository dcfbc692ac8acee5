//! Summary Report
//!
//! Totals income and expenditure over the whole entry book, or over the
//! entries recorded on a single date, with a per-tag breakdown.

use crate::error::{PennyError, PennyResult};
use crate::models::{tag, Date, Entry, EntryType, Money};
use crate::storage::EntryBook;

/// Total recorded under one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTotal {
    pub tag: &'static str,
    pub total: Money,
    pub count: usize,
}

/// Totals for one entry type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTotals {
    pub entry_type: EntryType,
    pub total: Money,
    pub count: usize,
    /// Tags with at least one entry, in vocabulary order
    pub by_tag: Vec<TagTotal>,
}

impl TypeTotals {
    fn collect<'a>(
        entry_type: EntryType,
        entries: impl Iterator<Item = &'a Entry>,
    ) -> PennyResult<Self> {
        let mut by_tag: Vec<TagTotal> = tag::vocabulary(entry_type)
            .iter()
            .map(|&name| TagTotal {
                tag: name,
                total: Money::zero(),
                count: 0,
            })
            .collect();

        let mut total = Money::zero();
        let mut count = 0;
        for entry in entries {
            total = add_to_total(total, entry.amount(), entry_type)?;
            count += 1;
            if let Some(row) = by_tag.iter_mut().find(|row| row.tag == entry.tag().name()) {
                row.total = add_to_total(row.total, entry.amount(), entry_type)?;
                row.count += 1;
            }
        }
        by_tag.retain(|row| row.count > 0);

        Ok(Self {
            entry_type,
            total,
            count,
            by_tag,
        })
    }
}

fn add_to_total(total: Money, amount: Money, entry_type: EntryType) -> PennyResult<Money> {
    total.checked_add(amount).ok_or_else(|| {
        PennyError::Validation(format!(
            "{} total exceeds the largest amount PennyWise can represent",
            entry_type
        ))
    })
}

/// Summary of the entry book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// Date the summary is restricted to, if any
    pub date: Option<Date>,
    pub income: TypeTotals,
    pub expenditure: TypeTotals,
}

impl SummaryReport {
    /// Generate a summary over every entry, or over the entries on `date`
    pub fn generate(book: &EntryBook, date: Option<Date>) -> PennyResult<Self> {
        let in_scope = |entry: &&Entry| date.map_or(true, |d| entry.date() == d);

        Ok(Self {
            date,
            income: TypeTotals::collect(
                EntryType::Income,
                book.entries(EntryType::Income).iter().filter(in_scope),
            )?,
            expenditure: TypeTotals::collect(
                EntryType::Expenditure,
                book.entries(EntryType::Expenditure).iter().filter(in_scope),
            )?,
        })
    }

    /// Income minus expenditure
    pub fn balance(&self) -> Money {
        self.income.total - self.expenditure.total
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = match self.date {
            Some(date) => format!("Summary for {}\n", date),
            None => "Summary of all entries\n".to_string(),
        };
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} ({})\n",
            "Total Income:",
            self.income.total.format_with_symbol(currency_symbol),
            self.income.count
        ));
        output.push_str(&format!(
            "{:<20} {:>12} ({})\n",
            "Total Expenditure:",
            self.expenditure.total.format_with_symbol(currency_symbol),
            self.expenditure.count
        ));
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "Balance:",
            self.balance().format_with_symbol(currency_symbol)
        ));

        for totals in [&self.income, &self.expenditure] {
            if totals.by_tag.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{} by tag:\n", totals.entry_type));
            for row in &totals.by_tag {
                output.push_str(&format!(
                    "  {:<18} {:>12} ({})\n",
                    row.tag,
                    row.total.format_with_symbol(currency_symbol),
                    row.count
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Description, Tag};

    fn entry(entry_type: EntryType, cents: i64, date: &str, tag: &str) -> Entry {
        Entry::new(
            entry_type,
            Description::new("item").unwrap(),
            Money::from_cents(cents),
            Date::parse(date).unwrap(),
            Tag::new(entry_type, tag).unwrap(),
        )
        .unwrap()
    }

    fn sample_book() -> EntryBook {
        let mut book = EntryBook::new();
        book.add(entry(EntryType::Income, 300000, "01-03-2023", "Salary"));
        book.add(entry(EntryType::Income, 2000, "02-03-2023", "Gifts"));
        book.add(entry(EntryType::Expenditure, 1250, "01-03-2023", "Food"));
        book.add(entry(EntryType::Expenditure, 750, "02-03-2023", "Food"));
        book.add(entry(EntryType::Expenditure, 150000, "02-03-2023", "Housing"));
        book
    }

    #[test]
    fn test_summary_over_all_entries() {
        let report = SummaryReport::generate(&sample_book(), None).unwrap();

        assert_eq!(report.income.total.cents(), 302000);
        assert_eq!(report.expenditure.total.cents(), 152000);
        assert_eq!(report.balance().cents(), 150000);
        assert_eq!(report.expenditure.count, 3);
        assert_eq!(
            report.expenditure.by_tag,
            vec![
                TagTotal { tag: "Food", total: Money::from_cents(2000), count: 2 },
                TagTotal { tag: "Housing", total: Money::from_cents(150000), count: 1 },
            ]
        );
    }

    #[test]
    fn test_summary_for_one_date() {
        let date = Date::parse("01-03-2023").unwrap();
        let report = SummaryReport::generate(&sample_book(), Some(date)).unwrap();

        assert_eq!(report.date, Some(date));
        assert_eq!(report.income.total.cents(), 300000);
        assert_eq!(report.expenditure.total.cents(), 1250);
        assert_eq!(report.income.by_tag.len(), 1);
    }

    #[test]
    fn test_summary_for_date_without_entries() {
        let date = Date::parse("25-12-2023").unwrap();
        let report = SummaryReport::generate(&sample_book(), Some(date)).unwrap();
        assert_eq!(report.income.count + report.expenditure.count, 0);
        assert_eq!(report.balance(), Money::zero());
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let result = add_to_total(Money::from_cents(i64::MAX), Money::from_cents(1), EntryType::Income);
        assert!(matches!(result, Err(PennyError::Validation(_))));
    }

    #[test]
    fn test_largest_amounts_sum_without_overflow() {
        let mut book = EntryBook::new();
        book.add(entry(EntryType::Income, Money::MAX.cents(), "01-03-2023", "Salary"));
        book.add(entry(EntryType::Income, Money::MAX.cents(), "02-03-2023", "Salary"));

        let report = SummaryReport::generate(&book, None).unwrap();
        assert_eq!(report.income.total.cents(), 2 * Money::MAX.cents());
        assert_eq!(report.income.by_tag[0].total, report.income.total);
    }

    #[test]
    fn test_negative_balance_formatting() {
        let mut book = EntryBook::new();
        book.add(entry(EntryType::Expenditure, 500, "01-03-2023", "Transport"));
        let text = SummaryReport::generate(&book, None).unwrap().format_terminal("$");

        assert!(text.starts_with("Summary of all entries\n"));
        assert!(text.contains("-$5.00"));
        assert!(text.contains("Expenditure by tag:"));
        assert!(!text.contains("Income by tag:"));
    }
}
