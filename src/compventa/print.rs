use colored::{ColoredString, Colorize};
use compventa::api::{CmdMessage, MessageLevel};
use compventa::commands::CmdResult;
use compventa::model::{
    FinancialSummary, InventoryAnalytics, InventoryItem, StockStatus, Transaction,
    TransactionKind, User,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DATE_WIDTH: usize = 12;
const DESC_WIDTH: usize = 36;
const KIND_WIDTH: usize = 9;
const AMOUNT_WIDTH: usize = 13;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "{} {} {} {} {}",
            cell("DATE", DATE_WIDTH),
            cell("DESCRIPTION", DESC_WIDTH),
            cell("KIND", KIND_WIDTH),
            cell_right("AMOUNT", AMOUNT_WIDTH),
            "BRANCH"
        )
        .dimmed()
    );

    for tx in transactions {
        let kind_cell = cell(tx.kind.label(), KIND_WIDTH);
        let amount_cell = cell_right(&format_money(tx.amount), AMOUNT_WIDTH);
        let (kind_colored, amount_colored) = match tx.kind {
            TransactionKind::Income => (kind_cell.green(), amount_cell.green()),
            TransactionKind::Expense => (kind_cell.red(), amount_cell.red()),
        };

        println!(
            "{} {} {} {} {}",
            cell(&tx.date.to_string(), DATE_WIDTH),
            cell(&tx.description, DESC_WIDTH),
            kind_colored,
            amount_colored,
            tx.branch
        );
    }
}

pub(crate) fn print_inventory(items: &[InventoryItem]) {
    if items.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "{} {} {} {} {} {} {}",
            cell("ID", 10),
            cell("NAME", 28),
            cell("CATEGORY", 14),
            cell("BRANCH", 10),
            cell_right("QTY", 5),
            cell_right("MIN", 5),
            "STATUS"
        )
        .dimmed()
    );

    for item in items {
        println!(
            "{} {} {} {} {} {} {}",
            cell(&item.id, 10),
            cell(&item.name, 28),
            cell(&item.category, 14),
            cell(&item.branch, 10),
            cell_right(&item.quantity.to_string(), 5),
            cell_right(&item.minimum.to_string(), 5),
            status_colored(item.stock_status())
        );
    }
}

fn status_colored(status: StockStatus) -> ColoredString {
    match status {
        StockStatus::OutOfStock => status.label().red(),
        StockStatus::Low => status.label().bright_red(),
        StockStatus::Limited => status.label().yellow(),
        StockStatus::InStock => status.label().green(),
    }
}

pub(crate) fn print_dashboard(result: &CmdResult) {
    let Some(stats) = &result.stats else {
        return;
    };

    println!("{}", "Overview".bold());
    stat_line("Total income", &format_money(stats.total_income), |s| s.green());
    stat_line("Total expenses", &format_money(stats.total_expenses), |s| s.red());
    stat_line("Inventory value", &format_money(stats.inventory_value), |s| s.normal());
    let low = stats.low_stock_items.to_string();
    if stats.low_stock_items > 0 {
        stat_line("Low stock items", &low, |s| s.yellow());
    } else {
        stat_line("Low stock items", &low, |s| s.normal());
    }

    if let Some(summary) = &result.summary {
        println!();
        print_branch_performance(summary);
    }
}

pub(crate) fn print_report(result: &CmdResult) {
    let Some(summary) = &result.summary else {
        return;
    };

    println!("{}", "Financial report".bold());
    stat_line("Total income", &format_money(summary.total_income), |s| s.green());
    stat_line("Total expenses", &format_money(summary.total_expenses), |s| s.red());
    stat_line("Net profit", &format_money(summary.net_profit), |s| s.bold());

    println!();
    print_branch_performance(summary);

    println!();
    println!("{}", "Expenses by category".bold());
    println!(
        "{}",
        format!("{} {}", cell("CATEGORY", 20), cell_right("AMOUNT", AMOUNT_WIDTH)).dimmed()
    );
    for entry in &summary.expenses_by_category {
        println!(
            "{} {}",
            cell(&entry.category, 20),
            cell_right(&format_money(entry.amount), AMOUNT_WIDTH)
        );
    }
}

fn print_branch_performance(summary: &FinancialSummary) {
    println!("{}", "Branch performance".bold());
    println!(
        "{}",
        format!(
            "{} {} {} {}",
            cell("BRANCH", 12),
            cell_right("INCOME", AMOUNT_WIDTH),
            cell_right("EXPENSES", AMOUNT_WIDTH),
            cell_right("PROFIT", AMOUNT_WIDTH)
        )
        .dimmed()
    );
    for branch in &summary.by_branch {
        println!(
            "{} {} {} {}",
            cell(&branch.branch, 12),
            cell_right(&format_money(branch.income), AMOUNT_WIDTH).green(),
            cell_right(&format_money(branch.expenses), AMOUNT_WIDTH).red(),
            cell_right(&format_money(branch.profit()), AMOUNT_WIDTH)
        );
    }
}

pub(crate) fn print_analytics(result: &CmdResult) {
    let Some(analytics) = &result.analytics else {
        return;
    };
    let InventoryAnalytics {
        turnover,
        top_products,
        value_by_branch,
        stock_trend,
    } = analytics;

    println!("{}", "Top selling products".bold());
    for product in top_products {
        println!(
            "{} {}",
            cell(&product.name, 30),
            cell_right(&format!("{} units", product.units), 12)
        );
    }

    println!();
    println!("{}", "Inventory value by branch".bold());
    for entry in value_by_branch {
        println!(
            "{} {}",
            cell(&entry.branch, 12),
            cell_right(&format_money(entry.value), AMOUNT_WIDTH)
        );
    }

    println!();
    println!("{}", "Monthly turnover".bold());
    for month in turnover {
        println!("{} {}", cell(&month.month, 6), format!("{:.1}", month.rate));
    }

    println!();
    println!("{}", "Stock trend".bold());
    println!(
        "{}",
        format!(
            "{} {} {}",
            cell("DATE", DATE_WIDTH),
            cell_right("VALUE", AMOUNT_WIDTH),
            cell_right("UNITS", 8)
        )
        .dimmed()
    );
    for point in stock_trend {
        println!(
            "{} {} {}",
            cell(&point.date.to_string(), DATE_WIDTH),
            cell_right(&format_money(point.total_value), AMOUNT_WIDTH),
            cell_right(&point.total_units.to_string(), 8)
        );
    }
}

pub(crate) fn print_users(users: &[User]) {
    if users.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "{} {} {} {}",
            cell("NAME", 22),
            cell("EMAIL", 30),
            cell("ROLE", 10),
            "BRANCH"
        )
        .dimmed()
    );
    for user in users {
        println!(
            "{} {} {} {}",
            cell(&user.name, 22),
            cell(&user.email, 30),
            cell(user.role.label(), 10),
            user.branch
        );
    }
}

pub(crate) fn print_branches(branches: &[String]) {
    for branch in branches {
        println!("  - {}", branch);
    }
}

fn stat_line(label: &str, value: &str, paint: impl Fn(&str) -> ColoredString) {
    println!("  {} {}", cell(label, 18), paint(&cell_right(value, 14)));
}

fn cell(text: &str, width: usize) -> String {
    let shown = truncate_to_width(text, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn cell_right(text: &str, width: usize) -> String {
    let shown = truncate_to_width(text, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", " ".repeat(padding), shown)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_is_grouped_and_rounded() {
        assert_eq!(format_money(1250.75), "$1,250.75");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_money(99.999), "$100.00");
        assert_eq!(format_money(-800.5), "-$800.50");
    }

    #[test]
    fn cells_pad_to_the_requested_width() {
        assert_eq!(cell("abc", 5), "abc  ");
        assert_eq!(cell_right("42", 5), "   42");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let shown = truncate_to_width("Portátil Gamer XZ con accesorios", 10);
        assert!(shown.ends_with('…'));
        assert!(shown.width() <= 10);
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        assert_eq!(truncate_to_width("abcde", 5), "abcde");
    }
}
