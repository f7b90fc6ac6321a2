use analytics::{CumulativePoint, Grade, PortfolioSummary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use core_types::{format_odds, Outcome, Wager};
use rust_decimal::Decimal;

pub fn units(value: Decimal, precision: u32) -> String {
    format!("{:.*}", precision as usize, value.round_dp(precision))
}

pub fn signed_units(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp(precision);
    if rounded > Decimal::ZERO {
        format!("+{}", units(rounded, precision))
    } else {
        units(rounded, precision)
    }
}

fn percent(value: Decimal, precision: u32) -> String {
    format!("{}%", units(value, precision))
}

fn profit_color(value: Decimal) -> Color {
    if value.is_sign_negative() && !value.is_zero() {
        Color::Red
    } else {
        Color::Green
    }
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::A => Color::Green,
        Grade::B => Color::Cyan,
        Grade::C => Color::Yellow,
        Grade::D => Color::DarkYellow,
        Grade::F => Color::Red,
        Grade::NotApplicable => Color::Grey,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

pub fn summary_table(summary: &PortfolioSummary, precision: u32) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Units Won", "ROI", "Record", "Win Rate", "Grade"]);
    table.add_row(vec![
        Cell::new(signed_units(summary.units_won, precision)).fg(profit_color(summary.units_won)),
        Cell::new(percent(summary.roi, precision)).fg(profit_color(summary.roi)),
        Cell::new(summary.record()),
        // Win rate is shown one place coarser than units.
        Cell::new(percent(summary.win_rate, precision.saturating_sub(1))),
        Cell::new(summary.grade).fg(grade_color(summary.grade)),
    ]);
    table
}

pub fn bets_table(bets: &[Wager], precision: u32) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Date", "Description", "Sport", "Odds", "Stake", "Result", "Profit",
    ]);
    for bet in bets {
        let profit = if bet.outcome() == Outcome::Pending {
            Cell::new("-")
        } else {
            Cell::new(signed_units(bet.profit(), precision)).fg(profit_color(bet.profit()))
        };
        table.add_row(vec![
            Cell::new(bet.placed_at().format("%Y-%m-%d")),
            Cell::new(bet.description()),
            Cell::new(bet.sport().unwrap_or("-")),
            Cell::new(format_odds(bet.odds())).set_alignment(CellAlignment::Right),
            Cell::new(units(bet.stake().units(), precision)).set_alignment(CellAlignment::Right),
            Cell::new(bet.outcome()),
            profit.set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn series_table(points: &[CumulativePoint], precision: u32) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Cumulative"]);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.label),
            Cell::new(signed_units(point.cumulative, precision))
                .fg(profit_color(point.cumulative))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
