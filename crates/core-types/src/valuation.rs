use rust_decimal::Decimal;

use crate::enums::Outcome;
use crate::structs::{AmericanOdds, Stake};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Calculates the profit, in units, of a wager with the given line, stake and outcome.
///
/// * A winning wager at positive odds returns `stake * odds / 100`.
/// * A winning wager at negative odds returns `stake * 100 / |odds|`.
/// * A loss forfeits the stake.
/// * Pending, pushed and voided wagers have no profit.
///
/// `AmericanOdds` cannot hold zero, so both win branches are always defined.
pub fn profit(odds: AmericanOdds, stake: Stake, outcome: Outcome) -> Decimal {
    match outcome {
        Outcome::Win => {
            let line = Decimal::from(odds.value());
            if line.is_sign_positive() {
                stake.units() * (line / HUNDRED)
            } else {
                stake.units() * (HUNDRED / line.abs())
            }
        }
        Outcome::Loss => -stake.units(),
        Outcome::Pending | Outcome::Push | Outcome::Void => Decimal::ZERO,
    }
}

/// Renders American odds with an explicit sign, e.g. `+150` or `-110`.
pub fn format_odds(odds: AmericanOdds) -> String {
    let value = odds.value();
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn odds(v: i32) -> AmericanOdds {
        AmericanOdds::new(v).unwrap()
    }

    fn stake(v: Decimal) -> Stake {
        Stake::new(v).unwrap()
    }

    #[test]
    fn underdog_win_pays_odds_over_hundred() {
        assert_eq!(profit(odds(150), stake(dec!(1)), Outcome::Win), dec!(1.5));
        assert_eq!(profit(odds(200), stake(dec!(2.5)), Outcome::Win), dec!(5));
    }

    #[test]
    fn favourite_win_pays_hundred_over_odds() {
        let p = profit(odds(-110), stake(dec!(1)), Outcome::Win);
        assert_eq!(p.round_dp(5), dec!(0.90909));
        assert_eq!(profit(odds(-200), stake(dec!(3)), Outcome::Win), dec!(1.5));
    }

    #[test]
    fn even_money_lines_pay_the_stake() {
        assert_eq!(profit(odds(100), stake(dec!(2)), Outcome::Win), dec!(2));
        assert_eq!(profit(odds(-100), stake(dec!(2)), Outcome::Win), dec!(2));
    }

    #[test]
    fn loss_forfeits_the_stake_regardless_of_line() {
        assert_eq!(profit(odds(-110), stake(dec!(1)), Outcome::Loss), dec!(-1));
        assert_eq!(profit(odds(400), stake(dec!(1.5)), Outcome::Loss), dec!(-1.5));
    }

    #[test]
    fn unsettled_outcomes_have_no_profit() {
        for line in [-500, -110, 100, 150, 1200] {
            for outcome in [Outcome::Pending, Outcome::Push, Outcome::Void] {
                assert_eq!(profit(odds(line), stake(dec!(4.25)), outcome), Decimal::ZERO);
            }
        }
    }

    #[test]
    fn formats_odds_with_sign() {
        assert_eq!(format_odds(odds(150)), "+150");
        assert_eq!(format_odds(odds(-110)), "-110");
    }
}
