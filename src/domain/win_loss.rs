//! Winner/loser split and profit factor.

use super::record::RecordSet;

#[derive(Debug, Clone, PartialEq)]
pub struct WinLossStats {
    pub avg_win: f64,
    /// Mean of losing gains (negative), or 0 without losses.
    pub avg_loss: f64,
    /// `gross_profit / gross_loss`, `f64::INFINITY` when nothing lost.
    pub profit_factor: f64,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub gross_profit: f64,
    /// Absolute value of the summed losses.
    pub gross_loss: f64,
}

pub fn compute_win_loss(records: &RecordSet) -> WinLossStats {
    let mut wins = 0usize;
    let mut losses = 0usize;
    let mut breakeven = 0usize;
    let mut win_sum = 0.0_f64;
    let mut loss_sum = 0.0_f64;

    for record in records {
        let gain = record.gain;
        if gain > 0.0 {
            wins += 1;
            win_sum += gain;
        } else if gain < 0.0 {
            losses += 1;
            loss_sum += gain;
        } else {
            breakeven += 1;
        }
    }

    let avg_win = if wins > 0 {
        win_sum / wins as f64
    } else {
        0.0
    };

    let avg_loss = if losses > 0 {
        loss_sum / losses as f64
    } else {
        0.0
    };

    let profit_factor = if losses > 0 {
        win_sum / loss_sum.abs()
    } else {
        f64::INFINITY
    };

    WinLossStats {
        avg_win,
        avg_loss,
        profit_factor,
        wins,
        losses,
        breakeven,
        gross_profit: win_sum,
        gross_loss: loss_sum.abs(),
    }
}
