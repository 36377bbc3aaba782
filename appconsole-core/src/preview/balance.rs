//! Balance card variants

use serde::Serialize;

use crate::preview::header::HeaderContext;

/// The eight balance card layouts. Out-of-range numbers select [`BalanceVariant::Classic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BalanceVariant {
    /// 1: label over amount
    #[default]
    Classic,
    /// 2: amount only, one line
    Compact,
    /// 3: filled with the primary color
    Gradient,
    /// 4: balance and points side by side
    Split,
    /// 5: small caption style
    Minimal,
    /// 6: points first, balance second
    PointsFocus,
    /// 7: amount with top-up / transfer actions
    WithActions,
    /// 8: bordered card
    Outlined,
}

impl BalanceVariant {
    pub const ALL: [BalanceVariant; 8] = [
        Self::Classic,
        Self::Compact,
        Self::Gradient,
        Self::Split,
        Self::Minimal,
        Self::PointsFocus,
        Self::WithActions,
        Self::Outlined,
    ];

    /// Variant for a stored number; anything outside 1–8 is variant 1.
    pub fn from_number(n: Option<i64>) -> Self {
        match n {
            Some(2) => Self::Compact,
            Some(3) => Self::Gradient,
            Some(4) => Self::Split,
            Some(5) => Self::Minimal,
            Some(6) => Self::PointsFocus,
            Some(7) => Self::WithActions,
            Some(8) => Self::Outlined,
            _ => Self::Classic,
        }
    }

    pub fn number(self) -> i64 {
        match self {
            Self::Classic => 1,
            Self::Compact => 2,
            Self::Gradient => 3,
            Self::Split => 4,
            Self::Minimal => 5,
            Self::PointsFocus => 6,
            Self::WithActions => 7,
            Self::Outlined => 8,
        }
    }
}

/// Rendered balance card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceCardPreview {
    pub variant: BalanceVariant,
    /// Text lines, top to bottom.
    pub lines: Vec<String>,
    /// Action buttons under the amount.
    pub actions: Vec<String>,
    pub filled: bool,
    pub bordered: bool,
}

/// Render a balance card of `variant` with the context's sample values.
pub fn render_balance(variant: BalanceVariant, ctx: &HeaderContext) -> BalanceCardPreview {
    let label = "Saldo".to_string();
    let balance = ctx.balance.clone();
    let points = ctx.points.clone();

    let (lines, actions, filled, bordered) = match variant {
        BalanceVariant::Classic => (vec![label, balance], vec![], false, false),
        BalanceVariant::Compact => (vec![format!("{label} {balance}")], vec![], false, false),
        BalanceVariant::Gradient => (vec![label, balance, points], vec![], true, false),
        BalanceVariant::Split => (vec![format!("{balance} | {points}")], vec![], false, false),
        BalanceVariant::Minimal => (vec![balance], vec![], false, false),
        BalanceVariant::PointsFocus => (vec![points, balance], vec![], false, false),
        BalanceVariant::WithActions => (
            vec![label, balance],
            vec!["Top Up".to_string(), "Transfer".to_string()],
            false,
            false,
        ),
        BalanceVariant::Outlined => (vec![label, balance], vec![], false, true),
    };

    BalanceCardPreview {
        variant,
        lines,
        actions,
        filled,
        bordered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_is_variant_one() {
        for n in [None, Some(0), Some(9), Some(-1), Some(i64::MAX)] {
            assert_eq!(BalanceVariant::from_number(n), BalanceVariant::Classic);
        }
    }

    #[test]
    fn numbers_roundtrip() {
        for v in BalanceVariant::ALL {
            assert_eq!(BalanceVariant::from_number(Some(v.number())), v);
        }
    }

    #[test]
    fn every_variant_renders_the_balance() {
        let ctx = HeaderContext::sample("Home", "App", 9);
        for v in BalanceVariant::ALL {
            let card = render_balance(v, &ctx);
            assert!(!card.lines.is_empty());
            assert!(card.lines.iter().any(|l| l.contains(&ctx.balance)), "{v:?}");
        }
    }
}
