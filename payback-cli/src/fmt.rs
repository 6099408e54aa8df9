use chrono::NaiveDate;
use clap::ValueEnum;
use payback_engine::returns::Payback;
use payback_quantities::{Cost, Percentage};

/// Number formatting convention of the rendered output.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Locale {
    /// Norwegian Bokmål: `1 234 567,8`.
    #[default]
    NbNo,

    /// US English: `1,234,567.8`.
    EnUs,
}

impl Locale {
    const fn group_separator(self) -> char {
        match self {
            Self::NbNo => '\u{a0}',
            Self::EnUs => ',',
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::NbNo => ',',
            Self::EnUs => '.',
        }
    }

    const fn minus_sign(self) -> char {
        match self {
            Self::NbNo => '\u{2212}',
            Self::EnUs => '-',
        }
    }

    /// Format the number with digit grouping and the given number of decimals.
    ///
    /// Halves are rounded away from zero.
    #[must_use]
    pub fn number(self, value: f64, precision: usize) -> String {
        let scale = (0..precision).fold(1.0, |scale, _| scale * 10.0);
        let formatted = format!("{:.*}", precision, (value.abs() * scale).round() / scale);
        let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

        let mut output = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
        if value < 0.0 && formatted.bytes().any(|byte| matches!(byte, b'1'..=b'9')) {
            output.push(self.minus_sign());
        }
        for (i, digit) in integer.chars().enumerate() {
            if i != 0 && (integer.len() - i) % 3 == 0 {
                output.push(self.group_separator());
            }
            output.push(digit);
        }
        if !fraction.is_empty() {
            output.push(self.decimal_separator());
            output.push_str(fraction);
        }
        output
    }

    /// Whole currency units.
    #[must_use]
    pub fn cost(self, cost: Cost) -> String {
        format!("{} kr", self.number(cost.get(), 0))
    }

    #[must_use]
    pub fn percentage(self, percentage: Percentage) -> String {
        let number = self.number(percentage.get(), 1);
        match self {
            Self::NbNo => format!("{number}\u{a0}%"),
            Self::EnUs => format!("{number}%"),
        }
    }

    /// Format a ratio as a percentage.
    #[must_use]
    pub fn ratio(self, ratio: f64) -> String {
        self.percentage(Percentage::new(ratio * 100.0))
    }

    #[must_use]
    pub fn date(self, date: NaiveDate) -> String {
        match self {
            Self::NbNo => date.format("%d.%m.%Y").to_string(),
            Self::EnUs => date.format("%m/%d/%Y").to_string(),
        }
    }

    #[must_use]
    pub fn payback(self, payback: Payback) -> String {
        match payback {
            Payback::NotApplicable => "n/a".to_owned(),
            Payback::Never => "never".to_owned(),
            Payback::Years(years) => format!("{} years", self.number(years, 1)),
        }
    }
}
