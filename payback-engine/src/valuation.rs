use enumset::{EnumSet, EnumSetType};
use payback_quantities::{Cost, KilowattHours};
use serde::Serialize;

use crate::{flexibility::FlexibilityBreakdown, returns::Payback, solar::SolarBreakdown};

#[derive(Debug, Serialize, EnumSetType)]
#[serde(rename_all = "kebab-case")]
pub enum RevenueStream {
    Flexibility,
    Solar,
    PeakShaving,
    SpotArbitrage,
}

impl RevenueStream {
    /// Unverified streams that the report must label as estimates.
    #[must_use]
    pub const fn is_estimate(self) -> bool {
        matches!(self, Self::PeakShaving | Self::SpotArbitrage)
    }
}

/// Annual value of a battery installation.
///
/// Every stream is always present, a stream that is switched off or has nothing to work with
/// is zero.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Valuation {
    pub flexibility_income: Cost,
    pub solar_utilization_value: Cost,
    pub peak_shaving_value: Cost,
    pub spot_arbitrage_value: Cost,

    pub gross_value: Cost,
    pub operator_fee: Cost,
    pub net_value: Cost,

    /// `0.0` when the payback period is undefined, see [`Valuation::payback`].
    pub payback_years: f64,

    pub roi: f64,

    pub payback: Payback,

    pub flexibility: FlexibilityBreakdown,

    /// Present when the solar stream is switched on and solar capacity is installed.
    pub solar: Option<SolarBreakdown>,

    /// Energy the spot-arbitrage estimate is sized by, present when estimates are switched on.
    pub usable_energy: Option<KilowattHours>,

    /// Streams whose gates are switched on.
    #[serde(skip)]
    pub included: EnumSet<RevenueStream>,
}

impl Valuation {
    pub const fn amount(&self, stream: RevenueStream) -> Cost {
        match stream {
            RevenueStream::Flexibility => self.flexibility_income,
            RevenueStream::Solar => self.solar_utilization_value,
            RevenueStream::PeakShaving => self.peak_shaving_value,
            RevenueStream::SpotArbitrage => self.spot_arbitrage_value,
        }
    }

    /// Stream share of the gross value, undefined when the gross value is zero.
    #[must_use]
    pub fn share(&self, stream: RevenueStream) -> Option<f64> {
        (self.gross_value != Cost::ZERO).then(|| self.amount(stream) / self.gross_value)
    }

    /// All streams in the reporting order, including the switched-off ones.
    pub fn streams(&self) -> impl Iterator<Item = StreamValue> + '_ {
        EnumSet::<RevenueStream>::all().iter().map(|stream| StreamValue {
            stream,
            amount: self.amount(stream),
            share: self.share(stream),
            is_estimate: stream.is_estimate(),
            is_included: self.included.contains(stream),
        })
    }

    /// Included streams only.
    pub fn included_streams(&self) -> impl Iterator<Item = StreamValue> + '_ {
        self.streams().filter(|value| value.is_included)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct StreamValue {
    pub stream: RevenueStream,
    pub amount: Cost,
    pub share: Option<f64>,
    pub is_estimate: bool,
    pub is_included: bool,
}
