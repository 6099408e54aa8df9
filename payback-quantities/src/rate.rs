use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{Quantity, cost::Cost, power::Megawatts};

/// Currency per kilowatt-hour.
pub type KilowattHourRate = Quantity<-1, -1, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kr/kWh", self.0.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kr/kWh", self.0.0)
    }
}

/// Currency per installed kilowatt, annual.
pub type KilowattRate = Quantity<-1, 0, 1>;

impl Display for KilowattRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kr/kW", self.0.0)
    }
}

impl Debug for KilowattRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kr/kW", self.0.0)
    }
}

quantity!(
    /// Flexibility market price in currency per megawatt-hour.
    ///
    /// Availability prices are quoted per megawatt-hour of committed capacity per hour,
    /// multiplying by the committed power gives the income per hour.
    MegawattHourRate, suffix: "kr/MWh", precision: 0
);

impl Mul<Megawatts> for MegawattHourRate {
    type Output = Cost;

    fn mul(self, power: Megawatts) -> Self::Output {
        Cost::new(self.get() * power.get())
    }
}
