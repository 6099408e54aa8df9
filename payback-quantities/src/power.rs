use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::{Quantity, cost::Cost, energy::KilowattHours, rate::KilowattRate, time::Hours};

pub type Kilowatts = Quantity<1, 0, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kW", self.0.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kW", self.0.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        Quantity(self.0 * hours.0)
    }
}

impl Mul<KilowattRate> for Kilowatts {
    type Output = Cost;

    fn mul(self, rate: KilowattRate) -> Self::Output {
        Quantity(self.0 * rate.0)
    }
}

quantity!(
    /// Power in megawatts, the unit flexibility markets are priced in.
    Megawatts, suffix: "MW", precision: 3
);

impl From<Kilowatts> for Megawatts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self::new(kilowatts.get() / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_megawatts() {
        assert_abs_diff_eq!(Megawatts::from(Kilowatts::from(250.0)).get(), 0.25);
    }

    #[test]
    fn test_energy() {
        assert_abs_diff_eq!((Kilowatts::from(355.0) * Hours::from(895.0)).get(), 317_725.0);
    }
}
