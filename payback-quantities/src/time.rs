use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Hours, also used for specific yield: kWh per installed kWp is a number of full-load hours.
pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    pub const ONE: Self = Self::new(1.0);
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} h", self.0.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0.0)
    }
}
