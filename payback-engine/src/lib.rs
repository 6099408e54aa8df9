//! Annual value and payback of a battery installation that takes part in the flexibility market.

pub mod constants;
pub mod engine;
pub mod estimates;
pub mod flexibility;
pub mod parameters;
mod prelude;
pub mod returns;
pub mod session;
pub mod solar;
pub mod valuation;

pub use self::{
    constants::Constants,
    engine::Engine,
    parameters::Parameters,
    session::Session,
    valuation::{RevenueStream, Valuation},
};
