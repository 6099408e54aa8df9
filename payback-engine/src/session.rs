use crate::{engine::Engine, parameters::Parameters, valuation::Valuation};

/// Interactive evaluation session that remembers the last valuation.
///
/// Every parameter change leads to a full recomputation, the cache only spares re-evaluating
/// the very same parameters.
#[must_use]
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    cached: Option<(Parameters, Valuation)>,
}

impl Session {
    pub const fn new(engine: Engine) -> Self {
        Self { engine, cached: None }
    }

    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn evaluate(&mut self, parameters: &Parameters) -> &Valuation {
        if self.cached.as_ref().is_some_and(|(cached, _)| cached != parameters) {
            self.cached = None;
        }
        let (_, valuation) = self
            .cached
            .get_or_insert_with(|| (parameters.clone(), self.engine.evaluate(parameters)));
        valuation
    }

    /// Last evaluated parameters and their valuation.
    pub fn last(&self) -> Option<(&Parameters, &Valuation)> {
        self.cached.as_ref().map(|(parameters, valuation)| (parameters, valuation))
    }
}

#[cfg(test)]
mod tests {
    use payback_quantities::Cost;

    use super::*;

    #[test]
    fn test_recomputes_on_change() {
        let mut session = Session::default();
        let first = session.evaluate(&Parameters::default()).clone();

        let parameters = Parameters { include_estimates: false, ..Parameters::default() };
        let second = session.evaluate(&parameters).clone();
        assert!(second.gross_value < first.gross_value);
        assert_eq!(session.last().map(|(last, _)| last), Some(&parameters));

        assert_eq!(session.evaluate(&Parameters::default()), &first);
    }

    #[test]
    fn test_matches_engine() {
        let parameters = Parameters { investment: Cost::new(2_000_000.0), ..Parameters::default() };
        let mut session = Session::new(Engine::default());
        let valuation = session.evaluate(&parameters).clone();
        assert_eq!(valuation, Engine::default().evaluate(&parameters));
        assert_eq!(session.evaluate(&parameters), &valuation);
    }

    #[test]
    fn test_empty() {
        assert!(Session::default().last().is_none());
    }
}
