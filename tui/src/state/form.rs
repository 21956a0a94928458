use estimator::{configs::InputsConfig, Estimate, HouseRequest, Session};

const MAX_LOGS: usize = 200;

/// The input that receives the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Region,
    Area,
    Age,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Region => Field::Area,
            Field::Area => Field::Age,
            Field::Age => Field::Region,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Region => Field::Age,
            Field::Area => Field::Region,
            Field::Age => Field::Area,
        }
    }
}

/// The result of the last submitted request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Estimate(Estimate),
    Rejected(String),
}

/// A single entry shown in the events panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// The values currently picked by the user.
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: Field,
    pub region: usize,
    pub area: f64,
    pub age: f64,
    pub outcome: Option<Outcome>,
    pub logs: Vec<LogLine>,
}

impl FormState {
    /// Creates a new `FormState` with the first region and the default slider values.
    pub fn new(inputs: &InputsConfig) -> Self {
        Self {
            focus: Field::Region,
            region: 0,
            area: inputs.area.default,
            age: inputs.age.default,
            outcome: None,
            logs: Vec::new(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Moves the region selection by `delta`, staying inside `[0, regions)`.
    pub fn move_region(&mut self, delta: isize, regions: usize) {
        if regions == 0 {
            return;
        }

        let last = regions as isize - 1;
        self.region = (self.region as isize + delta).clamp(0, last) as usize;
    }

    /// Moves the focused slider by `steps` of its step size.
    pub fn adjust(&mut self, inputs: &InputsConfig, steps: f64) {
        match self.focus {
            Field::Region => {}
            Field::Area => self.area = inputs.area.clamp(self.area + steps * inputs.area.step),
            Field::Age => self.age = inputs.age.clamp(self.age + steps * inputs.age.step),
        }
    }

    /// Builds the request for the current values, `None` if there's no region to pick.
    pub fn request(&self, regions: &[String]) -> Option<HouseRequest> {
        let region = regions.get(self.region)?;
        Some(HouseRequest::new(region.as_str(), self.area, self.age))
    }

    /// Asks the session for an estimate and keeps the outcome. Errors are kept as a message,
    /// the form stays usable.
    pub fn submit(&mut self, session: &Session) {
        let Some(request) = self.request(session.regions()) else {
            self.outcome = Some(Outcome::Rejected("there are no regions to choose from".into()));
            return;
        };

        let outcome = match session.estimate(&request) {
            Ok(estimate) => {
                self.push_log(
                    "INFO",
                    format!(
                        "{} {:.0} m² {:.0}y: {:.2} x10k CNY",
                        request.region, request.area, request.age, estimate.price
                    ),
                );
                Outcome::Estimate(estimate)
            }
            Err(e) => {
                self.push_log("ERROR", e.to_string());
                Outcome::Rejected(e.to_string())
            }
        };

        self.outcome = Some(outcome);
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}

#[cfg(test)]
mod tests {
    use estimator::configs::EstimatorConfig;

    use super::*;

    fn session() -> Session {
        let mut config = EstimatorConfig::default();
        config.market.seed = Some(11);
        estimator::start(config).unwrap()
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut form = FormState::new(&InputsConfig::default());
        form.focus_next();
        assert_eq!(form.focus, Field::Area);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, Field::Region);
        form.focus_prev();
        assert_eq!(form.focus, Field::Age);
    }

    #[test]
    fn sliders_stay_in_range() {
        let inputs = InputsConfig::default();
        let mut form = FormState::new(&inputs);

        form.focus = Field::Area;
        form.adjust(&inputs, 1000.0);
        assert_eq!(form.area, 300.0);

        form.focus = Field::Age;
        form.adjust(&inputs, -1000.0);
        assert_eq!(form.age, 0.0);
        form.adjust(&inputs, 3.0);
        assert_eq!(form.age, 3.0);

        form.focus = Field::Region;
        form.adjust(&inputs, 5.0);
        assert_eq!((form.area, form.age), (300.0, 3.0));
    }

    #[test]
    fn region_selection_is_clamped() {
        let mut form = FormState::new(&InputsConfig::default());
        form.move_region(-1, 5);
        assert_eq!(form.region, 0);
        form.move_region(10, 5);
        assert_eq!(form.region, 4);
        form.move_region(1, 0);
        assert_eq!(form.region, 4);
    }

    #[test]
    fn submit_keeps_the_estimate() {
        let session = session();
        let mut form = FormState::new(&session.config().inputs);
        form.submit(&session);

        let Some(Outcome::Estimate(estimate)) = &form.outcome else {
            panic!("expected an estimate, got {:?}", form.outcome);
        };
        assert_eq!(estimate.request.region, session.regions()[0]);
        assert_eq!(estimate.request.area, 100.0);
        assert_eq!(form.logs.len(), 1);
    }

    #[test]
    fn rejected_submit_is_reported() {
        let session = session();
        let mut form = FormState::new(&session.config().inputs);
        form.area = 0.0;
        form.submit(&session);

        assert!(matches!(form.outcome, Some(Outcome::Rejected(_))));
        assert_eq!(form.logs[0].level, "ERROR");

        form.area = 120.0;
        form.submit(&session);
        assert!(matches!(form.outcome, Some(Outcome::Estimate(_))));
    }
}
