use crate::prelude::*;
use crate::statistics::{linear_regression, Regressor};

/// Web application state, constructed once and shared across the requests.
#[derive(Clone)]
pub struct State {
    pub regressor: Arc<dyn Regressor>,
}

impl State {
    pub fn new(regressor: impl Regressor) -> Self {
        Self { regressor: Arc::new(regressor) }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(linear_regression)
    }
}
