use crate::ranker::Ranker;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppContext {
    pub ranker: Arc<Ranker>,
}

impl AppContext {
    pub fn new(ranker: Ranker) -> Self {
        Self {
            ranker: Arc::new(ranker),
        }
    }
}
