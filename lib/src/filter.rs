use crate::play::{Grouping, LoggedPlay, PlayCategory};
use std::sync::Arc;

pub type Predicate = Arc<dyn Fn(&LoggedPlay) -> bool + Send + Sync>;

#[derive(Clone, Default)]
pub struct PlayFilter {
    filter_expr: Option<Predicate>,
}

impl PlayFilter {
    pub fn new() -> Self {
        Self { filter_expr: None }
    }

    // Adds a filter for the quarterback taking the snap
    pub fn qb(self, qb: &str) -> Self {
        let qb = qb.to_string();
        let expr: Predicate =
            Arc::new(move |play: &LoggedPlay| play.qb.as_deref() == Some(qb.as_str()));
        self.extend_filter(expr)
    }

    // Adds a filter for the practice block
    pub fn block(self, block: &str) -> Self {
        let block = block.to_string();
        let expr: Predicate =
            Arc::new(move |play: &LoggedPlay| play.block.as_deref() == Some(block.as_str()));
        self.extend_filter(expr)
    }

    // Adds a filter for the game or practice session
    pub fn session(self, session: &str) -> Self {
        let session = session.to_string();
        let expr: Predicate =
            Arc::new(move |play: &LoggedPlay| play.session.as_deref() == Some(session.as_str()));
        self.extend_filter(expr)
    }

    pub fn category(self, category: PlayCategory) -> Self {
        let grouping = Grouping::Known(category);
        let expr: Predicate =
            Arc::new(move |play: &LoggedPlay| play.category.as_ref() == Some(&grouping));
        self.extend_filter(expr)
    }

    // Adds a filter for the running back in the game
    pub fn running_back(self, rb: &str) -> Self {
        let rb = rb.to_string();
        let expr: Predicate =
            Arc::new(move |play: &LoggedPlay| play.rb_in.as_deref() == Some(rb.as_str()));
        self.extend_filter(expr)
    }

    // Combines the current filter with a new one using AND logic
    fn extend_filter(mut self, new_expr: Predicate) -> Self {
        self.filter_expr = match self.filter_expr.take() {
            Some(existing_expr) => {
                let combined: Predicate = Arc::new(move |play: &LoggedPlay| {
                    existing_expr(play) && new_expr(play)
                });
                Some(combined)
            }
            None => Some(new_expr),
        };
        self
    }

    // Builds the final filter predicate
    pub fn build(self) -> Predicate {
        match self.filter_expr {
            Some(expr) => expr,
            None => Arc::new(|_: &LoggedPlay| true),
        }
    }
}
