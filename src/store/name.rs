//! The name store: one string, kept apart from the grid.

use super::{Reducer, Store};
use std::convert::Infallible;

pub type NameStore = Store<NameReducer>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAction {
    /// Replace the name with the text as typed.
    Typed(String),
}

#[derive(Debug)]
pub struct NameReducer;

impl Reducer for NameReducer {
    type State = String;
    type Action = NameAction;
    type Error = Infallible;

    fn reduce(_state: &String, action: NameAction) -> Result<String, Infallible> {
        match action {
            NameAction::Typed(text) => Ok(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_replaces_verbatim() {
        let mut store = NameStore::new(String::new());
        store.dispatch(NameAction::Typed("Toto".into())).unwrap();
        assert_eq!(store.state(), "Toto");
        store.dispatch(NameAction::Typed("  spaced  ".into())).unwrap();
        assert_eq!(store.state(), "  spaced  ");
        assert_eq!(store.version(), 2);
    }
}
