//! Isolated state containers.
//!
//! Each [`Store`] exclusively owns one piece of UI state and mutates it only
//! through its [`Reducer`]. The grid and the name live in separate stores so a
//! change to one never bumps the version the other's subscribers compare
//! against.

pub mod grid;
pub mod name;

/// A pure state transition: old state + action -> new state.
pub trait Reducer {
    type State;
    type Action: std::fmt::Debug;
    type Error: std::error::Error;

    fn reduce(state: &Self::State, action: Self::Action) -> Result<Self::State, Self::Error>;
}

/// Owner of a single piece of state plus the version counter that memoized
/// components key on.
pub struct Store<R: Reducer> {
    state: R::State,
    version: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            version: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Bumped on every successful dispatch.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply `action`. On error the state and version are left untouched.
    pub fn dispatch(&mut self, action: R::Action) -> Result<(), R::Error> {
        tracing::debug!(store = std::any::type_name::<R>(), ?action, "dispatch");
        self.state = R::reduce(&self.state, action)?;
        self.version = self.version.wrapping_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct Counter;

    #[derive(Debug)]
    enum CounterAction {
        Add(u32),
    }

    impl Reducer for Counter {
        type State = u32;
        type Action = CounterAction;
        type Error = Infallible;

        fn reduce(state: &u32, action: CounterAction) -> Result<u32, Infallible> {
            match action {
                CounterAction::Add(n) => Ok(state + n),
            }
        }
    }

    #[test]
    fn test_dispatch_bumps_version() {
        let mut store: Store<Counter> = Store::new(1);
        assert_eq!(store.version(), 0);
        store.dispatch(CounterAction::Add(2)).unwrap();
        assert_eq!(*store.state(), 3);
        assert_eq!(store.version(), 1);
    }
}
