use super::events::Event;
use super::types::Command;

/// Trait for dispatching dashboard commands.
///
/// Shortcuts and CLI actions both go through this, so the same key produces
/// the same effect regardless of where it came from.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Events**: On success, dispatch returns a non-empty `Vec<Event>`
///   describing what changed. Renderers react to these without polling.
/// - **Async effects**: `Refresh` and `ToggleLive` only schedule work. The
///   resulting snapshot arrives later on the controller's watch channel.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_trait_is_implementable() {
        struct TestStore;
        impl Store for TestStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Ok(vec![Event::RefreshRequested])
            }
        }
        let mut store = TestStore;
        let result = store.dispatch(Command::Refresh);
        assert_eq!(result.unwrap(), vec![Event::RefreshRequested]);
    }

    #[test]
    fn test_store_impl_can_return_error() {
        struct FailingStore;
        impl Store for FailingStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Err("not implemented".to_string())
            }
        }
        let mut store = FailingStore;
        assert!(store.dispatch(Command::Refresh).is_err());
    }
}
