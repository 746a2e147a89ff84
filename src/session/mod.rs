pub mod state;
pub mod state_machine;

pub use state::{SessionState, WordPair, WordPairError, LOAD_FAILED_MESSAGE, NO_DATA_MESSAGE};
pub use state_machine::{handle_fetch_result, SessionError, WordPairSession};
