//! Console course registration.
//!
//! Students are registered for courses through a numbered menu, listed, and
//! saved to a JSON enrollment file that is loaded again on the next start.

pub mod app;
pub mod console;
pub mod core;
pub mod error;
pub mod logging;
pub mod registration;
pub mod storage;
pub mod student;
pub mod test_utils;
pub mod utils;

pub use app::{MenuChoice, Session, SessionEnd};
pub use console::{Console, Reply, TerminalConsole};
pub use error::{RegistrationError, TechnicalDetail, ValidationError};
pub use student::{Field, Student, StudentRecord};
