pub mod diagnostic;
pub mod position;
pub mod rendering;
pub mod severity;

pub use diagnostic::Diagnostic;
pub use position::{SourceLocation, Span};
pub use severity::{DisplayLevel, Severity};
