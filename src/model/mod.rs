pub mod analytics;
pub mod appointments;
pub mod diagnosis;
pub mod navigation;
pub mod records;
pub mod route;
pub mod ticket;
pub mod toast;
pub mod voice;

pub use diagnosis::{DiagnosisPhase, DiagnosisReport, DiagnosisSession, SelectedImage};
pub use navigation::{NavItem, NavLayout};
pub use route::Route;
pub use ticket::{Completion, Ticket};
pub use toast::{ToastId, Toasts};
pub use voice::{RecordingToggle, VitalField, VoiceSession};
