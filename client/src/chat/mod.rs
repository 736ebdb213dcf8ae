//! Chat widget: controller, transport seam, and rendering seam.
//!
//! ARCHITECTURE
//! ============
//! `ChatController` owns the `ChatSession` and makes every decision. It talks
//! to the network only through `ChatTransport` and to the page only through
//! `ChatView`, so tests drive it with in-memory doubles and the Leptos widget
//! plugs in `HttpTransport` + `SignalView`.

pub mod config;
pub mod controller;
pub mod transport;
pub mod view;

pub use config::{ChatConfig, FALLBACK_MESSAGE};
pub use controller::ChatController;
pub use transport::{ChatTransport, HttpTransport};
pub use view::{ChatView, SignalView};
