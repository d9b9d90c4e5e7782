//! Vitrine App
//!
//! Wires the theme and composition crates into one editing session per
//! storefront, with configuration loading and snapshot persistence.
//!
//! ```rust
//! use vitrine_app::{EditorSession, MemoryStore};
//! use vitrine_compose::{BlockKind, DragConfig};
//! use vitrine_theme::StyleConfig;
//!
//! let mut session = EditorSession::open(
//!     Box::new(MemoryStore::new()),
//!     StyleConfig::default(),
//!     DragConfig::default(),
//! );
//! session.set_palette("y2k");
//! session.add_block(BlockKind::Marquee, "Drop day").unwrap();
//!
//! assert_eq!(session.tokens().primary_color, "#FF6B9D");
//! ```

pub mod config;
pub mod persistence;
pub mod session;

pub use config::{ConfigError, EditorConfig, LogConfig, StoreConfig, CONFIG_FILE_NAME};
pub use persistence::{JsonFileStore, MemoryStore, PersistError, Snapshot, SnapshotStore};
pub use session::EditorSession;
