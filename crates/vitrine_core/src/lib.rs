//! Vitrine Core
//!
//! Foundational primitives shared by the theming and page-composition crates:
//!
//! - **Colors**: hex parsing/formatting and integer HSL conversion
//! - **Events**: platform-agnostic pointer and keyboard input
//! - **State Machines**: flat statecharts for interaction phases
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::{Color, Hsl};
//!
//! let color = Color::parse_hex("#FF0000").unwrap();
//! assert_eq!(color.to_hsl(), Hsl::new(0, 100, 50));
//! ```

pub mod color;
pub mod events;
pub mod fsm;

pub use color::{Color, ColorParseError, Hsl};
pub use events::{Event, EventData, EventType, KeyCode, Modifiers, Point};
pub use fsm::{StateMachine, StateMachineBuilder, Step};
