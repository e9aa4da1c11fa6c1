//! State model for a 3D model part configurator.
//!
//! This crate holds everything the configurator remembers about a loaded
//! model, independent of any renderer or UI toolkit:
//!
//! - a [`PartRegistry`] with per-part visibility and color,
//! - the single [`Selection`] targeted by the color editor,
//! - a [`GroupDraft`] and the committed [`GroupStore`],
//! - named visibility snapshots per group in the [`VariantStore`],
//! - remembered colors per part in the [`ColorHistory`].
//!
//! All changes are expressed as [`Action`]s applied through [`reduce`] or
//! [`ConfiguratorState::dispatch`]. A rejected action returns an [`Error`]
//! and leaves the state untouched.
//!
//! # Example
//!
//! ```
//! use configurator::{Action, ConfiguratorState, SceneNode};
//!
//! let mut state = ConfiguratorState::new();
//! state
//!     .dispatch(Action::InitializeParts(vec![
//!         SceneNode::named("Cab"),
//!         SceneNode::named("Bucket"),
//!     ]))
//!     .unwrap();
//!
//! state.dispatch(Action::TogglePart("Bucket".into())).unwrap();
//! assert_eq!(state.parts.is_visible("Bucket"), Some(false));
//! ```

pub mod color;
pub mod colors;
mod error;
pub mod groups;
mod name;
pub mod parts;
pub mod scene;
pub mod selection;
pub mod state;
pub mod variants;

pub use color::PartColor;
pub use colors::ColorHistory;
pub use error::{Error, Result};
pub use groups::{Group, GroupDraft, GroupStore};
pub use name::Name;
pub use parts::{Part, PartRegistry, Snapshot};
pub use scene::SceneNode;
pub use selection::Selection;
pub use state::{Action, ConfiguratorState, reduce};
pub use variants::{Variant, VariantStore};
