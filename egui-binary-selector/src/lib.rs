//! A two-option toggle for boolean fields in egui inspectors.
//!
//! Instead of a checkbox, a boolean is drawn as two adjacent buttons, one per option. The
//! selected option is frozen as a tinted label, so the only way to change the value is to pick
//! the other option. When several selected objects disagree on the value, both options stay
//! clickable.
//!
//! The widget talks to its GUI through [`DrawHost`] and to the edited value through
//! [`FieldHandle`], with [`EguiHost`] and [`MultiField`] as the egui implementations. Structs
//! can opt in field by field with `#[derive(Inspect)]`:
//!
//! ```ignore
//! #[derive(Inspect)]
//! struct Light {
//!     #[inspect(false_text = "Off", true_text = "On")]
//!     enabled: bool,
//!     intensity: f32,
//! }
//! ```

mod caption;
mod config;
mod context;
mod drawer;
mod egui_host;
mod field;
mod host;
mod impls;
pub mod layout;
mod selector;
mod style;

#[cfg(test)]
mod test_host;

pub use caption::Caption;
pub use config::{SelectorArgs, SelectorConfig};
pub use context::{DrawState, GuiContext, StateScope};
pub use drawer::{binary_select_property, binary_select_property_labeled, BinarySelectorDrawer};
pub use egui;
pub use egui_binary_selector_derive::Inspect;
pub use egui_host::EguiHost;
pub use field::{FieldData, FieldHandle, FieldKind, FieldValue, MultiField};
pub use host::DrawHost;
pub use impls::{Inspect, InspectArgs};
pub use selector::{binary_select_field, binary_select_field_labeled};
pub use style::{SelectorStyle, StyleError};
