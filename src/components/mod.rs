//! UI Components
//!
//! Leptos components for the page sections.

mod nav_bar;
mod menu_section;
mod menu_card;
mod item_modal;
mod cart_panel;
mod confirm_button;
mod contact_form;
mod toast_stack;
mod back_to_top;

pub use nav_bar::NavBar;
pub use menu_section::MenuSection;
pub use menu_card::MenuCard;
pub use item_modal::ItemModal;
pub use cart_panel::CartPanel;
pub use confirm_button::ConfirmButton;
pub use contact_form::ContactSection;
pub use toast_stack::ToastStack;
pub use back_to_top::BackToTop;
