//! Certificate generator: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering
//! and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `GeneratorProps`, `GeneratorComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Host the form, the template picker, the loading overlay and the
//!   certificate preview modal of the Generate tab.

use yew::prelude::*;

pub mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GeneratorProps;
pub use state::GeneratorComponent;

impl Component for GeneratorComponent {
    type Message = Msg;
    type Properties = GeneratorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GeneratorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
