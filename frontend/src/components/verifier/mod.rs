//! Certificate verifier: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view
//! rendering.
//!
//! The Verify tab accepts a certificate id, typed manually or taken from an
//! uploaded QR image, and renders the outcome of the asynchronous check.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{VerifierComponent, VerifyMethod, VerifyState};

use crate::services::ServiceHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct VerifierProps {
    pub service: ServiceHandle,
}

impl Component for VerifierComponent {
    type Message = Msg;
    type Properties = VerifierProps;

    fn create(_ctx: &Context<Self>) -> Self {
        VerifierComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
