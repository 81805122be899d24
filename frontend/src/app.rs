//! Application shell: theme handling and the Generate/Verify tab bar.
//!
//! Both tabs stay mounted and the inactive one is hidden, so a generated
//! certificate or a verification result survives tab switches the way the
//! original single-page layout kept them in the DOM.

use yew::prelude::*;

use crate::components::generator::GeneratorComponent;
use crate::components::verifier::VerifierComponent;
use crate::services::ServiceHandle;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Generate,
    Verify,
}

pub enum Msg {
    SetTab(Tab),
    ToggleTheme,
}

pub struct App {
    active_tab: Tab,
    theme: String,
    service: ServiceHandle,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let theme = saved_or_system_theme();
        apply_theme(&theme);
        App {
            active_tab: Tab::Generate,
            theme,
            service: ServiceHandle::from_page_query(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
            Msg::ToggleTheme => {
                self.theme = if self.theme == "light" { "dark" } else { "light" }.to_string();
                apply_theme(&self.theme);
                persist_theme(&self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_button = |tab: Tab, label: &str| {
            html! {
                <button
                    class={classes!("tab-button", (self.active_tab == tab).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div class="app-root">
                <header class="app-header">
                    <h1>{ "CertiAI" }</h1>
                    <button
                        class="theme-toggle"
                        title="Toggle theme"
                        onclick={link.callback(|_| Msg::ToggleTheme)}
                    >
                        { if self.theme == "light" { "🌙" } else { "☀" } }
                    </button>
                </header>

                <div class="tab-bar">
                    { tab_button(Tab::Generate, "Generate Certificate") }
                    { tab_button(Tab::Verify, "Verify Certificate") }
                </div>

                <div style={display_style(self.active_tab == Tab::Generate)}>
                    <GeneratorComponent service={self.service.clone()} />
                </div>
                <div style={display_style(self.active_tab == Tab::Verify)}>
                    <VerifierComponent service={self.service.clone()} />
                </div>
            </div>
        }
    }
}

fn display_style(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display: none;"
    }
}

/// Saved preference if any, otherwise the system color scheme.
fn saved_or_system_theme() -> String {
    let saved = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    if let Some(theme) = saved {
        return theme;
    }

    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark { "dark" } else { "light" }.to_string()
}

fn apply_theme(theme: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme);
    }
}

fn persist_theme(theme: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme);
    }
}
