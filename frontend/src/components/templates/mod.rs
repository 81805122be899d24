//! Template catalog picker and customizer.
//!
//! Renders the filterable catalog grid and the customization controls.
//! Selecting a template loads its colors/font/border into the controls;
//! Apply merges the edited controls onto the selected template and hands the
//! result to the parent through the `on_apply` callback. The component never
//! mutates the catalog itself, only clones of its entries.

use common::catalog::{self, CategoryFilter};
use common::model::template::{Template, TemplateCategory, TemplateCustomization};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::generator::helpers::show_toast;

const FONTS: [&str; 4] = ["Inter", "Roboto", "Playfair Display", "Montserrat"];
const BORDERS: [&str; 3] = ["classic", "modern", "elegant"];

#[derive(Properties, PartialEq, Clone)]
pub struct TemplatePickerProps {
    /// Receives the customized template whenever the user applies it.
    pub on_apply: Callback<Template>,
}

pub enum Msg {
    SetFilter(CategoryFilter),
    Select(String),
    EditPrimaryColor(String),
    EditSecondaryColor(String),
    EditFont(String),
    EditBorder(String),
    Apply,
}

pub struct TemplatePickerComponent {
    catalog: Vec<Template>,
    filter: CategoryFilter,
    selected: Template,
    controls: TemplateCustomization,
    applied_md5: String,
}

impl TemplatePickerComponent {
    /// Fingerprint of control values, for the unapplied-changes dot.
    fn fingerprint(controls: &TemplateCustomization) -> String {
        let joined = format!(
            "{}|{}|{}|{}",
            controls.primary_color, controls.secondary_color, controls.font, controls.border
        );
        format!("{:x}", md5::compute(joined))
    }

    fn dirty(&self) -> bool {
        Self::fingerprint(&self.controls) != self.applied_md5
    }
}

impl Component for TemplatePickerComponent {
    type Message = Msg;
    type Properties = TemplatePickerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let catalog = catalog::builtin_templates();
        let selected = catalog[0].clone();
        let controls = TemplateCustomization::of(&selected);
        let applied_md5 = Self::fingerprint(&controls);
        TemplatePickerComponent {
            catalog,
            filter: CategoryFilter::All,
            selected,
            controls,
            applied_md5,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFilter(filter) => {
                self.filter = filter;
                true
            }
            Msg::Select(template_id) => {
                if let Some(template) = self.catalog.iter().find(|t| t.id == template_id) {
                    self.selected = template.clone();
                    self.controls = TemplateCustomization::of(&self.selected);
                }
                true
            }
            Msg::EditPrimaryColor(value) => {
                self.controls.primary_color = value;
                true
            }
            Msg::EditSecondaryColor(value) => {
                self.controls.secondary_color = value;
                true
            }
            Msg::EditFont(value) => {
                self.controls.font = value;
                true
            }
            Msg::EditBorder(value) => {
                self.controls.border = value;
                true
            }
            Msg::Apply => {
                let applied = self.selected.customized(&self.controls);
                self.applied_md5 = Self::fingerprint(&self.controls);
                ctx.props().on_apply.emit(applied);
                show_toast("Template customization applied successfully!");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <section class="template-picker">
                <div class="template-filters">
                    { self.filter_button(link, CategoryFilter::All, "All") }
                    { self.filter_button(link, CategoryFilter::Only(TemplateCategory::Academic), "Academic") }
                    { self.filter_button(link, CategoryFilter::Only(TemplateCategory::Professional), "Professional") }
                    { self.filter_button(link, CategoryFilter::Only(TemplateCategory::Creative), "Creative") }
                </div>

                <div class="templates-grid">
                    { for catalog::filter_templates(&self.catalog, self.filter)
                        .into_iter()
                        .map(|template| self.template_card(link, template)) }
                </div>

                { self.customization_controls(link) }
            </section>
        }
    }
}

impl TemplatePickerComponent {
    fn filter_button(
        &self,
        link: &Scope<Self>,
        filter: CategoryFilter,
        label: &str,
    ) -> Html {
        html! {
            <button
                class={classes!("filter-btn", (self.filter == filter).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetFilter(filter))}
            >
                { label }
            </button>
        }
    }

    fn template_card(&self, link: &Scope<Self>, template: Template) -> Html {
        let gradient = format!(
            "background: linear-gradient(135deg, {}, {});",
            template.primary_color, template.secondary_color
        );
        let template_id = template.id.clone();

        html! {
            <div
                class={classes!("template-item", (self.selected.id == template.id).then_some("active"))}
                onclick={link.callback(move |_| Msg::Select(template_id.clone()))}
            >
                <div class="template-swatch" style={gradient}>
                    <img src={template.thumbnail.clone()} alt={format!("{} Template", template.name)} />
                </div>
                <div class="template-overlay">
                    <span class="template-name">{ &template.name }</span>
                    <span class="template-category">{ template.category.as_str() }</span>
                </div>
            </div>
        }
    }

    fn customization_controls(&self, link: &Scope<Self>) -> Html {
        let color_input = |label: &str, value: &str, on_edit: Callback<InputEvent>| {
            html! {
                <label class="control">
                    { label }
                    <input type="color" value={value.to_string()} oninput={on_edit} />
                </label>
            }
        };

        html! {
            <div class="template-customization">
                { color_input(
                    "Primary color",
                    &self.controls.primary_color,
                    link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::EditPrimaryColor(input.value())
                    }),
                ) }
                { color_input(
                    "Secondary color",
                    &self.controls.secondary_color,
                    link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::EditSecondaryColor(input.value())
                    }),
                ) }

                <label class="control">
                    { "Font" }
                    <select
                        onchange={link.callback(|e: Event| {
                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                            Msg::EditFont(select.value())
                        })}
                    >
                        { for FONTS.iter().map(|font| html! {
                            <option value={*font} selected={self.controls.font == *font}>{ font }</option>
                        }) }
                    </select>
                </label>

                <div class="border-options">
                    { for BORDERS.iter().map(|border| {
                        let value = border.to_string();
                        html! {
                            <button
                                class={classes!("border-option", (self.controls.border == *border).then_some("active"))}
                                onclick={link.callback(move |_| Msg::EditBorder(value.clone()))}
                            >
                                { border }
                            </button>
                        }
                    }) }
                </div>

                <button class="btn-apply" onclick={link.callback(|_| Msg::Apply)}>
                    { "Apply Template" }
                    { if self.dirty() { html! { <span class="dirty-dot" title="Unapplied changes" /> } } else { html!{} } }
                </button>
            </div>
        }
    }
}
