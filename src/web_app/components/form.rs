// web_app/components/form.rs - Product creation form
//
// Binds one input per FormField to a ProductFormValues signal. Submitting
// POSTs the payload and follows whatever resolve_submission decides.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::config::CatalogConfig;
use crate::web_app::api::{HttpProductApi, ProductApi};
use crate::web_app::form::{
    resolve_submission, FormField, FormStatus, InputKind, ProductFormValues, SubmitResolution,
};
use crate::web_app::model::FieldErrors;

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-200 rounded-lg \
                           focus:ring-2 focus:ring-blue-100 focus:border-blue-500 outline-none";

/// One labelled input
#[component]
fn FormInput(
    field: FormField,
    values: RwSignal<ProductFormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let value = move || values.with(|values| values.get(field).to_string());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        values.update(|values| values.set(field, text));
    };
    let error = move || errors.with(|errors| errors.get(field.name()).cloned());

    let input = match field.input_kind() {
        InputKind::TextArea => view! {
            <textarea
                name=field.name()
                placeholder=field.placeholder()
                rows="4"
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        InputKind::Number => view! {
            <input
                type="number"
                step="any"
                name=field.name()
                placeholder=field.placeholder()
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        InputKind::Text => view! {
            <input
                type="text"
                name=field.name()
                placeholder=field.placeholder()
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="flex flex-col gap-1">
            <label class="text-sm font-medium text-gray-700">{field.placeholder()}</label>
            {input}
            {move || error().map(|message| view! {
                <p class="text-sm text-red-600">{message}</p>
            })}
        </div>
    }
}

/// Product creation form
#[component]
pub fn ProductForm(
    #[prop(default = "Submit")]
    submit_title: &'static str,
) -> impl IntoView {
    let config = use_context::<CatalogConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let values = RwSignal::new(ProductFormValues::default());
    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_submitting) {
            return;
        }
        status.set(FormStatus::Submitting);

        let payload = values.with_untracked(ProductFormValues::to_payload);
        let base_url = config.api_base_url.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let api = HttpProductApi::new(base_url);
            match resolve_submission(api.create(&payload).await) {
                SubmitResolution::Navigate { to, errors: field_errors } => {
                    if !field_errors.is_empty() {
                        tracing::warn!("Product rejected: {:?}", field_errors);
                    }
                    errors.set(field_errors);
                    status.set(FormStatus::Idle);
                    navigate(to, NavigateOptions::default());
                }
                SubmitResolution::Failed { message } => {
                    status.set(FormStatus::Failed(message.to_string()));
                }
            }
        });
    };

    let submitting = move || status.with(FormStatus::is_submitting);
    let failure = move || status.with(|status| status.message().map(str::to_string));

    view! {
        <form on:submit=on_submit class="bg-white rounded-2xl p-8 shadow-sm border border-gray-100 flex flex-col gap-5">
            {FormField::ALL
                .into_iter()
                .map(|field| view! { <FormInput field=field values=values errors=errors /> })
                .collect_view()}

            {move || failure().map(|message| view! {
                <p class="text-red-600 font-medium">{message}</p>
            })}

            <button
                type="submit"
                disabled=submitting
                class="px-8 py-3 bg-blue-600 text-white rounded-xl hover:bg-blue-700 \
                       disabled:opacity-50 disabled:cursor-not-allowed font-semibold shadow-md"
            >
                {move || if submitting() { "Submitting..." } else { submit_title }}
            </button>
        </form>
    }
}
